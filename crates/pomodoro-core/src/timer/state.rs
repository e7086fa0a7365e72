//! Countdown state and its transitions.
//!
//! `TimerState` is a plain value. Every user action and every tick is a
//! transition on it; none of them touch scheduling or rendering.
//!
//! ## State Transitions
//!
//! ```text
//! Idle <-> Running            (toggle)
//! Running --tick--> Running   (time_left > 1)
//! Running --tick--> Idle      (phase boundary: Working -> Break -> Working)
//! any --reset/set_preset--> Idle, Working, full work duration
//! ```

use serde::Serialize;

use super::preset::{Phase, Preset};

/// Number of work+break cycles in a set. Completing the last one resets the timer.
pub const CYCLES_PER_SET: u8 = 4;

/// Announcement shown when a work phase ends.
pub const BREAK_MESSAGE: &str = "Work session complete. Time for a break!";

/// What a transition did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The call had no effect (e.g. a tick while idle).
    Unchanged,
    Toggled { is_active: bool },
    /// One second elapsed within the current phase.
    Ticked,
    /// A phase ran out and the next one is ready (timer paused).
    PhaseCompleted { completed: Phase, next: Phase },
    /// The last break of a set ran out; the timer is back at its reset state.
    SetCompleted,
    Reset,
    PresetChanged { preset: Preset },
}

/// Only built through [`TimerState::new`] and the transitions below, so the
/// bounds on `time_left` and `cycle_count` always hold. Serializable for
/// snapshots; never read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerState {
    preset: Preset,
    phase: Phase,
    /// Seconds remaining in the current phase.
    time_left: u32,
    is_active: bool,
    fill_percentage: f64,
    cycle_count: u8,
    message: String,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(Preset::default())
    }
}

impl TimerState {
    /// Initial work phase of `preset`, idle.
    pub fn new(preset: Preset) -> Self {
        Self {
            preset,
            phase: Phase::Working,
            time_left: preset.work_secs(),
            is_active: false,
            fill_percentage: 0.0,
            cycle_count: 0,
            message: String::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn preset(&self) -> Preset {
        self.preset
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_working(&self) -> bool {
        self.phase == Phase::Working
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn fill_percentage(&self) -> f64 {
        self.fill_percentage
    }

    pub fn cycle_count(&self) -> u8 {
        self.cycle_count
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Full length of the current phase in seconds.
    pub fn duration_secs(&self) -> u32 {
        self.preset.duration_secs(self.phase)
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.duration_secs().saturating_sub(self.time_left)
    }

    // ── Transitions ──────────────────────────────────────────────────

    pub fn toggle(&mut self) -> Transition {
        self.is_active = !self.is_active;
        Transition::Toggled {
            is_active: self.is_active,
        }
    }

    pub fn reset(&mut self) -> Transition {
        *self = Self::new(self.preset);
        Transition::Reset
    }

    /// Switch duration pair. Always lands on the new preset's reset state.
    pub fn set_preset(&mut self, preset: Preset) -> Transition {
        *self = Self::new(preset);
        Transition::PresetChanged { preset }
    }

    /// Advance one second.
    ///
    /// Ignored unless running with time left. Reaching zero completes the
    /// phase within the same call.
    pub fn tick(&mut self) -> Transition {
        if !self.is_active || self.time_left == 0 {
            return Transition::Unchanged;
        }

        self.time_left -= 1;
        if self.time_left > 0 {
            self.fill_percentage = fill_for(self.phase, self.elapsed_secs(), self.duration_secs());
            return Transition::Ticked;
        }

        let completed = self.phase;
        let next = self.completed_phase();
        let set_done = completed == Phase::Break && next.cycle_count == 0;
        *self = next;

        if set_done {
            Transition::SetCompleted
        } else {
            Transition::PhaseCompleted {
                completed,
                next: self.phase,
            }
        }
    }

    /// The state that follows the current phase running out.
    pub fn completed_phase(&self) -> TimerState {
        match self.phase {
            Phase::Working => Self {
                preset: self.preset,
                phase: Phase::Break,
                time_left: self.preset.break_secs(),
                is_active: false,
                fill_percentage: 100.0,
                cycle_count: self.cycle_count,
                message: BREAK_MESSAGE.to_string(),
            },
            Phase::Break => {
                let cycle_count = self.cycle_count.min(CYCLES_PER_SET - 1) + 1;
                if cycle_count >= CYCLES_PER_SET {
                    Self::new(self.preset)
                } else {
                    Self {
                        cycle_count,
                        ..Self::new(self.preset)
                    }
                }
            }
        }
    }
}

/// Working fills up with elapsed time; Break drains with it.
fn fill_for(phase: Phase, elapsed: u32, duration: u32) -> f64 {
    if duration == 0 {
        return 0.0;
    }
    let elapsed_pct = (f64::from(elapsed) / f64::from(duration) * 100.0).clamp(0.0, 100.0);
    match phase {
        Phase::Working => elapsed_pct,
        Phase::Break => 100.0 - elapsed_pct,
    }
}

//! Timer engine implementation.
//!
//! The engine owns a [`TimerState`] and a [`TickSource`]. It has no thread of
//! its own: whoever owns the loop waits on the tick source and calls `tick()`.
//! After every command the engine reconciles the subscription so that the
//! source is subscribed exactly while the countdown is running.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(Preset::Short, ManualTickSource::new());
//! engine.toggle();
//! // Once per second while engine.ticks().is_subscribed():
//! engine.tick(); // Returns Some(Event::PhaseCompleted) at a phase boundary
//! ```

use chrono::Utc;
use tracing::{debug, info};

use super::preset::Preset;
use super::state::{TimerState, Transition};
use super::tick_source::TickSource;
use crate::events::Event;

/// A user action forwarded by the presentation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Toggle,
    Reset,
    SelectPreset(Preset),
}

pub struct TimerEngine<S: TickSource> {
    state: TimerState,
    ticks: S,
}

impl<S: TickSource> TimerEngine<S> {
    /// Create an idle engine at the start of `preset`'s first work phase.
    pub fn new(preset: Preset, ticks: S) -> Self {
        Self::from_state(TimerState::new(preset), ticks)
    }

    /// Wrap an existing state. Subscribes right away if it is running.
    pub fn from_state(state: TimerState, ticks: S) -> Self {
        let mut engine = Self { state, ticks };
        engine.sync_ticks();
        engine
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn ticks(&self) -> &S {
        &self.ticks
    }

    pub fn ticks_mut(&mut self) -> &mut S {
        &mut self.ticks
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let s = &self.state;
        Event::StateSnapshot {
            preset: s.preset(),
            phase: s.phase(),
            is_active: s.is_active(),
            remaining_secs: s.time_left(),
            total_secs: s.duration_secs(),
            fill_percentage: s.fill_percentage(),
            cycle_count: s.cycle_count(),
            message: s.message().to_string(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn toggle(&mut self) -> Option<Event> {
        let transition = self.state.toggle();
        self.apply(transition)
    }

    pub fn reset(&mut self) -> Option<Event> {
        let transition = self.state.reset();
        self.apply(transition)
    }

    pub fn set_preset(&mut self, preset: Preset) -> Option<Event> {
        let transition = self.state.set_preset(preset);
        self.apply(transition)
    }

    /// Call once per tick-source tick. Stray ticks while idle are ignored.
    pub fn tick(&mut self) -> Option<Event> {
        let transition = self.state.tick();
        self.apply(transition)
    }

    pub fn dispatch(&mut self, intent: Intent) -> Option<Event> {
        match intent {
            Intent::Toggle => self.toggle(),
            Intent::Reset => self.reset(),
            Intent::SelectPreset(preset) => self.set_preset(preset),
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn apply(&mut self, transition: Transition) -> Option<Event> {
        self.sync_ticks();
        let s = &self.state;
        let at = Utc::now();
        match transition {
            Transition::Unchanged => None,
            Transition::Toggled { is_active: true } => Some(Event::TimerStarted {
                phase: s.phase(),
                remaining_secs: s.time_left(),
                at,
            }),
            Transition::Toggled { is_active: false } => Some(Event::TimerPaused {
                phase: s.phase(),
                remaining_secs: s.time_left(),
                at,
            }),
            Transition::Ticked => Some(Event::TimerTicked {
                remaining_secs: s.time_left(),
                fill_percentage: s.fill_percentage(),
                at,
            }),
            Transition::PhaseCompleted { completed, next } => {
                info!(?completed, ?next, cycle = s.cycle_count(), "phase completed");
                Some(Event::PhaseCompleted {
                    completed,
                    next,
                    cycle_count: s.cycle_count(),
                    message: s.message().to_string(),
                    at,
                })
            }
            Transition::SetCompleted => {
                info!(preset = %s.preset(), "cycle set completed, timer reset");
                Some(Event::SetCompleted {
                    preset: s.preset(),
                    at,
                })
            }
            Transition::Reset => {
                info!(preset = %s.preset(), "timer reset");
                Some(Event::TimerReset {
                    preset: s.preset(),
                    at,
                })
            }
            Transition::PresetChanged { preset } => {
                info!(%preset, "preset changed");
                Some(Event::PresetChanged { preset, at })
            }
        }
    }

    /// Subscribed iff running.
    fn sync_ticks(&mut self) {
        let running = self.state.is_active();
        if running && !self.ticks.is_subscribed() {
            debug!(remaining = self.state.time_left(), "subscribing to tick source");
            self.ticks.subscribe();
        } else if !running && self.ticks.is_subscribed() {
            debug!(remaining = self.state.time_left(), "releasing tick source");
            self.ticks.unsubscribe();
        }
    }
}

impl<S: TickSource> Drop for TimerEngine<S> {
    fn drop(&mut self) {
        self.ticks.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{ManualTickSource, Phase};
    use std::cell::Cell;
    use std::rc::Rc;

    fn engine() -> TimerEngine<ManualTickSource> {
        TimerEngine::new(Preset::Short, ManualTickSource::new())
    }

    #[test]
    fn toggle_acquires_and_releases_ticks() {
        let mut engine = engine();
        assert!(!engine.ticks().is_subscribed());

        assert!(matches!(engine.toggle(), Some(Event::TimerStarted { .. })));
        assert!(engine.ticks().is_subscribed());

        assert!(matches!(engine.toggle(), Some(Event::TimerPaused { .. })));
        assert!(!engine.ticks().is_subscribed());
        assert_eq!(engine.ticks().subscriptions(), 1);
        assert_eq!(engine.ticks().cancellations(), 1);
    }

    #[test]
    fn phase_boundary_releases_ticks() {
        let mut engine = engine();
        engine.toggle();
        let mut last = None;
        for _ in 0..Preset::Short.work_secs() {
            last = engine.tick();
        }
        match last {
            Some(Event::PhaseCompleted {
                completed,
                next,
                message,
                ..
            }) => {
                assert_eq!(completed, Phase::Working);
                assert_eq!(next, Phase::Break);
                assert!(!message.is_empty());
            }
            other => panic!("Expected PhaseCompleted, got {other:?}"),
        }
        assert!(!engine.ticks().is_subscribed());
    }

    #[test]
    fn reset_and_preset_release_ticks() {
        let mut engine = engine();
        engine.toggle();
        assert!(matches!(engine.reset(), Some(Event::TimerReset { .. })));
        assert!(!engine.ticks().is_subscribed());

        engine.toggle();
        assert!(matches!(
            engine.dispatch(Intent::SelectPreset(Preset::Long)),
            Some(Event::PresetChanged {
                preset: Preset::Long,
                ..
            })
        ));
        assert!(!engine.ticks().is_subscribed());
        assert_eq!(engine.state().time_left(), 7200);
    }

    #[test]
    fn stray_tick_emits_nothing() {
        let mut engine = engine();
        assert!(engine.tick().is_none());
        assert_eq!(engine.state().time_left(), 1500);
    }

    #[test]
    fn running_state_subscribes_on_construction() {
        let mut state = TimerState::new(Preset::Medium);
        state.toggle();
        let engine = TimerEngine::from_state(state, ManualTickSource::new());
        assert!(engine.ticks().is_subscribed());
    }

    struct SharedTicks(Rc<Cell<bool>>);

    impl TickSource for SharedTicks {
        fn subscribe(&mut self) {
            self.0.set(true);
        }
        fn unsubscribe(&mut self) {
            self.0.set(false);
        }
        fn is_subscribed(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn drop_releases_ticks() {
        let flag = Rc::new(Cell::new(false));
        let mut engine = TimerEngine::new(Preset::Short, SharedTicks(Rc::clone(&flag)));
        engine.toggle();
        assert!(flag.get());
        drop(engine);
        assert!(!flag.get());
    }

    #[test]
    fn snapshot_returns_valid_event() {
        let engine = engine();
        match engine.snapshot() {
            Event::StateSnapshot {
                preset,
                phase,
                is_active,
                remaining_secs,
                total_secs,
                ..
            } => {
                assert_eq!(preset, Preset::Short);
                assert_eq!(phase, Phase::Working);
                assert!(!is_active);
                assert_eq!(remaining_secs, 1500);
                assert_eq!(total_secs, 1500);
            }
            other => panic!("Expected StateSnapshot, got {other:?}"),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::timer::{Phase, Preset};

/// Every state change of the engine produces an Event.
/// The shell re-renders on them; the CLI prints them as JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        phase: Phase,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        phase: Phase,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// One second elapsed.
    TimerTicked {
        remaining_secs: u32,
        fill_percentage: f64,
        at: DateTime<Utc>,
    },
    /// A phase ran out; the next one is loaded and paused.
    PhaseCompleted {
        completed: Phase,
        next: Phase,
        cycle_count: u8,
        message: String,
        at: DateTime<Utc>,
    },
    /// The fourth cycle finished and the timer reset itself.
    SetCompleted {
        preset: Preset,
        at: DateTime<Utc>,
    },
    TimerReset {
        preset: Preset,
        at: DateTime<Utc>,
    },
    PresetChanged {
        preset: Preset,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        preset: Preset,
        phase: Phase,
        is_active: bool,
        remaining_secs: u32,
        total_secs: u32,
        fill_percentage: f64,
        cycle_count: u8,
        message: String,
        at: DateTime<Utc>,
    },
}

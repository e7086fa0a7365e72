mod engine;
mod preset;
mod state;
mod tick_source;

pub use engine::{Intent, TimerEngine};
pub use preset::{Phase, Preset, UnknownPreset};
pub use state::{TimerState, Transition, BREAK_MESSAGE, CYCLES_PER_SET};
pub use tick_source::{IntervalTickSource, ManualTickSource, TickSource, TICK_PERIOD};

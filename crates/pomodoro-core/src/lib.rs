//! # Pomodoro Core Library
//!
//! Business logic for a single Pomodoro widget: alternating work and break
//! countdowns over one of three fixed presets, four cycles to a set.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a plain [`TimerState`] mutated by pure transitions,
//!   wrapped by [`TimerEngine`] which holds the tick-source subscription
//! - **Tick sources**: [`TickSource`] implementations; the engine subscribes
//!   while running and unsubscribes on every other path
//! - **View**: [`TimerView`], a stateless projection of the state for renderers
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core timer state machine
//! - [`TimerView`]: Presentation model
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod storage;
pub mod timer;
pub mod view;

pub use error::{ConfigError, CoreError};
pub use events::Event;
pub use storage::Config;
pub use timer::{
    Intent, IntervalTickSource, ManualTickSource, Phase, Preset, TickSource, TimerEngine,
    TimerState, Transition,
};
pub use view::TimerView;

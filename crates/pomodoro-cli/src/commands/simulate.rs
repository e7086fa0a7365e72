use clap::Args;
use pomodoro_core::{Config, Event, ManualTickSource, Preset, TimerEngine};
use serde::Serialize;

#[derive(Args)]
pub struct SimulateArgs {
    /// Preset to start from (defaults to timer.default_preset)
    #[arg(long)]
    preset: Option<Preset>,
    /// Start the countdown before delivering ticks
    #[arg(long)]
    start: bool,
    /// Number of one-second ticks to deliver
    #[arg(long, default_value_t = 0)]
    ticks: u32,
    /// Resume automatically after every phase boundary
    #[arg(long)]
    auto_resume: bool,
    /// Also print every event except plain ticks
    #[arg(long)]
    events: bool,
}

#[derive(Serialize)]
struct SimulationReport {
    events: Vec<Event>,
    snapshot: Event,
}

/// Drive the engine with a hand-cranked tick source and report where it ends up.
pub fn run(args: SimulateArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let preset = args.preset.unwrap_or(config.timer.default_preset);
    let mut engine = TimerEngine::new(preset, ManualTickSource::new());
    let mut events = Vec::new();

    if args.start {
        events.extend(engine.toggle());
    }

    for _ in 0..args.ticks {
        match engine.tick() {
            Some(Event::TimerTicked { .. }) | None => {}
            Some(event) => {
                let boundary = matches!(
                    event,
                    Event::PhaseCompleted { .. } | Event::SetCompleted { .. }
                );
                events.push(event);
                if boundary && args.auto_resume {
                    events.extend(engine.toggle());
                }
            }
        }
    }
    tracing::debug!(
        preset = %preset,
        ticks = args.ticks,
        remaining = engine.state().time_left(),
        "simulation finished"
    );

    let snapshot = engine.snapshot();
    if args.events {
        let report = SimulationReport { events, snapshot };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}

use clap::Args;
use pomodoro_core::{Config, Preset, TimerState, TimerView};

#[derive(Args)]
pub struct RenderArgs {
    /// Preset to render (defaults to timer.default_preset)
    #[arg(long)]
    preset: Option<Preset>,
    /// Seconds already elapsed in the first work phase (below its duration); the timer is shown running
    #[arg(long, default_value_t = 0)]
    elapsed: u32,
    /// Print the view model as JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn run(args: RenderArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let preset = args.preset.unwrap_or(config.timer.default_preset);
    if args.elapsed >= preset.work_secs() {
        return Err(format!(
            "--elapsed must be below the {} work duration ({}s)",
            preset,
            preset.work_secs()
        )
        .into());
    }

    let mut state = TimerState::new(preset);
    if args.elapsed > 0 {
        state.toggle();
        for _ in 0..args.elapsed {
            state.tick();
        }
    }

    let view = TimerView::from_state(&state);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.to_text());
    }
    Ok(())
}

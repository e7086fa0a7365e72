use pomodoro_core::{Config, Preset};

use crate::tui;

/// Mount the widget full-screen until the user quits.
pub fn run(preset: Option<Preset>, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let preset = preset.unwrap_or(config.timer.default_preset);
    tracing::info!(%preset, "mounting timer widget");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let mut terminal = tui::init()?;
    let result = runtime.block_on(tui::app::run(&mut terminal, preset, &config.ui));
    tui::restore()?;

    tracing::info!("timer widget unmounted");
    result
}

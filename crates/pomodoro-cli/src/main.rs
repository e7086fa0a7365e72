use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use pomodoro_core::{Config, Preset};

mod commands;
mod logging;
mod tui;

#[derive(Parser)]
#[command(name = "pomodoro", version, about = "Pomodoro work/break timer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the timer widget full-screen
    Run {
        /// Preset to mount with (short, medium, long)
        #[arg(long)]
        preset: Option<Preset>,
    },
    /// Drive the timer with synthetic ticks and print the resulting state
    Simulate(commands::simulate::SimulateArgs),
    /// Print the widget as text
    Render(commands::render::RenderArgs),
    /// List the duration presets
    Presets,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let target = match cli.command {
        Commands::Run { .. } => logging::Target::File(config.log_path()?),
        _ => logging::Target::Stderr,
    };
    logging::init(&config.log, target)?;

    match cli.command {
        Commands::Run { preset } => commands::run::run(preset, &config),
        Commands::Simulate(args) => commands::simulate::run(args, &config),
        Commands::Render(args) => commands::render::run(args, &config),
        Commands::Presets => commands::presets::run(),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "pomodoro", &mut std::io::stdout());
            Ok(())
        }
    }
}

use clap::{CommandFactory, Parser, Subcommand};
use countdown_core::Config;

mod commands;

#[derive(Parser)]
#[command(name = "countdown", version, about = "Countdown Widget CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Countdown(commands::countdown::CountdownAction),
    /// Render a display surface from the shared container
    Widget(commands::widget::WidgetArgs),
    /// List countdowns selectable for a display surface
    Picker(commands::picker::PickerArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate for
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: using default config: {e}");
            Config::default()
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    let result = match cli.command {
        Commands::Countdown(action) => commands::countdown::run(action, &config),
        Commands::Widget(args) => commands::widget::run(args, &config),
        Commands::Picker(args) => commands::picker::run(args, &config),
        Commands::Config { action } => commands::config::run(action, &config),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "countdown", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

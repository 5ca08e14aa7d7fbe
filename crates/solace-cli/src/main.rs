use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "solace-cli", version, about = "Solace CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Journal entries and streaks
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Chat and message management
    Chat {
        #[command(subcommand)]
        action: commands::chat::ChatAction,
    },
    /// Expired-message cleanup
    Sweep {
        #[command(subcommand)]
        action: commands::sweep::SweepAction,
    },
    /// Mood statistics and matching
    Mood {
        #[command(subcommand)]
        action: commands::mood::MoodAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Chat { action } => commands::chat::run(action),
        Commands::Sweep { action } => commands::sweep::run(action),
        Commands::Mood { action } => commands::mood::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

use clap::Subcommand;
use solace_core::chat::RetentionPeriod;
use solace_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Enable or disable streak warnings
    StreakWarnings {
        /// true or false
        enabled: bool,
    },
    /// Set the default retention for new chats
    DefaultRetention {
        /// Period: 24h, 1week, 1month, forever
        period: String,
    },
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::StreakWarnings { enabled } => {
            let mut config = Config::load()?;
            config.notifications.streak_warnings = enabled;
            config.save()?;
            println!("ok");
        }
        ConfigAction::DefaultRetention { period } => {
            let period: RetentionPeriod = period.parse()?;
            let mut config = Config::load()?;
            config.chat.default_retention = period;
            config.save()?;
            println!("ok");
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}

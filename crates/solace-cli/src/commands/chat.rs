use chrono::Utc;
use clap::Subcommand;
use solace_core::chat::{Chat, Message, MessageAuthor, RetentionPeriod};
use solace_core::{Config, Database};

#[derive(Subcommand)]
pub enum ChatAction {
    /// Create a chat between participants
    Create {
        /// Participant user ids (at least two)
        #[arg(num_args = 2..)]
        participants: Vec<String>,
    },
    /// List all chat ids
    List,
    /// Send a message to a chat
    Send {
        /// Chat id
        chat: String,
        /// Sender user id
        user: String,
        /// Message text
        text: String,
        /// Sender display name
        #[arg(long)]
        name: Option<String>,
    },
    /// List a chat's messages, oldest first
    Messages {
        /// Chat id
        chat: String,
    },
    /// Show or change a chat's retention period
    Retention {
        /// Chat id
        chat: String,
        /// New period (24h, 1week, 1month, forever); omit to show current
        period: Option<String>,
    },
    /// List the available retention tiers
    Tiers,
}

pub fn run(action: ChatAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ChatAction::Create { participants } => {
            let db = Database::open()?;
            let config = Config::load()?;
            let mut chat = Chat::new(participants, Utc::now());
            chat.message_retention = config.chat.default_retention;
            db.insert_chat(&chat)?;
            println!("{}", serde_json::to_string_pretty(&chat)?);
        }
        ChatAction::List => {
            let db = Database::open()?;
            let ids = db.chat_ids()?;
            println!("{}", serde_json::to_string_pretty(&ids)?);
        }
        ChatAction::Send {
            chat,
            user,
            text,
            name,
        } => {
            let db = Database::open()?;
            let author = MessageAuthor {
                name: name.unwrap_or_else(|| user.clone()),
                id: user,
                avatar: None,
            };
            let message = Message::new(author, text, Utc::now());
            db.insert_message(&chat, &message)?;
            println!("{}", serde_json::to_string_pretty(&message)?);
        }
        ChatAction::Messages { chat } => {
            let db = Database::open()?;
            let messages = db.messages_for_chat(&chat)?;
            println!("{}", serde_json::to_string_pretty(&messages)?);
        }
        ChatAction::Retention { chat, period } => {
            let db = Database::open()?;
            if let Some(period) = period {
                let period: RetentionPeriod = period.parse()?;
                db.set_retention(&chat, period)?;
            }
            let period = db.retention_of(&chat)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&tier_json(period))?
            );
        }
        ChatAction::Tiers => {
            let tiers: Vec<serde_json::Value> =
                RetentionPeriod::ALL.iter().map(|p| tier_json(*p)).collect();
            println!("{}", serde_json::to_string_pretty(&tiers)?);
        }
    }
    Ok(())
}

fn tier_json(period: RetentionPeriod) -> serde_json::Value {
    serde_json::json!({
        "value": period.as_str(),
        "label": period.label(),
        "description": period.description(),
        "icon": period.icon(),
        "duration_ms": period.duration_ms(),
    })
}

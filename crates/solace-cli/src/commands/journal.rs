use chrono::Utc;
use clap::Subcommand;
use solace_core::journal::{compute_streak, instant_from_millis, JournalEntry, ReminderCheck};
use solace_core::{Config, Database, MoodType};

#[derive(Subcommand)]
pub enum JournalAction {
    /// Add an entry
    Add {
        /// User id
        user: String,
        /// Mood: happy, excited, neutral, sad, stressed
        mood: String,
        /// Entry text
        #[arg(default_value = "")]
        note: String,
        /// Hide the author on shared surfaces
        #[arg(long)]
        anonymous: bool,
    },
    /// List a user's entries, most recent first
    List {
        /// User id
        user: String,
    },
    /// Streak statistics for a user
    Streak {
        /// User id
        user: String,
    },
    /// Check whether a streak warning is currently due
    Reminder {
        /// User id
        user: String,
    },
}

pub fn run(action: JournalAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        JournalAction::Add {
            user,
            mood,
            note,
            anonymous,
        } => {
            let mood: MoodType = mood.parse()?;
            let mut entry = JournalEntry::new(&user, mood, note, Utc::now());
            entry.is_anonymous = anonymous;
            db.insert_journal(&entry)?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        JournalAction::List { user } => {
            let entries = db.journals_for_user(&user)?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        JournalAction::Streak { user } => {
            let entries = db.journals_for_user(&user)?;
            let data = compute_streak(&entries, Utc::now())?;
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        JournalAction::Reminder { user } => {
            let config = Config::load()?;
            let entries = db.journals_for_user(&user)?;
            // Entries come back most recent first
            let last_entry_at = entries.first().and_then(|e| instant_from_millis(e.created_at));
            let warning =
                ReminderCheck::new().check(&config.reminder_preferences(), last_entry_at, Utc::now());
            println!("{}", serde_json::to_string_pretty(&warning)?);
        }
    }
    Ok(())
}

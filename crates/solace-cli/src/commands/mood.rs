use clap::Subcommand;
use solace_core::mood::{average_mood, compatibility_score, match_reason, MoodSummary};
use solace_core::{Database, MoodType};

#[derive(Subcommand)]
pub enum MoodAction {
    /// Mood summary for a user's journal history
    Stats {
        /// User id
        user: String,
    },
    /// Mood compatibility between two users
    Match {
        /// User id
        user: String,
        /// Other user id
        other: String,
    },
    /// List mood metadata
    List,
}

pub fn run(action: MoodAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MoodAction::Stats { user } => {
            let db = Database::open()?;
            let moods = user_moods(&db, &user)?;
            let summary = MoodSummary::from_moods(&moods);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        MoodAction::Match { user, other } => {
            let db = Database::open()?;
            let my_average = average_mood(&user_moods(&db, &user)?);
            let other_average = average_mood(&user_moods(&db, &other)?);
            let score = compatibility_score(my_average, other_average);
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "score": score,
                    "reason": match_reason(score),
                    "my_average": my_average,
                    "other_average": other_average,
                }))?
            );
        }
        MoodAction::List => {
            let moods: Vec<serde_json::Value> = MoodType::ALL
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "value": m.as_str(),
                        "label": m.label(),
                        "icon": m.icon(),
                        "color": m.color(),
                        "score": m.score(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&moods)?);
        }
    }
    Ok(())
}

fn user_moods(db: &Database, user: &str) -> Result<Vec<MoodType>, Box<dyn std::error::Error>> {
    let entries = db.journals_for_user(user)?;
    Ok(entries.iter().map(|e| e.mood).collect())
}

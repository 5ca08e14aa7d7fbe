//! SQLite-based journal and chat storage.
//!
//! Provides persistent storage for:
//! - Journal entries (streak input)
//! - Chats, their retention settings, and messages (sweep input)
//!
//! The pure bookkeeping functions never touch this store; they receive
//! its data as arguments. The async [`ChatStore`] seam for the
//! retention sweeper is implemented on `tokio::sync::Mutex<Database>`,
//! since a rusqlite connection cannot be shared between tasks directly.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use crate::chat::{Chat, ChatStore, LastMessage, Message, MessageAuthor, RetentionPeriod};
use crate::error::{DatabaseError, Result};
use crate::journal::JournalEntry;
use crate::mood::MoodType;

use super::data_dir;

/// SQLite database for journal and chat storage.
pub struct Database {
    conn: Connection,
}

fn text_conversion_error(
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `~/.config/solace/solace.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("solace.db");
        let conn = Connection::open(&path).map_err(|source| DatabaseError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|source| DatabaseError::OpenFailed {
                path: ":memory:".into(),
                source,
            })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS journals (
                    id            TEXT PRIMARY KEY,
                    user_id       TEXT NOT NULL,
                    mood          TEXT NOT NULL,
                    note          TEXT NOT NULL DEFAULT '',
                    audio_url     TEXT,
                    audio_duration_secs INTEGER,
                    created_at    INTEGER NOT NULL,
                    date_string   TEXT NOT NULL,
                    is_anonymous  INTEGER NOT NULL DEFAULT 0,
                    pinned        INTEGER NOT NULL DEFAULT 0
                );

                CREATE TABLE IF NOT EXISTS chats (
                    id                TEXT PRIMARY KEY,
                    participants      TEXT NOT NULL,
                    last_message      TEXT,
                    unread_count      TEXT NOT NULL DEFAULT '{}',
                    created_at        INTEGER NOT NULL,
                    updated_at        INTEGER NOT NULL,
                    is_group          INTEGER NOT NULL DEFAULT 0,
                    group_name        TEXT,
                    group_avatar      TEXT,
                    message_retention TEXT NOT NULL DEFAULT 'forever'
                );

                CREATE TABLE IF NOT EXISTS messages (
                    id          TEXT PRIMARY KEY,
                    chat_id     TEXT NOT NULL REFERENCES chats(id),
                    user_id     TEXT NOT NULL,
                    user_name   TEXT NOT NULL DEFAULT '',
                    user_avatar TEXT,
                    text        TEXT NOT NULL DEFAULT '',
                    image       TEXT,
                    video       TEXT,
                    system      INTEGER NOT NULL DEFAULT 0,
                    created_at  INTEGER NOT NULL
                );

                -- Streak queries scan one user's entries by recency;
                -- sweeps scan one chat's messages by age.
                CREATE INDEX IF NOT EXISTS idx_journals_user_created
                    ON journals(user_id, created_at);
                CREATE INDEX IF NOT EXISTS idx_messages_chat_created
                    ON messages(chat_id, created_at);",
            )
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))
    }

    /// Insert a journal entry.
    pub fn insert_journal(&self, entry: &JournalEntry) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO journals (id, user_id, mood, note, audio_url, audio_duration_secs,
                                   created_at, date_string, is_anonymous, pinned)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                entry.id,
                entry.user_id,
                entry.mood.as_str(),
                entry.note,
                entry.audio_url,
                entry.audio_duration_secs,
                entry.created_at,
                entry.date_string,
                entry.is_anonymous,
                entry.pinned,
            ],
        )?;
        Ok(())
    }

    /// All journal entries for a user, most recent first.
    pub fn journals_for_user(&self, user_id: &str) -> Result<Vec<JournalEntry>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, mood, note, audio_url, audio_duration_secs,
                    created_at, date_string, is_anonymous, pinned
             FROM journals WHERE user_id = ?1
             ORDER BY created_at DESC",
        )?;

        let rows = stmt.query_map(params![user_id], |row| {
            let mood: String = row.get(2)?;
            Ok(JournalEntry {
                id: row.get(0)?,
                user_id: row.get(1)?,
                mood: mood.parse::<MoodType>().map_err(text_conversion_error)?,
                note: row.get(3)?,
                audio_url: row.get(4)?,
                audio_duration_secs: row.get(5)?,
                created_at: row.get(6)?,
                date_string: row.get(7)?,
                is_anonymous: row.get(8)?,
                pinned: row.get(9)?,
            })
        })?;

        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Insert a chat.
    pub fn insert_chat(&self, chat: &Chat) -> Result<(), DatabaseError> {
        let participants = serde_json::to_string(&chat.participants)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        let last_message = chat
            .last_message
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        let unread_count = serde_json::to_string(&chat.unread_count)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        self.conn.execute(
            "INSERT INTO chats (id, participants, last_message, unread_count, created_at,
                                updated_at, is_group, group_name, group_avatar, message_retention)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                chat.id,
                participants,
                last_message,
                unread_count,
                chat.created_at,
                chat.updated_at,
                chat.is_group,
                chat.group_name,
                chat.group_avatar,
                chat.message_retention.as_str(),
            ],
        )?;
        Ok(())
    }

    /// Load a chat by id.
    pub fn chat(&self, chat_id: &str) -> Result<Option<Chat>, DatabaseError> {
        self.conn
            .query_row(
                "SELECT id, participants, last_message, unread_count, created_at,
                        updated_at, is_group, group_name, group_avatar, message_retention
                 FROM chats WHERE id = ?1",
                params![chat_id],
                |row| {
                    let participants: String = row.get(1)?;
                    let last_message: Option<String> = row.get(2)?;
                    let unread_count: String = row.get(3)?;
                    let retention: String = row.get(9)?;
                    Ok(Chat {
                        id: row.get(0)?,
                        participants: serde_json::from_str(&participants)
                            .map_err(text_conversion_error)?,
                        last_message: last_message
                            .map(|raw| serde_json::from_str::<LastMessage>(&raw))
                            .transpose()
                            .map_err(text_conversion_error)?,
                        unread_count: serde_json::from_str(&unread_count)
                            .map_err(text_conversion_error)?,
                        created_at: row.get(4)?,
                        updated_at: row.get(5)?,
                        is_group: row.get(6)?,
                        group_name: row.get(7)?,
                        group_avatar: row.get(8)?,
                        message_retention: retention
                            .parse::<RetentionPeriod>()
                            .map_err(text_conversion_error)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// Ids of all chats, oldest first.
    pub fn chat_ids(&self) -> Result<Vec<String>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM chats ORDER BY created_at")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Change a chat's retention period. Takes effect on future sweeps
    /// only; nothing already deleted comes back.
    pub fn set_retention(
        &self,
        chat_id: &str,
        period: RetentionPeriod,
    ) -> Result<(), DatabaseError> {
        let changed = self.conn.execute(
            "UPDATE chats SET message_retention = ?1 WHERE id = ?2",
            params![period.as_str(), chat_id],
        )?;
        if changed == 0 {
            return Err(DatabaseError::UnknownChat(chat_id.to_string()));
        }
        Ok(())
    }

    /// A chat's configured retention period.
    pub fn retention_of(&self, chat_id: &str) -> Result<RetentionPeriod, DatabaseError> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT message_retention FROM chats WHERE id = ?1",
                params![chat_id],
                |row| row.get(0),
            )
            .optional()?;
        match raw {
            None => Err(DatabaseError::UnknownChat(chat_id.to_string())),
            Some(raw) => raw
                .parse::<RetentionPeriod>()
                .map_err(|e| DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// Append a message to a chat and refresh the chat's preview.
    pub fn insert_message(&self, chat_id: &str, message: &Message) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO messages (id, chat_id, user_id, user_name, user_avatar,
                                   text, image, video, system, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                message.id,
                chat_id,
                message.user.id,
                message.user.name,
                message.user.avatar,
                message.text,
                message.image,
                message.video,
                message.system,
                message.created_at,
            ],
        )?;

        let preview = serde_json::to_string(&LastMessage {
            text: message.text.clone(),
            created_at: message.created_at,
            user_id: message.user.id.clone(),
        })
        .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        self.conn.execute(
            "UPDATE chats SET last_message = ?1, updated_at = ?2 WHERE id = ?3",
            params![preview, message.created_at, chat_id],
        )?;
        Ok(())
    }

    /// All messages in a chat, oldest first.
    pub fn messages_for_chat(&self, chat_id: &str) -> Result<Vec<Message>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, user_name, user_avatar, text, image, video, system, created_at
             FROM messages WHERE chat_id = ?1
             ORDER BY created_at",
        )?;

        let rows = stmt.query_map(params![chat_id], |row| {
            Ok(Message {
                id: row.get(0)?,
                user: MessageAuthor {
                    id: row.get(1)?,
                    name: row.get(2)?,
                    avatar: row.get(3)?,
                },
                text: row.get(4)?,
                image: row.get(5)?,
                video: row.get(6)?,
                system: row.get(7)?,
                created_at: row.get(8)?,
            })
        })?;

        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Delete one message. Returns whether a row was actually removed;
    /// deleting an already-deleted message is a no-op.
    pub fn delete_message(&self, chat_id: &str, message_id: &str) -> Result<bool, DatabaseError> {
        let deleted = self.conn.execute(
            "DELETE FROM messages WHERE chat_id = ?1 AND id = ?2",
            params![chat_id, message_id],
        )?;
        Ok(deleted > 0)
    }
}

#[async_trait]
impl ChatStore for tokio::sync::Mutex<Database> {
    async fn chat_ids(&self) -> Result<Vec<String>> {
        Ok(self.lock().await.chat_ids()?)
    }

    async fn retention_of(&self, chat_id: &str) -> Result<RetentionPeriod> {
        Ok(self.lock().await.retention_of(chat_id)?)
    }

    async fn messages(&self, chat_id: &str) -> Result<Vec<Message>> {
        Ok(self.lock().await.messages_for_chat(chat_id)?)
    }

    async fn delete_message(&self, chat_id: &str, message_id: &str) -> Result<()> {
        self.lock().await.delete_message(chat_id, message_id)?;
        Ok(())
    }
}

//! SQLite-backed store for review events.
//!
//! Each event is kept as its JSON document next to the card it belongs to.
//! The store is the authority on time: saving an event overwrites whatever
//! timestamp the client stamped with the store clock's value.

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::models::ReviewEvent;
use crate::models::document::{from_document, to_document};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use tracing::debug;

pub struct ReviewStore {
    conn: Connection,
}

impl ReviewStore {
    /// Opens (or creates) the database file and its tables.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening review store");
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS review_events (
                key TEXT PRIMARY KEY,
                card_key TEXT NOT NULL,
                timestamp INTEGER NOT NULL,
                document TEXT NOT NULL
            )",
            (),
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS review_events_by_card
             ON review_events (card_key, timestamp)",
            (),
        )?;

        Ok(Self { conn })
    }

    /// Writes the event and returns its key.
    ///
    /// A key is generated when the event has none; an existing key is
    /// overwritten. The event's timestamp is replaced by `clock`'s value
    /// both in the store and in `event`. On error `event` is left untouched.
    pub fn save(&self, event: &mut ReviewEvent, clock: &impl Clock) -> Result<String> {
        let mut committed = event.clone();
        if committed.key().is_none() {
            committed
                .model_mut()
                .set_key(uuid::Uuid::new_v4().to_string());
        }
        committed.set_timestamp(clock.current_time_millis());

        let key = write_event(&self.conn, &committed)?;
        *event = committed;
        Ok(key)
    }

    /// Writes an event exactly as given, keeping its timestamp. Used when
    /// loading history that was already committed elsewhere.
    pub fn restore(&self, event: &ReviewEvent) -> Result<String> {
        write_event(&self.conn, event)
    }

    /// Restores a batch of events in one transaction. Either every event is
    /// written or none is.
    pub fn restore_all(&mut self, events: &[ReviewEvent]) -> Result<Vec<String>> {
        let tx = self.conn.transaction()?;
        let keys = events
            .iter()
            .map(|event| write_event(&tx, event))
            .collect::<Result<Vec<_>>>()?;
        tx.commit()?;

        debug!(count = keys.len(), "restored review events");
        Ok(keys)
    }

    pub fn get(&self, key: &str) -> Result<Option<ReviewEvent>> {
        let row = self
            .conn
            .query_row(
                "SELECT card_key, document FROM review_events WHERE key = ?1",
                params![key],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        match row {
            Some((card_key, document)) => Ok(Some(decode(key, &card_key, &document)?)),
            None => Ok(None),
        }
    }

    /// Review history of a card, oldest first.
    pub fn list_for_card(&self, card_key: &str) -> Result<Vec<ReviewEvent>> {
        let mut stmt = self.conn.prepare(
            "SELECT key, document FROM review_events
             WHERE card_key = ?1
             ORDER BY timestamp ASC, key ASC",
        )?;

        let rows = stmt
            .query_map(params![card_key], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<rusqlite::Result<Vec<(String, String)>>>()?;

        let events = rows
            .iter()
            .map(|(key, document)| decode(key, card_key, document))
            .collect::<Result<Vec<_>>>()?;

        debug!(%card_key, count = events.len(), "loaded review events");
        Ok(events)
    }

    /// Removes the whole history of a card. Returns the number of events deleted.
    pub fn delete_for_card(&self, card_key: &str) -> Result<usize> {
        let deleted = self.conn.execute(
            "DELETE FROM review_events WHERE card_key = ?1",
            params![card_key],
        )?;
        debug!(%card_key, deleted, "deleted review events");
        Ok(deleted)
    }
}

/// Upserts one event row. Requires a card and a timestamp; a key is generated
/// when the event has none.
fn write_event(conn: &Connection, event: &ReviewEvent) -> Result<String> {
    let card_key = event.card_key().ok_or(Error::MissingParent)?;
    let timestamp = event.timestamp().ok_or(Error::Document {
        field: "timestamp",
        expected: "an integer",
    })?;
    let key = event
        .key()
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let document = serde_json::to_string(&to_document(event))?;

    conn.execute(
        "INSERT OR REPLACE INTO review_events (key, card_key, timestamp, document)
         VALUES (?1, ?2, ?3, ?4)",
        params![key, card_key, timestamp, document],
    )?;

    debug!(%key, %card_key, timestamp, "wrote review event");
    Ok(key)
}

fn decode(key: &str, card_key: &str, document: &str) -> Result<ReviewEvent> {
    let value: serde_json::Value = serde_json::from_str(document)?;
    from_document(key, card_key, &value)
}

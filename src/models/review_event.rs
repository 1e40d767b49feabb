//! A single review of a card: the level the card had before the review, what
//! the user answered, and when it happened.
use super::{Card, Model, ParentRef};
use crate::clock::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const REPLY_YES: &str = "Y";
pub const REPLY_NO: &str = "N";

pub(crate) const CARD_KIND: &str = "card";

/// Fields are unset in [`ReviewEvent::default`], which is the empty state
/// documents are decoded into.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEvent {
    #[serde(flatten)]
    model: Model,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    level_before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<i64>,
}

impl ReviewEvent {
    /// Creates an event for `card`, stamped with the client's idea of the
    /// current time. The store replaces the timestamp when the event is saved.
    pub fn new(card: &Card, clock: &impl Clock) -> Self {
        let parent = card.key().map(|key| ParentRef::new(CARD_KIND, key));
        Self {
            model: Model::new(parent),
            level_before: None,
            reply: None,
            timestamp: Some(clock.current_time_millis()),
        }
    }

    /// Like [`ReviewEvent::new`], with `level_before` taken from the card's
    /// current level.
    pub fn with_level_of(card: &Card, clock: &impl Clock) -> Self {
        let mut event = Self::new(card, clock);
        event.set_level_before(card.level.clone());
        event
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    pub fn key(&self) -> Option<&str> {
        self.model.key()
    }

    pub fn card_key(&self) -> Option<&str> {
        self.model
            .parent()
            .filter(|parent| parent.kind == CARD_KIND)
            .map(|parent| parent.key.as_str())
    }

    pub fn level_before(&self) -> Option<&str> {
        self.level_before.as_deref()
    }

    pub fn set_level_before(&mut self, level_before: impl Into<String>) {
        self.level_before = Some(level_before.into());
    }

    pub fn reply(&self) -> Option<&str> {
        self.reply.as_deref()
    }

    /// Usually [`REPLY_YES`] or [`REPLY_NO`], but any string is kept as is.
    pub fn set_reply(&mut self, reply: impl Into<String>) {
        self.reply = Some(reply.into());
    }

    pub fn is_positive_reply(&self) -> bool {
        self.reply() == Some(REPLY_YES)
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: i64) {
        self.timestamp = Some(timestamp);
    }
}

fn quoted_or_null(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("'{}'", v),
        None => "null".to_string(),
    }
}

impl fmt::Display for ReviewEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ReviewEvent{{{}, levelBefore={}, reply={}, timestamp={}}}",
            self.model,
            quoted_or_null(self.level_before()),
            quoted_or_null(self.reply()),
            self.timestamp
                .map_or_else(|| "null".to_string(), |t| t.to_string()),
        )
    }
}

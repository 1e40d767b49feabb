//! Card is a flashcard a review event points back to. Only the fields needed
//! to describe a review live here; scheduling is done elsewhere.
use super::{Model, ParentRef};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LEVEL: &str = "L0";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(flatten)]
    pub model: Model,
    pub front: String,
    pub back: String,
    pub level: String,
    pub repeat_at: i64,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            model: Model::default(),
            front: front.into(),
            back: back.into(),
            level: DEFAULT_LEVEL.to_string(),
            repeat_at: 0,
        }
    }

    /// A card known only by its key, at the default level.
    pub fn reference(key: impl Into<String>) -> Self {
        Self::new("", "").with_key(key)
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.model.set_key(key);
        self
    }

    pub fn in_deck(mut self, deck_key: impl Into<String>) -> Self {
        self.model.set_parent(Some(ParentRef::new("deck", deck_key)));
        self
    }

    pub fn key(&self) -> Option<&str> {
        self.model.key()
    }
}

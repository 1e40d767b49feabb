//! Identity and parent association shared by stored entities.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-owning reference to the entity a model belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    pub kind: String,
    pub key: String,
}

impl ParentRef {
    pub fn new(kind: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for ParentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.key)
    }
}

/// Embedded by [`Card`](super::Card) and [`ReviewEvent`](super::ReviewEvent).
/// The key stays `None` until the store assigns one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<ParentRef>,
}

impl Model {
    pub fn new(parent: Option<ParentRef>) -> Self {
        Self { key: None, parent }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = Some(key.into());
    }

    pub fn parent(&self) -> Option<&ParentRef> {
        self.parent.as_ref()
    }

    pub fn set_parent(&mut self, parent: Option<ParentRef>) {
        self.parent = parent;
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "Model{{key='{}', parent=", key)?,
            None => write!(f, "Model{{key=null, parent=")?,
        }
        match &self.parent {
            Some(parent) => write!(f, "{}}}", parent),
            None => write!(f, "null}}"),
        }
    }
}

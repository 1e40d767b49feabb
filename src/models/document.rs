//! Mapping between [`ReviewEvent`] and the document stored per event:
//! `{ levelBefore: string, reply: string, timestamp: integer }`.
//!
//! Identity is not part of the document. The key and the card it belongs to
//! come from where the document was found.

use super::review_event::CARD_KIND;
use super::{Model, ParentRef, ReviewEvent};
use crate::error::{Error, Result};
use serde_json::{Map, Value};

pub const LEVEL_BEFORE: &str = "levelBefore";
pub const REPLY: &str = "reply";
pub const TIMESTAMP: &str = "timestamp";

/// Unset fields are left out of the document.
pub fn to_document(event: &ReviewEvent) -> Value {
    let mut doc = Map::new();
    if let Some(level) = event.level_before() {
        doc.insert(LEVEL_BEFORE.to_string(), Value::from(level));
    }
    if let Some(reply) = event.reply() {
        doc.insert(REPLY.to_string(), Value::from(reply));
    }
    if let Some(timestamp) = event.timestamp() {
        doc.insert(TIMESTAMP.to_string(), Value::from(timestamp));
    }
    Value::Object(doc)
}

/// Decodes a document field by field. Missing or null fields stay unset.
pub fn from_document(key: &str, card_key: &str, doc: &Value) -> Result<ReviewEvent> {
    let fields = doc.as_object().ok_or(Error::Document {
        field: "<root>",
        expected: "object",
    })?;

    let mut model = Model::new(Some(ParentRef::new(CARD_KIND, card_key)));
    model.set_key(key);

    let mut event = ReviewEvent::default();
    *event.model_mut() = model;

    if let Some(level) = string_field(fields, LEVEL_BEFORE)? {
        event.set_level_before(level);
    }
    if let Some(reply) = string_field(fields, REPLY)? {
        event.set_reply(reply);
    }
    match fields.get(TIMESTAMP) {
        None | Some(Value::Null) => {}
        Some(value) => {
            let timestamp = value.as_i64().ok_or(Error::Document {
                field: TIMESTAMP,
                expected: "an integer",
            })?;
            event.set_timestamp(timestamp);
        }
    }

    Ok(event)
}

fn string_field<'a>(
    fields: &'a Map<String, Value>,
    name: &'static str,
) -> Result<Option<&'a str>> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(Error::Document {
            field: name,
            expected: "a string",
        }),
    }
}

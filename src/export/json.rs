//! JSON import/export of review history.
//! A file holds a JSON array of review events, including their keys and the
//! card they belong to.

use crate::error::Result;
use crate::models::ReviewEvent;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Exports review events to a pretty-printed JSON file.
pub fn export_json_to_path(events: &[ReviewEvent], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json_string = serde_json::to_string_pretty(events)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    info!(count = events.len(), path = %path.display(), "exported review events");
    Ok(())
}

/// Imports review events from a JSON file.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn import_json(path: impl AsRef<Path>) -> Result<Vec<ReviewEvent>> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let events: Vec<ReviewEvent> = serde_json::from_str(&contents)?;

    info!(count = events.len(), path = %path.display(), "imported review events");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::Error;
    use crate::models::Card;
    use std::fs;

    fn create_test_events() -> Vec<ReviewEvent> {
        let card = Card::new("hello", "cześć").with_key("c1");
        let mut first = ReviewEvent::new(&card, &FixedClock(1_000));
        first.model_mut().set_key("v1");
        first.set_level_before("L0");
        first.set_reply("Y");

        let mut second = ReviewEvent::new(&card, &FixedClock(2_000));
        second.model_mut().set_key("v2");
        second.set_level_before("L1");
        second.set_reply("N");

        vec![first, second]
    }

    #[test]
    fn test_export_json_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");

        let result = export_json_to_path(&create_test_events(), &path);
        assert!(result.is_ok());
        assert!(fs::metadata(&path).is_ok(), "File should exist");
    }

    #[test]
    fn test_import_json() {
        let json_content = r#"[
  {
    "key": "v7",
    "parent": { "kind": "card", "key": "c3" },
    "levelBefore": "L4",
    "reply": "Y",
    "timestamp": 1700000000000
  }
]"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("import.json");
        fs::write(&path, json_content).unwrap();

        let events = import_json(&path).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].key(), Some("v7"));
        assert_eq!(events[0].card_key(), Some("c3"));
        assert_eq!(events[0].level_before(), Some("L4"));
        assert_eq!(events[0].reply(), Some("Y"));
        assert_eq!(events[0].timestamp(), Some(1_700_000_000_000));
    }

    #[test]
    fn test_export_and_import_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.json");
        let original = create_test_events();

        export_json_to_path(&original, &path).unwrap();
        let imported = import_json(&path).unwrap();

        assert_eq!(original, imported);
    }

    #[test]
    fn test_import_nonexistent_file() {
        let result = import_json("nonexistent_file_xyz123.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_import_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invalid.json");
        fs::write(&path, "{ this is not valid json }").unwrap();

        let result = import_json(&path);
        assert!(matches!(result, Err(Error::Json(_))));
    }
}

//! Journal Snapshot Module
//!
//! Reads a JSON snapshot of journal entries handed over by the journal
//! repository and normalizes it into [`LocatedItem`]s for the clustering
//! engine. Accepts either a bare array of entries or `{"entries": [...]}`.

use crate::models::LocatedItem;
use crate::{JournalMapError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotDocument {
    Entries(Vec<LocatedItem>),
    Wrapped { entries: Vec<LocatedItem> },
}

/// Loader for journal snapshot files
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Load and normalize entries from a snapshot file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<LocatedItem>> {
        let path = path.as_ref();
        debug!("Loading journal snapshot from {}", path.display());

        if !path.exists() {
            return Err(JournalMapError::snapshot(format!(
                "file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and normalize entries from snapshot JSON
    pub fn parse(content: &str) -> Result<Vec<LocatedItem>> {
        let document: SnapshotDocument = serde_json::from_str(content)?;
        let entries = match document {
            SnapshotDocument::Entries(entries) | SnapshotDocument::Wrapped { entries } => entries,
        };

        let entries = Self::normalize(entries)?;
        debug!(
            "Loaded {} entries ({} located)",
            entries.len(),
            entries.iter().filter(|e| e.is_located()).count()
        );
        Ok(entries)
    }

    /// Reject entries without a usable id and drop out-of-range coordinates.
    ///
    /// An entry with a bad coordinate is kept without a location so it
    /// simply stays off the map.
    fn normalize(entries: Vec<LocatedItem>) -> Result<Vec<LocatedItem>> {
        let mut seen = HashSet::new();

        entries
            .into_iter()
            .map(|mut entry| {
                if entry.id.trim().is_empty() {
                    return Err(JournalMapError::validation("entry id cannot be empty"));
                }
                if !seen.insert(entry.id.clone()) {
                    return Err(JournalMapError::snapshot(format!(
                        "duplicate entry id '{}'",
                        entry.id
                    )));
                }

                if let Some(coordinate) = entry.coordinate.filter(|c| !c.is_valid()) {
                    warn!(
                        "Dropping invalid coordinate ({}) of entry {}",
                        coordinate.format_coordinates(),
                        entry.id
                    );
                    entry.coordinate = None;
                }

                entry.city = entry.city.filter(|c| !c.trim().is_empty());
                entry.country = entry.country.filter(|c| !c.trim().is_empty());
                Ok(entry)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[
            {"id": "a", "coordinate": {"latitude": 48.8566, "longitude": 2.3522},
             "city": "Paris", "country": "France", "eventTimestamp": "2024-05-01T10:00:00Z"},
            {"id": "b", "eventTimestamp": "2024-05-02T10:00:00Z"}
        ]"#;

        let entries = SnapshotLoader::parse(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_located());
        assert!(!entries[1].is_located());
    }

    #[test]
    fn test_parse_wrapped_document() {
        let json = r#"{"entries": [{"id": "a", "eventTimestamp": "2024-05-01T10:00:00Z"}]}"#;
        let entries = SnapshotLoader::parse(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "a");
    }

    #[test]
    fn test_invalid_coordinate_is_dropped() {
        let json = r#"[{"id": "a", "coordinate": {"latitude": 123.0, "longitude": 2.0},
                        "city": "  ", "eventTimestamp": "2024-05-01T10:00:00Z"}]"#;
        let entries = SnapshotLoader::parse(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].coordinate.is_none());
        assert!(entries[0].city.is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[{"id": "a", "eventTimestamp": "2024-05-01T10:00:00Z"},
                       {"id": "a", "eventTimestamp": "2024-05-02T10:00:00Z"}]"#;
        let err = SnapshotLoader::parse(json).unwrap_err();
        assert!(matches!(err, JournalMapError::Snapshot { .. }));
    }

    #[test]
    fn test_empty_id_rejected() {
        let json = r#"[{"id": " ", "eventTimestamp": "2024-05-01T10:00:00Z"}]"#;
        let err = SnapshotLoader::parse(json).unwrap_err();
        assert!(matches!(err, JournalMapError::Validation { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = SnapshotLoader::parse("{").unwrap_err();
        assert!(matches!(err, JournalMapError::Json { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "a", "coordinate": {{"latitude": 1.0, "longitude": 2.0}}, "eventTimestamp": "2024-05-01T10:00:00Z"}}]"#
        )
        .unwrap();

        let entries = SnapshotLoader::load(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_located());
    }

    #[test]
    fn test_load_missing_file() {
        let err = SnapshotLoader::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, JournalMapError::Snapshot { .. }));
    }
}

//! Weld traceability log.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::jobs::non_blank;
use crate::store::{KeyValueStore, load_json, save_json};

/// Store key holding the log.
pub const TRACEABILITY_KEY: &str = "weldifyTraceabilityLog";

/// Value recorded when no parameter summary is given.
const NO_SUMMARY: &str = "N/A";

/// One welded joint, recorded for traceability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceabilityEntry {
    /// Unique identifier.
    pub id: String,
    /// When the weld was made, as entered.
    pub timestamp: String,
    /// Component identifier.
    pub component_id: String,
    /// Component serial number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// Weld identifier.
    pub weld_id: String,
    /// Welder identifier.
    pub welder_id: String,
    /// Welding procedure specification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wps: Option<String>,
    /// Short description of the parameters used.
    pub parameters_summary: String,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Fields supplied when logging a weld.
#[derive(Debug, Clone, Default)]
pub struct NewTraceabilityEntry {
    /// When the weld was made; defaults to now.
    pub timestamp: Option<String>,
    /// Component identifier (required).
    pub component_id: String,
    /// Component serial number.
    pub serial_number: Option<String>,
    /// Weld identifier (required).
    pub weld_id: String,
    /// Welder identifier (required).
    pub welder_id: String,
    /// Welding procedure specification.
    pub wps: Option<String>,
    /// Short description of the parameters used.
    pub parameters_summary: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Traceability log persisted under [`TRACEABILITY_KEY`]. Newest entries first.
pub struct TraceabilityLog<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> TraceabilityLog<'a> {
    /// Open the log in `store`.
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// All entries, newest first.
    pub fn list(&self) -> Result<Vec<TraceabilityEntry>, StorageError> {
        Ok(load_json(self.store, TRACEABILITY_KEY)?.unwrap_or_default())
    }

    /// Validate and prepend a new entry.
    pub fn add(&self, new: NewTraceabilityEntry) -> Result<TraceabilityEntry, StorageError> {
        let entry = TraceabilityEntry {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: non_blank(new.timestamp)
                .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
            component_id: required(&new.component_id, "component id")?,
            serial_number: non_blank(new.serial_number),
            weld_id: required(&new.weld_id, "weld id")?,
            welder_id: required(&new.welder_id, "welder id")?,
            wps: non_blank(new.wps),
            parameters_summary: non_blank(new.parameters_summary)
                .unwrap_or_else(|| NO_SUMMARY.to_owned()),
            notes: non_blank(new.notes),
        };

        let mut entries = self.list()?;
        entries.insert(0, entry.clone());
        save_json(self.store, TRACEABILITY_KEY, &entries)?;

        tracing::debug!(id = %entry.id, weld = %entry.weld_id, "logged weld");
        Ok(entry)
    }

    /// Delete an entry. Returns whether an entry was removed.
    pub fn remove(&self, id: &str) -> Result<bool, StorageError> {
        let mut entries = self.list()?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        save_json(self.store, TRACEABILITY_KEY, &entries)?;
        tracing::debug!(id, "removed traceability entry");
        Ok(true)
    }
}

fn required(value: &str, field: &str) -> Result<String, StorageError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(StorageError::invalid(format!("{field} is required")));
    }
    Ok(value.to_owned())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::MemoryStore;
    use crate::error::StorageErrorKind;

    fn weld(weld_id: &str) -> NewTraceabilityEntry {
        NewTraceabilityEntry {
            component_id: "PIPE-7".to_owned(),
            weld_id: weld_id.to_owned(),
            welder_id: "W-12".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_prepends() {
        let store = MemoryStore::new();
        let log = TraceabilityLog::new(&store);

        log.add(weld("J1")).unwrap();
        log.add(weld("J2")).unwrap();

        let ids: Vec<_> = log.list().unwrap().into_iter().map(|e| e.weld_id).collect();
        assert_eq!(ids, vec!["J2".to_owned(), "J1".to_owned()]);
    }

    #[test]
    fn test_defaults() {
        let store = MemoryStore::new();
        let entry = TraceabilityLog::new(&store)
            .add(NewTraceabilityEntry {
                parameters_summary: Some("   ".to_owned()),
                wps: Some(String::new()),
                ..weld("J1")
            })
            .unwrap();

        assert_eq!(entry.parameters_summary, "N/A");
        assert_eq!(entry.wps, None);
        assert!(chrono::DateTime::parse_from_rfc3339(&entry.timestamp).is_ok());
    }

    #[test]
    fn test_explicit_timestamp_kept() {
        let store = MemoryStore::new();
        let entry = TraceabilityLog::new(&store)
            .add(NewTraceabilityEntry {
                timestamp: Some("2024-05-01T10:30".to_owned()),
                ..weld("J1")
            })
            .unwrap();
        assert_eq!(entry.timestamp, "2024-05-01T10:30");
    }

    #[test]
    fn test_required_fields() {
        let store = MemoryStore::new();
        let log = TraceabilityLog::new(&store);

        for (missing, entry) in [
            (
                "component id",
                NewTraceabilityEntry {
                    component_id: " ".to_owned(),
                    ..weld("J1")
                },
            ),
            ("weld id", weld("")),
            (
                "welder id",
                NewTraceabilityEntry {
                    welder_id: String::new(),
                    ..weld("J1")
                },
            ),
        ] {
            let err = log.add(entry).unwrap_err();
            assert_eq!(err.kind, StorageErrorKind::Invalid);
            assert!(err.to_string().contains(missing), "{err}");
        }
        assert!(log.list().unwrap().is_empty());
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::new();
        let log = TraceabilityLog::new(&store);
        let entry = log.add(weld("J1")).unwrap();
        log.add(weld("J2")).unwrap();

        assert!(log.remove(&entry.id).unwrap());
        assert!(!log.remove("unknown").unwrap());
        assert_eq!(log.list().unwrap().len(), 1);
    }
}

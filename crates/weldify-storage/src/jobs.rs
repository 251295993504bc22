//! Saved welding jobs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use weldify_calc::WeldingParameters;

use crate::error::StorageError;
use crate::store::{KeyValueStore, load_json, save_json};

/// Store key holding the job list.
pub const JOBS_KEY: &str = "weldifyJobs";

/// A named welding setup kept for reuse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeldingJob {
    /// Unique identifier.
    pub id: String,
    /// Job name, never blank.
    pub name: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Machine setup.
    #[serde(default)]
    pub parameters: WeldingParameters,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Fields supplied when creating a job.
#[derive(Debug, Clone, Default)]
pub struct NewJob {
    /// Job name.
    pub name: String,
    /// Machine setup.
    pub parameters: WeldingParameters,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Job list persisted under [`JOBS_KEY`]. New jobs are appended.
pub struct JobBook<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> JobBook<'a> {
    /// Open the job list in `store`.
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// All jobs, oldest first.
    pub fn list(&self) -> Result<Vec<WeldingJob>, StorageError> {
        Ok(load_json(self.store, JOBS_KEY)?.unwrap_or_default())
    }

    /// Job with the given id.
    pub fn get(&self, id: &str) -> Result<Option<WeldingJob>, StorageError> {
        Ok(self.list()?.into_iter().find(|job| job.id == id))
    }

    /// Validate and append a new job.
    pub fn add(&self, new: NewJob) -> Result<WeldingJob, StorageError> {
        let name = required_name(&new.name)?;
        let job = WeldingJob {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            created_at: Utc::now(),
            parameters: new.parameters,
            notes: non_blank(new.notes),
        };

        let mut jobs = self.list()?;
        jobs.push(job.clone());
        save_json(self.store, JOBS_KEY, &jobs)?;

        tracing::debug!(id = %job.id, name = %job.name, "added job");
        Ok(job)
    }

    /// Replace the stored job that has the same id.
    pub fn update(&self, mut job: WeldingJob) -> Result<(), StorageError> {
        job.name = required_name(&job.name)?;
        job.notes = non_blank(job.notes);

        let mut jobs = self.list()?;
        let slot = jobs
            .iter_mut()
            .find(|existing| existing.id == job.id)
            .ok_or_else(|| StorageError::not_found(&job.id))?;
        tracing::debug!(id = %job.id, "updated job");
        *slot = job;
        save_json(self.store, JOBS_KEY, &jobs)
    }

    /// Delete a job. Returns whether a job was removed.
    pub fn remove(&self, id: &str) -> Result<bool, StorageError> {
        let mut jobs = self.list()?;
        let before = jobs.len();
        jobs.retain(|job| job.id != id);
        if jobs.len() == before {
            return Ok(false);
        }
        save_json(self.store, JOBS_KEY, &jobs)?;
        tracing::debug!(id, "removed job");
        Ok(true)
    }
}

fn required_name(name: &str) -> Result<String, StorageError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StorageError::invalid("job name is required"));
    }
    Ok(name.to_owned())
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use weldify_calc::{MaterialType, WeldingProcess};

    use super::*;
    use crate::MemoryStore;
    use crate::error::StorageErrorKind;

    fn gmaw_job(name: &str) -> NewJob {
        NewJob {
            name: name.to_owned(),
            parameters: WeldingParameters {
                process: Some(WeldingProcess::Gmaw),
                material: Some(MaterialType::CarbonSteel),
                thickness: Some(3.0),
                ..Default::default()
            },
            notes: None,
        }
    }

    #[test]
    fn test_add_appends() {
        let store = MemoryStore::new();
        let book = JobBook::new(&store);

        let first = book.add(gmaw_job("Frame")).unwrap();
        let second = book.add(gmaw_job("  Bracket  ")).unwrap();

        let jobs = book.list().unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0], first);
        assert_eq!(jobs[1].name, "Bracket");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_blank_name_rejected() {
        let store = MemoryStore::new();
        let book = JobBook::new(&store);

        let err = book.add(gmaw_job("   ")).unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::Invalid);
        assert!(book.list().unwrap().is_empty());
    }

    #[test]
    fn test_update_replaces_by_id() {
        let store = MemoryStore::new();
        let book = JobBook::new(&store);
        let mut job = book.add(gmaw_job("Frame")).unwrap();
        book.add(gmaw_job("Other")).unwrap();

        job.notes = Some("use 0.8 mm wire".to_owned());
        job.parameters.amperage = Some(110.0);
        book.update(job.clone()).unwrap();

        assert_eq!(book.get(&job.id).unwrap(), Some(job));
        assert_eq!(book.list().unwrap().len(), 2);
    }

    #[test]
    fn test_update_unknown_id() {
        let store = MemoryStore::new();
        let book = JobBook::new(&store);
        let mut job = book.add(gmaw_job("Frame")).unwrap();
        job.id = "missing".to_owned();

        let err = book.update(job).unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::NotFound);
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::new();
        let book = JobBook::new(&store);
        let job = book.add(gmaw_job("Frame")).unwrap();

        assert!(book.remove(&job.id).unwrap());
        assert!(!book.remove(&job.id).unwrap());
        assert!(book.list().unwrap().is_empty());
    }

    #[test]
    fn test_reads_camel_case_records() {
        let store = MemoryStore::new().with_entry(
            JOBS_KEY,
            r#"[{"id":"1717000000000","name":"Tank","createdAt":"2024-05-29T16:26:40.000Z","parameters":{"process":"gtaw","gasFlowRate":8}}]"#,
        );
        let jobs = JobBook::new(&store).list().unwrap();

        assert_eq!(jobs[0].id, "1717000000000");
        assert_eq!(jobs[0].parameters.process, Some(WeldingProcess::Gtaw));
        assert_eq!(jobs[0].parameters.gas_flow_rate, Some(8.0));
        assert_eq!(jobs[0].notes, None);
    }
}

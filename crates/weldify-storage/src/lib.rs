//! Persistence for Weldify workshop data.
//!
//! Data lives in a [`KeyValueStore`] as one JSON document per key. The
//! repositories ([`JobBook`], [`TraceabilityLog`], [`SafetyChecklist`]) are
//! thin views over a borrowed store: every call loads, changes and saves the
//! whole document, so nothing is cached between calls.
//!
//! ```
//! use weldify_storage::{JobBook, MemoryStore, NewJob};
//!
//! let store = MemoryStore::new();
//! let jobs = JobBook::new(&store);
//! jobs.add(NewJob { name: "Trailer frame".to_owned(), ..Default::default() })?;
//! assert_eq!(jobs.list()?.len(), 1);
//! # Ok::<(), weldify_storage::StorageError>(())
//! ```

mod checklist;
mod error;
mod fs;
mod jobs;
mod memory;
mod store;
mod trace;

pub use checklist::{
    CHECKLIST_ITEMS, CHECKLIST_KEY, ChecklistItem, ChecklistState, SafetyChecklist,
    checklist_item, is_complete,
};
pub use error::{StorageError, StorageErrorKind};
pub use fs::FsStore;
pub use jobs::{JOBS_KEY, JobBook, NewJob, WeldingJob};
pub use memory::MemoryStore;
pub use store::{KeyValueStore, load_json, save_json, validate_key};
pub use trace::{NewTraceabilityEntry, TRACEABILITY_KEY, TraceabilityEntry, TraceabilityLog};

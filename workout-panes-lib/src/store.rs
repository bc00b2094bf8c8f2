// src/store.rs
use std::cell::RefCell;
use std::rc::Rc;

use crate::model::{sample_records, WorkoutRecord};

/// Handle to the one store of the process. Every panel holds a clone; the
/// store itself is created once at the composition root.
pub type SharedStore = Rc<RefCell<RecordStore>>;

/// Volatile, in-memory list of workouts. Single owner: the UI thread.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<WorkoutRecord>,
    revision: u64, // Bumped on every add; renderers compare against it
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_samples() -> Self {
        Self {
            records: sample_records(),
            revision: 0,
        }
    }

    pub fn into_shared(self) -> SharedStore {
        Rc::new(RefCell::new(self))
    }

    /// Appends without re-checking uniqueness; ids come from `next_id`.
    pub fn add(&mut self, record: WorkoutRecord) {
        tracing::debug!(id = record.id, name = %record.name, "record added");
        self.records.push(record);
        self.revision += 1;
    }

    pub fn find_by_id(&self, id: i64) -> Option<&WorkoutRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn next_id(&self) -> i64 {
        self.records.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }

    pub fn first_id(&self) -> Option<i64> {
        self.records.first().map(|r| r.id)
    }

    pub fn records(&self) -> &[WorkoutRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub const fn revision(&self) -> u64 {
        self.revision
    }
}

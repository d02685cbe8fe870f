use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, info, instrument};
use windowplan_core::{ScheduleEntry, ScheduleId};

use crate::error::{Result, ScheduleError};
use crate::store::ScheduleStore;

/// Process-local schedule store.
///
/// A single `Mutex` guards the map; id generation and insertion happen in
/// the same critical section. Entry sets are stored as `Arc<[_]>` so reads
/// copy out of an immutable slice. Nothing is ever evicted.
#[derive(Default)]
pub struct InMemoryScheduleStore {
    schedules: Mutex<HashMap<ScheduleId, Arc<[ScheduleEntry]>>>,
}

impl InMemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of schedules saved so far.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<ScheduleId, Arc<[ScheduleEntry]>>>> {
        self.schedules
            .lock()
            .map_err(|_| ScheduleError::Storage("schedule map lock poisoned".to_string()))
    }
}

impl ScheduleStore for InMemoryScheduleStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    #[instrument(skip(self, entries), fields(count = entries.len()))]
    fn save(&self, entries: &[ScheduleEntry]) -> Result<ScheduleId> {
        let snapshot: Arc<[ScheduleEntry]> = entries.into();
        let mut schedules = self.lock()?;
        loop {
            let id = ScheduleId::new_v4();
            match schedules.entry(id) {
                Entry::Vacant(slot) => {
                    slot.insert(snapshot);
                    info!(schedule_id = %id, "schedule saved");
                    return Ok(id);
                }
                Entry::Occupied(_) => debug!(schedule_id = %id, "id collision, regenerating"),
            }
        }
    }

    #[instrument(skip(self), fields(schedule_id = %id))]
    fn read(&self, id: &ScheduleId) -> Result<Vec<ScheduleEntry>> {
        let schedules = self.lock()?;
        schedules
            .get(id)
            .map(|entries| entries.to_vec())
            .ok_or_else(|| ScheduleError::NotFound { id: id.to_string() })
    }
}

use windowplan_core::{ScheduleEntry, ScheduleId};

use crate::error::Result;

/// Persists computed schedules under store-generated identifiers.
///
/// Implementations are shared across request tasks (`Arc<dyn ScheduleStore>`)
/// and must make id generation and insertion a single atomic step, so two
/// concurrent saves never share an id and a read sees either the full entry
/// set or `NotFound`.
pub trait ScheduleStore: Send + Sync {
    /// Short label for logs and the health endpoint.
    fn backend(&self) -> &'static str;

    /// Store a copy of `entries` under a fresh identifier and return it.
    fn save(&self, entries: &[ScheduleEntry]) -> Result<ScheduleId>;

    /// Return the entries saved under `id`, in the order they were saved.
    fn read(&self, id: &ScheduleId) -> Result<Vec<ScheduleEntry>>;
}

#[cfg(test)]
pub(crate) mod contract {
    //! Behaviour every backend must share; each backend's test module runs it.

    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use windowplan_core::ExecutionOrder;

    use super::*;
    use crate::error::ScheduleError;

    pub fn sample_entries() -> Vec<ScheduleEntry> {
        vec![
            ScheduleEntry {
                identifier: "A".to_string(),
                order: ExecutionOrder::ExceedsWindow,
            },
            ScheduleEntry {
                identifier: "B".to_string(),
                order: ExecutionOrder::WithinWindow,
            },
        ]
    }

    pub fn save_then_read_round_trips(store: &dyn ScheduleStore) {
        let entries = sample_entries();
        let id = store.save(&entries).unwrap();
        assert_eq!(store.read(&id).unwrap(), entries);
    }

    pub fn empty_schedule_is_retrievable(store: &dyn ScheduleStore) {
        let id = store.save(&[]).unwrap();
        assert!(store.read(&id).unwrap().is_empty());
    }

    pub fn saves_get_distinct_ids(store: &dyn ScheduleStore) {
        let first = store.save(&sample_entries()).unwrap();
        let second = store.save(&sample_entries()).unwrap();
        assert_ne!(first, second);
    }

    pub fn unknown_id_is_not_found(store: &dyn ScheduleStore) {
        let err = store.read(&ScheduleId::new_v4()).unwrap_err();
        assert!(matches!(err, ScheduleError::NotFound { .. }));
    }

    pub fn schedules_do_not_bleed_into_each_other(store: &dyn ScheduleStore) {
        let first = store.save(&sample_entries()).unwrap();
        let second = store.save(&sample_entries()[..1]).unwrap();
        assert_eq!(store.read(&first).unwrap().len(), 2);
        assert_eq!(store.read(&second).unwrap().len(), 1);
    }

    /// `threads` x `saves_per_thread` concurrent saves: every id distinct,
    /// every id readable with its full entry set.
    pub fn concurrent_saves_get_distinct_readable_ids(
        store: Arc<dyn ScheduleStore>,
        threads: usize,
        saves_per_thread: usize,
    ) {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..saves_per_thread)
                        .map(|_| store.save(&sample_entries()).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(ids.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(ids.len(), threads * saves_per_thread);
        for id in &ids {
            assert_eq!(store.read(id).unwrap(), sample_entries());
        }
    }
}

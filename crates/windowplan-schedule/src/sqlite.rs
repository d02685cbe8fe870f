use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::{Connection, ErrorCode};
use tracing::{debug, info, instrument};
use windowplan_core::{ExecutionOrder, ScheduleEntry, ScheduleId};

use crate::db::init_db;
use crate::error::{Result, ScheduleError};
use crate::store::ScheduleStore;

/// Give up after this many primary-key collisions in a row.
const MAX_ID_ATTEMPTS: usize = 8;

/// SQLite-backed schedule store.
///
/// Wraps a single connection in a `Mutex`. Each save writes the header row
/// and every entry row inside one transaction, so a concurrent reader on
/// another connection sees the whole set or nothing.
pub struct SqliteScheduleStore {
    db: Mutex<Connection>,
}

impl SqliteScheduleStore {
    /// Wrap an open connection, initialising the schema if needed.
    pub fn new(conn: Connection) -> Result<Self> {
        init_db(&conn)?;
        Ok(Self {
            db: Mutex::new(conn),
        })
    }

    /// Open (or create) the database file at `path`.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        Self::new(conn)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.db
            .lock()
            .map_err(|_| ScheduleError::Storage("sqlite connection lock poisoned".to_string()))
    }
}

impl ScheduleStore for SqliteScheduleStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    #[instrument(skip(self, entries), fields(count = entries.len()))]
    fn save(&self, entries: &[ScheduleEntry]) -> Result<ScheduleId> {
        let mut db = self.lock()?;
        let tx = db.transaction()?;
        let now = Utc::now().to_rfc3339();

        let mut attempts = 0;
        let id = loop {
            attempts += 1;
            let id = ScheduleId::new_v4();
            match tx.execute(
                "INSERT INTO schedules (id, entry_count, created_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![id.to_string(), entries.len() as i64, now],
            ) {
                Ok(_) => break id,
                Err(rusqlite::Error::SqliteFailure(e, _))
                    if e.code == ErrorCode::ConstraintViolation && attempts < MAX_ID_ATTEMPTS =>
                {
                    debug!(schedule_id = %id, "id collision, regenerating");
                }
                Err(e) => return Err(e.into()),
            }
        };

        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO schedule_entries (schedule_id, position, workload_id, execution_order)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            let id_str = id.to_string();
            for (position, entry) in entries.iter().enumerate() {
                stmt.execute(rusqlite::params![
                    id_str,
                    position as i64,
                    entry.identifier,
                    entry.order.as_u8(),
                ])?;
            }
        }
        tx.commit()?;

        info!(schedule_id = %id, "schedule saved");
        Ok(id)
    }

    #[instrument(skip(self), fields(schedule_id = %id))]
    fn read(&self, id: &ScheduleId) -> Result<Vec<ScheduleEntry>> {
        let id_str = id.to_string();
        let db = self.lock()?;

        match db.query_row(
            "SELECT entry_count FROM schedules WHERE id = ?1",
            [&id_str],
            |row| row.get::<_, i64>(0),
        ) {
            Ok(_) => {}
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                return Err(ScheduleError::NotFound { id: id_str })
            }
            Err(e) => return Err(e.into()),
        }

        let mut stmt = db.prepare_cached(
            "SELECT workload_id, execution_order FROM schedule_entries
             WHERE schedule_id = ?1 ORDER BY position",
        )?;
        let entries = stmt
            .query_map([&id_str], row_to_entry)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }
}

fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<ScheduleEntry> {
    let raw: u8 = row.get(1)?;
    let order = ExecutionOrder::try_from(raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Integer, e.into())
    })?;
    Ok(ScheduleEntry {
        identifier: row.get(0)?,
        order,
    })
}

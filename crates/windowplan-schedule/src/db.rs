use rusqlite::Connection;

use crate::error::Result;

/// Initialise the schedule schema in `conn`.
///
/// Creates the `schedules` header table and the `schedule_entries` table
/// (idempotent). A header row with no entries is a valid, empty schedule.
pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS schedules (
            id          TEXT    NOT NULL PRIMARY KEY,   -- UUID v4
            entry_count INTEGER NOT NULL,
            created_at  TEXT    NOT NULL                -- ISO-8601
        ) STRICT;

        CREATE TABLE IF NOT EXISTS schedule_entries (
            schedule_id     TEXT    NOT NULL REFERENCES schedules (id),
            position        INTEGER NOT NULL,           -- index in the saved batch
            workload_id     TEXT    NOT NULL,
            execution_order INTEGER NOT NULL CHECK (execution_order IN (1, 2)),
            PRIMARY KEY (schedule_id, position)
        ) STRICT;
        ",
    )?;
    Ok(())
}

//! `windowplan-schedule`: schedule computation and storage.
//!
//! # Overview
//!
//! [`calculator::calculate`] turns a batch of workload items and a
//! maintenance window into schedule entries. A [`store::ScheduleStore`]
//! persists an entry set under a freshly generated [`ScheduleId`] and hands
//! it back on read. Saved sets are immutable: there is no update or delete.
//!
//! # Store backends
//!
//! | Backend                  | Medium                          | Survives restart |
//! |--------------------------|---------------------------------|------------------|
//! | `InMemoryScheduleStore`  | `Mutex<HashMap>`                | no               |
//! | `SqliteScheduleStore`    | `schedules` + `schedule_entries` | yes              |
//!
//! [`ScheduleId`]: windowplan_core::ScheduleId

pub mod calculator;
pub mod db;
pub mod error;
pub mod memory;
pub mod sqlite;
pub mod store;

pub use calculator::{calculate, classify};
pub use error::{Result, ScheduleError};
pub use memory::InMemoryScheduleStore;
pub use sqlite::SqliteScheduleStore;
pub use store::ScheduleStore;

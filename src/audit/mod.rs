//! Audit logging system for Pocket Budget
//!
//! Records create, update and delete operations on users, budgets and
//! expenses with before/after values in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single audit log entry with timestamp, operation,
//!   entity information, and optional before/after values.
//! - `AuditLogger`: writes entries to the audit log file using a
//!   line-delimited JSON format (JSONL).
//! - `generate_diff`: summarizes changes between entity snapshots.
//!
//! User snapshots are always `UserSummary` values, so passwords never reach
//! the log.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;

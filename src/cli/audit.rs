//! Audit log CLI command

use crate::error::PocketResult;
use crate::storage::Storage;

/// Handle `pocket audit`: print the most recent entries, oldest first
pub fn handle_audit(storage: &Storage, limit: usize) -> PocketResult<()> {
    let Some(logger) = storage.audit_log() else {
        println!("Audit log is not available for in-memory storage.");
        return Ok(());
    };

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

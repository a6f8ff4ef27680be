//! Storage layer for Pocket Budget
//!
//! `Storage` is the data store every service and the app share by
//! reference. It keeps users and per-user records in memory and can be
//! backed by JSON files with atomic writes.

pub mod file_io;
pub mod records;
pub mod users;

pub use file_io::{read_json, write_json_atomic};
pub use records::RecordRepository;
pub use users::UserRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::DataPaths;
use crate::error::PocketError;
use crate::models::IdClock;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: Option<DataPaths>,
    pub users: UserRepository,
    pub records: RecordRepository,
    ids: IdClock,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a file-backed Storage instance
    pub fn new(paths: DataPaths) -> Result<Self, PocketError> {
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            records: RecordRepository::new(paths.records_file()),
            ids: IdClock::new(),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths: Some(paths),
        })
    }

    /// Create a Storage instance that lives only in process memory
    pub fn in_memory() -> Self {
        Self {
            paths: None,
            users: UserRepository::in_memory(),
            records: RecordRepository::in_memory(),
            ids: IdClock::new(),
            audit: None,
        }
    }

    /// Get the paths configuration (None when in memory)
    pub fn paths(&self) -> Option<&DataPaths> {
        self.paths.as_ref()
    }

    /// Load all data from disk
    ///
    /// Advances the id clock past every stored id.
    pub fn load_all(&self) -> Result<(), PocketError> {
        self.users.load()?;
        self.records.load()?;

        for max in [self.users.max_id()?, self.records.max_id()?]
            .into_iter()
            .flatten()
        {
            self.ids.observe(max);
        }
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), PocketError> {
        self.users.save()?;
        self.records.save()?;
        Ok(())
    }

    /// Take a fresh id for a new entity
    pub fn next_id(&self) -> Result<i64, PocketError> {
        self.ids
            .next()
            .ok_or_else(|| {
                PocketError::Storage("No ids left after the largest stored id".into())
            })
    }

    /// The audit logger, if this storage keeps one
    pub fn audit_log(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), PocketError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::create(
                entity_type,
                entity_id,
                entity_name,
                entity,
            )),
            None => Ok(()),
        }
    }

    /// Record an update operation in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), PocketError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::update(
                entity_type,
                entity_id,
                entity_name,
                before,
                after,
            )),
            None => Ok(()),
        }
    }

    /// Record a delete operation in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), PocketError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::delete(
                entity_type,
                entity_id,
                entity_name,
                entity,
            )),
            None => Ok(()),
        }
    }
}

use uuid::Uuid;

use crate::types::BackupRecord;

/// Commands accepted by the backup collection.
#[derive(Debug, Clone, PartialEq)]
pub enum BackupCommand {
    /// Replace the whole collection, e.g. after loading the list.
    Set(Vec<BackupRecord>),
    /// Insert at the end; the record becomes the most recent entry.
    Append(BackupRecord),
    Remove(Uuid),
}

/// Ordered collection of a server's backups, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackupStore {
    data: Vec<BackupRecord>,
}

impl BackupStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, command: BackupCommand) {
        match command {
            BackupCommand::Set(items) => self.data = items,
            BackupCommand::Append(record) => {
                tracing::debug!(uuid = %record.uuid, "backup appended");
                self.data.push(record);
            }
            BackupCommand::Remove(uuid) => self.data.retain(|b| b.uuid != uuid),
        }
    }

    pub fn items(&self) -> &[BackupRecord] {
        &self.data
    }

    pub fn get(&self, uuid: Uuid) -> Option<&BackupRecord> {
        self.data.iter().find(|b| b.uuid == uuid)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

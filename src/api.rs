use async_trait::async_trait;

use crate::error::HttpError;
use crate::types::{BackupRecord, CreateBackupRequest, ServerId};

/// Remote backup operations of the panel.
///
/// Futures are not required to be `Send`: the web UI runs them on the
/// browser's single thread.
#[async_trait(?Send)]
pub trait BackupApi {
    /// Starts a new backup. Not idempotent: every call creates a backup.
    async fn create_backup(
        &self,
        server: &ServerId,
        request: &CreateBackupRequest,
    ) -> Result<BackupRecord, HttpError>;

    async fn list_backups(&self, server: &ServerId) -> Result<Vec<BackupRecord>, HttpError>;
}

/// Path of a server's backup collection, relative to the panel root.
pub fn backups_path(server: &ServerId) -> String {
    format!("/api/client/servers/{}/backups", server)
}

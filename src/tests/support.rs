//! Shared fixtures for the test modules.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::api::BackupApi;
use crate::error::HttpError;
use crate::types::{BackupRecord, CreateBackupRequest, ServerId};

pub const SERVER_UUID: &str = "1a7ce997-2e1f-4f2a-9a6f-3d1b8b4f8e21";

pub fn server() -> ServerId {
    ServerId::new(SERVER_UUID)
}

pub fn record(name: &str) -> BackupRecord {
    BackupRecord {
        uuid: Uuid::new_v4(),
        name: name.to_string(),
        ignored_files: vec![],
        sha256_hash: None,
        bytes: 0,
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        completed_at: None,
    }
}

/// In-memory panel that records every create call and answers from a queue.
/// Listing returns `listed` unchanged.
#[derive(Default)]
pub struct FakeApi {
    pub calls: RefCell<Vec<(ServerId, CreateBackupRequest)>>,
    responses: RefCell<VecDeque<Result<BackupRecord, HttpError>>>,
    pub listed: Vec<BackupRecord>,
}

impl FakeApi {
    pub fn with_listed(listed: Vec<BackupRecord>) -> Self {
        Self { listed, ..Self::default() }
    }

    pub fn answering(response: Result<BackupRecord, HttpError>) -> Self {
        let api = Self::default();
        api.push(response);
        api
    }

    pub fn push(&self, response: Result<BackupRecord, HttpError>) {
        self.responses.borrow_mut().push_back(response);
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl BackupApi for FakeApi {
    async fn create_backup(
        &self,
        server: &ServerId,
        request: &CreateBackupRequest,
    ) -> Result<BackupRecord, HttpError> {
        self.calls.borrow_mut().push((server.clone(), request.clone()));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::Network("no response queued".to_string())))
    }

    async fn list_backups(&self, _server: &ServerId) -> Result<Vec<BackupRecord>, HttpError> {
        Ok(self.listed.clone())
    }
}

/// Body of a panel error document with a single detail.
pub fn panel_error_body(detail: &str) -> String {
    serde_json::json!({
        "errors": [{ "code": "DisplayException", "status": "400", "detail": detail }]
    })
    .to_string()
}

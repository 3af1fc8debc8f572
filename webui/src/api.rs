use async_trait::async_trait;
use serde::de::DeserializeOwned;

use sicherung::api::{backups_path, BackupApi};
use sicherung::error::HttpError;
use sicherung::types::{BackupRecord, CreateBackupRequest, ListEnvelope, ResourceEnvelope, ServerId};

pub const BASE: &str = ""; // use same-origin relative URLs

fn url(path: &str) -> String { format!("{}{}", BASE, path) }

fn map_net(e: reqwasm::Error) -> HttpError { HttpError::Network(e.to_string()) }

/// Panel API over the browser's fetch. The session cookie authenticates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelApi;

async fn read<T: DeserializeOwned>(resp: reqwasm::http::Response) -> Result<T, HttpError> {
    if !resp.ok() {
        let body = resp.text().await.ok().filter(|b| !b.is_empty());
        return Err(HttpError::Status { status: resp.status(), body });
    }
    resp.json().await.map_err(|e| HttpError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl BackupApi for PanelApi {
    async fn create_backup(&self, server: &ServerId, request: &CreateBackupRequest) -> Result<BackupRecord, HttpError> {
        let body = serde_json::to_string(request).map_err(|e| HttpError::Decode(e.to_string()))?;
        let resp = reqwasm::http::Request::post(&url(&server_path(server)))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(body)
            .send().await.map_err(map_net)?;
        let envelope: ResourceEnvelope<BackupRecord> = read(resp).await?;
        Ok(envelope.attributes)
    }

    async fn list_backups(&self, server: &ServerId) -> Result<Vec<BackupRecord>, HttpError> {
        let resp = reqwasm::http::Request::get(&url(&server_path(server)))
            .header("Accept", "application/json")
            .send().await.map_err(map_net)?;
        let list: ListEnvelope<BackupRecord> = read(resp).await?;
        Ok(list.into_items())
    }
}

// Server ids come from the route, so escape them before building the path
fn server_path(server: &ServerId) -> String {
    backups_path(&ServerId::new(urlencoding::encode(server.as_str()).into_owned()))
}

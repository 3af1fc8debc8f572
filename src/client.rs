use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;

use crate::api::{backups_path, BackupApi};
use crate::config::PanelConfig;
use crate::error::HttpError;
use crate::types::{BackupRecord, CreateBackupRequest, ListEnvelope, ResourceEnvelope, ServerId};

/// `reqwest` implementation of the panel's backup API.
#[derive(Debug, Clone)]
pub struct PanelClient {
    http: reqwest::Client,
    base: String,
    api_key: Option<String>,
    user_agent: String,
}

impl PanelClient {
    pub fn new(cfg: &PanelConfig) -> Result<Self, HttpError> {
        let http = reqwest::Client::builder().build().map_err(map_net)?;
        Ok(Self {
            http,
            base: cfg.url.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone().filter(|k| !k.trim().is_empty()),
            user_agent: cfg.user_agent.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .request(method, self.url(path))
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, &self.user_agent);
        if let Some(key) = self.api_key.as_deref() {
            req = req.header(AUTHORIZATION, format!("Bearer {}", key));
        }
        req
    }

    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Result<T, HttpError> {
        let resp = req.send().await.map_err(map_net)?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.ok().filter(|b| !b.is_empty());
            tracing::debug!(status = status.as_u16(), "panel request failed");
            return Err(HttpError::Status { status: status.as_u16(), body });
        }
        resp.json::<T>().await.map_err(|e| HttpError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl BackupApi for PanelClient {
    async fn create_backup(
        &self,
        server: &ServerId,
        request: &CreateBackupRequest,
    ) -> Result<BackupRecord, HttpError> {
        let req = self.request(reqwest::Method::POST, &backups_path(server)).json(request);
        let envelope: ResourceEnvelope<BackupRecord> = self.send(req).await?;
        Ok(envelope.attributes)
    }

    async fn list_backups(&self, server: &ServerId) -> Result<Vec<BackupRecord>, HttpError> {
        let req = self.request(reqwest::Method::GET, &backups_path(server));
        let list: ListEnvelope<BackupRecord> = self.send(req).await?;
        Ok(list.into_items())
    }
}

fn map_net(e: reqwest::Error) -> HttpError {
    HttpError::Network(e.to_string())
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use crate::api::BackupApi;
    use crate::client::PanelClient;
    use crate::config::PanelConfig;
    use crate::error::{http_error_to_human, HttpError};
    use crate::flash::BACKUPS_CREATE;
    use crate::flow::{CreateBackupFlow, Submission};
    use crate::state::PanelState;
    use crate::types::{CreateBackupRequest, ServerId};

    const FULL_SERVER: &str = "full";
    const BROKEN_SERVER: &str = "broken";
    const BACKUP_UUID: &str = "8c7d1a44-5a35-4a54-9d7c-1f0b8f3b6a10";

    #[derive(Clone, Default)]
    struct FakePanel {
        received: Arc<Mutex<Vec<(String, Option<String>, Value)>>>,
    }

    fn backup_attributes(name: &str) -> Value {
        json!({
            "uuid": BACKUP_UUID,
            "name": name,
            "ignored_files": [],
            "sha256_hash": null,
            "bytes": 0,
            "created_at": "2024-03-01T12:00:00+00:00",
            "completed_at": null
        })
    }

    async fn create_backup(
        State(panel): State<FakePanel>,
        Path(server): Path<String>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Response {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        panel.received.lock().unwrap().push((server.clone(), auth, body.clone()));

        match server.as_str() {
            FULL_SERVER => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": [{ "code": "TooManyBackupsException", "status": "400",
                    "detail": "Cannot create a new backup, this server has reached its limit of 2 backups." }] })),
            )
                .into_response(),
            BROKEN_SERVER => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
            _ => {
                let name = body.get("name").and_then(|n| n.as_str()).unwrap_or_default();
                let name = if name.is_empty() { "Backup at 2024-03-01" } else { name };
                Json(json!({ "object": "backup", "attributes": backup_attributes(name) })).into_response()
            }
        }
    }

    async fn list_backups(Path(_server): Path<String>) -> Json<Value> {
        Json(json!({
            "object": "list",
            "data": [
                { "object": "backup", "attributes": backup_attributes("first") }
            ]
        }))
    }

    async fn spawn_panel() -> (String, FakePanel) {
        let panel = FakePanel::default();
        let app = Router::new()
            .route("/api/client/servers/{server}/backups", post(create_backup).get(list_backups))
            .with_state(panel.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}", addr), panel)
    }

    fn client(url: &str, api_key: Option<&str>) -> PanelClient {
        let cfg = PanelConfig {
            url: format!("{}/", url),
            api_key: api_key.map(|k| k.to_string()),
            ..PanelConfig::default()
        };
        PanelClient::new(&cfg).unwrap()
    }

    #[tokio::test]
    async fn test_create_backup_posts_fields_and_token() {
        let (url, panel) = spawn_panel().await;
        let api = client(&url, Some("ptlc_secret"));
        let req = CreateBackupRequest { name: "nightly".to_string(), ignored: "*.log\ncache/".to_string() };

        let record = api.create_backup(&ServerId::new("abc123"), &req).await.unwrap();
        assert_eq!(record.name, "nightly");
        assert_eq!(record.uuid.to_string(), BACKUP_UUID);

        let received = panel.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        let (server, auth, body) = &received[0];
        assert_eq!(server, "abc123");
        assert_eq!(auth.as_deref(), Some("Bearer ptlc_secret"));
        assert_eq!(body, &json!({ "name": "nightly", "ignored": "*.log\ncache/" }));
    }

    #[tokio::test]
    async fn test_status_error_keeps_body_for_translation() {
        let (url, _panel) = spawn_panel().await;
        let api = client(&url, None);
        let req = CreateBackupRequest { name: String::new(), ignored: String::new() };

        let err = api.create_backup(&ServerId::new(FULL_SERVER), &req).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(
            http_error_to_human(&err),
            "Cannot create a new backup, this server has reached its limit of 2 backups."
        );

        let err = api.create_backup(&ServerId::new(BROKEN_SERVER), &req).await.unwrap_err();
        assert_eq!(http_error_to_human(&err), "Request failed with status code 500");
    }

    #[tokio::test]
    async fn test_network_error_when_panel_unreachable() {
        // Bind and drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = client(&format!("http://{}", addr), None);
        let req = CreateBackupRequest { name: String::new(), ignored: String::new() };
        let err = api.create_backup(&ServerId::new("abc123"), &req).await.unwrap_err();
        assert!(matches!(err, HttpError::Network(_)));
        assert!(http_error_to_human(&err).starts_with("Network Error"));
    }

    #[tokio::test]
    async fn test_list_backups_unwraps_envelope() {
        let (url, _panel) = spawn_panel().await;
        let api = client(&url, None);
        let items = api.list_backups(&ServerId::new("abc123")).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "first");
    }

    #[tokio::test]
    async fn test_flow_end_to_end_blank_form() {
        let (url, panel) = spawn_panel().await;
        let api = client(&url, None);
        let server = ServerId::new("abc123");
        let mut state = PanelState::new(server.clone());
        let mut flow = CreateBackupFlow::new(server);

        state.apply_all(flow.open());
        state.apply_all(flow.submit_with(&api).await.unwrap());

        assert_eq!(flow.submission(), &Submission::Succeeded);
        assert!(!flow.is_open());
        assert_eq!(state.backups.len(), 1);
        assert_eq!(state.backups.items()[0].name, "Backup at 2024-03-01");
        let received = panel.received.lock().unwrap();
        assert_eq!(received[0].2, json!({ "name": "", "ignored": "" }));
    }

    #[tokio::test]
    async fn test_flow_end_to_end_failure_flashes() {
        let (url, _panel) = spawn_panel().await;
        let api = client(&url, None);
        let server = ServerId::new(FULL_SERVER);
        let mut state = PanelState::new(server.clone());
        let mut flow = CreateBackupFlow::new(server);

        state.apply_all(flow.open());
        flow.set_name("too many");
        state.apply_all(flow.submit_with(&api).await.unwrap());

        assert!(flow.is_open());
        assert_eq!(flow.values().unwrap().name, "too many");
        let flash = state.flashes.by_key(BACKUPS_CREATE).next().unwrap();
        assert!(flash.message.contains("reached its limit"));
        assert!(state.backups.is_empty());
    }
}

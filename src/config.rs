use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PanelConfig {
    /// Base URL of the panel, e.g. `https://panel.example.com`.
    pub url: String,
    /// Client API key sent as bearer token.
    pub api_key: Option<String>,
    pub user_agent: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    pub panel: PanelConfig,
}

const DEFAULTS: &str = include_str!("../config/default.toml");

impl Default for PanelConfig {
    fn default() -> Self {
        // Mirror defaults from config/default.toml
        Self {
            url: "http://127.0.0.1:8080".to_string(),
            api_key: None,
            user_agent: "sicherung/0.1".to_string(),
        }
    }
}

/// Loads the configuration (embedded defaults -> sicherung.toml -> SICHERUNG_CONFIG -> env/.env).
pub fn load() -> anyhow::Result<AppConfig> {
    // Load .env first (optional)
    let _ = dotenvy::dotenv();
    let custom = std::env::var("SICHERUNG_CONFIG").ok();
    load_from(custom.as_deref().map(Path::new))
}

/// Like [`load`], with an explicit extra config file instead of `SICHERUNG_CONFIG`.
pub fn load_from(custom_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut builder = ::config::Config::builder()
        .add_source(::config::File::from_str(DEFAULTS, ::config::FileFormat::Toml))
        // Optional local file: sicherung.toml (in CWD)
        .add_source(::config::File::with_name("sicherung").required(false));

    if let Some(path) = custom_path {
        builder = builder.add_source(::config::File::from(path).required(false));
    }
    // Environment variables last to have highest precedence
    builder = builder.add_source(::config::Environment::with_prefix("SICHERUNG").separator("__"));

    let cfg = builder.build()?;
    let app_cfg: AppConfig = cfg.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

pub fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    let url = cfg.panel.url.trim();
    if url.is_empty() {
        return Err(anyhow::anyhow!("panel.url must not be empty"));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(anyhow::anyhow!("invalid panel.url: {} (expected http:// or https://)", url));
    }
    if url.starts_with("http://") && cfg.panel.api_key.is_some() {
        tracing::warn!("Sending the API key over plain http to {}", url);
    }
    if cfg.panel.user_agent.trim().is_empty() {
        return Err(anyhow::anyhow!("panel.user_agent must not be empty"));
    }
    Ok(())
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use crate::config::{load_from, validate, AppConfig, PanelConfig};
    use std::env;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp_config(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.panel.url, "http://127.0.0.1:8080");
        assert!(config.panel.api_key.is_none());
        assert_eq!(config.panel.user_agent, "sicherung/0.1");
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_config_from_file() {
        let temp_file = write_temp_config(
            r#"
[panel]
url = "https://panel.example.com"
api_key = "ptlc_test"
"#,
        );

        let config = load_from(Some(temp_file.path())).unwrap();
        assert_eq!(config.panel.url, "https://panel.example.com");
        assert_eq!(config.panel.api_key.as_deref(), Some("ptlc_test"));
    }

    #[test]
    fn test_config_from_env() {
        // Only this test touches the environment
        env::set_var("SICHERUNG__PANEL__USER_AGENT", "backup-bot/2");
        let config = load_from(None).unwrap();
        assert_eq!(config.panel.user_agent, "backup-bot/2");
        env::remove_var("SICHERUNG__PANEL__USER_AGENT");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let temp_file = write_temp_config("[panel]\nurl = \"ftp://panel\"\n");
        let err = load_from(Some(temp_file.path())).unwrap_err();
        assert!(err.to_string().contains("invalid panel.url"));

        let cfg = AppConfig {
            panel: PanelConfig { url: "  ".to_string(), ..PanelConfig::default() },
        };
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let cfg = AppConfig {
            panel: PanelConfig { user_agent: String::new(), ..PanelConfig::default() },
        };
        let err = validate(&cfg).unwrap_err();
        assert!(err.to_string().contains("user_agent"));
    }
}

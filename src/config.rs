use once_cell::sync::Lazy;
use std::env;

/// Compiled fallback when `DOMAIN_CHAT_ENDPOINT` is unset.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000";

/// The one route this front-end talks to.
pub const CHAT_PATH: &str = "/api/domain-chat";

static API_CONFIG: Lazy<ApiConfig> = Lazy::new(ApiConfig::from_env);

/// Deployment configuration, resolved once per process.
///
/// The bearer token and the tunnel-warning header are only needed when the
/// backend sits behind an ngrok-style tunnel; both stay off unless configured.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub bearer_token: Option<String>,
    pub skip_tunnel_warning: bool,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url = env::var("DOMAIN_CHAT_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        let bearer_token = env::var("DOMAIN_CHAT_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        let skip_tunnel_warning = env::var("DOMAIN_CHAT_TUNNELED").is_ok_and(|v| is_truthy(&v));

        Self {
            base_url,
            bearer_token,
            skip_tunnel_warning,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.base_url.starts_with("http://") || self.base_url.starts_with("https://"),
            "DOMAIN_CHAT_ENDPOINT must be an http(s) URL, got {:?}",
            self.base_url
        );
        Ok(())
    }

    /// Full URL of the chat endpoint.
    pub fn chat_url(&self) -> String {
        format!("{}{}", self.base_url, CHAT_PATH)
    }
}

/// The process-wide configuration snapshot. Environment changes after the
/// first call are not observed.
pub fn api_config() -> &'static ApiConfig {
    &API_CONFIG
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_flags() {
        for value in ["1", "true", "YES", " on "] {
            assert!(is_truthy(value), "{value:?} should be truthy");
        }
        for value in ["", "0", "false", "off", "maybe"] {
            assert!(!is_truthy(value), "{value:?} should be falsy");
        }
    }

    #[test]
    fn chat_url_joins_base_and_path() {
        let config = ApiConfig {
            base_url: "https://chat.example.com".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(config.chat_url(), "https://chat.example.com/api/domain-chat");
    }

    #[test]
    fn validate_rejects_non_http_urls() {
        let config = ApiConfig {
            base_url: "chat.example.com".to_string(),
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

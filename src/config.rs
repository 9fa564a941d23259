// file: src/config.rs
// description: layered configuration for credentials, search endpoint and pipeline policy
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use clap::ValueEnum;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub credentials: Credentials,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Clone, Default, Deserialize, Serialize)]
pub struct Credentials {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub key: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            key: key.into(),
        }
    }
}

// Keeps the API key out of debug logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Which Yandex XML installation is queried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    #[default]
    Worldwide,
    Russian,
    Turkish,
}

impl SearchScope {
    pub fn endpoint(self) -> &'static str {
        match self {
            SearchScope::Worldwide => "https://yandex.com/search/xml",
            SearchScope::Russian => "https://yandex.ru/search/xml",
            SearchScope::Turkish => "https://yandex.com.tr/search/xml",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub scope: SearchScope,
    /// Overrides the scope's endpoint, mostly for proxies and tests.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_l10n")]
    pub l10n: String,
    /// Documents whose `<lang>` differs are dropped. An empty string or `*`
    /// keeps every document.
    #[serde(default = "default_language")]
    pub language: Option<String>,
    /// Local address registered with Yandex; outgoing requests bind to it.
    #[serde(default)]
    pub client_ip: Option<IpAddr>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl SearchConfig {
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or_else(|| self.scope.endpoint())
    }

    pub fn language_filter(&self) -> Option<&str> {
        self.language
            .as_deref()
            .map(str::trim)
            .filter(|lang| !lang.is_empty() && *lang != "*")
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            scope: SearchScope::default(),
            endpoint: None,
            l10n: default_l10n(),
            language: default_language(),
            client_ip: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// What a failed term does to the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Write `[]` for the term and keep going.
    #[default]
    Skip,
    /// Stop at the first failed term.
    Abort,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
    #[serde(default = "default_show_progress")]
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            workers: default_workers(),
            progress_interval: default_progress_interval(),
            show_progress: default_show_progress(),
        }
    }
}

fn default_l10n() -> String {
    "en".to_string()
}

fn default_language() -> Option<String> {
    Some("en".to_string())
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_workers() -> usize {
    1
}

fn default_progress_interval() -> usize {
    1000
}

fn default_show_progress() -> bool {
    true
}

impl Config {
    /// Builds the configuration from a TOML file and `YANDEX_PASSAGES__*`
    /// environment variables. Only the default file may be missing; an
    /// explicitly named one must exist. Credentials are usually supplied on
    /// the command line afterwards, so call [`Config::validate`] once all
    /// overrides are applied.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let default_path = Path::new(DEFAULT_CONFIG_PATH);
        let path = path.unwrap_or(default_path);
        let required = path != default_path;

        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(required))
            .add_source(
                config::Environment::with_prefix("YANDEX_PASSAGES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.credentials.user.trim().is_empty() {
            return Err(PipelineError::Config(
                "Yandex username is required".to_string(),
            ));
        }

        if self.credentials.key.trim().is_empty() {
            return Err(PipelineError::Config("Yandex key is required".to_string()));
        }

        if self.pipeline.workers == 0 {
            return Err(PipelineError::Config(
                "workers must be greater than 0".to_string(),
            ));
        }

        if self.search.timeout_secs == 0 {
            return Err(PipelineError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        let endpoint = self.search.endpoint();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(PipelineError::Config(format!(
                "endpoint must be an http(s) URL: {}",
                endpoint
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn valid_config() -> Config {
        Config::default().with_credentials(Credentials::new("user", "secret"))
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.search.scope, SearchScope::Worldwide);
        assert_eq!(config.search.endpoint(), "https://yandex.com/search/xml");
        assert_eq!(config.search.language.as_deref(), Some("en"));
        assert_eq!(config.pipeline.failure_policy, FailurePolicy::Skip);
        assert_eq!(config.pipeline.workers, 1);
        assert_eq!(config.pipeline.progress_interval, 1000);
    }

    #[test]
    fn test_endpoint_override() {
        let mut config = Config::default();
        config.search.scope = SearchScope::Russian;
        assert_eq!(config.search.endpoint(), "https://yandex.ru/search/xml");

        config.search.endpoint = Some("http://127.0.0.1:8080/xml".to_string());
        assert_eq!(config.search.endpoint(), "http://127.0.0.1:8080/xml");
    }

    #[test]
    fn test_language_filter_wildcards() {
        let mut search = SearchConfig::default();
        assert_eq!(search.language_filter(), Some("en"));

        search.language = Some("*".to_string());
        assert_eq!(search.language_filter(), None);

        search.language = Some(String::new());
        assert_eq!(search.language_filter(), None);

        search.language = None;
        assert_eq!(search.language_filter(), None);
    }

    #[test]
    fn test_validate_requires_credentials() {
        assert!(Config::default().validate().is_err());
        assert!(valid_config().validate().is_ok());

        let config = Config::default().with_credentials(Credentials::new("user", "  "));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let mut config = valid_config();
        config.pipeline.workers = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_endpoint() {
        let mut config = valid_config();
        config.search.endpoint = Some("ftp://yandex.com".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_credentials_debug_redacts_key() {
        let rendered = format!("{:?}", Credentials::new("alice", "very-secret"));
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("very-secret"));
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            r#"
[search]
scope = "turkish"
language = "tr"
client_ip = "203.0.113.7"

[pipeline]
failure_policy = "abort"
workers = 4
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.search.scope, SearchScope::Turkish);
        assert_eq!(config.search.language.as_deref(), Some("tr"));
        assert_eq!(
            config.search.client_ip,
            Some("203.0.113.7".parse().unwrap())
        );
        assert_eq!(config.pipeline.failure_policy, FailurePolicy::Abort);
        assert_eq!(config.pipeline.workers, 4);
        assert_eq!(config.search.timeout_secs, 30);
    }

    #[test]
    fn test_load_default_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.pipeline.workers, 1);
        assert_eq!(config.search.l10n, "en");
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(dir.path().join("absent.toml").as_path()));
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }

    #[test]
    fn test_load_credentials_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[credentials]\nuser = \"alice\"\nkey = \"secret\"\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.credentials.user, "alice");
        assert_eq!(config.credentials.key, "secret");
        assert!(config.validate().is_ok());
    }
}

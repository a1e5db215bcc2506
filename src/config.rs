use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the Stats API. Should include the https:// prefix.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// URL of the league-wide RSS news feed. Team feeds are derived from it.
    #[serde(default = "default_news_feed_url")]
    pub news_feed_url: String,
    /// Path to the log file. If not specified, logs go to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_domain() -> String {
    constants::DEFAULT_STATS_API_BASE.to_string()
}

fn default_news_feed_url() -> String {
    constants::DEFAULT_NEWS_FEED_URL.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            news_feed_url: default_news_feed_url(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location, falling
    /// back to built-in defaults when no file exists. Environment variables
    /// override values from the file.
    ///
    /// # Environment Variables
    /// - `STATSBOARD_API_DOMAIN` - Override Stats API base URL
    /// - `STATSBOARD_NEWS_FEED` - Override news feed URL
    /// - `STATSBOARD_LOG_FILE` - Override log file path
    /// - `STATSBOARD_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();
        Self::load_from_path(&config_path).await
    }

    /// Loads configuration from an explicit path, applying the same
    /// default/override rules as [`Config::load`].
    pub async fn load_from_path(config_path: &str) -> Result<Self, AppError> {
        let mut config: Config = if Path::new(config_path).exists() {
            let content = fs::read_to_string(config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        // Override with environment variables if present
        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            config.api_domain = api_domain;
        }

        if let Ok(news_feed_url) = std::env::var(env_vars::NEWS_FEED) {
            config.news_feed_url = news_feed_url;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_domain.is_empty() {
            return Err(AppError::config_error("API domain must not be empty"));
        }
        if !self.api_domain.starts_with("http://") && !self.api_domain.starts_with("https://") {
            return Err(AppError::config_error(format!(
                "API domain must start with http:// or https://, got: {}",
                self.api_domain
            )));
        }
        if self.news_feed_url.is_empty() {
            return Err(AppError::config_error("News feed URL must not be empty"));
        }
        if self.http_timeout_seconds == 0 {
            return Err(AppError::config_error(
                "HTTP timeout must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Saves current configuration to an explicit path, creating parent
    /// directories as needed.
    pub async fn save_to_path(&self, config_path: &str) -> Result<(), AppError> {
        if let Some(parent) = Path::new(config_path).parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(config_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        get_log_dir_path()
    }
}

/// Platform-specific config file path, e.g. ~/.config/mlb_statsboard/config.toml
/// on Linux. Falls back to the current directory if the config directory is
/// unavailable.
fn get_config_path() -> String {
    dirs::config_dir()
        .map(|dir| {
            dir.join("mlb_statsboard")
                .join("config.toml")
                .to_string_lossy()
                .to_string()
        })
        .unwrap_or_else(|| "config.toml".to_string())
}

/// Platform-specific log directory path.
fn get_log_dir_path() -> String {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| {
            dir.join("mlb_statsboard")
                .join("logs")
                .to_string_lossy()
                .to_string()
        })
        .unwrap_or_else(|| "logs".to_string())
}

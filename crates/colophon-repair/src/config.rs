use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::client::Credentials;

/// Configuration for colophon.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (COLOPHON_* prefix)
/// 3. Config file (~/.config/colophon/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bot account username (required before any batch starts).
    ///
    /// Can be set via:
    /// - ENV: COLOPHON_USERNAME
    /// - Config: username = "..."
    pub username: Option<String>,

    /// Bot account password (required before any batch starts).
    ///
    /// Can be set via:
    /// - ENV: COLOPHON_PASSWORD
    /// - Config: password = "..."
    pub password: Option<String>,

    /// Catalog base URL.
    ///
    /// Can be set via:
    /// - CLI: --base-url http://localhost:8080
    /// - ENV: COLOPHON_BASE_URL
    /// - Config: base_url = "..."
    /// - Default: https://openlibrary.org
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/colophon/config.toml
    /// Reads environment variables with COLOPHON_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("colophon");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with an optional base-URL override.
    ///
    /// This is used when the --base-url CLI flag is provided.
    pub fn load_with_base_url(base_url: Option<String>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(base_url) = base_url {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Credentials for the bot account.
    ///
    /// # Errors
    /// Missing credentials are a fatal startup error; no batch may start
    /// without them.
    pub fn credentials(&self) -> Result<Credentials> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Ok(Credentials {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => anyhow::bail!(
                "missing catalog credentials: set COLOPHON_USERNAME and COLOPHON_PASSWORD \
                 (or username/password in {})",
                config_file_path().display()
            ),
        }
    }
}

fn default_base_url() -> String {
    "https://openlibrary.org".to_string()
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/colophon/config.toml
/// - macOS: ~/Library/Application Support/colophon/config.toml
/// - Windows: %APPDATA%\colophon\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("colophon")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Colophon Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (COLOPHON_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Bot account credentials. Both are required before any repair batch
# starts; writes are attributed to this account in the record history.
#
# Can also be set via:
# - Environment: COLOPHON_USERNAME / COLOPHON_PASSWORD
#username = "your-bot-account"
#password = "your-bot-password"

# Catalog base URL. Point this at a local development instance to rehearse
# a repair before running it against the live catalog.
#
# Can also be set via:
# - CLI: colophon --base-url http://localhost:8080 fields
# - Environment: COLOPHON_BASE_URL
#
# Default: https://openlibrary.org
#base_url = "http://localhost:8080"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

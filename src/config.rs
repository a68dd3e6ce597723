//! Configuration management for the application.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file in
//! the platform config directory, then a `.env` file, then the process
//! environment. The environment wins so deployments can be configured without
//! touching files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::branding::{APP_DATA_DIR, GITHUB_USER};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default SMTP relay host.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default per-send mail timeout in seconds.
pub const DEFAULT_MAIL_TIMEOUT_SECS: u64 = 15;

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Origin permitted to call the API cross-origin. `None` allows any origin.
    pub frontend_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            frontend_url: None,
        }
    }
}

/// Outbound mail settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// Mailbox that receives contact notifications and sends the auto-reply
    pub user: Option<String>,
    /// Password (for Gmail, an App Password)
    pub pass: Option<String>,
    /// SMTP relay host (submission over TLS)
    pub smtp_host: String,
    /// Upper bound for a single send
    pub timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            user: None,
            pass: None,
            smtp_host: DEFAULT_SMTP_HOST.to_string(),
            timeout_secs: DEFAULT_MAIL_TIMEOUT_SECS,
        }
    }
}

impl MailConfig {
    /// Returns the per-send timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// True when both credentials are present.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.user.as_deref().is_some_and(|u| !u.is_empty())
            && self.pass.as_deref().is_some_and(|p| !p.is_empty())
    }
}

// Keep the password out of logs
impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("user", &self.user)
            .field("pass", &self.pass.as_ref().map(|_| "<redacted>"))
            .field("smtp_host", &self.smtp_host)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Site content settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// GitHub user whose repositories are listed
    pub github_user: String,
    /// Repository names (case-insensitive) hidden from the projects section
    pub excluded_repos: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            github_user: GITHUB_USER.to_string(),
            excluded_repos: vec!["dsa".to_string(), GITHUB_USER.to_string()],
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/folio/config.toml`
/// - macOS: `~/Library/Application Support/folio/config.toml`
/// - Windows: `%APPDATA%\folio\config.toml`
///
/// # Environment
///
/// `HOST`, `PORT`, `FRONTEND_URL`, `EMAIL_USER`, `EMAIL_PASS`, `SMTP_HOST`,
/// `MAIL_TIMEOUT_SECS`, `GITHUB_USER`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Outbound mail settings
    pub mail: MailConfig,
    /// Site content settings
    pub site: SiteConfig,
}

impl Config {
    /// Gets the platform-specific config directory path.
    ///
    /// `FOLIO_CONFIG_DIR` overrides the platform location.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Loads the full layered configuration: file, `.env`, process environment.
    pub fn from_environment() -> Result<Self> {
        // A missing .env is the normal case in production
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }

        let mut config = Self::load()?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Applies environment overrides using `lookup` to resolve variables.
    ///
    /// Empty values are treated as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .context(format!("Invalid PORT value: {port}"))?;
        }
        if let Some(url) = var("FRONTEND_URL") {
            self.server.frontend_url = Some(url);
        }
        if let Some(user) = var("EMAIL_USER") {
            self.mail.user = Some(user);
        }
        if let Some(pass) = var("EMAIL_PASS") {
            self.mail.pass = Some(pass);
        }
        if let Some(host) = var("SMTP_HOST") {
            self.mail.smtp_host = host;
        }
        if let Some(secs) = var("MAIL_TIMEOUT_SECS") {
            self.mail.timeout_secs = secs
                .trim()
                .parse()
                .context(format!("Invalid MAIL_TIMEOUT_SECS value: {secs}"))?;
        }
        if let Some(user) = var("GITHUB_USER") {
            self.site.github_user = user;
        }

        self.validate()
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `smtp_host` is not empty
    /// - `timeout_secs` is positive
    /// - `github_user` is not empty
    pub fn validate(&self) -> Result<()> {
        if self.mail.smtp_host.trim().is_empty() {
            anyhow::bail!("SMTP host cannot be empty");
        }

        if self.mail.timeout_secs == 0 {
            anyhow::bail!("Mail timeout must be at least one second");
        }

        if self.site.github_user.trim().is_empty() {
            anyhow::bail!("GitHub user cannot be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.frontend_url, None);
        assert_eq!(config.mail.smtp_host, "smtp.gmail.com");
        assert_eq!(config.mail.timeout(), Duration::from_secs(15));
        assert!(!config.mail.has_credentials());
        assert_eq!(config.site.excluded_repos, vec!["dsa", GITHUB_USER]);
    }

    #[test]
    fn test_apply_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(lookup_from(&[
                ("PORT", "8080"),
                ("FRONTEND_URL", "https://example.dev"),
                ("EMAIL_USER", "me@example.dev"),
                ("EMAIL_PASS", "app-password"),
                ("MAIL_TIMEOUT_SECS", "5"),
            ]))
            .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.server.frontend_url.as_deref(),
            Some("https://example.dev")
        );
        assert!(config.mail.has_credentials());
        assert_eq!(config.mail.timeout_secs, 5);
    }

    #[test]
    fn test_apply_env_ignores_empty_values() {
        let mut config = Config::default();
        config
            .apply_env(lookup_from(&[("PORT", ""), ("FRONTEND_URL", "  ")]))
            .unwrap();

        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.server.frontend_url, None);
    }

    #[test]
    fn test_apply_env_invalid_port() {
        let mut config = Config::default();
        let result = config.apply_env(lookup_from(&[("PORT", "not-a-port")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.mail.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_missing_path_is_default() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from_path(&temp.path().join("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[server]\nport = 7000\n\n[site]\ngithub_user = \"octocat\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.site.github_user, "octocat");
        assert_eq!(config.mail, MailConfig::default());
    }

    #[test]
    fn test_mail_config_debug_redacts_password() {
        let mail = MailConfig {
            pass: Some("super-secret".to_string()),
            ..MailConfig::default()
        };
        let debug = format!("{mail:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";
pub const DEFAULT_SECRET_KEY: &str = "roster-development-secret-change-me";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_students_file")]
    pub students_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
}

/// Log output shape: human-readable lines or one JSON object per event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Console,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_students_file() -> PathBuf {
    PathBuf::from("students.json")
}

fn default_admin_username() -> String {
    DEFAULT_ADMIN_USERNAME.to_string()
}

fn default_admin_password() -> String {
    DEFAULT_ADMIN_PASSWORD.to_string()
}

fn default_secret_key() -> String {
    DEFAULT_SECRET_KEY.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}


impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            num_threads: default_num_threads(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            students_file: default_students_file(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_username: default_admin_username(),
            admin_password: default_admin_password(),
            secret_key: default_secret_key(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration: built-in defaults, then the TOML file at `path`
    /// (if it exists), then environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Overlay values from the environment. `lookup` is `std::env::var` in
    /// production; tests pass a closure over a fixed map.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(username) = lookup("ADMIN_USERNAME") {
            self.auth.admin_username = username;
        }

        if let Some(password) = lookup("ADMIN_PASSWORD") {
            self.auth.admin_password = password;
        }

        if let Some(secret) = lookup("SECRET_KEY") {
            self.auth.secret_key = secret;
        }

        if let Some(file) = lookup("STUDENTS_FILE") {
            self.storage.students_file = PathBuf::from(file);
        }

        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .context(format!("Invalid PORT value '{}'", port))?;
        }

        Ok(())
    }

    /// Names of the auth settings still using their hard-coded fallbacks
    pub fn insecure_defaults(&self) -> Vec<&'static str> {
        let mut insecure = Vec::new();

        if self.auth.admin_username == DEFAULT_ADMIN_USERNAME {
            insecure.push("admin_username");
        }
        if self.auth.admin_password == DEFAULT_ADMIN_PASSWORD {
            insecure.push("admin_password");
        }
        if self.auth.secret_key == DEFAULT_SECRET_KEY {
            insecure.push("secret_key");
        }

        insecure
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        if self.storage.students_file.as_os_str().is_empty() {
            bail!("students_file must not be empty");
        }

        if self.auth.admin_username.is_empty() {
            bail!("admin_username must not be empty");
        }

        if self.auth.secret_key.is_empty() {
            bail!("secret_key must not be empty");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        Ok(())
    }
}

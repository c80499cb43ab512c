use std::{env, fmt, fs, path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write config file: {0}")]
    Write(#[source] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("no config path available; set XDG_CONFIG_HOME or HOME")]
    PathUnavailable,
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub telegram: Telegram,
    pub server: Server,
    pub registry: Registry,
    pub check: Check,
}

/// Bot credentials and the single authorized chat.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Telegram {
    pub token: String,
    pub chat_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self { bind: "0.0.0.0".into(), port: 8080 }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Registry {
    pub path: path::PathBuf,
}

impl Default for Registry {
    fn default() -> Self {
        Self { path: path::PathBuf::from("keepup.db") }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Check {
    /// Per-request timeout for one site probe
    pub timeout_seconds: u64,
    /// Pause between consecutive site probes within one run
    pub pause_seconds: u64,
    /// Period of the silent scheduled check
    pub interval_minutes: u64,
}

impl Default for Check {
    fn default() -> Self {
        Self { timeout_seconds: 20, pause_seconds: 3, interval_minutes: 10 }
    }
}

/// Used to ensure we are actually reading a toml file
fn normalize_toml_path(path: &path::Path) -> path::PathBuf {
    let mut path = path.to_path_buf();
    if path.extension().map(|ext| ext != "toml").unwrap_or(true) {
        path.set_extension("toml");
    }
    path
}

/// Get default config path ($XDG_CONFIG_HOME/keepup/config.toml or
/// $HOME/.config/...)
fn default_config_path() -> Result<path::PathBuf, ConfigError> {
    let path = if let Ok(config_home) = env::var("XDG_CONFIG_HOME") {
        path::PathBuf::from(config_home)
    } else if let Some(home_dir) = env::home_dir() {
        home_dir.join(".config")
    } else {
        return Err(ConfigError::PathUnavailable);
    };

    Ok(path.join("keepup/config.toml"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = |value: &str| if value.is_empty() { "(unset)" } else { "(redacted)" };

        writeln!(f, "Current configuration:")?;
        writeln!(f, "  Telegram")?;
        writeln!(f, "    Token: {}", redacted(&self.telegram.token))?;
        writeln!(
            f,
            "    Chat ID: {}",
            if self.telegram.chat_id.is_empty() { "(unset)" } else { &self.telegram.chat_id }
        )?;
        writeln!(f, "  Server")?;
        writeln!(f, "    Bind: {}:{}", self.server.bind, self.server.port)?;
        writeln!(f, "  Registry")?;
        writeln!(f, "    Path: {}", self.registry.path.display())?;
        writeln!(f, "  Check")?;
        write!(
            f,
            "    Timeout: {}s, pause: {}s, interval: {}m",
            self.check.timeout_seconds, self.check.pause_seconds, self.check.interval_minutes
        )
    }
}

impl Config {
    /// Generate Config structure from file
    ///
    /// Creates a default config in ~/.config/keepup/config.toml
    /// or the specified path, with the name config.toml if one does not
    /// exist. `TG_BOT_TOKEN` and `TG_CHAT_ID` environment variables
    /// override the file values.
    pub fn from_config(optional_path: Option<&path::Path>) -> Result<Self, ConfigError> {
        let config_path: path::PathBuf = match optional_path {
            Some(path) => normalize_toml_path(path),
            None => default_config_path()?,
        };

        let mut config: Self = if config_path.exists() {
            let raw_string = fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            toml::from_str(raw_string.as_str())?
        } else {
            let config = Self::default();
            config.write_config(&config_path)?;
            config
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Serialize and write a config to a file
    pub fn write_config(&self, path: &path::Path) -> Result<(), ConfigError> {
        let config_str: String = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::Write)?;
        }

        fs::write(path, config_str).map_err(ConfigError::Write)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(token) = env::var("TG_BOT_TOKEN") {
            self.telegram.token = token;
        }
        if let Ok(chat_id) = env::var("TG_CHAT_ID") {
            self.telegram.chat_id = chat_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.check.timeout_seconds, 20);
        assert_eq!(config.check.pause_seconds, 3);
        assert!(config.telegram.token.is_empty());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [telegram]
            chat_id = "12345"

            [check]
            pause_seconds = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.telegram.chat_id, "12345");
        assert_eq!(config.check.pause_seconds, 0);
        assert_eq!(config.check.timeout_seconds, 20);
        assert_eq!(config.server.bind, "0.0.0.0");
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.server.port = 9999;
        config.registry.path = path::PathBuf::from("custom.db");
        config.write_config(&path).unwrap();

        let loaded = Config::from_config(Some(&path)).unwrap();
        assert_eq!(loaded.server.port, 9999);
        assert_eq!(loaded.registry.path, path::PathBuf::from("custom.db"));
    }

    #[test]
    fn test_missing_file_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.toml");

        let _ = Config::from_config(Some(&path)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_normalize_extension() {
        let normalized = normalize_toml_path(path::Path::new("/tmp/keepup-config"));
        assert_eq!(normalized.extension().unwrap(), "toml");
    }

    #[test]
    fn test_display_redacts_token() {
        let mut config = Config::default();
        config.telegram.token = "123456:secret".into();

        let rendered = config.to_string();
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("(redacted)"));
    }
}

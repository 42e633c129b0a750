//! Configuration file management
//!
//! Loads the TOML configuration and applies environment overrides.
//! Default config path: ~/.config/uinputd/config.toml

use anyhow::{bail, Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::dispatch::Defaults;
use crate::layouts::Registry;

/// Environment variable naming a config file
pub const ENV_CONFIG: &str = "UINPUTD_CONFIG";
pub const ENV_LAYOUT: &str = "UINPUTD_LAYOUT";
pub const ENV_SOCKET_PATH: &str = "UINPUTD_SOCKET_PATH";
pub const ENV_LOG_LEVEL: &str = "UINPUTD_LOG_LEVEL";

/// Daemon settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default keyboard layout ("us", "uk", "fr", "de", "es", "it")
    pub layout: String,
    /// Unix socket settings
    pub socket: SocketConfig,
    /// Typing delays and request limits
    pub performance: PerformanceConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Unix socket settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocketConfig {
    /// Socket path ($XDG_RUNTIME_DIR/uinputd.sock, else /tmp/.uinputd.sock)
    pub path: PathBuf,
    /// File mode applied after binding (TOML accepts octal: 0o660)
    pub permissions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Default delay after each streamed character
    pub char_delay_ms: u64,
    /// Default delay after each streamed word
    pub stream_delay_ms: u64,
    /// Largest accepted request, in bytes
    pub max_message_size: usize,
    /// Requests processed at once; further connections wait
    pub max_concurrent_cmds: usize,
    /// Per-request time limit (0 = none)
    pub request_timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// "debug" | "info" | "warn" | "error"
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: "us".to_string(),
            socket: SocketConfig::default(),
            performance: PerformanceConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SocketConfig {
    fn default() -> Self {
        Self {
            path: default_socket_path(),
            permissions: 0o600,
        }
    }
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            char_delay_ms: 10,
            stream_delay_ms: 50,
            max_message_size: 1024 * 1024,
            max_concurrent_cmds: 100,
            request_timeout_ms: 0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Level as an env_logger filter; unknown names fall back to info
    pub fn filter(&self) -> &'static str {
        match self.level.to_ascii_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "warn" | "warning" => "warn",
            "error" | "fatal" => "error",
            "off" => "off",
            _ => "info",
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.filter().parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Socket path used when none is configured
pub fn default_socket_path() -> PathBuf {
    match std::env::var_os("XDG_RUNTIME_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir).join("uinputd.sock"),
        _ => PathBuf::from("/tmp/.uinputd.sock"),
    }
}

/// ~/.config/uinputd/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("uinputd").join("config.toml"))
}

impl Config {
    /// System-wide config path
    const SYSTEM_CONFIG_PATH: &'static str = "/etc/uinputd/config.toml";

    /// Get the path that would be used for loading config
    ///
    /// Returns None if using built-in defaults
    pub fn config_path() -> Option<PathBuf> {
        // 1. UINPUTD_CONFIG environment variable
        if let Some(path) = std::env::var_os(ENV_CONFIG) {
            let p = PathBuf::from(path);
            if p.exists() {
                return Some(p);
            }
        }

        // 2. User config: ~/.config/uinputd/config.toml
        if let Some(config_path) = default_config_path() {
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // 3. System config: /etc/uinputd/config.toml
        let system_config = Path::new(Self::SYSTEM_CONFIG_PATH);
        if system_config.exists() {
            return Some(system_config.to_path_buf());
        }

        None
    }

    /// Load configuration with priority:
    /// 1. `explicit` (--config); failing to read it is an error
    /// 2. UINPUTD_CONFIG environment variable
    /// 3. ~/.config/uinputd/config.toml (user config)
    /// 4. /etc/uinputd/config.toml (system config)
    /// 5. Built-in defaults
    ///
    /// Environment overrides are applied last.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                let config = Self::load_from_file(path)?;
                info!("Loaded config: {}", path.display());
                config
            }
            None => Self::load_discovered(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_discovered() -> Self {
        if let Some(path) = Self::config_path() {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    info!("Loaded config: {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config {}: {:#}", path.display(), e);
                }
            }
        }
        info!("Using built-in default config");
        Self::default()
    }

    /// Load settings from specified path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Apply UINPUTD_LAYOUT / UINPUTD_SOCKET_PATH / UINPUTD_LOG_LEVEL
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |key: &str| lookup(key).filter(|v| !v.is_empty());
        if let Some(layout) = set(ENV_LAYOUT) {
            self.layout = layout;
        }
        if let Some(path) = set(ENV_SOCKET_PATH) {
            self.socket.path = PathBuf::from(path);
        }
        if let Some(level) = set(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
    }

    /// Reject settings the daemon cannot run with
    pub fn validate(&self, registry: &Registry) -> Result<()> {
        registry
            .get(&self.layout)
            .with_context(|| format!("Invalid default layout {:?}", self.layout))?;
        if self.socket.permissions > 0o777 {
            bail!(
                "Invalid socket permissions {:o} (expected at most 0o777)",
                self.socket.permissions
            );
        }
        if self.performance.max_message_size == 0 {
            bail!("performance.max_message_size must be greater than 0");
        }
        if self.performance.max_concurrent_cmds == 0 {
            bail!("performance.max_concurrent_cmds must be greater than 0");
        }
        Ok(())
    }

    /// Request fallbacks for the dispatcher
    pub fn dispatch_defaults(&self) -> Defaults {
        Defaults {
            layout: self.layout.clone(),
            char_delay: Duration::from_millis(self.performance.char_delay_ms),
            word_delay: Duration::from_millis(self.performance.stream_delay_ms),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        match self.performance.request_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    /// Commented TOML with the current values
    pub fn template(&self) -> String {
        format!(
            r#"# uinputd configuration
#
# Search order: --config PATH, $UINPUTD_CONFIG, ~/.config/uinputd/config.toml,
# /etc/uinputd/config.toml. Environment overrides: UINPUTD_LAYOUT,
# UINPUTD_SOCKET_PATH, UINPUTD_LOG_LEVEL.

# Default keyboard layout: us, uk, fr, de, es, it
layout = {layout}

[socket]
# Unix socket the daemon listens on
path = {path}
# File mode of the socket (0o660 lets the input group connect)
permissions = 0o{permissions:o}

[performance]
# Stream defaults, used when a request sends 0
char_delay_ms = {char_delay}
stream_delay_ms = {stream_delay}
# Largest accepted request in bytes
max_message_size = {max_message}
# Requests handled at once
max_concurrent_cmds = {max_cmds}
# Per-request time limit in milliseconds (0 = none)
request_timeout_ms = {timeout}

[logging]
# debug, info, warn, error (RUST_LOG takes precedence)
level = {level}
"#,
            layout = toml_string(&self.layout),
            path = toml_string(&self.socket.path.display().to_string()),
            permissions = self.socket.permissions,
            char_delay = self.performance.char_delay_ms,
            stream_delay = self.performance.stream_delay_ms,
            max_message = self.performance.max_message_size,
            max_cmds = self.performance.max_concurrent_cmds,
            timeout = self.performance.request_timeout_ms,
            level = toml_string(&self.logging.level),
        )
    }

    /// Write the default template to `path` (or the user config path)
    pub fn write_template(path: Option<&Path>, force: bool) -> Result<PathBuf> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => default_config_path()
                .ok_or_else(|| anyhow::anyhow!("Config directory not found"))?,
        };

        if config_path.exists() && !force {
            bail!(
                "Config file already exists: {} (use --force to overwrite)",
                config_path.display()
            );
        }
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        std::fs::write(&config_path, Self::default().template())
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        Ok(config_path)
    }
}

/// Quoted and escaped TOML basic string
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

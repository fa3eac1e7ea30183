//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.countries/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CountriesConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub base_url: Option<&'a str>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    /// `None` leaves the transport's own default in place.
    pub timeout: Option<Duration>,
    pub log_level: LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.countries/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".countries").join("config.toml"))
}

/// Load config from `~/.countries/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CountriesConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CountriesConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CountriesConfig::default());
        }
    };

    load_config_from(&path)
}

fn load_config_from(path: &Path) -> Result<CountriesConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(CountriesConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CountriesConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Countries Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"

# [api]
# base_url = "https://restcountries.com/v3.1"   # Or set COUNTRIES_BASE_URL
# timeout_secs = 30                  # Or set COUNTRIES_TIMEOUT_SECS; unset = no timeout
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CountriesConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &CountriesConfig,
    cli: &CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .map(|s| s.to_string())
        .or_else(|| env("COUNTRIES_BASE_URL"))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Timeout: CLI → env → config → none. Zero means no timeout.
    let timeout_secs = cli
        .timeout_secs
        .or_else(|| env("COUNTRIES_TIMEOUT_SECS").and_then(|v| parse_or_warn(&v, "COUNTRIES_TIMEOUT_SECS")))
        .or(config.api.timeout_secs);
    let timeout = timeout_secs
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    // Log level: env → config → default
    let log_level = env("COUNTRIES_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .and_then(|v| parse_or_warn(&v, "log_level"))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        base_url,
        timeout,
        log_level,
    }
}

fn parse_or_warn<T: std::str::FromStr>(value: &str, what: &str) -> Option<T> {
    match value.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring invalid {}: {:?}", what, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = CountriesConfig::default();
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env_of(&[]));
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.timeout, None);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = CountriesConfig {
            general: GeneralConfig {
                log_level: Some("debug".to_string()),
            },
            api: ApiConfig {
                base_url: Some("http://localhost:9000".to_string()),
                timeout_secs: Some(10),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env_of(&[]));
        assert_eq!(resolved.base_url, "http://localhost:9000");
        assert_eq!(resolved.timeout, Some(Duration::from_secs(10)));
        assert_eq!(resolved.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = CountriesConfig {
            api: ApiConfig {
                base_url: Some("http://from-config".to_string()),
                timeout_secs: Some(10),
            },
            ..Default::default()
        };
        let env = env_of(&[
            ("COUNTRIES_BASE_URL", "http://from-env"),
            ("COUNTRIES_TIMEOUT_SECS", "20"),
        ]);

        let resolved = resolve_with_env(&config, &CliOverrides::default(), &env);
        assert_eq!(resolved.base_url, "http://from-env");
        assert_eq!(resolved.timeout, Some(Duration::from_secs(20)));

        let cli = CliOverrides {
            base_url: Some("http://from-cli"),
            timeout_secs: Some(5),
        };
        let resolved = resolve_with_env(&config, &cli, &env);
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let cli = CliOverrides {
            timeout_secs: Some(0),
            ..Default::default()
        };
        let resolved = resolve_with_env(&CountriesConfig::default(), &cli, env_of(&[]));
        assert_eq!(resolved.timeout, None);
    }

    #[test]
    fn test_invalid_env_values_fall_through() {
        let config = CountriesConfig {
            api: ApiConfig {
                timeout_secs: Some(7),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = env_of(&[
            ("COUNTRIES_TIMEOUT_SECS", "soon"),
            ("COUNTRIES_LOG_LEVEL", "loud"),
        ]);
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.timeout, Some(Duration::from_secs(7)));
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[api]
timeout_secs = 15
"#;
        let config: CountriesConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.timeout_secs, Some(15));
        assert!(config.api.base_url.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_generated_default_parses_as_empty() {
        let config: CountriesConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.api.base_url.is_none());
        assert!(config.api.timeout_secs.is_none());
    }

    #[test]
    fn test_load_generates_missing_file() {
        let dir = std::env::temp_dir().join(format!("countries-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.api.base_url.is_none());
        assert!(path.exists());

        fs::write(&path, "[api]\nbase_url = \"http://local\"\n").unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("http://local"));

        fs::write(&path, "[api\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}

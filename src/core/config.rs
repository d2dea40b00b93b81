//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.messenger/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_BACKEND_URL;
use crate::core::cookies::{CookieScope, DEFAULT_COOKIE_DOMAIN, DEFAULT_COOKIE_PATH};

/// Variable holding the raw cookie string when no cookie file is configured.
pub const DEFAULT_COOKIE_VAR: &str = "MESSENGER_COOKIES";

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MessengerConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub cookies: CookiesConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CookiesConfig {
    pub domain: Option<String>,
    pub path: Option<String>,
    /// Cookie file, relative to `~/.messenger/` unless absolute.
    pub file: Option<String>,
}

/// Flags from the command line. `None` means not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub backend_url: Option<String>,
    pub cookie_file: Option<PathBuf>,
    pub cookie_domain: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Where the raw cookie string is read from on each transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieSource {
    File(PathBuf),
    Env(String),
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub backend_url: String,
    pub cookie_scope: CookieScope,
    pub cookie_source: CookieSource,
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

/// Returns `~/.messenger/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".messenger"))
}

/// Returns the path to `~/.messenger/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.messenger/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MessengerConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MessengerConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MessengerConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MessengerConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<MessengerConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MessengerConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Messenger Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [backend]
# base_url = "http://localhost:5000"   # Or set MESSENGER_BACKEND_URL

# [cookies]
# domain = ".wellfound.com"            # Or set MESSENGER_COOKIE_DOMAIN
# path = "/"
# file = "cookies.txt"                 # Relative to ~/.messenger/, or set MESSENGER_COOKIE_FILE
#                                      # Without a file, MESSENGER_COOKIES holds the raw cookie string
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &MessengerConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with `env` standing in for the process environment.
pub fn resolve_with_env(
    config: &MessengerConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Backend URL: CLI → env → config → default
    let backend_url = cli
        .backend_url
        .clone()
        .or_else(|| env("MESSENGER_BACKEND_URL"))
        .or_else(|| config.backend.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

    // Cookie domain: CLI → env → config → default
    let domain = cli
        .cookie_domain
        .clone()
        .or_else(|| env("MESSENGER_COOKIE_DOMAIN"))
        .or_else(|| config.cookies.domain.clone())
        .unwrap_or_else(|| DEFAULT_COOKIE_DOMAIN.to_string());

    let path = config
        .cookies
        .path
        .clone()
        .unwrap_or_else(|| DEFAULT_COOKIE_PATH.to_string());

    ResolvedConfig {
        backend_url,
        cookie_scope: CookieScope { domain, path },
        cookie_source: resolve_cookie_source(config, cli, &env),
    }
}

/// A cookie file wins over the raw-string variable. CLI → env → config.
fn resolve_cookie_source(
    config: &MessengerConfig,
    cli: &CliOverrides,
    env: &impl Fn(&str) -> Option<String>,
) -> CookieSource {
    if let Some(ref file) = cli.cookie_file {
        return CookieSource::File(file.clone());
    }

    if let Some(file) = env("MESSENGER_COOKIE_FILE") {
        return CookieSource::File(PathBuf::from(file));
    }

    if let Some(ref file) = config.cookies.file {
        let file = PathBuf::from(file);
        if file.is_absolute() {
            return CookieSource::File(file);
        }
        match config_dir() {
            Some(dir) => return CookieSource::File(dir.join(file)),
            None => warn!(
                "Could not determine home directory, ignoring cookie file {}",
                file.display()
            ),
        }
    }

    CookieSource::Env(DEFAULT_COOKIE_VAR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn resolve_clean(config: &MessengerConfig, cli: &CliOverrides) -> ResolvedConfig {
        resolve_with_env(config, cli, no_env)
    }

    #[test]
    fn test_default_config_parses() {
        let config = MessengerConfig::default();
        assert!(config.backend.base_url.is_none());
        assert!(config.cookies.file.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_clean(&MessengerConfig::default(), &CliOverrides::default());
        assert_eq!(resolved.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(resolved.cookie_scope, CookieScope::default());
        assert_eq!(
            resolved.cookie_source,
            CookieSource::Env(DEFAULT_COOKIE_VAR.to_string())
        );
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MessengerConfig {
            backend: BackendConfig {
                base_url: Some("http://10.0.0.5:5000".to_string()),
            },
            cookies: CookiesConfig {
                domain: Some(".example.com".to_string()),
                path: Some("/app".to_string()),
                file: Some("/tmp/cookies.txt".to_string()),
            },
        };
        let resolved = resolve_clean(&config, &CliOverrides::default());
        assert_eq!(resolved.backend_url, "http://10.0.0.5:5000");
        assert_eq!(resolved.cookie_scope.domain, ".example.com");
        assert_eq!(resolved.cookie_scope.path, "/app");
        assert_eq!(
            resolved.cookie_source,
            CookieSource::File(PathBuf::from("/tmp/cookies.txt"))
        );
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = MessengerConfig {
            backend: BackendConfig {
                base_url: Some("http://10.0.0.5:5000".to_string()),
            },
            cookies: CookiesConfig {
                domain: Some(".example.com".to_string()),
                file: Some("/tmp/cookies.txt".to_string()),
                ..Default::default()
            },
        };
        let cli = CliOverrides {
            backend_url: Some("http://127.0.0.1:8080".to_string()),
            cookie_file: Some(PathBuf::from("/srv/session.txt")),
            cookie_domain: Some(".other.com".to_string()),
        };
        let resolved = resolve_clean(&config, &cli);
        assert_eq!(resolved.backend_url, "http://127.0.0.1:8080");
        assert_eq!(resolved.cookie_scope.domain, ".other.com");
        assert_eq!(
            resolved.cookie_source,
            CookieSource::File(PathBuf::from("/srv/session.txt"))
        );
    }

    #[test]
    fn test_resolve_env_sits_between_config_and_cli() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("MESSENGER_BACKEND_URL", "http://env-host:5000"),
            ("MESSENGER_COOKIE_DOMAIN", ".env.example.com"),
            ("MESSENGER_COOKIE_FILE", "/env/cookies.txt"),
        ]);
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());
        let config = MessengerConfig {
            backend: BackendConfig {
                base_url: Some("http://10.0.0.5:5000".to_string()),
            },
            cookies: CookiesConfig {
                domain: Some(".example.com".to_string()),
                file: Some("/tmp/cookies.txt".to_string()),
                ..Default::default()
            },
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), lookup);
        assert_eq!(resolved.backend_url, "http://env-host:5000");
        assert_eq!(resolved.cookie_scope.domain, ".env.example.com");
        assert_eq!(
            resolved.cookie_source,
            CookieSource::File(PathBuf::from("/env/cookies.txt"))
        );

        let cli = CliOverrides {
            backend_url: Some("http://127.0.0.1:8080".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, lookup);
        assert_eq!(resolved.backend_url, "http://127.0.0.1:8080");
        assert_eq!(resolved.cookie_scope.domain, ".env.example.com");
    }

    #[test]
    fn test_relative_cookie_file_lives_in_config_dir() {
        let config = MessengerConfig {
            cookies: CookiesConfig {
                file: Some("cookies.txt".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_clean(&config, &CliOverrides::default());
        if let Some(dir) = config_dir() {
            assert_eq!(resolved.cookie_source, CookieSource::File(dir.join("cookies.txt")));
        }
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[backend]
base_url = "http://localhost:5001"

[cookies]
domain = ".wellfound.com"
path = "/"
file = "cookies.txt"
"#;
        let config: MessengerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.base_url.as_deref(), Some("http://localhost:5001"));
        assert_eq!(config.cookies.domain.as_deref(), Some(".wellfound.com"));
        assert_eq!(config.cookies.file.as_deref(), Some("cookies.txt"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[cookies]
domain = ".example.com"
"#;
        let config: MessengerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.cookies.domain.as_deref(), Some(".example.com"));
        assert!(config.cookies.path.is_none());
        assert!(config.backend.base_url.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!("messenger-config-{}.toml", std::process::id()));
        fs::write(&path, "[backend\nbase_url = 1").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        fs::remove_file(&path).unwrap();
    }
}

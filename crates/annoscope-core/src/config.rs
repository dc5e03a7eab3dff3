//! Configuration types for annoscope.
//!
//! [`Config::load`] layers, lowest priority first: the embedded defaults, the
//! config file, and `ANNOSCOPE_*` environment variables (`__` separates
//! sections, e.g. `ANNOSCOPE_SEARCH__MAX_AUTOCOMPLETE=50`). Without an explicit
//! path the file is `~/.config/annoscope/config.toml`, created with the
//! defaults if it does not yet exist. [`Config::defaults`] returns the same
//! defaults without touching the filesystem (useful in tests).

use crate::resolver::UriMatching;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
bind = "127.0.0.1:3000"

[catalog]
paths = ["data/dumpEntities.json"]

[search]
max_autocomplete = 30
uri_matching     = "exact"

[retrieval]
snapshot   = "data/retrieval.json"
timeout_ms = 30000
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:3000".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

/// `[catalog]` section: snapshot files concatenated in order.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_paths")]
    pub paths: Vec<PathBuf>,
}

fn default_catalog_paths() -> Vec<PathBuf> { vec![PathBuf::from("data/dumpEntities.json")] }

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { paths: default_catalog_paths() }
    }
}

/// `[search]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Upper bound on autocomplete suggestions per request.
    #[serde(default = "default_max_autocomplete")]
    pub max_autocomplete: usize,
    #[serde(default)]
    pub uri_matching: UriMatching,
}

fn default_max_autocomplete() -> usize { 30 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_autocomplete: default_max_autocomplete(),
            uri_matching: UriMatching::default(),
        }
    }
}

/// `[retrieval]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalConfig {
    /// JSON snapshot of per-concept result rows.
    #[serde(default = "default_snapshot")]
    pub snapshot: PathBuf,
    /// Per-concept fetch budget; `0` disables the timeout.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_snapshot() -> PathBuf { PathBuf::from("data/retrieval.json") }
fn default_timeout_ms() -> u64 { 30_000 }

impl RetrievalConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            snapshot: default_snapshot(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. An explicit `path` must exist; the
    /// default path is created with the built-in defaults when missing.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(explicit) => config::File::from(explicit).required(true),
            None => {
                let default = config_path();
                if !default.exists() {
                    if let Some(parent) = default.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&default, DEFAULT_CONFIG.trim_start())?;
                }
                config::File::from(default.as_path()).required(false)
            }
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("ANNOSCOPE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("catalog.paths"),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("annoscope")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

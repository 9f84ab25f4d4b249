//! Configuration for the `folio` CLI.
//!
//! [`FolioConfig`] loads from TOML files, environment variables, and
//! defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `FOLIO_CONFIG` environment variable
//! 3. XDG default: `~/.config/folio/config.toml`
//! 4. Built-in defaults
//!
//! `FOLIO_<SECTION>_<KEY>` environment variables are layered over the file.

use confyg::{env, Confygery};
use folio_content::markdown::EnhanceOptions;
use folio_content::RenderOptions;
use folio_core::traits::ConfigProvider;
use folio_core::util::paths::{expand_tilde, find_dir_with_marker};
use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Directory name searched for when no content path is configured.
pub const CONTENT_DIR: &str = "content";

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the `folio` CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Project name, used for env var prefixes and default paths.
    pub project_name: String,

    /// Site root. Defaults to the current directory.
    pub base_path: Option<String>,

    pub content: ContentConfig,
    pub listing: ListingConfig,
    pub contact: ContactConfig,
    pub render: RenderConfig,
}

/// Where content lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Path to the content directory. `~` is expanded.
    pub path: Option<String>,
}

/// List page behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Items per page.
    pub per_page: usize,

    /// Quiet period before search input is applied, in milliseconds.
    pub search_debounce_ms: u64,
}

/// Contact form settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Address contact messages are sent to.
    pub recipient: String,
}

/// Markdown rendering switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Add line-number gutters to multi-line code blocks.
    pub line_numbers: bool,

    /// Add copy buttons to code blocks.
    pub copy_buttons: bool,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            project_name: "folio".to_string(),
            base_path: None,
            content: ContentConfig::default(),
            listing: ListingConfig::default(),
            contact: ContactConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            per_page: folio_query::DEFAULT_PER_PAGE,
            search_debounce_ms: folio_query::DEFAULT_SEARCH_DEBOUNCE.as_millis() as u64,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_numbers: true,
            copy_buttons: true,
        }
    }
}

impl ListingConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

impl RenderConfig {
    /// Options for the markdown pipeline.
    pub fn options(&self) -> RenderOptions {
        RenderOptions {
            enhance: EnhanceOptions {
                copy_buttons: self.copy_buttons,
                line_numbers: self.line_numbers,
            },
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl FolioConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                log::debug!("reading config from {}", path.display());
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("FOLIO");
        env_opts.add_section("content");
        env_opts.add_section("listing");
        env_opts.add_section("contact");
        env_opts.add_section("render");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(expand_tilde(path));
        }

        if let Ok(path) = std::env::var("FOLIO_CONFIG") {
            return Some(expand_tilde(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten this config into environment variable pairs with `FOLIO_` prefix.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value: toml::Value =
            toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_toml_value(&value, "FOLIO", &mut vars);
        Ok(vars)
    }
}

// ============================================================================
// ConfigProvider implementation
// ============================================================================

impl ConfigProvider for FolioConfig {
    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn base_path(&self) -> Result<PathBuf> {
        match &self.base_path {
            Some(p) => Ok(expand_tilde(p)),
            None => std::env::current_dir()
                .map_err(|e| Error::config(format!("Could not determine base path: {e}"))),
        }
    }

    /// The configured content directory, or the nearest `content/`
    /// directory at or above the base path, joined with `content_type`.
    fn content_path(&self, content_type: &str) -> Result<PathBuf> {
        let root = match &self.content.path {
            Some(p) => expand_tilde(p),
            None => {
                let base = self.base_path()?;
                find_dir_with_marker(&base, CONTENT_DIR)
                    .map(|dir| dir.join(CONTENT_DIR))
                    .unwrap_or_else(|| base.join(CONTENT_DIR))
            }
        };
        if content_type.is_empty() {
            Ok(root)
        } else {
            Ok(root.join(content_type))
        }
    }
}

// ============================================================================
// Helper: flatten TOML to env vars
// ============================================================================

/// Recursively flatten a TOML value into `KEY=value` pairs.
fn flatten_toml_value(value: &toml::Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, val) in table {
                let env_key = format!("{}_{}", prefix, key.to_uppercase());
                flatten_toml_value(val, &env_key, out);
            }
        }
        toml::Value::Array(arr) => {
            if let Ok(json) = serde_json::to_string(arr) {
                out.push((prefix.to_string(), json));
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        toml::Value::Integer(i) => out.push((prefix.to_string(), i.to_string())),
        toml::Value::Float(f) => out.push((prefix.to_string(), f.to_string())),
        toml::Value::Boolean(b) => out.push((prefix.to_string(), b.to_string())),
        toml::Value::Datetime(dt) => out.push((prefix.to_string(), dt.to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================

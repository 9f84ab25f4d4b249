//! `folio config` subcommands.
//!
//! `get` reads the fully resolved configuration (file, env, defaults) while
//! `set` edits only the file on disk, through [`ConfigDocument`].

use crate::cli::ConfigAction;
use crate::config::FolioConfig;
use folio_core::{Error, Result};
use std::path::{Path, PathBuf};

// ============================================================================
// Command dispatch
// ============================================================================

/// Run a config subcommand.
///
/// Takes the raw `--config` path rather than a loaded config because
/// `path` and `init` must work before a config file exists.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    let output = match action {
        ConfigAction::Path => config_path_output(config_path)?,
        ConfigAction::Get { key } => config_get_output(config_path, &key)?,
        ConfigAction::Set { key, value } => {
            let path = existing_config_file(config_path)?;
            let mut doc = ConfigDocument::open(&path)?;
            doc.set(&key, &value)?;
            doc.save()?;
            format!("{key} = {value} ({})\n", path.display())
        }
        ConfigAction::Init { file, force } => {
            let path = init_config_file(file.as_deref(), force)?;
            format!("wrote default config to {}\n", path.display())
        }
        ConfigAction::Export { docker_env } => {
            export_output(&FolioConfig::load(config_path)?, docker_env)?
        }
    };
    print!("{output}");
    Ok(())
}

fn config_path_output(config_path: Option<&str>) -> Result<String> {
    let path = FolioConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("no config directory on this platform"))?;
    if !path.exists() {
        log::info!("{} does not exist yet; `folio config init` creates it", path.display());
    }
    Ok(format!("{}\n", path.display()))
}

fn config_get_output(config_path: Option<&str>, key: &str) -> Result<String> {
    let resolved = toml::Value::try_from(FolioConfig::load(config_path)?)
        .map_err(|e| Error::config(e.to_string()))?;
    let value = lookup(&resolved, key)
        .ok_or_else(|| Error::config(format!("unknown config key '{key}'")))?;
    Ok(format!("{}\n", display_value(value)))
}

fn existing_config_file(config_path: Option<&str>) -> Result<PathBuf> {
    let path = FolioConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("no config directory on this platform"))?;
    if !path.is_file() {
        return Err(Error::not_found(format!(
            "config file {} (run `folio config init` first)",
            path.display()
        )));
    }
    Ok(path)
}

/// Write the default configuration, refusing to clobber an existing file
/// unless `force` is set.
fn init_config_file(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => FolioConfig::default_config_path()
            .ok_or_else(|| Error::config("no config directory on this platform"))?,
    };
    if path.exists() && !force {
        return Err(Error::config(format!(
            "{} already exists (pass --force to replace it)",
            path.display()
        )));
    }
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| Error::io_with_path(e, dir))?;
    }
    std::fs::write(&path, FolioConfig::default().to_toml_string()?)
        .map_err(|e| Error::io_with_path(e, &path))?;
    Ok(path)
}

fn export_output(config: &FolioConfig, docker_env: bool) -> Result<String> {
    let prefix = if docker_env { "--env " } else { "" };
    Ok(config
        .to_env_vars()?
        .into_iter()
        .map(|(key, value)| format!("{prefix}{key}={value}\n"))
        .collect())
}

// ============================================================================
// ConfigDocument
// ============================================================================

/// A config file held as a raw TOML tree, so edits keep keys the current
/// [`FolioConfig`] does not know about.
#[derive(Debug)]
pub(crate) struct ConfigDocument {
    path: PathBuf,
    root: toml::Value,
}

impl ConfigDocument {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let root = toml::from_str(&text).map_err(|e| Error::parse(path, e.to_string()))?;
        Ok(Self {
            path: path.to_path_buf(),
            root,
        })
    }

    /// Set `key` (dotted) to `raw`, typed by [`infer_value`].
    ///
    /// A typed value the config rejects is retried as the raw string, so
    /// `contact.recipient 12345` stays text. Missing tables along the way
    /// are created. Nothing changes if the document would no longer load
    /// as a [`FolioConfig`].
    pub(crate) fn set(&mut self, key: &str, raw: &str) -> Result<()> {
        let typed = infer_value(raw);
        let as_text = (!matches!(typed, toml::Value::String(_)))
            .then(|| toml::Value::String(raw.to_string()));
        match self.apply(key, typed) {
            Err(e) => match as_text {
                Some(text) => self.apply(key, text).map_err(|_| e),
                None => Err(e),
            },
            ok => ok,
        }
    }

    fn apply(&mut self, key: &str, value: toml::Value) -> Result<()> {
        let mut edited = self.root.clone();
        insert(&mut edited, key, value)?;
        edited
            .clone()
            .try_into::<FolioConfig>()
            .map_err(|e| Error::config(format!("invalid value for '{key}': {e}")))?;
        self.root = edited;
        Ok(())
    }

    pub(crate) fn save(&self) -> Result<()> {
        let text =
            toml::to_string_pretty(&self.root).map_err(|e| Error::config(e.to_string()))?;
        std::fs::write(&self.path, text).map_err(|e| Error::io_with_path(e, &self.path))
    }
}

fn lookup<'a>(root: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(root, |node, part| node.as_table()?.get(part))
}

fn insert(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let mut parts: Vec<&str> = key.split('.').collect();
    let leaf = match parts.pop() {
        Some(leaf) if !leaf.is_empty() && parts.iter().all(|p| !p.is_empty()) => leaf,
        _ => return Err(Error::config(format!("malformed config key '{key}'"))),
    };

    let mut node = root;
    for part in parts {
        node = node
            .as_table_mut()
            .ok_or_else(|| Error::config(format!("'{key}' runs through a non-table value")))?
            .entry(part)
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }
    node.as_table_mut()
        .ok_or_else(|| Error::config(format!("'{key}' runs through a non-table value")))?
        .insert(leaf.to_string(), value);
    Ok(())
}

/// Type a command-line value: booleans, then integers, then floats,
/// otherwise a string.
fn infer_value(raw: &str) -> toml::Value {
    if let Ok(b) = raw.parse::<bool>() {
        toml::Value::Boolean(b)
    } else if let Ok(i) = raw.parse::<i64>() {
        toml::Value::Integer(i)
    } else if let Ok(f) = raw.parse::<f64>() {
        toml::Value::Float(f)
    } else {
        toml::Value::String(raw.to_string())
    }
}

fn display_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Table(_) => toml::to_string_pretty(value)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| value.to_string()),
        other => other.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, FolioConfig::default().to_toml_string().unwrap()).unwrap();
        path
    }

    #[test]
    fn test_path_output_explicit() {
        let out = config_path_output(Some("/sites/mine/folio.toml")).unwrap();
        assert_eq!(out, "/sites/mine/folio.toml\n");
    }

    #[test]
    fn test_get_output() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir);
        let path = path.to_str().unwrap();

        assert_eq!(config_get_output(Some(path), "listing.per_page").unwrap(), "12\n");
        assert_eq!(config_get_output(Some(path), "project_name").unwrap(), "folio\n");
        let section = config_get_output(Some(path), "render").unwrap();
        assert!(section.contains("copy_buttons = true"));

        let err = config_get_output(Some(path), "listing.nope").unwrap_err();
        assert!(err.to_string().contains("unknown config key"));
    }

    #[test]
    fn test_document_set_and_save() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir);

        let mut doc = ConfigDocument::open(&path).unwrap();
        doc.set("listing.search_debounce_ms", "150").unwrap();
        doc.set("contact.recipient", "me@example.com").unwrap();
        doc.save().unwrap();

        let saved: FolioConfig = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.listing.search_debounce_ms, 150);
        assert_eq!(saved.contact.recipient, "me@example.com");
    }

    #[test]
    fn test_document_rejects_mistyped_value() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir);

        let mut doc = ConfigDocument::open(&path).unwrap();
        let err = doc.set("listing.per_page", "lots").unwrap_err();
        assert!(err.to_string().contains("listing.per_page"));
        assert_eq!(
            lookup(&doc.root, "listing.per_page"),
            Some(&toml::Value::Integer(12))
        );
    }

    #[test]
    fn test_document_numeric_text_stays_text() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir);

        let mut doc = ConfigDocument::open(&path).unwrap();
        doc.set("contact.recipient", "12345").unwrap();
        doc.set("listing.per_page", "24").unwrap();
        assert_eq!(
            lookup(&doc.root, "contact.recipient"),
            Some(&toml::Value::String("12345".to_string()))
        );
        assert_eq!(
            lookup(&doc.root, "listing.per_page"),
            Some(&toml::Value::Integer(24))
        );

        doc.save().unwrap();
        let saved: FolioConfig = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.contact.recipient, "12345");
    }

    #[test]
    fn test_document_failed_set_leaves_no_tables() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir);

        let mut doc = ConfigDocument::open(&path).unwrap();
        assert!(doc.set("listing.per_page.deeper", "1").is_err());
        assert_eq!(
            lookup(&doc.root, "listing.per_page"),
            Some(&toml::Value::Integer(12))
        );
    }

    #[test]
    fn test_document_keeps_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "[theme]\naccent = \"teal\"\n").unwrap();

        let mut doc = ConfigDocument::open(&path).unwrap();
        doc.set("render.line_numbers", "false").unwrap();
        doc.save().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("accent = \"teal\""));
        assert!(text.contains("line_numbers = false"));
    }

    #[test]
    fn test_set_requires_existing_file() {
        let err = existing_config_file(Some("/nonexistent/folio.toml")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_init_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let file = path.to_str().unwrap();

        assert_eq!(init_config_file(Some(file), false).unwrap(), path);
        let written: FolioConfig = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.listing.per_page, 12);

        let err = init_config_file(Some(file), false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert!(init_config_file(Some(file), true).is_ok());
    }

    #[test]
    fn test_export_output() {
        let config = FolioConfig::default();
        let plain = export_output(&config, false).unwrap();
        assert!(plain.contains("FOLIO_LISTING_PER_PAGE=12\n"));

        let docker = export_output(&config, true).unwrap();
        assert!(docker.lines().all(|l| l.starts_with("--env FOLIO_")));
    }

    #[test]
    fn test_insert_errors() {
        let mut root: toml::Value = toml::from_str("project_name = \"folio\"").unwrap();
        assert!(insert(&mut root, "project_name.inner", toml::Value::Integer(1)).is_err());
        assert!(insert(&mut root, "", toml::Value::Integer(1)).is_err());
        assert!(insert(&mut root, "listing..per_page", toml::Value::Integer(1)).is_err());
    }

    #[test]
    fn test_insert_creates_tables() {
        let mut root = toml::Value::Table(toml::map::Map::new());
        insert(&mut root, "render.copy_buttons", toml::Value::Boolean(false)).unwrap();
        assert_eq!(
            lookup(&root, "render.copy_buttons"),
            Some(&toml::Value::Boolean(false))
        );
        assert!(lookup(&root, "render.copy_buttons.deeper").is_none());
    }

    #[test]
    fn test_infer_value() {
        assert_eq!(infer_value("false"), toml::Value::Boolean(false));
        assert_eq!(infer_value("300"), toml::Value::Integer(300));
        assert_eq!(infer_value("0.5"), toml::Value::Float(0.5));
        assert_eq!(
            infer_value("~/site/content"),
            toml::Value::String("~/site/content".to_string())
        );
    }
}

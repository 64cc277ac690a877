//! Client-persisted preferences
//!
//! A small JSON key/value file standing in for browser storage. The
//! only key the storefront writes is the UI language.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use shared::i18n::{Language, LANGUAGE_KEY};

use crate::ClientResult;

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone)]
pub struct Preferences {
    /// `{data_dir}/preferences.json`
    file_path: PathBuf,
    values: BTreeMap<String, String>,
}

impl Preferences {
    /// Empty preferences backed by `{data_dir}/preferences.json`
    pub fn new(data_dir: &Path) -> Self {
        Self {
            file_path: data_dir.join(PREFERENCES_FILE),
            values: BTreeMap::new(),
        }
    }

    /// Load from file; a missing file yields empty preferences
    pub fn load(data_dir: &Path) -> ClientResult<Self> {
        let mut prefs = Self::new(data_dir);
        if prefs.file_path.exists() {
            let content = std::fs::read_to_string(&prefs.file_path)?;
            prefs.values = serde_json::from_str(&content)?;
        }
        Ok(prefs)
    }

    pub fn save(&self) -> ClientResult<()> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(path = %self.file_path.display(), "Preferences saved");
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set and persist a value
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> ClientResult<()> {
        self.values.insert(key.to_string(), value.into());
        self.save()
    }

    /// Stored language, English when unset or unsupported
    pub fn language(&self) -> Language {
        self.get(LANGUAGE_KEY)
            .map(Language::from_code)
            .unwrap_or_default()
    }

    pub fn set_language(&mut self, language: Language) -> ClientResult<()> {
        self.set(LANGUAGE_KEY, language.code())
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let prefs = Preferences::load(dir.path()).unwrap();
        assert_eq!(prefs.language(), Language::En);
        assert_eq!(prefs.get(LANGUAGE_KEY), None);
    }

    #[test]
    fn test_language_persists_across_loads() {
        let dir = TempDir::new().unwrap();
        let mut prefs = Preferences::load(dir.path()).unwrap();
        prefs.set_language(Language::Ar).unwrap();

        let reloaded = Preferences::load(dir.path()).unwrap();
        assert_eq!(reloaded.language(), Language::Ar);
        assert_eq!(reloaded.get(LANGUAGE_KEY), Some("ar"));
    }

    #[test]
    fn test_unsupported_stored_language_falls_back() {
        let dir = TempDir::new().unwrap();
        let mut prefs = Preferences::new(dir.path());
        prefs.set(LANGUAGE_KEY, "de").unwrap();
        assert_eq!(prefs.language(), Language::En);
    }

    #[test]
    fn test_save_creates_nested_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");
        let mut prefs = Preferences::new(&nested);
        prefs.set("k", "v").unwrap();
        assert!(prefs.file_path().exists());
        prefs.set("k", "w").unwrap();
        assert_eq!(Preferences::load(&nested).unwrap().get("k"), Some("w"));
    }
}

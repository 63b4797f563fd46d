use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const LOCALES: &[&str] = &["zh-CN", "en"];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Lesson dataset to load instead of the bundled one.
    #[serde(default)]
    pub dataset_path: Option<String>,
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme() -> String {
    "chalkboard".to_string()
}
fn default_locale() -> String {
    "zh-CN".to_string()
}
fn default_log_level() -> String {
    "hanzi_hero=info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            locale: default_locale(),
            dataset_path: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply overrides to the file at `path` and write it back. A file that
    /// fails to parse is left untouched and reported.
    pub fn update_file(
        path: &Path,
        theme: Option<String>,
        locale: Option<String>,
        dataset: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = Self::load_from(path)
            .with_context(|| format!("refusing to overwrite {}", path.display()))?
            .with_overrides(theme, locale, dataset);
        config.normalize_locale(LOCALES);
        config.save_to(path)?;
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hanzi-hero")
            .join("config.toml")
    }

    pub fn log_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hanzi-hero")
            .join("hanzi-hero.log")
    }

    pub fn dataset_path(&self) -> Option<PathBuf> {
        self.dataset_path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Command-line values win over the config file.
    pub fn with_overrides(
        mut self,
        theme: Option<String>,
        locale: Option<String>,
        dataset: Option<PathBuf>,
    ) -> Self {
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if let Some(locale) = locale {
            self.locale = locale;
        }
        if let Some(dataset) = dataset {
            self.dataset_path = Some(dataset.to_string_lossy().to_string());
        }
        self
    }

    /// Reset `locale` to the default if no translation exists for it.
    /// Accepts underscore spellings like `zh_CN`.
    pub fn normalize_locale(&mut self, valid: &[&str]) {
        let wanted = self.locale.replace('_', "-");
        match valid.iter().find(|l| l.eq_ignore_ascii_case(&wanted)) {
            Some(found) => self.locale = found.to_string(),
            None => self.locale = default_locale(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "chalkboard");
        assert_eq!(config.locale, "zh-CN");
        assert!(config.dataset_path.is_none());
        assert_eq!(config.log_level, "hanzi_hero=info");
    }

    #[test]
    fn test_config_partial_file_keeps_other_defaults() {
        let toml_str = r#"
theme = "classroom"
dataset_path = "/srv/lessons.json"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "classroom");
        assert_eq!(config.dataset_path(), Some(PathBuf::from("/srv/lessons.json")));
        assert_eq!(config.locale, "zh-CN");
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let mut config = Config::default();
        config.dataset_path = Some("lessons.json".to_string());
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.dataset_path, deserialized.dataset_path);
        assert_eq!(config.theme, deserialized.theme);
    }

    #[test]
    fn test_save_then_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        assert_eq!(Config::load_from(&path).unwrap().theme, "chalkboard");

        let mut config = Config::default();
        config.theme = "classroom".to_string();
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().theme, "classroom");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_update_file_keeps_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [").unwrap();

        let result = Config::update_file(&path, Some("classroom".to_string()), None, None);
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "theme = [");
    }

    #[test]
    fn test_update_file_merges_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = \"classroom\"\nlog_level = \"debug\"").unwrap();

        let config = Config::update_file(&path, None, Some("en".to_string()), None).unwrap();
        assert_eq!(config.locale, "en");
        let saved = Config::load_from(&path).unwrap();
        assert_eq!(saved.theme, "classroom");
        assert_eq!(saved.log_level, "debug");
        assert_eq!(saved.locale, "en");
    }

    #[test]
    fn test_blank_dataset_path_is_ignored() {
        let mut config = Config::default();
        config.dataset_path = Some("  ".to_string());
        assert!(config.dataset_path().is_none());
    }

    #[test]
    fn test_cli_overrides_win() {
        let config: Config = toml::from_str("theme = \"classroom\"\nlocale = \"en\"").unwrap();
        let config = config.with_overrides(
            Some("chalkboard".to_string()),
            None,
            Some(PathBuf::from("custom.json")),
        );
        assert_eq!(config.theme, "chalkboard");
        assert_eq!(config.locale, "en");
        assert_eq!(config.dataset_path(), Some(PathBuf::from("custom.json")));
    }

    #[test]
    fn test_normalize_locale() {
        let mut config = Config::default();
        config.locale = "EN".to_string();
        config.normalize_locale(LOCALES);
        assert_eq!(config.locale, "en");

        config.locale = "zh_CN".to_string();
        config.normalize_locale(LOCALES);
        assert_eq!(config.locale, "zh-CN");

        config.locale = "fr".to_string();
        config.normalize_locale(LOCALES);
        assert_eq!(config.locale, "zh-CN");
    }
}

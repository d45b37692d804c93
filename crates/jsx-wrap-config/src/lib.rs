use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the default config file location.
pub const CONFIG_PATH_ENV: &str = "JSX_WRAP_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// How one indentation level is written inside the wrap template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentSetting {
    /// Follow whatever the document already uses
    #[default]
    Auto,
    Tab,
    Spaces(usize),
}

/// How the delete + insert pair reaches the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Two edits in one undo group (delete opens it, insert closes it)
    #[default]
    Grouped,
    /// One replace edit, for hosts without undo grouping
    Combined,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Label of the offered action
    pub action_title: String,
    /// Host language ids the action is offered for
    pub languages: Vec<String>,
    pub edit_mode: EditMode,
    pub indent: IndentSetting,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            action_title: "Wrap with ...".to_string(),
            languages: vec!["javascriptreact".to_string(), "typescriptreact".to_string()],
            edit_mode: EditMode::Grouped,
            indent: IndentSetting::Auto,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    /// Load the user config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        Ok(Self::load_from_path(&config_path)?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        if let Ok(overridden) = std::env::var(CONFIG_PATH_ENV) {
            let overridden = PathBuf::from(overridden);
            return Self::expand_path(&overridden).unwrap_or(overridden);
        }
        let config_dir = shellexpand::tilde("~/.config/jsx-wrap");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// True when the action should be offered for documents of `language_id`.
    pub fn accepts_language(&self, language_id: &str) -> bool {
        self.languages.iter().any(|l| l == language_id)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.action_title, "Wrap with ...");
        assert!(config.accepts_language("javascriptreact"));
        assert!(config.accepts_language("typescriptreact"));
        assert!(!config.accepts_language("markdown"));
        assert_eq!(config.indent, IndentSetting::Auto);
        assert_eq!(config.edit_mode, EditMode::Grouped);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            action_title: "Wrap in tag".to_string(),
            languages: vec!["typescriptreact".to_string()],
            edit_mode: EditMode::Combined,
            indent: IndentSetting::Spaces(4),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config_content = r#"
edit_mode = "combined"
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert_eq!(config.edit_mode, EditMode::Combined);
        assert_eq!(config.action_title, "Wrap with ...");
        assert_eq!(config.languages.len(), 2);
    }

    #[test]
    fn test_indent_setting_forms() {
        let auto: Config = toml::from_str(r#"indent = "auto""#).unwrap();
        assert_eq!(auto.indent, IndentSetting::Auto);

        let tab: Config = toml::from_str(r#"indent = "tab""#).unwrap();
        assert_eq!(tab.indent, IndentSetting::Tab);

        let spaces: Config = toml::from_str("indent = { spaces = 4 }").unwrap();
        assert_eq!(spaces.indent, IndentSetting::Spaces(4));
    }

    #[test]
    fn test_unknown_edit_mode_is_rejected() {
        let result: Result<Config, _> = toml::from_str(r#"edit_mode = "sometimes""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_config_path_env_override() {
        unsafe {
            env::set_var("JSX_WRAP_TEST_ROOT", "/custom/root");
            env::set_var(CONFIG_PATH_ENV, "$JSX_WRAP_TEST_ROOT/wrap.toml");
        }

        let config_path = Config::config_path();

        unsafe {
            env::remove_var(CONFIG_PATH_ENV);
            env::remove_var("JSX_WRAP_TEST_ROOT");
        }

        assert_eq!(config_path, PathBuf::from("/custom/root/wrap.toml"));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_config_parse_error_carries_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "languages = 12").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        match err {
            ConfigError::ConfigParseError { config_path, .. } => {
                assert_eq!(config_path, config_file)
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            indent: IndentSetting::Tab,
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }
}

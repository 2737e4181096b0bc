use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable naming an optional TOML settings file.
pub const CONFIG_ENV: &str = "SHAPES_CONFIG";

/// Output settings shared by both demonstration binaries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Fallback log filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Force colour on or off. Unset lets `colored` decide.
    pub color: Option<bool>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            color: None,
        }
    }
}

impl Settings {
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &content)
    }

    /// Reads the file named by [`CONFIG_ENV`], or returns the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn apply_color(&self) {
        if let Some(enabled) = self.color {
            colored::control::set_override(enabled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.color, None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_toml(Path::new("inline.toml"), "color = false").unwrap();
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.color, Some(false));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"\ncolor = true").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.color, Some(true));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Settings::from_toml(Path::new("bad.toml"), "radius = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse config file bad.toml"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

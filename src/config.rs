//! User configuration loaded from `config.toml`.

use crate::calculator::FormatOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

const CONFIG_DIR: &str = "zcalc";
const CONFIG_FILE: &str = "config.toml";

/// Largest rounding precision that keeps `value * 10^decimals` finite for
/// every value the display shows in plain notation.
const MAX_DECIMALS: i32 = 15;
/// Fraction digits beyond this add nothing to an f64 in scientific notation.
const MAX_EXPONENT_DIGITS: usize = 17;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    /// Text shown instead of a number after dividing by zero.
    pub division_by_zero_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            division_by_zero_message: crate::calculator::DIVISION_BY_ZERO_MESSAGE.to_string(),
        }
    }
}

/// The `[display]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: usize,
    pub decimals: i32,
    pub exponent_digits: usize,
    /// Draw the keypad under the display in interactive mode.
    pub show_keypad: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let format = FormatOptions::default();
        Self {
            width: format.width,
            decimals: format.decimals,
            exponent_digits: format.exponent_digits,
            show_keypad: true,
        }
    }
}

impl DisplayConfig {
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            width: self.width,
            decimals: self.decimals,
            exponent_digits: self.exponent_digits,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.display.width == 0 {
            return Err(ConfigError::Invalid("display.width must be positive".into()));
        }
        if !(0..=MAX_DECIMALS).contains(&self.display.decimals) {
            return Err(ConfigError::Invalid(format!(
                "display.decimals must be between 0 and {}",
                MAX_DECIMALS
            )));
        }
        if self.display.exponent_digits > MAX_EXPONENT_DIGITS {
            return Err(ConfigError::Invalid(format!(
                "display.exponent_digits must be at most {}",
                MAX_EXPONENT_DIGITS
            )));
        }
        Ok(())
    }
}

/// Default config path, `$XDG_CONFIG_HOME/zcalc/config.toml` on Linux.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, the default location is tried
/// and defaults are used if no file is there.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => match default_path() {
            Some(path) => (path, false),
            None => {
                debug!("no config directory, using defaults");
                return Ok(Config::default());
            }
        },
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            if required {
                return Err(ConfigError::NotFound(path));
            }
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    let config = Config::from_toml(&text, &path)?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Config, ConfigError> {
        Config::from_toml(text, Path::new("config.toml"))
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file() {
        let config = parse("[display]\nwidth = 8\n").unwrap();
        assert_eq!(config.display.width, 8);
        assert_eq!(config.display.decimals, 10);
        assert!(config.display.show_keypad);
        assert_eq!(config.display.format_options().width, 8);
    }

    #[test]
    fn test_error_message() {
        let config = parse("division_by_zero_message = \"undefined\"").unwrap();
        assert_eq!(config.division_by_zero_message, "undefined");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            parse("[display]\nwidth = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            parse("[display]\ndecimals = 400"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            parse("[display]\nexponent_digits = 70000"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(parse("[display]\nexponent_digits = 17").is_ok());
        assert!(matches!(
            parse("[display]\nwidth = \"wide\""),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_file() {
        let path = std::env::temp_dir().join("zcalc-test-missing-config.toml");
        assert!(matches!(load(Some(&path)), Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_explicit_file() {
        let path = std::env::temp_dir().join(format!("zcalc-test-{}.toml", std::process::id()));
        std::fs::write(&path, "[display]\nshow_keypad = false\n").unwrap();
        let config = load(Some(&path));
        std::fs::remove_file(&path).unwrap();
        assert!(!config.unwrap().display.show_keypad);
    }
}

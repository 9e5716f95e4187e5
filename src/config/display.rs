//! User-facing display settings
//!
//! The calculator's observable behavior differs only in small display
//! policies: whether a second leading zero is accepted, whether the
//! idle display shows "0" or nothing, and which thousands separator is
//! used. These live in a settings struct loadable from a TOML file,
//! with every field defaulting so a missing file or missing key falls
//! back cleanly.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::LeadingZeroPolicy;

/// Leading-zero entry policy, as spelled in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadingZeroMode {
    /// Always append, allowing entries like "007"
    #[default]
    Permissive,
    /// Ignore a second leading zero while the operand is exactly "0"
    Suppress,
}

impl LeadingZeroMode {
    /// Converts to the policy type the domain layer understands
    pub fn policy(self) -> LeadingZeroPolicy {
        match self {
            LeadingZeroMode::Permissive => LeadingZeroPolicy::Permissive,
            LeadingZeroMode::Suppress => LeadingZeroPolicy::Suppress,
        }
    }
}

/// Display settings for the calculator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// How to treat a second leading zero during entry
    pub leading_zeros: LeadingZeroMode,
    /// Render "0" instead of an empty current line when idle
    pub show_idle_zero: bool,
    /// Separator between digit groups; sanitized to one character
    pub thousands_separator: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            leading_zeros: LeadingZeroMode::default(),
            show_idle_zero: false,
            thousands_separator: Self::DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl DisplaySettings {
    pub const DEFAULT_SEPARATOR: char = ',';

    /// Returns the effective grouping separator
    ///
    /// Invalid configured values (empty, multi-character, a digit, or
    /// ".") fall back to the default comma.
    pub fn separator(&self) -> char {
        let mut chars = self.thousands_separator.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !ch.is_ascii_digit() && ch != '.' => ch,
            _ => Self::DEFAULT_SEPARATOR,
        }
    }

    /// Normalizes the stored separator to its effective value
    pub fn sanitize(&mut self) {
        self.thousands_separator = self.separator().to_string();
    }

    /// Default location of the config file, if a config directory exists
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tallypad").join("config.toml"))
    }

    /// Loads settings from `path`, or from the default location
    ///
    /// A missing file is not an error: defaults are returned. Read and
    /// parse failures are.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Ok(Self::default());
        };

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io { path, source });
            }
        };

        let mut settings: Self =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })?;
        settings.sanitize();
        Ok(settings)
    }
}

/// Errors that can occur while loading display settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

//! Event label resolution via `sharedkernel.toml`
//!
//! Incoming records carry a free-text event label. Labels are matched
//! against the [`EventType`] display names; anything unrecognised resolves to
//! a configurable fallback member. On first use a default file is written
//! next to the caller's data, and edits take effect on the next load.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sharedkernel_core::{from_display_name, from_display_name_or_default, NamedValueError};
use thiserror::Error;
use tracing::info;

use crate::event_type::EventType;

/// Config file name placed in the caller's data directory.
pub const CONFIG_FILE_NAME: &str = "sharedkernel.toml";

/// Result type alias for config operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors loading or applying resolver configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Read {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// The config could not be rendered as TOML
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The config file could not be written
    #[error("Failed to write config file '{}': {source}", .path.display())]
    Write {
        /// File that was written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The configured fallback is not an event type display name
    #[error("Invalid fallback in sharedkernel.toml: {0}")]
    UnknownFallback(#[from] NamedValueError),
}

/// Resolver configuration loaded from `sharedkernel.toml`.
///
/// # Example
///
/// ```toml
/// # Display name of the event type used for unrecognised labels
/// fallback = "NotMapped"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Display name of the fallback event type, matched ignoring case.
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

fn default_fallback() -> String {
    EventType::DEFAULT_VALUE.name().to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
        }
    }
}

impl ResolverConfig {
    /// Resolve the configured fallback to an event type.
    ///
    /// # Errors
    ///
    /// Returns an error if `fallback` is not a display name of any event type.
    pub fn fallback_event_type(&self) -> ConfigResult<EventType> {
        Ok(*from_display_name::<EventType>(&self.fallback)?)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Event label resolution
#
# Display name of the event type used when an incoming label does not match
# any known event type. Matched ignoring case.
#   "NotMapped" (default) = code 000
#   "Historic"            = code 026
fallback = "NotMapped"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// fallback does not name an event type.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ResolverConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.fallback_event_type()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> ConfigResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), "wrote default resolver config");
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Maps free-text event labels to event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventLabelResolver {
    fallback: EventType,
}

impl EventLabelResolver {
    /// Build a resolver from config.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured fallback is unknown.
    pub fn new(config: &ResolverConfig) -> ConfigResult<Self> {
        Ok(Self {
            fallback: config.fallback_event_type()?,
        })
    }

    /// The event type returned for unrecognised labels
    pub fn fallback(&self) -> EventType {
        self.fallback
    }

    /// Resolve a label, falling back when it matches no display name
    pub fn resolve(&self, label: &str) -> EventType {
        *from_display_name_or_default(label, &self.fallback)
    }
}

impl Default for EventLabelResolver {
    fn default() -> Self {
        Self {
            fallback: EventType::DEFAULT_VALUE,
        }
    }
}

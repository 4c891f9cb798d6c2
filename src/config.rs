//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/dsrs/dsrs.toml`
//! 3. Explicit config file passed to [`Settings::load`]
//! 4. Environment variables: `DSRS_*` prefix, `__` between section and key
//!    (e.g. `DSRS_ARRAY__DEFAULT_CAPACITY=16`)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ConfigError, ConfigResult};

/// Capacity of an empty dynamic array when nothing else is configured.
pub const DEFAULT_CAPACITY: usize = 8;

/// Dynamic array settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ArraySettings {
    /// Initial capacity of arrays created without initial values
    pub default_capacity: usize,
}

impl Default for ArraySettings {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Unified configuration for dsrs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub array: ArraySettings,
}

/// Get the XDG config directory for dsrs.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "dsrs").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("dsrs.toml"))
}

impl Settings {
    /// Load settings from all layers. `config_file`, if given, must exist.
    pub fn load(config_file: Option<&Path>) -> ConfigResult<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder().set_default(
            "array.default_capacity",
            defaults.array.default_capacity as i64,
        )?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(path) = config_file {
            debug!("loading config: {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("DSRS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.array.default_capacity == 0 {
            return Err(ConfigError::Invalid {
                key: "array.default_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# dsrs configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/dsrs/dsrs.toml
#   File:   path passed to Settings::load
#   Env:    DSRS_* environment variables, e.g. DSRS_ARRAY__DEFAULT_CAPACITY=16

[array]
# Capacity of arrays created without initial values (>= 1)
# default_capacity = 8
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_capacity_is_eight() {
        assert_eq!(Settings::default().array.default_capacity, 8);
    }

    #[test]
    fn given_zero_capacity_when_validating_then_rejected() {
        let settings = Settings {
            array: ArraySettings {
                default_capacity: 0,
            },
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("array.default_capacity"));
    }

    #[test]
    fn given_settings_when_serialized_then_roundtrips_through_toml() {
        let settings = Settings {
            array: ArraySettings {
                default_capacity: 32,
            },
        };
        let text = settings.to_toml().unwrap();
        assert!(text.contains("default_capacity = 32"));
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn given_template_when_parsed_then_yields_defaults() {
        let parsed: Settings = toml::from_str(&Settings::template()).unwrap();
        assert_eq!(parsed, Settings::default());
    }
}

//! Publisher configuration.
//!
//! Handles loading and validating `nbpress.toml`. Configuration is sparse:
//! every field has a default, and a config file overrides only the values
//! it names. Unknown keys are rejected to catch typos early.
//!
//! ## Config File Location
//!
//! `nbpress.toml` is read from the invocation directory when present, or
//! from an explicit `--config` path. CLI flags override file values.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! posts_dir = "posts"       # Destination for published post files
//! assets_dir = "assets"     # Destination for published asset bundles
//!
//! [converter]
//! program = "jupyter"       # Executable that runs nbconvert
//! extra_args = []           # Appended to the nbconvert argument list
//! ```
//!
//! Both destination directories must already exist when publishing; the
//! publisher never creates them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Filename probed in the invocation directory.
pub const CONFIG_FILENAME: &str = "nbpress.toml";

/// Publisher configuration loaded from `nbpress.toml`.
///
/// All fields have defaults. Config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublishConfig {
    /// Destination directory for published post files.
    pub posts_dir: String,
    /// Destination directory for published asset bundles.
    pub assets_dir: String,
    /// External converter settings.
    pub converter: ConverterConfig,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            posts_dir: "posts".to_string(),
            assets_dir: "assets".to_string(),
            converter: ConverterConfig::default(),
        }
    }
}

impl PublishConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.posts_dir.is_empty() {
            return Err(ConfigError::Validation("posts_dir must not be empty".into()));
        }
        if self.assets_dir.is_empty() {
            return Err(ConfigError::Validation(
                "assets_dir must not be empty".into(),
            ));
        }
        if self.posts_dir == self.assets_dir {
            return Err(ConfigError::Validation(
                "posts_dir and assets_dir must be distinct".into(),
            ));
        }
        if self.converter.program.is_empty() {
            return Err(ConfigError::Validation(
                "converter.program must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// External converter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Executable that runs nbconvert. Replaceable for testing or for
    /// wrapper scripts (e.g. a venv-pinned `jupyter`).
    pub program: String,
    /// Extra arguments appended to the nbconvert argument list.
    pub extra_args: Vec<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: "jupyter".to_string(),
            extra_args: Vec::new(),
        }
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<PublishConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: PublishConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load `nbpress.toml` from a directory if present, otherwise defaults.
pub fn load_from_dir(dir: &Path) -> Result<PublishConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    if path.is_file() {
        load(&path)
    } else {
        Ok(PublishConfig::default())
    }
}

/// A stock `nbpress.toml` with every option documented.
///
/// Printed by `nbpress gen-config` so users start from a commented file
/// instead of the bare defaults.
pub fn stock_config_toml() -> &'static str {
    r#"# nbpress configuration
# All options are optional - the values below are the defaults.

# Destination for published post files. Must already exist; the publisher
# relocates the rendered B.md here, replacing any prior post of the same name.
posts_dir = "posts"

# Destination for published asset bundles. Must already exist; the publisher
# relocates the rendered B_files/ directory here, replacing any prior bundle
# of the same name.
assets_dir = "assets"

[converter]
# Executable that runs nbconvert. Point this at a wrapper script or a
# venv-pinned jupyter if the system one is not the right environment.
program = "jupyter"

# Extra arguments appended to the nbconvert invocation, e.g.
# extra_args = ["--TagRemovePreprocessor.remove_cell_tags=hidden"]
extra_args = []
"#
}

//! Tool configuration module.
//!
//! Handles loading and validating `icon-pad.toml`. The file is optional:
//! when it is absent the stock defaults apply, and command-line flags
//! override whatever the file says.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! input = "assets/app_icon.png"          # Icon to pad
//! output = "assets/app_icon_padded.png"  # Where the padded icon is written
//! padding = 0.35                         # Content shrink fraction, 0 <= p < 1
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::PaddingFraction;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "icon-pad.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `icon-pad.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PadConfig {
    /// Source icon path.
    pub input: PathBuf,
    /// Destination path; the extension picks the encoder.
    pub output: PathBuf,
    /// Fraction by which the content shrinks.
    pub padding: f64,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("assets/app_icon.png"),
            output: PathBuf::from("assets/app_icon_padded.png"),
            padding: PaddingFraction::default().value(),
        }
    }
}

impl PadConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.as_os_str().is_empty() {
            return Err(ConfigError::Validation("input must not be empty".into()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        if self.input == self.output {
            return Err(ConfigError::Validation(
                "output must differ from input".into(),
            ));
        }
        self.padding_fraction()?;
        Ok(())
    }

    /// The padding as a validated [`PaddingFraction`].
    pub fn padding_fraction(&self) -> Result<PaddingFraction, ConfigError> {
        PaddingFraction::new(self.padding)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(
        mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        padding: Option<PaddingFraction>,
    ) -> Self {
        if let Some(input) = input {
            self.input = input;
        }
        if let Some(output) = output {
            self.output = output;
        }
        if let Some(padding) = padding {
            self.padding = padding.value();
        }
        self
    }
}

/// Load config from `path`, returning stock defaults if the file does not exist.
pub fn load_config(path: &Path) -> Result<PadConfig, ConfigError> {
    if !path.exists() {
        return Ok(PadConfig::default());
    }
    read_config(path)
}

/// Read config from `path`. A missing file is an error.
///
/// Values are not validated here: command-line overrides still have to be
/// applied, so callers validate the merged result.
pub fn read_config(path: &Path) -> Result<PadConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: PadConfig = toml::from_str(&content)?;
    Ok(config)
}

/// A documented stock `icon-pad.toml` with every option at its default.
pub fn stock_config_toml() -> &'static str {
    r#"# icon-pad configuration
#
# All options are optional. Command-line flags (--input, --output,
# --padding) override the values here.

# Icon to pad. PNG, JPEG, WebP and TIFF inputs are accepted.
input = "assets/app_icon.png"

# Where the padded icon is written. The extension picks the encoder and
# must support transparency: png, webp or tif/tiff.
output = "assets/app_icon_padded.png"

# Fraction by which the content shrinks before it is centered on the
# transparent canvas. Must satisfy 0 <= padding < 1.
padding = 0.35
"#
}

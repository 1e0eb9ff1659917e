//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::CONFIG_FILE_NAME;
use crate::error::{PrDiffError, Result};
use crate::render::RenderOptions;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PrDiffError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PrDiffError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Otherwise `prdiff.yaml` in `dir` is used
    /// when present, and defaults apply when it is not.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // Empty file means all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PrDiffError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `event_log` must not be an empty path when present
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.event_log
            && path.as_os_str().is_empty()
        {
            return Err(PrDiffError::UserError(
                "config validation failed: event_log must not be empty (remove the key to disable logging)"
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Rendering switches derived from this config.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            expand_files: self.expand_files,
            show_raw_on_parse_failure: self.show_raw_on_parse_failure,
            content_width: self.content_width,
        }
    }
}

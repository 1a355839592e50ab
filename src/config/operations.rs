//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::MAX_CONTEXT_LINES;
use crate::error::{Result, SplitdiffError};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::info;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SplitdiffError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SplitdiffError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        info!("loaded config from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Load `path` if given, else the default file in `dir` if it exists,
    /// else the defaults.
    pub fn discover<P: AsRef<Path>>(path: Option<&Path>, dir: P) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default_path = dir.as_ref().join(super::DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            Self::load(default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            SplitdiffError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            SplitdiffError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `context_lines` must not exceed 10000
    /// - `diff_args` must split into shell words (balanced quotes)
    /// - every `exclude_paths` entry must be a valid glob
    pub fn validate(&self) -> Result<()> {
        if self.context_lines > MAX_CONTEXT_LINES {
            return Err(SplitdiffError::ConfigError(format!(
                "context_lines must be at most {} (found {})",
                MAX_CONTEXT_LINES, self.context_lines
            )));
        }

        self.diff_args()?;
        self.exclude_matcher()?;
        Ok(())
    }

    /// `diff_args` split into individual arguments.
    pub fn diff_args(&self) -> Result<Vec<String>> {
        shell_words::split(&self.diff_args).map_err(|e| {
            SplitdiffError::ConfigError(format!(
                "diff_args is not valid shell syntax ('{}'): {}",
                self.diff_args, e
            ))
        })
    }

    /// Compile `exclude_paths` into a matcher.
    ///
    /// Blank patterns are skipped; backslashes are treated as `/`.
    pub fn exclude_matcher(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();

        for pattern in &self.exclude_paths {
            let normalized = pattern.trim().replace('\\', "/");
            if normalized.is_empty() {
                continue;
            }
            let glob = Glob::new(&normalized).map_err(|e| {
                SplitdiffError::ConfigError(format!(
                    "invalid glob in exclude_paths: '{}' - {}",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }

        builder
            .build()
            .map_err(|e| SplitdiffError::ConfigError(format!("invalid exclude_paths: {}", e)))
    }
}

//! Configuration for the option typo classifier.
//!
//! The JSON shape is
//!
//! ```json
//! { "presets": ["vue"], "custom": [], "threshold": 1, "unit": "code-point" }
//! ```
//!
//! with every field optional. Validation happens once, when the
//! configuration is loaded; a configuration that passed validation and
//! resolved against a preset registry never produces errors later.

use std::fs;
use std::path::Path;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{OptypoError, Result};
use crate::util::levenshtein::DistanceUnit;

/// Configuration for typo detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TypoConfig {
    /// Preset groups to draw valid names from. May contain `"all"`.
    #[serde(default = "default_presets")]
    pub presets: Vec<String>,

    /// Additional valid names.
    #[serde(default)]
    pub custom: Vec<String>,

    /// Maximum edit distance (inclusive) reported as a typo. Must be at least 1.
    #[serde(default = "default_threshold")]
    pub threshold: usize,

    /// Atomic unit for distance computation.
    #[serde(default)]
    pub unit: DistanceUnit,
}

fn default_presets() -> Vec<String> {
    vec!["vue".to_string()]
}

fn default_threshold() -> usize {
    1
}

impl Default for TypoConfig {
    fn default() -> Self {
        TypoConfig {
            presets: default_presets(),
            custom: Vec::new(),
            threshold: default_threshold(),
            unit: DistanceUnit::default(),
        }
    }
}

impl TypoConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: TypoConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Check the shape of the configuration.
    ///
    /// Preset names are not checked against a registry here; that happens
    /// when the dictionary is resolved.
    pub fn validate(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(OptypoError::config("threshold must be at least 1"));
        }
        check_unique("presets", &self.presets)?;
        check_unique("custom", &self.custom)?;
        Ok(())
    }

    /// Replace the preset list.
    pub fn with_presets<I, S>(mut self, presets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.presets = presets.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the custom name list.
    pub fn with_custom<I, S>(mut self, custom: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom = custom.into_iter().map(Into::into).collect();
        self
    }

    /// Set the threshold.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the distance unit.
    pub fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }
}

fn check_unique(field: &str, values: &[String]) -> Result<()> {
    let mut seen = AHashSet::with_capacity(values.len());
    for value in values {
        if !seen.insert(value.as_str()) {
            return Err(OptypoError::config(format!(
                "duplicate entry '{value}' in {field}"
            )));
        }
    }
    Ok(())
}

//! Configuration schema definitions
//!
//! Shared configuration types for the picker and its host tools.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub typeahead: TypeaheadConfig,

    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl ConfigSchema {
    /// Check every section, reporting the first invalid value
    pub fn validate(&self) -> Result<()> {
        self.typeahead.validate()?;
        self.telemetry.validate()
    }
}

/// Typeahead picker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeaheadConfig {
    /// Maximum number of ranked results shown for a non-empty query
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Highest tolerated share of typos in a match (0.0 exact, 1.0 anything)
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Match without regard to letter case
    #[serde(default = "default_true")]
    pub ignore_case: bool,

    /// Picker heading
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            threshold: default_threshold(),
            ignore_case: true,
            title: default_title(),
        }
    }
}

impl TypeaheadConfig {
    fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(Error::config_invalid("typeahead.limit", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::config_invalid(
                "typeahead.threshold",
                format!("{} is outside 0.0..=1.0", self.threshold),
            ));
        }
        Ok(())
    }
}

fn default_limit() -> usize {
    50
}

fn default_threshold() -> f64 {
    0.6
}

fn default_title() -> String {
    "Select Item".to_string()
}

fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySettings {
    /// Default log filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,

    /// Include the event target in log lines
    #[serde(default)]
    pub show_target: bool,

    /// Also write daily-rolling log files into this directory
    #[serde(default)]
    pub log_dir: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
            show_target: false,
            log_dir: None,
        }
    }
}

impl TelemetrySettings {
    fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(Error::config_invalid("telemetry.log_level", "must not be empty"));
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

//! Submission configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Submission controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Longest a save may take before it counts as failed; `None` waits forever
    pub save_timeout_ms: Option<u64>,
    /// Buffered phase events per subscriber
    pub event_capacity: usize,
    /// How long "Saved!" stays up before the form resets
    pub saved_display_ms: u64,
}

impl SubmissionConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With save timeout
    #[inline]
    #[must_use]
    pub fn with_save_timeout(mut self, timeout: Duration) -> Self {
        self.save_timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Without save timeout
    #[inline]
    #[must_use]
    pub fn without_save_timeout(mut self) -> Self {
        self.save_timeout_ms = None;
        self
    }

    /// With event buffer size
    #[inline]
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// With "Saved!" display interval; zero resets right after the event
    #[inline]
    #[must_use]
    pub fn with_saved_display(mut self, interval: Duration) -> Self {
        self.saved_display_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// "Saved!" display interval as a duration
    #[inline]
    #[must_use]
    pub fn saved_display(&self) -> Duration {
        Duration::from_millis(self.saved_display_ms)
    }

    /// Save timeout as a duration
    #[inline]
    #[must_use]
    pub fn save_timeout(&self) -> Option<Duration> {
        self.save_timeout_ms.map(Duration::from_millis)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// `ConfigError::InvalidValue` for a zero event capacity or zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.event_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                key: "event_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.save_timeout_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "save_timeout_ms",
                reason: "must be positive; omit it to disable the timeout".to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate TOML text
    ///
    /// # Errors
    /// `ConfigError::Parse` for malformed TOML, `ConfigError::InvalidValue`
    /// for out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    ///
    /// # Errors
    /// `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`SubmissionConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            save_timeout_ms: Some(10_000),
            event_capacity: 16,
            saved_display_ms: 1_000,
        }
    }
}

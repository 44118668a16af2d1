//! Host-supplied page settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server template passes an optional JSON object to `ForumPage.init`. Every
//! field has a default matching the behavior forum pages relied on before
//! the settings existed, so an absent or partial object is valid.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    ALERT_DISMISS_MS, DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_MAX_UPLOAD_MB, TOAST_CONTAINER_ID, TOAST_LIFETIME_MS,
};
use crate::error::GlueError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub alert_dismiss_ms: u32,
    pub toast_lifetime_ms: u32,
    pub max_upload_mb: f64,
    pub allowed_extensions: Vec<String>,
    pub toast_container_id: String,
    /// Show a `danger` toast when a clipboard write fails, not just a log line.
    pub notify_copy_failure: bool,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: ALERT_DISMISS_MS,
            toast_lifetime_ms: TOAST_LIFETIME_MS,
            max_upload_mb: DEFAULT_MAX_UPLOAD_MB,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS.iter().map(|ext| (*ext).to_owned()).collect(),
            toast_container_id: TOAST_CONTAINER_ID.to_owned(),
            notify_copy_failure: false,
            log_level: "info".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse and validate settings. `None` or a blank string yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GlueError::Config`] for malformed JSON and
    /// [`GlueError::InvalidSetting`] for values that fail validation.
    pub fn from_json(raw: Option<&str>) -> Result<Self, GlueError> {
        let config = match raw.map(str::trim) {
            Some(text) if !text.is_empty() => serde_json::from_str::<Self>(text)?,
            _ => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`GlueError::InvalidSetting`] naming the first bad field.
    pub fn validate(&self) -> Result<(), GlueError> {
        if !self.max_upload_mb.is_finite() || self.max_upload_mb <= 0.0 {
            return Err(GlueError::InvalidSetting(format!(
                "max_upload_mb must be a positive number, got {}",
                self.max_upload_mb
            )));
        }
        if self.toast_container_id.trim().is_empty() {
            return Err(GlueError::InvalidSetting("toast_container_id must not be empty".to_owned()));
        }
        if self.log_level().is_none() {
            return Err(GlueError::InvalidSetting(format!("unknown log_level `{}`", self.log_level)));
        }
        Ok(())
    }

    /// The configured level, or `None` when the name is not a `log` level.
    pub fn log_level(&self) -> Option<log::Level> {
        self.log_level.parse::<log::Level>().ok()
    }
}

//! Page-level configuration.
//!
//! Pages can override any field by embedding a JSON object in
//! `<script type="application/json" id="editor-ui-config">`. Missing fields
//! keep their defaults.

use log::LevelFilter;
use serde::Deserialize;
use web_time::Duration;

use crate::error::Result;

/// Id of the `<script>` element holding the JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "editor-ui-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    /// Auto-dismiss delay for toasts that do not pass their own.
    pub toast_duration_ms: u64,
    pub toast_container_id: String,
    pub overlay_id: String,
    pub overlay_message: String,
    /// Quiet period before the auto-save callback runs.
    pub auto_save_delay_ms: u64,
    /// Editable region watched by the auto-save observer.
    pub content_element_id: String,
    pub save_button_id: String,
    /// CSS class prefix for elements this crate creates itself.
    pub class_prefix: String,
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 5000,
            toast_container_id: "toast-container".to_string(),
            overlay_id: "loading-overlay".to_string(),
            overlay_message: crate::overlay::DEFAULT_OVERLAY_MESSAGE.to_string(),
            auto_save_delay_ms: 30_000,
            content_element_id: "postContent".to_string(),
            save_button_id: "savePostBtn".to_string(),
            class_prefix: "wp-editor".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn auto_save_delay(&self) -> Duration {
        Duration::from_millis(self.auto_save_delay_ms)
    }

    /// Unknown level names fall back to `Info`.
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

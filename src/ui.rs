//! The editor UI service.
//!
//! Owns the toast stack, the selection slot, the overlay slot and the
//! auto-save debouncer, and drives them against one surface. The WASM
//! exports keep a single instance per page; tests build their own.

use log::{debug, error};
use serde_json::Value;
use web_time::{Duration, Instant};

use crate::api_error::{describe_api_error, DEFAULT_ERROR_MESSAGE};
use crate::autosave::AutoSave;
use crate::config::UiConfig;
use crate::notification::{NotificationCenter, NotificationHandle, NotificationId, Severity};
use crate::overlay::{OverlayController, OverlayHandle};
use crate::selection::{SelectionRecord, SelectionStore};
use crate::surface::Surface;

/// What [`EditorUi::report_error`] told the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub message: String,
    pub toast: NotificationHandle,
}

pub struct EditorUi<S: Surface> {
    config: UiConfig,
    surface: S,
    notifications: NotificationCenter,
    selection: SelectionStore<S::Element>,
    overlay: OverlayController,
    auto_save: AutoSave,
}

impl<S: Surface> EditorUi<S> {
    pub fn new(config: UiConfig, surface: S) -> Self {
        let auto_save = AutoSave::new(config.auto_save_delay());
        Self {
            config,
            surface,
            notifications: NotificationCenter::new(),
            selection: SelectionStore::new(),
            overlay: OverlayController::new(),
            auto_save,
        }
    }

    /// Shows a toast; `duration` defaults to the configured toast duration.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Option<Duration>,
        now: Instant,
    ) -> NotificationHandle {
        let duration = duration.unwrap_or_else(|| self.config.toast_duration());
        self.notifications
            .notify(&mut self.surface, message, severity, duration, now)
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.notifications.dismiss(&mut self.surface, id)
    }

    pub fn expire(&mut self, now: Instant) -> usize {
        self.notifications.expire(&mut self.surface, now)
    }

    pub fn select(&mut self, image: S::Element, metadata: Value) {
        self.selection.select(&mut self.surface, image, metadata);
    }

    pub fn selection(&self) -> Option<&SelectionRecord<S::Element>> {
        self.selection.current()
    }

    /// `message` defaults to the configured overlay message.
    pub fn show_overlay(&mut self, message: Option<&str>) -> OverlayHandle {
        let message = message.unwrap_or(self.config.overlay_message.as_str()).to_string();
        self.overlay.show(&mut self.surface, message)
    }

    pub fn hide_overlay(&mut self) {
        self.overlay.hide(&mut self.surface);
    }

    /// Translates a failed API call, logs it and shows it as an error toast.
    pub fn report_error(
        &mut self,
        error: &Value,
        fallback: Option<&str>,
        now: Instant,
    ) -> ErrorReport {
        error!("API error: {error}");
        let message = describe_api_error(error, fallback.unwrap_or(DEFAULT_ERROR_MESSAGE));
        let toast = self.notify(message.clone(), Severity::Error, None, now);
        ErrorReport { message, toast }
    }

    /// Records an edit and returns the new auto-save deadline.
    pub fn content_changed(&mut self, now: Instant) -> Instant {
        self.auto_save.content_changed(now)
    }

    pub fn poll_auto_save(&mut self, now: Instant) -> bool {
        let fired = self.auto_save.poll(now);
        if fired {
            debug!("auto-save callback ran");
        }
        fired
    }

    pub fn set_auto_save_callback(&mut self, callback: impl FnMut() + 'static) {
        self.auto_save.set_callback(callback);
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn overlay(&self) -> &OverlayController {
        &self.overlay
    }

    pub fn auto_save(&self) -> &AutoSave {
        &self.auto_save
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingSurface;
    use serde_json::json;

    fn ui() -> EditorUi<RecordingSurface> {
        EditorUi::new(UiConfig::default(), RecordingSurface::default())
    }

    #[test]
    fn notify_uses_the_configured_default_duration() {
        let mut ui = ui();
        let now = Instant::now();
        let handle = ui.notify("Post saved", Severity::Success, None, now);
        assert_eq!(handle.expires_at(), now + Duration::from_millis(5000));
    }

    #[test]
    fn report_error_shows_an_error_toast() {
        let mut ui = ui();
        let report = ui.report_error(
            &json!({ "response": { "status": 500 } }),
            Some("fallback"),
            Instant::now(),
        );
        assert!(report.message.contains("500"));

        let toast = &ui.surface().toasts[0];
        assert_eq!(toast.id, report.toast.id());
        assert_eq!(toast.severity, Severity::Error);
        assert_eq!(toast.message, report.message);
    }

    #[test]
    fn report_error_without_fallback_uses_the_generic_message() {
        let mut ui = ui();
        let report = ui.report_error(&json!({}), None, Instant::now());
        assert_eq!(report.message, "An error occurred");
    }

    #[test]
    fn overlay_defaults_to_the_configured_message() {
        let mut ui = ui();
        assert_eq!(ui.show_overlay(None).message(), "Processing...");
        assert_eq!(ui.show_overlay(Some("Publishing...")).message(), "Publishing...");
        assert_eq!(ui.surface().overlays, ["Publishing..."]);
    }
}

//! Full-viewport loading overlay.
//!
//! At most one overlay is on screen. Showing while one is already visible
//! replaces it instead of stacking a second node under the same id.

use log::debug;

use crate::surface::OverlaySurface;

pub const DEFAULT_OVERLAY_MESSAGE: &str = "Processing...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayHandle {
    message: String,
}

impl OverlayHandle {
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Default)]
pub struct OverlayController {
    active: Option<OverlayHandle>,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show<S: OverlaySurface + ?Sized>(
        &mut self,
        surface: &mut S,
        message: impl Into<String>,
    ) -> OverlayHandle {
        let message = message.into();
        if let Some(previous) = self.active.take() {
            debug!("replacing overlay \"{}\"", previous.message);
        }
        // Also clears overlays inserted by other scripts under the same id.
        surface.remove_overlay();
        surface.insert_overlay(&message);

        let handle = OverlayHandle { message };
        self.active = Some(handle.clone());
        handle
    }

    /// No-op when nothing is showing.
    pub fn hide<S: OverlaySurface + ?Sized>(&mut self, surface: &mut S) {
        surface.remove_overlay();
        self.active = None;
    }

    pub fn is_visible(&self) -> bool {
        self.active.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.active.as_ref().map(OverlayHandle::message)
    }
}

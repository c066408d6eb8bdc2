//! In-memory surface used by the unit tests.

use std::collections::{BTreeMap, BTreeSet};

use crate::notification::{Notification, NotificationId, Severity};
use crate::surface::{OverlaySurface, SelectionSurface, ToastSurface};

#[derive(Debug, Clone)]
pub struct RenderedToast {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}

/// Records every surface call; elements are plain numeric handles.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub container: bool,
    pub containers_created: usize,
    pub toasts: Vec<RenderedToast>,
    pub selected: BTreeSet<u32>,
    /// Indicator count per element.
    pub indicators: BTreeMap<u32, usize>,
    pub overlays: Vec<String>,
}

impl ToastSurface for RecordingSurface {
    fn ensure_toast_container(&mut self) {
        if !self.container {
            self.container = true;
            self.containers_created += 1;
        }
    }

    fn append_toast(&mut self, toast: &Notification) {
        self.toasts.push(RenderedToast {
            id: toast.id(),
            message: toast.message().to_string(),
            severity: toast.severity(),
        });
    }

    fn remove_toast(&mut self, id: NotificationId) {
        self.toasts.retain(|t| t.id != id);
    }
}

impl SelectionSurface for RecordingSurface {
    type Element = u32;

    fn clear_selected_markers(&mut self) {
        for element in std::mem::take(&mut self.selected) {
            self.indicators.remove(&element);
        }
    }

    fn mark_selected(&mut self, element: &u32) {
        self.selected.insert(*element);
    }

    fn remove_indicator(&mut self, element: &u32) {
        self.indicators.remove(element);
    }

    fn attach_indicator(&mut self, element: &u32) {
        *self.indicators.entry(*element).or_default() += 1;
    }
}

impl OverlaySurface for RecordingSurface {
    fn insert_overlay(&mut self, message: &str) {
        self.overlays.push(message.to_string());
    }

    fn remove_overlay(&mut self) {
        self.overlays.clear();
    }
}

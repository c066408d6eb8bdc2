//! Rendering backend seams.
//!
//! The notification stack, selection store and overlay controller decide
//! *what* is on screen; a surface puts it there. The DOM implementation lives
//! in [`crate::dom::DomSurface`]; tests use a recording surface instead.
//!
//! Surface methods are infallible from the caller's point of view. A surface
//! that hits a rendering error logs it and moves on.

use crate::notification::{Notification, NotificationId};

pub trait ToastSurface {
    /// Get-or-create the shared toast stack container.
    fn ensure_toast_container(&mut self);
    /// Append a toast after the existing ones.
    fn append_toast(&mut self, toast: &Notification);
    fn remove_toast(&mut self, id: NotificationId);
}

pub trait SelectionSurface {
    type Element;

    /// Remove the selected marker (and its indicator) from every element that carries it.
    fn clear_selected_markers(&mut self);
    fn mark_selected(&mut self, element: &Self::Element);
    fn remove_indicator(&mut self, element: &Self::Element);
    fn attach_indicator(&mut self, element: &Self::Element);
}

pub trait OverlaySurface {
    fn insert_overlay(&mut self, message: &str);
    /// Remove every overlay node. Must be a no-op when none exists.
    fn remove_overlay(&mut self);
}

/// Everything the editor UI needs from its backend.
pub trait Surface: ToastSurface + SelectionSurface + OverlaySurface {}

impl<T> Surface for T where T: ToastSurface + SelectionSurface + OverlaySurface {}

//! Toast notifications.
//!
//! `NotificationCenter` owns every toast on screen. Toasts stack in insertion
//! order with no cap and no deduplication, and each one goes away when its
//! auto-dismiss deadline passes or the user closes it.

use std::fmt;

use log::debug;
use web_time::{Duration, Instant};

use crate::surface::ToastSurface;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5000);

const ID_PREFIX: &str = "toast-";

/// Unique identifier for a toast, rendered as `toast-<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Parses the DOM id form (`toast-<n>`).
    pub fn from_dom_id(text: &str) -> Option<Self> {
        text.strip_prefix(ID_PREFIX)?.parse().ok().map(Self)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ID_PREFIX}{}", self.0)
    }
}

/// Determines the toast's background and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Maps a severity name; anything unrecognised is shown as `Info`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Bootstrap background utility class.
    pub fn bg_class(&self) -> &'static str {
        match self {
            Severity::Info => "bg-info",
            Severity::Success => "bg-success",
            Severity::Warning => "bg-warning",
            Severity::Error => "bg-danger",
        }
    }

    /// Font Awesome icon classes.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Severity::Info => "fas fa-info-circle",
            Severity::Success => "fas fa-check-circle",
            Severity::Warning | Severity::Error => "fas fa-exclamation-triangle",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    message: String,
    severity: Severity,
    expires_at: Instant,
}

impl Notification {
    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    fn is_due(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}

/// Returned by [`NotificationCenter::notify`] so callers can schedule or
/// trigger dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationHandle {
    id: NotificationId,
    expires_at: Instant,
}

impl NotificationHandle {
    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    /// Oldest first.
    visible: Vec<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a toast and returns its handle. Never fails.
    pub fn notify<S: ToastSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
        now: Instant,
    ) -> NotificationHandle {
        surface.ensure_toast_container();

        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let notification = Notification {
            id,
            message: message.into(),
            severity,
            expires_at: now + duration,
        };
        surface.append_toast(&notification);
        debug!(
            "{id} shown ({}, {} ms)",
            severity.name(),
            duration.as_millis()
        );

        let handle = NotificationHandle {
            id,
            expires_at: notification.expires_at,
        };
        self.visible.push(notification);
        handle
    }

    /// Removes a toast before its deadline.
    ///
    /// Returns `false` if it was already gone.
    pub fn dismiss<S: ToastSurface + ?Sized>(&mut self, surface: &mut S, id: NotificationId) -> bool {
        let Some(pos) = self.visible.iter().position(|n| n.id == id) else {
            return false;
        };
        self.visible.remove(pos);
        surface.remove_toast(id);
        debug!("{id} dismissed");
        true
    }

    /// Removes every toast whose deadline is at or before `now`.
    pub fn expire<S: ToastSurface + ?Sized>(&mut self, surface: &mut S, now: Instant) -> usize {
        let mut expired = 0;
        self.visible.retain(|n| {
            if n.is_due(now) {
                surface.remove_toast(n.id);
                expired += 1;
                false
            } else {
                true
            }
        });
        expired
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.visible.iter().find(|n| n.id == id)
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

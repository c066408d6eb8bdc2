//! A fake page: a flat list of nodes standing in for the document.

use wp_ai_editor_web::notification::{Notification, NotificationId, Severity};
use wp_ai_editor_web::surface::{OverlaySurface, SelectionSurface, ToastSurface};

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    ToastContainer,
    Toast {
        id: NotificationId,
        text: String,
        class: String,
        icon: String,
    },
    Overlay(String),
    /// Checkmark attached to the image with this handle.
    Checkmark(&'static str),
}

#[derive(Debug, Default)]
pub struct FakePage {
    pub nodes: Vec<Node>,
    /// Image handles carrying the selected marker.
    pub marked: Vec<&'static str>,
}

impl FakePage {
    pub fn toasts(&self) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Toast { .. }))
            .collect()
    }

    pub fn toast_texts(&self) -> Vec<String> {
        self.nodes
            .iter()
            .filter_map(|n| match n {
                Node::Toast { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: impl Fn(&Node) -> bool) -> usize {
        self.nodes.iter().filter(|n| wanted(n)).count()
    }
}

impl ToastSurface for FakePage {
    fn ensure_toast_container(&mut self) {
        if !self.nodes.contains(&Node::ToastContainer) {
            self.nodes.push(Node::ToastContainer);
        }
    }

    fn append_toast(&mut self, toast: &Notification) {
        let severity: Severity = toast.severity();
        self.nodes.push(Node::Toast {
            id: toast.id(),
            text: toast.message().to_string(),
            class: severity.bg_class().to_string(),
            icon: severity.icon_class().to_string(),
        });
    }

    fn remove_toast(&mut self, id: NotificationId) {
        self.nodes
            .retain(|n| !matches!(n, Node::Toast { id: toast, .. } if *toast == id));
    }
}

impl SelectionSurface for FakePage {
    type Element = &'static str;

    fn clear_selected_markers(&mut self) {
        for image in std::mem::take(&mut self.marked) {
            self.remove_indicator(&image);
        }
    }

    fn mark_selected(&mut self, element: &&'static str) {
        if !self.marked.contains(element) {
            self.marked.push(*element);
        }
    }

    fn remove_indicator(&mut self, element: &&'static str) {
        self.nodes.retain(|n| n != &Node::Checkmark(*element));
    }

    fn attach_indicator(&mut self, element: &&'static str) {
        self.nodes.push(Node::Checkmark(*element));
    }
}

impl OverlaySurface for FakePage {
    fn insert_overlay(&mut self, message: &str) {
        self.nodes.push(Node::Overlay(message.to_string()));
    }

    fn remove_overlay(&mut self) {
        self.nodes.retain(|n| !matches!(n, Node::Overlay(_)));
    }
}

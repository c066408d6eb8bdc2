//! `web_sys` implementation of the rendering surfaces.
//!
//! Markup follows Bootstrap 5: toasts are `.toast.show` boxes in a fixed
//! `.toast-container`, the overlay is a fixed full-viewport flex box with a
//! `.spinner-border`. Messages are inserted as text nodes, never as HTML.

use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

use super::{body, query_all, query_all_in, warn_on_err};
use crate::config::UiConfig;
use crate::error::Result;
use crate::notification::{Notification, NotificationId};
use crate::selection::SELECTED_CLASS;
use crate::styles::indicator_class;
use crate::surface::{OverlaySurface, SelectionSurface, ToastSurface};

type CloseHandler = Closure<dyn FnMut(Event)>;

pub struct DomSurface {
    document: Document,
    toast_container_id: String,
    overlay_id: String,
    indicator_class: String,
    /// Called (on a later task) when the user clicks a toast's close button.
    on_close: Rc<dyn Fn(NotificationId)>,
    /// Close-button listeners, dropped together with their toast.
    close_handlers: HashMap<NotificationId, CloseHandler>,
}

impl DomSurface {
    pub fn new(document: Document, config: &UiConfig, on_close: Rc<dyn Fn(NotificationId)>) -> Self {
        Self {
            document,
            toast_container_id: config.toast_container_id.clone(),
            overlay_id: config.overlay_id.clone(),
            indicator_class: indicator_class(&config.class_prefix),
            on_close,
            close_handlers: HashMap::new(),
        }
    }

    fn div(&self, class: &str) -> Result<Element> {
        let div = self.document.create_element("div")?;
        div.set_class_name(class);
        Ok(div)
    }

    fn toast_container(&self) -> Result<Element> {
        if let Some(container) = self.document.get_element_by_id(&self.toast_container_id) {
            return Ok(container);
        }
        let container = self.div("toast-container position-fixed top-0 end-0 p-3")?;
        container.set_id(&self.toast_container_id);
        container.set_attribute("style", "z-index: 9999;")?;
        body(&self.document)?.append_child(&container)?;
        Ok(container)
    }

    fn build_toast(&mut self, toast: &Notification) -> Result<Element> {
        let severity = toast.severity();
        let element = self.div(&format!(
            "toast show align-items-center text-white {} border-0",
            severity.bg_class()
        ))?;
        element.set_id(&toast.id().to_string());
        element.set_attribute("role", "alert")?;
        element.set_attribute("aria-live", "assertive")?;
        element.set_attribute("aria-atomic", "true")?;

        let row = self.div("d-flex")?;
        let text = self.div("toast-body")?;
        let icon = self.document.create_element("i")?;
        icon.set_class_name(&format!("{} me-2", severity.icon_class()));
        text.append_child(&icon)?;
        text.append_child(&self.document.create_text_node(toast.message()))?;

        let close = self.document.create_element("button")?;
        close.set_attribute("type", "button")?;
        close.set_class_name("btn-close btn-close-white me-2 m-auto");
        close.set_attribute("aria-label", "Close")?;

        let id = toast.id();
        let on_close = Rc::clone(&self.on_close);
        // Deferred so the listener is never dropped while it is running.
        let handler = CloseHandler::new(move |_: Event| {
            let on_close = Rc::clone(&on_close);
            Timeout::new(0, move || on_close(id)).forget();
        });
        close.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        self.close_handlers.insert(id, handler);

        row.append_child(&text)?;
        row.append_child(&close)?;
        element.append_child(&row)?;
        Ok(element)
    }

    fn try_append_toast(&mut self, toast: &Notification) -> Result<()> {
        let container = self.toast_container()?;
        let element = self.build_toast(toast)?;
        container.append_child(&element)?;
        Ok(())
    }

    fn try_insert_overlay(&self, message: &str) -> Result<()> {
        let overlay = self.div(
            "position-fixed top-0 start-0 w-100 h-100 d-flex align-items-center justify-content-center",
        )?;
        overlay.set_id(&self.overlay_id);
        overlay.set_attribute("style", "background: rgba(0,0,0,0.7); z-index: 9998;")?;

        let content = self.div("text-center text-white")?;
        let spinner = self.div("spinner-border spinner-border-lg mb-3")?;
        spinner.set_attribute("role", "status")?;
        let heading = self.document.create_element("h5")?;
        heading.set_text_content(Some(message));

        content.append_child(&spinner)?;
        content.append_child(&heading)?;
        overlay.append_child(&content)?;
        body(&self.document)?.append_child(&overlay)?;
        Ok(())
    }

    fn remove_indicators(&self, element: &Element) -> Result<()> {
        for indicator in query_all_in(element, &format!(".{}", self.indicator_class))? {
            indicator.remove();
        }
        Ok(())
    }

    fn try_clear_selected_markers(&self) -> Result<()> {
        for element in query_all(&self.document, &format!(".{SELECTED_CLASS}"))? {
            element.class_list().remove_1(SELECTED_CLASS)?;
            self.remove_indicators(&element)?;
        }
        Ok(())
    }

    fn try_attach_indicator(&self, element: &Element) -> Result<()> {
        let check = self.div(&format!(
            "position-absolute top-0 end-0 m-2 {}",
            self.indicator_class
        ))?;
        let icon = self.document.create_element("i")?;
        icon.set_class_name("fas fa-check-circle text-success fa-2x");
        check.append_child(&icon)?;

        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            html.style().set_property("position", "relative")?;
        }
        element.append_child(&check)?;
        Ok(())
    }
}

impl ToastSurface for DomSurface {
    fn ensure_toast_container(&mut self) {
        warn_on_err("toast container", self.toast_container());
    }

    fn append_toast(&mut self, toast: &Notification) {
        if warn_on_err("toast", self.try_append_toast(toast)).is_none() {
            self.close_handlers.remove(&toast.id());
        }
    }

    fn remove_toast(&mut self, id: NotificationId) {
        if let Some(element) = self.document.get_element_by_id(&id.to_string()) {
            element.remove();
        }
        self.close_handlers.remove(&id);
    }
}

impl SelectionSurface for DomSurface {
    type Element = Element;

    fn clear_selected_markers(&mut self) {
        warn_on_err("clearing selection", self.try_clear_selected_markers());
    }

    fn mark_selected(&mut self, element: &Element) {
        warn_on_err(
            "marking selection",
            element.class_list().add_1(SELECTED_CLASS).map_err(Into::into),
        );
    }

    fn remove_indicator(&mut self, element: &Element) {
        warn_on_err("removing checkmark", self.remove_indicators(element));
    }

    fn attach_indicator(&mut self, element: &Element) {
        warn_on_err("adding checkmark", self.try_attach_indicator(element));
    }
}

impl OverlaySurface for DomSurface {
    fn insert_overlay(&mut self, message: &str) {
        warn_on_err("loading overlay", self.try_insert_overlay(message));
    }

    fn remove_overlay(&mut self) {
        while let Some(overlay) = self.document.get_element_by_id(&self.overlay_id) {
            overlay.remove();
        }
    }
}

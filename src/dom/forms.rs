//! Bootstrap-style client-side form validation.

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlFormElement};

use super::{query_all, warn_on_err};
use crate::error::Result;

pub const NEEDS_VALIDATION_SELECTOR: &str = ".needs-validation";
pub const VALIDATED_CLASS: &str = "was-validated";

/// Blocks submission of invalid `.needs-validation` forms and focuses the
/// first invalid field. Every submit attempt marks the form `was-validated`.
pub fn bind_form_validation(document: &Document) -> Result<usize> {
    let mut bound = 0;
    for element in query_all(document, NEEDS_VALIDATION_SELECTOR)? {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let target = form.clone();
        let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if !target.check_validity() {
                event.prevent_default();
                event.stop_propagation();
                if let Ok(Some(first)) = target.query_selector(":invalid") {
                    if let Some(field) = first.dyn_ref::<HtmlElement>() {
                        warn_on_err("focusing invalid field", field.focus().map_err(Into::into));
                    }
                }
            }
            warn_on_err(
                "marking form validated",
                target.class_list().add_1(VALIDATED_CLASS).map_err(Into::into),
            );
        });
        form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())?;
        // Lives as long as the page.
        handler.forget();
        bound += 1;
    }
    debug!("form validation bound to {bound} form(s)");
    Ok(bound)
}

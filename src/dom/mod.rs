//! DOM side of the editor UI.
//!
//! Everything in here talks to `web_sys`. Helpers return `Result` and use
//! `?`; the public entry points in `lib.rs` log failures through
//! [`warn_on_err`] instead of handing them to JavaScript.

pub mod auto_save;
pub mod bootstrap;
pub mod forms;
pub mod keyboard;
pub mod lazy_load;
mod surface;
pub mod widgets;

pub use surface::DomSurface;

use js_sys::{Reflect, JSON};
use log::warn;
use serde_json::{Map, Value};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, NodeList, Window};

use crate::config::{UiConfig, CONFIG_ELEMENT_ID};
use crate::error::{Result, UiError};
use crate::progress::{percent_label, progress_percent};
use crate::styles::{generate_ui_css, style_element_id};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(UiError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(UiError::NoBody)
}

/// Logs and drops an error.
pub fn warn_on_err<T>(context: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("{context}: {err}");
            None
        }
    }
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(document.query_selector_all(selector)?))
}

pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(root.query_selector_all(selector)?))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn is_disabled(element: &Element) -> bool {
    match element.dyn_ref::<HtmlButtonElement>() {
        Some(button) => button.disabled(),
        None => element.has_attribute("disabled"),
    }
}

fn set_disabled(element: &HtmlElement, disabled: bool) -> Result<()> {
    if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if disabled {
        element.set_attribute("disabled", "")?;
    } else {
        element.remove_attribute("disabled")?;
    }
    Ok(())
}

/// Reads the page's JSON overrides; a broken block keeps the defaults.
pub fn load_config(document: &Document) -> UiConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return UiConfig::default();
    };
    warn_on_err("ignoring #editor-ui-config", UiConfig::from_json(&text)).unwrap_or_default()
}

/// Adds the crate's `<style>` element unless it is already there.
pub fn inject_stylesheet(document: &Document, config: &UiConfig) -> Result<()> {
    let id = style_element_id(&config.class_prefix);
    if document.get_element_by_id(&id).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(&id);
    style.set_text_content(Some(&generate_ui_css(config)));
    match document.head() {
        Some(head) => head.append_child(&style)?,
        None => body(document)?.append_child(&style)?,
    };
    Ok(())
}

/// Disables a button and swaps its content for a spinner and `text`.
pub fn show_loading_state(element: &HtmlElement, text: &str) -> Result<()> {
    let document = document()?;
    set_disabled(element, true)?;
    element.set_inner_html("");
    let spinner = document.create_element("i")?;
    spinner.set_class_name("fas fa-spinner fa-spin me-2");
    element.append_child(&spinner)?;
    element.append_child(&document.create_text_node(text))?;
    Ok(())
}

/// Re-enables a button and restores the markup it had before loading.
pub fn hide_loading_state(element: &HtmlElement, original_html: &str) -> Result<()> {
    set_disabled(element, false)?;
    element.set_inner_html(original_html);
    Ok(())
}

pub fn update_progress(element: &HtmlElement, current: f64, total: f64) -> Result<()> {
    let percent = progress_percent(current, total);
    let label = percent_label(percent);
    element.style().set_property("width", &label)?;
    element.set_attribute("aria-valuenow", &percent.to_string())?;
    element.set_text_content(Some(&label));
    Ok(())
}

/// JSON view of a JS value; `None` for `undefined`, functions and cycles.
pub fn js_to_json(value: &JsValue) -> Option<Value> {
    let text = JSON::stringify(value).ok()?.as_string()?;
    serde_json::from_str(&text).ok()
}

pub fn json_to_js(value: &Value) -> JsValue {
    serde_json::to_string(value)
        .ok()
        .and_then(|text| JSON::parse(&text).ok())
        .unwrap_or(JsValue::NULL)
}

/// Builds the view [`crate::api_error::describe_api_error`] expects from a
/// thrown JS value.
///
/// Reads fields one by one: `Error.message` is not enumerable, and HTTP
/// client responses and requests usually hold cycles that `JSON.stringify`
/// rejects.
pub fn api_error_view(error: &JsValue) -> Value {
    let mut view = Map::new();
    if let Some(response) = truthy_field(error, "response") {
        let mut inner = Map::new();
        for key in ["data", "status"] {
            if let Some(field) = truthy_field(&response, key) {
                inner.insert(key.to_string(), js_to_json(&field).unwrap_or(Value::Bool(true)));
            }
        }
        view.insert("response".to_string(), Value::Object(inner));
    }
    if truthy_field(error, "request").is_some() {
        view.insert("request".to_string(), Value::Bool(true));
    }
    if let Some(message) = truthy_field(error, "message") {
        let message = match message.as_string() {
            Some(text) => Value::String(text),
            None => js_to_json(&message).unwrap_or(Value::Null),
        };
        view.insert("message".to_string(), message);
    }
    Value::Object(view)
}

fn truthy_field(value: &JsValue, key: &str) -> Option<JsValue> {
    if !value.is_object() {
        return None;
    }
    Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .filter(JsValue::is_truthy)
}

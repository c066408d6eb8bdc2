//! Browser UI layer for the WordPress AI Editor.
//!
//! Compiled to WASM via wasm-bindgen. Provides:
//! - Toast notifications stacked in a fixed top-right container
//! - A full-viewport loading overlay with a spinner
//! - Single-image selection in the stock-photo grid
//! - Form validation, lazy images, keyboard shortcuts and a debounced
//!   auto-save watcher, bound once the DOM is ready
//!
//! The page gets one [`ui::EditorUi`] over a [`dom::DomSurface`], created on
//! first use and kept for the page's lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Object, Reflect};
use log::{info, warn, LevelFilter};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};
use web_time::{Duration, Instant};

pub mod api_error;
pub mod autosave;
pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod notification;
pub mod overlay;
pub mod progress;
pub mod selection;
pub mod shortcuts;
pub mod styles;
pub mod surface;
pub mod ui;
pub mod validation;

#[cfg(test)]
mod test_utils;

use dom::DomSurface;
use notification::{NotificationId, Severity};
use ui::EditorUi;

type PageUi = EditorUi<DomSurface>;

/// Global that older page scripts call into.
pub const NAMESPACE: &str = "WordPressAIEditor";

/// `setTimeout` treats anything above `i32::MAX` as 0.
const MAX_TIMER_MS: u32 = i32::MAX as u32;

thread_local! {
    static UI: RefCell<Option<PageUi>> = const { RefCell::new(None) };
    static AUTO_SAVE_TIMER: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

fn with_ui<R>(f: impl FnOnce(&mut PageUi) -> R) -> Option<R> {
    UI.with(|cell| {
        let Ok(mut slot) = cell.try_borrow_mut() else {
            warn!("editor UI is busy; call dropped");
            return None;
        };
        if slot.is_none() {
            *slot = dom::warn_on_err("editor UI setup", create_ui());
        }
        slot.as_mut().map(f)
    })
}

fn create_ui() -> error::Result<PageUi> {
    let document = dom::document()?;
    let config = dom::load_config(&document);
    log::set_max_level(config.log_level_filter());

    let on_close: Rc<dyn Fn(NotificationId)> = Rc::new(|id| {
        with_ui(|ui| ui.dismiss(id));
    });
    let surface = DomSurface::new(document, &config, on_close);
    Ok(EditorUi::new(config, surface))
}

fn timer_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(MAX_TIMER_MS).min(MAX_TIMER_MS)
}

/// Removes the toast (and anything older) once `deadline` is reached.
fn schedule_expiry(deadline: Instant, delay: Duration) {
    Timeout::new(timer_millis(delay), move || {
        with_ui(|ui| ui.expire(deadline));
    })
    .forget();
}

fn content_changed() {
    let Some((deadline, delay)) =
        with_ui(|ui| (ui.content_changed(Instant::now()), ui.auto_save().delay()))
    else {
        return;
    };
    let timer = Timeout::new(timer_millis(delay), move || {
        with_ui(|ui| ui.poll_auto_save(deadline));
    });
    // Dropping the previous timer cancels it.
    AUTO_SAVE_TIMER.with(|slot| *slot.borrow_mut() = Some(timer));
}

fn boot() {
    let Some(config) = with_ui(|ui| ui.config().clone()) else {
        return;
    };
    let Some(window) = dom::warn_on_err("boot", dom::window()) else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    dom::warn_on_err("stylesheet", dom::inject_stylesheet(&document, &config));
    dom::warn_on_err("form validation", dom::forms::bind_form_validation(&document));
    dom::warn_on_err(
        "lazy loading",
        dom::lazy_load::bind_lazy_loading(&window, &document),
    );
    dom::warn_on_err(
        "keyboard shortcuts",
        dom::keyboard::bind_keyboard_shortcuts(&document, &config.save_button_id),
    );
    dom::warn_on_err(
        "auto-save",
        dom::auto_save::watch_content(&document, &config.content_element_id, content_changed),
    );
    dom::warn_on_err(
        "tooltips",
        dom::widgets::init_tooltips_and_popovers(&document),
    );

    info!("WordPress AI Editor initialized successfully");
}

fn expose(api: &Object, name: &str, function: JsValue) -> error::Result<()> {
    Reflect::set(api, &JsValue::from_str(name), &function)?;
    Ok(())
}

/// Publishes `window.WordPressAIEditor` with the functions inline page
/// scripts use. Arguments arrive untyped and are converted here.
fn publish_namespace(window: &Window) -> error::Result<()> {
    let api = Object::new();

    let show = Closure::<dyn Fn(JsValue, JsValue, JsValue) -> JsValue>::new(
        |message: JsValue, kind: JsValue, duration: JsValue| {
            let message = message.as_string().unwrap_or_default();
            let duration_ms = duration.as_f64().map(|ms| ms as u32);
            show_toast(&message, kind.as_string(), duration_ms)
                .map(JsValue::from)
                .unwrap_or(JsValue::UNDEFINED)
        },
    );
    expose(&api, "showToast", show.into_js_value())?;

    let show_overlay = Closure::<dyn Fn(JsValue)>::new(|message: JsValue| {
        show_loading_overlay(message.as_string());
    });
    expose(&api, "showLoadingOverlay", show_overlay.into_js_value())?;

    let hide_overlay = Closure::<dyn Fn()>::new(hide_loading_overlay);
    expose(&api, "hideLoadingOverlay", hide_overlay.into_js_value())?;

    let api_error = Closure::<dyn Fn(JsValue, JsValue) -> String>::new(
        |error: JsValue, fallback: JsValue| handle_api_error(error, fallback.as_string()),
    );
    expose(&api, "handleApiError", api_error.into_js_value())?;

    let select = Closure::<dyn Fn(JsValue, JsValue)>::new(|element: JsValue, data: JsValue| {
        match element.dyn_into::<Element>() {
            Ok(element) => select_image_from_grid(element, data),
            Err(_) => warn!("selectImageFromGrid needs an element"),
        }
    });
    expose(&api, "selectImageFromGrid", select.into_js_value())?;

    let validate = Closure::<dyn Fn(JsValue) -> bool>::new(|url: JsValue| {
        url.as_string().is_some_and(|url| validate_wordpress_url(&url))
    });
    expose(&api, "validateWordPressUrl", validate.into_js_value())?;

    Reflect::set(window, &JsValue::from_str(NAMESPACE), &api)?;
    Ok(())
}

/// Module entry point: binds the page once the DOM is ready.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    dom::warn_on_err("logger", logging::init(LevelFilter::Info));

    let window = dom::window()?;
    dom::warn_on_err(NAMESPACE, publish_namespace(&window));

    let document = dom::document()?;
    let ready_state = Reflect::get(&document, &JsValue::from_str("readyState"))?;
    if ready_state.as_string().as_deref() == Some("loading") {
        let on_ready = Closure::once_into_js(boot);
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        boot();
    }
    Ok(())
}

/// Show a toast. Returns its id (`toast-<n>`).
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>, duration_ms: Option<u32>) -> Option<String> {
    let severity = Severity::from_name(kind.as_deref().unwrap_or("info"));
    let (handle, delay) = with_ui(|ui| {
        let delay = duration_ms
            .map(|ms| Duration::from_millis(ms.into()))
            .unwrap_or_else(|| ui.config().toast_duration());
        (ui.notify(message, severity, Some(delay), Instant::now()), delay)
    })?;
    schedule_expiry(handle.expires_at(), delay);
    Some(handle.id().to_string())
}

/// Dismiss a toast early. Returns `false` if it is already gone.
#[wasm_bindgen(js_name = dismissToast)]
pub fn dismiss_toast(id: &str) -> bool {
    let Some(id) = NotificationId::from_dom_id(id) else {
        return false;
    };
    with_ui(|ui| ui.dismiss(id)).unwrap_or(false)
}

#[wasm_bindgen(js_name = showLoadingOverlay)]
pub fn show_loading_overlay(message: Option<String>) {
    with_ui(|ui| ui.show_overlay(message.as_deref()));
}

#[wasm_bindgen(js_name = hideLoadingOverlay)]
pub fn hide_loading_overlay() {
    with_ui(|ui| ui.hide_overlay());
}

/// Show a failed API call as an error toast and return the message shown.
#[wasm_bindgen(js_name = handleApiError)]
pub fn handle_api_error(error: JsValue, fallback: Option<String>) -> String {
    let view = dom::api_error_view(&error);
    let fallback = fallback.as_deref();
    let Some(report) = with_ui(|ui| ui.report_error(&view, fallback, Instant::now())) else {
        return api_error::describe_api_error(
            &view,
            fallback.unwrap_or(api_error::DEFAULT_ERROR_MESSAGE),
        );
    };
    let delay = report.toast.expires_at().saturating_duration_since(Instant::now());
    schedule_expiry(report.toast.expires_at(), delay);
    report.message
}

#[wasm_bindgen(js_name = selectImageFromGrid)]
pub fn select_image_from_grid(element: Element, data: JsValue) {
    let metadata = dom::js_to_json(&data).unwrap_or(Value::Null);
    with_ui(|ui| ui.select(element, metadata));
}

/// Data passed with the current selection, or `null`.
#[wasm_bindgen(js_name = selectedImage)]
pub fn selected_image() -> JsValue {
    with_ui(|ui| ui.selection().map(|record| dom::json_to_js(&record.metadata)))
        .flatten()
        .unwrap_or(JsValue::NULL)
}

#[wasm_bindgen(js_name = validateWordPressUrl)]
pub fn validate_wordpress_url(url: &str) -> bool {
    validation::is_http_url(url)
}

#[wasm_bindgen(js_name = updateProgress)]
pub fn update_progress(current: f64, total: f64, element: Option<HtmlElement>) {
    if let Some(element) = element {
        dom::warn_on_err("progress", dom::update_progress(&element, current, total));
    }
}

#[wasm_bindgen(js_name = showLoadingState)]
pub fn show_loading_state(element: Option<HtmlElement>, text: Option<String>) {
    if let Some(element) = element {
        let text = text.as_deref().unwrap_or("Loading...");
        dom::warn_on_err("loading state", dom::show_loading_state(&element, text));
    }
}

#[wasm_bindgen(js_name = hideLoadingState)]
pub fn hide_loading_state(element: Option<HtmlElement>, original_html: &str) {
    if let Some(element) = element {
        dom::warn_on_err("loading state", dom::hide_loading_state(&element, original_html));
    }
}

/// Replace the auto-save callback. It runs on its own task after the
/// content has been quiet for the configured delay.
#[wasm_bindgen(js_name = setAutoSaveCallback)]
pub fn set_auto_save_callback(callback: js_sys::Function) {
    with_ui(move |ui| {
        ui.set_auto_save_callback(move || {
            let callback = callback.clone();
            Timeout::new(0, move || {
                if let Err(err) = callback.call0(&JsValue::NULL) {
                    warn!("auto-save callback threw: {err:?}");
                }
            })
            .forget();
        });
    });
}

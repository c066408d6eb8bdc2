//! Bindings to the parts of Bootstrap's JS API the page uses.
//!
//! All calls are `catch`ed: a page that loaded without `bootstrap.bundle.js`
//! gets a logged warning instead of an exception.

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Modal;

    #[wasm_bindgen(static_method_of = Modal, js_namespace = bootstrap, js_name = getInstance, catch)]
    pub fn get_instance(element: &Element) -> Result<Option<Modal>, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn hide(this: &Modal) -> Result<(), JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Popover;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub fn new(element: &Element) -> Result<Popover, JsValue>;
}

/// Whether `window.bootstrap` exists.
pub fn is_loaded() -> bool {
    Reflect::has(&js_sys::global(), &JsValue::from_str("bootstrap")).unwrap_or(false)
}

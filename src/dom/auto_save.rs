//! Watches the post body for edits.

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, MutationObserver, MutationObserverInit};

use crate::error::Result;

/// Calls `on_change` for every batch of mutations under `#content_id`.
///
/// Returns `false` when the page has no such element (not an edit page).
pub fn watch_content(
    document: &Document,
    content_id: &str,
    on_change: impl Fn() + 'static,
) -> Result<bool> {
    let Some(content) = document.get_element_by_id(content_id) else {
        return Ok(false);
    };

    let callback = Closure::<dyn FnMut(Array, MutationObserver)>::new(
        move |_records: Array, _observer: MutationObserver| on_change(),
    );
    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    options.set_character_data(true);
    observer.observe_with_options(&content, &options)?;
    Ok(true)
}

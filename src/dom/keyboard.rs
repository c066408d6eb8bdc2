//! Page-wide `keydown` listener for [`Shortcut`]s.

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent};

use super::{bootstrap, is_disabled, query_all};
use crate::error::Result;
use crate::shortcuts::Shortcut;

pub const OPEN_MODAL_SELECTOR: &str = ".modal.show";

pub fn bind_keyboard_shortcuts(document: &Document, save_button_id: &str) -> Result<()> {
    let page = document.clone();
    let save_button_id = save_button_id.to_string();
    let handler = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        match Shortcut::from_key(&event.key(), event.ctrl_key(), event.meta_key()) {
            Some(Shortcut::Save) => {
                event.prevent_default();
                click_save(&page, &save_button_id);
            }
            Some(Shortcut::CloseModals) => close_open_modals(&page),
            None => {}
        }
    });
    document.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn click_save(document: &Document, save_button_id: &str) {
    let Some(button) = document.get_element_by_id(save_button_id) else {
        return;
    };
    if is_disabled(&button) {
        debug!("save shortcut ignored: #{save_button_id} is disabled");
        return;
    }
    if let Some(button) = button.dyn_ref::<HtmlElement>() {
        button.click();
    }
}

fn close_open_modals(document: &Document) {
    let Ok(open) = query_all(document, OPEN_MODAL_SELECTOR) else {
        return;
    };
    for modal in open {
        match bootstrap::Modal::get_instance(&modal) {
            Ok(Some(instance)) => {
                if let Err(err) = instance.hide() {
                    warn!("could not hide modal: {err:?}");
                }
            }
            Ok(None) => {}
            Err(err) => warn!("bootstrap.Modal unavailable: {err:?}"),
        }
    }
}

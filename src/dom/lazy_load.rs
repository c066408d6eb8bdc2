//! Deferred image loading.
//!
//! `<img data-src="..." class="lazy">` gets its real `src` the first time it
//! scrolls into view, then stops being observed.

use js_sys::{Array, Reflect};
use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, Window};

use super::{query_all, warn_on_err};
use crate::error::Result;

pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const LAZY_CLASS: &str = "lazy";

/// Returns how many images are being observed; 0 when the browser has no
/// `IntersectionObserver`.
pub fn bind_lazy_loading(window: &Window, document: &Document) -> Result<usize> {
    if !Reflect::has(window, &JsValue::from_str("IntersectionObserver"))? {
        debug!("IntersectionObserver unavailable; images load eagerly");
        return Ok(0);
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let image = entry.target();
                reveal(&image);
                observer.unobserve(&image);
            }
        },
    );
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    let images = query_all(document, LAZY_IMAGE_SELECTOR)?;
    for image in &images {
        observer.observe(image);
    }
    debug!("lazy loading {} image(s)", images.len());
    Ok(images.len())
}

fn reveal(image: &Element) {
    if let Some(src) = image.get_attribute("data-src") {
        warn_on_err("lazy image src", image.set_attribute("src", &src).map_err(Into::into));
    }
    warn_on_err(
        "lazy image class",
        image.class_list().remove_1(LAZY_CLASS).map_err(Into::into),
    );
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn revealed_image_gets_its_source() {
        let document = crate::dom::document().unwrap();
        let image = document.create_element("img").unwrap();
        image.set_attribute("data-src", "/media/harbor.jpg").unwrap();
        image.set_class_name(LAZY_CLASS);

        reveal(&image);

        assert_eq!(image.get_attribute("src").as_deref(), Some("/media/harbor.jpg"));
        assert!(!image.class_list().contains(LAZY_CLASS));
    }
}

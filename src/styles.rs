//! Stylesheet for the elements this crate creates.
//!
//! Bootstrap covers toasts, spinners and the overlay layout; this adds the
//! selection marker, the checkmark indicator, the lazy-image fade-in and the
//! toast entry animation.
//! Injected once as a `<style>` element at boot.

use crate::config::UiConfig;
use crate::selection::SELECTED_CLASS;

/// Class of the checkmark attached to the selected image.
pub fn indicator_class(class_prefix: &str) -> String {
    format!("{class_prefix}-selection-check")
}

/// Id of the injected `<style>` element.
pub fn style_element_id(class_prefix: &str) -> String {
    format!("{class_prefix}-styles")
}

pub fn generate_ui_css(config: &UiConfig) -> String {
    let prefix = &config.class_prefix;

    format!(
        r#"
.{selected} {{
    outline: 3px solid var(--bs-success, #198754);
    outline-offset: -3px;
}}
.{prefix}-selection-check {{
    pointer-events: none;
    z-index: 10;
}}
img.lazy {{
    opacity: 0;
}}
img[data-src]:not(.lazy) {{
    transition: opacity 0.3s ease-in;
}}
@keyframes {prefix}-toast-in {{
    from {{ opacity: 0; transform: translateY(-0.5rem); }}
    to {{ opacity: 1; transform: none; }}
}}
.toast-container > .toast {{
    animation: {prefix}-toast-in 0.15s ease-out;
}}
"#,
        selected = SELECTED_CLASS,
    )
}

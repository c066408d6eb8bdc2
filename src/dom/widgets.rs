//! Bootstrap tooltips and popovers declared in markup.

use log::{debug, warn};
use web_sys::Document;

use super::{bootstrap, query_all};
use crate::error::Result;

pub const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;
pub const POPOVER_SELECTOR: &str = r#"[data-bs-toggle="popover"]"#;

/// Returns `(tooltips, popovers)` created.
pub fn init_tooltips_and_popovers(document: &Document) -> Result<(usize, usize)> {
    if !bootstrap::is_loaded() {
        warn!("bootstrap is not loaded; skipping tooltips and popovers");
        return Ok((0, 0));
    }

    let mut tooltips = 0;
    for element in query_all(document, TOOLTIP_SELECTOR)? {
        match bootstrap::Tooltip::new(&element) {
            Ok(_) => tooltips += 1,
            Err(err) => warn!("tooltip failed: {err:?}"),
        }
    }

    let mut popovers = 0;
    for element in query_all(document, POPOVER_SELECTOR)? {
        match bootstrap::Popover::new(&element) {
            Ok(_) => popovers += 1,
            Err(err) => warn!("popover failed: {err:?}"),
        }
    }

    debug!("{tooltips} tooltip(s), {popovers} popover(s)");
    Ok((tooltips, popovers))
}

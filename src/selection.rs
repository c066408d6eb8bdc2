//! Single-slot image selection.
//!
//! Clicking a thumbnail in the image grid selects it: the previous marker and
//! checkmark go away, the new element gets both, and the record is
//! overwritten. The "use selected image" action elsewhere on the page reads
//! the record back.

use serde_json::Value;

use crate::surface::SelectionSurface;

/// CSS class carried by the one selected element.
pub const SELECTED_CLASS: &str = "image-selected";

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionRecord<E> {
    pub image: E,
    /// Stored verbatim, whatever shape the caller passed.
    pub metadata: Value,
}

#[derive(Debug)]
pub struct SelectionStore<E> {
    current: Option<SelectionRecord<E>>,
}

impl<E> Default for SelectionStore<E> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<E> SelectionStore<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select<S>(&mut self, surface: &mut S, image: E, metadata: Value)
    where
        S: SelectionSurface<Element = E> + ?Sized,
    {
        surface.clear_selected_markers();
        surface.mark_selected(&image);
        surface.remove_indicator(&image);
        surface.attach_indicator(&image);
        self.current = Some(SelectionRecord { image, metadata });
    }

    pub fn current(&self) -> Option<&SelectionRecord<E>> {
        self.current.as_ref()
    }
}

//! Global keyboard shortcuts.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl+S / Cmd+S: click the save button.
    Save,
    /// Escape: hide every open modal.
    CloseModals,
}

impl Shortcut {
    /// Maps a `keydown` event's `key` and modifier state.
    pub fn from_key(key: &str, ctrl: bool, meta: bool) -> Option<Self> {
        match key {
            "s" if ctrl || meta => Some(Shortcut::Save),
            "Escape" => Some(Shortcut::CloseModals),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_needs_ctrl_or_cmd() {
        assert_eq!(Shortcut::from_key("s", true, false), Some(Shortcut::Save));
        assert_eq!(Shortcut::from_key("s", false, true), Some(Shortcut::Save));
        assert_eq!(Shortcut::from_key("s", false, false), None);
        // Shift+Ctrl+S reports "S" and is left to the browser.
        assert_eq!(Shortcut::from_key("S", true, false), None);
    }

    #[test]
    fn escape_closes_modals_regardless_of_modifiers() {
        assert_eq!(Shortcut::from_key("Escape", false, false), Some(Shortcut::CloseModals));
        assert_eq!(Shortcut::from_key("Escape", true, false), Some(Shortcut::CloseModals));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(Shortcut::from_key("Enter", true, true), None);
    }
}

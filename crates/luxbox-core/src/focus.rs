#![forbid(unsafe_code)]

//! Focus-trap arithmetic.
//!
//! The DOM side queries the modal subtree for focusable descendants (see
//! [`FOCUSABLE_SELECTORS`]) and filters them to visible elements; the wrap
//! decision itself is plain index arithmetic and lives here.

/// Selectors for focusable candidates inside the modal: interactive, not
/// disabled, not inert, and with no negative tabindex.
pub const FOCUSABLE_SELECTORS: [&str; 2] = [
    "button:not([disabled]):not([inert])",
    "[tabindex]:not([tabindex^=\"-\"]):not([inert])",
];

/// Joined selector string for a single `querySelectorAll` call.
#[must_use]
pub fn focusable_selector() -> String {
    FOCUSABLE_SELECTORS.join(", ")
}

/// Direction of a Tab key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    /// Tab.
    Forward,
    /// Shift+Tab.
    Backward,
}

/// Wrap decision for a Tab press inside the modal.
///
/// Returns the index to focus when tabbing must wrap (first→last on
/// Shift+Tab, last→first on Tab), `None` when native tabbing should
/// proceed — including when focus is on none of the listed elements.
#[must_use]
pub fn wrap_target(focused: Option<usize>, len: usize, direction: TabDirection) -> Option<usize> {
    let focused = focused?;
    if len == 0 || focused >= len {
        return None;
    }
    match direction {
        TabDirection::Backward if focused == 0 => Some(len - 1),
        TabDirection::Forward if focused == len - 1 => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_element_wrap_law() {
        // [A, B]: Tab on B goes to A, Shift+Tab on A goes to B.
        assert_eq!(wrap_target(Some(1), 2, TabDirection::Forward), Some(0));
        assert_eq!(wrap_target(Some(0), 2, TabDirection::Backward), Some(1));
    }

    #[test]
    fn interior_presses_pass_through() {
        assert_eq!(wrap_target(Some(0), 3, TabDirection::Forward), None);
        assert_eq!(wrap_target(Some(1), 3, TabDirection::Forward), None);
        assert_eq!(wrap_target(Some(1), 3, TabDirection::Backward), None);
        assert_eq!(wrap_target(Some(2), 3, TabDirection::Backward), None);
    }

    #[test]
    fn single_element_wraps_to_itself() {
        assert_eq!(wrap_target(Some(0), 1, TabDirection::Forward), Some(0));
        assert_eq!(wrap_target(Some(0), 1, TabDirection::Backward), Some(0));
    }

    #[test]
    fn focus_outside_list_passes_through() {
        assert_eq!(wrap_target(None, 2, TabDirection::Forward), None);
        assert_eq!(wrap_target(Some(5), 2, TabDirection::Forward), None);
    }

    #[test]
    fn empty_list_passes_through() {
        assert_eq!(wrap_target(Some(0), 0, TabDirection::Forward), None);
        assert_eq!(wrap_target(None, 0, TabDirection::Backward), None);
    }

    #[test]
    fn selector_joins_all_candidates() {
        let joined = focusable_selector();
        assert!(joined.contains("button:not([disabled])"));
        assert!(joined.contains("[tabindex]"));
        assert_eq!(joined.matches(", ").count(), FOCUSABLE_SELECTORS.len() - 1);
    }
}

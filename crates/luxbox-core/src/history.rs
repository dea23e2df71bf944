#![forbid(unsafe_code)]

//! Browser-history marker codec.
//!
//! Opening the modal pushes one history entry whose state object carries a
//! marker, so native back-navigation maps to close. When closing through
//! any other path, the controller checks whether the live history state is
//! still that marker and, if so, navigates back one step to consume the
//! entry instead of letting the session's history grow.

use serde::{Deserialize, Serialize};

const MARKER_VALUE: &str = "close";

/// JSON payload of the history entry pushed on open.
pub const MARKER_JSON: &str = r#"{"luxbox":"close"}"#;

/// The state object identifying the lightbox's "open" checkpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryMarker {
    luxbox: String,
}

impl Default for HistoryMarker {
    fn default() -> Self {
        Self {
            luxbox: MARKER_VALUE.to_string(),
        }
    }
}

impl HistoryMarker {
    /// JSON form of the marker, for `history.pushState`.
    #[must_use]
    pub const fn to_json() -> &'static str {
        MARKER_JSON
    }

    /// Whether a serialized history state is the lightbox marker.
    #[must_use]
    pub fn matches_json(state: &str) -> bool {
        serde_json::from_str::<Self>(state).is_ok_and(|marker| marker.luxbox == MARKER_VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_json_round_trips() {
        let parsed: HistoryMarker =
            serde_json::from_str(HistoryMarker::to_json()).expect("marker parses");
        assert_eq!(parsed, HistoryMarker::default());
        let encoded = serde_json::to_string(&HistoryMarker::default()).expect("marker encodes");
        assert_eq!(encoded, MARKER_JSON);
    }

    #[test]
    fn marker_matches_itself() {
        assert!(HistoryMarker::matches_json(HistoryMarker::to_json()));
    }

    #[test]
    fn foreign_states_do_not_match() {
        assert!(!HistoryMarker::matches_json("null"));
        assert!(!HistoryMarker::matches_json(r#"{"page": 3}"#));
        assert!(!HistoryMarker::matches_json(r#"{"luxbox":"open"}"#));
        assert!(!HistoryMarker::matches_json("not json"));
        assert!(!HistoryMarker::matches_json(""));
    }
}

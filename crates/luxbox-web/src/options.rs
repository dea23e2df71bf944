#![forbid(unsafe_code)]

//! Bridge from the host's option object to the core config merge.
//!
//! The wasm layer stringifies whatever the caller passed to the
//! constructor and hands the JSON here; a missing or empty object yields
//! the documented defaults.

use luxbox_core::{ConfigOverrides, LightboxConfig};

/// Parse a JSON option object into overrides.
///
/// Errors only when the input is not a JSON object with the expected
/// value types; unknown keys are ignored.
pub fn parse_overrides(json: &str) -> Result<ConfigOverrides, serde_json::Error> {
    serde_json::from_str(json)
}

/// Merge a JSON option object over the defaults.
pub fn merged_config(json: &str) -> Result<LightboxConfig, serde_json::Error> {
    Ok(parse_overrides(json)?.apply(LightboxConfig::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = merged_config("{}").expect("empty object parses");
        assert_eq!(config, LightboxConfig::default());
    }

    #[test]
    fn user_keys_win() {
        let config = merged_config(r#"{"selector": ".gallery a", "transitionDuration": 200}"#)
            .expect("valid options");
        assert_eq!(config.selector, ".gallery a");
        assert_eq!(config.transition_duration_ms, 200);
        assert!(config.swipe_close);
    }

    #[test]
    fn malformed_options_are_an_error() {
        assert!(merged_config("not json").is_err());
        assert!(merged_config(r#"{"threshold": "wide"}"#).is_err());
    }
}

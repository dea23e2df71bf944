#![forbid(unsafe_code)]

//! Widget configuration and option merging.
//!
//! [`LightboxConfig`] is immutable once merged for a session. The host passes
//! a partial option object (JSON, camelCase keys) which deserializes into
//! [`ConfigOverrides`]; [`ConfigOverrides::apply`] is a shallow merge where
//! user keys win and missing keys keep the documented defaults.
//!
//! The reduced-motion preference never mutates the stored config. The
//! effective duration is derived per open via
//! [`LightboxConfig::effective_duration_ms`], so a reduced-motion session
//! does not leak a 1 ms duration into later opens.

use serde::Deserialize;

/// Transition duration applied when the user prefers reduced motion.
pub const REDUCED_MOTION_DURATION_MS: u32 = 1;

/// Merged, session-immutable lightbox configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxConfig {
    /// Query selector for trigger anchors registered at init.
    pub selector: String,
    /// Accessible label on the dialog root.
    pub lightbox_label: String,
    /// Accessible label on the loading indicator.
    pub loading_indicator_label: String,
    /// Enable the vertical swipe-to-dismiss gesture.
    pub swipe_close: bool,
    /// Enable wheel-to-dismiss.
    pub scroll_close: bool,
    /// Drag distance in pixels required to commit a swipe close.
    pub threshold: f64,
    /// Transform/fade transition duration in milliseconds.
    pub transition_duration_ms: u32,
    /// CSS easing descriptor for the transform/fade transitions.
    pub transition_timing_function: String,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            selector: ".lightbox".to_string(),
            lightbox_label: "This is a dialog window which overlays the main content of the \
                             page. The modal shows the enlarged image. Pressing the Escape key \
                             will close the modal and bring you back to where you were on the \
                             page."
                .to_string(),
            loading_indicator_label: "Image loading".to_string(),
            swipe_close: true,
            scroll_close: true,
            threshold: 100.0,
            transition_duration_ms: 300,
            transition_timing_function: "cubic-bezier(0.2, 0, 0.2, 1)".to_string(),
        }
    }
}

impl LightboxConfig {
    /// Duration to use for the current open, honoring reduced motion without
    /// writing the override back into the config.
    #[must_use]
    pub const fn effective_duration_ms(&self, reduced_motion: bool) -> u32 {
        if reduced_motion {
            REDUCED_MOTION_DURATION_MS
        } else {
            self.transition_duration_ms
        }
    }
}

/// Partial user options, deserialized from the host's option object.
///
/// Field names match the public JS API (camelCase). Unknown keys are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub selector: Option<String>,
    #[serde(rename = "lightboxLabel")]
    pub lightbox_label: Option<String>,
    #[serde(rename = "lightboxLoadingIndicatorLabel")]
    pub loading_indicator_label: Option<String>,
    #[serde(rename = "swipeClose")]
    pub swipe_close: Option<bool>,
    #[serde(rename = "scrollClose")]
    pub scroll_close: Option<bool>,
    pub threshold: Option<f64>,
    #[serde(rename = "transitionDuration")]
    pub transition_duration_ms: Option<u32>,
    #[serde(rename = "transitionTimingFunction")]
    pub transition_timing_function: Option<String>,
}

impl ConfigOverrides {
    /// Shallow-merge these overrides over `base`: present keys win,
    /// absent keys keep the base value.
    #[must_use]
    pub fn apply(self, base: LightboxConfig) -> LightboxConfig {
        LightboxConfig {
            selector: self.selector.unwrap_or(base.selector),
            lightbox_label: self.lightbox_label.unwrap_or(base.lightbox_label),
            loading_indicator_label: self
                .loading_indicator_label
                .unwrap_or(base.loading_indicator_label),
            swipe_close: self.swipe_close.unwrap_or(base.swipe_close),
            scroll_close: self.scroll_close.unwrap_or(base.scroll_close),
            threshold: self.threshold.unwrap_or(base.threshold),
            transition_duration_ms: self
                .transition_duration_ms
                .unwrap_or(base.transition_duration_ms),
            transition_timing_function: self
                .transition_timing_function
                .unwrap_or(base.transition_timing_function),
        }
    }
}

#![forbid(unsafe_code)]

//! Thumbnail↔full-image transform geometry.
//!
//! On every open the widget captures the trigger's bounding rectangle and,
//! once the enlarged image has loaded and rendered, the image's rectangle.
//! [`TransformDelta::between`] reduces the pair to the four numbers that
//! parameterize the enter animation and its reverse on close:
//!
//! - `scale_x = thumbnail.width / full.width` (`scale_y` analogous)
//! - `dx = thumbnail.x - full.x` (`dy` analogous)
//!
//! Applying `translate(dx, dy) scale(scale_x, scale_y)` to the full image
//! snaps it exactly onto the thumbnail's footprint; clearing the transform
//! animates it back to its natural size and position. The delta is
//! recomputed on every open — the thumbnail may have moved since the last
//! one, e.g. because the page scrolled.

// ---------------------------------------------------------------------------
// Rectangles
// ---------------------------------------------------------------------------

/// An on-screen rectangle in viewport CSS pixels, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle has no visible extent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

// ---------------------------------------------------------------------------
// Transform delta
// ---------------------------------------------------------------------------

/// The translate/scale pair that maps the full image onto the thumbnail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformDelta {
    pub scale_x: f64,
    pub scale_y: f64,
    pub dx: f64,
    pub dy: f64,
}

impl TransformDelta {
    /// The no-op transform.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        dx: 0.0,
        dy: 0.0,
    };

    /// Compute the delta that maps `full` onto `thumbnail`.
    #[must_use]
    pub fn between(thumbnail: Rect, full: Rect) -> Self {
        Self {
            scale_x: thumbnail.width / full.width,
            scale_y: thumbnail.height / full.height,
            dx: thumbnail.x - full.x,
            dy: thumbnail.y - full.y,
        }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale_x == 1.0 && self.scale_y == 1.0 && self.dx == 0.0 && self.dy == 0.0
    }

    /// CSS `transform` value snapping the full image onto the thumbnail.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}, {})",
            self.dx, self.dy, self.scale_x, self.scale_y
        )
    }
}

// ---------------------------------------------------------------------------
// CSS fragments
// ---------------------------------------------------------------------------

/// Identity translation applied to the image container when a drag ends.
pub const DRAG_IDENTITY: &str = "translate3d(0, 0, 0)";

/// Zero-duration transition used for the pre-paint snap (phase A).
pub const SNAP_TRANSITION: &str = "transform 0s";

/// Live drag translation for the signed vertical movement `end_y - start_y`.
#[must_use]
pub fn drag_css(movement: f64) -> String {
    format!("translate3d(0, {}px, 0)", movement.round())
}

/// Transition shorthand for one property with the configured timing.
#[must_use]
pub fn transition_css(property: &str, duration_ms: u32, easing: &str) -> String {
    format!("{property} {duration_ms}ms {easing}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn delta_formulas() {
        // Thumbnail 100x80 at (40, 600), full image 400x320 at (200, 100).
        let thumb = Rect::new(40.0, 600.0, 100.0, 80.0);
        let full = Rect::new(200.0, 100.0, 400.0, 320.0);
        let delta = TransformDelta::between(thumb, full);
        assert_eq!(delta.scale_x, 0.25);
        assert_eq!(delta.scale_y, 0.25);
        assert_eq!(delta.dx, -160.0);
        assert_eq!(delta.dy, 500.0);
    }

    #[test]
    fn identical_rects_give_identity() {
        let r = Rect::new(10.0, 20.0, 300.0, 200.0);
        assert!(TransformDelta::between(r, r).is_identity());
    }

    #[test]
    fn css_output() {
        let delta = TransformDelta {
            scale_x: 0.25,
            scale_y: 0.5,
            dx: -160.0,
            dy: 500.0,
        };
        assert_eq!(delta.to_css(), "translate(-160px, 500px) scale(0.25, 0.5)");
    }

    #[test]
    fn drag_css_keeps_sign() {
        assert_eq!(drag_css(-20.4), "translate3d(0, -20px, 0)");
        assert_eq!(drag_css(12.6), "translate3d(0, 13px, 0)");
        assert_eq!(drag_css(0.0), "translate3d(0, 0px, 0)");
    }

    #[test]
    fn transition_shorthand() {
        assert_eq!(
            transition_css("transform", 300, "cubic-bezier(0.2, 0, 0.2, 1)"),
            "transform 300ms cubic-bezier(0.2, 0, 0.2, 1)"
        );
        assert_eq!(transition_css("opacity", 1, "ease"), "opacity 1ms ease");
    }

    #[test]
    fn empty_rect() {
        assert!(Rect::default().is_empty());
        assert!(Rect::new(5.0, 5.0, 0.0, 10.0).is_empty());
        assert!(!Rect::new(5.0, 5.0, 1.0, 1.0).is_empty());
    }

    proptest! {
        // The delta of a rect against itself is always the identity.
        #[test]
        fn self_delta_is_identity(
            x in -5000.0f64..5000.0,
            y in -5000.0f64..5000.0,
            w in 1.0f64..4000.0,
            h in 1.0f64..4000.0,
        ) {
            let r = Rect::new(x, y, w, h);
            prop_assert!(TransformDelta::between(r, r).is_identity());
        }

        // Scales are the exact width/height ratios.
        #[test]
        fn scale_is_ratio(
            tw in 1.0f64..2000.0,
            th in 1.0f64..2000.0,
            fw in 1.0f64..2000.0,
            fh in 1.0f64..2000.0,
        ) {
            let thumb = Rect::new(0.0, 0.0, tw, th);
            let full = Rect::new(0.0, 0.0, fw, fh);
            let delta = TransformDelta::between(thumb, full);
            prop_assert_eq!(delta.scale_x, tw / fw);
            prop_assert_eq!(delta.scale_y, th / fh);
        }
    }
}

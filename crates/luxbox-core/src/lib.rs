#![forbid(unsafe_code)]

//! Host-agnostic lightbox widget logic.
//!
//! This crate holds everything about the lightbox that does not need a DOM:
//! option merging ([`config`]), the modal open/close state machine
//! ([`state`]), the thumbnail↔full-image transform geometry ([`geometry`]),
//! the swipe-to-close tracker ([`swipe`]), focus-wrap arithmetic ([`focus`]),
//! trigger target filtering ([`target`]), the browser-history marker codec
//! ([`history`]), and the notification names ([`event`]).
//!
//! The `luxbox-web` crate wires these pieces to `web-sys`. Keeping the logic
//! here means every law of the widget is testable with a plain native
//! `cargo test`, no browser required.

pub mod config;
pub mod error;
pub mod event;
pub mod focus;
pub mod geometry;
pub mod history;
pub mod state;
pub mod swipe;
pub mod target;

pub use config::{ConfigOverrides, LightboxConfig};
pub use error::LightboxError;
pub use event::LightboxEvent;
pub use geometry::{Rect, TransformDelta};
pub use state::{ModalState, ModalStateMachine};
pub use swipe::{SwipeOutcome, SwipeTracker};

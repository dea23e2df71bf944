#![forbid(unsafe_code)]

//! Browser frontend for the luxbox image lightbox.
//!
//! Everything DOM-touching lives behind `cfg(target_arch = "wasm32")`:
//! [`dom`] builds and owns the modal subtree, [`wasm`] exports the public
//! [`Luxbox`] class and drives the open/close orchestration, the two-phase
//! transform animation, the swipe gesture, focus trapping, and the
//! history integration. [`options`] (plain Rust) bridges the host's JSON
//! option object to `luxbox-core`'s config merge and is testable natively.

pub mod options;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::Luxbox;

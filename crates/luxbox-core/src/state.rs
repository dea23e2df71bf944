#![forbid(unsafe_code)]

//! Modal open/close state machine.
//!
//! # State Machine
//!
//! `Closed → Opening → Open → Closing → Closed`, with one extra edge
//! `Opening → Closed` for the non-image trigger no-op path (the open is
//! abandoned before anything was acquired).
//!
//! # Invariants
//!
//! 1. `request_open` succeeds only from `Closed`; anywhere else it is the
//!    `AlreadyOpen` usage error.
//! 2. `request_close` succeeds from `Open` or `Opening`; anywhere else it is
//!    the `AlreadyClosed` usage error. Closing from `Opening` covers a close
//!    requested before the image finished loading.
//! 3. `mark_open` and `mark_closed` are internal completion edges and only
//!    move forward from `Opening` / `Closing` respectively; from any other
//!    state they are no-ops.
//! 4. There is no cancellation of an in-flight transition: the opposite
//!    request during `Opening`/`Closing` is a contract violation by the
//!    caller, not a race to resolve here.

use crate::error::LightboxError;

/// Lifecycle phase of the single modal instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Tracks the modal lifecycle and enforces the open/close contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModalStateMachine {
    state: ModalState,
}

impl ModalStateMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> ModalState {
        self.state
    }

    /// Begin an open. Fails unless the modal is fully closed.
    pub fn request_open(&mut self) -> Result<(), LightboxError> {
        match self.state {
            ModalState::Closed => {
                self.state = ModalState::Opening;
                Ok(())
            }
            _ => Err(LightboxError::AlreadyOpen),
        }
    }

    /// Abandon an open before any resources were acquired (non-image
    /// trigger). Defined no-op from any state other than `Opening`.
    pub fn abort_open(&mut self) {
        if self.state == ModalState::Opening {
            self.state = ModalState::Closed;
        }
    }

    /// The image loaded and the enter animation was scheduled.
    pub fn mark_open(&mut self) {
        if self.state == ModalState::Opening {
            self.state = ModalState::Open;
        }
    }

    /// Begin a close. Fails unless the modal is open or still opening.
    pub fn request_close(&mut self) -> Result<(), LightboxError> {
        match self.state {
            ModalState::Open | ModalState::Opening => {
                self.state = ModalState::Closing;
                Ok(())
            }
            _ => Err(LightboxError::AlreadyClosed),
        }
    }

    /// The reverse animation finished and the image was detached.
    pub fn mark_closed(&mut self) {
        if self.state == ModalState::Closing {
            self.state = ModalState::Closed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle() {
        let mut machine = ModalStateMachine::new();
        assert_eq!(machine.state(), ModalState::Closed);

        machine.request_open().expect("open from closed");
        assert_eq!(machine.state(), ModalState::Opening);

        machine.mark_open();
        assert_eq!(machine.state(), ModalState::Open);

        machine.request_close().expect("close from open");
        assert_eq!(machine.state(), ModalState::Closing);

        machine.mark_closed();
        assert_eq!(machine.state(), ModalState::Closed);
    }

    #[test]
    fn double_open_is_a_usage_error() {
        let mut machine = ModalStateMachine::new();
        machine.request_open().expect("first open");
        assert_eq!(machine.request_open(), Err(LightboxError::AlreadyOpen));

        // Still an error once fully open.
        machine.mark_open();
        assert_eq!(machine.request_open(), Err(LightboxError::AlreadyOpen));
    }

    #[test]
    fn double_close_is_a_usage_error() {
        let mut machine = ModalStateMachine::new();
        assert_eq!(machine.request_close(), Err(LightboxError::AlreadyClosed));

        machine.request_open().expect("open");
        machine.mark_open();
        machine.request_close().expect("first close");
        assert_eq!(machine.request_close(), Err(LightboxError::AlreadyClosed));

        machine.mark_closed();
        assert_eq!(machine.request_close(), Err(LightboxError::AlreadyClosed));
    }

    #[test]
    fn close_allowed_while_still_opening() {
        let mut machine = ModalStateMachine::new();
        machine.request_open().expect("open");
        machine.request_close().expect("close before load completed");
        assert_eq!(machine.state(), ModalState::Closing);
    }

    #[test]
    fn abort_open_returns_to_closed() {
        let mut machine = ModalStateMachine::new();
        machine.request_open().expect("open");
        machine.abort_open();
        assert_eq!(machine.state(), ModalState::Closed);

        // A fresh open is valid again after the no-op path.
        machine.request_open().expect("reopen after abort");
    }

    #[test]
    fn completion_edges_ignore_wrong_phase() {
        let mut machine = ModalStateMachine::new();
        machine.mark_open();
        assert_eq!(machine.state(), ModalState::Closed);
        machine.mark_closed();
        assert_eq!(machine.state(), ModalState::Closed);
        machine.abort_open();
        assert_eq!(machine.state(), ModalState::Closed);
    }
}

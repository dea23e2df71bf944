#![forbid(unsafe_code)]

//! Usage errors for the modal state machine.

/// A caller violated the open/close contract.
///
/// Both variants indicate a programming mistake in the embedding
/// application, not a recoverable runtime condition; they are raised
/// immediately and never swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxError {
    /// `open()` was called while the modal is already open or opening.
    AlreadyOpen,
    /// `close()` was called while the modal is already closed or closing.
    AlreadyClosed,
}

impl core::fmt::Display for LightboxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AlreadyOpen => write!(f, "lightbox is already open"),
            Self::AlreadyClosed => write!(f, "lightbox is already closed"),
        }
    }
}

impl std::error::Error for LightboxError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_violation() {
        assert_eq!(LightboxError::AlreadyOpen.to_string(), "lightbox is already open");
        assert_eq!(LightboxError::AlreadyClosed.to_string(), "lightbox is already closed");
    }
}

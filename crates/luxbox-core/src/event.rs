#![forbid(unsafe_code)]

//! Notification names for the public event stream.

/// Notifications dispatched on the lightbox root and consumed via
/// `on`/`off`. Each is a named signal with no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxEvent {
    Open,
    Close,
    Destroy,
}

impl LightboxEvent {
    /// Stable wire name used for the DOM event type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Destroy => "destroy",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "open" => Some(Self::Open),
            "close" => Some(Self::Close),
            "destroy" => Some(Self::Destroy),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for event in [LightboxEvent::Open, LightboxEvent::Close, LightboxEvent::Destroy] {
            assert_eq!(LightboxEvent::from_name(event.name()), Some(event));
        }
    }

    #[test]
    fn unknown_names_rejected() {
        assert_eq!(LightboxEvent::from_name("opened"), None);
        assert_eq!(LightboxEvent::from_name(""), None);
    }
}

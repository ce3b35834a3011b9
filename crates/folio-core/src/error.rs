#![forbid(unsafe_code)]

//! Wiring error type.
//!
//! Missing page elements are never errors; each behavior simply skips
//! itself. [`WireError`] only covers host-level failures that a real browser
//! can report while the controller is being wired.

/// Failure reported by a host while wiring the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    /// Attaching an event listener failed.
    Listener {
        /// Behavior role that lost the listener (`"nav-link"`, `"cta"`, ...).
        role: &'static str,
        /// DOM event name (`"click"`, `"scroll"`, ...).
        event: &'static str,
        /// Host-provided description.
        reason: String,
    },
    /// Options could not be turned into a [`PageConfig`](crate::PageConfig).
    Config(String),
    /// No global `window` (not running inside a page).
    NoWindow,
    /// The window has no `document`.
    NoDocument,
}

impl WireError {
    /// Shorthand for [`WireError::Listener`] as a host reports it.
    ///
    /// The role is `"page"` until [`WireError::with_role`] names the behavior.
    #[must_use]
    pub fn listener(event: &'static str, reason: impl Into<String>) -> Self {
        Self::Listener {
            role: "page",
            event,
            reason: reason.into(),
        }
    }

    /// Attribute a listener failure to `role`. Other variants are unchanged.
    #[must_use]
    pub fn with_role(self, role: &'static str) -> Self {
        match self {
            Self::Listener { event, reason, .. } => Self::Listener { role, event, reason },
            other => other,
        }
    }
}

impl core::fmt::Display for WireError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Listener { role, event, reason } => {
                write!(f, "{role}: failed to attach {event} listener: {reason}")
            }
            Self::Config(reason) => write!(f, "invalid page options: {reason}"),
            Self::NoWindow => f.write_str("no global window"),
            Self::NoDocument => f.write_str("window has no document"),
        }
    }
}

impl std::error::Error for WireError {}

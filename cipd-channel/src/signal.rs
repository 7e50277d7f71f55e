//! Signals carried by the broadcast channel.

use std::fmt;

use cipd_core::constants::{ANNOUNCE_EVENT, REQUEST_EVENT};
use cipd_core::types::ProviderDetail;

/// The two signal kinds of the protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalKind {
    /// Ask every provider to announce itself
    Request,
    /// A provider announcing itself
    Announce,
}

impl SignalKind {
    /// Wire name of the signal.
    pub fn event_name(&self) -> &'static str {
        match self {
            SignalKind::Request => REQUEST_EVENT,
            SignalKind::Announce => ANNOUNCE_EVENT,
        }
    }

    /// Maps a wire name back to a signal kind.
    pub fn from_event_name(name: &str) -> Option<Self> {
        match name {
            REQUEST_EVENT => Some(SignalKind::Request),
            ANNOUNCE_EVENT => Some(SignalKind::Announce),
            _ => None,
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

/// A signal with its payload.
#[derive(Clone, Debug)]
pub enum Signal {
    /// No payload
    Request,
    /// The announcing provider's descriptor
    Announce(ProviderDetail),
}

impl Signal {
    /// Returns the kind of this signal.
    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::Request => SignalKind::Request,
            Signal::Announce(_) => SignalKind::Announce,
        }
    }

    /// Returns the announced descriptor, if this is an announce signal.
    pub fn detail(&self) -> Option<&ProviderDetail> {
        match self {
            Signal::Announce(detail) => Some(detail),
            Signal::Request => None,
        }
    }
}

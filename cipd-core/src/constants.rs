//! Protocol constants for CIPD.
//!
//! The signal names are part of the wire contract shared with wallet
//! extensions that already speak the protocol. They must not change.

// ═══════════════════════════════════════════════════════════════════════════════
// SIGNAL NAMES
// ═══════════════════════════════════════════════════════════════════════════════

/// Namespace prefix shared by every CIPD signal.
pub const EVENT_NAMESPACE: &str = "cosmos";

/// Signal a provider broadcasts to announce itself.
pub const ANNOUNCE_EVENT: &str = "cosmos:announceProvider";

/// Signal a consumer broadcasts to ask every provider to announce itself.
pub const REQUEST_EVENT: &str = "cosmos:requestProvider";

// ═══════════════════════════════════════════════════════════════════════════════
// PROVIDER INFO
// ═══════════════════════════════════════════════════════════════════════════════

/// Prefix every provider icon must carry (RFC-2397 image data URI).
pub const ICON_DATA_URI_PREFIX: &str = "data:image/";

/// Separator between labels of a reverse-domain identity.
pub const RDNS_SEPARATOR: char = '.';

// ═══════════════════════════════════════════════════════════════════════════════
// POLYFILL DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Delay between a request signal and the legacy detector's re-announcement.
/// Gives a store that is still being constructed time to attach its listener.
pub const DEFAULT_REANNOUNCE_DELAY_MS: u64 = 10;

/// Environment variable overriding [`DEFAULT_REANNOUNCE_DELAY_MS`].
pub const ENV_REANNOUNCE_DELAY_MS: &str = "CIPD_REANNOUNCE_DELAY_MS";

/// Environment variable toggling re-announcement on request signals.
pub const ENV_REANNOUNCE_ON_REQUEST: &str = "CIPD_REANNOUNCE_ON_REQUEST";

//! Error types for CIPD.
//!
//! Discovery itself never surfaces errors to store subscribers: malformed
//! announcements are dropped and failed detections are skipped. These
//! variants exist for the places where a caller asked for something directly
//! (parsing an identity, decoding a wire payload, calling a wallet).

use thiserror::Error;

/// Result type alias using `CipdError`.
pub type Result<T> = std::result::Result<T, CipdError>;

/// Main error type for all CIPD operations.
#[derive(Debug, Error)]
pub enum CipdError {
    // ═══════════════════════════════════════════════════════════════════════════
    // IDENTITY & ANNOUNCEMENT ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Reverse-domain identity is empty or malformed.
    #[error("Invalid rdns '{value}': {reason}")]
    InvalidRdns {
        /// The rejected input
        value: String,
        /// What is wrong with it
        reason: String,
    },

    /// Announcement payload is missing or has a malformed field.
    #[error("Invalid announcement: {0}")]
    InvalidAnnouncement(String),

    /// Icon is not a self-contained image data URI.
    #[error("Invalid icon: {0}")]
    InvalidIcon(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // DETECTION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// A global property path exists but does not have the expected shape.
    #[error("Unexpected global shape at '{path}'")]
    UnexpectedGlobalShape {
        /// Dotted path up to the offending property
        path: String,
    },

    /// Legacy wallet detection failed.
    #[error("Detection failed for '{rdns}': {reason}")]
    DetectionFailed {
        /// Identity of the wallet being detected
        rdns: String,
        /// Underlying failure
        reason: String,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // PROVIDER (WALLET) ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The provider does not implement an optional capability.
    #[error("Capability not supported by provider: {0}")]
    Unsupported(String),

    /// The wallet rejected or failed a request.
    #[error("Provider error: {0}")]
    Provider(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // SERIALIZATION & CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CipdError {
    /// Returns true if this error came from legacy wallet detection.
    ///
    /// Detection errors are expected when a wallet is not installed or exposes
    /// an unfamiliar shape, and are never reported to store subscribers.
    pub fn is_detection_error(&self) -> bool {
        matches!(
            self,
            CipdError::UnexpectedGlobalShape { .. } | CipdError::DetectionFailed { .. }
        )
    }

    /// Returns true if this is a validation error.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            CipdError::InvalidRdns { .. }
                | CipdError::InvalidAnnouncement(_)
                | CipdError::InvalidIcon(_)
        )
    }
}

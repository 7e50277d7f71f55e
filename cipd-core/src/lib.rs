//! # CIPD Core
//!
//! Core types, errors, and traits for Cosmos Injected Provider Discovery.
//!
//! This crate provides the foundational building blocks used by all other CIPD crates:
//!
//! - **Types**: Provider identity (`Rdns`), provider info, descriptors, and wallet data
//! - **Errors**: A single error enum with classification helpers
//! - **Constants**: Wire-level signal names and protocol defaults
//! - **Traits**: The wallet capability interface and the global-scope lookup seam
//!
//! ## Example
//!
//! ```rust
//! use cipd_core::{ProviderInfo, Rdns};
//!
//! let rdns = Rdns::parse("app.keplr").unwrap();
//! let info = ProviderInfo::new("Keplr", "data:image/svg+xml;base64,AA==", rdns);
//! let json = info.to_json().unwrap();
//! assert!(json.contains("\"rdns\":\"app.keplr\""));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{CipdError, Result};
pub use traits::*;
pub use types::*;

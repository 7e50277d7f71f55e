//! # CIPD Polyfill
//!
//! Detection of Cosmos wallets that predate the discovery protocol.
//!
//! Legacy wallets inject their provider object at a well-known global
//! location (`window.keplr`, `window.leap`, ...) but never announce
//! themselves. The [`LegacyDetector`] probes those locations, wraps each hit
//! into a provider descriptor, and broadcasts it as if the wallet had
//! announced itself.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cipd_channel::EventBus;
//! use cipd_polyfill::{GlobalValue, InjectedGlobals, LegacyDetector, PolyfillConfig};
//!
//! let bus = EventBus::shared();
//! let globals = InjectedGlobals::shared();
//! globals.inject("keplr", GlobalValue::Provider(keplr))?;
//!
//! let detector = LegacyDetector::new(bus, globals, PolyfillConfig::default());
//! detector.install();
//! let found = detector.announce_existing();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod config;
mod detector;
mod globals;
pub mod icons;
mod wallets;

pub use config::PolyfillConfig;
pub use detector::LegacyDetector;
pub use globals::{GlobalValue, InjectedGlobals};
pub use wallets::{known_wallets, LegacyWallet};

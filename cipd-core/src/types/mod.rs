//! Domain types for CIPD.
//!
//! - [`Rdns`]: Reverse-domain identity of a wallet vendor/integration
//! - [`ProviderInfo`]: Identity + display metadata carried by an announcement
//! - [`ProviderDetail`]: Provider info plus the opaque capability handle
//! - Wallet data types consumed by the capability interface

mod provider;
mod wallet;

pub use provider::*;
pub use wallet::*;

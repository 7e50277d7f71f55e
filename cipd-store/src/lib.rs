//! # CIPD Store
//!
//! Consumer side of Cosmos Injected Provider Discovery.
//!
//! A [`Store`] listens for provider announcements on a [`DiscoveryContext`]'s
//! bus, keeps an ordered list of the providers it heard (deduplicated by
//! announcement uuid), and tells subscribers what changed. On creation it asks
//! every wallet to announce itself and, unless disabled, runs the legacy
//! detector so that wallets predating the protocol show up too.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cipd_store::{DiscoveryContext, Store, StoreOptions, SubscribeOptions};
//! use cipd_polyfill::{InjectedGlobals, PolyfillConfig};
//!
//! let context = DiscoveryContext::new(InjectedGlobals::shared(), PolyfillConfig::default());
//! let store = Store::create(&context, StoreOptions::default());
//!
//! let handle = store.subscribe(
//!     |providers, change| println!("{} providers, {} new", providers.len(), change.added.len()),
//!     SubscribeOptions::immediate(),
//! );
//!
//! if let Some(keplr) = store.find_provider("app.keplr") {
//!     keplr.provider.enable("cosmoshub-4").await?;
//! }
//! handle.unsubscribe();
//! store.destroy();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod config;
mod context;
mod store;

pub use config::{StoreOptions, SubscribeOptions};
pub use context::DiscoveryContext;
pub use store::{ProviderChange, Store, Unsubscribe};

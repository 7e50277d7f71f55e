//! # CIPD Channel
//!
//! The broadcast channel of the discovery protocol.
//!
//! Two signals travel over it:
//!
//! - **Request** (`cosmos:requestProvider`): "all providers, announce yourselves"
//! - **Announce** (`cosmos:announceProvider`): carries one [`ProviderDetail`]
//!
//! Delivery is synchronous and fire-and-forget: handlers registered when a
//! signal is broadcast receive it before `broadcast` returns; handlers
//! registered later never see it.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cipd_channel::{EventBus, SignalKind};
//!
//! let bus = EventBus::shared();
//! let id = bus.on_announce(|detail| println!("found {}", detail.info.name));
//! bus.request_providers();
//! bus.off(id);
//! ```
//!
//! [`ProviderDetail`]: cipd_core::ProviderDetail

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod announcer;
mod bus;
mod signal;

pub use announcer::ProviderAnnouncer;
pub use bus::{EventBus, ListenerId};
pub use signal::{Signal, SignalKind};

//! Store and subscription options.

use serde::{Deserialize, Serialize};

/// Options fixed when a store is created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Run legacy wallet detection on creation and on every reset
    pub polyfill: bool,
    /// Notify listeners when clearing a store that is already empty
    pub notify_on_empty_clear: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            polyfill: true,
            notify_on_empty_clear: true,
        }
    }
}

impl StoreOptions {
    /// Enables or disables legacy wallet detection.
    pub fn with_polyfill(mut self, polyfill: bool) -> Self {
        self.polyfill = polyfill;
        self
    }

    /// Disables legacy wallet detection.
    pub fn without_polyfill(self) -> Self {
        self.with_polyfill(false)
    }

    /// Sets whether clearing an empty store notifies listeners.
    pub fn with_notify_on_empty_clear(mut self, notify: bool) -> Self {
        self.notify_on_empty_clear = notify;
        self
    }
}

/// Options for a single subscription.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscribeOptions {
    /// Call the listener once right away with the providers already present
    pub emit_immediately: bool,
}

impl SubscribeOptions {
    /// Options that replay the current providers on subscription.
    pub fn immediate() -> Self {
        Self { emit_immediately: true }
    }
}

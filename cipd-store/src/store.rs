//! Provider store.
//!
//! Aggregates announce signals from one bus into an ordered, deduplicated
//! list of provider descriptors and notifies subscribers of every change.
//!
//! # Identity
//!
//! Entries are keyed by announcement uuid, not by rdns. Two instances of the
//! same wallet (two announcements with different uuids) are two entries; the
//! same announcement heard twice is one.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, instrument};

use cipd_channel::ListenerId;
use cipd_core::types::ProviderDetail;

use crate::config::{StoreOptions, SubscribeOptions};
use crate::context::DiscoveryContext;

/// What changed in a store since the previous notification.
///
/// An empty vector means nothing of that kind happened.
#[derive(Clone, Debug, Default)]
pub struct ProviderChange {
    /// Descriptors that entered the store
    pub added: Vec<ProviderDetail>,
    /// Descriptors that left the store
    pub removed: Vec<ProviderDetail>,
}

impl ProviderChange {
    /// A change that only adds descriptors.
    pub fn added(added: Vec<ProviderDetail>) -> Self {
        Self {
            added,
            removed: Vec::new(),
        }
    }

    /// A change that only removes descriptors.
    pub fn removed(removed: Vec<ProviderDetail>) -> Self {
        Self {
            added: Vec::new(),
            removed,
        }
    }

    /// Returns true if nothing was added or removed.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

type Listener = Arc<dyn Fn(&[ProviderDetail], &ProviderChange) + Send + Sync>;

/// Aggregated view of every provider announced on a bus.
///
/// Cheap to clone; clones share state. Dropping the last handle
/// unregisters the store from the bus.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    context: DiscoveryContext,
    options: StoreOptions,
    /// Providers in arrival order
    providers: RwLock<Vec<ProviderDetail>>,
    /// Subscribers in registration order
    listeners: RwLock<Vec<(u64, Listener)>>,
    next_listener_id: AtomicU64,
    announce_listener: Mutex<Option<ListenerId>>,
    destroyed: AtomicBool,
}

impl Store {
    /// Creates a store and starts discovery.
    ///
    /// Registers for announcements first, then broadcasts a request so that
    /// every present wallet answers, then (with `polyfill`) runs legacy
    /// detection once. Answers that arrive synchronously are already in the
    /// store when this returns.
    #[instrument(skip(context))]
    pub fn create(context: &DiscoveryContext, options: StoreOptions) -> Self {
        let inner = Arc::new(StoreInner {
            context: context.clone(),
            options,
            providers: RwLock::new(Vec::new()),
            listeners: RwLock::new(Vec::new()),
            next_listener_id: AtomicU64::new(1),
            announce_listener: Mutex::new(None),
            destroyed: AtomicBool::new(false),
        });

        let weak: Weak<StoreInner> = Arc::downgrade(&inner);
        let id = context.bus().on_announce(move |detail| {
            if let Some(inner) = weak.upgrade() {
                inner.ingest(detail);
            }
        });
        *inner.announce_listener.lock() = Some(id);

        let store = Self { inner };
        store.inner.discover();
        info!(providers = store.len(), "Store created");
        store
    }

    /// Creates a store with default options.
    pub fn with_defaults(context: &DiscoveryContext) -> Self {
        Self::create(context, StoreOptions::default())
    }

    /// Returns a snapshot of the providers, in arrival order.
    pub fn get_providers(&self) -> Vec<ProviderDetail> {
        self.inner.providers.read().clone()
    }

    /// Returns the first provider whose rdns equals `rdns` exactly.
    pub fn find_provider(&self, rdns: &str) -> Option<ProviderDetail> {
        self.inner
            .providers
            .read()
            .iter()
            .find(|detail| detail.info.rdns == rdns)
            .cloned()
    }

    /// Registers a change listener.
    ///
    /// The listener receives the full provider list and the change that
    /// produced it. It is never called while the store holds a lock, so it
    /// may call back into the store. Dropping the returned handle keeps the
    /// listener registered; call [`Unsubscribe::unsubscribe`] to remove it.
    ///
    /// On a destroyed store the listener is not registered.
    pub fn subscribe<F>(&self, listener: F, options: SubscribeOptions) -> Unsubscribe
    where
        F: Fn(&[ProviderDetail], &ProviderChange) + Send + Sync + 'static,
    {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        let listener: Listener = Arc::new(listener);

        if self.is_destroyed() {
            debug!("Subscribe on destroyed store ignored");
            return Unsubscribe::inert(id);
        }

        self.inner.listeners.write().push((id, listener.clone()));
        debug!(id, "Listener subscribed");

        if options.emit_immediately {
            let providers = self.get_providers();
            if !providers.is_empty() {
                let change = ProviderChange::added(providers.clone());
                listener(&providers, &change);
            }
        }

        Unsubscribe {
            store: Arc::downgrade(&self.inner),
            id,
            active: AtomicBool::new(true),
        }
    }

    /// Removes every provider and notifies listeners with them as `removed`.
    #[instrument(skip(self))]
    pub fn clear(&self) {
        self.inner.clear();
    }

    /// Clears the store and runs discovery again.
    ///
    /// Wallets answer the new request; legacy wallets already detected come
    /// back through the detector's re-announcement.
    #[instrument(skip(self))]
    pub fn reset(&self) {
        if self.is_destroyed() {
            return;
        }
        self.inner.clear();
        self.inner.discover();
    }

    /// Clears the store, drops every listener and detaches from the bus.
    ///
    /// Idempotent. A destroyed store ignores all later announcements.
    #[instrument(skip(self))]
    pub fn destroy(&self) {
        if self.inner.destroyed.load(Ordering::SeqCst) {
            return;
        }
        self.inner.clear();
        self.inner.listeners.write().clear();
        self.inner.detach();
        self.inner.destroyed.store(true, Ordering::SeqCst);
        info!("Store destroyed");
    }

    /// Returns true once [`destroy`](Self::destroy) has run.
    pub fn is_destroyed(&self) -> bool {
        self.inner.destroyed.load(Ordering::SeqCst)
    }

    /// Number of providers held.
    pub fn len(&self) -> usize {
        self.inner.providers.read().len()
    }

    /// Returns true if no provider is held.
    pub fn is_empty(&self) -> bool {
        self.inner.providers.read().is_empty()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.read().len()
    }

    /// The options the store was created with.
    pub fn options(&self) -> &StoreOptions {
        &self.inner.options
    }

    /// The context the store discovers in.
    pub fn context(&self) -> &DiscoveryContext {
        &self.inner.context
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("providers", &self.len())
            .field("listeners", &self.listener_count())
            .field("destroyed", &self.is_destroyed())
            .field("options", &self.inner.options)
            .finish()
    }
}

impl StoreInner {
    fn discover(&self) {
        self.context.bus().request_providers();
        if self.options.polyfill {
            self.context.detector().announce_existing();
        }
    }

    /// Handles one announce signal.
    fn ingest(&self, detail: &ProviderDetail) {
        if self.destroyed.load(Ordering::SeqCst) {
            return;
        }
        if let Err(err) = detail.info.validate() {
            debug!(rdns = %detail.info.rdns, error = %err, "Dropping malformed announcement");
            return;
        }

        let snapshot = {
            let mut providers = self.providers.write();
            if providers.iter().any(|existing| existing.info.uuid == detail.info.uuid) {
                debug!(uuid = %detail.info.uuid, "Duplicate announcement ignored");
                return;
            }
            providers.push(detail.clone());
            providers.clone()
        };

        debug!(
            rdns = %detail.info.rdns,
            uuid = %detail.info.uuid,
            total = snapshot.len(),
            "Provider added"
        );
        self.notify(&snapshot, &ProviderChange::added(vec![detail.clone()]));
    }

    fn clear(&self) {
        let removed = std::mem::take(&mut *self.providers.write());
        if removed.is_empty() && !self.options.notify_on_empty_clear {
            return;
        }
        debug!(removed = removed.len(), "Store cleared");
        self.notify(&[], &ProviderChange::removed(removed));
    }

    fn notify(&self, providers: &[ProviderDetail], change: &ProviderChange) {
        let listeners: Vec<Listener> = self
            .listeners
            .read()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(providers, change);
        }
    }

    fn remove_listener(&self, id: u64) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn detach(&self) {
        if let Some(id) = self.announce_listener.lock().take() {
            self.context.bus().off(id);
        }
    }
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Handle returned by [`Store::subscribe`].
pub struct Unsubscribe {
    store: Weak<StoreInner>,
    id: u64,
    active: AtomicBool,
}

impl Unsubscribe {
    fn inert(id: u64) -> Self {
        Self {
            store: Weak::new(),
            id,
            active: AtomicBool::new(false),
        }
    }

    /// Removes exactly this registration. Later calls do nothing.
    pub fn unsubscribe(&self) {
        if !self.active.swap(false, Ordering::SeqCst) {
            return;
        }
        if let Some(store) = self.store.upgrade() {
            if store.remove_listener(self.id) {
                debug!(id = self.id, "Listener unsubscribed");
            }
        }
    }

    /// Returns true until [`unsubscribe`](Self::unsubscribe) is called.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unsubscribe")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

//! In-process event bus.
//!
//! Stands in for the host environment's global event target. Every
//! consumer and provider on a page shares one bus; tests create their own.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, instrument, trace};

use cipd_core::types::ProviderDetail;

use crate::signal::{Signal, SignalKind};

/// Handle identifying one registered handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Returns the raw id.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

type Handler = Arc<dyn Fn(&Signal) + Send + Sync>;

struct Registration {
    id: ListenerId,
    kind: SignalKind,
    handler: Handler,
}

/// Synchronous publish/subscribe dispatcher for CIPD signals.
///
/// # Delivery
///
/// `broadcast` snapshots the handlers registered for the signal's kind and
/// calls them in registration order before returning. The registration lock
/// is released before any handler runs, so handlers may broadcast, register,
/// or unregister. A handler removed during a broadcast still receives that
/// broadcast if it was part of the snapshot.
pub struct EventBus {
    listeners: RwLock<Vec<Registration>>,
    next_id: AtomicU64,
}

impl EventBus {
    /// Creates a bus with no handlers.
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a bus behind an `Arc`, the form stores and detectors share.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Registers a handler for one signal kind.
    pub fn on<F>(&self, kind: SignalKind, handler: F) -> ListenerId
    where
        F: Fn(&Signal) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.listeners.write().push(Registration {
            id,
            kind,
            handler: Arc::new(handler),
        });
        trace!(id = id.0, %kind, "Registered handler");
        id
    }

    /// Registers a handler for announce signals.
    pub fn on_announce<F>(&self, handler: F) -> ListenerId
    where
        F: Fn(&ProviderDetail) + Send + Sync + 'static,
    {
        self.on(SignalKind::Announce, move |signal| {
            if let Some(detail) = signal.detail() {
                handler(detail);
            }
        })
    }

    /// Registers a handler for request signals.
    pub fn on_request<F>(&self, handler: F) -> ListenerId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on(SignalKind::Request, move |_| handler())
    }

    /// Unregisters a handler. Returns false if it was not registered.
    pub fn off(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|registration| registration.id != id);
        let removed = listeners.len() != before;
        if removed {
            trace!(id = id.0, "Unregistered handler");
        }
        removed
    }

    /// Delivers a signal to every handler currently registered for its kind.
    ///
    /// Returns the number of handlers reached.
    #[instrument(skip(self, signal), fields(kind = %signal.kind()))]
    pub fn broadcast(&self, signal: Signal) -> usize {
        let kind = signal.kind();
        let handlers: Vec<Handler> = self
            .listeners
            .read()
            .iter()
            .filter(|registration| registration.kind == kind)
            .map(|registration| Arc::clone(&registration.handler))
            .collect();

        debug!(handlers = handlers.len(), "Broadcasting signal");

        for handler in &handlers {
            handler(&signal);
        }

        handlers.len()
    }

    /// Broadcasts a request signal.
    pub fn request_providers(&self) -> usize {
        self.broadcast(Signal::Request)
    }

    /// Broadcasts an announce signal for a provider.
    pub fn announce_provider(&self, detail: ProviderDetail) -> usize {
        self.broadcast(Signal::Announce(detail))
    }

    /// Returns the number of handlers registered for a kind.
    pub fn listener_count(&self, kind: SignalKind) -> usize {
        self.listeners
            .read()
            .iter()
            .filter(|registration| registration.kind == kind)
            .count()
    }

    /// Returns true if the handler is registered.
    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners.read().iter().any(|registration| registration.id == id)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("request_listeners", &self.listener_count(SignalKind::Request))
            .field("announce_listeners", &self.listener_count(SignalKind::Announce))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cipd_core::testing::MockProvider;
    use cipd_core::types::{ProviderInfo, Rdns};
    use parking_lot::Mutex;

    fn make_detail(uuid: &str) -> ProviderDetail {
        ProviderDetail::new(
            ProviderInfo::with_uuid(uuid, "Keplr", "data:image/png;base64,", Rdns::parse("app.keplr").unwrap()),
            MockProvider::shared(),
        )
    }

    #[test]
    fn test_broadcast_reaches_matching_kind_only() {
        let bus = EventBus::new();
        let requests = Arc::new(Mutex::new(0));
        let announces = Arc::new(Mutex::new(Vec::new()));

        let r = requests.clone();
        bus.on_request(move || *r.lock() += 1);
        let a = announces.clone();
        bus.on_announce(move |detail| a.lock().push(detail.info.uuid.clone()));

        assert_eq!(bus.request_providers(), 1);
        assert_eq!(bus.announce_provider(make_detail("u1")), 1);

        assert_eq!(*requests.lock(), 1);
        assert_eq!(*announces.lock(), vec!["u1".to_string()]);
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let bus = EventBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for n in 0..3 {
            let order = order.clone();
            bus.on_request(move || order.lock().push(n));
        }
        bus.request_providers();

        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn test_late_handler_misses_earlier_broadcast() {
        let bus = EventBus::new();
        bus.announce_provider(make_detail("u1"));

        let seen = Arc::new(Mutex::new(0));
        let s = seen.clone();
        bus.on_announce(move |_| *s.lock() += 1);

        assert_eq!(*seen.lock(), 0);
        bus.announce_provider(make_detail("u2"));
        assert_eq!(*seen.lock(), 1);
    }

    #[test]
    fn test_off_removes_handler() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(0));
        let s = seen.clone();
        let id = bus.on_request(move || *s.lock() += 1);

        assert!(bus.is_registered(id));
        assert!(bus.off(id));
        assert!(!bus.off(id));
        assert!(!bus.is_registered(id));

        assert_eq!(bus.request_providers(), 0);
        assert_eq!(*seen.lock(), 0);
    }

    #[test]
    fn test_handler_may_broadcast_reentrantly() {
        let bus = EventBus::shared();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let weak = Arc::downgrade(&bus);
        bus.on_request(move || {
            if let Some(bus) = weak.upgrade() {
                bus.announce_provider(make_detail("answer"));
            }
        });
        let s = seen.clone();
        bus.on_announce(move |detail| s.lock().push(detail.info.uuid.clone()));

        bus.request_providers();
        assert_eq!(*seen.lock(), vec!["answer".to_string()]);
    }

    #[test]
    fn test_listener_count_and_ids() {
        let bus = EventBus::new();
        let a = bus.on_request(|| {});
        let b = bus.on_announce(|_| {});
        let c = bus.on_announce(|_| {});

        assert!(a < b && b < c);
        assert_eq!(bus.listener_count(SignalKind::Request), 1);
        assert_eq!(bus.listener_count(SignalKind::Announce), 2);
        assert!(format!("{:?}", bus).contains("announce_listeners: 2"));
    }
}

//! Legacy wallet detector.
//!
//! Probes the global scope for wallets from the legacy table, announces each
//! one found on the bus, and remembers which identities it has announced so
//! that later calls never announce the same wallet twice. Request signals
//! make it re-announce the wallets it already knows, each under a fresh uuid.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, instrument};

use cipd_channel::{EventBus, ListenerId};
use cipd_core::traits::GlobalScope;
use cipd_core::types::{ProviderDetail, ProviderHandle, ProviderInfo, Rdns};

use crate::config::PolyfillConfig;
use crate::wallets::{known_wallets, LegacyWallet};

/// Detects pre-protocol wallets and announces them on their behalf.
///
/// Cloning yields another handle to the same detector; the detected-wallet
/// set is shared between clones.
#[derive(Clone)]
pub struct LegacyDetector {
    inner: Arc<DetectorInner>,
}

struct DetectorInner {
    bus: Arc<EventBus>,
    globals: Arc<dyn GlobalScope>,
    wallets: Vec<LegacyWallet>,
    config: PolyfillConfig,
    /// Identities announced so far. Only grows, except through `forget_detected`.
    detected: RwLock<HashSet<Rdns>>,
    request_listener: Mutex<Option<ListenerId>>,
}

impl LegacyDetector {
    /// Creates a detector for the built-in wallet table.
    pub fn new(bus: Arc<EventBus>, globals: Arc<dyn GlobalScope>, config: PolyfillConfig) -> Self {
        Self::with_wallets(bus, globals, config, known_wallets())
    }

    /// Creates a detector for a custom wallet table.
    pub fn with_wallets(
        bus: Arc<EventBus>,
        globals: Arc<dyn GlobalScope>,
        config: PolyfillConfig,
        wallets: Vec<LegacyWallet>,
    ) -> Self {
        Self {
            inner: Arc::new(DetectorInner {
                bus,
                globals,
                wallets,
                config,
                detected: RwLock::new(HashSet::new()),
                request_listener: Mutex::new(None),
            }),
        }
    }

    /// Detects and announces every wallet not announced before.
    ///
    /// Wallets that are absent or whose detection fails are skipped
    /// silently. Returns the descriptors announced by this call.
    #[instrument(skip(self))]
    pub fn announce_existing(&self) -> Vec<ProviderDetail> {
        let inner = &self.inner;
        let mut discovered = Vec::new();

        for wallet in &inner.wallets {
            if inner.detected.read().contains(&wallet.rdns) {
                continue;
            }

            let Some(provider) = inner.probe(wallet) else {
                continue;
            };

            // Another caller may have claimed the identity since the check above.
            if !inner.detected.write().insert(wallet.rdns.clone()) {
                continue;
            }

            let detail = DetectorInner::synthesize(wallet, provider);
            info!(rdns = %wallet.rdns, uuid = %detail.info.uuid, "Detected legacy wallet");
            inner.bus.announce_provider(detail.clone());
            discovered.push(detail);
        }

        discovered
    }

    /// Starts re-announcing detected wallets whenever a request signal fires.
    ///
    /// Idempotent: returns the existing registration if already installed.
    pub fn install(&self) -> ListenerId {
        let mut listener = self.inner.request_listener.lock();
        if let Some(id) = *listener {
            return id;
        }

        let weak: Weak<DetectorInner> = Arc::downgrade(&self.inner);
        let id = self.inner.bus.on_request(move || {
            if let Some(inner) = weak.upgrade() {
                inner.schedule_reannounce();
            }
        });
        *listener = Some(id);
        debug!(id = id.as_u64(), "Legacy detector listening for requests");
        id
    }

    /// Stops reacting to request signals.
    pub fn uninstall(&self) {
        if let Some(id) = self.inner.request_listener.lock().take() {
            self.inner.bus.off(id);
        }
    }

    /// Returns true while reacting to request signals.
    pub fn is_installed(&self) -> bool {
        self.inner.request_listener.lock().is_some()
    }

    /// Re-detects and re-announces the already detected wallets right away,
    /// each under a new uuid. Returns the descriptors announced.
    pub fn reannounce(&self) -> Vec<ProviderDetail> {
        let snapshot = self.inner.detected_wallets();
        self.inner.reannounce(&snapshot)
    }

    /// Reports whether a wallet is currently present.
    ///
    /// Does not touch the detected set and broadcasts nothing. Unknown
    /// identities and failed detections report false.
    pub fn is_available(&self, rdns: &str) -> bool {
        self.inner
            .wallets
            .iter()
            .find(|wallet| wallet.rdns == rdns)
            .and_then(|wallet| self.inner.probe(wallet))
            .is_some()
    }

    /// Identities of the configured wallets, in table order.
    pub fn known_identities(&self) -> Vec<Rdns> {
        self.inner.wallets.iter().map(|wallet| wallet.rdns.clone()).collect()
    }

    /// Identities announced so far, in table order.
    pub fn detected(&self) -> Vec<Rdns> {
        self.inner
            .detected_wallets()
            .into_iter()
            .map(|wallet| wallet.rdns)
            .collect()
    }

    /// Empties the detected-wallet set.
    ///
    /// Test hook: in a running page the set only grows.
    pub fn forget_detected(&self) {
        self.inner.detected.write().clear();
    }

    /// The configured wallet table.
    pub fn wallets(&self) -> &[LegacyWallet] {
        &self.inner.wallets
    }

    /// The bus announcements go to.
    pub fn bus(&self) -> &Arc<EventBus> {
        &self.inner.bus
    }

    /// The detector configuration.
    pub fn config(&self) -> &PolyfillConfig {
        &self.inner.config
    }
}

impl fmt::Debug for LegacyDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegacyDetector")
            .field("wallets", &self.inner.wallets.len())
            .field("detected", &self.detected())
            .field("installed", &self.is_installed())
            .field("config", &self.inner.config)
            .finish()
    }
}

impl DetectorInner {
    /// Runs detection for one wallet, swallowing failures.
    fn probe(&self, wallet: &LegacyWallet) -> Option<ProviderHandle> {
        match wallet.detect(self.globals.as_ref()) {
            Ok(found) => found,
            Err(err) => {
                debug!(rdns = %wallet.rdns, error = %err, "Legacy detection failed, skipping");
                None
            }
        }
    }

    fn synthesize(wallet: &LegacyWallet, provider: ProviderHandle) -> ProviderDetail {
        let info = ProviderInfo::new(wallet.name.clone(), wallet.icon.clone(), wallet.rdns.clone());
        ProviderDetail::new(info, provider)
    }

    fn detected_wallets(&self) -> Vec<LegacyWallet> {
        let detected = self.detected.read();
        self.wallets
            .iter()
            .filter(|wallet| detected.contains(&wallet.rdns))
            .cloned()
            .collect()
    }

    /// Handles a request signal.
    ///
    /// The set of wallets to re-announce is fixed now, when the request fires;
    /// wallets detected during the delay are not included.
    fn schedule_reannounce(self: &Arc<Self>) {
        if !self.config.reannounce_on_request {
            return;
        }

        let snapshot = self.detected_wallets();
        if snapshot.is_empty() {
            return;
        }

        let delay = self.config.reannounce_delay();
        if delay.is_zero() {
            self.reannounce(&snapshot);
            return;
        }

        // The blocking pool exists on every runtime; the timer driver only
        // on runtimes built with `enable_time`.
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let weak = Arc::downgrade(self);
                handle.spawn_blocking(move || {
                    std::thread::sleep(delay);
                    if let Some(inner) = weak.upgrade() {
                        inner.reannounce(&snapshot);
                    }
                });
            }
            Err(_) => {
                debug!("No async runtime available, re-announcing inline");
                self.reannounce(&snapshot);
            }
        }
    }

    #[instrument(skip_all, fields(wallets = wallets.len()))]
    fn reannounce(&self, wallets: &[LegacyWallet]) -> Vec<ProviderDetail> {
        let mut announced = Vec::with_capacity(wallets.len());
        for wallet in wallets {
            if let Some(provider) = self.probe(wallet) {
                let detail = Self::synthesize(wallet, provider);
                debug!(rdns = %wallet.rdns, uuid = %detail.info.uuid, "Re-announcing legacy wallet");
                self.bus.announce_provider(detail.clone());
                announced.push(detail);
            }
        }
        announced
    }
}

impl Drop for DetectorInner {
    fn drop(&mut self) {
        if let Some(id) = self.request_listener.get_mut().take() {
            self.bus.off(id);
        }
    }
}

//! Provider side of the protocol.
//!
//! A wallet that speaks CIPD natively announces itself once when it loads
//! and again every time a consumer broadcasts a request.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::{debug, info};

use cipd_core::error::Result;
use cipd_core::types::{ProviderDetail, ProviderHandle, ProviderInfo, Rdns};

use crate::bus::{EventBus, ListenerId};

/// Announces one provider instance on a bus and answers request signals.
///
/// The instance keeps a single uuid for its whole life, so repeated answers
/// are deduplicated by any store that already holds it.
pub struct ProviderAnnouncer {
    bus: Arc<EventBus>,
    detail: ProviderDetail,
    request_listener: Mutex<Option<ListenerId>>,
}

impl ProviderAnnouncer {
    /// Creates an announcer with a freshly generated uuid.
    ///
    /// # Errors
    /// Fails if `rdns` is malformed or `icon` is not an image data URI.
    pub fn new(
        bus: Arc<EventBus>,
        name: impl Into<String>,
        icon: impl Into<String>,
        rdns: &str,
        provider: ProviderHandle,
    ) -> Result<Self> {
        let info = ProviderInfo::new(name, icon, Rdns::parse(rdns)?);
        info.validate_icon()?;
        Ok(Self::from_detail(bus, ProviderDetail::new(info, provider)))
    }

    /// Creates an announcer for an existing descriptor.
    pub fn from_detail(bus: Arc<EventBus>, detail: ProviderDetail) -> Self {
        Self {
            bus,
            detail,
            request_listener: Mutex::new(None),
        }
    }

    /// Returns the descriptor this announcer broadcasts.
    pub fn detail(&self) -> &ProviderDetail {
        &self.detail
    }

    /// Broadcasts the announcement once.
    pub fn announce(&self) -> usize {
        debug!(rdns = %self.detail.info.rdns, uuid = %self.detail.info.uuid, "Announcing provider");
        self.bus.announce_provider(self.detail.clone())
    }

    /// Announces now and answers every later request signal.
    ///
    /// Calling it again while attached only re-announces.
    pub fn attach(&self) {
        {
            let mut listener = self.request_listener.lock();
            if listener.is_none() {
                let bus: Weak<EventBus> = Arc::downgrade(&self.bus);
                let detail = self.detail.clone();
                *listener = Some(self.bus.on_request(move || {
                    if let Some(bus) = bus.upgrade() {
                        bus.announce_provider(detail.clone());
                    }
                }));
                info!(rdns = %self.detail.info.rdns, "Provider attached to bus");
            }
        }
        self.announce();
    }

    /// Stops answering request signals.
    pub fn detach(&self) {
        if let Some(id) = self.request_listener.lock().take() {
            self.bus.off(id);
            info!(rdns = %self.detail.info.rdns, "Provider detached from bus");
        }
    }

    /// Returns true while answering request signals.
    pub fn is_attached(&self) -> bool {
        self.request_listener.lock().is_some()
    }
}

impl Drop for ProviderAnnouncer {
    fn drop(&mut self) {
        self.detach();
    }
}

//! Shared discovery state.
//!
//! One context stands for one page: a single bus that wallets and stores talk
//! over, and a single legacy detector whose detected-wallet set is shared by
//! every store created from the context.

use std::sync::Arc;

use tracing::info;

use cipd_channel::EventBus;
use cipd_core::error::Result;
use cipd_core::traits::GlobalScope;
use cipd_polyfill::{LegacyDetector, PolyfillConfig};

/// Bus plus legacy detector, shared by any number of stores.
#[derive(Clone, Debug)]
pub struct DiscoveryContext {
    bus: Arc<EventBus>,
    detector: LegacyDetector,
}

impl DiscoveryContext {
    /// Creates a context with a fresh bus and a detector over `globals`.
    pub fn new(globals: Arc<dyn GlobalScope>, config: PolyfillConfig) -> Self {
        Self::with_bus(EventBus::shared(), globals, config)
    }

    /// Creates a context on an existing bus.
    pub fn with_bus(bus: Arc<EventBus>, globals: Arc<dyn GlobalScope>, config: PolyfillConfig) -> Self {
        let detector = LegacyDetector::new(bus.clone(), globals, config);
        Self::with_detector(detector)
    }

    /// Creates a context around a preconfigured detector, using its bus.
    ///
    /// Installs the detector's request handler if its config asks for
    /// re-announcement.
    pub fn with_detector(detector: LegacyDetector) -> Self {
        if detector.config().reannounce_on_request {
            detector.install();
        }
        info!(
            wallets = detector.wallets().len(),
            reannounce = detector.is_installed(),
            "Discovery context ready"
        );
        Self {
            bus: detector.bus().clone(),
            detector,
        }
    }

    /// Creates a context with the polyfill configured from the environment.
    ///
    /// # Errors
    /// Returns a configuration error if an environment override is malformed.
    pub fn from_env(globals: Arc<dyn GlobalScope>) -> Result<Self> {
        Ok(Self::new(globals, PolyfillConfig::from_env()?))
    }

    /// The shared bus.
    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    /// The shared legacy detector.
    pub fn detector(&self) -> &LegacyDetector {
        &self.detector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cipd_channel::SignalKind;
    use cipd_core::constants::{ENV_REANNOUNCE_DELAY_MS, ENV_REANNOUNCE_ON_REQUEST};
    use cipd_core::error::CipdError;
    use cipd_polyfill::InjectedGlobals;

    #[test]
    fn test_new_installs_reannounce_handler() {
        let context = DiscoveryContext::new(InjectedGlobals::shared(), PolyfillConfig::default());

        assert!(context.detector().is_installed());
        assert_eq!(context.bus().listener_count(SignalKind::Request), 1);
        assert!(Arc::ptr_eq(context.bus(), context.detector().bus()));
    }

    #[test]
    fn test_no_reannounce_skips_handler() {
        let context = DiscoveryContext::new(InjectedGlobals::shared(), PolyfillConfig::default().no_reannounce());

        assert!(!context.detector().is_installed());
        assert_eq!(context.bus().listener_count(SignalKind::Request), 0);
    }

    #[test]
    fn test_from_env() {
        std::env::set_var(ENV_REANNOUNCE_DELAY_MS, "0");
        std::env::set_var(ENV_REANNOUNCE_ON_REQUEST, "false");
        let context = DiscoveryContext::from_env(InjectedGlobals::shared()).unwrap();
        assert!(context.detector().config().reannounce_delay().is_zero());
        assert!(!context.detector().is_installed());

        std::env::set_var(ENV_REANNOUNCE_DELAY_MS, "-5");
        let result = DiscoveryContext::from_env(InjectedGlobals::shared());
        assert!(matches!(result, Err(CipdError::ConfigError(_))));

        std::env::remove_var(ENV_REANNOUNCE_DELAY_MS);
        std::env::remove_var(ENV_REANNOUNCE_ON_REQUEST);
        let context = DiscoveryContext::from_env(InjectedGlobals::shared()).unwrap();
        assert_eq!(context.detector().config(), &PolyfillConfig::default());
        assert!(context.detector().is_installed());
    }

    #[test]
    fn test_clones_share_detected_set() {
        let globals = InjectedGlobals::shared();
        globals
            .inject_provider("keplr", cipd_core::testing::MockProvider::shared())
            .unwrap();
        let context = DiscoveryContext::new(globals, PolyfillConfig::default());
        let other = context.clone();

        context.detector().announce_existing();
        assert_eq!(other.detector().detected().len(), 1);
    }
}

//! Polyfill configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use cipd_core::constants::{DEFAULT_REANNOUNCE_DELAY_MS, ENV_REANNOUNCE_DELAY_MS, ENV_REANNOUNCE_ON_REQUEST};
use cipd_core::error::{CipdError, Result};

/// Legacy detector configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolyfillConfig {
    /// Delay between a request signal and the re-announcement, in milliseconds.
    /// Zero re-announces inline, inside the request broadcast.
    pub reannounce_delay_ms: u64,
    /// Whether to re-announce detected wallets when a request signal fires
    pub reannounce_on_request: bool,
}

impl Default for PolyfillConfig {
    fn default() -> Self {
        Self {
            reannounce_delay_ms: DEFAULT_REANNOUNCE_DELAY_MS,
            reannounce_on_request: true,
        }
    }
}

impl PolyfillConfig {
    /// Reads overrides from the environment, falling back to defaults.
    ///
    /// # Errors
    /// Returns [`CipdError::ConfigError`] if a variable is set but unparsable.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(value) = std::env::var(ENV_REANNOUNCE_DELAY_MS) {
            config.reannounce_delay_ms = value.trim().parse().map_err(|_| {
                CipdError::ConfigError(format!("{ENV_REANNOUNCE_DELAY_MS} must be an integer, got '{value}'"))
            })?;
        }
        if let Ok(value) = std::env::var(ENV_REANNOUNCE_ON_REQUEST) {
            config.reannounce_on_request = value != "false" && value != "0";
        }

        Ok(config)
    }

    /// Sets the re-announce delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.reannounce_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Re-announces inline instead of after a timer.
    pub fn immediate(self) -> Self {
        self.with_delay(Duration::ZERO)
    }

    /// Disables re-announcement on request signals.
    pub fn no_reannounce(mut self) -> Self {
        self.reannounce_on_request = false;
        self
    }

    /// Returns the re-announce delay.
    pub fn reannounce_delay(&self) -> Duration {
        Duration::from_millis(self.reannounce_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PolyfillConfig::default();
        assert_eq!(config.reannounce_delay(), Duration::from_millis(10));
        assert!(config.reannounce_on_request);
    }

    #[test]
    fn test_builders() {
        let config = PolyfillConfig::default().immediate().no_reannounce();
        assert_eq!(config.reannounce_delay(), Duration::ZERO);
        assert!(!config.reannounce_on_request);
    }

    // Sole reader and writer of these variables in this test binary.
    #[test]
    fn test_from_env_overrides() {
        std::env::set_var(ENV_REANNOUNCE_DELAY_MS, " 25 ");
        std::env::set_var(ENV_REANNOUNCE_ON_REQUEST, "false");
        let config = PolyfillConfig::from_env().unwrap();
        assert_eq!(config.reannounce_delay(), Duration::from_millis(25));
        assert!(!config.reannounce_on_request);

        std::env::set_var(ENV_REANNOUNCE_ON_REQUEST, "0");
        assert!(!PolyfillConfig::from_env().unwrap().reannounce_on_request);
        std::env::set_var(ENV_REANNOUNCE_ON_REQUEST, "true");
        assert!(PolyfillConfig::from_env().unwrap().reannounce_on_request);

        std::env::set_var(ENV_REANNOUNCE_DELAY_MS, "soon");
        let result = PolyfillConfig::from_env();
        assert!(matches!(result, Err(CipdError::ConfigError(ref msg)) if msg.contains("soon")));

        std::env::remove_var(ENV_REANNOUNCE_DELAY_MS);
        std::env::remove_var(ENV_REANNOUNCE_ON_REQUEST);
        assert_eq!(PolyfillConfig::from_env().unwrap(), PolyfillConfig::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PolyfillConfig = serde_json::from_str(r#"{"reannounce_delay_ms":25}"#).unwrap();
        assert_eq!(config.reannounce_delay_ms, 25);
        assert!(config.reannounce_on_request);
    }
}

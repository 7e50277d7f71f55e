//! Table of known legacy wallets and where they inject themselves.
//!
//! Supporting a new pre-protocol wallet means adding a row here.

use cipd_core::error::{CipdError, Result};
use cipd_core::traits::GlobalScope;
use cipd_core::types::{ProviderHandle, Rdns};

use crate::icons;

/// (rdns, display name, global paths in priority order, icon)
const KNOWN_WALLETS: &[(&str, &str, &[&str], &str)] = &[
    ("app.keplr", "Keplr", &["keplr"], icons::KEPLR),
    ("io.leapwallet", "Leap", &["leap"], icons::LEAP),
    (
        "io.cosmostation",
        "Cosmostation",
        &["cosmostation.providers.keplr", "cosmostation.cosmos"],
        icons::COSMOSTATION,
    ),
    ("io.xdefi", "XDEFI", &["xfi.cosmos"], icons::XDEFI),
    ("io.falconwallet", "Falcon", &["falcon"], icons::FALCON),
    ("io.coin98", "Coin98", &["coin98.cosmos"], icons::COIN98),
];

/// Detection configuration for one legacy wallet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacyWallet {
    /// Vendor identity
    pub rdns: Rdns,
    /// Display name used in synthesized announcements
    pub name: String,
    /// Dotted global paths, tried in order; the first provider found wins
    pub paths: Vec<String>,
    /// Icon data URI used in synthesized announcements
    pub icon: String,
}

impl LegacyWallet {
    /// Creates a wallet entry with the generic icon.
    pub fn new(rdns: &str, name: impl Into<String>, paths: &[&str]) -> Result<Self> {
        Ok(Self {
            rdns: Rdns::parse(rdns)?,
            name: name.into(),
            paths: paths.iter().map(|path| (*path).to_string()).collect(),
            icon: icons::GENERIC.to_string(),
        })
    }

    /// Replaces the icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Looks the wallet up in the global scope.
    ///
    /// Paths are tried in order: an absent path falls through to the next one,
    /// an unexpected shape aborts detection with [`CipdError::DetectionFailed`].
    pub fn detect(&self, scope: &dyn GlobalScope) -> Result<Option<ProviderHandle>> {
        for path in &self.paths {
            let segments: Vec<&str> = path.split('.').collect();
            let found = scope.lookup(&segments).map_err(|err| CipdError::DetectionFailed {
                rdns: self.rdns.to_string(),
                reason: err.to_string(),
            })?;
            if let Some(provider) = found {
                return Ok(Some(provider));
            }
        }
        Ok(None)
    }
}

/// Returns the built-in legacy wallet table.
pub fn known_wallets() -> Vec<LegacyWallet> {
    KNOWN_WALLETS
        .iter()
        .filter_map(|(rdns, name, paths, icon)| {
            LegacyWallet::new(rdns, *name, paths)
                .ok()
                .map(|wallet| wallet.with_icon(*icon))
        })
        .collect()
}

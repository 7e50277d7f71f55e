//! Common traits for CIPD.
//!
//! Two seams live here: the wallet capability interface a provider exposes,
//! and the global-scope lookup the legacy detector uses to find wallets that
//! predate the discovery protocol.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{CipdError, Result};
use crate::types::{
    AccountData, AminoSignResponse, ChainInfo, DirectSignResponse, Key, ProviderHandle, SignData,
    SignDoc, StdSignDoc, StdSignature,
};

// ═══════════════════════════════════════════════════════════════════════════════
// SIGNERS
// ═══════════════════════════════════════════════════════════════════════════════

/// Signer producing protobuf (direct) signatures.
#[async_trait]
pub trait OfflineDirectSigner: Send + Sync {
    /// Returns the accounts this signer can sign for.
    async fn get_accounts(&self) -> Result<Vec<AccountData>>;

    /// Signs a direct sign document.
    async fn sign_direct(&self, signer_address: &str, sign_doc: SignDoc) -> Result<DirectSignResponse>;
}

/// Signer producing amino (legacy JSON) signatures.
#[async_trait]
pub trait OfflineAminoSigner: Send + Sync {
    /// Returns the accounts this signer can sign for.
    async fn get_accounts(&self) -> Result<Vec<AccountData>>;

    /// Signs an amino sign document.
    async fn sign_amino(&self, signer_address: &str, sign_doc: StdSignDoc) -> Result<AminoSignResponse>;
}

/// Either signer encoding.
#[derive(Clone)]
pub enum OfflineSigner {
    /// Protobuf signer
    Direct(Arc<dyn OfflineDirectSigner>),
    /// Amino signer
    Amino(Arc<dyn OfflineAminoSigner>),
}

impl OfflineSigner {
    /// Returns the accounts of whichever signer this is.
    pub async fn get_accounts(&self) -> Result<Vec<AccountData>> {
        match self {
            OfflineSigner::Direct(signer) => signer.get_accounts().await,
            OfflineSigner::Amino(signer) => signer.get_accounts().await,
        }
    }

    /// Returns true for a protobuf signer.
    pub fn is_direct(&self) -> bool {
        matches!(self, OfflineSigner::Direct(_))
    }
}

impl fmt::Debug for OfflineSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OfflineSigner::Direct(_) => f.write_str("OfflineSigner::Direct"),
            OfflineSigner::Amino(_) => f.write_str("OfflineSigner::Amino"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROVIDER CAPABILITY
// ═══════════════════════════════════════════════════════════════════════════════

/// Optional methods a provider may or may not implement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionalCapability {
    /// `sign_arbitrary`
    SignArbitrary,
    /// `verify_arbitrary`
    VerifyArbitrary,
    /// `disconnect`
    Disconnect,
}

impl OptionalCapability {
    /// All optional capabilities.
    pub const ALL: [OptionalCapability; 3] = [
        OptionalCapability::SignArbitrary,
        OptionalCapability::VerifyArbitrary,
        OptionalCapability::Disconnect,
    ];

    /// Method name of the capability.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionalCapability::SignArbitrary => "signArbitrary",
            OptionalCapability::VerifyArbitrary => "verifyArbitrary",
            OptionalCapability::Disconnect => "disconnect",
        }
    }

    fn unsupported(self) -> CipdError {
        CipdError::Unsupported(self.as_str().into())
    }
}

/// Capability interface of an injected Cosmos wallet.
///
/// Discovery treats implementations as opaque: it stores and forwards the
/// handle but calls none of these methods. The first six methods are
/// required. The optional subset is enumerated by [`OptionalCapability`];
/// callers must check [`supports`](Self::supports) before relying on one.
#[async_trait]
pub trait CosmosProvider: Send + Sync {
    /// Enables access to the wallet for a chain.
    async fn enable(&self, chain_id: &str) -> Result<()>;

    /// Returns the key/account info for a chain.
    async fn get_key(&self, chain_id: &str) -> Result<Key>;

    /// Returns a signer (direct or amino, wallet's choice).
    fn get_offline_signer(&self, chain_id: &str) -> Result<OfflineSigner>;

    /// Returns a signer that only uses amino encoding.
    fn get_offline_signer_only_amino(&self, chain_id: &str) -> Result<Arc<dyn OfflineAminoSigner>>;

    /// Returns a signer, auto-selecting direct or amino for the active key.
    async fn get_offline_signer_auto(&self, chain_id: &str) -> Result<OfflineSigner>;

    /// Suggests a chain to the wallet.
    async fn experimental_suggest_chain(&self, chain_info: ChainInfo) -> Result<()>;

    /// Returns true if the provider implements an optional capability.
    fn supports(&self, _capability: OptionalCapability) -> bool {
        false
    }

    /// Signs arbitrary data (ADR-036).
    async fn sign_arbitrary(&self, _chain_id: &str, _signer: &str, _data: SignData) -> Result<StdSignature> {
        Err(OptionalCapability::SignArbitrary.unsupported())
    }

    /// Verifies an arbitrary-data signature.
    async fn verify_arbitrary(
        &self,
        _chain_id: &str,
        _signer: &str,
        _data: SignData,
        _signature: StdSignature,
    ) -> Result<bool> {
        Err(OptionalCapability::VerifyArbitrary.unsupported())
    }

    /// Disconnects from the wallet.
    async fn disconnect(&self) -> Result<()> {
        Err(OptionalCapability::Disconnect.unsupported())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// GLOBAL SCOPE
// ═══════════════════════════════════════════════════════════════════════════════

/// Read access to the host's global object, as seen by legacy detection.
///
/// A path is a list of property names from the global root, e.g.
/// `["cosmostation", "providers", "keplr"]`.
pub trait GlobalScope: Send + Sync {
    /// Resolves a property path to a provider.
    ///
    /// Returns `Ok(None)` when any segment is absent, and
    /// [`CipdError::UnexpectedGlobalShape`] when a segment exists but cannot be
    /// traversed or is not a provider.
    fn lookup(&self, path: &[&str]) -> Result<Option<ProviderHandle>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockProvider;

    #[tokio::test]
    async fn test_optional_capabilities_default_unsupported() {
        let provider = MockProvider::new();

        for capability in OptionalCapability::ALL {
            assert!(!provider.supports(capability));
        }

        let err = provider.disconnect().await.unwrap_err();
        assert!(matches!(err, CipdError::Unsupported(ref name) if name == "disconnect"));

        let err = provider
            .sign_arbitrary("cosmoshub-4", "cosmos1xyz", SignData::Text("hi".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, CipdError::Unsupported(_)));
    }

    #[tokio::test]
    async fn test_optional_capability_opt_in() {
        let provider = MockProvider::new().with_capability(OptionalCapability::Disconnect);

        assert!(provider.supports(OptionalCapability::Disconnect));
        assert!(!provider.supports(OptionalCapability::SignArbitrary));
        assert!(provider.disconnect().await.is_ok());
    }

    #[tokio::test]
    async fn test_offline_signer_dispatch() {
        let provider = MockProvider::new();
        let signer = provider.get_offline_signer("cosmoshub-4").unwrap();
        assert!(signer.is_direct());
        assert_eq!(signer.get_accounts().await.unwrap().len(), 1);

        let amino = provider.get_offline_signer_only_amino("cosmoshub-4").unwrap();
        assert_eq!(amino.get_accounts().await.unwrap()[0].algo, "secp256k1");
    }
}

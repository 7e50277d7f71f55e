//! Test doubles for the wallet capability interface.
//!
//! Enabled for this crate's tests and, for downstream crates, by the
//! `testing` feature.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{CipdError, Result};
use crate::traits::{
    CosmosProvider, OfflineAminoSigner, OfflineDirectSigner, OfflineSigner, OptionalCapability,
};
use crate::types::{
    AccountData, AminoSignResponse, ChainInfo, DirectSignResponse, Key, ProviderHandle, PubKey,
    SignData, SignDoc, StdSignDoc, StdSignature,
};

const MOCK_ADDRESS: &str = "cosmos1mockmockmockmockmockmockmockmockmock";

/// In-memory provider that answers every request with fixed data.
#[derive(Debug, Default)]
pub struct MockProvider {
    label: String,
    capabilities: HashSet<OptionalCapability>,
}

impl MockProvider {
    /// Creates a provider with no optional capabilities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider carrying a label, handy for telling instances apart.
    pub fn named(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Creates a shared handle to an unlabeled provider.
    pub fn shared() -> ProviderHandle {
        Arc::new(Self::new())
    }

    /// Opts in to an optional capability.
    pub fn with_capability(mut self, capability: OptionalCapability) -> Self {
        self.capabilities.insert(capability);
        self
    }

    /// Returns the provider's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    fn signature() -> StdSignature {
        StdSignature {
            pub_key: PubKey {
                key_type: "tendermint/PubKeySecp256k1".into(),
                value: "AA==".into(),
            },
            signature: "c2ln".into(),
        }
    }
}

#[async_trait]
impl CosmosProvider for MockProvider {
    async fn enable(&self, _chain_id: &str) -> Result<()> {
        Ok(())
    }

    async fn get_key(&self, _chain_id: &str) -> Result<Key> {
        Ok(Key {
            name: self.label.clone(),
            algo: "secp256k1".into(),
            pub_key: vec![2; 33],
            address: vec![1; 20],
            bech32_address: MOCK_ADDRESS.into(),
            is_nano_ledger: false,
            is_keystone: None,
        })
    }

    fn get_offline_signer(&self, _chain_id: &str) -> Result<OfflineSigner> {
        Ok(OfflineSigner::Direct(Arc::new(MockSigner)))
    }

    fn get_offline_signer_only_amino(&self, _chain_id: &str) -> Result<Arc<dyn OfflineAminoSigner>> {
        Ok(Arc::new(MockSigner))
    }

    async fn get_offline_signer_auto(&self, _chain_id: &str) -> Result<OfflineSigner> {
        Ok(OfflineSigner::Direct(Arc::new(MockSigner)))
    }

    async fn experimental_suggest_chain(&self, _chain_info: ChainInfo) -> Result<()> {
        Ok(())
    }

    fn supports(&self, capability: OptionalCapability) -> bool {
        self.capabilities.contains(&capability)
    }

    async fn sign_arbitrary(&self, _chain_id: &str, _signer: &str, _data: SignData) -> Result<StdSignature> {
        if !self.supports(OptionalCapability::SignArbitrary) {
            return Err(CipdError::Unsupported(OptionalCapability::SignArbitrary.as_str().into()));
        }
        Ok(Self::signature())
    }

    async fn disconnect(&self) -> Result<()> {
        if !self.supports(OptionalCapability::Disconnect) {
            return Err(CipdError::Unsupported(OptionalCapability::Disconnect.as_str().into()));
        }
        Ok(())
    }
}

/// Signer returned by [`MockProvider`]; echoes documents back.
#[derive(Debug)]
pub struct MockSigner;

impl MockSigner {
    fn accounts() -> Vec<AccountData> {
        vec![AccountData {
            address: MOCK_ADDRESS.into(),
            algo: "secp256k1".into(),
            pubkey: vec![2; 33],
        }]
    }
}

#[async_trait]
impl OfflineDirectSigner for MockSigner {
    async fn get_accounts(&self) -> Result<Vec<AccountData>> {
        Ok(Self::accounts())
    }

    async fn sign_direct(&self, _signer_address: &str, sign_doc: SignDoc) -> Result<DirectSignResponse> {
        Ok(DirectSignResponse {
            signed: sign_doc,
            signature: MockProvider::signature(),
        })
    }
}

#[async_trait]
impl OfflineAminoSigner for MockSigner {
    async fn get_accounts(&self) -> Result<Vec<AccountData>> {
        Ok(Self::accounts())
    }

    async fn sign_amino(&self, _signer_address: &str, sign_doc: StdSignDoc) -> Result<AminoSignResponse> {
        Ok(AminoSignResponse {
            signed: sign_doc,
            signature: MockProvider::signature(),
        })
    }
}

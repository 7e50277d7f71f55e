//! Wallet data types exchanged with a provider's capability interface.
//!
//! Discovery never constructs or inspects these; they exist so that the
//! [`CosmosProvider`](crate::traits::CosmosProvider) trait has concrete
//! signatures. Field names follow the Cosmos wallet ecosystem's JSON.

use serde::{Deserialize, Serialize};

/// Key/account information returned by `get_key`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    /// Account name shown by the wallet
    pub name: String,
    /// Signing algorithm, e.g. `secp256k1`
    pub algo: String,
    /// Compressed public key bytes
    pub pub_key: Vec<u8>,
    /// Raw address bytes
    pub address: Vec<u8>,
    /// Bech32-encoded address for the chain
    pub bech32_address: String,
    /// Whether the key lives on a Ledger device
    pub is_nano_ledger: bool,
    /// Whether the key lives on a Keystone device, if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_keystone: Option<bool>,
}

/// One account exposed by an offline signer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountData {
    /// Bech32 address
    pub address: String,
    /// Signing algorithm
    pub algo: String,
    /// Public key bytes
    pub pubkey: Vec<u8>,
}

/// Protobuf (direct) sign document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignDoc {
    /// Encoded `TxBody`
    pub body_bytes: Vec<u8>,
    /// Encoded `AuthInfo`
    pub auth_info_bytes: Vec<u8>,
    /// Chain the transaction targets
    pub chain_id: String,
    /// Signer account number
    pub account_number: u64,
}

/// A coin amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Denomination
    pub denom: String,
    /// Integer amount as a decimal string
    pub amount: String,
}

/// Amino fee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdFee {
    /// Fee coins
    pub amount: Vec<Coin>,
    /// Gas limit as a decimal string
    pub gas: String,
}

/// Amino message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AminoMsg {
    /// Amino type name, serialized as `type`
    #[serde(rename = "type")]
    pub msg_type: String,
    /// Message body
    pub value: serde_json::Value,
}

/// Amino (legacy JSON) sign document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StdSignDoc {
    /// Chain the transaction targets
    pub chain_id: String,
    /// Signer account number
    pub account_number: String,
    /// Signer sequence
    pub sequence: String,
    /// Transaction fee
    pub fee: StdFee,
    /// Messages to sign
    pub msgs: Vec<AminoMsg>,
    /// Transaction memo
    pub memo: String,
}

/// Public key attached to a signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubKey {
    /// Amino key type, serialized as `type`
    #[serde(rename = "type")]
    pub key_type: String,
    /// Base64 key bytes
    pub value: String,
}

/// Signature with its public key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdSignature {
    /// Signer public key
    pub pub_key: PubKey,
    /// Base64 signature bytes
    pub signature: String,
}

/// Response of a direct signer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectSignResponse {
    /// Document as signed; the wallet may have changed it
    pub signed: SignDoc,
    /// Signature over `signed`
    pub signature: StdSignature,
}

/// Response of an amino signer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AminoSignResponse {
    /// Document as signed; the wallet may have changed it
    pub signed: StdSignDoc,
    /// Signature over `signed`
    pub signature: StdSignature,
}

/// Arbitrary data for `sign_arbitrary` / `verify_arbitrary`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignData {
    /// UTF-8 text
    Text(String),
    /// Raw bytes
    Bytes(Vec<u8>),
}

/// BIP-44 settings of a chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bip44 {
    /// SLIP-44 coin type
    pub coin_type: u32,
}

/// Bech32 prefixes of a chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bech32Config {
    /// Account address prefix
    pub bech32_prefix_acc_addr: String,
    /// Account public key prefix
    pub bech32_prefix_acc_pub: String,
    /// Validator address prefix
    pub bech32_prefix_val_addr: String,
    /// Validator public key prefix
    pub bech32_prefix_val_pub: String,
    /// Consensus address prefix
    pub bech32_prefix_cons_addr: String,
    /// Consensus public key prefix
    pub bech32_prefix_cons_pub: String,
}

/// A currency known to a chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// Display denomination
    pub coin_denom: String,
    /// On-chain base denomination
    pub coin_minimal_denom: String,
    /// Decimals between the two denominations
    pub coin_decimals: u8,
    /// CoinGecko id for price lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin_gecko_id: Option<String>,
    /// Logo URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin_image_url: Option<String>,
}

/// Chain description passed to `experimental_suggest_chain`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    /// Chain id, e.g. `cosmoshub-4`
    pub chain_id: String,
    /// Display name
    pub chain_name: String,
    /// Tendermint RPC endpoint
    pub rpc: String,
    /// LCD (REST) endpoint
    pub rest: String,
    /// Key derivation settings
    pub bip44: Bip44,
    /// Address prefixes
    pub bech32_config: Bech32Config,
    /// Currencies held on the chain
    pub currencies: Vec<Currency>,
    /// Currencies accepted for fees
    pub fee_currencies: Vec<Currency>,
    /// Staking currency
    pub stake_currency: Currency,
    /// Optional wallet feature flags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

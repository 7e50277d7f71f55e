//! Provider identity and descriptor types.
//!
//! Announcements carry a [`ProviderDetail`]: the wallet's [`ProviderInfo`]
//! plus an opaque handle to its capability object.
//!
//! # Wire Format (JSON)
//! ```text
//! { "info": { "uuid": "...", "name": "...", "icon": "data:image/...", "rdns": "app.keplr" },
//!   "provider": <opaque> }
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::{ICON_DATA_URI_PREFIX, RDNS_SEPARATOR};
use crate::error::{CipdError, Result};
use crate::traits::CosmosProvider;

// ═══════════════════════════════════════════════════════════════════════════════
// RDNS
// ═══════════════════════════════════════════════════════════════════════════════

/// Reverse-domain identity of a wallet vendor (e.g. `app.keplr`).
///
/// Always non-empty, without whitespace, and made of at least two
/// non-empty labels separated by `.`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rdns(String);

impl Rdns {
    /// Parses and validates a reverse-domain identity.
    ///
    /// # Errors
    /// Returns [`CipdError::InvalidRdns`] if the value is empty, contains
    /// whitespace, has no separator, or has an empty label.
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let invalid = |reason: &str| CipdError::InvalidRdns {
            value: value.clone(),
            reason: reason.into(),
        };

        if value.is_empty() {
            return Err(invalid("empty"));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(invalid("contains whitespace"));
        }
        if !value.contains(RDNS_SEPARATOR) {
            return Err(invalid("missing separator"));
        }
        if value.split(RDNS_SEPARATOR).any(str::is_empty) {
            return Err(invalid("empty label"));
        }

        Ok(Self(value))
    }

    /// Returns the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Rdns {
    type Error = CipdError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<Rdns> for String {
    fn from(rdns: Rdns) -> Self {
        rdns.0
    }
}

impl std::str::FromStr for Rdns {
    type Err = CipdError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for Rdns {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Rdns {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Rdns {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Rdns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Rdns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rdns({})", self.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROVIDER INFO
// ═══════════════════════════════════════════════════════════════════════════════

/// Identity and display metadata for one announced provider instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Unique identifier of this announcement instance
    pub uuid: String,
    /// Human-readable wallet name
    pub name: String,
    /// Self-contained image data URI (RFC-2397)
    pub icon: String,
    /// Reverse-domain identity of the wallet vendor
    pub rdns: Rdns,
}

impl ProviderInfo {
    /// Creates provider info with a freshly generated v4 uuid.
    pub fn new(name: impl Into<String>, icon: impl Into<String>, rdns: Rdns) -> Self {
        Self {
            uuid: Self::generate_uuid(),
            name: name.into(),
            icon: icon.into(),
            rdns,
        }
    }

    /// Creates provider info with an explicit uuid.
    pub fn with_uuid(
        uuid: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        rdns: Rdns,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
            icon: icon.into(),
            rdns,
        }
    }

    /// Returns a random v4 uuid string.
    pub fn generate_uuid() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Validates the fields a store relies on.
    ///
    /// Only the uuid is required: it is the store's dedup key. The rdns is
    /// already validated by its type.
    pub fn validate(&self) -> Result<()> {
        if self.uuid.trim().is_empty() {
            return Err(CipdError::InvalidAnnouncement("uuid is missing".into()));
        }
        Ok(())
    }

    /// Returns true if the icon is an image data URI.
    pub fn has_data_uri_icon(&self) -> bool {
        self.icon.starts_with(ICON_DATA_URI_PREFIX)
    }

    /// Checks that the icon is a self-contained image data URI.
    ///
    /// Not part of [`validate`](Self::validate): stores accept any icon.
    pub fn validate_icon(&self) -> Result<()> {
        if !self.has_data_uri_icon() {
            return Err(CipdError::InvalidIcon(format!(
                "expected a '{ICON_DATA_URI_PREFIX}' URI for '{}'",
                self.rdns
            )));
        }
        Ok(())
    }

    /// Decodes the `info` object of an announce payload.
    pub fn from_json(json: &str) -> Result<Self> {
        let info: Self = serde_json::from_str(json)?;
        info.validate()?;
        info.validate_icon()?;
        Ok(info)
    }

    /// Encodes the `info` object of an announce payload.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROVIDER DETAIL
// ═══════════════════════════════════════════════════════════════════════════════

/// Shared handle to a wallet's capability object.
pub type ProviderHandle = Arc<dyn CosmosProvider>;

/// A provider descriptor: identity plus opaque capability handle.
///
/// The provider is never introspected by discovery; it is passed through
/// untouched to whoever consumes the store.
#[derive(Clone)]
pub struct ProviderDetail {
    /// Identity and display metadata
    pub info: ProviderInfo,
    /// Capability handle
    pub provider: ProviderHandle,
}

impl ProviderDetail {
    /// Creates a descriptor.
    pub fn new(info: ProviderInfo, provider: ProviderHandle) -> Self {
        Self { info, provider }
    }

    /// Returns the announcement instance uuid.
    pub fn uuid(&self) -> &str {
        &self.info.uuid
    }

    /// Returns the vendor identity.
    pub fn rdns(&self) -> &Rdns {
        &self.info.rdns
    }
}

impl fmt::Debug for ProviderDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderDetail")
            .field("info", &self.info)
            .field("provider", &"<opaque>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    use crate::testing::MockProvider;

    #[test_case("app.keplr" ; "two labels")]
    #[test_case("io.cosmostation" ; "vendor")]
    #[test_case("com.example.wallet" ; "three labels")]
    fn test_rdns_parse_valid(value: &str) {
        let rdns = Rdns::parse(value).unwrap();
        assert_eq!(rdns.as_str(), value);
    }

    #[test_case("" ; "empty")]
    #[test_case("keplr" ; "no separator")]
    #[test_case("app." ; "trailing separator")]
    #[test_case(".keplr" ; "leading separator")]
    #[test_case("app..keplr" ; "double separator")]
    #[test_case("app .keplr" ; "whitespace")]
    fn test_rdns_parse_invalid(value: &str) {
        let err = Rdns::parse(value).unwrap_err();
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_rdns_serde_rejects_invalid() {
        assert!(serde_json::from_str::<Rdns>("\"keplr\"").is_err());
        let rdns: Rdns = serde_json::from_str("\"app.keplr\"").unwrap();
        assert_eq!(rdns, "app.keplr");
    }

    #[test]
    fn test_info_wire_shape() {
        let info = ProviderInfo::with_uuid(
            "u1",
            "Keplr",
            "data:image/svg+xml;base64,AA==",
            Rdns::parse("app.keplr").unwrap(),
        );
        let value: serde_json::Value = serde_json::from_str(&info.to_json().unwrap()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["uuid"], "u1");
        assert_eq!(object["name"], "Keplr");
        assert_eq!(object["icon"], "data:image/svg+xml;base64,AA==");
        assert_eq!(object["rdns"], "app.keplr");
    }

    #[test]
    fn test_info_from_json_requires_uuid() {
        let json = r#"{"uuid":"  ","name":"Keplr","icon":"data:image/png;base64,","rdns":"app.keplr"}"#;
        assert!(ProviderInfo::from_json(json).is_err());

        let json = r#"{"name":"Keplr","icon":"data:image/png;base64,","rdns":"app.keplr"}"#;
        assert!(ProviderInfo::from_json(json).is_err());
    }

    #[test_case("https://keplr.app/icon.png" ; "remote url")]
    #[test_case("" ; "empty")]
    #[test_case("data:text/plain;base64,AA==" ; "non-image data uri")]
    fn test_info_from_json_rejects_icon(icon: &str) {
        let json = format!(r#"{{"uuid":"u1","name":"Keplr","icon":"{icon}","rdns":"app.keplr"}}"#);
        let result = ProviderInfo::from_json(&json);
        assert!(matches!(result, Err(CipdError::InvalidIcon(_))));
    }

    #[test]
    fn test_generated_uuids_are_unique() {
        let rdns = Rdns::parse("app.keplr").unwrap();
        let a = ProviderInfo::new("Keplr", "data:image/png;base64,", rdns.clone());
        let b = ProviderInfo::new("Keplr", "data:image/png;base64,", rdns);
        assert_ne!(a.uuid, b.uuid);
        assert!(a.has_data_uri_icon());
    }

    #[test]
    fn test_detail_debug_hides_provider() {
        let detail = ProviderDetail::new(
            ProviderInfo::with_uuid("u1", "Keplr", "data:image/png;base64,", Rdns::parse("app.keplr").unwrap()),
            MockProvider::shared(),
        );
        let debug = format!("{:?}", detail);
        assert!(debug.contains("<opaque>"));
        assert_eq!(detail.uuid(), "u1");
        assert_eq!(detail.rdns(), &"app.keplr");
    }

    proptest! {
        #[test]
        fn prop_joined_labels_parse(labels in proptest::collection::vec("[a-z0-9-]{1,12}", 2..5)) {
            let value = labels.join(".");
            let rdns = Rdns::parse(value.clone()).unwrap();
            prop_assert_eq!(rdns.as_str(), value.as_str());
        }

        #[test]
        fn prop_single_label_rejected(label in "[a-z0-9-]{1,24}") {
            prop_assert!(Rdns::parse(label).is_err());
        }
    }
}

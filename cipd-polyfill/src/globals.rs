//! In-memory model of the host's global object.
//!
//! Hosts mirror whatever wallet objects extensions injected (and tests
//! fabricate them) so that detection can run without a real browser.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use cipd_core::error::{CipdError, Result};
use cipd_core::traits::GlobalScope;
use cipd_core::types::ProviderHandle;

/// A value stored at a global property.
#[derive(Clone)]
pub enum GlobalValue {
    /// A wallet capability object
    Provider(ProviderHandle),
    /// A namespace object holding further properties
    Object(BTreeMap<String, GlobalValue>),
    /// Any other value; the string describes it for diagnostics
    Opaque(String),
}

impl GlobalValue {
    /// Creates an empty namespace object.
    pub fn object() -> Self {
        GlobalValue::Object(BTreeMap::new())
    }

    fn type_name(&self) -> &'static str {
        match self {
            GlobalValue::Provider(_) => "provider",
            GlobalValue::Object(_) => "object",
            GlobalValue::Opaque(_) => "opaque",
        }
    }
}

impl fmt::Debug for GlobalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlobalValue::Provider(_) => f.write_str("Provider(<opaque>)"),
            GlobalValue::Object(map) => f.debug_map().entries(map.iter()).finish(),
            GlobalValue::Opaque(description) => write!(f, "Opaque({description})"),
        }
    }
}

/// Thread-safe global object with dotted-path injection.
#[derive(Debug, Default)]
pub struct InjectedGlobals {
    root: RwLock<BTreeMap<String, GlobalValue>>,
}

impl InjectedGlobals {
    /// Creates an empty global object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty global object behind an `Arc`.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    fn split(path: &str) -> Result<Vec<&str>> {
        let segments: Vec<&str> = path.split('.').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(CipdError::ConfigError(format!("invalid global path '{path}'")));
        }
        Ok(segments)
    }

    /// Sets the value at a dotted path, creating namespace objects on the way.
    ///
    /// # Errors
    /// Fails if the path is malformed or an intermediate segment holds a
    /// non-object value.
    pub fn inject(&self, path: &str, value: GlobalValue) -> Result<()> {
        let segments = Self::split(path)?;
        let (last, parents) = segments
            .split_last()
            .ok_or_else(|| CipdError::ConfigError("empty global path".into()))?;

        let mut root = self.root.write();
        let mut current = &mut *root;
        for (depth, segment) in parents.iter().enumerate() {
            let entry = current
                .entry((*segment).to_string())
                .or_insert_with(GlobalValue::object);
            current = match entry {
                GlobalValue::Object(map) => map,
                _ => {
                    return Err(CipdError::UnexpectedGlobalShape {
                        path: segments[..=depth].join("."),
                    })
                }
            };
        }

        trace!(path, kind = value.type_name(), "Injected global");
        current.insert((*last).to_string(), value);
        Ok(())
    }

    /// Injects a provider at a dotted path.
    pub fn inject_provider(&self, path: &str, provider: ProviderHandle) -> Result<()> {
        self.inject(path, GlobalValue::Provider(provider))
    }

    /// Removes the value at a dotted path.
    pub fn remove(&self, path: &str) -> Option<GlobalValue> {
        let segments = Self::split(path).ok()?;
        let (last, parents) = segments.split_last()?;

        let mut root = self.root.write();
        let mut current = &mut *root;
        for segment in parents {
            current = match current.get_mut(*segment)? {
                GlobalValue::Object(map) => map,
                _ => return None,
            };
        }
        current.remove(*last)
    }

    /// Removes every global.
    pub fn clear(&self) {
        self.root.write().clear();
    }

    /// Returns true if nothing is injected.
    pub fn is_empty(&self) -> bool {
        self.root.read().is_empty()
    }
}

impl GlobalScope for InjectedGlobals {
    fn lookup(&self, path: &[&str]) -> Result<Option<ProviderHandle>> {
        let shape_error = |depth: usize| CipdError::UnexpectedGlobalShape {
            path: path[..=depth].join("."),
        };

        let root = self.root.read();
        let mut current = &*root;
        for (depth, segment) in path.iter().enumerate() {
            let value = match current.get(*segment) {
                Some(value) => value,
                None => return Ok(None),
            };
            let is_last = depth + 1 == path.len();
            match (value, is_last) {
                (GlobalValue::Provider(provider), true) => return Ok(Some(provider.clone())),
                (GlobalValue::Object(map), false) => current = map,
                _ => return Err(shape_error(depth)),
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cipd_core::testing::MockProvider;

    #[test]
    fn test_lookup_root_provider() {
        let globals = InjectedGlobals::new();
        globals.inject_provider("keplr", MockProvider::shared()).unwrap();

        assert!(globals.lookup(&["keplr"]).unwrap().is_some());
        assert!(globals.lookup(&["leap"]).unwrap().is_none());
    }

    #[test]
    fn test_lookup_nested_provider() {
        let globals = InjectedGlobals::new();
        globals.inject_provider("cosmostation.providers.keplr", MockProvider::shared()).unwrap();

        assert!(globals.lookup(&["cosmostation", "providers", "keplr"]).unwrap().is_some());
        assert!(globals.lookup(&["cosmostation", "cosmos"]).unwrap().is_none());
        assert!(globals.lookup(&["xfi", "cosmos"]).unwrap().is_none());
    }

    #[test]
    fn test_lookup_unexpected_shape() {
        let globals = InjectedGlobals::new();
        globals.inject("xfi", GlobalValue::Opaque("string".into())).unwrap();
        globals.inject("coin98.cosmos", GlobalValue::object()).unwrap();

        let result = globals.lookup(&["xfi", "cosmos"]);
        assert!(matches!(result, Err(CipdError::UnexpectedGlobalShape { ref path }) if path == "xfi"));

        match globals.lookup(&["coin98", "cosmos"]) {
            Err(err) => assert!(err.is_detection_error()),
            Ok(_) => panic!("expected a shape error for a namespace at the leaf"),
        }
    }

    #[test]
    fn test_inject_through_non_object_fails() {
        let globals = InjectedGlobals::new();
        globals.inject_provider("keplr", MockProvider::shared()).unwrap();

        assert!(globals.inject_provider("keplr.inner", MockProvider::shared()).is_err());
        assert!(globals.inject_provider("bad..path", MockProvider::shared()).is_err());
    }

    #[test]
    fn test_remove_and_clear() {
        let globals = InjectedGlobals::new();
        globals.inject_provider("xfi.cosmos", MockProvider::shared()).unwrap();
        globals.inject_provider("leap", MockProvider::shared()).unwrap();

        assert!(globals.remove("xfi.cosmos").is_some());
        assert!(globals.remove("xfi.cosmos").is_none());
        assert!(globals.lookup(&["xfi", "cosmos"]).unwrap().is_none());

        globals.clear();
        assert!(globals.is_empty());
    }
}

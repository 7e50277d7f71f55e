//! End-to-end discovery scenarios: native announcers, legacy wallets and
//! stores sharing one context.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

use cipd_channel::{ProviderAnnouncer, SignalKind};
use cipd_core::testing::MockProvider;
use cipd_core::types::{ProviderDetail, ProviderInfo, Rdns};
use cipd_polyfill::{GlobalValue, InjectedGlobals, PolyfillConfig};
use cipd_store::{DiscoveryContext, ProviderChange, Store, StoreOptions, SubscribeOptions};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn immediate_context(globals: Arc<InjectedGlobals>) -> DiscoveryContext {
    DiscoveryContext::new(globals, PolyfillConfig::default().immediate())
}

fn rdns_list(store: &Store) -> Vec<String> {
    store
        .get_providers()
        .iter()
        .map(|detail| detail.info.rdns.to_string())
        .collect()
}

#[test]
fn test_announce_find_destroy() {
    init_tracing();
    let context = immediate_context(InjectedGlobals::shared());
    let store = Store::create(&context, StoreOptions::default().without_polyfill());

    let info = ProviderInfo::with_uuid("u1", "Keplr", "data:image/png;base64,", Rdns::parse("app.keplr").unwrap());
    context.bus().announce_provider(ProviderDetail::new(info, MockProvider::shared()));

    assert_eq!(store.len(), 1);
    let found = store.find_provider("app.keplr").unwrap();
    assert_eq!(found.info.uuid, "u1");

    let snapshot = store.get_providers();
    store.destroy();

    let info = ProviderInfo::with_uuid("u2", "Leap", "data:image/png;base64,", Rdns::parse("io.leapwallet").unwrap());
    context.bus().announce_provider(ProviderDetail::new(info, MockProvider::shared()));

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].info.uuid, "u1");
    assert!(store.is_empty());
}

#[test]
fn test_native_announcer_answers_store_request() {
    init_tracing();
    let context = immediate_context(InjectedGlobals::shared());

    let announcer = ProviderAnnouncer::new(
        context.bus().clone(),
        "Leap",
        "data:image/png;base64,",
        "io.leapwallet",
        MockProvider::shared(),
    )
    .unwrap();
    announcer.attach();

    // Attached before the store existed: only the store's request reaches it.
    let store = Store::create(&context, StoreOptions::default());
    assert_eq!(rdns_list(&store), vec!["io.leapwallet"]);
    assert_eq!(store.get_providers()[0].info.uuid, announcer.detail().info.uuid);

    // Same uuid on every answer, so resetting does not duplicate it.
    store.reset();
    store.reset();
    assert_eq!(store.len(), 1);
}

#[test]
fn test_polyfill_discovers_legacy_wallets() {
    init_tracing();
    let globals = InjectedGlobals::shared();
    globals.inject_provider("keplr", MockProvider::shared()).unwrap();
    globals
        .inject_provider("cosmostation.cosmos", MockProvider::shared())
        .unwrap();
    let context = immediate_context(globals);

    let store = Store::create(&context, StoreOptions::default());
    assert_eq!(rdns_list(&store), vec!["app.keplr", "io.cosmostation"]);

    let bare = Store::create(&context, StoreOptions::default().without_polyfill());
    // The detector still re-announces what it found for the first store.
    assert_eq!(rdns_list(&bare), vec!["app.keplr", "io.cosmostation"]);
}

#[test]
fn test_second_store_receives_reannouncement() {
    init_tracing();
    let globals = InjectedGlobals::shared();
    globals.inject_provider("keplr", MockProvider::shared()).unwrap();
    let context = immediate_context(globals);

    let first = Store::create(&context, StoreOptions::default());
    let original_uuid = first.find_provider("app.keplr").unwrap().info.uuid;

    let second = Store::create(&context, StoreOptions::default());
    let reannounced = second.find_provider("app.keplr").unwrap();

    assert_eq!(second.len(), 1);
    assert_ne!(reannounced.info.uuid, original_uuid);
    assert_eq!(context.detector().detected().len(), 1);
    // Re-announcements reach every store on the bus.
    assert_eq!(first.len(), 2);
}

#[test]
fn test_failed_legacy_entry_does_not_hide_others() {
    init_tracing();
    let globals = InjectedGlobals::shared();
    globals.inject("xfi", GlobalValue::Opaque("string".into())).unwrap();
    globals.inject_provider("falcon", MockProvider::shared()).unwrap();
    let context = immediate_context(globals);

    let store = Store::create(&context, StoreOptions::default());
    assert_eq!(rdns_list(&store), vec!["io.falconwallet"]);
}

#[test]
fn test_reset_repopulates_through_reannouncement() {
    init_tracing();
    let globals = InjectedGlobals::shared();
    globals.inject_provider("leap", MockProvider::shared()).unwrap();
    let context = immediate_context(globals);
    let store = Store::create(&context, StoreOptions::default());

    let changes: Arc<Mutex<Vec<ProviderChange>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = changes.clone();
    let _handle = store.subscribe(move |_, change| sink.lock().push(change.clone()), SubscribeOptions::default());

    store.reset();

    let changes = changes.lock();
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].removed.len(), 1);
    assert!(changes[0].added.is_empty());
    assert_eq!(changes[1].added.len(), 1);
    assert_eq!(rdns_list(&store), vec!["io.leapwallet"]);
}

#[test]
fn test_reset_detects_wallet_injected_after_creation() {
    init_tracing();
    let globals = InjectedGlobals::shared();
    let context = immediate_context(globals.clone());
    let store = Store::create(&context, StoreOptions::default());
    assert!(store.is_empty());

    globals.inject_provider("coin98.cosmos", MockProvider::shared()).unwrap();
    store.reset();

    assert_eq!(rdns_list(&store), vec!["io.coin98"]);
    assert_eq!(context.detector().detected().len(), 1);

    let bare = Store::create(&context, StoreOptions::default().without_polyfill());
    globals.inject_provider("falcon", MockProvider::shared()).unwrap();
    bare.reset();
    // Without the polyfill, reset only hears re-announcements of known wallets.
    assert_eq!(rdns_list(&bare), vec!["io.coin98"]);
}

#[test]
fn test_clear_on_empty_store_notifies() {
    init_tracing();
    let context = immediate_context(InjectedGlobals::shared());
    let store = Store::create(&context, StoreOptions::default());

    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    let _handle = store.subscribe(
        move |providers, change| sink.lock().push((providers.len(), change.is_empty())),
        SubscribeOptions::default(),
    );

    store.clear();
    assert_eq!(*calls.lock(), vec![(0, true)]);
}

#[test]
fn test_many_stores_share_one_context() {
    init_tracing();
    let context = immediate_context(InjectedGlobals::shared());
    let stores: Vec<Store> = (0..3)
        .map(|_| Store::create(&context, StoreOptions::default().without_polyfill()))
        .collect();
    assert_eq!(context.bus().listener_count(SignalKind::Announce), 3);

    let announcer = ProviderAnnouncer::new(
        context.bus().clone(),
        "Keplr",
        "data:image/png;base64,",
        "app.keplr",
        MockProvider::shared(),
    )
    .unwrap();
    announcer.announce();
    assert!(stores.iter().all(|store| store.len() == 1));

    drop(stores);
    assert_eq!(context.bus().listener_count(SignalKind::Announce), 0);
}

#[tokio::test]
async fn test_delayed_reannouncement_arrives_later() {
    init_tracing();
    let globals = InjectedGlobals::shared();
    globals.inject_provider("keplr", MockProvider::shared()).unwrap();
    let context = DiscoveryContext::new(
        globals,
        PolyfillConfig::default().with_delay(Duration::from_millis(10)),
    );

    let first = Store::create(&context, StoreOptions::default());
    assert_eq!(first.len(), 1);

    let second = Store::create(&context, StoreOptions::default());
    assert!(second.is_empty());

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(rdns_list(&second), vec!["app.keplr"]);
}

#[test]
fn test_delayed_reannouncement_without_runtime_timers() {
    init_tracing();
    let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let globals = InjectedGlobals::shared();
    globals.inject_provider("keplr", MockProvider::shared()).unwrap();
    let context = DiscoveryContext::new(globals, PolyfillConfig::default());

    let second = runtime.block_on(async {
        let first = Store::create(&context, StoreOptions::default());
        assert_eq!(first.len(), 1);

        let second = Store::create(&context, StoreOptions::default());
        for _ in 0..100 {
            if !second.is_empty() {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        second
    });

    assert_eq!(rdns_list(&second), vec!["app.keplr"]);
}

// ==============================================
// RECENTS PERSISTENCE TESTS (integration)
// ==============================================
//
// Round-trips between a recents page, the settings store and a fresh page
// restored through other pages acting as lookup sources.

use std::sync::Arc;

use gridkit::persist::{encode_codes, parse_codes};
use gridkit::prelude::*;

fn template() -> Vec<Item> {
    vec![
        Item::new(TEMPLATE_CODE_0, 48, 48).at(0, 0),
        Item::new(TEMPLATE_CODE_1, 48, 48).at(48, 0),
    ]
}

fn metrics() -> LayoutMetrics {
    LayoutMetrics::new(48 * 7, 0, 0)
}

fn recents_page(store: Arc<MemorySettingsStore>, max_count: usize) -> GridPage {
    GridPage::builder(max_count)
        .template(template())
        .metrics(metrics())
        .recents(true)
        .settings_store(store)
        .build()
}

fn category_page(codes: impl IntoIterator<Item = i32>) -> GridPage {
    let page = GridPage::new(&template(), metrics(), 64);
    for code in codes {
        page.insert_silent(Item::new(code, 48, 48).with_label(format!("{code:x}")));
    }
    page
}

#[test]
fn save_then_load_preserves_front_to_back_order() {
    let store = Arc::new(MemorySettingsStore::new());
    let smileys = category_page(0x1f600..0x1f610);
    let animals = category_page(0x1f400..0x1f410);

    let recents = recents_page(store.clone(), 28);
    // a, b, c front to back
    for code in [0x1f40a, 0x1f605, 0x1f600] {
        recents.insert_recent(smileys.lookup(code).or_else(|| animals.lookup(code)).unwrap());
    }
    assert_eq!(recents.codes(), [0x1f600, 0x1f605, 0x1f40a]);

    let fresh = recents_page(store.clone(), 28);
    let report = fresh.load_recent_keys(&[&smileys, &animals]);

    assert_eq!(report.restored, 3);
    assert_eq!(fresh.codes(), [0x1f600, 0x1f605, 0x1f40a]);
    assert_eq!(fresh.snapshot()[2].item().label(), Some("1f40a"));
    // restore inserts silently
    assert_eq!(store.metrics().writes, 3);
}

#[test]
fn eviction_example() {
    let store = Arc::new(MemorySettingsStore::new());
    let page = recents_page(store.clone(), 3);
    for code in [0xA, 0xB, 0xC] {
        page.insert_recent(Item::new(code, 48, 48));
    }
    assert_eq!(page.codes(), [0xC, 0xB, 0xA]);

    page.insert_recent(Item::new(0xD, 48, 48));
    assert_eq!(page.codes(), [0xD, 0xC, 0xB]);
    assert_eq!(store.read_string(RECENT_KEYS_SETTING, ""), "13,12,11,");
}

#[test]
fn separator_tolerance() {
    let store = Arc::new(MemorySettingsStore::with_entries([(RECENT_KEYS_SETTING, "5,7,,9,")]));
    let page = recents_page(store, 10);
    let catalogue: Vec<Item> = (0..16).map(|c| Item::new(c, 48, 48)).collect();

    let report = page.load_recent_keys(&[&catalogue]);
    assert_eq!(report.restored, 3);
    assert_eq!(report.malformed, 0);
    assert_eq!(page.codes(), [5, 7, 9]);
}

#[test]
fn malformed_tokens_are_skipped_by_default() {
    let store = Arc::new(MemorySettingsStore::with_entries([(
        RECENT_KEYS_SETTING,
        "5,seven,9,",
    )]));
    let page = recents_page(store, 10);
    let catalogue: Vec<Item> = (0..16).map(|c| Item::new(c, 48, 48)).collect();

    let report = page.load_recent_keys(&[&catalogue]);
    assert_eq!(report.malformed, 1);
    assert!(!report.aborted);
    assert_eq!(page.codes(), [5, 9]);
}

#[test]
fn restore_beyond_capacity_keeps_stored_front() {
    let store = Arc::new(MemorySettingsStore::with_entries([(
        RECENT_KEYS_SETTING,
        encode_codes(0..10),
    )]));
    let page = recents_page(store, 4);
    let catalogue: Vec<Item> = (0..16).map(|c| Item::new(c, 48, 48)).collect();

    page.load_recent_keys(&[&catalogue]);
    assert_eq!(page.codes(), [0, 1, 2, 3]);
}

#[test]
fn encode_parse_agree_on_stored_format() {
    let encoded = encode_codes([128512, -3, 0]);
    assert_eq!(encoded, "128512,-3,0,");
    let parsed = parse_codes(&encoded, MalformedTokenPolicy::Skip);
    assert_eq!(parsed.codes, [128512, -3, 0]);
}

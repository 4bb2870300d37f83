//! Browser integration: the store round-tripping through real
//! `window.localStorage`. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use brewratings::models::review::{NewReview, Review};
use brewratings::storage::{BrowserStorage, Keyed, ReviewStore};

wasm_bindgen_test_configure!(run_in_browser);

fn clear(key: &str) {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(key).unwrap();
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    let key = "test-browser-reviews";
    clear(key);

    let store: ReviewStore<Keyed, BrowserStorage> = ReviewStore::new(BrowserStorage, key);
    assert!(store.reviews_for("cap-001").is_empty());

    store.add_review(
        "cap-001",
        Review::new(NewReview {
            rating: 5,
            text: "Great".to_string(),
        }),
    );

    // a second store over the same key sees the persisted document
    let reopened: ReviewStore<Keyed, BrowserStorage> = ReviewStore::new(BrowserStorage, key);
    let reviews = reopened.reviews_for("cap-001");
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].text, "Great");

    clear(key);
}

#[wasm_bindgen_test]
fn malformed_local_storage_content_is_discarded() {
    let key = "test-browser-reviews-malformed";
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.set_item(key, "not json {").unwrap();

    let store: ReviewStore<Keyed, BrowserStorage> = ReviewStore::new(BrowserStorage, key);
    assert!(store.try_load().is_err());
    assert!(store.reviews_for("cap-001").is_empty());

    clear(key);
}

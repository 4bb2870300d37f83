//! Mounts the full app in a browser and checks that picking a different
//! catalog item blanks the review form: rating display back to "0.0",
//! counter back to "0/300", error region empty, and only the new item's
//! reviews shown. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement, HtmlTextAreaElement};

use brewratings::app::App;
use brewratings::storage::STORAGE_KEY;
use leptos::mount_to;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn text_of(selector: &str) -> String {
    document()
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

fn click(selector: &str) {
    document()
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

#[wasm_bindgen_test]
fn switching_items_resets_the_form() {
    // start from an empty persisted document
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(STORAGE_KEY).unwrap();

    let container = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&container).unwrap();
    mount_to(container.clone().dyn_into().unwrap(), App);

    // fill in the form for the first item
    click("input[name='rating'][value='4']");
    assert_eq!(text_of(".rating-value"), "4.0");

    let textarea: HtmlTextAreaElement = document()
        .query_selector("textarea")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    textarea.set_value("smooth");
    textarea
        .dispatch_event(&Event::new("input").unwrap())
        .unwrap();
    assert_eq!(text_of(".char-count"), "6/300");

    // pick the other catalog row
    let rows = document().query_selector_all(".item").unwrap();
    assert!(rows.length() >= 2);
    rows.item(1)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();

    // the form came back blank for the newly selected item
    assert_eq!(text_of(".rating-value"), "0.0");
    assert_eq!(text_of(".char-count"), "0/300");
    assert_eq!(text_of(".form-error"), "");
    assert_eq!(text_of(".reviews"), "No reviews yet for this product.");

    storage.remove_item(STORAGE_KEY).unwrap();
    container.remove();
}

//! ブラウザ上でのDOMユーティリティテスト
//!
//! `wasm-pack test --headless --firefox web-wasm` で実行

use portfolio_common::Section;
use portfolio_web::dom::{current_year, scroll_to_section};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_scroll_to_missing_section() {
    assert!(!scroll_to_section(Section::Experience));
}

#[wasm_bindgen_test]
fn test_scroll_to_existing_section() {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("section").unwrap();
    element.set_id(Section::Contact.id());
    document.body().unwrap().append_child(&element).unwrap();

    assert!(scroll_to_section(Section::Contact));
}

#[wasm_bindgen_test]
fn test_current_year_is_plausible() {
    assert!(current_year() >= 2024);
}

//! Browser smoke tests: `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use backdrop_engine::Backdrop;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn missing_canvas_still_simulates() {
    let mut backdrop = Backdrop::with_config("no-such-canvas", ".img", r#"{ "particle_count": 25 }"#)
        .expect("config should parse");
    assert_eq!(backdrop.particle_count(), 25);

    backdrop.tick();
    backdrop.tick();
    assert_eq!(backdrop.frame(), 2);
}

#[wasm_bindgen_test]
fn host_rects_replace_dom_rects() {
    let mut backdrop = Backdrop::new("no-such-canvas", ".img");
    backdrop.set_content_rects(&[0.0, 0.0, 100.0, 50.0, 200.0, 0.0, 10.0, 10.0]);
    assert_eq!(backdrop.content_rect_count(), 2);

    backdrop.on_load();
    // Test page has no `.img` elements
    assert_eq!(backdrop.content_rect_count(), 0);
}

#[wasm_bindgen_test]
fn bad_config_is_rejected() {
    assert!(Backdrop::with_config("c", ".img", r#"{ "min_size": -1 }"#).is_err());
}

//! Browser tests for the JavaScript entry points
//!
//! Run with `wasm-pack test --headless --chrome crates/undertow-web`.

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use undertow_web::{available_palettes, mount_background};

wasm_bindgen_test_configure!(run_in_browser);

fn container(attached: bool) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    el.set_attribute("style", "position:relative;width:320px;height:200px;")
        .unwrap();
    if attached {
        document.body().unwrap().append_child(&el).unwrap();
    }
    el
}

#[wasm_bindgen_test]
fn test_available_palettes_json() {
    let json: serde_json::Value = serde_json::from_str(&available_palettes()).unwrap();
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 8);
    assert_eq!(list[0]["id"], "ocean");
    assert!(list.iter().any(|p| p["id"] == "gold"));
}

#[wasm_bindgen_test]
fn test_mount_and_dispose_restore_children() {
    let el = container(true);
    let handle = mount_background(el.clone(), Some(r#"{"palette":"gold"}"#.to_string()));

    assert_eq!(handle.state(), "running");
    assert_eq!(el.child_element_count(), 1);

    handle.resize();
    handle.dispose();
    handle.dispose();

    assert_eq!(handle.state(), "unmounted");
    assert!(!handle.is_running());
    assert_eq!(el.child_element_count(), 0);
    el.remove();
}

#[wasm_bindgen_test]
fn test_invalid_options_degrade() {
    let el = container(true);
    let handle = mount_background(el.clone(), Some("{not json".to_string()));
    assert_eq!(handle.state(), "degraded");
    assert_eq!(el.child_element_count(), 0);

    handle.dispose();
    assert_eq!(handle.state(), "unmounted");
    el.remove();
}

#[wasm_bindgen_test]
fn test_unknown_palette_degrades() {
    let el = container(true);
    let handle = mount_background(el.clone(), Some(r#"{"palette":"neon"}"#.to_string()));
    assert_eq!(handle.state(), "degraded");
    el.remove();
}

#[wasm_bindgen_test]
fn test_detached_container_degrades() {
    let el = container(false);
    let handle = mount_background(el.clone(), None);
    assert_eq!(handle.state(), "degraded");
    assert_eq!(el.child_element_count(), 0);
    handle.dispose();
}

#[wasm_bindgen_test]
fn test_pointer_reveal_mount() {
    let el = container(true);
    let handle = mount_background(
        el.clone(),
        Some(r#"{"palette":"lagoon","interactionMode":"pointer-reveal"}"#.to_string()),
    );
    assert_eq!(handle.state(), "running");
    handle.dispose();
    assert_eq!(el.child_element_count(), 0);
    el.remove();
}

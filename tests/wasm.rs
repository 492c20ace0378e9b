//! Browser-side checks of the JavaScript API.
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use arboretum::TreeLayoutWasm;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn edge_map() -> JsValue {
    let map = Object::new();
    let children = |ids: &[u32]| {
        let array: Array = ids.iter().copied().map(JsValue::from).collect();
        JsValue::from(array)
    };
    Reflect::set(&map, &"0".into(), &children(&[1, 2])).unwrap();
    Reflect::set(&map, &"1".into(), &children(&[3])).unwrap();
    map.into()
}

#[wasm_bindgen_test]
fn layout_is_interleaved() {
    let wasm = TreeLayoutWasm::from_edge_pairs(4, &[0, 1, 0, 2, 1, 3]).unwrap();
    assert_eq!(wasm.node_count(), 4);

    let flat = wasm.layout("wide").unwrap().to_vec();
    assert_eq!(flat.len(), 8);
    assert!(flat.iter().all(|v| v.is_finite()));
}

#[wasm_bindgen_test]
fn edge_map_object_matches_pairs() {
    let from_map = TreeLayoutWasm::from_edge_map(4, edge_map()).unwrap();
    assert_eq!(from_map.edge_pairs(), vec![0, 1, 0, 2, 1, 3]);
}

#[wasm_bindgen_test]
fn malformed_input_throws() {
    assert!(TreeLayoutWasm::from_edge_pairs(3, &[0, 1, 1, 0]).is_err());
    assert!(TreeLayoutWasm::from_edge_pairs(3, &[0, 1, 0]).is_err());

    let wasm = TreeLayoutWasm::from_edge_pairs(2, &[0, 1]).unwrap();
    assert!(wasm.layout("spiral").is_err());
}

#[wasm_bindgen_test]
fn partial_config_keeps_defaults() {
    let mut wasm = TreeLayoutWasm::from_edge_pairs(3, &[0, 1, 0, 2]).unwrap();
    let config = Object::new();
    Reflect::set(&config, &"scale".into(), &JsValue::from_f64(10.0)).unwrap();
    wasm.set_config(config.into()).unwrap();

    let bounds = wasm.bounds("thin").unwrap();
    assert_eq!(bounds, vec![10.0, 10.0, 20.0, 20.0]);
    // The default radius of 10 still applies to hit testing.
    assert_eq!(wasm.node_at("thin", 10.0, 12.0).unwrap(), Some(0));
}

#[wasm_bindgen_test]
fn strategy_names() {
    let names = TreeLayoutWasm::strategies();
    assert_eq!(names.len(), 7);
    assert!(names.iter().any(|name| name == "buchheim"));
}

#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use tegaki_wasm::{recognition_requests, segment_strokes, segment_to_arrays};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(ok) =
        Reflect::get(v, &JsValue::from_str("ok")).and_then(|x| x.as_bool().ok_or(JsValue::NULL))
    {
        if ok {
            return false;
        }
        if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
            if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
                return c.as_string().map_or(false, |s| s == code);
            }
        }
    }
    false
}

fn two_strokes() -> JsValue {
    // Two separated blobs, enough to split into two columns.
    let mut strokes = Vec::new();
    for x0 in [50.0f32, 200.0f32] {
        let mut points = Vec::new();
        for i in 0..11 {
            for j in 0..11 {
                points.push(serde_json::json!({
                    "x": x0 + i as f32 * 4.0,
                    "y": 100.0 + j as f32 * 4.0,
                    "t": (i * 11 + j) as f32,
                }));
            }
        }
        strokes.push(serde_json::json!({ "points": points }));
    }
    serde_wasm_bindgen::to_value(&strokes).unwrap()
}

#[wasm_bindgen_test]
fn bad_dimensions_return_typed_errors() {
    let r = segment_strokes(two_strokes(), f32::NAN, 400.0);
    assert!(is_err(&r, "non_finite"));
    let r = segment_strokes(two_strokes(), 400.0, 0.0);
    assert!(is_err(&r, "non_positive"));
    let r = segment_strokes(JsValue::from_str("nonsense"), 400.0, 400.0);
    assert!(is_err(&r, "bad_strokes"));
}

#[wasm_bindgen_test]
fn segmentation_round_trips() {
    let r = segment_strokes(two_strokes(), 400.0, 400.0);
    let ok = Reflect::get(&r, &JsValue::from_str("ok")).unwrap();
    assert_eq!(ok.as_bool(), Some(true));
    let value = Reflect::get(&r, &JsValue::from_str("value")).unwrap();
    let mesh = Reflect::get(&value, &JsValue::from_str("mesh")).unwrap();
    let columns = Reflect::get(&mesh, &JsValue::from_str("columns")).unwrap();
    assert_eq!(columns.as_f64(), Some(2.0));
}

#[wasm_bindgen_test]
fn arrays_are_csr_consistent() {
    let r = segment_to_arrays(two_strokes(), 400.0, 400.0);
    let value = Reflect::get(&r, &JsValue::from_str("value")).unwrap();
    let offsets: js_sys::Uint32Array =
        Reflect::get(&value, &JsValue::from_str("strokeOffsets")).unwrap().into();
    let indices: js_sys::Uint32Array =
        Reflect::get(&value, &JsValue::from_str("strokeIndices")).unwrap().into();
    let offsets = offsets.to_vec();
    assert_eq!(*offsets.last().unwrap(), indices.length());
    assert_eq!(indices.length(), 2); // both strokes assigned once
}

#[wasm_bindgen_test]
fn recognition_requests_come_in_reading_order() {
    let r = recognition_requests(two_strokes(), 400.0, 400.0);
    let value = Reflect::get(&r, &JsValue::from_str("value")).unwrap();
    let arr: js_sys::Array = value.into();
    assert_eq!(arr.length(), 2);
    let first = arr.get(0);
    let col = Reflect::get(&first, &JsValue::from_str("column")).unwrap();
    assert_eq!(col.as_f64(), Some(0.0));
}

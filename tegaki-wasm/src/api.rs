use crate::error;
use crate::interop;
use tegaki::model::{CanvasSize, Stroke};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_input(strokes: JsValue, width: f32, height: f32) -> Result<(Vec<Stroke>, CanvasSize), JsValue> {
    if !width.is_finite() {
        return Err(error::non_finite("width"));
    }
    if !height.is_finite() {
        return Err(error::non_finite("height"));
    }
    if width <= 0.0 {
        return Err(error::non_positive("width", width));
    }
    if height <= 0.0 {
        return Err(error::non_positive("height", height));
    }
    let strokes: Vec<Stroke> = match serde_wasm_bindgen::from_value(strokes) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("strokes payload did not parse: {}", e);
            web_sys::console::warn_1(&JsValue::from_str(&msg));
            return Err(error::bad_strokes(msg));
        }
    };
    for stroke in &strokes {
        for p in &stroke.points {
            if !p.x.is_finite() || !p.y.is_finite() || !p.t.is_finite() {
                return Err(error::non_finite("strokes"));
            }
        }
    }
    Ok((strokes, CanvasSize { width, height }))
}

/// Segment a batch of strokes; returns `{ok, value}` with the full
/// `Segmentation`, or `{ok: false, error}` on a malformed payload.
#[wasm_bindgen]
pub fn segment_strokes(strokes: JsValue, width: f32, height: f32) -> JsValue {
    let (strokes, canvas) = match parse_input(strokes, width, height) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let seg = tegaki::segment(&strokes, canvas);
    match serde_wasm_bindgen::to_value(&seg) {
        Ok(v) => error::ok(v),
        Err(e) => error::err("serialize", e.to_string(), None),
    }
}

/// Mesh geometry as flat typed arrays for the overlay renderer:
/// interleaved vertex positions, 4 corner indices per cell, cell
/// column/row pairs, and stroke indices in CSR layout.
#[wasm_bindgen]
pub fn segment_to_arrays(strokes: JsValue, width: f32, height: f32) -> JsValue {
    let (strokes, canvas) = match parse_input(strokes, width, height) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let seg = tegaki::segment(&strokes, canvas);

    let mut positions = Vec::with_capacity(seg.mesh.vertices.len() * 2);
    for v in &seg.mesh.vertices {
        positions.push(v.x);
        positions.push(v.y);
    }
    let mut corners = Vec::with_capacity(seg.mesh.cells.len() * 4);
    let mut cell_pos = Vec::with_capacity(seg.mesh.cells.len() * 2);
    let mut stroke_offsets = Vec::with_capacity(seg.mesh.cells.len() + 1);
    let mut cell_strokes = Vec::new();
    stroke_offsets.push(0u32);
    for cell in &seg.mesh.cells {
        for &vi in &cell.vertex_indices {
            corners.push(vi as u32);
        }
        cell_pos.push(cell.column as u32);
        cell_pos.push(cell.row as u32);
        for &si in &cell.stroke_indices {
            cell_strokes.push(si as u32);
        }
        stroke_offsets.push(cell_strokes.len() as u32);
    }

    let obj = interop::new_obj();
    interop::set_kv(&obj, "positions", &interop::arr_f32(&positions).into());
    interop::set_kv(&obj, "corners", &interop::arr_u32(&corners).into());
    interop::set_kv(&obj, "cells", &interop::arr_u32(&cell_pos).into());
    interop::set_kv(&obj, "strokeOffsets", &interop::arr_u32(&stroke_offsets).into());
    interop::set_kv(&obj, "strokeIndices", &interop::arr_u32(&cell_strokes).into());
    interop::set_kv(&obj, "columns", &JsValue::from_f64(seg.mesh.columns as f64));
    interop::set_kv(&obj, "maxRows", &JsValue::from_f64(seg.mesh.max_rows as f64));
    interop::set_kv(
        &obj,
        "estimatedCharSize",
        &JsValue::from_f64(seg.estimated_char_size as f64),
    );
    error::ok(obj.into())
}

/// The recognition-dispatcher view: non-empty cells in reading order,
/// each with stroke indices and stroke-derived bounds.
#[wasm_bindgen]
pub fn recognition_requests(strokes: JsValue, width: f32, height: f32) -> JsValue {
    let (strokes, canvas) = match parse_input(strokes, width, height) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let seg = tegaki::segment(&strokes, canvas);
    let cells = tegaki::recognition_cells(&seg, &strokes);
    match serde_wasm_bindgen::to_value(&cells) {
        Ok(v) => error::ok(v),
        Err(e) => error::err("serialize", e.to_string(), None),
    }
}

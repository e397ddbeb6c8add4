//! Character segmentation for free-hand vertical-script handwriting.
//!
//! Partitions captured strokes into quadrilateral cells, one candidate
//! character each, in reading order (columns right-to-left, rows
//! top-to-bottom). Pure and deterministic; every input degenerates to
//! a valid result.

pub mod model;
pub mod geometry {
    pub mod bounds;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod assign;
    pub mod char_size;
    pub mod deform;
    pub mod divide;
    pub mod mesh;
    pub mod simplify;
    pub mod valleys;
    pub mod validate;
}
mod json;

pub use json::segmentation_json;

use algorithms::char_size::estimate_char_size;
use algorithms::deform::deform_mesh;
use algorithms::divide::plan_divisions;
use algorithms::simplify::build_valid_mesh;
use geometry::bounds::{content_bounds, stroke_bounds, BoundingBox};
use model::{CanvasSize, MeshGrid, Segmentation, Stroke};
use serde::{Deserialize, Serialize};

/// Segment a batch of completed strokes into per-character cells.
/// Repeated calls on identical input produce bit-identical output.
pub fn segment(strokes: &[Stroke], canvas: CanvasSize) -> Segmentation {
    let bounds = stroke_bounds(strokes);
    let char_size = estimate_char_size(&bounds, canvas.height);

    let Some(content) = content_bounds(&bounds) else {
        return Segmentation {
            mesh: MeshGrid::empty(char_size),
            estimated_char_size: char_size,
            grid_columns: 0,
        };
    };

    let mut plan = plan_divisions(strokes, &bounds, &content, char_size);
    let mut mesh = build_valid_mesh(&mut plan, &bounds, char_size);
    deform_mesh(&mut mesh, strokes);

    let grid_columns = mesh.columns;
    Segmentation {
        mesh,
        estimated_char_size: char_size,
        grid_columns,
    }
}

/// One recognition request: a non-empty cell with its stroke indices
/// and bounds derived from the assigned strokes, not the vertices.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecognitionCell {
    pub column: usize,
    pub row: usize,
    pub stroke_indices: Vec<usize>,
    pub bounds: BoundingBox,
}

/// The recognition-dispatcher view: cells holding at least one stroke,
/// in stored (column, row) order.
pub fn recognition_cells(seg: &Segmentation, strokes: &[Stroke]) -> Vec<RecognitionCell> {
    seg.mesh
        .cells
        .iter()
        .filter(|c| !c.stroke_indices.is_empty())
        .map(|c| {
            let boxes: Vec<BoundingBox> = c
                .stroke_indices
                .iter()
                .filter_map(|&si| strokes.get(si))
                .map(BoundingBox::of_stroke)
                .collect();
            let bounds =
                content_bounds(&boxes).unwrap_or_else(|| BoundingBox::new(0.0, 0.0, 0.0, 0.0));
            RecognitionCell {
                column: c.column,
                row: c.row,
                stroke_indices: c.stroke_indices.clone(),
                bounds,
            }
        })
        .collect()
}

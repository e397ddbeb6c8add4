//! Boundary planning: valley lists → ordered boundary arrays.

use crate::algorithms::valleys::{find_valleys, Axis};
use crate::geometry::bounds::BoundingBox;
use crate::geometry::tolerance::BOUNDARY_PAD;
use crate::model::Stroke;

/// Column boundaries along X and row boundaries along Y, both padded
/// past the content extent. Rows are unified across the whole drawing,
/// not recomputed per column.
#[derive(Clone, Debug)]
pub struct DivisionPlan {
    pub column_boundaries: Vec<f32>,
    pub row_boundaries: Vec<f32>,
}

pub fn plan_divisions(
    strokes: &[Stroke],
    bounds: &[BoundingBox],
    content: &BoundingBox,
    char_size: f32,
) -> DivisionPlan {
    let valleys_x = find_valleys(
        strokes,
        bounds,
        Axis::X,
        content.min_x,
        content.max_x,
        char_size,
    );
    let valleys_y = find_valleys(
        strokes,
        bounds,
        Axis::Y,
        content.min_y,
        content.max_y,
        char_size,
    );
    DivisionPlan {
        column_boundaries: padded(content.min_x, valleys_x, content.max_x),
        row_boundaries: padded(content.min_y, valleys_y, content.max_y),
    }
}

fn padded(min: f32, valleys: Vec<f32>, max: f32) -> Vec<f32> {
    let mut out = Vec::with_capacity(valleys.len() + 2);
    out.push(min - BOUNDARY_PAD);
    out.extend(valleys);
    out.push(max + BOUNDARY_PAD);
    out
}

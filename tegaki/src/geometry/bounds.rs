use crate::model::Stroke;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box with derived extent fields. Recomputed
/// per call, never cached across invocations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
    pub width: f32,
    pub height: f32,
    pub center_x: f32,
    pub center_y: f32,
}

impl BoundingBox {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
            width: max_x - min_x,
            height: max_y - min_y,
            center_x: 0.5 * (min_x + max_x),
            center_y: 0.5 * (min_y + max_y),
        }
    }

    /// Bounds of one stroke. An empty stroke yields the all-zero box.
    pub fn of_stroke(stroke: &Stroke) -> Self {
        if stroke.points.is_empty() {
            return BoundingBox::new(0.0, 0.0, 0.0, 0.0);
        }
        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for p in &stroke.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        BoundingBox::new(min_x, min_y, max_x, max_y)
    }

    /// Larger of width and height.
    pub fn extent(&self) -> f32 {
        self.width.max(self.height)
    }

    /// Euclidean gap between two boxes; 0 along any axis on which they
    /// overlap, so touching or overlapping boxes have gap 0.
    pub fn gap_to(&self, other: &BoundingBox) -> f32 {
        let gx = (self.min_x - other.max_x).max(other.min_x - self.max_x).max(0.0);
        let gy = (self.min_y - other.max_y).max(other.min_y - self.max_y).max(0.0);
        (gx * gx + gy * gy).sqrt()
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }
}

/// Bounds for every stroke, index-aligned with the input.
pub fn stroke_bounds(strokes: &[Stroke]) -> Vec<BoundingBox> {
    strokes.iter().map(BoundingBox::of_stroke).collect()
}

/// Union of all boxes, or None for an empty slice.
pub fn content_bounds(bounds: &[BoundingBox]) -> Option<BoundingBox> {
    let mut it = bounds.iter();
    let first = *it.next()?;
    Some(it.fold(first, |acc, b| acc.union(b)))
}

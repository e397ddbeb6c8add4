//! Character footprint estimation. A character typically spans about
//! twice its largest stroke; large inter-stroke gaps mean separate
//! characters, so the median gap caps the estimate.

use crate::geometry::bounds::BoundingBox;
use crate::geometry::tolerance::{
    clamp, CHAR_SIZE_DEFAULT_FRAC, CHAR_SIZE_MAX_FRAC, CHAR_SIZE_MIN_FRAC, EXTENT_PERCENTILE,
    GAP_CAP_FACTOR, STROKE_SPAN_MULTIPLIER,
};

/// Estimate one character's footprint from the stroke-size
/// distribution. Empty input falls back to a canvas-height fraction.
pub fn estimate_char_size(bounds: &[BoundingBox], canvas_height: f32) -> f32 {
    if bounds.is_empty() {
        return CHAR_SIZE_DEFAULT_FRAC * canvas_height;
    }

    // Slightly above median resists tiny dots and stray long strokes.
    let mut extents: Vec<f32> = bounds.iter().map(|b| b.extent()).collect();
    extents.sort_by(f32::total_cmp);
    let idx = ((extents.len() as f32 * EXTENT_PERCENTILE) as usize).min(extents.len() - 1);
    let mut estimate = extents[idx] * STROKE_SPAN_MULTIPLIER;

    if bounds.len() >= 2 {
        let gap = median_pair_gap(bounds);
        if gap > 0.5 * estimate {
            estimate = estimate.min(gap * GAP_CAP_FACTOR);
        }
    }

    clamp(
        estimate,
        CHAR_SIZE_MIN_FRAC * canvas_height,
        CHAR_SIZE_MAX_FRAC * canvas_height,
    )
}

/// Median Euclidean gap over all stroke-box pairs. Even counts
/// average the middle pair.
fn median_pair_gap(bounds: &[BoundingBox]) -> f32 {
    let mut gaps = Vec::with_capacity(bounds.len() * (bounds.len() - 1) / 2);
    for i in 0..bounds.len() {
        for j in (i + 1)..bounds.len() {
            gaps.push(bounds[i].gap_to(&bounds[j]));
        }
    }
    gaps.sort_by(f32::total_cmp);
    let n = gaps.len();
    if n % 2 == 1 {
        gaps[n / 2]
    } else {
        0.5 * (gaps[n / 2 - 1] + gaps[n / 2])
    }
}

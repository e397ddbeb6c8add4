//! Density-valley detection: a smoothed 1-D point histogram whose low
//! local minima become candidate boundaries between characters.

use crate::geometry::bounds::BoundingBox;
use crate::geometry::tolerance::{
    BIN_DIVISOR, MIN_BIN_COUNT, MIN_BIN_WIDTH, SMOOTHING_RADIUS, VALLEY_MIN_SPAN_FACTOR,
    VALLEY_SPACING_FACTOR, VALLEY_THRESHOLD_FACTOR,
};
use crate::model::Stroke;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    fn of_point(self, x: f32, y: f32) -> f32 {
        match self {
            Axis::X => x,
            Axis::Y => y,
        }
    }

    fn center(self, b: &BoundingBox) -> f32 {
        match self {
            Axis::X => b.center_x,
            Axis::Y => b.center_y,
        }
    }
}

/// Candidate split positions along `axis`, ordered ascending. Empty
/// when the span cannot hold two characters or no minimum survives
/// the spacing and content filters.
pub fn find_valleys(
    strokes: &[Stroke],
    bounds: &[BoundingBox],
    axis: Axis,
    axis_min: f32,
    axis_max: f32,
    char_size: f32,
) -> Vec<f32> {
    let span = axis_max - axis_min;
    if span < VALLEY_MIN_SPAN_FACTOR * char_size {
        return Vec::new();
    }
    let bin_width = (char_size / BIN_DIVISOR).max(MIN_BIN_WIDTH);
    let num_bins = (span / bin_width).ceil() as usize;
    if num_bins < MIN_BIN_COUNT {
        return Vec::new();
    }

    // Raw point density, all strokes pooled.
    let mut histogram = vec![0.0f32; num_bins];
    for stroke in strokes {
        for p in &stroke.points {
            let v = axis.of_point(p.x, p.y);
            let bin = (((v - axis_min) / bin_width) as usize).min(num_bins - 1);
            histogram[bin] += 1.0;
        }
    }
    let smoothed = smooth(&histogram);

    let peak = smoothed.iter().copied().fold(0.0f32, f32::max);
    let threshold = VALLEY_THRESHOLD_FACTOR * peak;

    // Low local minima. A maximal run of equal bins flanked by strictly
    // higher neighbors counts as one minimum at the run's middle bin;
    // a flat zero gap between characters has no strict per-bin minimum.
    let mut candidates = Vec::new();
    let mut i = 0;
    while i < smoothed.len() {
        let v = smoothed[i];
        let mut j = i;
        while j + 1 < smoothed.len() && smoothed[j + 1] == v {
            j += 1;
        }
        let left_higher = i > 0 && smoothed[i - 1] > v;
        let right_higher = j + 1 < smoothed.len() && smoothed[j + 1] > v;
        if left_higher && right_higher && v <= threshold {
            let mid = (i + j) / 2;
            candidates.push(axis_min + (mid as f32 + 0.5) * bin_width);
        }
        i = j + 1;
    }

    // Reject slivers: too close to either end or to the previous
    // accepted candidate.
    let min_spacing = VALLEY_SPACING_FACTOR * char_size;
    let mut spaced: Vec<f32> = Vec::new();
    for pos in candidates {
        if pos - axis_min < min_spacing || axis_max - pos < min_spacing {
            continue;
        }
        if let Some(&last) = spaced.last() {
            if pos - last < min_spacing {
                continue;
            }
        }
        spaced.push(pos);
    }

    // A valley with all content on one side is meaningless.
    spaced
        .into_iter()
        .filter(|&pos| {
            let before = bounds.iter().any(|b| axis.center(b) < pos);
            let after = bounds.iter().any(|b| axis.center(b) > pos);
            before && after
        })
        .collect()
}

/// Symmetric moving average over the histogram.
fn smooth(histogram: &[f32]) -> Vec<f32> {
    let n = histogram.len();
    let mut out = vec![0.0f32; n];
    for i in 0..n {
        let lo = i.saturating_sub(SMOOTHING_RADIUS);
        let hi = (i + SMOOTHING_RADIUS).min(n - 1);
        let mut sum = 0.0;
        for &v in &histogram[lo..=hi] {
            sum += v;
        }
        out[i] = sum / (hi - lo + 1) as f32;
    }
    out
}

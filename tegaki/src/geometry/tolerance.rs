// Centralized constants for the segmentation pipeline

// Boundary arrays are padded past the content extent by this much (px)
pub const BOUNDARY_PAD: f32 = 10.0;

// Char-size estimate, as fractions of canvas height
pub const CHAR_SIZE_MIN_FRAC: f32 = 0.06;
pub const CHAR_SIZE_MAX_FRAC: f32 = 0.30;
pub const CHAR_SIZE_DEFAULT_FRAC: f32 = 0.15; // empty input fallback

// Stroke-extent percentile and the stroke→character span multiplier
pub const EXTENT_PERCENTILE: f32 = 0.6;
pub const STROKE_SPAN_MULTIPLIER: f32 = 2.0;
// Median inter-stroke gap caps the estimate at gap × this factor
pub const GAP_CAP_FACTOR: f32 = 1.5;

// Valley detection
pub const VALLEY_MIN_SPAN_FACTOR: f32 = 0.9; // axis span needed for 2 chars
pub const BIN_DIVISOR: f32 = 10.0;           // bin width = charSize / this
pub const MIN_BIN_WIDTH: f32 = 2.0;          // px floor
pub const MIN_BIN_COUNT: usize = 4;
pub const SMOOTHING_RADIUS: usize = 2;       // symmetric moving average
pub const VALLEY_THRESHOLD_FACTOR: f32 = 0.5; // of the smoothed maximum
pub const VALLEY_SPACING_FACTOR: f32 = 0.25; // of charSize, min separation

// Validation and simplification
pub const UNIFORMITY_RATIO: f32 = 1.75; // max cell size / min cell size
pub const SIMPLIFY_BUDGET: usize = 10;  // simplify→rebuild→validate cycles

// Deformation
pub const DEFORM_ITERATIONS: usize = 5;
pub const DEFORM_STRENGTH: f32 = 0.6;
pub const DEFORM_DECAY: f32 = 0.15;    // per-iteration strength falloff
pub const QUAD_CLAMP_TOL: f32 = 5.0;   // quadrant margin around centroid (px)

#[inline]
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 { x.max(lo).min(hi) }

//! Edge-map generation from grayscale input.
//!
//! Fixed, non-reorderable pipeline: single-channel intensity conversion, one
//! 5×5 Gaussian smoothing pass to suppress scan noise, then a two-threshold
//! hysteresis edge operator. The output [`EdgeMap`] has the input's spatial
//! dimensions and feeds both the shape and line detectors.

mod canny;
mod gaussian;

use crate::image::{EdgeMap, GrayView, ImageF32};
use serde::Deserialize;

/// Thresholds for the hysteresis edge operator, in gradient-magnitude units
/// of the 0–255 intensity scale.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    /// Weak-edge threshold: pixels below it never become edges.
    pub low_threshold: f32,
    /// Strong-edge threshold: pixels at or above it seed edge chains.
    pub high_threshold: f32,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            low_threshold: 50.0,
            high_threshold: 150.0,
        }
    }
}

/// Run the full preprocessing pass over a decoded grayscale view.
pub fn extract_edges(gray: GrayView<'_>, params: &EdgeParams) -> EdgeMap {
    let intensity = to_intensity(gray);
    let smoothed = gaussian::smooth_5x5(&intensity);
    canny::detect(&smoothed, params)
}

fn to_intensity(gray: GrayView<'_>) -> ImageF32 {
    let mut out = ImageF32::new(gray.w, gray.h);
    for y in 0..gray.h {
        let src = gray.row(y);
        let dst = out.row_mut(y);
        for x in 0..gray.w {
            dst[x] = src[x] as f32;
        }
    }
    out
}

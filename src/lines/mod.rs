//! Candidate axis-line detection.
//!
//! Long straight segments found in the edge map are classified by
//! orientation: near-horizontal segments record their row, near-vertical
//! ones their column. Segments at other angles belong to neither axis
//! orientation and are discarded. No detections is a valid outcome, not an
//! error.

mod hough;

pub use hough::{extract_segments, LineSegment};

use crate::image::EdgeMap;
use crate::types::{CandidateLine, Orientation};
use serde::Deserialize;

/// Straight-line detector knobs.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct LineParams {
    /// Hough angular resolution, degrees per accumulator bin.
    pub angular_resolution_deg: f32,
    /// Minimum accumulator votes for a line hypothesis.
    pub vote_threshold: u32,
    /// Minimum accepted segment length, pixels.
    pub min_length: f32,
    /// Maximum gap bridged between collinear pieces, pixels.
    pub max_gap: f32,
    /// Half-width of the horizontal classification window around 0°.
    pub horizontal_window_deg: f32,
    /// Half-width of the vertical classification window around ±90°.
    pub vertical_window_deg: f32,
}

impl Default for LineParams {
    fn default() -> Self {
        Self {
            angular_resolution_deg: 1.0,
            vote_threshold: 100,
            min_length: 100.0,
            max_gap: 10.0,
            horizontal_window_deg: 10.0,
            vertical_window_deg: 10.0,
        }
    }
}

/// Detect candidate axis-lines in the edge map.
pub fn detect_lines(edges: &EdgeMap, params: &LineParams) -> Vec<CandidateLine> {
    let mut out = Vec::new();
    for segment in hough::extract_segments(edges, params) {
        let angle = segment.angle_deg();
        if angle.abs() < params.horizontal_window_deg {
            out.push(CandidateLine {
                orientation: Orientation::Horizontal,
                coordinate: segment.p0[1],
            });
        } else if (angle.abs() - 90.0).abs() < params.vertical_window_deg {
            out.push(CandidateLine {
                orientation: Orientation::Vertical,
                coordinate: segment.p0[0],
            });
        }
        // other angles: neither orientation
    }
    out
}

/// Split detections into per-orientation coordinate collections
/// (vertical columns, horizontal rows).
pub fn split_by_orientation(lines: &[CandidateLine]) -> (Vec<f32>, Vec<f32>) {
    let mut vertical = Vec::new();
    let mut horizontal = Vec::new();
    for line in lines {
        match line.orientation {
            Orientation::Vertical => vertical.push(line.coordinate),
            Orientation::Horizontal => horizontal.push(line.coordinate),
        }
    }
    (vertical, horizontal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_and_horizontal_lines_classify_by_coordinate() {
        let mut map = EdgeMap::new(240, 240);
        for y in 0..240 {
            map.set_edge(60, y);
        }
        for x in 0..240 {
            map.set_edge(x, 120);
        }
        let lines = detect_lines(&map, &LineParams::default());
        let (vertical, horizontal) = split_by_orientation(&lines);
        assert!(
            vertical.iter().any(|&x| (x - 60.0).abs() < 1.5),
            "vertical coordinate missing: {vertical:?}"
        );
        assert!(
            horizontal.iter().any(|&y| (y - 120.0).abs() < 1.5),
            "horizontal coordinate missing: {horizontal:?}"
        );
    }

    #[test]
    fn diagonal_lines_are_discarded() {
        let mut map = EdgeMap::new(200, 200);
        for d in 0..200 {
            map.set_edge(d, d);
        }
        let lines = detect_lines(&map, &LineParams::default());
        assert!(lines.is_empty(), "45° segment leaked: {lines:?}");
    }

    #[test]
    fn featureless_map_yields_no_lines() {
        let map = EdgeMap::new(128, 128);
        assert!(detect_lines(&map, &LineParams::default()).is_empty());
    }
}

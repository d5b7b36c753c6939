//! Parameter types configuring the pipeline stages.
//!
//! This module aggregates the knobs for edge extraction, shape filtering,
//! line detection and axis clustering. Defaults match conventional values
//! for scanned floor plans at common resolutions; for tuning, start with
//! the edge thresholds and the shape filter bounds.

use crate::lines::LineParams;
use crate::preprocess::EdgeParams;
use crate::shapes::ShapeParams;
use serde::Deserialize;

/// Pipeline-wide parameters controlling every detection stage.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct PlanParams {
    /// Hysteresis thresholds for the edge operator.
    pub edge: EdgeParams,
    /// Contour filter bounds for candidate columns.
    pub shape: ShapeParams,
    /// Hough detector and orientation classification knobs.
    pub line: LineParams,
    /// Minimum coordinate separation (pixels) between two distinct axes of
    /// one orientation.
    pub axis_tolerance: f32,
}

impl Default for PlanParams {
    fn default() -> Self {
        Self {
            edge: EdgeParams::default(),
            shape: ShapeParams::default(),
            line: LineParams::default(),
            axis_tolerance: 10.0,
        }
    }
}

impl PlanParams {
    /// Defaults with a different clustering tolerance.
    pub fn with_axis_tolerance(axis_tolerance: f32) -> Self {
        Self {
            axis_tolerance,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let params = PlanParams::default();
        assert_eq!(params.edge.low_threshold, 50.0);
        assert_eq!(params.edge.high_threshold, 150.0);
        assert_eq!(params.shape.min_area, 500);
        assert_eq!(params.line.vote_threshold, 100);
        assert_eq!(params.line.min_length, 100.0);
        assert_eq!(params.line.max_gap, 10.0);
        assert_eq!(params.axis_tolerance, 10.0);
    }

    #[test]
    fn partial_json_config_falls_back_to_defaults() {
        let params: PlanParams =
            serde_json::from_str(r#"{ "axis_tolerance": 16.0, "edge": { "low_threshold": 30.0 } }"#)
                .unwrap();
        assert_eq!(params.axis_tolerance, 16.0);
        assert_eq!(params.edge.low_threshold, 30.0);
        assert_eq!(params.edge.high_threshold, 150.0);
        assert_eq!(params.shape.min_area, 500);
    }
}

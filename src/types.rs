//! Core data model shared across the pipeline stages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Orientation of a detected line or reconstructed axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// Axis-aligned bounding box of a detected quadrilateral contour,
/// hypothesized to be a structural column. Geometry is preserved unchanged
/// from detection through the final plan record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CandidateElement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CandidateElement {
    /// Center point of the bounding box.
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Width over height. The shape detector never emits zero-height boxes.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// A raw straight-line detection: its orientation class plus the single
/// representative coordinate (the row for horizontal lines, the column for
/// vertical ones). Consumed by axis reconstruction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandidateLine {
    pub orientation: Orientation,
    pub coordinate: f32,
}

/// One labeled reference line of the reconstructed structural grid.
///
/// Within one orientation, coordinates are strictly increasing and labels
/// follow that order. The set of axes is created once per run and never
/// updated incrementally.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    pub coordinate: f32,
    pub label: String,
}

/// Lifecycle state of an element record. Freshly built records are always
/// `Pending`; downstream consumers own any further transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementStatus {
    #[default]
    Pending,
}

/// A candidate element bound to exactly one vertical and one horizontal
/// axis. `axis1` is the vertical label, `axis2` the horizontal one; together
/// they form the composite identifier `"{axis1}-{axis2}"`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    pub axis1: String,
    pub axis2: String,
    pub status: ElementStatus,
    pub coordinates: CandidateElement,
}

impl ElementRecord {
    /// Composite identifier naming the element's grid position.
    pub fn id(&self) -> String {
        format!("{}-{}", self.axis1, self.axis2)
    }
}

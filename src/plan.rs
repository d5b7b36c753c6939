//! Plan aggregate and its builder.
//!
//! Pure assembly: the builder performs no detection or filtering, it only
//! combines the outputs of the earlier stages into the record handed to the
//! result sink. Serialization of that record is the sink's concern; this
//! crate guarantees the in-process shape and a deterministic field order.

use crate::types::{Axis, ElementRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate result of one pipeline invocation: the source reference, the
/// reconstructed grid in both orientations and the labeled elements keyed by
/// composite identifier.
///
/// Keys are not guaranteed unique across detections: two elements resolving
/// to the same axis pair collapse to one entry, last write wins. The ordered
/// map keeps repeated serializations byte-identical.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub image_reference: String,
    pub created_at: DateTime<Utc>,
    pub vertical_axes: Vec<Axis>,
    pub horizontal_axes: Vec<Axis>,
    pub elements: BTreeMap<String, ElementRecord>,
}

impl Plan {
    /// Assemble a plan from stage outputs.
    pub fn assemble(
        image_reference: impl Into<String>,
        created_at: DateTime<Utc>,
        vertical_axes: Vec<Axis>,
        horizontal_axes: Vec<Axis>,
        elements: BTreeMap<String, ElementRecord>,
    ) -> Self {
        Self {
            image_reference: image_reference.into(),
            created_at,
            vertical_axes,
            horizontal_axes,
            elements,
        }
    }

    /// True when nothing was detected in either orientation.
    pub fn is_empty(&self) -> bool {
        self.vertical_axes.is_empty() && self.horizontal_axes.is_empty() && self.elements.is_empty()
    }
}

//! Fatal pipeline failures.
//!
//! Empty detections (no candidate elements, no candidate lines) are valid
//! outcomes and flow through the pipeline as empty collections; only the
//! conditions below abort an invocation. No partial plan is ever produced
//! on error.

use crate::types::Orientation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    /// The input buffer could not be decoded or has zero area. Raised at the
    /// image boundary, before any detection stage runs.
    #[error("decode: {reason}")]
    Decode { reason: String },

    /// Candidate elements exist but one orientation produced no axes, so the
    /// elements cannot be bound to a reference grid.
    #[error("assignment: no {orientation} axes available for {elements} detected element(s)")]
    Assignment {
        orientation: Orientation,
        elements: usize,
    },
}

//! Plan detector orchestrating the vision-to-structure pipeline.
//!
//! Overview
//! - Converts the decoded grayscale input to an edge map (Gaussian smoothing
//!   followed by a two-threshold hysteresis operator).
//! - Runs the shape detector over the edge map and keeps roughly-square
//!   quadrilateral contours as candidate columns.
//! - Runs the Hough line detector over the same edge map and classifies long
//!   segments into horizontal/vertical axis candidates.
//! - Deduplicates and orders each orientation into a labeled axis grid, then
//!   binds every candidate column to its nearest axis pair.
//! - Assembles the final plan record for the result sink.
//!
//! Data flows strictly forward; no stage mutates another's output. The
//! pipeline holds no shared mutable state across invocations, so plans can
//! be processed concurrently as fully independent runs (see
//! [`PlanDetector::process_batch`]).
//!
//! Modules
//! - [`params`] – configuration types used by the detector and CLI.
//! - `pipeline` – the main [`PlanDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::PlanParams;
pub use pipeline::{PlanDetector, PlanRequest};

#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod error;
pub mod image;
pub mod plan;
pub mod types;

// Stage modules – public for tools and advanced callers, but the detector
// façade is the supported entry point.
pub mod assign;
pub mod axes;
pub mod config;
pub mod lines;
pub mod preprocess;
pub mod shapes;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{PlanDetector, PlanParams, PlanRequest};
pub use crate::error::PlanError;
pub use crate::plan::Plan;
pub use crate::types::{Axis, CandidateElement, CandidateLine, ElementRecord, Orientation};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use blueprint_detector::prelude::*;
/// use chrono::Utc;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
/// let img = GrayView { w, h, data: &gray };
///
/// let detector = PlanDetector::new(PlanParams::default());
/// match detector.process(img, "plans/demo.png", Utc::now()) {
///     Ok(plan) => println!("elements={}", plan.elements.len()),
///     Err(err) => eprintln!("{err}"),
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayBuffer, GrayView};
    pub use crate::{Plan, PlanDetector, PlanError, PlanParams};
}

//! Plan pipeline orchestrating detection end-to-end.
//!
//! The [`PlanDetector`] exposes a simple API: feed a decoded grayscale view
//! plus a source reference and creation time, and get the assembled
//! [`Plan`]. Internally it coordinates edge extraction, shape and line
//! detection, per-orientation axis reconstruction and element assignment,
//! strictly in that order and without retries — a fatal condition at any
//! stage aborts the invocation.
//!
//! Typical usage:
//! ```no_run
//! use blueprint_detector::{PlanDetector, PlanParams};
//! use blueprint_detector::image::GrayView;
//! use chrono::Utc;
//!
//! # fn example(gray: GrayView<'_>) {
//! let detector = PlanDetector::new(PlanParams::default());
//! match detector.process(gray, "plans/site-a.png", Utc::now()) {
//!     Ok(plan) => println!("{} elements", plan.elements.len()),
//!     Err(err) => eprintln!("{err}"),
//! }
//! # }
//! ```

use super::PlanParams;
use crate::error::PlanError;
use crate::image::{GrayBuffer, GrayView};
use crate::plan::Plan;
use crate::types::Orientation;
use crate::{assign, axes, lines, preprocess, shapes};
use chrono::{DateTime, Utc};
use log::debug;
use rayon::prelude::*;

/// One unit of batch work: an owned image plus its plan identity.
pub struct PlanRequest {
    pub image: GrayBuffer,
    pub reference: String,
    pub created_at: DateTime<Utc>,
}

/// Detector running the full vision-to-structure pipeline.
///
/// Holds only configuration — no caches, no connections, no state shared
/// across invocations — so one detector may serve concurrent callers.
pub struct PlanDetector {
    params: PlanParams,
}

impl PlanDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: PlanParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PlanParams {
        &self.params
    }

    /// Run the pipeline over one decoded image.
    pub fn process(
        &self,
        gray: GrayView<'_>,
        image_reference: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Plan, PlanError> {
        if gray.w == 0 || gray.h == 0 {
            return Err(PlanError::Decode {
                reason: format!("zero-area image ({}x{})", gray.w, gray.h),
            });
        }

        let edges = preprocess::extract_edges(gray, &self.params.edge);
        debug!(
            "preprocess: {} edge pixels in {}x{}",
            edges.edge_count(),
            edges.width(),
            edges.height()
        );

        let elements = shapes::detect_elements(&edges, &self.params.shape);
        debug!("shapes: {} candidate elements", elements.len());

        let detected = lines::detect_lines(&edges, &self.params.line);
        let (vertical_raw, horizontal_raw) = lines::split_by_orientation(&detected);
        debug!(
            "lines: {} vertical / {} horizontal candidates",
            vertical_raw.len(),
            horizontal_raw.len()
        );

        let vertical_axes = axes::reconstruct(
            &vertical_raw,
            self.params.axis_tolerance,
            Orientation::Vertical,
        );
        let horizontal_axes = axes::reconstruct(
            &horizontal_raw,
            self.params.axis_tolerance,
            Orientation::Horizontal,
        );
        debug!(
            "axes: {} vertical / {} horizontal",
            vertical_axes.len(),
            horizontal_axes.len()
        );

        let records = assign::assign_elements(&elements, &vertical_axes, &horizontal_axes)?;
        debug!("assign: {} element records", records.len());

        Ok(Plan::assemble(
            image_reference,
            created_at,
            vertical_axes,
            horizontal_axes,
            records,
        ))
    }

    /// Process independent plans in parallel. Invocations share nothing but
    /// the (read-only) parameters, so no locking is involved; result order
    /// matches input order.
    pub fn process_batch(&self, requests: &[PlanRequest]) -> Vec<Result<Plan, PlanError>> {
        requests
            .par_iter()
            .map(|request| {
                self.process(
                    request.image.as_view(),
                    &request.reference,
                    request.created_at,
                )
            })
            .collect()
    }
}

//! Binding of candidate elements to their nearest grid axes.
//!
//! Nearest-axis selection is an explicit linear scan keeping the first
//! strictly-smaller distance, so an element equidistant from two axes always
//! binds to the earlier (lower-coordinate, earlier-labeled) one. Records are
//! keyed by composite identifier; two elements resolving to the same axis
//! pair collapse to one record, last write wins.

use crate::error::PlanError;
use crate::types::{Axis, CandidateElement, ElementRecord, ElementStatus, Orientation};
use std::collections::BTreeMap;

/// Assign every candidate element to its nearest vertical and horizontal
/// axis.
///
/// With no elements the result is empty regardless of the grid. With
/// elements present, both axis sequences must be non-empty — elements cannot
/// be labeled without a reference grid in each orientation.
pub fn assign_elements(
    elements: &[CandidateElement],
    vertical: &[Axis],
    horizontal: &[Axis],
) -> Result<BTreeMap<String, ElementRecord>, PlanError> {
    if elements.is_empty() {
        return Ok(BTreeMap::new());
    }
    if vertical.is_empty() {
        return Err(PlanError::Assignment {
            orientation: Orientation::Vertical,
            elements: elements.len(),
        });
    }
    if horizontal.is_empty() {
        return Err(PlanError::Assignment {
            orientation: Orientation::Horizontal,
            elements: elements.len(),
        });
    }

    let mut records = BTreeMap::new();
    for element in elements {
        let (cx, cy) = element.center();
        let record = ElementRecord {
            axis1: nearest_axis(vertical, cx).label.clone(),
            axis2: nearest_axis(horizontal, cy).label.clone(),
            status: ElementStatus::default(),
            coordinates: *element,
        };
        records.insert(record.id(), record);
    }
    Ok(records)
}

/// First axis of minimum absolute distance to `coordinate`.
fn nearest_axis(axes: &[Axis], coordinate: f32) -> &Axis {
    let mut best = &axes[0];
    let mut best_dist = (best.coordinate - coordinate).abs();
    for axis in &axes[1..] {
        let dist = (axis.coordinate - coordinate).abs();
        if dist < best_dist {
            best = axis;
            best_dist = dist;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axes(coordinates: &[f32], orientation: Orientation) -> Vec<Axis> {
        crate::axes::reconstruct(coordinates, 0.0, orientation)
    }

    fn element(x: u32, y: u32, side: u32) -> CandidateElement {
        CandidateElement {
            x,
            y,
            width: side,
            height: side,
        }
    }

    #[test]
    fn element_binds_to_nearest_axes() {
        // Center (105, 52): vertical B at 100, horizontal 1 at 50.
        let vertical = axes(&[10.0, 100.0, 200.0], Orientation::Vertical);
        let horizontal = axes(&[50.0, 60.0], Orientation::Horizontal);
        let elements = [element(90, 37, 30)];
        let records = assign_elements(&elements, &vertical, &horizontal).unwrap();
        assert_eq!(records.len(), 1);
        let record = &records["B-1"];
        assert_eq!(record.axis1, "B");
        assert_eq!(record.axis2, "1");
        assert_eq!(record.status, ElementStatus::Pending);
        assert_eq!(record.coordinates, elements[0]);
    }

    #[test]
    fn equidistant_center_picks_the_earlier_axis() {
        // Center x = 150, exactly between 100 and 200.
        let vertical = axes(&[100.0, 200.0], Orientation::Vertical);
        let horizontal = axes(&[50.0], Orientation::Horizontal);
        let elements = [element(135, 35, 30)];
        let records = assign_elements(&elements, &vertical, &horizontal).unwrap();
        assert!(records.contains_key("A-1"), "keys: {:?}", records.keys());
    }

    #[test]
    fn missing_vertical_axes_is_an_assignment_error() {
        let horizontal = axes(&[50.0, 60.0], Orientation::Horizontal);
        let elements = [element(0, 0, 30)];
        let err = assign_elements(&elements, &[], &horizontal).unwrap_err();
        match err {
            PlanError::Assignment {
                orientation,
                elements,
            } => {
                assert_eq!(orientation, Orientation::Vertical);
                assert_eq!(elements, 1);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn missing_horizontal_axes_is_an_assignment_error() {
        let vertical = axes(&[50.0], Orientation::Vertical);
        let elements = [element(0, 0, 30)];
        let err = assign_elements(&elements, &vertical, &[]).unwrap_err();
        assert!(matches!(
            err,
            PlanError::Assignment {
                orientation: Orientation::Horizontal,
                ..
            }
        ));
    }

    #[test]
    fn no_elements_short_circuits_even_without_axes() {
        let records = assign_elements(&[], &[], &[]).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn duplicate_grid_position_keeps_the_last_element() {
        let vertical = axes(&[100.0], Orientation::Vertical);
        let horizontal = axes(&[100.0], Orientation::Horizontal);
        let first = element(80, 80, 20);
        let second = element(95, 95, 20);
        let records = assign_elements(&[first, second], &vertical, &horizontal).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records["A-1"].coordinates, second);
    }

    #[test]
    fn geometry_is_preserved_verbatim() {
        let vertical = axes(&[10.0], Orientation::Vertical);
        let horizontal = axes(&[10.0], Orientation::Horizontal);
        let source = CandidateElement {
            x: 3,
            y: 7,
            width: 31,
            height: 29,
        };
        let records = assign_elements(&[source], &vertical, &horizontal).unwrap();
        assert_eq!(records["A-1"].coordinates, source);
    }
}

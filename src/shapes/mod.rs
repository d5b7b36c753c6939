//! Candidate element (column) detection from closed contours.
//!
//! External contours of the edge map are simplified with a
//! perimeter-proportional tolerance; a contour survives only when its
//! simplified polygon is a quadrilateral whose axis-aligned bounding box
//! passes the area and aspect-ratio filters. Rejection is silent — this is a
//! filter, not a failure path. Output order follows contour scan order and
//! carries no meaning.

mod approx;
mod contour;

pub use contour::{trace_external, Contour};

use crate::image::EdgeMap;
use crate::types::CandidateElement;
use serde::Deserialize;

/// Filter bounds for accepting a contour as a structural column candidate.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct ShapeParams {
    /// Bounding-box area (pixels²) a candidate must strictly exceed.
    pub min_area: u64,
    /// Exclusive lower bound on width/height.
    pub min_aspect: f32,
    /// Exclusive upper bound on width/height.
    pub max_aspect: f32,
    /// Polygon simplification tolerance as a fraction of contour perimeter.
    pub epsilon_frac: f32,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            min_area: 500,
            min_aspect: 0.5,
            max_aspect: 1.5,
            epsilon_frac: 0.04,
        }
    }
}

/// Detect candidate elements in the edge map.
pub fn detect_elements(edges: &EdgeMap, params: &ShapeParams) -> Vec<CandidateElement> {
    let mut out = Vec::new();
    for contour in contour::trace_external(edges) {
        let epsilon = params.epsilon_frac * contour.perimeter();
        let poly = approx::simplify_closed(&contour.points, epsilon);
        if poly.len() != 4 {
            continue;
        }
        let element = bounding_box(&poly);
        if element.area() <= params.min_area {
            continue;
        }
        let aspect = element.aspect_ratio();
        if aspect <= params.min_aspect || aspect >= params.max_aspect {
            continue;
        }
        out.push(element);
    }
    out
}

/// Axis-aligned bounding box over the polygon vertices, inclusive-pixel
/// convention (a single pixel has width 1).
fn bounding_box(points: &[(u32, u32)]) -> CandidateElement {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    for &(x, y) in points {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    CandidateElement {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(x0: usize, y0: usize, w: usize, h: usize, map: &mut EdgeMap) {
        for dx in 0..w {
            map.set_edge(x0 + dx, y0);
            map.set_edge(x0 + dx, y0 + h - 1);
        }
        for dy in 0..h {
            map.set_edge(x0, y0 + dy);
            map.set_edge(x0 + w - 1, y0 + dy);
        }
    }

    #[test]
    fn square_of_side_30_passes_the_filter() {
        let mut map = EdgeMap::new(64, 64);
        ring(10, 10, 30, 30, &mut map);
        let elements = detect_elements(&map, &ShapeParams::default());
        assert_eq!(elements.len(), 1);
        let element = elements[0];
        assert_eq!(
            (element.x, element.y, element.width, element.height),
            (10, 10, 30, 30)
        );
        assert_eq!(element.area(), 900);
        assert!((element.aspect_ratio() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn tiny_square_is_rejected_by_area() {
        let mut map = EdgeMap::new(32, 32);
        ring(4, 4, 5, 5, &mut map); // area 25 ≤ 500
        let elements = detect_elements(&map, &ShapeParams::default());
        assert!(elements.is_empty());
    }

    #[test]
    fn elongated_rectangle_is_rejected_by_aspect() {
        let mut map = EdgeMap::new(120, 60);
        ring(5, 5, 90, 30, &mut map); // aspect 3.0
        let elements = detect_elements(&map, &ShapeParams::default());
        assert!(elements.is_empty());
    }

    #[test]
    fn aspect_bounds_are_exclusive() {
        let mut map = EdgeMap::new(120, 120);
        ring(5, 5, 45, 30, &mut map); // aspect exactly 1.5
        assert!(detect_elements(&map, &ShapeParams::default()).is_empty());

        let mut map = EdgeMap::new(120, 120);
        ring(5, 5, 30, 60, &mut map); // aspect exactly 0.5
        assert!(detect_elements(&map, &ShapeParams::default()).is_empty());
    }

    #[test]
    fn non_quadrilateral_contour_is_rejected() {
        let mut map = EdgeMap::new(80, 80);
        // Right triangle outline, large enough to pass the box filters.
        for d in 0..40usize {
            map.set_edge(10 + d, 10);
            map.set_edge(10 + 39, 10 + d);
            map.set_edge(10 + d, 10 + d);
        }
        let elements = detect_elements(&map, &ShapeParams::default());
        assert!(elements.is_empty(), "triangle must not become an element");
    }

    #[test]
    fn thresholds_are_tunable() {
        let mut map = EdgeMap::new(32, 32);
        ring(4, 4, 10, 10, &mut map); // area 100
        let relaxed = ShapeParams {
            min_area: 50,
            ..ShapeParams::default()
        };
        assert_eq!(detect_elements(&map, &relaxed).len(), 1);
    }
}

//! Closed-polygon simplification via Douglas–Peucker.

use nalgebra::Vector2;
use std::cmp::Ordering;

/// Simplify a closed boundary chain. The chain is anchored at its first
/// point and the point farthest from it, and each half is reduced
/// independently; vertices farther than `epsilon` from the chord survive.
pub fn simplify_closed(points: &[(u32, u32)], epsilon: f32) -> Vec<(u32, u32)> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let anchor = to_vec(points[0]);
    let (split, dist_sq) = points
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, &p)| (i, (to_vec(p) - anchor).norm_squared()))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
        .unwrap_or((0, 0.0));
    if split == 0 || dist_sq == 0.0 {
        return vec![points[0]]; // degenerate: every point coincides
    }

    let mut first_half = Vec::new();
    douglas_peucker(&points[..=split], epsilon, &mut first_half);

    let mut wrapped: Vec<(u32, u32)> = points[split..].to_vec();
    wrapped.push(points[0]);
    let mut second_half = Vec::new();
    douglas_peucker(&wrapped, epsilon, &mut second_half);

    // Drop the duplicated anchors at both junctions.
    let mut out = first_half;
    if second_half.len() > 2 {
        out.extend_from_slice(&second_half[1..second_half.len() - 1]);
    }
    out
}

fn douglas_peucker(points: &[(u32, u32)], epsilon: f32, out: &mut Vec<(u32, u32)>) {
    if points.len() < 3 {
        out.extend_from_slice(points);
        return;
    }
    let first = to_vec(points[0]);
    let last = to_vec(points[points.len() - 1]);

    let mut max_dist = 0.0f32;
    let mut index = 0usize;
    for (i, &p) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        let dist = point_line_distance(to_vec(p), first, last);
        if dist > max_dist {
            max_dist = dist;
            index = i;
        }
    }

    if max_dist > epsilon {
        douglas_peucker(&points[..=index], epsilon, out);
        out.pop(); // junction point is re-added by the right half
        douglas_peucker(&points[index..], epsilon, out);
    } else {
        out.push(points[0]);
        out.push(points[points.len() - 1]);
    }
}

fn point_line_distance(p: Vector2<f32>, a: Vector2<f32>, b: Vector2<f32>) -> f32 {
    let chord = b - a;
    let len = chord.norm();
    if len < 1e-6 {
        return (p - a).norm();
    }
    (chord.x * (a.y - p.y) - chord.y * (a.x - p.x)).abs() / len
}

fn to_vec((x, y): (u32, u32)) -> Vector2<f32> {
    Vector2::new(x as f32, y as f32)
}

//! Axis-grid reconstruction: deduplication, ordering and labeling of raw
//! line coordinates for one orientation.
//!
//! Clustering is greedy left-to-right: after an ascending sort, a
//! coordinate is kept only when it exceeds the last *kept* one by more than
//! the tolerance. This is not symmetric nearest-neighbor clustering — a
//! tight cluster spanning more than the tolerance in total splits into
//! multiple axes at tolerance-width intervals, and that behavior is load
//! bearing for compatibility.

use crate::types::{Axis, Orientation};

/// Reconstruct the ordered, labeled axis sequence for one orientation.
///
/// Vertical axes are lettered `A`, `B`, `C`, …; horizontal axes are numbered
/// `"1"`, `"2"`, `"3"`, …. Labels follow ascending coordinate order
/// regardless of detection order. Empty input yields an empty sequence.
pub fn reconstruct(coordinates: &[f32], tolerance: f32, orientation: Orientation) -> Vec<Axis> {
    let mut sorted: Vec<f32> = coordinates.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut kept: Vec<f32> = Vec::new();
    for &coordinate in &sorted {
        match kept.last() {
            None => kept.push(coordinate),
            Some(&last) if coordinate - last > tolerance => kept.push(coordinate),
            Some(_) => {}
        }
    }

    kept.into_iter()
        .enumerate()
        .map(|(index, coordinate)| Axis {
            coordinate,
            label: match orientation {
                Orientation::Vertical => letter_label(index),
                Orientation::Horizontal => (index + 1).to_string(),
            },
        })
        .collect()
}

/// Spreadsheet-style letter sequence: A…Z, AA, AB, … — extends past 26
/// without wrapping.
fn letter_label(index: usize) -> String {
    let mut n = index + 1;
    let mut reversed = String::new();
    while n > 0 {
        n -= 1;
        reversed.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    reversed.chars().rev().collect()
}

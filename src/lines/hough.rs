//! Deterministic Hough-transform segment extraction.
//!
//! Full-vote rho–theta accumulation (no random sampling, so repeated runs
//! over one edge map are identical), local-maximum peak picking, then a
//! measurement pass that walks each peak line across the image, bridges
//! collinear gaps up to `max_gap` pixels and keeps runs of at least
//! `min_length` pixels — the gap/length semantics of a probabilistic
//! segment detector, without its nondeterminism.

use super::LineParams;
use crate::image::EdgeMap;

/// Measured line segment, endpoints in pixel coordinates.
#[derive(Clone, Copy, Debug)]
pub struct LineSegment {
    pub p0: [f32; 2],
    pub p1: [f32; 2],
}

impl LineSegment {
    pub fn length(&self) -> f32 {
        let dx = self.p1[0] - self.p0[0];
        let dy = self.p1[1] - self.p0[1];
        (dx * dx + dy * dy).sqrt()
    }

    /// Segment angle via `atan2(dy, dx)`, degrees in (-180, 180].
    pub fn angle_deg(&self) -> f32 {
        let dy = self.p1[1] - self.p0[1];
        let dx = self.p1[0] - self.p0[0];
        dy.atan2(dx).to_degrees()
    }
}

struct Accumulator {
    data: Vec<u32>,
    rho_bins: usize,
    theta_bins: usize,
    max_rho: f32,
    sin_table: Vec<f32>,
    cos_table: Vec<f32>,
}

impl Accumulator {
    fn new(width: usize, height: usize, angular_resolution_deg: f32) -> Self {
        let theta_bins = (180.0 / angular_resolution_deg.max(0.1)).round().max(1.0) as usize;
        let max_rho = ((width * width + height * height) as f64).sqrt() as f32;
        let rho_bins = (2.0 * max_rho).ceil() as usize + 1;

        let mut sin_table = vec![0.0f32; theta_bins];
        let mut cos_table = vec![0.0f32; theta_bins];
        for (bin, (sin, cos)) in sin_table.iter_mut().zip(cos_table.iter_mut()).enumerate() {
            let theta = (bin as f64) * (angular_resolution_deg as f64).to_radians();
            *sin = theta.sin() as f32;
            *cos = theta.cos() as f32;
        }

        Self {
            data: vec![0u32; rho_bins * theta_bins],
            rho_bins,
            theta_bins,
            max_rho,
            sin_table,
            cos_table,
        }
    }

    #[inline]
    fn rho_to_index(&self, rho: f32) -> usize {
        let idx = (rho + self.max_rho).round() as isize;
        idx.clamp(0, self.rho_bins as isize - 1) as usize
    }

    #[inline]
    fn votes(&self, rho_idx: usize, theta_bin: usize) -> u32 {
        self.data[theta_bin * self.rho_bins + rho_idx]
    }

    fn accumulate(&mut self, edges: &EdgeMap) {
        for y in 0..edges.height() {
            for x in 0..edges.width() {
                if !edges.is_edge(x, y) {
                    continue;
                }
                for theta_bin in 0..self.theta_bins {
                    let rho =
                        x as f32 * self.cos_table[theta_bin] + y as f32 * self.sin_table[theta_bin];
                    let idx = theta_bin * self.rho_bins + self.rho_to_index(rho);
                    self.data[idx] = self.data[idx].saturating_add(1);
                }
            }
        }
    }

    /// Cells above the vote threshold that are local maxima in a ±2 rho,
    /// ±1 theta window. A strictly stronger neighbor suppresses a cell;
    /// equal-vote plateaus survive and collapse later in axis clustering.
    fn peaks(&self, vote_threshold: u32) -> Vec<(f32, usize)> {
        const WINDOW_RHO: isize = 2;
        const WINDOW_THETA: isize = 1;

        let mut out = Vec::new();
        for theta_bin in 0..self.theta_bins {
            for rho_idx in 0..self.rho_bins {
                let votes = self.votes(rho_idx, theta_bin);
                if votes < vote_threshold {
                    continue;
                }
                let mut is_max = true;
                'nms: for dt in -WINDOW_THETA..=WINDOW_THETA {
                    for dr in -WINDOW_RHO..=WINDOW_RHO {
                        if dt == 0 && dr == 0 {
                            continue;
                        }
                        let t = theta_bin as isize + dt;
                        let r = rho_idx as isize + dr;
                        if t < 0 || t >= self.theta_bins as isize || r < 0 {
                            continue;
                        }
                        let r = r as usize;
                        if r >= self.rho_bins {
                            continue;
                        }
                        if self.votes(r, t as usize) > votes {
                            is_max = false;
                            break 'nms;
                        }
                    }
                }
                if is_max {
                    let rho = rho_idx as f32 - self.max_rho;
                    out.push((rho, theta_bin));
                }
            }
        }
        out
    }
}

/// Extract measured segments for every accepted line hypothesis.
pub fn extract_segments(edges: &EdgeMap, params: &LineParams) -> Vec<LineSegment> {
    let width = edges.width();
    let height = edges.height();
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut acc = Accumulator::new(width, height, params.angular_resolution_deg);
    acc.accumulate(edges);

    let mut segments = Vec::new();
    for (rho, theta_bin) in acc.peaks(params.vote_threshold) {
        let cos_t = acc.cos_table[theta_bin];
        let sin_t = acc.sin_table[theta_bin];
        measure_segments(edges, rho, cos_t, sin_t, params, &mut segments);
    }
    segments
}

/// Walk the line `x·cosθ + y·sinθ = rho` across the image, collecting edge
/// hits and merging runs separated by at most `max_gap` pixels.
fn measure_segments(
    edges: &EdgeMap,
    rho: f32,
    cos_t: f32,
    sin_t: f32,
    params: &LineParams,
    out: &mut Vec<LineSegment>,
) {
    let width = edges.width();
    let height = edges.height();
    let Some((p0, p1)) = border_span(rho, cos_t, sin_t, width, height) else {
        return;
    };

    let dx = p1[0] - p0[0];
    let dy = p1[1] - p0[1];
    let steps = (dx.abs().max(dy.abs()).ceil() as usize).max(1);
    let step_len = (dx * dx + dy * dy).sqrt() / steps as f32;

    let pos_at = |i: usize| {
        let t = i as f32 / steps as f32;
        [p0[0] + dx * t, p0[1] + dy * t]
    };

    let mut run_start: Option<usize> = None;
    let mut last_hit = 0usize;
    for i in 0..=steps {
        let pos = pos_at(i);
        let xi = pos[0].round();
        let yi = pos[1].round();
        let hit = xi >= 0.0
            && yi >= 0.0
            && edges.is_edge(xi as usize, yi as usize);

        if hit {
            match run_start {
                None => run_start = Some(i),
                Some(start) => {
                    let gap_px = (i - last_hit) as f32 * step_len;
                    if gap_px > params.max_gap {
                        flush_run(start, last_hit, step_len, &pos_at, params, out);
                        run_start = Some(i);
                    }
                }
            }
            last_hit = i;
        }
    }
    if let Some(start) = run_start {
        flush_run(start, last_hit, step_len, &pos_at, params, out);
    }
}

fn flush_run(
    start: usize,
    end: usize,
    step_len: f32,
    pos_at: &impl Fn(usize) -> [f32; 2],
    params: &LineParams,
    out: &mut Vec<LineSegment>,
) {
    let length = (end - start) as f32 * step_len;
    if length < params.min_length {
        return;
    }
    out.push(LineSegment {
        p0: pos_at(start),
        p1: pos_at(end),
    });
}

/// The two most distant intersections of the line with the image rectangle.
fn border_span(
    rho: f32,
    cos_t: f32,
    sin_t: f32,
    width: usize,
    height: usize,
) -> Option<([f32; 2], [f32; 2])> {
    const EPS: f32 = 1e-6;
    let w = (width - 1) as f32;
    let h = (height - 1) as f32;
    let mut candidates: Vec<[f32; 2]> = Vec::with_capacity(4);

    if sin_t.abs() > EPS {
        let y = rho / sin_t;
        if (0.0..=h).contains(&y) {
            candidates.push([0.0, y]);
        }
        let y = (rho - w * cos_t) / sin_t;
        if (0.0..=h).contains(&y) {
            candidates.push([w, y]);
        }
    }
    if cos_t.abs() > EPS {
        let x = rho / cos_t;
        if (0.0..=w).contains(&x) {
            candidates.push([x, 0.0]);
        }
        let x = (rho - h * sin_t) / cos_t;
        if (0.0..=w).contains(&x) {
            candidates.push([x, h]);
        }
    }

    let mut best: Option<([f32; 2], [f32; 2], f32)> = None;
    for i in 0..candidates.len() {
        for j in i + 1..candidates.len() {
            let dx = candidates[j][0] - candidates[i][0];
            let dy = candidates[j][1] - candidates[i][1];
            let dist = dx * dx + dy * dy;
            if best.map_or(true, |(_, _, d)| dist > d) {
                best = Some((candidates[i], candidates[j], dist));
            }
        }
    }
    best.and_then(|(a, b, d)| (d > EPS).then_some((a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> LineParams {
        LineParams::default()
    }

    #[test]
    fn full_height_vertical_line_is_measured() {
        let mut map = EdgeMap::new(200, 200);
        for y in 0..200 {
            map.set_edge(50, y);
        }
        let segments = extract_segments(&map, &params());
        assert!(!segments.is_empty(), "expected at least one segment");
        let longest = segments
            .iter()
            .max_by(|a, b| a.length().partial_cmp(&b.length()).unwrap())
            .unwrap();
        assert!(longest.length() > 150.0);
        assert!((longest.p0[0] - 50.0).abs() < 1.5);
        assert!((longest.angle_deg().abs() - 90.0).abs() < 1.5);
    }

    #[test]
    fn small_gaps_merge_into_one_segment() {
        let mut map = EdgeMap::new(200, 200);
        for y in 0..200 {
            if !(90..95).contains(&y) {
                map.set_edge(80, y);
            }
        }
        let segments = extract_segments(&map, &params());
        let longest = segments
            .iter()
            .max_by(|a, b| a.length().partial_cmp(&b.length()).unwrap())
            .unwrap();
        assert!(
            longest.length() > 190.0,
            "5px gap should be bridged, got {}",
            longest.length()
        );
    }

    #[test]
    fn large_gaps_split_the_line() {
        let mut map = EdgeMap::new(100, 300);
        for y in 0..300 {
            if !(140..170).contains(&y) {
                map.set_edge(40, y);
            }
        }
        let segments = extract_segments(&map, &params());
        let long: Vec<_> = segments
            .iter()
            .filter(|s| (s.p0[0] - 40.0).abs() < 1.5 && s.length() >= 100.0)
            .collect();
        assert_eq!(
            long.len(),
            2,
            "30px gap must split into two runs: {segments:?}"
        );
    }

    #[test]
    fn short_runs_are_dropped() {
        let mut map = EdgeMap::new(200, 200);
        for y in 0..60 {
            map.set_edge(20, y); // 60px < min_length 100
        }
        let segments = extract_segments(&map, &params());
        assert!(
            segments.iter().all(|s| s.length() >= 100.0),
            "short run leaked: {segments:?}"
        );
    }

    #[test]
    fn empty_map_yields_no_segments() {
        let map = EdgeMap::new(64, 64);
        assert!(extract_segments(&map, &params()).is_empty());
    }
}

//! Two-threshold hysteresis edge operator.
//!
//! Sobel gradients, 4-direction non-maximum suppression and weak-edge
//! promotion through 8-connectivity. Ties in the suppression comparison keep
//! the pixel, so plateaus yield slightly thicker chains instead of broken
//! ones.

use super::EdgeParams;
use crate::image::{EdgeMap, ImageF32};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

struct Grad {
    gx: ImageF32,
    gy: ImageF32,
    mag: ImageF32,
}

fn sobel_gradients(l: &ImageF32) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return Grad { gx, gy, mag };
    }

    // Border pixels keep zero gradient; suppression skips them anyway.
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for ky in 0..3 {
                for kx in 0..3 {
                    let sample = l.get(x + kx - 1, y + ky - 1);
                    sum_x += sample * SOBEL_KERNEL_X[ky][kx];
                    sum_y += sample * SOBEL_KERNEL_Y[ky][kx];
                }
            }
            gx.set(x, y, sum_x);
            gy.set(x, y, sum_y);
            mag.set(x, y, (sum_x * sum_x + sum_y * sum_y).sqrt());
        }
    }

    Grad { gx, gy, mag }
}

/// Magnitudes surviving non-maximum suppression; suppressed pixels are zero.
/// A two-pixel margin stays clear of the smoothing kernel's zero-padded
/// boundary response.
fn suppress_non_maxima(grad: &Grad) -> ImageF32 {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut out = ImageF32::new(w, h);
    if w < 5 || h < 5 {
        return out;
    }

    for y in 2..h - 2 {
        for x in 2..w - 2 {
            let mag = grad.mag.get(x, y);
            if mag <= 0.0 {
                continue;
            }

            let mut angle_deg = grad.gy.get(x, y).atan2(grad.gx.get(x, y)).to_degrees();
            if angle_deg < 0.0 {
                angle_deg += 180.0;
            }

            let (n1x, n1y, n2x, n2y) = if angle_deg < 22.5 || angle_deg >= 157.5 {
                (x - 1, y, x + 1, y)
            } else if angle_deg < 67.5 {
                (x + 1, y - 1, x - 1, y + 1)
            } else if angle_deg < 112.5 {
                (x, y - 1, x, y + 1)
            } else {
                (x - 1, y - 1, x + 1, y + 1)
            };

            if mag < grad.mag.get(n1x, n1y) || mag < grad.mag.get(n2x, n2y) {
                continue;
            }
            out.set(x, y, mag);
        }
    }
    out
}

/// Run the operator over a smoothed intensity image.
pub fn detect(smoothed: &ImageF32, params: &EdgeParams) -> EdgeMap {
    let w = smoothed.w;
    let h = smoothed.h;
    let grad = sobel_gradients(smoothed);
    let thin = suppress_non_maxima(&grad);

    let mut map = EdgeMap::new(w, h);
    let mut stack: Vec<usize> = Vec::new();
    let mut visited = vec![0u8; w * h];

    // Seed from strong pixels, then grow through weak neighbors.
    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            if visited[idx] != 0 || thin.get(x, y) < params.high_threshold {
                continue;
            }
            visited[idx] = 1;
            stack.push(idx);
            while let Some(cur) = stack.pop() {
                let cx = cur % w;
                let cy = cur / w;
                map.set_edge(cx, cy);
                for (dx, dy) in NEIGH_OFFSETS {
                    let nx = cx as isize + dx;
                    let ny = cy as isize + dy;
                    if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                        continue;
                    }
                    let nidx = ny as usize * w + nx as usize;
                    if visited[nidx] != 0 {
                        continue;
                    }
                    if thin.get(nx as usize, ny as usize) >= params.low_threshold {
                        visited[nidx] = 1;
                        stack.push(nidx);
                    }
                }
            }
        }
    }

    map
}

//! Separable 5×5 Gaussian smoothing with a zero-padded boundary.

use crate::image::ImageF32;

/// Normalised 5-tap binomial kernel `[1, 4, 6, 4, 1] / 16`.
const GAUSSIAN_5TAP: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];
const RADIUS: isize = 2;

/// Smooth with the fixed 5×5 kernel. Taps falling outside the image read
/// zero, so intensities attenuate within two pixels of the border.
pub fn smooth_5x5(src: &ImageF32) -> ImageF32 {
    let mut horiz = ImageF32::new(src.w, src.h);
    for y in 0..src.h {
        let src_row = src.row(y);
        let dst_row = horiz.row_mut(y);
        filter_row(src_row, dst_row);
    }

    let mut out = ImageF32::new(src.w, src.h);
    for y in 0..src.h {
        for (k, &tap) in GAUSSIAN_5TAP.iter().enumerate() {
            let sy = y as isize + k as isize - RADIUS;
            if sy < 0 || sy >= src.h as isize {
                continue;
            }
            let src_row = horiz.row(sy as usize);
            let dst_row = out.row_mut(y);
            for x in 0..src.w {
                dst_row[x] += tap * src_row[x];
            }
        }
    }
    out
}

fn filter_row(row: &[f32], out: &mut [f32]) {
    let len = row.len() as isize;
    for (x, dst) in out.iter_mut().enumerate() {
        let mut acc = 0.0f32;
        for (k, &tap) in GAUSSIAN_5TAP.iter().enumerate() {
            let sx = x as isize + k as isize - RADIUS;
            if sx >= 0 && sx < len {
                acc += tap * row[sx as usize];
            }
        }
        *dst = acc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_interior_is_preserved() {
        let mut img = ImageF32::new(16, 16);
        for y in 0..16 {
            for x in 0..16 {
                img.set(x, y, 100.0);
            }
        }
        let smoothed = smooth_5x5(&img);
        assert!((smoothed.get(8, 8) - 100.0).abs() < 1e-3);
        // Zero padding attenuates the corner.
        assert!(smoothed.get(0, 0) < 100.0);
    }

    #[test]
    fn dimensions_are_preserved() {
        let img = ImageF32::new(7, 3);
        let smoothed = smooth_5x5(&img);
        assert_eq!((smoothed.w, smoothed.h), (7, 3));
    }
}

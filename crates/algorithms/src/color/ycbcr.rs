//! RGB ↔ YCbCr conversion
//!
//! Uses the studio-swing BT.601 matrix (Y in [16, 235], chroma centred on
//! 128). The inverse truncates to bytes without clamping, so out-of-range
//! values wrap and a round trip is lossy.

use dipkit_core::raster::{truncate_to_byte, Image, Plane};
use dipkit_core::Result;

use super::channels::{merge, split};

/// Convert one RGB triple to `(y, cr, cb)`.
#[inline]
pub fn rgb_to_ycrcb(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let y = 0.256789 * r + 0.504129 * g + 0.097906 * b + 16.0;
    let cb = -0.148223 * r - 0.290992 * g + 0.439215 * b + 128.0;
    let cr = 0.439215 * r - 0.367789 * g - 0.071426 * b + 128.0;
    (y, cr, cb)
}

/// Convert one `(y, cr, cb)` triple back to RGB floats (unclamped).
#[inline]
pub fn ycrcb_to_rgb(y: f32, cr: f32, cb: f32) -> (f32, f32, f32) {
    let luma = 1.164383 * (y - 16.0);
    let r = luma + 1.596027 * (cr - 128.0);
    let g = luma - 0.391762 * (cb - 128.0) - 0.812969 * (cr - 128.0);
    let b = luma + 2.017230 * (cb - 128.0);
    (r, g, b)
}

/// Planar YCbCr buffers for a whole image
#[derive(Debug, Clone, PartialEq)]
pub struct YCrCbPlanes {
    pub y: Plane<f32>,
    pub cr: Plane<f32>,
    pub cb: Plane<f32>,
}

/// Convert an RGB byte image to planar YCbCr floats
pub fn image_to_ycrcb(image: &Image<u8>) -> Result<YCrCbPlanes> {
    let (r, g, b) = split(image)?;
    let (rows, cols) = r.shape();

    let mut y = Plane::new(rows, cols)?;
    let mut cr = Plane::new(rows, cols)?;
    let mut cb = Plane::new(rows, cols)?;

    ndarray::Zip::from(y.data_mut())
        .and(cr.data_mut())
        .and(cb.data_mut())
        .and(r.data())
        .and(g.data())
        .and(b.data())
        .for_each(|y, cr, cb, &r, &g, &b| {
            (*y, *cr, *cb) = rgb_to_ycrcb(r as f32, g as f32, b as f32);
        });

    Ok(YCrCbPlanes { y, cr, cb })
}

/// Convert planar YCbCr floats back to an RGB byte image.
///
/// Each channel is truncated with [`truncate_to_byte`]; nothing is clamped.
pub fn ycrcb_to_image(planes: &YCrCbPlanes) -> Result<Image<u8>> {
    planes.y.ensure_not_empty()?;
    planes.y.ensure_same_shape(&planes.cr)?;
    planes.y.ensure_same_shape(&planes.cb)?;
    let (rows, cols) = planes.y.shape();

    let mut r = Plane::new(rows, cols)?;
    let mut g = Plane::new(rows, cols)?;
    let mut b = Plane::new(rows, cols)?;

    ndarray::Zip::from(r.data_mut())
        .and(g.data_mut())
        .and(b.data_mut())
        .and(planes.y.data())
        .and(planes.cr.data())
        .and(planes.cb.data())
        .for_each(|r, g, b, &y, &cr, &cb| {
            let (fr, fg, fb) = ycrcb_to_rgb(y, cr, cb);
            *r = truncate_to_byte(fr);
            *g = truncate_to_byte(fg);
            *b = truncate_to_byte(fb);
        });

    merge(&r, &g, &b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_black_and_white() {
        let (y, cr, cb) = rgb_to_ycrcb(0.0, 0.0, 0.0);
        assert_abs_diff_eq!(y, 16.0, epsilon = 1e-4);
        assert_abs_diff_eq!(cr, 128.0, epsilon = 1e-4);
        assert_abs_diff_eq!(cb, 128.0, epsilon = 1e-4);

        let (y, cr, cb) = rgb_to_ycrcb(255.0, 255.0, 255.0);
        assert_abs_diff_eq!(y, 235.0, epsilon = 0.01);
        assert_abs_diff_eq!(cr, 128.0, epsilon = 0.01);
        assert_abs_diff_eq!(cb, 128.0, epsilon = 0.01);
    }

    #[test]
    fn test_inverse_is_close() {
        let (y, cr, cb) = rgb_to_ycrcb(200.0, 100.0, 50.0);
        let (r, g, b) = ycrcb_to_rgb(y, cr, cb);
        assert_abs_diff_eq!(r, 200.0, epsilon = 0.05);
        assert_abs_diff_eq!(g, 100.0, epsilon = 0.05);
        assert_abs_diff_eq!(b, 50.0, epsilon = 0.05);
    }

    #[test]
    fn test_roundtrip_is_lossy_not_clamped() {
        // A Y that lands above 235 pushes red past 255; it must wrap, not clamp.
        let planes = YCrCbPlanes {
            y: Plane::filled(1, 1, 240.0).unwrap(),
            cr: Plane::filled(1, 1, 128.0).unwrap(),
            cb: Plane::filled(1, 1, 128.0).unwrap(),
        };
        let image = ycrcb_to_image(&planes).unwrap();
        // 1.164383 * 224 = 260.8 → 260 → wraps to 4
        assert_eq!(image.get(0, 0, 0).unwrap(), 4);
    }

    #[test]
    fn test_image_roundtrip_within_one_level() {
        let data: Vec<u8> = vec![10, 20, 30, 128, 64, 200, 250, 5, 90, 33, 66, 99];
        let image = Image::from_vec(data, 2, 2, 3).unwrap();
        let back = ycrcb_to_image(&image_to_ycrcb(&image).unwrap()).unwrap();
        for (a, b) in back.data().iter().zip(image.data().iter()) {
            assert!((*a as i32 - *b as i32).abs() <= 1, "{} vs {}", a, b);
        }
    }
}

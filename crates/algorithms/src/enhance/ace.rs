//! Adaptive contrast enhancement (ACE)
//!
//! Each pixel is pushed away from its local mean by a gain that grows as the
//! local standard deviation shrinks:
//!
//! ```text
//! out = mean + CG · (x − mean),   CG = min(alpha · σ_global / σ_local, max_cg)
//! ```
//!
//! Local statistics come from sum and sum-of-squares integral images over a
//! zero-padded copy of each channel, so every window query is O(1).

use dipkit_core::raster::{Image, Plane};
use dipkit_core::{Algorithm, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{merge_planes, split_planes};
use crate::integral::{BoxMoments, BoxStats};
use crate::maybe_rayon::*;

/// Parameters for adaptive contrast enhancement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AceParams {
    /// Padding width on every side; bounds `half_window_size`
    pub max_window_size: usize,
    /// Local window half-extent `h`; the window is `(2h+1)²`
    pub half_window_size: usize,
    /// Gain multiplier applied to `σ_global / σ_local`
    pub alpha: f64,
    /// Upper bound on the contrast gain
    pub max_cg: f64,
}

impl Default for AceParams {
    fn default() -> Self {
        Self {
            max_window_size: 15,
            half_window_size: 7,
            alpha: 1.0,
            max_cg: 3.0,
        }
    }
}

impl AceParams {
    /// Check that the parameters describe a usable window and gain
    pub fn validate(&self) -> Result<()> {
        if self.half_window_size > self.max_window_size {
            return Err(Error::InvalidParameter {
                name: "half_window_size",
                value: self.half_window_size.to_string(),
                reason: format!("must not exceed max_window_size ({})", self.max_window_size),
            });
        }
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(Error::InvalidParameter {
                name: "alpha",
                value: self.alpha.to_string(),
                reason: "must be a positive finite number".into(),
            });
        }
        if !(self.max_cg.is_finite() && self.max_cg >= 0.0) {
            return Err(Error::InvalidParameter {
                name: "max_cg",
                value: self.max_cg.to_string(),
                reason: "must be a non-negative finite number".into(),
            });
        }
        Ok(())
    }
}

/// Adaptive contrast enhancement algorithm
#[derive(Debug, Clone, Default)]
pub struct AdaptiveContrast;

impl Algorithm for AdaptiveContrast {
    type Input = Image<u8>;
    type Output = Image<u8>;
    type Params = AceParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "AdaptiveContrast"
    }

    fn description(&self) -> &'static str {
        "Local contrast gain from integral-image window statistics"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        adaptive_contrast(&input, &params)
    }
}

/// Enhance every channel of an image independently.
///
/// The output has the same shape as the input. A channel with no variation
/// anywhere comes back unchanged.
pub fn adaptive_contrast(image: &Image<u8>, params: &AceParams) -> Result<Image<u8>> {
    params.validate()?;
    image.ensure_not_empty()?;

    let enhanced = split_planes(image)?
        .iter()
        .enumerate()
        .map(|(channel, plane)| {
            let out = enhance_plane(plane, params)?;
            debug!(channel, "ace channel done");
            Ok(out)
        })
        .collect::<Result<Vec<_>>>()?;

    merge_planes(&enhanced)
}

/// Enhance a single gray plane.
///
/// Windows are clipped to the image: local mean and std are taken over the
/// in-image samples only, so the zero padding never drags them down.
pub fn enhance_plane(plane: &Plane<u8>, params: &AceParams) -> Result<Plane<u8>> {
    params.validate()?;
    plane.ensure_not_empty()?;

    let (rows, cols) = plane.shape();
    let m = params.max_window_size;
    let h = params.half_window_size;

    let padded = plane.padded(m, m);
    let moments = BoxMoments::build(&padded)?;

    let global = moments.stats(m, m + cols - 1, m, m + rows - 1, (rows * cols) as f64);
    debug!(
        global_mean = global.mean,
        global_std = global.std,
        "ace global statistics"
    );

    let gain_numerator = params.alpha * global.std;
    let samples = padded.data();

    let output: Vec<u8> = (m..m + rows)
        .into_par_iter()
        .flat_map(|j| {
            let r1 = j - h;
            let r2 = j + h;
            let window_rows = clipped_extent(r1, r2, m, m + rows - 1);

            let mut row_data = vec![0u8; cols];
            for i in m..m + cols {
                let c1 = i - h;
                let c2 = i + h;
                let window_cols = clipped_extent(c1, c2, m, m + cols - 1);
                let count = (window_rows * window_cols) as f64;

                let BoxStats { mean, std } = moments.stats(c1, c2, r1, r2, count);
                let gain = if std == 0.0 {
                    params.max_cg
                } else {
                    (gain_numerator / std).min(params.max_cg)
                };

                let x = samples[(j, i)] as f64;
                let value = (mean + gain * (x - mean)).clamp(0.0, 255.0);
                row_data[c1 - (m - h)] = value as u8;
            }
            row_data
        })
        .collect();

    Plane::from_vec(output, rows, cols)
}

/// Number of indices in `lo..=hi` that fall inside `first..=last`
#[inline]
fn clipped_extent(lo: usize, hi: usize, first: usize, last: usize) -> usize {
    hi.min(last) + 1 - lo.max(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_plane(rows: usize, cols: usize) -> Plane<u8> {
        let data = (0..rows * cols)
            .map(|k| ((k % cols) * 200 / cols.max(1) + 20) as u8)
            .collect();
        Plane::from_vec(data, rows, cols).unwrap()
    }

    #[test]
    fn test_constant_image_unchanged() {
        let image = Image::filled(9, 11, 3, 120u8).unwrap();
        let out = adaptive_contrast(&image, &AceParams::default()).unwrap();
        assert_eq!(out, image);
    }

    #[test]
    fn test_shape_preserved() {
        let image = Image::filled(5, 7, 1, 60u8).unwrap();
        let params = AceParams {
            max_window_size: 3,
            half_window_size: 2,
            ..Default::default()
        };
        let out = adaptive_contrast(&image, &params).unwrap();
        assert_eq!(out.shape(), (5, 7, 1));
    }

    #[test]
    fn test_contrast_is_amplified() {
        // Faint texture inside a strongly varying image gets a large gain
        let mut plane = gradient_plane(21, 21);
        for r in 8..13 {
            for c in 8..13 {
                plane.set(r, c, if (r + c) % 2 == 0 { 100 } else { 104 }).unwrap();
            }
        }
        let params = AceParams {
            max_window_size: 3,
            half_window_size: 1,
            alpha: 1.0,
            max_cg: 3.0,
        };
        let out = enhance_plane(&plane, &params).unwrap();

        let before = plane.get(10, 10).unwrap() as i32 - plane.get(10, 11).unwrap() as i32;
        let after = out.get(10, 10).unwrap() as i32 - out.get(10, 11).unwrap() as i32;
        assert!(after.abs() > before.abs());
    }

    #[test]
    fn test_gain_is_capped() {
        let mut plane = Plane::filled(7, 7, 100u8).unwrap();
        plane.set(3, 3, 110).unwrap();
        let params = AceParams {
            max_window_size: 1,
            half_window_size: 1,
            alpha: 1000.0,
            max_cg: 2.0,
        };
        let out = enhance_plane(&plane, &params).unwrap();
        // mean over the 3×3 window is 100 + 10/9, gain clipped to 2
        let mean = 100.0 + 10.0 / 9.0;
        let expected = (mean + 2.0 * (110.0 - mean)) as u8;
        assert_eq!(out.get(3, 3).unwrap(), expected);
    }

    /// Direct evaluation of the clipped-window gain rule, one pixel at a time
    fn reference_plane(plane: &Plane<u8>, params: &AceParams) -> Vec<u8> {
        let (rows, cols) = plane.shape();
        let stats = |r1: usize, r2: usize, c1: usize, c2: usize| {
            let (mut sum, mut sum_sq, mut n) = (0.0f64, 0.0f64, 0.0f64);
            for r in r1..=r2 {
                for c in c1..=c2 {
                    let x = plane.get(r, c).unwrap() as f64;
                    sum += x;
                    sum_sq += x * x;
                    n += 1.0;
                }
            }
            let mean = sum / n;
            (mean, (sum_sq / n - mean * mean).max(0.0).sqrt())
        };

        let (_, global_std) = stats(0, rows - 1, 0, cols - 1);
        let h = params.half_window_size;
        let mut out = Vec::with_capacity(rows * cols);
        for j in 0..rows {
            for i in 0..cols {
                let (mean, std) = stats(
                    j.saturating_sub(h),
                    (j + h).min(rows - 1),
                    i.saturating_sub(h),
                    (i + h).min(cols - 1),
                );
                let gain = if std == 0.0 {
                    params.max_cg
                } else {
                    (params.alpha * global_std / std).min(params.max_cg)
                };
                let x = plane.get(j, i).unwrap() as f64;
                out.push((mean + gain * (x - mean)).clamp(0.0, 255.0) as u8);
            }
        }
        out
    }

    #[test]
    fn test_matches_direct_window_evaluation() {
        let (rows, cols) = (13, 17);
        let data = (0..rows * cols)
            .map(|k| ((k * 37 + (k / cols) * 11 + (k * k) % 23) % 256) as u8)
            .collect();
        let plane = Plane::from_vec(data, rows, cols).unwrap();

        for (m, h) in [(5, 2), (4, 4), (7, 1), (3, 0)] {
            let params = AceParams {
                max_window_size: m,
                half_window_size: h,
                alpha: 0.8,
                max_cg: 2.5,
            };
            let out = enhance_plane(&plane, &params).unwrap();
            let expected = reference_plane(&plane, &params);

            for (k, (&got, &want)) in out.data().iter().zip(&expected).enumerate() {
                // float rounding in the integral sums may flip a truncation
                assert!(
                    (got as i32 - want as i32).abs() <= 1,
                    "m={m} h={h} pixel ({}, {}): got {got}, want {want}",
                    k / cols,
                    k % cols
                );
            }
        }
    }

    #[test]
    fn test_window_equal_to_padding() {
        let plane = gradient_plane(6, 6);
        let params = AceParams {
            max_window_size: 2,
            half_window_size: 2,
            ..Default::default()
        };
        assert!(enhance_plane(&plane, &params).is_ok());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let image = Image::filled(4, 4, 1, 0u8).unwrap();
        let too_wide = AceParams {
            max_window_size: 3,
            half_window_size: 4,
            ..Default::default()
        };
        assert!(adaptive_contrast(&image, &too_wide).is_err());

        let bad_alpha = AceParams {
            alpha: 0.0,
            ..Default::default()
        };
        assert!(bad_alpha.validate().is_err());

        let nan_gain = AceParams {
            max_cg: f64::NAN,
            ..Default::default()
        };
        assert!(nan_gain.validate().is_err());
    }

    #[test]
    fn test_params_from_json() {
        let params: AceParams = serde_json::from_str(r#"{"half_window_size": 3}"#).unwrap();
        assert_eq!(params.half_window_size, 3);
        assert_eq!(params.max_window_size, 15);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_algorithm_trait() {
        let image = Image::filled(3, 3, 3, 7u8).unwrap();
        let out = AdaptiveContrast.execute_default(image.clone()).unwrap();
        assert_eq!(out, image);
    }
}

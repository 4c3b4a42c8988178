//! Otsu threshold segmentation
//!
//! Picks the gray level that maximizes the between-class variance of the
//! normalized histogram, then binarizes the image against it.

use dipkit_core::raster::{GrayMethod, Image, Plane};
use dipkit_core::{Algorithm, Error, Result};
use tracing::debug;

use super::engine::{normalized_histogram, GRAY_LEVELS};

/// Smallest class proportion a candidate split may leave on either side
const MIN_CLASS_PROPORTION: f64 = 0.001;

/// Result of Otsu segmentation
#[derive(Debug, Clone)]
pub struct OtsuResult {
    /// Selected threshold; pixels strictly above it become white
    pub threshold: u8,
    /// Between-class variance at the threshold (0 if no candidate qualified)
    pub variance: f64,
    /// Binarized image, gray replicated into three channels
    pub image: Image<u8>,
}

/// Otsu thresholding algorithm
#[derive(Debug, Clone, Default)]
pub struct Otsu;

impl Algorithm for Otsu {
    type Input = Image<u8>;
    type Output = OtsuResult;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "Otsu"
    }

    fn description(&self) -> &'static str {
        "Binary threshold by between-class variance maximization"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        otsu(&input)
    }
}

/// Find the Otsu threshold of a normalized histogram.
///
/// Returns `(threshold, variance)`. Candidates `k` in `1..=254` whose class
/// proportion `omega[k]` or `1 - omega[k]` is below 0.001 are skipped. Ties
/// keep the lowest `k`. When no candidate qualifies the threshold is 0.
pub fn otsu_threshold(pdf: &[f64; GRAY_LEVELS]) -> (u8, f64) {
    let mut omega = [0.0; GRAY_LEVELS];
    let mut mu = [0.0; GRAY_LEVELS];
    omega[0] = pdf[0];
    for i in 1..GRAY_LEVELS {
        omega[i] = omega[i - 1] + pdf[i];
        mu[i] = mu[i - 1] + i as f64 * pdf[i];
    }
    let mean = mu[GRAY_LEVELS - 1];

    let mut best = 0.0;
    let mut k_best = 0usize;
    for k in 1..GRAY_LEVELS - 1 {
        let pa = omega[k];
        let pb = 1.0 - pa;
        if pa < MIN_CLASS_PROPORTION || pb < MIN_CLASS_PROPORTION {
            continue;
        }
        let ma = mu[k] / pa;
        let mb = (mean - mu[k]) / pb;
        let variance = pa * (ma - mean) * (ma - mean) + pb * (mb - mean) * (mb - mean);
        if variance > best {
            best = variance;
            k_best = k;
        }
    }

    (k_best as u8, best)
}

/// Binarize a gray plane: `v > threshold` → 255, otherwise 0
pub fn binarize(gray: &Plane<u8>, threshold: u8) -> Plane<u8> {
    gray.map(|v| if v > threshold { 255 } else { 0 })
}

/// Segment an image with Otsu's method.
///
/// The image is reduced with [`GrayMethod::Weighted`]
/// (`round(0.3R + 0.59G + 0.11B)`); the binary result is written to all
/// three output channels.
pub fn otsu(image: &Image<u8>) -> Result<OtsuResult> {
    let gray = image.to_gray(GrayMethod::Weighted)?;
    let pdf = normalized_histogram(&gray)?;
    let (threshold, variance) = otsu_threshold(&pdf);
    debug!(threshold, variance, "otsu threshold selected");

    let binary = binarize(&gray, threshold);
    let planes = [binary.clone(), binary.clone(), binary];
    let image = crate::color::merge_planes(&planes)?;

    Ok(OtsuResult {
        threshold,
        variance,
        image,
    })
}

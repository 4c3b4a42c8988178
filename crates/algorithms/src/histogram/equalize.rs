//! Histogram equalization
//!
//! Remaps gray levels through the cumulative distribution so the output
//! levels spread over the full 0..=255 range. Two modes:
//! - **Luma**: convert to YCbCr, equalize Y only, convert back. Hue is kept.
//! - **PerChannel**: equalize R, G and B independently against their own
//!   histograms. Shifts tones.

use dipkit_core::raster::{truncate_to_byte, Image, Plane};
use dipkit_core::{Algorithm, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::engine::{raw_histogram, Histogram, GRAY_LEVELS};
use crate::color::{image_to_ycrcb, merge_planes, split_planes, ycrcb_to_image};

/// Equalization strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EqualizeMode {
    /// Equalize the luma channel of YCbCr only
    #[default]
    Luma,
    /// Equalize every color channel independently
    PerChannel,
}

/// Parameters for histogram equalization
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EqualizeParams {
    pub mode: EqualizeMode,
}

/// Histogram equalization algorithm
#[derive(Debug, Clone, Default)]
pub struct Equalize;

impl Algorithm for Equalize {
    type Input = Image<u8>;
    type Output = Image<u8>;
    type Params = EqualizeParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Equalize"
    }

    fn description(&self) -> &'static str {
        "CDF-based histogram equalization (luma-only or per channel)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        equalize(&input, params.mode)
    }
}

/// Gray-level remap table `round(255 · cdf[i])`.
///
/// Non-decreasing whenever `cdf` is.
pub fn equalization_table(cdf: &[f64; GRAY_LEVELS]) -> [u8; GRAY_LEVELS] {
    let mut table = [0u8; GRAY_LEVELS];
    for (t, &c) in table.iter_mut().zip(cdf.iter()) {
        *t = (255.0 * c + 0.5) as u8;
    }
    table
}

/// Build the remap table for a histogram
pub fn histogram_table(hist: &Histogram) -> Result<[u8; GRAY_LEVELS]> {
    Ok(equalization_table(&hist.cdf()?))
}

/// Equalize one byte plane against its own histogram
pub fn equalize_plane(plane: &Plane<u8>) -> Result<Plane<u8>> {
    let table = histogram_table(&raw_histogram(plane)?)?;
    Ok(plane.map(|v| table[v as usize]))
}

/// Equalize an image.
///
/// One-channel images are equalized directly under either mode.
pub fn equalize(image: &Image<u8>, mode: EqualizeMode) -> Result<Image<u8>> {
    image.ensure_not_empty()?;
    debug!(?mode, rows = image.rows(), cols = image.cols(), "equalizing histogram");

    if image.channels() == 1 {
        let gray = image.channel_plane(0)?;
        return Ok(Image::from_plane(equalize_plane(&gray)?));
    }

    match mode {
        EqualizeMode::Luma => equalize_luma(image),
        EqualizeMode::PerChannel => {
            let planes = split_planes(image)?
                .iter()
                .map(equalize_plane)
                .collect::<Result<Vec<_>>>()?;
            merge_planes(&planes)
        }
    }
}

fn equalize_luma(image: &Image<u8>) -> Result<Image<u8>> {
    let mut ycrcb = image_to_ycrcb(image)?;

    let levels = ycrcb.y.map(truncate_to_byte);
    let table = histogram_table(&raw_histogram(&levels)?)?;

    ndarray::Zip::from(ycrcb.y.data_mut())
        .and(levels.data())
        .for_each(|y, &level| *y = table[level as usize] as f32);

    ycrcb_to_image(&ycrcb)
}

//! 2D correlation and whole-image spatial filtering

use dipkit_core::raster::{clamp_to_byte, Image, Plane};
use dipkit_core::{Algorithm, Error, Result};
use serde::{Deserialize, Serialize};

use super::kernel::Kernel;
use crate::color::{merge_planes, split_planes};
use crate::maybe_rayon::*;

/// Parameters for spatial filtering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterParams {
    pub kernel: Kernel,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            kernel: Kernel::box_blur(1),
        }
    }
}

impl FilterParams {
    pub fn validate(&self) -> Result<()> {
        self.kernel.validate()
    }
}

/// Spatial filtering algorithm
#[derive(Debug, Clone, Default)]
pub struct SpatialFilter;

impl Algorithm for SpatialFilter {
    type Input = Image<u8>;
    type Output = Image<u8>;
    type Params = FilterParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "SpatialFilter"
    }

    fn description(&self) -> &'static str {
        "Per-channel kernel correlation with zero padding, clamped to [0, 255]"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        spatial_filter(&input, &params.kernel)
    }
}

/// Correlate a plane with a kernel (no kernel flip).
///
/// ```text
/// out[j][i] = Σ_n Σ_m src[j + n][i + m] · k[n + kh/2][m + kw/2]
/// ```
///
/// Only pixels whose whole neighborhood lies inside the plane are computed;
/// the band of `kh/2` rows and `kw/2` columns along each edge stays 0. Sums
/// are clamped to [0, 255] and truncated.
pub fn correlate(plane: &Plane<u8>, kernel: &Kernel) -> Result<Plane<u8>> {
    kernel.validate()?;
    plane.ensure_not_empty()?;

    let (rows, cols) = plane.shape();
    let hw = kernel.half_width();
    let hh = kernel.half_height();
    let src = plane.data();

    let output: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|j| {
            let mut row_data = vec![0u8; cols];
            if j < hh || j + hh >= rows {
                return row_data;
            }

            for i in hw..cols.saturating_sub(hw) {
                let mut sum = 0.0f32;
                for n in 0..kernel.height() {
                    let y = j + n - hh;
                    for m in 0..kernel.width() {
                        sum += src[(y, i + m - hw)] as f32 * kernel.weight(n, m);
                    }
                }
                row_data[i] = clamp_to_byte(sum);
            }
            row_data
        })
        .collect();

    Plane::from_vec(output, rows, cols)
}

/// Filter every channel of an image.
///
/// Each channel is zero-padded by the kernel half-extent, correlated and
/// cropped back, so every source pixel gets a value and samples outside the
/// image count as 0.
pub fn spatial_filter(image: &Image<u8>, kernel: &Kernel) -> Result<Image<u8>> {
    kernel.validate()?;
    image.ensure_not_empty()?;

    let hw = kernel.half_width();
    let hh = kernel.half_height();
    let (rows, cols, _) = image.shape();

    let filtered = split_planes(image)?
        .iter()
        .map(|plane| {
            let padded = plane.padded(hw, hh);
            correlate(&padded, kernel)?.crop(hh, hw, rows, cols)
        })
        .collect::<Result<Vec<_>>>()?;

    merge_planes(&filtered)
}

//! Gray-to-color rendering of images.

use dipkit_core::raster::{GrayMethod, Image, Plane};
use dipkit_core::{Algorithm, Error, Result};
use ndarray::{Array3, Axis, Zip};
use serde::{Deserialize, Serialize};

use crate::scheme::ColorMap;

/// Parameters for pseudo-color rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PseudoColorParams {
    pub map: ColorMap,
}

/// Pseudo-color algorithm
#[derive(Debug, Clone, Default)]
pub struct PseudoColor;

impl Algorithm for PseudoColor {
    type Input = Image<u8>;
    type Output = Image<u8>;
    type Params = PseudoColorParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "PseudoColor"
    }

    fn description(&self) -> &'static str {
        "Map gray levels to colors through a 256-entry colormap"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        pseudo_color(&input, params.map)
    }
}

/// Look up every gray level of `gray` in `map`'s table.
///
/// Returns a three-channel image of the same size.
pub fn apply_colormap(gray: &Plane<u8>, map: ColorMap) -> Result<Image<u8>> {
    gray.ensure_not_empty()?;
    let table = map.table();
    let (rows, cols) = gray.shape();

    let mut out = Array3::zeros((rows, cols, 3));
    Zip::from(out.lanes_mut(Axis(2)))
        .and(gray.view())
        .for_each(|mut px, &index| {
            let color = table[index as usize];
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
        });

    Image::from_array(out)
}

/// Reduce an image to gray ([`GrayMethod::Luma`]) and color it with `map`.
pub fn pseudo_color(image: &Image<u8>, map: ColorMap) -> Result<Image<u8>> {
    let gray = image.to_gray(GrayMethod::Luma)?;
    apply_colormap(&gray, map)
}

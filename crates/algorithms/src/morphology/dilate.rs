//! Morphological dilation (maximum filter)
//!
//! Replaces each sample with the maximum of its channel over the structuring
//! element neighborhood. Enlarges bright regions and shrinks dark regions.

use dipkit_core::raster::Image;
use dipkit_core::{Algorithm, Error, Result};
use serde::{Deserialize, Serialize};

use super::element::StructuringElement;
use crate::maybe_rayon::*;

/// Parameters for morphological dilation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DilateParams {
    /// Structuring element shape
    pub element: StructuringElement,
}

impl DilateParams {
    /// Check the structuring element
    pub fn validate(&self) -> Result<()> {
        self.element.validate()
    }
}

/// Dilation algorithm
#[derive(Debug, Clone, Default)]
pub struct Dilate;

impl Algorithm for Dilate {
    type Input = Image<u8>;
    type Output = Image<u8>;
    type Params = DilateParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Dilate"
    }

    fn description(&self) -> &'static str {
        "Morphological dilation (maximum filter over structuring element)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        params.validate()?;
        dilate(&input, &params.element)
    }
}

/// Perform morphological dilation on every channel of an image.
///
/// Each output sample is the maximum of the same channel over the element's
/// footprint. Samples within `radius` of an edge, where the footprint would
/// leave the image, are not processed and stay 0. The input is never
/// modified; a new image is returned.
pub fn dilate(image: &Image<u8>, element: &StructuringElement) -> Result<Image<u8>> {
    element.validate()?;
    image.ensure_not_empty()?;

    let (rows, cols, channels) = image.shape();
    let offsets = element.offsets();
    let radius = element.radius();
    let src = image.data();

    let output_data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0u8; cols * channels];
            if row < radius || row + radius >= rows {
                return row_data;
            }

            for col in radius..cols.saturating_sub(radius) {
                for ch in 0..channels {
                    let max_val = offsets
                        .iter()
                        .map(|&(dr, dc)| {
                            let nr = (row as isize + dr) as usize;
                            let nc = (col as isize + dc) as usize;
                            src[(nr, nc, ch)]
                        })
                        .max()
                        .unwrap_or(0);
                    row_data[col * channels + ch] = max_val;
                }
            }

            row_data
        })
        .collect();

    Image::from_vec(output_data, rows, cols, channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark(rows: usize, cols: usize, channels: usize) -> Image<u8> {
        Image::filled(rows, cols, channels, 0).unwrap()
    }

    #[test]
    fn test_single_pixel_grows_to_footprint() {
        let mut image = dark(9, 9, 3);
        image.set_pixel(4, 4, &[255, 255, 255]).unwrap();

        let element = StructuringElement::default();
        let result = dilate(&image, &element).unwrap();

        for r in 0..9isize {
            for c in 0..9isize {
                let expected = if element.contains(r - 4, c - 4) { 255 } else { 0 };
                for ch in 0..3 {
                    assert_eq!(
                        result.get(r as usize, c as usize, ch).unwrap(),
                        expected,
                        "at ({r}, {c}, {ch})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_dilate_uniform() {
        let image = Image::filled(7, 7, 1, 5u8).unwrap();
        let result = dilate(&image, &StructuringElement::Square(1)).unwrap();
        assert_eq!(result.get(3, 3, 0).unwrap(), 5);
    }

    #[test]
    fn test_border_band_left_at_zero() {
        let image = Image::filled(7, 7, 1, 5u8).unwrap();
        let result = dilate(&image, &StructuringElement::default()).unwrap();
        for i in 0..7 {
            assert_eq!(result.get(0, i, 0).unwrap(), 0);
            assert_eq!(result.get(1, i, 0).unwrap(), 0);
            assert_eq!(result.get(i, 6, 0).unwrap(), 0);
        }
        assert_eq!(result.get(2, 2, 0).unwrap(), 5);
        assert_eq!(result.get(4, 4, 0).unwrap(), 5);
    }

    #[test]
    fn test_channels_are_independent() {
        let mut image = dark(7, 7, 3);
        image.set(3, 3, 0, 200).unwrap();
        image.set(3, 4, 2, 90).unwrap();
        let result = dilate(&image, &StructuringElement::Square(1)).unwrap();
        assert_eq!(result.get(2, 2, 0).unwrap(), 200);
        assert_eq!(result.get(2, 2, 1).unwrap(), 0);
        assert_eq!(result.get(2, 5, 2).unwrap(), 90);
        assert_eq!(result.get(2, 5, 0).unwrap(), 0);
    }

    #[test]
    fn test_input_untouched() {
        let mut image = dark(6, 6, 1);
        image.set(3, 3, 0, 9).unwrap();
        let before = image.clone();
        let result = Dilate.execute_default(image.clone()).unwrap();
        assert_eq!(image, before);
        assert_ne!(result, before);
    }

    #[test]
    fn test_params_validate_element() {
        assert!(DilateParams::default().validate().is_ok());
        let bad = DilateParams {
            element: StructuringElement::Square(0),
        };
        assert!(bad.validate().is_err());
        assert!(Dilate.execute(dark(5, 5, 1), bad).is_err());
    }

    #[test]
    fn test_image_smaller_than_element() {
        let image = Image::filled(3, 3, 1, 50u8).unwrap();
        let result = dilate(&image, &StructuringElement::default()).unwrap();
        assert!(result.data().iter().all(|&v| v == 0));
    }
}

//! Box mean and standard deviation from a pair of integral images

use dipkit_core::raster::{Plane, Sample};
use dipkit_core::Result;

use super::table::IntegralImage;

/// Integral images of a plane and of its squares.
#[derive(Debug, Clone)]
pub struct BoxMoments {
    sum: IntegralImage,
    sum_sq: IntegralImage,
}

/// Mean and population standard deviation of a box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStats {
    pub mean: f64,
    pub std: f64,
}

impl BoxMoments {
    /// Build both tables over `plane`
    pub fn build<T: Sample>(plane: &Plane<T>) -> Result<Self> {
        Ok(Self {
            sum: IntegralImage::build(plane)?,
            sum_sq: IntegralImage::build_squared(plane)?,
        })
    }

    /// Table of plain sums
    pub fn sum(&self) -> &IntegralImage {
        &self.sum
    }

    /// Table of squared sums
    pub fn sum_sq(&self) -> &IntegralImage {
        &self.sum_sq
    }

    /// Mean and std over the box, dividing both sums by `count`.
    ///
    /// The variance `E[x²] − E[x]²` is clamped at zero before the square
    /// root; cancellation can drive it slightly negative.
    #[inline]
    pub fn stats(&self, c1: usize, c2: usize, r1: usize, r2: usize, count: f64) -> BoxStats {
        let mean = self.sum.box_sum(c1, c2, r1, r2) / count;
        let var = self.sum_sq.box_sum(c1, c2, r1, r2) / count - mean * mean;
        BoxStats {
            mean,
            std: var.max(0.0).sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_box_stats() {
        let plane = Plane::from_vec(vec![2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], 2, 4).unwrap();
        let moments = BoxMoments::build(&plane).unwrap();
        let stats = moments.stats(0, 3, 0, 1, 8.0);
        assert_relative_eq!(stats.mean, 5.0);
        assert_relative_eq!(stats.std, 2.0);
    }

    #[test]
    fn test_constant_box_has_zero_std() {
        let plane = Plane::filled(5, 5, 173u8).unwrap();
        let moments = BoxMoments::build(&plane).unwrap();
        let stats = moments.stats(1, 3, 1, 3, 9.0);
        assert_eq!(stats.mean, 173.0);
        assert_eq!(stats.std, 0.0);
    }

    #[test]
    fn test_negative_variance_is_clamped() {
        // A count larger than the box makes E[x²] − E[x]² negative
        let plane = Plane::filled(2, 2, 10.0f64).unwrap();
        let moments = BoxMoments::build(&plane).unwrap();
        let stats = moments.stats(0, 1, 0, 1, 2.0);
        assert!(stats.std == 0.0);
        assert!(!stats.std.is_nan());
    }
}

//! Summed-area tables
//!
//! Element (r, c) of an integral image holds the sum of every source
//! sample in the rectangle `[0, r] × [0, c]`. Any axis-aligned box sum is
//! then four lookups away.

use ndarray::Array2;
use dipkit_core::raster::{Plane, Sample};
use dipkit_core::{Error, Result};

/// Prefix-sum table over a plane, accumulated in f64.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegralImage {
    data: Array2<f64>,
}

impl IntegralImage {
    /// Build the integral image of `plane`
    pub fn build<T: Sample>(plane: &Plane<T>) -> Result<Self> {
        Self::build_with(plane, |v| v)
    }

    /// Build the integral image of the squared samples of `plane`
    pub fn build_squared<T: Sample>(plane: &Plane<T>) -> Result<Self> {
        Self::build_with(plane, |v| v * v)
    }

    fn build_with<T: Sample, F: Fn(f64) -> f64>(plane: &Plane<T>, f: F) -> Result<Self> {
        plane.ensure_not_empty()?;
        let (rows, cols) = plane.shape();
        let src = plane.data();
        let mut data = Array2::<f64>::zeros((rows, cols));

        // First row: running sum only
        let mut rs = 0.0;
        for c in 0..cols {
            rs += f(src[(0, c)].to_f64());
            data[(0, c)] = rs;
        }
        for r in 1..rows {
            rs = 0.0;
            for c in 0..cols {
                rs += f(src[(r, c)].to_f64());
                data[(r, c)] = rs + data[(r - 1, c)];
            }
        }

        Ok(Self { data })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Table value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    /// Sum of the source over columns `c1..=c2` and rows `r1..=r2`.
    ///
    /// Lookups left of column 0 or above row 0 read as zero.
    ///
    /// # Panics
    /// If `c2` or `r2` lies outside the table.
    #[inline]
    pub fn box_sum(&self, c1: usize, c2: usize, r1: usize, r2: usize) -> f64 {
        let a = if c1 == 0 || r1 == 0 { 0.0 } else { self.data[(r1 - 1, c1 - 1)] };
        let b = if r1 == 0 { 0.0 } else { self.data[(r1 - 1, c2)] };
        let c = if c1 == 0 { 0.0 } else { self.data[(r2, c1 - 1)] };
        let d = self.data[(r2, c2)];
        a - b - c + d
    }

    /// [`box_sum`](Self::box_sum) with bounds and ordering checks
    pub fn checked_box_sum(&self, c1: usize, c2: usize, r1: usize, r2: usize) -> Result<f64> {
        if c1 > c2 || r1 > r2 || c2 >= self.cols() || r2 >= self.rows() {
            return Err(Error::InvalidParameter {
                name: "box",
                value: format!("cols {}..={}, rows {}..={}", c1, c2, r1, r2),
                reason: format!(
                    "box must be ordered and inside a {}x{} table",
                    self.cols(),
                    self.rows()
                ),
            });
        }
        Ok(self.box_sum(c1, c2, r1, r2))
    }

    /// Sum of the whole source plane
    pub fn total(&self) -> f64 {
        self.box_sum(0, self.cols() - 1, 0, self.rows() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn gradient_plane(rows: usize, cols: usize) -> Plane<f32> {
        let data = (0..rows * cols).map(|i| (i % 17) as f32 + 0.5).collect();
        Plane::from_vec(data, rows, cols).unwrap()
    }

    fn brute_sum(plane: &Plane<f32>, c1: usize, c2: usize, r1: usize, r2: usize) -> f64 {
        let mut s = 0.0;
        for r in r1..=r2 {
            for c in c1..=c2 {
                s += plane.get(r, c).unwrap() as f64;
            }
        }
        s
    }

    #[test]
    fn test_full_extent_equals_total() {
        let plane = gradient_plane(9, 13);
        let ii = IntegralImage::build(&plane).unwrap();
        let total: f64 = plane.data().iter().map(|&v| v as f64).sum();
        assert_relative_eq!(ii.box_sum(0, 12, 0, 8), total, epsilon = 1e-9);
        assert_relative_eq!(ii.total(), total, epsilon = 1e-9);
    }

    #[test]
    fn test_boxes_match_brute_force() {
        let plane = gradient_plane(9, 13);
        let ii = IntegralImage::build(&plane).unwrap();
        for &(c1, c2, r1, r2) in &[(0, 0, 0, 0), (3, 7, 2, 5), (0, 4, 3, 8), (5, 12, 0, 2), (12, 12, 8, 8)] {
            assert_relative_eq!(ii.box_sum(c1, c2, r1, r2), brute_sum(&plane, c1, c2, r1, r2), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_squared_table() {
        let plane = Plane::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let sq = IntegralImage::build_squared(&plane).unwrap();
        assert_relative_eq!(sq.total(), 30.0);
        assert_relative_eq!(sq.box_sum(1, 1, 0, 1), 20.0);
    }

    #[test]
    fn test_byte_plane() {
        let plane = Plane::from_vec(vec![255u8; 12], 3, 4).unwrap();
        let ii = IntegralImage::build(&plane).unwrap();
        assert_eq!(ii.get(2, 3), Some(255.0 * 12.0));
        assert_eq!(ii.get(0, 0), Some(255.0));
    }

    #[test]
    fn test_checked_box_sum() {
        let ii = IntegralImage::build(&gradient_plane(4, 4)).unwrap();
        assert!(ii.checked_box_sum(0, 4, 0, 0).is_err());
        assert!(ii.checked_box_sum(2, 1, 0, 0).is_err());
        assert!(ii.checked_box_sum(0, 3, 0, 3).is_ok());
    }
}

//! Odd-sized correlation kernels

use dipkit_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// A dense `height × width` weight grid with odd dimensions.
///
/// Weights are row-major; `weight(n, m)` addresses row `n`, column `m`, with
/// the center at `(height / 2, width / 2)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kernel {
    width: usize,
    height: usize,
    weights: Vec<f32>,
}

impl Kernel {
    /// Build a kernel from row-major weights.
    ///
    /// Fails unless both dimensions are odd and `weights.len() == width * height`.
    pub fn new(width: usize, height: usize, weights: Vec<f32>) -> Result<Self> {
        let kernel = Self {
            width,
            height,
            weights,
        };
        kernel.validate()?;
        Ok(kernel)
    }

    /// 1×1 kernel that copies its input
    pub fn identity() -> Self {
        Self {
            width: 1,
            height: 1,
            weights: vec![1.0],
        }
    }

    /// Normalized mean filter of size `(2·radius + 1)²`
    pub fn box_blur(radius: usize) -> Self {
        let side = 2 * radius + 1;
        let n = side * side;
        Self {
            width: side,
            height: side,
            weights: vec![1.0 / n as f32; n],
        }
    }

    /// 3×3 sharpening kernel
    pub fn sharpen() -> Self {
        Self {
            width: 3,
            height: 3,
            weights: vec![0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0],
        }
    }

    /// 3×3 four-neighbour Laplacian
    pub fn laplacian() -> Self {
        Self {
            width: 3,
            height: 3,
            weights: vec![0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0],
        }
    }

    /// Check the odd-dimension and buffer-length invariants.
    ///
    /// Deserialized kernels bypass [`Kernel::new`], so callers run this first.
    pub fn validate(&self) -> Result<()> {
        if self.width % 2 == 0 || self.height % 2 == 0 {
            return Err(Error::InvalidParameter {
                name: "kernel",
                value: format!("{}x{}", self.width, self.height),
                reason: "dimensions must be odd".into(),
            });
        }
        if self.weights.len() != self.width * self.height {
            return Err(Error::InvalidParameter {
                name: "kernel",
                value: format!("{} weights", self.weights.len()),
                reason: format!("expected {}", self.width * self.height),
            });
        }
        if self.weights.iter().any(|w| !w.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "kernel",
                value: "non-finite weight".into(),
                reason: "weights must be finite".into(),
            });
        }
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Columns on each side of the center
    pub fn half_width(&self) -> usize {
        self.width / 2
    }

    /// Rows above and below the center
    pub fn half_height(&self) -> usize {
        self.height / 2
    }

    /// Weight at kernel row `n`, column `m`
    #[inline]
    pub fn weight(&self, n: usize, m: usize) -> f32 {
        self.weights[n * self.width + m]
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_even_dimensions_rejected() {
        assert!(Kernel::new(2, 3, vec![0.0; 6]).is_err());
        assert!(Kernel::new(3, 4, vec![0.0; 12]).is_err());
        assert!(Kernel::new(3, 3, vec![0.0; 8]).is_err());
        assert!(Kernel::new(3, 1, vec![1.0, 2.0, 3.0]).is_ok());
    }

    #[test]
    fn test_box_blur_sums_to_one() {
        let k = Kernel::box_blur(2);
        assert_eq!(k.width(), 5);
        assert_eq!(k.half_height(), 2);
        let total: f32 = k.weights().iter().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_presets_are_valid() {
        for k in [Kernel::identity(), Kernel::sharpen(), Kernel::laplacian(), Kernel::box_blur(0)] {
            assert!(k.validate().is_ok());
        }
        assert_eq!(Kernel::sharpen().weight(1, 1), 5.0);
    }

    #[test]
    fn test_deserialized_kernel_needs_validation() {
        let k: Kernel =
            serde_json::from_str(r#"{"width": 2, "height": 1, "weights": [1.0, 1.0]}"#).unwrap();
        assert!(k.validate().is_err());
    }
}

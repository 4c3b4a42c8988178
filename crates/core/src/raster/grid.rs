//! Single-channel plane type

use crate::error::{Error, Result};
use crate::raster::Sample;
use ndarray::{s, Array2, ArrayView2, ArrayViewMut2};

/// A single-channel 2D sample grid.
///
/// `Plane<T>` stores `rows × cols` samples in row-major order. It is the
/// planar buffer produced by splitting an [`Image`](crate::Image) into its
/// channels, and the unit most per-channel algorithms work on.
///
/// # Example
///
/// ```ignore
/// use dipkit_core::Plane;
///
/// let mut plane: Plane<f32> = Plane::new(4, 6)?;
/// plane.set(1, 2, 42.0)?;
/// let padded = plane.padded(2, 1);
/// assert_eq!(padded.shape(), (6, 10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Plane<T: Sample> {
    /// Samples stored in row-major order (row, col)
    data: Array2<T>,
}

impl<T: Sample> Plane<T> {
    /// Create a new plane filled with zeros
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        check_dims(rows, cols)?;
        Ok(Self {
            data: Array2::zeros((rows, cols)),
        })
    }

    /// Create a new plane filled with a specific value
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self> {
        check_dims(rows, cols)?;
        Ok(Self {
            data: Array2::from_elem((rows, cols), value),
        })
    }

    /// Create a plane from a row-major buffer.
    ///
    /// Fails when either dimension is zero or `data.len() != rows * cols`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        check_dims(rows, cols)?;
        if data.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }

        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self { data: array })
    }

    /// Create a plane from an ndarray; fails when either dimension is zero
    pub fn from_array(data: Array2<T>) -> Result<Self> {
        check_dims(data.nrows(), data.ncols())?;
        Ok(Self { data })
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of samples
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the plane has no samples
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return an error if the plane has no samples
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::InvalidDimensions {
                width: self.cols(),
                height: self.rows(),
            });
        }
        Ok(())
    }

    /// Return an error unless `other` has the same shape as `self`
    pub fn ensure_same_shape<U: Sample>(&self, other: &Plane<U>) -> Result<()> {
        let (er, ec) = self.shape();
        let (ar, ac) = other.shape();
        if (er, ec) != (ar, ac) {
            return Err(Error::SizeMismatch { er, ec, ar, ac });
        }
        Ok(())
    }

    // Data access

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Set value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col)] = value;
        Ok(())
    }

    /// Get a view of the underlying data
    pub fn view(&self) -> ArrayView2<'_, T> {
        self.data.view()
    }

    /// Get a mutable view of the underlying data
    pub fn view_mut(&mut self) -> ArrayViewMut2<'_, T> {
        self.data.view_mut()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<T> {
        &self.data
    }

    /// Get a mutable reference to the underlying array
    pub fn data_mut(&mut self) -> &mut Array2<T> {
        &mut self.data
    }

    /// Consume the plane and return the underlying array
    pub fn into_array(self) -> Array2<T> {
        self.data
    }

    /// Apply `f` to every sample, producing a plane of another sample type
    pub fn map<U: Sample, F: Fn(T) -> U>(&self, f: F) -> Plane<U> {
        Plane {
            data: self.data.mapv(f),
        }
    }

    // Padding

    /// Surround the plane with `pad_x` zero columns on the left and right and
    /// `pad_y` zero rows above and below.
    ///
    /// The result is `(rows + 2·pad_y) × (cols + 2·pad_x)`; its interior
    /// equals `self` exactly.
    pub fn padded(&self, pad_x: usize, pad_y: usize) -> Plane<T> {
        let (rows, cols) = self.shape();
        let mut out = Array2::zeros((rows + 2 * pad_y, cols + 2 * pad_x));
        out.slice_mut(s![pad_y..pad_y + rows, pad_x..pad_x + cols])
            .assign(&self.data);
        Plane { data: out }
    }

    /// Copy out the `rows × cols` rectangle whose top-left corner is
    /// (`row`, `col`).
    pub fn crop(&self, row: usize, col: usize, rows: usize, cols: usize) -> Result<Plane<T>> {
        check_dims(rows, cols)?;
        if row + rows > self.rows() || col + cols > self.cols() {
            return Err(Error::SizeMismatch {
                er: self.rows(),
                ec: self.cols(),
                ar: row + rows,
                ac: col + cols,
            });
        }
        Ok(Plane {
            data: self
                .data
                .slice(s![row..row + rows, col..col + cols])
                .to_owned(),
        })
    }
}

fn check_dims(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(Error::InvalidDimensions {
            width: cols,
            height: rows,
        });
    }
    Ok(())
}

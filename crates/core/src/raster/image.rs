//! Interleaved multi-channel image type

use crate::error::{Error, Result};
use crate::raster::{GrayMethod, Plane, Sample};
use ndarray::{Array3, ArrayView2, ArrayView3, ArrayViewMut2, Axis};

/// Channel counts an [`Image`] may carry.
pub const SUPPORTED_CHANNELS: [usize; 2] = [1, 3];

/// A row-major raster with `C ∈ {1, 3}` interleaved channels.
///
/// Samples are stored as `(row, col, channel)`, so the underlying buffer is
/// exactly `rows · cols · channels` long and laid out pixel by pixel.
/// Per-channel planes are exposed as strided views into that one buffer
/// ([`Image::channel`], [`Image::channel_mut`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T: Sample> {
    data: Array3<T>,
}

impl<T: Sample> Image<T> {
    /// Create a new image filled with zeros
    pub fn new(rows: usize, cols: usize, channels: usize) -> Result<Self> {
        check_shape(rows, cols, channels)?;
        Ok(Self {
            data: Array3::zeros((rows, cols, channels)),
        })
    }

    /// Create a new image with every sample set to `value`
    pub fn filled(rows: usize, cols: usize, channels: usize, value: T) -> Result<Self> {
        check_shape(rows, cols, channels)?;
        Ok(Self {
            data: Array3::from_elem((rows, cols, channels), value),
        })
    }

    /// Create an image from an interleaved row-major buffer.
    ///
    /// Fails when a dimension is zero, the channel count is not 1 or 3, or
    /// `data.len() != rows * cols * channels`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize, channels: usize) -> Result<Self> {
        check_shape(rows, cols, channels)?;
        if data.len() != rows * cols * channels {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }

        let array = Array3::from_shape_vec((rows, cols, channels), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self { data: array })
    }

    /// Create an image from an ndarray shaped `(rows, cols, channels)`
    pub fn from_array(data: Array3<T>) -> Result<Self> {
        let (rows, cols, channels) = data.dim();
        check_shape(rows, cols, channels)?;
        Ok(Self { data })
    }

    /// Wrap a single plane as a one-channel image
    pub fn from_plane(plane: Plane<T>) -> Self {
        Self {
            data: plane.into_array().insert_axis(Axis(2)),
        }
    }

    // Dimensions

    /// Number of rows (height)
    pub fn rows(&self) -> usize {
        self.data.dim().0
    }

    /// Number of columns (width)
    pub fn cols(&self) -> usize {
        self.data.dim().1
    }

    /// Number of channels
    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// Dimensions as (rows, cols, channels)
    pub fn shape(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// Total number of samples (`rows · cols · channels`)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Number of pixels (`rows · cols`)
    pub fn pixel_count(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Whether the image has no samples
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return an error if the image has no samples
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::InvalidDimensions {
                width: self.cols(),
                height: self.rows(),
            });
        }
        Ok(())
    }

    /// Return an error unless the image has exactly `expected` channels
    pub fn ensure_channels(&self, expected: usize) -> Result<()> {
        if self.channels() != expected {
            return Err(Error::UnsupportedChannels {
                expected,
                actual: self.channels(),
            });
        }
        Ok(())
    }

    // Data access

    /// Get sample at (row, col, channel)
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Result<T> {
        self.data
            .get((row, col, channel))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Set sample at (row, col, channel)
    pub fn set(&mut self, row: usize, col: usize, channel: usize, value: T) -> Result<()> {
        match self.data.get_mut((row, col, channel)) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            }),
        }
    }

    /// Set every channel of pixel (row, col) to the matching entry of `values`
    pub fn set_pixel(&mut self, row: usize, col: usize, values: &[T]) -> Result<()> {
        if values.len() != self.channels() {
            return Err(Error::UnsupportedChannels {
                expected: self.channels(),
                actual: values.len(),
            });
        }
        for (c, &v) in values.iter().enumerate() {
            self.set(row, col, c, v)?;
        }
        Ok(())
    }

    /// Read-only view of one channel plane
    pub fn channel(&self, channel: usize) -> Result<ArrayView2<'_, T>> {
        if channel >= self.channels() {
            return Err(Error::UnsupportedChannels {
                expected: channel + 1,
                actual: self.channels(),
            });
        }
        Ok(self.data.index_axis(Axis(2), channel))
    }

    /// Write view of one channel plane
    pub fn channel_mut(&mut self, channel: usize) -> Result<ArrayViewMut2<'_, T>> {
        if channel >= self.channels() {
            return Err(Error::UnsupportedChannels {
                expected: channel + 1,
                actual: self.channels(),
            });
        }
        Ok(self.data.index_axis_mut(Axis(2), channel))
    }

    /// Copy one channel out into an owned plane
    pub fn channel_plane(&self, channel: usize) -> Result<Plane<T>> {
        Plane::from_array(self.channel(channel)?.to_owned())
    }

    /// Get a view of the underlying data
    pub fn view(&self) -> ArrayView3<'_, T> {
        self.data.view()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array3<T> {
        &self.data
    }

    /// Get a mutable reference to the underlying array
    pub fn data_mut(&mut self) -> &mut Array3<T> {
        &mut self.data
    }

    /// Consume the image and return the underlying array
    pub fn into_array(self) -> Array3<T> {
        self.data
    }

    /// The interleaved buffer, if the image is in standard layout
    pub fn as_slice(&self) -> Option<&[T]> {
        self.data.as_slice()
    }

    /// Apply `f` to every sample, producing an image of another sample type
    pub fn map<U: Sample, F: Fn(T) -> U>(&self, f: F) -> Image<U> {
        Image {
            data: self.data.mapv(f),
        }
    }
}

impl Image<u8> {
    /// Reduce the image to one gray plane.
    ///
    /// One-channel images are copied unchanged.
    pub fn to_gray(&self, method: GrayMethod) -> Result<Plane<u8>> {
        self.ensure_not_empty()?;
        if self.channels() == 1 {
            return self.channel_plane(0);
        }
        let gray = self
            .data
            .lanes(Axis(2))
            .into_iter()
            .map(|px| method.reduce(px[0], px[1], px[2]))
            .collect();
        Plane::from_vec(gray, self.rows(), self.cols())
    }
}

fn check_shape(rows: usize, cols: usize, channels: usize) -> Result<()> {
    if !SUPPORTED_CHANNELS.contains(&channels) {
        return Err(Error::UnsupportedChannels {
            expected: 3,
            actual: channels,
        });
    }
    if rows == 0 || cols == 0 {
        return Err(Error::InvalidDimensions {
            width: cols,
            height: rows,
        });
    }
    Ok(())
}

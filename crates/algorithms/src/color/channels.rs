//! Channel split and merge
//!
//! Converts between an interleaved RGB image and three planar
//! single-channel buffers. The round trip is lossless for every sample type.

use ndarray::{stack, Axis};
use dipkit_core::raster::{Image, Plane, Sample};
use dipkit_core::{Error, Result};

/// Split a three-channel image into its (R, G, B) planes.
///
/// # Errors
/// `UnsupportedChannels` unless the image has exactly three channels;
/// `InvalidDimensions` for an empty image.
pub fn split<T: Sample>(image: &Image<T>) -> Result<(Plane<T>, Plane<T>, Plane<T>)> {
    image.ensure_not_empty()?;
    image.ensure_channels(3)?;
    Ok((
        image.channel_plane(0)?,
        image.channel_plane(1)?,
        image.channel_plane(2)?,
    ))
}

/// Merge three planes of identical shape into an interleaved RGB image.
pub fn merge<T: Sample>(r: &Plane<T>, g: &Plane<T>, b: &Plane<T>) -> Result<Image<T>> {
    r.ensure_not_empty()?;
    r.ensure_same_shape(g)?;
    r.ensure_same_shape(b)?;

    let data = stack(Axis(2), &[r.view(), g.view(), b.view()])
        .map_err(|e| Error::Other(e.to_string()))?;
    Image::from_array(data.as_standard_layout().into_owned())
}

/// Split an image with any supported channel count into one plane per channel.
pub fn split_planes<T: Sample>(image: &Image<T>) -> Result<Vec<Plane<T>>> {
    image.ensure_not_empty()?;
    (0..image.channels()).map(|c| image.channel_plane(c)).collect()
}

/// Inverse of [`split_planes`]: one plane becomes a gray image, three become RGB.
pub fn merge_planes<T: Sample>(planes: &[Plane<T>]) -> Result<Image<T>> {
    match planes {
        [gray] => {
            gray.ensure_not_empty()?;
            Ok(Image::from_plane(gray.clone()))
        }
        [r, g, b] => merge(r, g, b),
        _ => Err(Error::UnsupportedChannels {
            expected: 3,
            actual: planes.len(),
        }),
    }
}

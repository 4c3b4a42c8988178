//! # dipkit Algorithms
//!
//! Pixel-level transforms over [`dipkit_core::Image`].
//!
//! ## Available Algorithm Categories
//!
//! - **color**: channel split/merge, YCrCb conversion, negative
//! - **histogram**: histograms, equalization, Otsu thresholding, histogram charts
//! - **integral**: integral images and O(1) box statistics
//! - **enhance**: adaptive contrast enhancement
//! - **filter**: kernel correlation and spatial filtering
//! - **morphology**: dilation with configurable structuring elements

pub mod color;
pub mod enhance;
pub mod filter;
pub mod histogram;
pub mod integral;
pub mod morphology;

pub(crate) mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::color::{
        image_to_ycrcb, merge, negative, split, ycrcb_to_image, Negative, NegativeParams,
        YCrCbPlanes,
    };
    pub use crate::enhance::{adaptive_contrast, AceParams, AdaptiveContrast};
    pub use crate::filter::{correlate, spatial_filter, FilterParams, Kernel, SpatialFilter};
    pub use crate::histogram::{
        channel_histogram, equalize, otsu, render_histogram, Equalize, EqualizeMode,
        EqualizeParams, Histogram, Otsu, OtsuResult,
    };
    pub use crate::integral::{BoxMoments, IntegralImage};
    pub use crate::morphology::{dilate, Dilate, DilateParams, StructuringElement};
    pub use dipkit_core::prelude::*;
}

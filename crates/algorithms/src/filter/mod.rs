//! Spatial filtering
//!
//! - **kernel**: odd-sized weight grids and common presets
//! - **correlate**: border-preserving correlation and padded whole-image filtering

mod correlate;
mod kernel;

pub use correlate::{correlate, spatial_filter, FilterParams, SpatialFilter};
pub use kernel::Kernel;

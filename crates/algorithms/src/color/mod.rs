//! Color handling
//!
//! - **channels**: split an RGB image into planes and merge them back
//! - **ycbcr**: RGB ↔ YCbCr elementwise transform
//! - **negative**: per-channel or whole-image inversion

mod channels;
mod negative;
mod ycbcr;

pub use channels::{merge, merge_planes, split, split_planes};
pub use negative::{negative, Negative, NegativeParams};
pub use ycbcr::{image_to_ycrcb, rgb_to_ycrcb, ycrcb_to_image, ycrcb_to_rgb, YCrCbPlanes};

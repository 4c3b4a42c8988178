//! Integral images (summed-area tables) for O(1) box queries
//!
//! - **table**: prefix sums and inclusion-exclusion box queries
//! - **moments**: box mean/std from sum and sum-of-squares tables

mod moments;
mod table;

pub use moments::{BoxMoments, BoxStats};
pub use table::IntegralImage;

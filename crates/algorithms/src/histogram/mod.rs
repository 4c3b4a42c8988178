//! Histogram-based algorithms
//!
//! - **engine**: raw and normalized 256-bin histograms, CDFs
//! - **equalize**: CDF remap, luma-only or per channel
//! - **otsu**: between-class variance threshold segmentation
//! - **plot**: bar chart rendering of a histogram

mod engine;
mod equalize;
mod otsu;
mod plot;

pub use engine::{channel_histogram, normalized_histogram, raw_histogram, Histogram, GRAY_LEVELS};
pub use equalize::{
    equalization_table, equalize, equalize_plane, histogram_table, EqualizeMode, EqualizeParams,
    Equalize,
};
pub use otsu::{binarize, otsu, otsu_threshold, Otsu, OtsuResult};
pub use plot::{bar_color, render_histogram, CHART_SIZE};

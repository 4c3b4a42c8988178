//! Contrast enhancement
//!
//! - **ace**: adaptive contrast enhancement driven by local window statistics

mod ace;

pub use ace::{adaptive_contrast, enhance_plane, AceParams, AdaptiveContrast};

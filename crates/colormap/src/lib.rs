//! # dipkit Colormap
//!
//! Pseudo-color rendering for dipkit.
//!
//! Provides the Jet, Hot and Parula colormaps as immutable 256-entry lookup
//! tables, plus a multi-stop interpolation engine used to build them. The main
//! entry point is [`pseudo_color`], which reduces an image to gray and looks
//! each level up in the chosen table.
//!
//! ## Usage
//!
//! ```ignore
//! use dipkit_colormap::{pseudo_color, ColorMap};
//!
//! let colored = pseudo_color(&image, ColorMap::Parula)?;
//! ```

mod render;
mod scheme;

pub use render::{apply_colormap, pseudo_color, PseudoColor, PseudoColorParams};
pub use scheme::{ColorMap, ColorStop, Rgb, TABLE_SIZE};

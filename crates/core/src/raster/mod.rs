//! Image data structures and operations

mod element;
mod grid;
mod image;
mod selector;

pub use element::{clamp_to_byte, truncate_to_byte, Sample};
pub use grid::Plane;
pub use image::{Image, SUPPORTED_CHANNELS};
pub use selector::{ChannelSelector, GrayMethod};

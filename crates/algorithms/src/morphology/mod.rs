//! Mathematical morphology
//!
//! - **element**: structuring element shapes
//! - **dilate**: maximum filter over a structuring element

mod dilate;
mod element;

pub use dilate::{dilate, Dilate, DilateParams};
pub use element::StructuringElement;

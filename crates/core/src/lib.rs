//! # dipkit Core
//!
//! Core types and traits for the dipkit image-processing library.
//!
//! This crate provides:
//! - `Image<T>`: interleaved 1- or 3-channel raster
//! - `Plane<T>`: single-channel planar buffer, with zero padding and cropping
//! - `Sample`: the byte/float sample types images may hold
//! - `ChannelSelector` / `GrayMethod`: channel and grayscale selection
//! - Algorithm trait for a consistent API

pub mod error;
pub mod raster;

pub use error::{Error, ErrorKind, Result};
pub use raster::{ChannelSelector, GrayMethod, Image, Plane, Sample};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::raster::{
        clamp_to_byte, truncate_to_byte, ChannelSelector, GrayMethod, Image, Plane, Sample,
    };
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in dipkit.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}

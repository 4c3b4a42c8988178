//! Negative image

use dipkit_core::raster::{ChannelSelector, Image};
use dipkit_core::{Algorithm, Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters for the negative transform
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NegativeParams {
    /// `Y` inverts every channel; `R`/`G`/`B` invert only that one
    pub channel: ChannelSelector,
}

/// Negative image algorithm
#[derive(Debug, Clone, Default)]
pub struct Negative;

impl Algorithm for Negative {
    type Input = Image<u8>;
    type Output = Image<u8>;
    type Params = NegativeParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Negative"
    }

    fn description(&self) -> &'static str {
        "Invert all channels or a single selected channel (255 - v)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        negative(&input, params.channel)
    }
}

/// Invert the selected channel(s) of an image.
///
/// For one-channel images every selector inverts the single gray channel.
pub fn negative(image: &Image<u8>, channel: ChannelSelector) -> Result<Image<u8>> {
    image.ensure_not_empty()?;
    let mut out = image.clone();

    match channel.index() {
        Some(c) if image.channels() == 3 => {
            out.channel_mut(c)?.mapv_inplace(|v| 255 - v);
        }
        _ => out.data_mut().mapv_inplace(|v| 255 - v),
    }

    Ok(out)
}

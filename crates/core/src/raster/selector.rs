//! Channel and grayscale selectors

use serde::{Deserialize, Serialize};

/// Which channel an operation reads: luma or one of the color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChannelSelector {
    /// Gray level computed with [`GrayMethod::Luma`]
    #[default]
    Y,
    /// Red channel
    R,
    /// Green channel
    G,
    /// Blue channel
    B,
}

impl ChannelSelector {
    /// All selectors, in UI order
    pub const ALL: &[ChannelSelector] = &[Self::Y, Self::R, Self::G, Self::B];

    /// Index of the selected color channel, or `None` for luma
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Y => None,
            Self::R => Some(0),
            Self::G => Some(1),
            Self::B => Some(2),
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Y => "Y",
            Self::R => "R",
            Self::G => "G",
            Self::B => "B",
        }
    }
}

/// How a color pixel is reduced to one gray level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GrayMethod {
    /// Integer luma `(11R + 16G + 5B) / 32`
    #[default]
    Luma,
    /// `round(0.3R + 0.59G + 0.11B)`
    Weighted,
}

impl GrayMethod {
    /// Reduce one RGB triple
    #[inline]
    pub fn reduce(&self, r: u8, g: u8, b: u8) -> u8 {
        match self {
            GrayMethod::Luma => ((r as u32 * 11 + g as u32 * 16 + b as u32 * 5) / 32) as u8,
            GrayMethod::Weighted => {
                let v = 0.3 * r as f64 + 0.59 * g as f64 + 0.11 * b as f64;
                v.round().min(255.0) as u8
            }
        }
    }
}

//! Sample trait for generic pixel values

use num_traits::{NumCast, Zero};
use std::fmt::Debug;

/// Trait for types that can be stored in an image sample.
///
/// Processing buffers hold `f32`/`f64`; the display and storage boundary
/// holds `u8`.
pub trait Sample:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Convert self to f64
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample!(u8, f32, f64);

/// Convert a float sample to a byte by truncating toward zero and keeping
/// the low eight bits.
///
/// There is no clamping: `256.7` becomes `0`, `-1.2` becomes `255`. The
/// YCbCr round trip depends on this exact behavior.
#[inline]
pub fn truncate_to_byte(value: f32) -> u8 {
    (value as i32) as u8
}

/// Clamp a float sample to `[0, 255]`, then truncate toward zero.
#[inline]
pub fn clamp_to_byte(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_byte_wraps() {
        assert_eq!(truncate_to_byte(12.9), 12);
        assert_eq!(truncate_to_byte(255.4), 255);
        assert_eq!(truncate_to_byte(256.7), 0);
        assert_eq!(truncate_to_byte(-1.2), 255);
        assert_eq!(truncate_to_byte(-0.5), 0);
    }

    #[test]
    fn test_clamp_to_byte() {
        assert_eq!(clamp_to_byte(-20.0), 0);
        assert_eq!(clamp_to_byte(300.0), 255);
        assert_eq!(clamp_to_byte(99.99), 99);
    }

    #[test]
    fn test_sample_conversions() {
        assert_eq!(200u8.to_f64(), 200.0);
        assert_eq!(0.25f32.to_f64(), 0.25);
    }
}

//! 256-bin gray-level histograms
//!
//! Raw counts, normalized frequencies (PDF) and cumulative distributions
//! (CDF) over byte samples.

use dipkit_core::raster::{ChannelSelector, GrayMethod, Image, Plane};
use dipkit_core::{Error, Result};

/// Number of gray levels in a byte channel
pub const GRAY_LEVELS: usize = 256;

/// Raw per-level counts of a byte channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; GRAY_LEVELS],
    total: u64,
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            counts: [0; GRAY_LEVELS],
            total: 0,
        }
    }
}

impl Histogram {
    /// Count every sample yielded by `samples`
    pub fn from_samples<I: IntoIterator<Item = u8>>(samples: I) -> Self {
        let mut hist = Self::default();
        for v in samples {
            hist.counts[v as usize] += 1;
            hist.total += 1;
        }
        hist
    }

    /// Build a histogram directly from per-level counts
    pub fn from_counts(counts: [u64; GRAY_LEVELS]) -> Self {
        let total = counts.iter().sum();
        Self { counts, total }
    }

    /// Per-level counts, indexed by gray level
    pub fn counts(&self) -> &[u64; GRAY_LEVELS] {
        &self.counts
    }

    /// Number of samples counted
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Largest single-level count
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Counts divided by the sample count; sums to 1.0.
    ///
    /// # Errors
    /// `Degenerate` when no samples were counted.
    pub fn normalized(&self) -> Result<[f64; GRAY_LEVELS]> {
        if self.total == 0 {
            return Err(Error::Degenerate("histogram has zero samples".into()));
        }
        let n = self.total as f64;
        let mut pdf = [0.0; GRAY_LEVELS];
        for (p, &c) in pdf.iter_mut().zip(self.counts.iter()) {
            *p = c as f64 / n;
        }
        Ok(pdf)
    }

    /// Running sum of the normalized histogram.
    ///
    /// Non-decreasing, with the last entry ≈ 1.0.
    pub fn cdf(&self) -> Result<[f64; GRAY_LEVELS]> {
        let pdf = self.normalized()?;
        let mut cdf = [0.0; GRAY_LEVELS];
        let mut acc = 0.0;
        for (c, p) in cdf.iter_mut().zip(pdf.iter()) {
            acc += p;
            *c = acc;
        }
        Ok(cdf)
    }
}

/// Raw 256-bin histogram of a byte plane.
pub fn raw_histogram(plane: &Plane<u8>) -> Result<Histogram> {
    plane.ensure_not_empty()?;
    Ok(Histogram::from_samples(plane.data().iter().copied()))
}

/// Normalized 256-bin histogram of a byte plane; entries sum to 1.0.
pub fn normalized_histogram(plane: &Plane<u8>) -> Result<[f64; GRAY_LEVELS]> {
    raw_histogram(plane)?.normalized()
}

/// Raw histogram of the selected channel of an image.
///
/// `Y` reduces the image with [`GrayMethod::Luma`] first. On one-channel
/// images every selector reads the single gray channel.
pub fn channel_histogram(image: &Image<u8>, channel: ChannelSelector) -> Result<Histogram> {
    image.ensure_not_empty()?;
    let plane = match channel.index() {
        Some(c) if image.channels() == 3 => image.channel_plane(c)?,
        _ => image.to_gray(GrayMethod::Luma)?,
    };
    raw_histogram(&plane)
}

//! Histogram bar chart rendering

use dipkit_core::raster::{ChannelSelector, Image};
use dipkit_core::{Error, Result};

use super::engine::{Histogram, GRAY_LEVELS};

/// Pixel columns per histogram bin
const BIN_WIDTH: usize = 2;
/// Chart edge length in pixels (the chart is square)
pub const CHART_SIZE: usize = BIN_WIDTH * GRAY_LEVELS;
/// Fraction of the chart height the tallest bar fills
const BAR_FILL: f32 = 0.8;

const BACKGROUND: [u8; 3] = [255, 255, 255];

/// Bar color used for each channel
pub fn bar_color(channel: ChannelSelector) -> [u8; 3] {
    match channel {
        ChannelSelector::Y => [128, 128, 128],
        ChannelSelector::R => [255, 0, 0],
        ChannelSelector::G => [0, 255, 0],
        ChannelSelector::B => [0, 0, 255],
    }
}

/// Render a histogram as a `CHART_SIZE × CHART_SIZE` RGB bar chart.
///
/// Bars grow up from the bottom edge on a white background; the tallest
/// bar reaches 80% of the chart height.
pub fn render_histogram(hist: &Histogram, channel: ChannelSelector) -> Result<Image<u8>> {
    let max = hist.max_count();
    if max == 0 {
        return Err(Error::Degenerate("cannot plot an empty histogram".into()));
    }

    let h = CHART_SIZE;
    let scale = h as f32 / max as f32 * BAR_FILL;
    let bars: Vec<usize> = hist
        .counts()
        .iter()
        .map(|&v| (scale * v as f32) as usize)
        .collect();

    let color = bar_color(channel);
    let mut chart = Image::new(h, CHART_SIZE, 3)?;
    for row in 0..h {
        for col in 0..CHART_SIZE {
            let bar = bars[col / BIN_WIDTH];
            let px = if bar > 0 && row >= h - bar { color } else { BACKGROUND };
            chart.set_pixel(row, col, &px)?;
        }
    }
    Ok(chart)
}

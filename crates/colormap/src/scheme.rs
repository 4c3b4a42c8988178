//! Colormaps and their 256-entry lookup tables.
//!
//! Jet and Hot are evaluated from closed-form ramps; Parula is approximated
//! by multi-stop linear interpolation. Each table is built once on first use
//! and shared read-only afterwards.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Number of entries in every lookup table
pub const TABLE_SIZE: usize = 256;

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Channels as an array, in R, G, B order
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// A color stop: position in [0, 1] mapped to an RGB color.
#[derive(Debug, Clone, Copy)]
pub struct ColorStop {
    pub t: f64,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(t: f64, r: u8, g: u8, b: u8) -> Self {
        Self {
            t,
            color: Rgb::new(r, g, b),
        }
    }
}

/// Available colormaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorMap {
    /// Dark blue -> Cyan -> Yellow -> Dark red
    #[default]
    Jet,
    /// Black -> Red -> Yellow -> White
    Hot,
    /// Blue-violet -> Teal -> Yellow.
    ///
    /// A nine-stop piecewise-linear approximation of MATLAB's parula; entries
    /// between stops will not match MATLAB's table exactly.
    Parula,
}

impl ColorMap {
    /// All available colormaps, useful for UI combo boxes.
    pub const ALL: &[ColorMap] = &[Self::Jet, Self::Hot, Self::Parula];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Jet => "Jet",
            Self::Hot => "Hot",
            Self::Parula => "Parula",
        }
    }

    /// The 256-entry lookup table for this colormap
    pub fn table(&self) -> &'static [Rgb; TABLE_SIZE] {
        match self {
            Self::Jet => &JET_TABLE,
            Self::Hot => &HOT_TABLE,
            Self::Parula => &PARULA_TABLE,
        }
    }

    /// Color of gray level `index`
    #[inline]
    pub fn map(&self, index: u8) -> Rgb {
        self.table()[index as usize]
    }
}

// ─── Table definitions ────────────────────────────────────────────────

const PARULA_STOPS: &[ColorStop] = &[
    ColorStop::new(0.000, 62, 38, 168),
    ColorStop::new(0.125, 70, 88, 246),
    ColorStop::new(0.250, 39, 137, 242),
    ColorStop::new(0.375, 20, 174, 218),
    ColorStop::new(0.500, 22, 193, 175),
    ColorStop::new(0.625, 103, 204, 107),
    ColorStop::new(0.750, 190, 189, 56),
    ColorStop::new(0.875, 253, 191, 61),
    ColorStop::new(1.000, 249, 251, 21),
];

static JET_TABLE: LazyLock<[Rgb; TABLE_SIZE]> = LazyLock::new(|| build_table(jet));
static HOT_TABLE: LazyLock<[Rgb; TABLE_SIZE]> = LazyLock::new(|| build_table(hot));
static PARULA_TABLE: LazyLock<[Rgb; TABLE_SIZE]> =
    LazyLock::new(|| build_table(|i| multi_stop(PARULA_STOPS, i as f64 / 255.0)));

fn build_table(entry: impl Fn(usize) -> Rgb) -> [Rgb; TABLE_SIZE] {
    std::array::from_fn(entry)
}

fn unit_to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Piecewise-linear ramps peaking at t = 1/4, 1/2, 3/4
fn jet(i: usize) -> Rgb {
    let t = i as f64 / 255.0;
    let ramp = |center: f64| unit_to_byte(1.5 - (4.0 * t - center).abs());
    Rgb::new(ramp(3.0), ramp(2.0), ramp(1.0))
}

/// Red saturates at entry 95, green at 191, blue climbs over the last 64
fn hot(i: usize) -> Rgb {
    let i = i as f64;
    let r = ((i + 1.0) / 96.0).min(1.0);
    let g = ((i - 95.0) / 96.0).clamp(0.0, 1.0);
    let b = ((i - 191.0) / 64.0).clamp(0.0, 1.0);
    Rgb::new(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b))
}

// ─── Interpolation engine ──────────────────────────────────────────────

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_color(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    Rgb::new(
        lerp(c1.r as f64, c2.r as f64, t).round() as u8,
        lerp(c1.g as f64, c2.g as f64, t).round() as u8,
        lerp(c1.b as f64, c2.b as f64, t).round() as u8,
    )
}

fn multi_stop(stops: &[ColorStop], t: f64) -> Rgb {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Rgb::BLACK;
    };
    if t <= first.t {
        return first.color;
    }
    if t >= last.t {
        return last.color;
    }
    for pair in stops.windows(2) {
        if t <= pair[1].t {
            let ratio = (t - pair[0].t) / (pair[1].t - pair[0].t);
            return lerp_color(pair[0].color, pair[1].color, ratio);
        }
    }
    last.color
}

// src/geometry/mod.rs

//! Parsing of X11-style geometry directives.
//!
//! A geometry directive combines an optional dimension section (`WxH`, either
//! side optionally a percentage of the screen) with an optional position
//! section (`+X+Y`, `-X-Y`, ...). The two sections are parsed independently:
//! a directive may yield a valid size, a valid position, both, or neither.

mod dimension;
mod position;
mod token;

pub use dimension::{parse_dim_string, parse_size_spec};
pub use position::parse_pos_string;
pub use token::parse_geom_token;

use log::debug;

/// Pixel dimensions of the display, sampled fresh for every resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenExtent {
    pub width: i32,
    pub height: i32,
}

/// Native decoded size of the current video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VideoExtent {
    pub width: i64,
    pub height: i64,
}

impl VideoExtent {
    /// A video extent is usable as a scaling base only when both sides are positive.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// A parsed numeric value: an absolute pixel count or a fraction of a screen extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeomValue {
    /// Percentage divided by 100 (`50%` is `Fraction(0.5)`).
    Fraction(f64),
    /// Literal pixel count.
    Pixels(i64),
}

impl GeomValue {
    /// Resolves the value against `base`, truncating fractional results toward zero.
    pub fn to_pixels(self, base: i64) -> i64 {
        match self {
            GeomValue::Pixels(px) => px,
            GeomValue::Fraction(fraction) => (fraction * base as f64) as i64,
        }
    }
}

/// Width/height constraint as written in a dimension string. `None` means
/// "no constraint" on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeSpec {
    pub width: Option<GeomValue>,
    pub height: Option<GeomValue>,
}

impl SizeSpec {
    /// Resolves both axes against the screen. Succeeds only when both axes are
    /// set and resolve to strictly positive pixel counts.
    pub fn resolve(&self, screen: ScreenExtent) -> Option<ResolvedDimensions> {
        let width = self.width?.to_pixels(screen.width as i64);
        let height = self.height?.to_pixels(screen.height as i64);
        let dims = ResolvedDimensions { width, height };
        dims.is_positive().then_some(dims)
    }
}

/// Window position. `flip_x`/`flip_y` measure the coordinate from the
/// right/bottom screen edge instead of the left/top one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSpec {
    pub x: GeomValue,
    pub y: GeomValue,
    pub flip_x: bool,
    pub flip_y: bool,
}

/// Final window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedDimensions {
    pub width: i64,
    pub height: i64,
}

impl ResolvedDimensions {
    pub fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Outcome of parsing a full geometry directive. Each half is valid or not
/// independently of the other.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParsedGeometry {
    pub dimensions: Option<ResolvedDimensions>,
    pub position: Option<PositionSpec>,
}

fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

/// Splits `geom` into its dimension and position sections and parses both.
pub fn parse_geom_string(geom: &str, screen: ScreenExtent) -> ParsedGeometry {
    let pos_start = geom.find(is_sign).unwrap_or(geom.len());

    // A leading sign means there is no dimension section at all.
    let dimensions = if pos_start > 0 {
        parse_dim_string(&geom[..pos_start], screen)
    } else {
        None
    };

    let position = parse_pos_string(&geom[pos_start..]);

    debug!(
        "Geometry: '{}' -> dimensions {:?}, position {:?}",
        geom, dimensions, position
    );

    ParsedGeometry {
        dimensions,
        position,
    }
}

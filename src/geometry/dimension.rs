// src/geometry/dimension.rs

//! `WIDTHxHEIGHT` dimension strings.
//!
//! Each side is a plain integer or an integer with a `%` suffix. A
//! percentage is taken of the matching screen extent. When the width is a
//! percentage and the height is not, the height reuses the width's fraction
//! (`50%x` on a 1920x1080 screen is 960x540).

use super::{GeomValue, ResolvedDimensions, ScreenExtent, SizeSpec};
use log::debug;

/// Leading integer of a segment plus whether the segment ends in `%`.
/// Missing or unparsable digits read as 0.
fn parse_dim_segment(segment: &str) -> (i64, bool) {
    let bytes = segment.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    let value = segment[..end].parse().unwrap_or(0);
    (value, segment.ends_with('%'))
}

fn segment_value(value: i64, percent: bool) -> GeomValue {
    if percent {
        GeomValue::Fraction(value as f64 / 100.0)
    } else {
        GeomValue::Pixels(value)
    }
}

/// Parses a dimension string into per-axis constraints without resolving
/// percentages.
///
/// The width is kept only when its numeric value is strictly positive. The
/// height is unset when there is no separator.
pub fn parse_size_spec(dim: &str) -> SizeSpec {
    let mut segments = dim.splitn(2, ['x', 'X']);

    let width = segments.next().and_then(|segment| {
        let (value, percent) = parse_dim_segment(segment);
        (value > 0).then(|| segment_value(value, percent))
    });

    let height = segments.next().map(|segment| {
        let (value, percent) = parse_dim_segment(segment);
        match width {
            Some(GeomValue::Fraction(fraction)) if !percent => GeomValue::Fraction(fraction),
            _ => segment_value(value, percent),
        }
    });

    SizeSpec { width, height }
}

/// Parses and resolves a dimension string against the current screen.
///
/// Returns `None` unless both resulting pixel values are strictly positive.
pub fn parse_dim_string(dim: &str, screen: ScreenExtent) -> Option<ResolvedDimensions> {
    let spec = parse_size_spec(dim);
    let resolved = spec.resolve(screen);
    if resolved.is_none() {
        debug!(
            "Dimension: '{}' gives no usable size ({:?} on {}x{} screen)",
            dim, spec, screen.width, screen.height
        );
    }
    resolved
}

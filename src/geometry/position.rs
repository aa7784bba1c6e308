// src/geometry/position.rs

//! `+X+Y` position strings.
//!
//! Each axis starts with a prefix of one or two sign characters. The first
//! sign picks the screen edge (`-` measures from the right/bottom edge). With
//! a two-character prefix the second sign belongs to the number itself, so
//! `+-10` is 10 pixels past the left edge and `--10` is 10 pixels past the
//! right edge.

use super::token::parse_geom_token;
use super::{GeomValue, PositionSpec};
use log::trace;

/// Consumes the edge sign of a position prefix and returns whether it flips
/// the axis. A second sign is left in place for the numeric token.
fn parse_pos_token_prefix(iter: &mut &str) -> Option<bool> {
    let s = *iter;
    let len = s.bytes().take_while(|b| *b == b'+' || *b == b'-').count();

    match len {
        1 | 2 => {
            *iter = &s[1..];
            Some(s.starts_with('-'))
        }
        _ => {
            trace!("Position: invalid sign prefix of length {} in '{}'", len, s);
            None
        }
    }
}

fn parse_pos_token(iter: &mut &str) -> Option<(GeomValue, bool)> {
    let flip = parse_pos_token_prefix(iter)?;
    let value = parse_geom_token(iter)?;
    Some((value, flip))
}

/// Parses both axes, X then Y. Fails unless both are present and valid.
pub fn parse_pos_string(pos: &str) -> Option<PositionSpec> {
    let mut iter = pos;
    let (x, flip_x) = parse_pos_token(&mut iter)?;
    let (y, flip_y) = parse_pos_token(&mut iter)?;

    Some(PositionSpec {
        x,
        y,
        flip_x,
        flip_y,
    })
}

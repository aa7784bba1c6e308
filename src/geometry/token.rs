// src/geometry/token.rs

//! Single numeric token parsing from a forward-moving cursor.

use super::GeomValue;
use log::trace;

/// Parses a signed decimal integer at the start of `*iter`, optionally
/// followed by `%`.
///
/// On success the cursor is advanced past the digits (and the `%`, if any).
/// A token without digits, including a bare `%`, is rejected and the cursor
/// is left untouched, as is a value that does not fit in an `i64`.
pub fn parse_geom_token(iter: &mut &str) -> Option<GeomValue> {
    let s = *iter;
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    if end == digits_start {
        trace!("Token: no digits at '{}'", s);
        return None;
    }

    let value: i64 = match s[..end].parse() {
        Ok(value) => value,
        Err(e) => {
            trace!("Token: '{}' out of range: {}", &s[..end], e);
            return None;
        }
    };

    let token = if bytes.get(end) == Some(&b'%') {
        end += 1;
        GeomValue::Fraction(value as f64 / 100.0)
    } else {
        GeomValue::Pixels(value)
    };

    *iter = &s[end..];
    Some(token)
}

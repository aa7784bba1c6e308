// src/sizing/window_scale.rs

use crate::geometry::{ResolvedDimensions, VideoExtent};
use log::warn;

/// Parses a `window-scale` value such as `"1.5"`.
pub fn parse_scale_factor(scale: &str) -> Option<f64> {
    match scale.trim().parse::<f64>() {
        Ok(factor) if factor.is_finite() => Some(factor),
        Ok(factor) => {
            warn!("WindowScale: ignoring non-finite scale factor {}", factor);
            None
        }
        Err(e) => {
            warn!("WindowScale: ignoring invalid scale factor '{}': {}", scale, e);
            None
        }
    }
}

/// Multiplies the video size by the scale factor, truncating toward zero.
pub fn scale_dimensions(scale: &str, video: VideoExtent) -> Option<ResolvedDimensions> {
    let factor = parse_scale_factor(scale)?;
    Some(ResolvedDimensions {
        width: (factor * video.width as f64) as i64,
        height: (factor * video.height as f64) as i64,
    })
}

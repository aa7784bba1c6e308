// src/sizing/autofit.rs

//! Aspect-preserving autofit.
//!
//! Three independent directives feed the resolver: the target size
//! (`autofit`), a floor (`autofit-smaller`) and a ceiling (`autofit-larger`).
//! Each axis of the target is clamped into `[floor, ceiling]`, then a single
//! ratio taken from the binding axis is applied to both video axes so the
//! output keeps the video's aspect ratio.

use crate::geometry::{parse_dim_string, ResolvedDimensions, ScreenExtent, VideoExtent};
use log::debug;

/// Clamps `value` into `[floor, ceiling]`. The ceiling is checked first, so
/// with crossed bounds a value above the ceiling gets the ceiling and a value
/// below the floor gets the floor.
pub fn clamp_axis(value: i64, floor: i64, ceiling: i64) -> i64 {
    if value > ceiling {
        ceiling
    } else if value < floor {
        floor
    } else {
        value
    }
}

/// Parsed autofit directives. Only exists when at least one directive was set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutofitConstraints {
    /// Target size; `(0, 0)` when `autofit` is absent or invalid.
    pub target: ResolvedDimensions,
    /// Lower bound; `(0, 0)` when `autofit-smaller` is absent or invalid.
    pub floor: ResolvedDimensions,
    /// Upper bound; `i64::MAX` when `autofit-larger` is absent or invalid.
    pub ceiling: ResolvedDimensions,
}

impl AutofitConstraints {
    /// Builds the constraints from the raw directive strings.
    ///
    /// Returns `None` when none of the three directives is set, in which case
    /// the autofit step must leave the candidate size untouched. A directive
    /// that is set but fails to parse contributes its default bound.
    pub fn from_directives(
        target: Option<&str>,
        floor: Option<&str>,
        ceiling: Option<&str>,
        screen: ScreenExtent,
    ) -> Option<Self> {
        if target.is_none() && floor.is_none() && ceiling.is_none() {
            return None;
        }

        let parse = |directive: Option<&str>, default: ResolvedDimensions| {
            directive
                .and_then(|dim| parse_dim_string(dim, screen))
                .unwrap_or(default)
        };

        Some(AutofitConstraints {
            target: parse(target, ResolvedDimensions::default()),
            floor: parse(floor, ResolvedDimensions::default()),
            ceiling: parse(
                ceiling,
                ResolvedDimensions {
                    width: i64::MAX,
                    height: i64::MAX,
                },
            ),
        })
    }

    /// Per-axis clamp of the target into the bounds, before aspect correction.
    pub fn clamped_target(&self) -> ResolvedDimensions {
        ResolvedDimensions {
            width: clamp_axis(self.target.width, self.floor.width, self.ceiling.width),
            height: clamp_axis(self.target.height, self.floor.height, self.ceiling.height),
        }
    }

    /// Fits the video into the clamped target with one shared ratio.
    ///
    /// Returns `None` when the video size is unknown.
    pub fn fit(&self, video: VideoExtent) -> Option<ResolvedDimensions> {
        if video.is_degenerate() {
            debug!(
                "Autofit: video size {}x{} unusable, skipping",
                video.width, video.height
            );
            return None;
        }

        let clamped = self.clamped_target();
        let ratio = f64::min(
            clamped.width as f64 / video.width as f64,
            clamped.height as f64 / video.height as f64,
        );
        let fitted = ResolvedDimensions {
            width: (ratio * video.width as f64) as i64,
            height: (ratio * video.height as f64) as i64,
        };

        debug!(
            "Autofit: target {:?} clamped to {:?}, ratio {} -> {}x{}",
            self.target, clamped, ratio, fitted.width, fitted.height
        );
        Some(fitted)
    }
}

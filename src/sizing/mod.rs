// src/sizing/mod.rs

//! Window size resolution from the native video size.
//!
//! `window_scale` multiplies the video size by a scalar. `autofit` clamps a
//! target size between optional bounds and rescales the result back to the
//! video's aspect ratio.

mod autofit;
mod window_scale;

pub use autofit::{clamp_axis, AutofitConstraints};
pub use window_scale::{parse_scale_factor, scale_dimensions};

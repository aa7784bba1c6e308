// src/backends/mod.rs

//! Sources of the display's pixel dimensions.

use crate::geometry::ScreenExtent;
use anyhow::Result;

#[cfg(test)]
pub mod mock;
pub mod x11;

pub use self::x11::XScreenSource;

/// Provides the current screen size. Implementations must not cache: the
/// display configuration may change between passes.
pub trait ScreenSource {
    fn screen_extent(&self) -> Result<ScreenExtent>;
}

/// A screen of constant size.
#[derive(Debug, Clone, Copy)]
pub struct FixedScreen(pub ScreenExtent);

impl ScreenSource for FixedScreen {
    fn screen_extent(&self) -> Result<ScreenExtent> {
        Ok(self.0)
    }
}

// src/backends/x11.rs

use crate::backends::ScreenSource;
use crate::geometry::ScreenExtent;

use anyhow::{anyhow, Context, Result};
use log::trace;
use std::ffi::CString;
use std::ptr;

use x11::xlib;

/// Reads the default screen's size from an X server.
///
/// A connection is opened and closed on every query so the reported size
/// always reflects the current display configuration.
#[derive(Debug, Default)]
pub struct XScreenSource {
    display_name: Option<CString>,
}

impl XScreenSource {
    /// `display_name` follows Xlib conventions (`":0"`); `None` uses `$DISPLAY`.
    pub fn new(display_name: Option<&str>) -> Result<Self> {
        let display_name = display_name
            .map(CString::new)
            .transpose()
            .context("X display name contains a NUL byte")?;
        Ok(XScreenSource { display_name })
    }
}

impl ScreenSource for XScreenSource {
    fn screen_extent(&self) -> Result<ScreenExtent> {
        let name_ptr = self
            .display_name
            .as_ref()
            .map_or(ptr::null(), |name| name.as_ptr());

        // SAFETY: the display pointer is checked for null and closed before
        // returning; no Xlib object outlives this block.
        let extent = unsafe {
            let display = xlib::XOpenDisplay(name_ptr);
            if display.is_null() {
                return Err(anyhow!(
                    "XOpenDisplay failed for {:?}",
                    self.display_name.as_deref()
                ));
            }
            let screen = xlib::XDefaultScreen(display);
            let extent = ScreenExtent {
                width: xlib::XDisplayWidth(display, screen),
                height: xlib::XDisplayHeight(display, screen),
            };
            xlib::XCloseDisplay(display);
            extent
        };

        trace!("XScreenSource: screen is {}x{}", extent.width, extent.height);
        Ok(extent)
    }
}

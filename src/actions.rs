// src/actions.rs
//
// Defines the actions emitted towards the windowing toolkit and the media engine.

use crate::geometry::GeomValue;
use crate::msg_level::LogLevel;
use anyhow::Result;

/// Outbound requests produced by a resolution pass.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowAction {
    /// Move the window. Flipped axes are measured from the right/bottom edge.
    Move {
        flip_x: bool,
        flip_y: bool,
        x: GeomValue,
        y: GeomValue,
    },
    /// Resize the window. Both sides are strictly positive.
    Resize { width: i64, height: i64 },
    /// Switch the window to fullscreen.
    EnterFullscreen,
    /// Ask the media engine to forward log messages up to this severity.
    RequestLogMessages(LogLevel),
}

/// Receives actions emitted by the orchestrator.
pub trait WindowSink {
    fn dispatch_actions(&mut self, actions: Vec<WindowAction>) -> Result<()>;
}

// src/main.rs

// Declare modules
pub mod actions;
pub mod backends;
pub mod config;
pub mod geometry;
pub mod msg_level;
pub mod orchestrator;
pub mod properties;
pub mod sizing;

use crate::{
    actions::{WindowAction, WindowSink},
    backends::{FixedScreen, ScreenSource, XScreenSource},
    config::Config,
    orchestrator::{SizingEvent, SizingOrchestrator},
    properties::MapPropertyStore,
};

use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use std::path::PathBuf;

/// Logs every action instead of forwarding it to a real window.
struct LoggingSink;

impl WindowSink for LoggingSink {
    fn dispatch_actions(&mut self, actions: Vec<WindowAction>) -> Result<()> {
        for action in actions {
            match action {
                WindowAction::Move {
                    flip_x,
                    flip_y,
                    x,
                    y,
                } => info!("window-move: flip=({}, {}) x={:?} y={:?}", flip_x, flip_y, x, y),
                WindowAction::Resize { width, height } => {
                    info!("window-resize: {}x{}", width, height)
                }
                WindowAction::EnterFullscreen => info!("enter-fullscreen"),
                WindowAction::RequestLogMessages(level) => {
                    info!("request-log-messages: {}", level)
                }
            }
        }
        Ok(())
    }
}

/// Resolves the window placement for a recorded property snapshot.
///
/// Usage: `vidgeom <properties.json> [config.json]`
fn main() -> Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let mut args = std::env::args_os().skip(1);
    let properties_path: PathBuf = args
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("usage: vidgeom <properties.json> [config.json]"))?;

    let config = match args.next() {
        Some(path) => Config::load(&PathBuf::from(path))?,
        None => Config::default(),
    };
    info!("Configuration: {:?}", config);

    let properties = MapPropertyStore::load(&properties_path)
        .with_context(|| format!("Failed to load {}", properties_path.display()))?;

    let x_screen = XScreenSource::new(config.screen.display.as_deref())?;
    let fallback = FixedScreen(config.screen.fallback_extent());
    let screen: &dyn ScreenSource = match x_screen.screen_extent() {
        Ok(extent) => {
            info!("Using X screen ({}x{}).", extent.width, extent.height);
            &x_screen
        }
        Err(e) => {
            warn!("{:#}. Using fallback screen size.", e);
            &fallback
        }
    };

    let mut sink = LoggingSink;
    let mut orchestrator = SizingOrchestrator::new(&properties, screen, &mut sink, config);

    for event in [
        SizingEvent::Ready,
        SizingEvent::VideoReconfigured { new_file: true },
    ] {
        orchestrator
            .handle_event(event)
            .with_context(|| format!("Failed to handle {:?}", event))?;
    }

    info!("vidgeom exited successfully.");
    Ok(())
}

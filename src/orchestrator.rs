// src/orchestrator.rs
//! Sequences the sizing resolvers for each triggering event and emits the
//! resulting window actions.
//!
//! The orchestrator keeps no sizing state between events: every pass reads
//! the directives, the screen size and the video size afresh. The only state
//! it owns is the per-module log level list, rebuilt on every `Ready`.
//!
//! It borrows its collaborators as plain (non-`Sync`) trait objects, so it is
//! neither `Send` nor `Sync` and stays on the thread that created it, which
//! should be the windowing toolkit's event loop thread.

use crate::{
    actions::{WindowAction, WindowSink},
    backends::ScreenSource,
    config::Config,
    geometry::{parse_geom_string, ResolvedDimensions, ScreenExtent, VideoExtent},
    msg_level::LogLevelList,
    properties::PropertyStore,
    sizing::{scale_dimensions, AutofitConstraints},
};
use anyhow::{Context, Result};
use log::{debug, info, trace, warn};

pub const GEOMETRY_PROPERTY: &str = "options/geometry";
pub const WINDOW_SCALE_PROPERTY: &str = "options/window-scale";
pub const AUTOFIT_PROPERTY: &str = "options/autofit";
pub const AUTOFIT_LARGER_PROPERTY: &str = "options/autofit-larger";
pub const AUTOFIT_SMALLER_PROPERTY: &str = "options/autofit-smaller";
pub const FULLSCREEN_PROPERTY: &str = "options/fs";
pub const MSG_LEVEL_PROPERTY: &str = "options/msg-level";
pub const VIDEO_WIDTH_PROPERTY: &str = "dwidth";
pub const VIDEO_HEIGHT_PROPERTY: &str = "dheight";

/// Events that trigger a resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizingEvent {
    /// The media engine became ready. Fires once per window lifecycle.
    Ready,
    /// The decoded video size changed. Only reconfigurations caused by a new
    /// file load resize the window.
    VideoReconfigured { new_file: bool },
}

pub struct SizingOrchestrator<'a> {
    properties: &'a dyn PropertyStore,
    screen: &'a dyn ScreenSource,
    sink: &'a mut dyn WindowSink,
    config: Config,
    log_levels: LogLevelList,
}

impl<'a> SizingOrchestrator<'a> {
    pub fn new(
        properties: &'a dyn PropertyStore,
        screen: &'a dyn ScreenSource,
        sink: &'a mut dyn WindowSink,
        config: Config,
    ) -> Self {
        let log_levels = LogLevelList::new(config.logging.default_msg_level);
        SizingOrchestrator {
            properties,
            screen,
            sink,
            config,
            log_levels,
        }
    }

    /// Per-module log levels from the last `Ready` event.
    pub fn log_levels(&self) -> &LogLevelList {
        &self.log_levels
    }

    /// Runs the pass for `event`. Malformed or missing directives only
    /// suppress their own actions; the only error is a failing sink.
    pub fn handle_event(&mut self, event: SizingEvent) -> Result<()> {
        debug!("SizingOrchestrator: Handling {:?}", event);
        let actions = match event {
            SizingEvent::Ready => self.on_ready(),
            SizingEvent::VideoReconfigured { new_file: true } => self.on_video_reconfigured(),
            SizingEvent::VideoReconfigured { new_file: false } => {
                trace!("SizingOrchestrator: Reconfiguration without a new file, ignoring.");
                Vec::new()
            }
        };

        if actions.is_empty() {
            return Ok(());
        }

        info!("SizingOrchestrator: Dispatching {:?}", actions);
        self.sink
            .dispatch_actions(actions)
            .with_context(|| format!("Failed to dispatch actions for {:?}", event))
    }

    fn on_ready(&mut self) -> Vec<WindowAction> {
        let mut actions = Vec::new();
        self.handle_geometry(&mut actions);
        self.handle_fullscreen(&mut actions);
        self.handle_msg_level(&mut actions);
        actions
    }

    fn on_video_reconfigured(&mut self) -> Vec<WindowAction> {
        let video = self.video_extent();
        let mut dims = ResolvedDimensions::default();

        self.handle_window_scale(video, &mut dims);
        self.handle_autofit(video, &mut dims);

        if dims.is_positive() {
            vec![WindowAction::Resize {
                width: dims.width,
                height: dims.height,
            }]
        } else {
            debug!(
                "SizingOrchestrator: No usable size after reconfiguration ({}x{}).",
                dims.width, dims.height
            );
            Vec::new()
        }
    }

    /// Reads an option, treating an empty string as absent.
    fn option(&self, name: &str) -> Option<String> {
        let value = self.properties.get_string(name).filter(|v| !v.is_empty())?;
        debug!(
            "Retrieved option --{}={}",
            name.trim_start_matches("options/"),
            value
        );
        Some(value)
    }

    fn screen_extent(&self) -> ScreenExtent {
        match self.screen.screen_extent() {
            Ok(extent) => extent,
            Err(e) => {
                warn!(
                    "SizingOrchestrator: Screen size unavailable, percentages resolve to 0: {:#}",
                    e
                );
                ScreenExtent::default()
            }
        }
    }

    fn video_extent(&self) -> Option<VideoExtent> {
        let width = self.properties.get_i64(VIDEO_WIDTH_PROPERTY);
        let height = self.properties.get_i64(VIDEO_HEIGHT_PROPERTY);
        match (width, height) {
            (Ok(width), Ok(height)) => Some(VideoExtent { width, height }),
            (Err(e), _) | (_, Err(e)) => {
                debug!("SizingOrchestrator: Video size unknown: {:#}", e);
                None
            }
        }
    }

    fn handle_geometry(&self, actions: &mut Vec<WindowAction>) {
        let Some(geometry) = self.option(GEOMETRY_PROPERTY) else {
            return;
        };

        let parsed = parse_geom_string(&geometry, self.screen_extent());

        if let Some(pos) = parsed.position {
            actions.push(WindowAction::Move {
                flip_x: pos.flip_x,
                flip_y: pos.flip_y,
                x: pos.x,
                y: pos.y,
            });
        }

        if let Some(dims) = parsed.dimensions {
            actions.push(WindowAction::Resize {
                width: dims.width,
                height: dims.height,
            });
        }
    }

    fn handle_fullscreen(&self, actions: &mut Vec<WindowAction>) {
        if self.option(FULLSCREEN_PROPERTY).as_deref()
            == Some(self.config.fullscreen.trigger_value.as_str())
        {
            actions.push(WindowAction::EnterFullscreen);
        }
    }

    fn handle_msg_level(&mut self, actions: &mut Vec<WindowAction>) {
        let default_level = self.config.logging.default_msg_level;
        self.log_levels = match self.option(MSG_LEVEL_PROPERTY) {
            Some(directive) => LogLevelList::parse(&directive, default_level),
            None => LogLevelList::new(default_level),
        };
        actions.push(WindowAction::RequestLogMessages(
            self.log_levels.min_level(),
        ));
    }

    fn handle_window_scale(&self, video: Option<VideoExtent>, dims: &mut ResolvedDimensions) {
        let Some(scale) = self.option(WINDOW_SCALE_PROPERTY) else {
            return;
        };

        match video.filter(|v| !v.is_degenerate()) {
            Some(video) => {
                if let Some(scaled) = scale_dimensions(&scale, video) {
                    *dims = scaled;
                }
            }
            None => debug!("SizingOrchestrator: window-scale set but video size unknown."),
        }
    }

    fn handle_autofit(&self, video: Option<VideoExtent>, dims: &mut ResolvedDimensions) {
        let target = self.option(AUTOFIT_PROPERTY);
        let larger = self.option(AUTOFIT_LARGER_PROPERTY);
        let smaller = self.option(AUTOFIT_SMALLER_PROPERTY);

        if target.is_none() && larger.is_none() && smaller.is_none() {
            return;
        }

        let constraints = AutofitConstraints::from_directives(
            target.as_deref(),
            smaller.as_deref(),
            larger.as_deref(),
            self.screen_extent(),
        );

        if let Some(fitted) = constraints.zip(video).and_then(|(c, v)| c.fit(v)) {
            *dims = fitted;
        }
    }
}

#[cfg(test)]
mod tests;

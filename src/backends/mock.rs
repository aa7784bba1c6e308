// src/backends/mock.rs

use crate::actions::{WindowAction, WindowSink};
use crate::backends::ScreenSource;
use crate::geometry::ScreenExtent;
use anyhow::{anyhow, Result};
use std::cell::Cell;

/// Records every dispatched action.
#[derive(Debug, Default)]
pub struct RecordingSink {
    actions: Vec<WindowAction>,
    pub fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> &[WindowAction] {
        &self.actions
    }

    pub fn take_actions(&mut self) -> Vec<WindowAction> {
        std::mem::take(&mut self.actions)
    }
}

impl WindowSink for RecordingSink {
    fn dispatch_actions(&mut self, actions: Vec<WindowAction>) -> Result<()> {
        if self.fail {
            return Err(anyhow!("sink rejected {} actions", actions.len()));
        }
        self.actions.extend(actions);
        Ok(())
    }
}

/// A screen whose size can change between queries, and that counts them.
#[derive(Debug)]
pub struct MockScreen {
    pub extent: Cell<Option<ScreenExtent>>,
    pub queries: Cell<usize>,
}

impl MockScreen {
    pub fn new(width: i32, height: i32) -> Self {
        MockScreen {
            extent: Cell::new(Some(ScreenExtent { width, height })),
            queries: Cell::new(0),
        }
    }

    pub fn unavailable() -> Self {
        MockScreen {
            extent: Cell::new(None),
            queries: Cell::new(0),
        }
    }
}

impl ScreenSource for MockScreen {
    fn screen_extent(&self) -> Result<ScreenExtent> {
        self.queries.set(self.queries.get() + 1);
        self.extent.get().ok_or_else(|| anyhow!("no display"))
    }
}

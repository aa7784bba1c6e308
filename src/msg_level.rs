// src/msg_level.rs

//! Per-module log level directives (`options/msg-level`).
//!
//! The directive is a comma separated list of `prefix=level` pairs. Every
//! valid pair raises the minimum severity that the media engine is asked to
//! forward; pairs other than `all` are also kept so forwarded messages can be
//! filtered per module.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Media engine log severities, from silent to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    No,
    Fatal,
    Error,
    Warn,
    Info,
    V,
    Debug,
    Trace,
}

const LEVEL_NAMES: [(&str, LogLevel); 8] = [
    ("no", LogLevel::No),
    ("fatal", LogLevel::Fatal),
    ("error", LogLevel::Error),
    ("warn", LogLevel::Warn),
    ("info", LogLevel::Info),
    ("v", LogLevel::V),
    ("debug", LogLevel::Debug),
    ("trace", LogLevel::Trace),
];

impl LogLevel {
    pub fn name(self) -> &'static str {
        LEVEL_NAMES
            .iter()
            .find(|(_, level)| *level == self)
            .map(|(name, _)| *name)
            .unwrap_or("no")
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LEVEL_NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, level)| *level)
            .ok_or_else(|| anyhow::anyhow!("unknown log level '{}'", s))
    }
}

/// A single `prefix=level` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLogLevel {
    pub prefix: String,
    pub level: LogLevel,
}

/// Ordered per-module levels plus the overall minimum severity to request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLevelList {
    entries: Vec<ModuleLogLevel>,
    min_level: LogLevel,
}

impl LogLevelList {
    /// An empty list that requests `default_level`.
    pub fn new(default_level: LogLevel) -> Self {
        LogLevelList {
            entries: Vec::new(),
            min_level: default_level,
        }
    }

    /// Builds a list from a msg-level directive. Pairs with an unknown level
    /// are ignored; the minimum never drops below `default_level`.
    pub fn parse(directive: &str, default_level: LogLevel) -> Self {
        let mut list = LogLevelList::new(default_level);

        for token in directive.split(',') {
            let (prefix, level_name) = token.split_once('=').unwrap_or((token, ""));
            let level = match level_name.parse::<LogLevel>() {
                Ok(level) => level,
                Err(e) => {
                    warn!("MsgLevel: ignoring '{}': {}", token, e);
                    continue;
                }
            };

            list.min_level = list.min_level.max(level);

            if prefix != "all" {
                list.entries.push(ModuleLogLevel {
                    prefix: prefix.to_string(),
                    level,
                });
            }
        }

        debug!(
            "MsgLevel: {} module entries, requesting '{}'",
            list.entries.len(),
            list.min_level
        );
        list
    }

    pub fn entries(&self) -> &[ModuleLogLevel] {
        &self.entries
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Whether a message from `module` at `level` should be passed on.
    ///
    /// The first entry whose prefix matches the module decides. Modules
    /// without an entry use the minimum level.
    pub fn should_forward(&self, module: &str, level: LogLevel) -> bool {
        match self.entries.iter().find(|e| module.starts_with(&e.prefix)) {
            Some(entry) => level <= entry.level,
            None => level <= self.min_level,
        }
    }
}

// src/properties.rs

//! String-keyed access to the media engine's properties.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Read access to media engine properties such as `options/geometry` or `dwidth`.
pub trait PropertyStore {
    /// Returns the property formatted as a string, or `None` if it does not exist.
    fn get_string(&self, name: &str) -> Option<String>;

    /// Returns the property as an integer.
    fn get_i64(&self, name: &str) -> Result<i64>;
}

/// A property snapshot held in memory, loadable from a JSON object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapPropertyStore {
    values: HashMap<String, Value>,
}

impl MapPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse property snapshot")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read property snapshot {}", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        self.values.insert(name.to_string(), value.into());
    }
}

impl PropertyStore for MapPropertyStore {
    fn get_string(&self, name: &str) -> Option<String> {
        match self.values.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Bool(flag) => Some(if *flag { "yes" } else { "no" }.to_string()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    fn get_i64(&self, name: &str) -> Result<i64> {
        let value = self
            .values
            .get(name)
            .ok_or_else(|| anyhow!("property '{}' not found", name))?;
        match value {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| anyhow!("property '{}' is not an integer: {}", name, n)),
            Value::String(s) => s
                .trim()
                .parse()
                .with_context(|| format!("property '{}' is not an integer", name)),
            other => Err(anyhow!("property '{}' has unsupported type: {}", name, other)),
        }
    }
}

//! Grid configuration.
//!
//! Loaded from TOML; every field has a default, so an empty document is a
//! valid configuration:
//!
//! ```toml
//! extent = 20
//! mode = 1
//! baseline = "grass"
//! node_weight = 1.0
//! node_bias = 0.0
//!
//! [[layout]]
//! mode = 1
//! rules = [{ shape = "row", y = 2, kind = "water" }]
//! ```

use crate::generators::ModeLayout;
use animat_core::error::{GridError, Result};
use animat_core::types::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on `extent`, keeping both layers comfortably in memory.
pub const MAX_EXTENT: i32 = 4096;

/// Configuration for a [`Grid`](crate::grid::Grid).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Largest valid coordinate; the grid holds `extent + 1` cells per axis.
    #[serde(default = "default_extent")]
    pub extent: i32,
    /// Generation mode active at construction.
    #[serde(default)]
    pub mode: GenerationMode,
    /// Kind synthesized when an empty cell is first looked up.
    #[serde(default)]
    pub baseline: TerrainKind,
    /// Weight given to every new compute node.
    #[serde(default = "default_node_weight")]
    pub node_weight: f64,
    /// Bias given to every new compute node.
    #[serde(default)]
    pub node_bias: f64,
    /// Per-mode painting rules for the layout generator.
    #[serde(default)]
    pub layout: Vec<ModeLayout>,
}

fn default_extent() -> i32 { 20 }
fn default_node_weight() -> f64 { 1.0 }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            extent: default_extent(),
            mode: GenerationMode::default(),
            baseline: TerrainKind::default(),
            node_weight: default_node_weight(),
            node_bias: 0.0,
            layout: Vec::new(),
        }
    }
}

impl GridConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: GridConfig =
            toml::from_str(text).map_err(|e| GridError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| GridError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GridError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_EXTENT).contains(&self.extent) {
            return Err(GridError::invalid_config(
                "extent",
                format!("{} is outside 1..={}", self.extent, MAX_EXTENT),
            ));
        }
        if !self.node_weight.is_finite() {
            return Err(GridError::invalid_config("node_weight", "must be finite"));
        }
        if !self.node_bias.is_finite() {
            return Err(GridError::invalid_config("node_bias", "must be finite"));
        }
        Ok(())
    }

    pub fn with_extent(mut self, extent: i32) -> Self {
        self.extent = extent;
        self
    }

    pub fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }
}

//! Animat Runtime Prelude: convenient imports for common usage.
//!
//! ```rust
//! use animat_runtime::prelude::*;
//! ```

// Re-export the grid
pub use crate::grid::Grid;

// Re-export configuration
pub use crate::config::{GridConfig, MAX_EXTENT};

// Re-export generators
pub use crate::generators::{LayoutGenerator, LayoutRule, ModeLayout, PassThrough};

// Re-export stats and snapshots
pub use crate::export::{CellSnapshot, GridSnapshot, GridStats};

// Re-export from core
pub use animat_core::prelude::*;

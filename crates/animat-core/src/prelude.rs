//! Animat Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use animat_core::prelude::*;
//! ```

pub use crate::types::{
    AnimatId, Coordinate, Entity, GenerationMode, TerrainKind,
    DEFAULT_IOTA, MAX_RECEPTIVE_FIELD, MOORE_OFFSETS,
};

pub use crate::node::ComputeNode;

pub use crate::space::ConfigurationSpace;
pub use crate::generator::TerrainGenerator;
pub use crate::animat::Animat;
pub use crate::journey::replay_journey;

pub use crate::error::{GridError, Result};

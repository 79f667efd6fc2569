//! # Animat
//!
//! Grid configuration spaces with a neuron layer, explored by animats.
//!
//! A [`Grid`](runtime::grid::Grid) is a bounded square of terrain cells.
//! Every occupied cell is mirrored by a compute node that an animat senses
//! through. Cells appear lazily, the first time anything looks at them, and
//! what they turn into is decided by a pluggable terrain generator.
//!
//! ## Quick Start
//!
//! ```rust
//! use animat::prelude::*;
//!
//! // A 21×21 grid whose row 2 materializes as water under mode 1
//! let generator = LayoutGenerator::new(TerrainKind::Grass).with_rule(
//!     GenerationMode::new(1),
//!     LayoutRule::Row { y: 2, kind: TerrainKind::Water },
//! );
//! let grid = Grid::new(generator, GenerationMode::new(1));
//!
//! // Walk a few cells
//! let mut animat = Wanderer::new(grid, Coordinate::new(1, 1));
//! animat.step_to(Coordinate::new(2, 2));
//! animat.step_to(Coordinate::new(3, 2));
//!
//! // Stimulate the water around the animat
//! let here = animat.position();
//! let touched = animat
//!     .space_mut()
//!     .set_iota_for_neighbors_of_type(TerrainKind::Water, 0.9, here);
//! assert!(touched > 0);
//!
//! // Bake the walk into the terrain
//! let trail = replay_journey(&mut animat);
//! assert_eq!(trail.stats().count_of(TerrainKind::Path), 3);
//! ```
//!
//! ## Architecture
//!
//! - [`animat_core`] - Shared types, the configuration-space, generator,
//!   and animat traits, journey replay
//! - [`animat_runtime`] - The grid, configuration, reference generators,
//!   stats and snapshots
//! - [`animat_agents`] - Reference animats
//!
//! ## Key Concepts
//!
//! | Term | Meaning |
//! |------|---------|
//! | Entity | Typed terrain occupying one cell |
//! | Compute node | Neuron mirroring one cell: value, weight, bias, activation |
//! | Receptive field | Up to eight neighboring nodes a node senses |
//! | Iota | Stimulus carried by a cell, spread to same-kind neighbors |
//! | Generation mode | Which terrain-painting policy new cells go through |

// Re-export all subcrates
pub use animat_core as core;
pub use animat_runtime as runtime;
pub use animat_agents as agents;

/// Prelude module for convenient imports.
///
/// ```rust
/// use animat::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use animat_core::types::{
        AnimatId, Coordinate, Entity, GenerationMode, TerrainKind,
        DEFAULT_IOTA, MAX_RECEPTIVE_FIELD, MOORE_OFFSETS,
    };
    pub use animat_core::node::ComputeNode;

    // Core traits
    pub use animat_core::space::ConfigurationSpace;
    pub use animat_core::generator::TerrainGenerator;
    pub use animat_core::animat::Animat;
    pub use animat_core::journey::replay_journey;

    // Error types
    pub use animat_core::error::{GridError, Result};

    // Runtime
    pub use animat_runtime::grid::Grid;
    pub use animat_runtime::config::GridConfig;
    pub use animat_runtime::generators::{LayoutGenerator, LayoutRule, ModeLayout, PassThrough};
    pub use animat_runtime::export::{GridSnapshot, GridStats};

    // Agents
    pub use animat_agents::wanderer::Wanderer;
}

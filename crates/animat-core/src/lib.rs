//! # Animat Core
//!
//! Core traits and types for animat configuration spaces.
//!
//! A configuration space is a bounded square grid with two parallel
//! layers keyed by the same coordinates:
//!
//! - **Entities**: typed terrain (grass, water, stone, …) carrying a
//!   scalar stimulus, the *iota*
//! - **Compute nodes**: neurons mirroring each occupied cell, with
//!   activation state and a receptive field of neighboring nodes
//!
//! Animats explore the space through the node layer and leave trails in
//! the entity layer. What a newly placed cell turns into is decided by a
//! pluggable [`TerrainGenerator`](generator::TerrainGenerator).
//!
//! ## Quick Start
//!
//! ```rust
//! use animat_core::prelude::*;
//!
//! let water = Entity::new(TerrainKind::Water, 3, 3);
//! let node = ComputeNode::bound_to(water, 1.0, 0.0);
//! assert_eq!(node.position, Coordinate::new(3, 3));
//! ```

pub mod types;
pub mod node;
pub mod space;
pub mod generator;
pub mod animat;
pub mod journey;
pub mod error;
pub mod prelude;

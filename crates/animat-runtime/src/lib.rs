//! # Animat Runtime
//!
//! The concrete configuration space and its collaborators.
//!
//! The [`Grid`](grid::Grid) owns the terrain and the neuron layer that
//! mirrors it. It materializes terrain lazily as animats look around,
//! builds receptive fields, and propagates stimulus between cells of the
//! same kind. Terrain generators and configuration live alongside it.

pub mod grid;
pub mod config;
pub mod generators;
pub mod export;
pub mod prelude;

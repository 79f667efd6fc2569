//! # Animat Agents
//!
//! Reference animat implementations.
//!
//! - **Wanderer**: steered step by step by its caller, remembering every
//!   cell it stood on so the journey can later be replayed as a trail

pub mod wanderer;
pub mod prelude;

//! Animat Agents Prelude: convenient imports for common usage.
//!
//! ```rust
//! use animat_agents::prelude::*;
//! ```

pub use crate::wanderer::Wanderer;

pub use animat_core::prelude::*;

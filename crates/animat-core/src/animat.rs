//! Animat: the agent that walks a configuration space.
//!
//! The traversal policy lives with each implementation. What the space
//! needs from an animat is its history of visited cells and access to the
//! animat's own view of the world.

use crate::space::ConfigurationSpace;
use crate::types::*;

/// An agent exploring its own configuration space.
pub trait Animat {
    /// The space this animat walks.
    type Space: ConfigurationSpace;

    fn id(&self) -> AnimatId;

    /// Current cell.
    fn position(&self) -> Coordinate;

    /// Visited entities, oldest first; the last element is the top of the stack.
    fn history(&self) -> &[Entity];

    fn space(&self) -> &Self::Space;

    /// Borrow the history stack and the space together, for callers that
    /// pop from one while writing to the other.
    fn journey_mut(&mut self) -> (&mut Vec<Entity>, &mut Self::Space);
}

//! Wanderer: a manually steered reference animat.
//!
//! The wanderer carries its own configuration space and a stack of every
//! cell it has stood on. It makes no decisions: callers choose each step,
//! and the wanderer only refuses steps that are not to an adjacent in-range
//! cell. Every cell it looks at or steps onto is materialized first.

use animat_core::animat::Animat;
use animat_core::space::ConfigurationSpace;
use animat_core::types::*;
use tracing::trace;

/// Reference animat over any configuration space.
#[derive(Debug)]
pub struct Wanderer<S> {
    id: AnimatId,
    position: Coordinate,
    history: Vec<Entity>,
    space: S,
}

impl<S: ConfigurationSpace> Wanderer<S> {
    /// Start at `start`, recording the starting cell as the first visit.
    ///
    /// An out-of-range start leaves the history empty and the wanderer
    /// stranded: every later step is refused.
    pub fn new(mut space: S, start: Coordinate) -> Self {
        let history = space.ensure_materialized(start).into_iter().collect();
        Self {
            id: AnimatId::new(),
            position: start,
            history,
            space,
        }
    }

    /// Resume with a known history; the position is the top of the stack.
    pub fn with_history(space: S, history: Vec<Entity>) -> Self {
        let position = history
            .last()
            .map(|e| e.position)
            .unwrap_or_else(|| Coordinate::new(0, 0));
        Self {
            id: AnimatId::new(),
            position,
            history,
            space,
        }
    }

    /// Step onto an adjacent cell (diagonals included).
    ///
    /// Returns the entity stepped onto, or `None` if the step was refused.
    /// A wanderer started off the grid never moves.
    pub fn step_to(&mut self, to: Coordinate) -> Option<Entity> {
        if !self.space.in_range(self.position) {
            trace!(from = %self.position, to = %to, "step refused: off the grid");
            return None;
        }
        let dx = to.x.abs_diff(self.position.x);
        let dy = to.y.abs_diff(self.position.y);
        if dx > 1 || dy > 1 || (dx, dy) == (0, 0) {
            trace!(from = %self.position, to = %to, "step refused: not adjacent");
            return None;
        }
        let entity = self.space.ensure_materialized(to)?;
        self.position = to;
        self.history.push(entity);
        Some(entity)
    }

    /// Everything within one cell of the wanderer, materialized.
    pub fn surroundings(&mut self) -> Vec<Entity> {
        self.space.explore_neighborhood(self.position)
    }

    pub fn space_mut(&mut self) -> &mut S {
        &mut self.space
    }

    pub fn into_space(self) -> S {
        self.space
    }
}

impl<S: ConfigurationSpace> Animat for Wanderer<S> {
    type Space = S;

    fn id(&self) -> AnimatId {
        self.id
    }

    fn position(&self) -> Coordinate {
        self.position
    }

    fn history(&self) -> &[Entity] {
        &self.history
    }

    fn space(&self) -> &S {
        &self.space
    }

    fn journey_mut(&mut self) -> (&mut Vec<Entity>, &mut S) {
        (&mut self.history, &mut self.space)
    }
}

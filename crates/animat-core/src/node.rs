//! ComputeNode: the neuron that mirrors one grid cell.
//!
//! Each occupied cell of a configuration space carries exactly one node.
//! The node keeps a copy of the entity at its position so that sensing
//! code can read terrain through the node layer alone, plus the usual
//! activation state. Its receptive field lists the positions of the
//! neighboring nodes it senses; the nodes themselves stay owned by the
//! space.

use crate::types::*;
use serde::{Deserialize, Serialize};

/// A position-bound computational unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeNode {
    pub position: Coordinate,
    pub weight: f64,
    pub bias: f64,
    /// Input value, driven by iota propagation or direct writes.
    pub current_value: f64,
    /// Output of the most recent `activate` call.
    pub activation: f64,
    entity: Option<Entity>,
    receptive_field: Vec<Coordinate>,
}

impl ComputeNode {
    pub fn new(position: Coordinate, weight: f64, bias: f64) -> Self {
        Self {
            position,
            weight,
            bias,
            current_value: 0.0,
            activation: 0.0,
            entity: None,
            receptive_field: Vec::with_capacity(MAX_RECEPTIVE_FIELD),
        }
    }

    /// A node bound to `entity`, placed at the entity's position.
    pub fn bound_to(entity: Entity, weight: f64, bias: f64) -> Self {
        let mut node = Self::new(entity.position, weight, bias);
        node.entity = Some(entity);
        node
    }

    pub fn entity(&self) -> Option<&Entity> {
        self.entity.as_ref()
    }

    pub fn set_entity(&mut self, entity: Option<Entity>) {
        self.entity = entity;
    }

    /// Positions of the sensed neighbor nodes, in the order they were added.
    pub fn receptive_field(&self) -> &[Coordinate] {
        &self.receptive_field
    }

    pub fn clear_receptive_field(&mut self) {
        self.receptive_field.clear();
    }

    /// Append a neighbor. Returns `false` once the field is full.
    pub fn add_to_receptive_field(&mut self, neighbor: Coordinate) -> bool {
        if self.receptive_field.len() >= MAX_RECEPTIVE_FIELD {
            return false;
        }
        self.receptive_field.push(neighbor);
        true
    }

    pub fn receptive_field_is_full(&self) -> bool {
        self.receptive_field.len() >= MAX_RECEPTIVE_FIELD
    }

    /// Push a stimulus into the node: the input value follows the iota.
    pub fn set_iota(&mut self, iota: f64) {
        self.current_value = iota;
        if let Some(entity) = self.entity.as_mut() {
            entity.iota = iota;
        }
    }

    /// Logistic activation of the weighted input plus bias.
    ///
    /// The result is stored in `activation` and returned.
    pub fn activate(&mut self) -> f64 {
        let z = self.weight * self.current_value + self.bias;
        self.activation = sigmoid(z);
        self.activation
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

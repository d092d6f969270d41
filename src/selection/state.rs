// Selection state resource
use bevy::prelude::*;

/// Trigger-driven interaction phase of the designated controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrabMode {
    #[default]
    Idle,
    Holding, // Trigger is down
}

/// Selection state resource - at most one selected object at a time
#[derive(Resource, Debug, Default)]
pub struct SelectionState {
    pub selected: Option<Entity>,
    pub held: bool,                // Selected object is parented under the anchor
    pub mode: GrabMode,
    pub reel_distance: f32,        // Current offset of the held object along the ray
}

impl SelectionState {
    /// Entity currently parented under the anchor, if any
    pub fn held_entity(&self) -> Option<Entity> {
        self.selected.filter(|_| self.held)
    }
}

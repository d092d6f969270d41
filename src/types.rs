// Shared components and events for the ray reel interaction
use bevy::prelude::*;
use std::time::Duration;

/// Which hand a tracked controller belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Handedness {
    Left,
    #[default]
    Right,
}

/// A tracked hand controller. The host drives its `Transform` every frame;
/// forward (-Z) is the pointing direction.
#[derive(Component, Debug)]
pub struct HandController {
    pub hand: Handedness,
    pub connected: bool,
}

impl HandController {
    pub fn new(hand: Handedness) -> Self {
        Self { hand, connected: false }
    }
}

/// Digital trigger with a per-frame edge flag
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TriggerState {
    pub pressed: bool,
    pub changed: bool,
}

impl TriggerState {
    pub fn just_pressed(&self) -> bool {
        self.changed && self.pressed
    }

    pub fn just_released(&self) -> bool {
        self.changed && !self.pressed
    }
}

/// Per-frame input sampled from a hand controller
#[derive(Component, Debug, Default)]
pub struct ControllerInput {
    pub trigger: TriggerState,
    pub thumbstick: f32, // One-axis reel input in [-1, 1], negative = pushed forward
}

impl ControllerInput {
    /// Record the current trigger level. `changed` is only raised when the
    /// level differs from the previous sample, so holding the trigger yields a
    /// single press edge.
    pub fn set_trigger(&mut self, pressed: bool) {
        if self.trigger.pressed != pressed {
            self.trigger.pressed = pressed;
            self.trigger.changed = true;
        }
    }

    pub fn set_thumbstick(&mut self, axis: f32) {
        self.thumbstick = axis.clamp(-1.0, 1.0);
    }

    /// Raise an edge when the trigger level disagrees with what the
    /// interaction last acted on (`acted_pressed`)
    pub fn reconcile_trigger(&mut self, acted_pressed: bool) {
        if self.trigger.pressed != acted_pressed {
            self.trigger.changed = true;
        }
    }

    pub fn clear_edges(&mut self) {
        self.trigger.changed = false;
    }
}

/// Marker: mesh can be picked and grabbed by the pointer ray
#[derive(Component, Debug, Default)]
pub struct Grabbable;

/// Marker: entity is outlined as the current selection
#[derive(Component, Debug)]
pub struct Highlighted;

/// Manipulation pivot parented to the designated controller
#[derive(Component, Debug)]
pub struct SelectionAnchor;

/// Color state of the pointer line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerMode {
    #[default]
    Idle,
    Holding,
}

/// The visible ray segment for the designated hand
#[derive(Component, Debug, Default)]
pub struct PointerVisual {
    pub mode: PointerMode,
}

/// Host notification: a controller for `hand` became available
#[derive(Event, Debug, Clone, Copy)]
pub struct ControllerConnected {
    pub hand: Handedness,
}

/// Host notification: the controller for `hand` went away
#[derive(Event, Debug, Clone, Copy)]
pub struct ControllerDisconnected {
    pub hand: Handedness,
}

/// Request for a vibration pulse on a controller
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct HapticPulse {
    pub controller: Entity,
    pub hand: Handedness,
    pub intensity: f32,
    pub duration: Duration,
}

// Runtime interaction settings, seeded from constants.rs
use bevy::prelude::*;
use std::time::Duration;

use crate::constants::*;
use crate::types::Handedness;

/// Optional bounds on how far the held object sits along the ray.
/// Both `None` means the reel is unclamped: an object can be pulled through
/// the controller or pushed out indefinitely.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReelLimits {
    pub min_distance: Option<f32>,
    pub max_distance: Option<f32>,
}

impl ReelLimits {
    pub fn clamp(&self, distance: f32) -> f32 {
        let mut d = distance;
        if let Some(max) = self.max_distance {
            d = d.min(max);
        }
        if let Some(min) = self.min_distance {
            d = d.max(min);
        }
        d
    }
}

/// Insert before adding `RayReelPlugin` to override the defaults
#[derive(Resource, Debug, Clone)]
pub struct InteractionSettings {
    pub hand: Handedness,          // Only this hand selects and reels
    pub ray_length: f32,
    pub reel_speed: f32,
    pub reel_limits: ReelLimits,
    pub haptic_intensity: f32,
    pub haptic_duration: Duration,
    pub pointer_idle_color: Color,
    pub pointer_holding_color: Color,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            hand: Handedness::Right,
            ray_length: RAY_LENGTH,
            reel_speed: REEL_SPEED,
            reel_limits: ReelLimits::default(),
            haptic_intensity: HAPTIC_INTENSITY,
            haptic_duration: Duration::from_millis(HAPTIC_DURATION_MS),
            pointer_idle_color: POINTER_IDLE_COLOR,
            pointer_holding_color: POINTER_HOLDING_COLOR,
        }
    }
}

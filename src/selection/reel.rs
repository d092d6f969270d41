// Thumbstick reel: push/pull the held object along the pointer ray
use bevy::prelude::*;

use crate::rig::{designated_controller, ControllerQuery};
use crate::settings::InteractionSettings;
use crate::types::*;

use super::state::SelectionState;

/// Signed distance to move along the ray's forward axis this frame.
/// Pushing the stick forward reports a negative axis and moves the object away.
#[inline]
pub fn reel_displacement(axis: f32, delta_secs: f32, speed: f32) -> f32 {
    -axis * delta_secs * speed
}

/// System: Move the held object along the controller's forward direction
pub fn thumbstick_reel_system(
    time: Res<Time>,
    mut selection: ResMut<SelectionState>,
    settings: Res<InteractionSettings>,
    controllers: ControllerQuery,
    mut held_query: Query<&mut Transform, With<Grabbable>>,
) {
    let Some(held) = selection.held_entity() else { return };
    let Some((_, input, controller_transform)) =
        designated_controller(&controllers, settings.hand)
    else {
        return;
    };

    let displacement = reel_displacement(input.thumbstick, time.delta_secs(), settings.reel_speed);
    if displacement == 0.0 {
        return;
    }

    let target = settings.reel_limits.clamp(selection.reel_distance + displacement);
    let applied = target - selection.reel_distance;
    if applied != displacement {
        debug!("Reel clamped at {:.2}m", target);
    }

    let Ok(mut transform) = held_query.get_mut(held) else { return };

    // The held object lives in anchor space, which shares the controller's rotation and scale
    let world_delta = controller_transform.forward() * applied;
    transform.translation += controller_transform
        .affine()
        .inverse()
        .transform_vector3(world_delta);
    selection.reel_distance = target;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ReelLimits;

    #[test]
    fn centered_stick_never_moves() {
        for dt in [0.0, 0.016, 0.5, 10.0] {
            assert_eq!(reel_displacement(0.0, dt, 5.0), 0.0);
        }
    }

    #[test]
    fn full_pull_moves_toward_controller_at_reel_speed() {
        let d = reel_displacement(1.0, 0.25, 4.0);
        assert!((d + 1.0).abs() < 1e-6);
    }

    #[test]
    fn full_push_moves_away() {
        assert!(reel_displacement(-1.0, 0.1, 5.0) > 0.0);
    }

    #[test]
    fn limits_default_to_unclamped() {
        let limits = ReelLimits::default();
        assert_eq!(limits.clamp(-3.0), -3.0);
        assert_eq!(limits.clamp(1.0e4), 1.0e4);
    }

    #[test]
    fn limits_clamp_both_ends() {
        let limits = ReelLimits {
            min_distance: Some(0.5),
            max_distance: Some(8.0),
        };
        assert_eq!(limits.clamp(0.1), 0.5);
        assert_eq!(limits.clamp(9.0), 8.0);
        assert_eq!(limits.clamp(3.0), 3.0);
    }
}

// Desktop emulation host: mouse/keyboard/gamepad stand in for a tracked right-hand controller
use bevy::input::gamepad::{GamepadRumbleIntensity, GamepadRumbleRequest};
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::input::InputSystem;
use bevy::picking::mesh_picking::ray_cast::MeshRayCast;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::*;
use crate::raycast::cast_ray;
use crate::settings::InteractionSettings;
use crate::types::*;
use crate::InteractionSet;

/// Marker for the camera the emulated controller is aimed through
#[derive(Component)]
pub struct EmulatorCamera;

pub struct DesktopEmulationPlugin;

impl Plugin for DesktopEmulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostStartup, announce_emulated_controller)
            .add_systems(PreUpdate, (
                emulated_pose_system,
                emulated_buttons_system,
                connection_toggle_system,
            ).after(InputSystem))
            .add_systems(Update, rumble_gamepads_system.after(InteractionSet::Reel));
    }
}

/// System: The emulated device is present from the first frame
fn announce_emulated_controller(
    settings: Res<InteractionSettings>,
    mut connected: EventWriter<ControllerConnected>,
) {
    connected.write(ControllerConnected { hand: settings.hand });
}

/// System: Place the controller beside the camera and aim it at whatever the
/// cursor points at
fn emulated_pose_system(
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), (With<EmulatorCamera>, Without<HandController>)>,
    mut controllers: Query<(&HandController, &mut Transform)>,
    mut ray_cast: MeshRayCast,
    grabbables: Query<(), With<Grabbable>>,
    settings: Res<InteractionSettings>,
) {
    let Ok(window) = window_query.single() else { return };
    let Ok((camera, camera_transform)) = camera_query.single() else { return };
    let Some(cursor_pos) = window.cursor_position() else { return };
    let Ok(cursor_ray) = camera.viewport_to_world(camera_transform, cursor_pos) else { return };

    // Converge on the surface under the cursor so the hand ray hits the same object
    let target = cast_ray(&mut ray_cast, cursor_ray, settings.ray_length, &grabbables)
        .map(|hit| cursor_ray.get_point(hit.distance))
        .unwrap_or_else(|| cursor_ray.get_point(settings.ray_length));

    for (controller, mut transform) in controllers.iter_mut() {
        if controller.hand != settings.hand {
            continue;
        }
        let position = camera_transform.transform_point(EMULATED_HAND_OFFSET);
        *transform = Transform::from_translation(position).looking_at(target, Vec3::Y);
    }
}

/// System: Map mouse, keyboard and gamepad to trigger and thumbstick
fn emulated_buttons_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut scroll_events: EventReader<MouseWheel>,
    gamepads: Query<&Gamepad>,
    settings: Res<InteractionSettings>,
    mut controllers: Query<(&HandController, &mut ControllerInput)>,
) {
    let mut trigger = mouse_button.pressed(MouseButton::Left);
    let mut axis = 0.0;

    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        axis -= KEYBOARD_REEL_AXIS; // Push away
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        axis += KEYBOARD_REEL_AXIS; // Pull in
    }

    for scroll in scroll_events.read() {
        let lines = match scroll.unit {
            MouseScrollUnit::Line => scroll.y,
            MouseScrollUnit::Pixel => scroll.y * 0.1,
        };
        axis -= lines * MOUSE_WHEEL_REEL_STEP;
    }

    for gamepad in gamepads.iter() {
        let trigger_level = gamepad.get(GamepadButton::RightTrigger2).unwrap_or(0.0);
        trigger |= trigger_level > GAMEPAD_TRIGGER_THRESHOLD;
        // Stick up is positive; a forward push must reel away
        axis -= gamepad.left_stick().y;
    }

    for (controller, mut input) in controllers.iter_mut() {
        if controller.hand != settings.hand {
            continue;
        }
        input.set_trigger(trigger);
        input.set_thumbstick(axis);
    }
}

/// System: `C` plugs/unplugs the emulated controller
fn connection_toggle_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<InteractionSettings>,
    controllers: Query<&HandController>,
    mut connected: EventWriter<ControllerConnected>,
    mut disconnected: EventWriter<ControllerDisconnected>,
) {
    if !keyboard.just_pressed(KeyCode::KeyC) {
        return;
    }
    let Some(controller) = controllers.iter().find(|c| c.hand == settings.hand) else { return };

    if controller.connected {
        disconnected.write(ControllerDisconnected { hand: settings.hand });
    } else {
        connected.write(ControllerConnected { hand: settings.hand });
    }
}

/// System: Turn haptic pulses into weak-motor rumble on every gamepad
fn rumble_gamepads_system(
    mut pulses: EventReader<HapticPulse>,
    gamepads: Query<Entity, With<Gamepad>>,
    mut rumble: EventWriter<GamepadRumbleRequest>,
) {
    for pulse in pulses.read() {
        for gamepad in gamepads.iter() {
            rumble.write(GamepadRumbleRequest::Add {
                gamepad,
                intensity: GamepadRumbleIntensity::weak_motor(pulse.intensity),
                duration: pulse.duration,
            });
        }
    }
}

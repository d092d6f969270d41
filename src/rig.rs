// Controller rig: tracked hands, manipulation anchor, pointer line, connection handling
use bevy::prelude::*;

use crate::selection::{GrabMode, SelectionState};
use crate::settings::InteractionSettings;
use crate::types::*;

/// Controllers are root entities, so their `Transform` is the world pose the
/// host wrote this frame. Disjoint from anchors and grabbables so systems can
/// also write those transforms.
pub type ControllerQuery<'w, 's> = Query<
    'w,
    's,
    (Entity, &'static HandController, &'static ControllerInput, &'static Transform),
    (Without<SelectionAnchor>, Without<Grabbable>),
>;

/// System: Spawn both hand controllers, the anchor under the designated hand,
/// and the (initially hidden) pointer line. Runs once at startup.
pub fn spawn_rig(mut commands: Commands, settings: Res<InteractionSettings>) {
    for hand in [Handedness::Left, Handedness::Right] {
        let controller = commands
            .spawn((
                Name::new(format!("{hand:?} controller")),
                HandController::new(hand),
                ControllerInput::default(),
                Transform::default(),
                Visibility::default(),
            ))
            .id();

        if hand == settings.hand {
            commands.spawn((
                Name::new("Selection anchor"),
                SelectionAnchor,
                Transform::default(),
                Visibility::default(),
                ChildOf(controller),
            ));
        }
    }

    commands.spawn((
        Name::new("Pointer"),
        PointerVisual::default(),
        Transform::default(),
        Visibility::Hidden,
    ));
}

/// System: Track controller connection and attach/detach the pointer.
/// Selection state is never changed here.
pub fn controller_connection_system(
    mut commands: Commands,
    mut connected_events: EventReader<ControllerConnected>,
    mut disconnected_events: EventReader<ControllerDisconnected>,
    mut controllers: Query<(Entity, &mut HandController, &mut ControllerInput)>,
    pointer_query: Query<Entity, With<PointerVisual>>,
    selection: Res<SelectionState>,
    settings: Res<InteractionSettings>,
) {
    for event in connected_events.read() {
        let Some((entity, mut controller, mut input)) = controllers
            .iter_mut()
            .find(|(_, c, _)| c.hand == event.hand)
        else {
            continue;
        };
        controller.connected = true;
        info!("{:?} controller connected", event.hand);

        if event.hand == settings.hand {
            // Trigger edges seen while disconnected were dropped; catch up with the level
            input.reconcile_trigger(selection.mode == GrabMode::Holding);
            for pointer in pointer_query.iter() {
                commands
                    .entity(pointer)
                    .insert((ChildOf(entity), Visibility::Visible));
            }
        }
    }

    for event in disconnected_events.read() {
        let Some((_, mut controller, mut input)) = controllers
            .iter_mut()
            .find(|(_, c, _)| c.hand == event.hand)
        else {
            continue;
        };
        controller.connected = false;
        // Keep the trigger level: a release is only seen once the device reports again
        input.thumbstick = 0.0;
        info!("{:?} controller disconnected", event.hand);

        if event.hand == settings.hand {
            for pointer in pointer_query.iter() {
                commands
                    .entity(pointer)
                    .remove::<ChildOf>()
                    .insert(Visibility::Hidden);
            }
        }
    }
}

/// System: Clear per-frame trigger edges once every consumer has run
pub fn clear_input_edges(mut inputs: Query<&mut ControllerInput>) {
    for mut input in inputs.iter_mut() {
        input.clear_edges();
    }
}

/// Find the connected controller for `hand` along with its current world pose
pub fn designated_controller<'a>(
    controllers: &'a ControllerQuery,
    hand: Handedness,
) -> Option<(Entity, &'a ControllerInput, GlobalTransform)> {
    controllers
        .iter()
        .find(|(_, c, _, _)| c.hand == hand && c.connected)
        .map(|(entity, _, input, transform)| (entity, input, GlobalTransform::from(*transform)))
}

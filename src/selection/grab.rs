// Trigger handling: pick, grab and release
use bevy::picking::mesh_picking::ray_cast::MeshRayCast;
use bevy::prelude::*;

use crate::haptics::feedback_pulse;
use crate::raycast::cast_ray;
use crate::rig::{designated_controller, ControllerQuery};
use crate::settings::InteractionSettings;
use crate::types::*;

use super::state::{GrabMode, SelectionState};

/// System: React to trigger edges on the designated controller.
///
/// Press: cast the pointer ray, swap the selection to the nearest hit and
/// parent it under the anchor. Release: drop the held object back into
/// world space. The selection itself survives a release.
pub fn trigger_grab_system(
    mut commands: Commands,
    mut selection: ResMut<SelectionState>,
    settings: Res<InteractionSettings>,
    controllers: ControllerQuery,
    mut anchors: Query<(Entity, &mut Transform, &ChildOf), With<SelectionAnchor>>,
    mut ray_cast: MeshRayCast,
    pickable: Query<(), With<Grabbable>>,
    grabbables: Query<&GlobalTransform, With<Grabbable>>,
    mut pointers: Query<&mut PointerVisual>,
    mut haptics: EventWriter<HapticPulse>,
) {
    // Selected object was despawned elsewhere
    if let Some(selected) = selection.selected {
        if grabbables.get(selected).is_err() {
            debug!("Selected entity {:?} is gone, clearing selection", selected);
            let mode = selection.mode;
            *selection = SelectionState { mode, ..default() };
        }
    }

    let Some((controller, input, controller_transform)) =
        designated_controller(&controllers, settings.hand)
    else {
        return;
    };

    if input.trigger.just_pressed() {
        selection.mode = GrabMode::Holding;
        // Pointer shows the trigger state, so it turns active even when the ray misses
        set_pointer_mode(&mut pointers, PointerMode::Holding);

        let ray = Ray3d::new(controller_transform.translation(), controller_transform.forward());
        let Some(hit) = cast_ray(&mut ray_cast, ray, settings.ray_length, &pickable) else {
            debug!("Pointer ray hit nothing");
            return;
        };

        let Some((anchor, mut anchor_transform, _)) = anchors
            .iter_mut()
            .find(|(_, _, child_of)| child_of.parent() == controller)
        else {
            warn!("No selection anchor under {:?} controller", settings.hand);
            return;
        };

        // Only one selection at a time: drop the previous one first
        if let Some(previous) = selection.selected {
            if selection.held {
                if let Ok(previous_global) = grabbables.get(previous) {
                    detach_in_place(&mut commands, previous, previous_global);
                }
            }
            commands.entity(previous).remove::<Highlighted>();
        }

        *anchor_transform = Transform::from_translation(Vec3::NEG_Z * hit.distance);
        let anchor_global = controller_transform.mul_transform(*anchor_transform);

        let Ok(hit_global) = grabbables.get(hit.entity) else { return };
        attach_in_place(&mut commands, hit.entity, hit_global, anchor, &anchor_global);
        commands.entity(hit.entity).insert(Highlighted);

        *selection = SelectionState {
            selected: Some(hit.entity),
            held: true,
            mode: GrabMode::Holding,
            reel_distance: hit.distance,
        };
        haptics.write(feedback_pulse(controller, settings.hand, &settings));
        info!("Grabbed {:?} at {:.2}m", hit.entity, hit.distance);
    } else if input.trigger.just_released() {
        selection.mode = GrabMode::Idle;
        set_pointer_mode(&mut pointers, PointerMode::Idle);

        let Some(held) = selection.held_entity() else { return };
        if let Ok(held_global) = grabbables.get(held) {
            detach_in_place(&mut commands, held, held_global);
        }
        selection.held = false;
        haptics.write(feedback_pulse(controller, settings.hand, &settings));
        info!("Released {:?}", held);
    }
}

/// Parent `entity` under `anchor` while keeping its current world transform
fn attach_in_place(
    commands: &mut Commands,
    entity: Entity,
    entity_global: &GlobalTransform,
    anchor: Entity,
    anchor_global: &GlobalTransform,
) {
    let local = entity_global.reparented_to(anchor_global);
    commands.entity(entity).insert((ChildOf(anchor), local));
}

/// Unparent `entity`, baking its world transform into its local one
fn detach_in_place(commands: &mut Commands, entity: Entity, entity_global: &GlobalTransform) {
    commands
        .entity(entity)
        .remove::<ChildOf>()
        .insert(entity_global.compute_transform());
}

fn set_pointer_mode(pointers: &mut Query<&mut PointerVisual>, mode: PointerMode) {
    for mut pointer in pointers.iter_mut() {
        if pointer.mode != mode {
            pointer.mode = mode;
        }
    }
}

// Visual feedback: pointer line mesh/color and highlight outlines
use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use bevy::render::primitives::Aabb;

use crate::constants::*;
use crate::settings::InteractionSettings;
use crate::types::*;

/// System: Give the rig's pointer entity an unlit line mesh along -Z.
/// Runs at startup after the rig is spawned.
pub fn dress_pointer_system(
    mut commands: Commands,
    pointers: Query<Entity, With<PointerVisual>>,
    settings: Res<InteractionSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Cuboid::new(POINTER_THICKNESS, POINTER_THICKNESS, settings.ray_length));
    for pointer in pointers.iter() {
        let material = materials.add(StandardMaterial {
            base_color: settings.pointer_idle_color,
            unlit: true,
            ..default()
        });
        commands.entity(pointer).insert((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material),
            // Line starts at the controller and extends forward
            Transform::from_xyz(0.0, 0.0, -settings.ray_length * 0.5),
            NotShadowCaster,
            NotShadowReceiver,
        ));
    }
}

/// System: Recolor the pointer when its mode changes
pub fn pointer_color_system(
    pointers: Query<(&PointerVisual, &MeshMaterial3d<StandardMaterial>), Changed<PointerVisual>>,
    settings: Res<InteractionSettings>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (pointer, material_handle) in pointers.iter() {
        let Some(material) = materials.get_mut(&material_handle.0) else { continue };
        material.base_color = match pointer.mode {
            PointerMode::Idle => settings.pointer_idle_color,
            PointerMode::Holding => settings.pointer_holding_color,
        };
    }
}

/// System: Outline highlighted objects with a gizmo box around their mesh bounds
pub fn highlight_outline_system(
    mut gizmos: Gizmos,
    highlighted: Query<(&GlobalTransform, &Aabb), With<Highlighted>>,
) {
    for (global, aabb) in highlighted.iter() {
        let size = Vec3::from(aabb.half_extents) * 2.0 + Vec3::splat(HIGHLIGHT_PADDING * 2.0);
        let bounds = Transform::from_translation(aabb.center.into()).with_scale(size);
        gizmos.cuboid(global.compute_transform() * bounds, HIGHLIGHT_COLOR);
    }
}

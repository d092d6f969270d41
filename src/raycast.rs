// Ray picking against grabbable meshes
use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings, RayCastVisibility};
use bevy::prelude::*;

use crate::types::Grabbable;

/// Nearest intersection returned by `cast_ray`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub distance: f32,
}

/// Cast `ray` against grabbable meshes and return the closest hit within
/// `max_length`, or `None` when nothing is in reach.
///
/// Meshes without `Grabbable` are skipped entirely: they neither get picked
/// nor block the ray. Visibility is ignored so headless worlds pick too.
pub fn cast_ray(
    ray_cast: &mut MeshRayCast,
    ray: Ray3d,
    max_length: f32,
    grabbables: &Query<(), With<Grabbable>>,
) -> Option<RayHit> {
    let filter = |entity: Entity| grabbables.contains(entity);
    let settings = MeshRayCastSettings::default()
        .with_filter(&filter)
        .with_visibility(RayCastVisibility::Any);

    ray_cast
        .cast_ray(ray, &settings)
        .first()
        .map(|(entity, hit)| RayHit {
            entity: *entity,
            distance: hit.distance,
        })
        .filter(|hit| hit.distance <= max_length)
}

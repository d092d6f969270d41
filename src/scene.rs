// Demo scene: floor, lights, viewer camera and a scatter of grabbable props
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::PI;

use crate::constants::*;
use crate::desktop::EmulatorCamera;
use crate::types::Grabbable;

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Sun
    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform {
            translation: Vec3::new(0.0, 10.0, 0.0),
            rotation: Quat::from_rotation_x(-PI / 3.0),
            ..default()
        },
    ));

    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.6, 0.6, 0.7),
        brightness: 300.0,
        affects_lightmapped_meshes: false,
    });

    // Viewer at standing eye height
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 1.6, 0.0).looking_at(Vec3::new(0.0, 1.0, -4.0), Vec3::Y),
        EmulatorCamera,
    ));

    // Floor
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(30.0, 30.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.32, 0.35))),
        Transform::default(),
    ));

    let mut rng = rand::thread_rng();
    for i in 0..DEMO_OBJECT_COUNT {
        // Scatter in the half space in front of the viewer
        let angle = rng.gen_range(-PI * 0.4..PI * 0.4);
        let distance = rng.gen_range(DEMO_MIN_DISTANCE..DEMO_SCATTER_RADIUS);
        let height = rng.gen_range(0.5..2.2);
        let position = Vec3::new(angle.sin() * distance, height, -angle.cos() * distance);
        let color = Color::hsl(rng.gen_range(0.0..360.0), 0.6, 0.55);

        if i % 2 == 0 {
            let size = rng.gen_range(0.2..0.5);
            commands.spawn((
                Name::new(format!("Cube {i}")),
                Mesh3d(meshes.add(Cuboid::from_length(size))),
                MeshMaterial3d(materials.add(color)),
                Transform::from_translation(position)
                    .with_rotation(Quat::from_rotation_y(rng.gen_range(0.0..PI))),
                Grabbable,
            ));
        } else {
            let radius = rng.gen_range(0.1..0.3);
            commands.spawn((
                Name::new(format!("Sphere {i}")),
                Mesh3d(meshes.add(Sphere::new(radius))),
                MeshMaterial3d(materials.add(color)),
                Transform::from_translation(position),
                Grabbable,
            ));
        }
    }

    info!("Spawned {} grabbable props", DEMO_OBJECT_COUNT);
}

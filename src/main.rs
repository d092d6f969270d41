use bevy::prelude::*;

use ray_reel_select::desktop::DesktopEmulationPlugin;
use ray_reel_select::scene::setup_scene;
use ray_reel_select::{RayReelPlugin, RayReelVisualsPlugin};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ray reel selection".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((RayReelPlugin, RayReelVisualsPlugin, DesktopEmulationPlugin))
        .add_systems(Startup, setup_scene)
        .run();
}

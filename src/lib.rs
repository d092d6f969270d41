// Ray reel selection for hand controllers
//
// RayReelPlugin is headless: it spawns the controller rig and runs the
// pick/grab/reel logic. RayReelVisualsPlugin adds the pointer mesh and
// highlight outlines on top of Bevy's rendering plugins. Hosts feed
// ControllerInput and the connection events every frame.

pub mod constants;
pub mod desktop;
pub mod haptics;
pub mod raycast;
pub mod rig;
pub mod scene;
pub mod selection;
pub mod settings;
pub mod types;

use bevy::prelude::*;

pub use raycast::{cast_ray, RayHit};
pub use selection::{GrabMode, SelectionState};
pub use settings::{InteractionSettings, ReelLimits};
pub use types::*;

/// Ordering of the interaction within `Update`: trigger handling always
/// precedes the reel, so a grab and a reel in the same frame compose.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum InteractionSet {
    Connection,
    Grab,
    Reel,
}

pub struct RayReelPlugin;

impl Plugin for RayReelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionSettings>()
            .init_resource::<SelectionState>()
            .add_event::<ControllerConnected>()
            .add_event::<ControllerDisconnected>()
            .add_event::<HapticPulse>()
            .configure_sets(
                Update,
                (InteractionSet::Connection, InteractionSet::Grab, InteractionSet::Reel).chain(),
            )
            .add_systems(Startup, rig::spawn_rig)
            .add_systems(Update, (
                rig::controller_connection_system.in_set(InteractionSet::Connection),
                selection::trigger_grab_system.in_set(InteractionSet::Grab),
                selection::thumbstick_reel_system.in_set(InteractionSet::Reel),
                haptics::log_haptic_pulses.after(InteractionSet::Reel),
            ))
            .add_systems(Last, rig::clear_input_edges);
    }
}

pub struct RayReelVisualsPlugin;

impl Plugin for RayReelVisualsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, selection::dress_pointer_system.after(rig::spawn_rig))
            .add_systems(Update, (
                selection::pointer_color_system.after(InteractionSet::Grab),
                selection::highlight_outline_system.after(InteractionSet::Reel),
            ));
    }
}

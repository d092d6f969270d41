// Interaction tuning constants
use bevy::prelude::*;

// Pointer ray
pub const RAY_LENGTH: f32 = 10.0;          // Maximum pick distance in meters
pub const POINTER_THICKNESS: f32 = 0.004;  // Cross-section of the pointer line
pub const POINTER_IDLE_COLOR: Color = Color::srgb(0.85, 0.85, 0.85);
pub const POINTER_HOLDING_COLOR: Color = Color::srgb(0.1, 0.75, 1.0);

// Reel (thumbstick push/pull along the ray)
pub const REEL_SPEED: f32 = 5.0;           // Meters per second at full thumbstick deflection

// Haptics
pub const HAPTIC_INTENSITY: f32 = 0.5;
pub const HAPTIC_DURATION_MS: u64 = 100;

// Highlight outline
pub const HIGHLIGHT_COLOR: Color = Color::srgb(1.0, 0.85, 0.2);
pub const HIGHLIGHT_PADDING: f32 = 0.02;   // Outline sits slightly outside the collider

// Desktop emulation
pub const EMULATED_HAND_OFFSET: Vec3 = Vec3::new(0.25, -0.25, -0.1); // Camera-local controller position
pub const KEYBOARD_REEL_AXIS: f32 = 1.0;
pub const MOUSE_WHEEL_REEL_STEP: f32 = 0.5; // Axis contribution per wheel line
pub const GAMEPAD_TRIGGER_THRESHOLD: f32 = 0.5;

// Demo scene
pub const DEMO_OBJECT_COUNT: usize = 12;
pub const DEMO_SCATTER_RADIUS: f32 = 6.0;
pub const DEMO_MIN_DISTANCE: f32 = 2.0;    // Keep props away from the viewer

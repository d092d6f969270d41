// Selection module - ray pick, grab, reel and feedback for the designated hand
//
// Submodules:
// - state: SelectionState resource and grab mode
// - grab: Trigger edge handling (pick, parent under anchor, release)
// - reel: Thumbstick push/pull along the ray
// - visuals: Pointer line and highlight outlines (needs rendering plugins)

mod state;
mod grab;
mod reel;
pub mod visuals;


// Re-export main types for external use
pub use state::{GrabMode, SelectionState};
pub use reel::reel_displacement;

// Re-export systems for the plugins
pub use grab::trigger_grab_system;
pub use reel::thumbstick_reel_system;
pub use visuals::{dress_pointer_system, highlight_outline_system, pointer_color_system};

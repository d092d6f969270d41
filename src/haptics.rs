// Haptic pulse emission and the default log sink
use bevy::prelude::*;

use crate::settings::InteractionSettings;
use crate::types::{Handedness, HapticPulse};

/// Build a feedback pulse for `controller` using the configured strength
pub fn feedback_pulse(
    controller: Entity,
    hand: Handedness,
    settings: &InteractionSettings,
) -> HapticPulse {
    HapticPulse {
        controller,
        hand,
        intensity: settings.haptic_intensity,
        duration: settings.haptic_duration,
    }
}

/// System: Trace every pulse; hosts with real actuators add their own reader
pub fn log_haptic_pulses(mut pulses: EventReader<HapticPulse>) {
    for pulse in pulses.read() {
        debug!(
            "Haptic pulse on {:?} hand: intensity {:.2} for {:?}",
            pulse.hand, pulse.intensity, pulse.duration
        );
    }
}

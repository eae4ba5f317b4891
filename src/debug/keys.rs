use bevy::prelude::*;

use super::SenseDebug;

pub const TOGGLE_TRAIL_KEY: KeyCode = KeyCode::KeyT;
pub const TOGGLE_STATS_KEY: KeyCode = KeyCode::KeyL;

pub fn debug_key_input_system(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut state: ResMut<SenseDebug>,
) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(TOGGLE_TRAIL_KEY) {
        state.draw_trail = !state.draw_trail;
        info!("SenseDebug: draw_trail={}", state.draw_trail);
    }
    if keys.just_pressed(TOGGLE_STATS_KEY) {
        state.log_stats = !state.log_stats;
        state.time_accum = 0.0;
        info!("SenseDebug: log_stats={}", state.log_stats);
    }
}

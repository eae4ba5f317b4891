use bevy::prelude::*;

use super::SenseDebug;
use crate::sense::SenseSystem;

pub fn sense_stats_logging_system(
    time: Res<Time>,
    mut state: ResMut<SenseDebug>,
    sense: Option<Res<SenseSystem>>,
) {
    if !state.log_stats {
        return;
    }
    let Some(sense) = sense else {
        return;
    };
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        let continuous = sense
            .outlines
            .iter()
            .filter(|(_, active)| active.stimulus.continuous)
            .count();
        info!(
            "SENSE t={:.3}s blips={} outlines={} continuous={}",
            time.elapsed_secs(),
            sense.blips.len(),
            sense.outlines.len(),
            continuous
        );
    }
}

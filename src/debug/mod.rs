//! Debug module: runtime-toggled blip trail visualization & periodic sense stats logging.
//! Everything here is gated on the [`SenseDebug`] resource instead of a cargo feature.

pub mod keys; // pub for testing
mod logging;
mod trail;

pub use trail::blip_trail_points;

use bevy::prelude::*;

use crate::core::system::system_order::SenseSet;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SenseDebug {
    /// Draw gizmo trail through live blips (oldest -> newest).
    pub draw_trail: bool,
    /// Emit a periodic `SENSE` log line with registry sizes.
    pub log_stats: bool,
    pub log_interval: f32,
    pub time_accum: f32,
}

impl Default for SenseDebug {
    fn default() -> Self {
        Self {
            draw_trail: false,
            log_stats: false,
            log_interval: 1.0,
            time_accum: 0.0,
        }
    }
}

/// Requires `GizmoPlugin` (part of `DefaultPlugins`); headless apps leave it out.
pub struct SenseDebugDrawPlugin;

impl Plugin for SenseDebugDrawPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SenseDebug>().add_systems(
            Update,
            (
                keys::debug_key_input_system,
                logging::sense_stats_logging_system,
                trail::draw_blip_trail.run_if(|d: Res<SenseDebug>| d.draw_trail),
            )
                .after(SenseSet::Maintain),
        );
    }
}

// This file is part of Stimulus Sense.
// Runtime config hot-reload (desktop only).
// Watches configured RON files for modification timestamp changes and, when detected,
// attempts to re-load layered config. On success replaces the `SenseConfig` resource;
// the sense registries read it on every trigger / tick so no further side-effects are needed.
// Errors during parsing are logged and prior config retained.

use bevy::prelude::*;
use std::{collections::HashMap, path::PathBuf, time::SystemTime};

use crate::core::config::SenseConfig;

#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    /// Polling interval seconds.
    pub interval_secs: f32,
}

impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: vec![
                PathBuf::from("assets/config/sense.ron"),
                PathBuf::from("assets/config/sense.local.ron"),
            ],
            interval_secs: 0.5,
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}

impl Default for ConfigReloadState {
    fn default() -> Self {
        Self {
            last_mod: HashMap::new(),
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
        }
    }
}

pub struct ConfigHotReloadPlugin;

impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        // Only meaningful on native (std::fs) targets.
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.init_resource::<ConfigReloadSettings>()
                .init_resource::<ConfigReloadState>()
                .add_systems(Update, poll_and_reload_config);
        }
    }
}

/// A reload is applied only if some layer loaded and nothing failed to parse.
/// Missing layers (read errors) are normal: `sense.local.ron` is optional.
fn reload_is_usable(used: &[String], errors: &[String]) -> bool {
    !used.is_empty() && errors.iter().all(|e| e.contains("read error"))
}

fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    cfg_res: Option<ResMut<SenseConfig>>,
    mut commands: Commands,
) {
    // Allow changing interval at runtime by adjusting timer duration.
    if (state.timer.duration().as_secs_f32() - settings.interval_secs).abs() > f32::EPSILON {
        state
            .timer
            .set_duration(std::time::Duration::from_secs_f32(settings.interval_secs.max(0.05)));
    }
    if !state.timer.tick(time.delta()).finished() {
        return;
    }

    use std::fs;
    use std::time::UNIX_EPOCH;
    let mut dirty = false;
    for path in &settings.paths {
        let Ok(mod_time) = fs::metadata(path).and_then(|meta| meta.modified()) else {
            continue;
        };
        let entry = state.last_mod.entry(path.clone()).or_insert(UNIX_EPOCH);
        if mod_time > *entry {
            *entry = mod_time;
            dirty = true;
        }
    }
    if !dirty {
        return;
    }

    let (new_cfg, used, errors) = SenseConfig::load_layered(settings.paths.iter());
    for e in &errors {
        warn!("CONFIG HOT-RELOAD issue: {e}");
    }
    if !reload_is_usable(&used, &errors) {
        warn!("CONFIG HOT-RELOAD rejected; keeping previous config");
        return;
    }
    for w in new_cfg.validate() {
        warn!("CONFIG HOT-RELOAD validation: {w}");
    }

    // Replace resource only if different (avoid spurious change detection).
    match cfg_res {
        Some(mut cfg) if *cfg != new_cfg => {
            info!("Config hot-reload applied");
            *cfg = new_cfg;
        }
        Some(_) => {}
        None => {
            info!("Config hot-reload installed SenseConfig");
            commands.insert_resource(new_cfg);
        }
    }
}

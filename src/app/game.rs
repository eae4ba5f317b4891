// This file is part of Stimulus Sense.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::app::demo::DemoScenePlugin;
use crate::debug::SenseDebugDrawPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::rendering::blip_visuals::BlipVisualsPlugin;
use crate::rendering::outline_tint::OutlineTintPlugin;
use crate::sense::SensePlugin;

/// Everything the windowed demo needs on top of `DefaultPlugins`.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            SensePlugin,
            OutlineTintPlugin,
            BlipVisualsPlugin,
            DemoScenePlugin,
            SenseDebugDrawPlugin,
            ConfigHotReloadPlugin,
            AutoClosePlugin,
        ));
    }
}

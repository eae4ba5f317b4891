// This file is part of Stimulus Sense.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stimulus feedback: short-lived blip entities and timed character outlines.
//!
//! Gameplay code feeds stimuli in through [`SenseRequest`] events, [`SenseCommandsExt`]
//! or the free functions taking `&mut World`. Every frame [`SensePlugin`] drains pending
//! requests ([`SenseSet::Dispatch`]) and then ages both registries ([`SenseSet::Maintain`]).

pub mod blips;
pub mod dispatch;
pub mod outlines;
pub mod stimulus;

pub use blips::BlipRegistry;
pub use dispatch::{stop_continuous_stimulus, trigger_stimulus, SenseCommandsExt};
pub use outlines::{compute_stencil_value, visual_mesh, OutlineRegistry};
pub use stimulus::{ActiveStimulus, SenseRequest, Stimulus};

use bevy::prelude::*;

use crate::core::system::system_order::SenseSet;
use crate::debug::SenseDebug;

/// Entity handles are generation checked, so a recycled index never resolves.
pub(crate) fn is_alive(world: &World, entity: Entity) -> bool {
    world.get_entity(entity).is_ok()
}

/// Owns the blip and outline bookkeeping.
#[derive(Resource, Debug, Default)]
pub struct SenseSystem {
    pub blips: BlipRegistry,
    pub outlines: OutlineRegistry,
}

impl SenseSystem {
    /// Age both registries by `dt` seconds.
    pub fn tick(&mut self, world: &mut World, dt: f32) {
        self.blips.tick(world, dt);
        self.outlines.tick(world, dt);
    }

    /// Drop all bookkeeping. Blips are not despawned and outlines keep their last render state.
    pub fn end_play(&mut self, debug: Option<&mut SenseDebug>) {
        self.blips.clear();
        self.outlines.clear();
        if let Some(debug) = debug {
            debug.draw_trail = false;
        }
    }
}

/// Run one maintenance step with an explicit delta; no-op without a [`SenseSystem`].
pub fn tick_sense(world: &mut World, dt: f32) {
    if !world.contains_resource::<SenseSystem>() {
        return;
    }
    world.resource_scope(|world, mut sense: Mut<SenseSystem>| sense.tick(world, dt));
}

fn tick_sense_system(world: &mut World) {
    let dt = world
        .get_resource::<Time>()
        .map(|t| t.delta_secs())
        .unwrap_or(0.0);
    tick_sense(world, dt);
}

fn end_play_on_exit(
    mut exits: EventReader<AppExit>,
    mut sense: ResMut<SenseSystem>,
    debug: Option<ResMut<SenseDebug>>,
) {
    if exits.read().next().is_none() {
        return;
    }
    info!(
        blips = sense.blips.len(),
        outlines = sense.outlines.len(),
        "SenseSystem: teardown"
    );
    sense.end_play(debug.map(|d| d.into_inner()));
}

pub struct SensePlugin;

impl Plugin for SensePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SenseSystem>()
            .init_resource::<SenseDebug>()
            .add_event::<SenseRequest>()
            .configure_sets(Update, (SenseSet::Dispatch, SenseSet::Maintain).chain())
            .add_systems(
                Update,
                (
                    dispatch::dispatch_sense_requests.in_set(SenseSet::Dispatch),
                    tick_sense_system.in_set(SenseSet::Maintain),
                ),
            )
            .add_systems(Last, end_play_on_exit);
    }
}

// This file is part of Stimulus Sense.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use super::stimulus::{ActiveStimulus, SenseRequest, Stimulus};
use super::{is_alive, SenseSystem};
use crate::core::components::{Blip, BlipKind};
use crate::core::config::SenseConfig;

impl SenseSystem {
    /// Spawn a blip and/or outline the instigator, as configured.
    /// Ignored without a [`SenseConfig`] or when the instigator no longer exists.
    pub fn trigger(&mut self, world: &mut World, stimulus: Stimulus) {
        let Some(cfg) = world.get_resource::<SenseConfig>().cloned() else {
            trace!("stimulus ignored: no SenseConfig");
            return;
        };
        if !is_alive(world, stimulus.instigator) {
            trace!(instigator = ?stimulus.instigator, "stimulus ignored: instigator gone");
            return;
        }

        if cfg.blips.enabled {
            if let Some(kind) = cfg.blips.spawnable_kind() {
                // ECS spawns never collide: always spawned regardless of overlap.
                let blip = world
                    .spawn((
                        Blip,
                        BlipKind(kind.to_owned()),
                        Name::new(format!("blip:{kind}")),
                        Transform::from_translation(stimulus.location),
                    ))
                    .id();
                debug!(?blip, kind, location = ?stimulus.location, "blip spawned");
                self.blips.register(world, blip, cfg.blips.lifetime);
            }
        }

        if cfg.outlines.enabled {
            let active = ActiveStimulus {
                stimulus,
                remaining_lifetime: cfg.outlines.lifetime,
            };
            self.outlines
                .register_or_update(world, stimulus.instigator, active);
        }
    }

    /// Let a continuous outline start decaying from the next tick on.
    pub fn stop_continuous(&mut self, world: &World, instigator: Entity) {
        if is_alive(world, instigator) && self.outlines.stop_continuous(instigator) {
            debug!(?instigator, "continuous stimulus stopped");
        }
    }
}

/// Trigger a stimulus on the world's [`SenseSystem`]; no-op if none is installed.
pub fn trigger_stimulus(world: &mut World, stimulus: Stimulus) {
    if !world.contains_resource::<SenseSystem>() {
        return;
    }
    world.resource_scope(|world, mut sense: Mut<SenseSystem>| sense.trigger(world, stimulus));
}

/// Stop a continuous stimulus on the world's [`SenseSystem`]; no-op if none is installed.
pub fn stop_continuous_stimulus(world: &mut World, instigator: Entity) {
    if !world.contains_resource::<SenseSystem>() {
        return;
    }
    world.resource_scope(|world, mut sense: Mut<SenseSystem>| {
        sense.stop_continuous(world, instigator)
    });
}

/// Queue stimulus requests from ordinary (non-exclusive) gameplay systems.
pub trait SenseCommandsExt {
    fn trigger_stimulus(&mut self, stimulus: Stimulus);
    fn stop_continuous_stimulus(&mut self, instigator: Entity);
}

impl SenseCommandsExt for Commands<'_, '_> {
    fn trigger_stimulus(&mut self, stimulus: Stimulus) {
        self.queue(move |world: &mut World| trigger_stimulus(world, stimulus));
    }

    fn stop_continuous_stimulus(&mut self, instigator: Entity) {
        self.queue(move |world: &mut World| stop_continuous_stimulus(world, instigator));
    }
}

/// System: apply every pending [`SenseRequest`] in send order.
pub(crate) fn dispatch_sense_requests(world: &mut World) {
    let requests: Vec<SenseRequest> = match world.get_resource_mut::<Events<SenseRequest>>() {
        Some(mut events) => events.drain().collect(),
        None => return,
    };
    for request in requests {
        match request {
            SenseRequest::Trigger(stimulus) => trigger_stimulus(world, stimulus),
            SenseRequest::StopContinuous(instigator) => stop_continuous_stimulus(world, instigator),
        }
    }
}

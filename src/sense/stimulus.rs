// This file is part of Stimulus Sense.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

/// Something perceptible happened at `location`, caused by `instigator`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stimulus {
    pub location: Vec3,
    /// Entity the outline is attached to. Never owned; may be despawned at any time.
    pub instigator: Entity,
    /// Continuous stimuli keep their outline until explicitly stopped.
    pub continuous: bool,
}

impl Stimulus {
    pub fn new(location: Vec3, instigator: Entity) -> Self {
        Self {
            location,
            instigator,
            continuous: false,
        }
    }

    pub fn continuous(location: Vec3, instigator: Entity) -> Self {
        Self {
            continuous: true,
            ..Self::new(location, instigator)
        }
    }
}

/// Outline record: the triggering stimulus plus its remaining lifetime in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveStimulus {
    pub stimulus: Stimulus,
    pub remaining_lifetime: f32,
}

/// Gameplay-facing request queue drained once per frame by [`SensePlugin`](super::SensePlugin).
/// A single event type keeps trigger / stop requests in the order they were sent.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum SenseRequest {
    Trigger(Stimulus),
    StopContinuous(Entity),
}

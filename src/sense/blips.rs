// This file is part of Stimulus Sense.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use std::collections::HashMap;

use super::is_alive;

/// Remaining lifetime (seconds) of every blip entity this system spawned.
#[derive(Debug, Default, Clone)]
pub struct BlipRegistry {
    entries: HashMap<Entity, f32>,
}

impl BlipRegistry {
    pub fn register(&mut self, world: &World, blip: Entity, lifetime: f32) {
        if is_alive(world, blip) {
            self.entries.insert(blip, lifetime);
        }
    }

    /// Despawns the blip if it still exists and forgets it. Safe on unknown / dangling keys.
    pub fn unregister(&mut self, world: &mut World, blip: Entity) {
        if is_alive(world, blip) {
            world.despawn(blip);
        }
        self.entries.remove(&blip);
    }

    /// Decay every live blip by `dt`; evict the expired and the externally despawned.
    pub fn tick(&mut self, world: &mut World, dt: f32) {
        let mut outdated = Vec::new();
        for (&blip, remaining) in self.entries.iter_mut() {
            if is_alive(world, blip) {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    outdated.push(blip);
                }
            } else {
                outdated.push(blip);
            }
        }
        for blip in outdated {
            debug!(?blip, "blip expired");
            self.unregister(world, blip);
        }
    }

    pub fn remaining(&self, blip: Entity) -> Option<f32> {
        self.entries.get(&blip).copied()
    }

    pub fn contains(&self, blip: Entity) -> bool {
        self.entries.contains_key(&blip)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, f32)> + '_ {
        self.entries.iter().map(|(&e, &r)| (e, r))
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_entity_is_not_registered() {
        let mut world = World::new();
        let e = world.spawn_empty().id();
        world.despawn(e);
        let mut reg = BlipRegistry::default();
        reg.register(&world, e, 1.0);
        assert!(reg.is_empty());
    }

    #[test]
    fn register_overwrites_lifetime() {
        let mut world = World::new();
        let e = world.spawn_empty().id();
        let mut reg = BlipRegistry::default();
        reg.register(&world, e, 1.0);
        reg.register(&world, e, 3.0);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.remaining(e), Some(3.0));
    }

    #[test]
    fn unregister_is_idempotent() {
        let mut world = World::new();
        let keep = world.spawn_empty().id();
        let gone = world.spawn_empty().id();
        let mut reg = BlipRegistry::default();
        reg.register(&world, keep, 1.0);
        reg.register(&world, gone, 1.0);
        reg.unregister(&mut world, gone);
        reg.unregister(&mut world, gone);
        assert!(world.get_entity(gone).is_err());
        assert_eq!(reg.len(), 1);
        assert!(reg.contains(keep));
    }

    #[test]
    fn externally_despawned_blip_is_evicted_without_decay() {
        let mut world = World::new();
        let e = world.spawn_empty().id();
        let mut reg = BlipRegistry::default();
        reg.register(&world, e, 100.0);
        world.despawn(e);
        reg.tick(&mut world, 0.0);
        assert!(reg.is_empty());
    }
}

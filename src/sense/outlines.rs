// This file is part of Stimulus Sense.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use std::collections::HashMap;

use super::is_alive;
use super::stimulus::ActiveStimulus;
use crate::core::components::{Character, CustomDepth, SkeletalMesh};
use crate::core::config::SenseConfig;

pub const STENCIL_VALUE_BASE: i32 = 100;
pub const STENCIL_VALUE_RANGE: i32 = 10;

/// Lifetime passed when tearing an outline down; maps to stencil 0.
const OFF_LIFETIME: f32 = -1.0;

/// Map remaining outline lifetime to the stencil value read by the outline material.
/// `total` is the configured outline lifetime (`None` without a [`SenseConfig`]).
pub fn compute_stencil_value(remaining: f32, total: Option<f32>) -> i32 {
    if remaining < 0.0 {
        return 0;
    }
    let ratio = match total {
        // 0 / 0 gives NaN, which counts as fully fresh
        Some(total) => {
            let ratio = remaining / total;
            if ratio.is_nan() {
                1.0
            } else {
                ratio.clamp(0.0, 1.0)
            }
        }
        None => 1.0,
    };
    STENCIL_VALUE_BASE + (ratio * STENCIL_VALUE_RANGE as f32) as i32
}

/// Resolve the mesh that renders a character's silhouette.
/// Prefers an outer-layer skeletal mesh parented directly under the body mesh.
pub fn visual_mesh(world: &World, actor: Entity) -> Option<Entity> {
    world.get::<Character>(actor)?;
    let body = first_skeletal_child(world, actor)?;
    Some(first_skeletal_child(world, body).unwrap_or(body))
}

// direct children only
fn first_skeletal_child(world: &World, parent: Entity) -> Option<Entity> {
    let children: &[Entity] = world.get::<Children>(parent)?;
    children
        .iter()
        .copied()
        .find(|&child| world.get::<SkeletalMesh>(child).is_some())
}

fn configured_lifetime(world: &World) -> Option<f32> {
    world
        .get_resource::<SenseConfig>()
        .map(|cfg| cfg.outlines.lifetime)
}

fn write_custom_depth(world: &mut World, actor: Entity, apply: impl FnOnce(&mut CustomDepth)) {
    let Some(mesh) = visual_mesh(world, actor) else {
        return;
    };
    if let Some(mut depth) = world.get_mut::<CustomDepth>(mesh) {
        apply(&mut *depth);
        return;
    }
    let mut depth = CustomDepth::default();
    apply(&mut depth);
    world.entity_mut(mesh).insert(depth);
}

fn set_custom_depth_enabled(world: &mut World, actor: Entity, enabled: bool) {
    write_custom_depth(world, actor, |depth| depth.enabled = enabled);
}

fn update_stencil_value(world: &mut World, actor: Entity, remaining: f32) {
    let stencil = compute_stencil_value(remaining, configured_lifetime(world));
    write_custom_depth(world, actor, |depth| depth.stencil = stencil);
}

/// Active outline per character.
#[derive(Debug, Default, Clone)]
pub struct OutlineRegistry {
    entries: HashMap<Entity, ActiveStimulus>,
}

impl OutlineRegistry {
    /// Store `active` unless a continuous record is already running for `character`.
    /// Render state is refreshed either way.
    pub fn register_or_update(&mut self, world: &mut World, character: Entity, active: ActiveStimulus) {
        if !is_alive(world, character) {
            return;
        }
        let keep_existing = self
            .entries
            .get(&character)
            .is_some_and(|existing| existing.stimulus.continuous);
        if !keep_existing {
            self.entries.insert(character, active);
        }
        set_custom_depth_enabled(world, character, true);
        update_stencil_value(world, character, active.remaining_lifetime);
    }

    /// Turns the outline off (if the character still exists) and forgets the record.
    pub fn unregister(&mut self, world: &mut World, character: Entity) {
        if is_alive(world, character) {
            set_custom_depth_enabled(world, character, false);
            update_stencil_value(world, character, OFF_LIFETIME);
        }
        self.entries.remove(&character);
    }

    /// Returns true when a continuous record was switched over to decaying.
    pub fn stop_continuous(&mut self, character: Entity) -> bool {
        match self.entries.get_mut(&character) {
            Some(active) if active.stimulus.continuous => {
                active.stimulus.continuous = false;
                true
            }
            _ => false,
        }
    }

    pub fn tick(&mut self, world: &mut World, dt: f32) {
        let mut outdated = Vec::new();
        for (&character, active) in self.entries.iter_mut() {
            if !is_alive(world, character) {
                outdated.push(character);
                continue;
            }
            if active.stimulus.continuous {
                continue;
            }
            active.remaining_lifetime -= dt;
            if active.remaining_lifetime <= 0.0 {
                outdated.push(character);
                continue;
            }
            update_stencil_value(world, character, active.remaining_lifetime);
        }
        for character in outdated {
            debug!(?character, "outline expired");
            self.unregister(world, character);
        }
    }

    pub fn get(&self, character: Entity) -> Option<&ActiveStimulus> {
        self.entries.get(&character)
    }

    pub fn contains(&self, character: Entity) -> bool {
        self.entries.contains_key(&character)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, &ActiveStimulus)> + '_ {
        self.entries.iter().map(|(&e, a)| (e, a))
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sense::stimulus::Stimulus;

    fn spawn_character(world: &mut World, with_accessory: bool) -> (Entity, Entity, Option<Entity>) {
        let character = world.spawn(Character).id();
        let body = world.spawn((SkeletalMesh, ChildOf(character))).id();
        let accessory = with_accessory.then(|| world.spawn((SkeletalMesh, ChildOf(body))).id());
        (character, body, accessory)
    }

    #[test]
    fn stencil_bounds_and_off_value() {
        assert_eq!(compute_stencil_value(-0.001, Some(10.0)), 0);
        assert_eq!(compute_stencil_value(-1.0, None), 0);
        assert_eq!(compute_stencil_value(0.0, Some(10.0)), 100);
        assert_eq!(compute_stencil_value(10.0, Some(10.0)), 110);
        assert_eq!(compute_stencil_value(25.0, Some(10.0)), 110);
        assert_eq!(compute_stencil_value(5.0, Some(10.0)), 105);
    }

    #[test]
    fn stencil_monotonic_in_remaining() {
        let total = Some(7.5);
        let mut last = compute_stencil_value(0.0, total);
        for i in 1..=200 {
            let v = compute_stencil_value(i as f32 * 0.05, total);
            assert!(v >= last, "stencil decreased at step {i}: {v} < {last}");
            assert!((STENCIL_VALUE_BASE..=STENCIL_VALUE_BASE + STENCIL_VALUE_RANGE).contains(&v));
            last = v;
        }
    }

    #[test]
    fn stencil_without_config_is_full() {
        assert_eq!(compute_stencil_value(0.1, None), 110);
        assert_eq!(compute_stencil_value(0.0, None), 110);
    }

    #[test]
    fn stencil_with_degenerate_configured_lifetime() {
        // negative total: ratio clamps to 0
        assert_eq!(compute_stencil_value(5.0, Some(-10.0)), 100);
        assert_eq!(compute_stencil_value(0.0, Some(-10.0)), 100);
        // zero total: x / 0 = inf clamps to 1, 0 / 0 = NaN counts as 1
        assert_eq!(compute_stencil_value(5.0, Some(0.0)), 110);
        assert_eq!(compute_stencil_value(0.0, Some(0.0)), 110);
        assert_eq!(compute_stencil_value(-1.0, Some(0.0)), 0);
    }

    #[test]
    fn visual_mesh_prefers_outer_layer() {
        let mut world = World::new();
        let (plain, body, _) = spawn_character(&mut world, false);
        assert_eq!(visual_mesh(&world, plain), Some(body));
        let (dressed, _, accessory) = spawn_character(&mut world, true);
        assert_eq!(visual_mesh(&world, dressed), accessory);
    }

    #[test]
    fn visual_mesh_requires_character_and_mesh() {
        let mut world = World::new();
        let not_character = world.spawn_empty().id();
        world.spawn((SkeletalMesh, ChildOf(not_character)));
        assert_eq!(visual_mesh(&world, not_character), None);
        let bare = world.spawn(Character).id();
        world.spawn(ChildOf(bare));
        assert_eq!(visual_mesh(&world, bare), None);
    }

    #[test]
    fn render_state_lands_on_accessory_only() {
        let mut world = World::new();
        let (character, body, accessory) = spawn_character(&mut world, true);
        let accessory = accessory.unwrap();
        let mut reg = OutlineRegistry::default();
        let active = ActiveStimulus {
            stimulus: Stimulus::new(Vec3::ZERO, character),
            remaining_lifetime: 3.0,
        };
        reg.register_or_update(&mut world, character, active);
        assert!(world.get::<CustomDepth>(body).is_none());
        assert_eq!(
            world.get::<CustomDepth>(accessory).copied(),
            Some(CustomDepth { enabled: true, stencil: 110 })
        );
    }

    #[test]
    fn stop_continuous_only_flips_continuous_records() {
        let mut world = World::new();
        let (character, _, _) = spawn_character(&mut world, false);
        let mut reg = OutlineRegistry::default();
        assert!(!reg.stop_continuous(character));
        let active = ActiveStimulus {
            stimulus: Stimulus::continuous(Vec3::ZERO, character),
            remaining_lifetime: 2.0,
        };
        reg.register_or_update(&mut world, character, active);
        assert!(reg.stop_continuous(character));
        assert!(!reg.stop_continuous(character));
        assert!(!reg.get(character).unwrap().stimulus.continuous);
    }
}

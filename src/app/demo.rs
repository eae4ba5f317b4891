// This file is part of Stimulus Sense.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Demo scene: a handful of characters, keyboard-driven stimuli.
//! Space = noise at a random character, C / X = start / stop a continuous smell trail
//! on the wandering character, K = despawn a random character.

use bevy::prelude::*;
use rand::seq::SliceRandom;

use crate::core::components::{Character, SkeletalMesh};
use crate::core::system::system_order::SenseSet;
use crate::sense::{SenseCommandsExt, SenseRequest, Stimulus};

const CHARACTER_COUNT: usize = 4;
const CHARACTER_SPACING: f32 = 2.5;
const TRAIL_EMIT_INTERVAL: f32 = 0.25;

#[derive(Component)]
pub struct DemoCharacter;

/// Moves a character around a circle so continuous stimuli leave a visible trail.
#[derive(Component, Debug, Clone, Copy)]
pub struct Wander {
    pub center: Vec3,
    pub radius: f32,
    pub angular_speed: f32,
    pub phase: f32,
}

impl Wander {
    pub fn position(&self, elapsed: f32) -> Vec3 {
        let a = self.phase + elapsed * self.angular_speed;
        self.center + Vec3::new(a.cos() * self.radius, 0.0, a.sin() * self.radius)
    }
}

/// Character currently emitting a continuous stimulus, re-triggered on a timer.
#[derive(Resource)]
pub struct ContinuousTrail {
    pub target: Option<Entity>,
    pub timer: Timer,
}

impl Default for ContinuousTrail {
    fn default() -> Self {
        Self {
            target: None,
            timer: Timer::from_seconds(TRAIL_EMIT_INTERVAL, TimerMode::Repeating),
        }
    }
}

pub struct DemoScenePlugin;

impl Plugin for DemoScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContinuousTrail>()
            .add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                (wander, demo_key_input, emit_continuous_trail)
                    .chain()
                    .before(SenseSet::Dispatch),
            );
    }
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 7.0, 11.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(20.0, 20.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.18, 0.2, 0.22))),
    ));

    let body_mesh = meshes.add(Capsule3d::new(0.35, 1.0));
    let coat_mesh = meshes.add(Capsule3d::new(0.4, 1.05));
    let start_x = -CHARACTER_SPACING * (CHARACTER_COUNT as f32 - 1.0) * 0.5;
    for i in 0..CHARACTER_COUNT {
        let origin = Vec3::new(start_x + i as f32 * CHARACTER_SPACING, 0.85, 0.0);
        let mut character = commands.spawn((
            Name::new(format!("character_{i}")),
            Character,
            DemoCharacter,
            Transform::from_translation(origin),
            Visibility::default(),
        ));
        if i == 0 {
            character.insert(Wander {
                center: origin,
                radius: 1.5,
                angular_speed: 0.8,
                phase: 0.0,
            });
        }
        let character = character.id();
        // Each mesh gets its own material so outline tint stays per character.
        let body = commands
            .spawn((
                SkeletalMesh,
                Mesh3d(body_mesh.clone()),
                MeshMaterial3d(materials.add(Color::srgb(0.6, 0.62, 0.7))),
                ChildOf(character),
            ))
            .id();
        if i == CHARACTER_COUNT - 1 {
            commands.spawn((
                SkeletalMesh,
                Mesh3d(coat_mesh.clone()),
                MeshMaterial3d(materials.add(Color::srgb(0.35, 0.25, 0.5))),
                ChildOf(body),
            ));
        }
    }
    info!("Demo: Space=noise C=continuous X=stop K=despawn T=trail L=stats");
}

fn wander(time: Res<Time>, mut q: Query<(&Wander, &mut Transform)>) {
    for (w, mut tf) in q.iter_mut() {
        tf.translation = w.position(time.elapsed_secs());
    }
}

fn demo_key_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    mut requests: EventWriter<SenseRequest>,
    mut trail: ResMut<ContinuousTrail>,
    characters: Query<(Entity, &GlobalTransform), With<DemoCharacter>>,
    wanderers: Query<Entity, (With<DemoCharacter>, With<Wander>)>,
) {
    let mut rng = rand::thread_rng();
    let alive: Vec<(Entity, Vec3)> = characters
        .iter()
        .map(|(e, tf)| (e, tf.translation()))
        .collect();

    if keys.just_pressed(KeyCode::Space) {
        if let Some(&(e, pos)) = alive.choose(&mut rng) {
            requests.write(SenseRequest::Trigger(Stimulus::new(pos, e)));
        }
    }
    if keys.just_pressed(KeyCode::KeyC) && trail.target.is_none() {
        trail.target = wanderers.iter().next();
        trail.timer.reset();
        // Fire once immediately; the timer keeps refreshing it afterwards.
        if let Some(&(e, pos)) = alive.iter().find(|(e, _)| Some(*e) == trail.target) {
            commands.trigger_stimulus(Stimulus::continuous(pos, e));
        }
    }
    if keys.just_pressed(KeyCode::KeyX) {
        if let Some(target) = trail.target.take() {
            commands.stop_continuous_stimulus(target);
        }
    }
    if keys.just_pressed(KeyCode::KeyK) {
        if let Some(&(e, _)) = alive.choose(&mut rng) {
            info!(entity = ?e, "Demo: despawning character");
            commands.entity(e).despawn();
        }
    }
}

fn emit_continuous_trail(
    time: Res<Time>,
    mut trail: ResMut<ContinuousTrail>,
    mut commands: Commands,
    q: Query<&GlobalTransform, With<DemoCharacter>>,
) {
    let Some(target) = trail.target else {
        return;
    };
    let Ok(tf) = q.get(target) else {
        trail.target = None;
        return;
    };
    if trail.timer.tick(time.delta()).just_finished() {
        commands.trigger_stimulus(Stimulus::continuous(tf.translation(), target));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wander_stays_on_circle() {
        let w = Wander {
            center: Vec3::new(1.0, 0.5, -2.0),
            radius: 1.5,
            angular_speed: 0.8,
            phase: 0.3,
        };
        for step in 0..20 {
            let p = w.position(step as f32 * 0.37);
            assert!((p.distance(w.center) - w.radius).abs() < 1e-4);
            assert_eq!(p.y, w.center.y);
        }
    }
}

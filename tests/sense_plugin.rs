use std::time::Duration;

use bevy::prelude::*;
use stimulus_sense::core::config::OutlineConfig;
use stimulus_sense::{
    Blip, Character, CustomDepth, SenseCommandsExt, SenseConfig, SenseDebug, SensePlugin,
    SenseRequest, SenseSystem, SkeletalMesh, Stimulus,
};

fn test_app(cfg: SenseConfig) -> App {
    let mut app = App::new();
    // Manually driven clock: nothing but `step` advances it.
    app.init_resource::<Time>();
    app.insert_resource(cfg);
    app.add_plugins(SensePlugin);
    app
}

fn step(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(secs));
    app.update();
}

fn spawn_character(app: &mut App) -> (Entity, Entity) {
    let world = app.world_mut();
    let character = world.spawn((Character, Transform::default())).id();
    let body = world.spawn((SkeletalMesh, ChildOf(character))).id();
    (character, body)
}

fn ten_second_outlines() -> SenseConfig {
    SenseConfig {
        outlines: OutlineConfig {
            enabled: true,
            lifetime: 10.0,
        },
        ..Default::default()
    }
}

#[test]
fn requests_are_applied_in_send_order_before_maintenance() {
    let mut app = test_app(ten_second_outlines());
    let (a, _) = spawn_character(&mut app);

    app.world_mut()
        .send_event(SenseRequest::Trigger(Stimulus::continuous(Vec3::ZERO, a)));
    app.world_mut().send_event(SenseRequest::StopContinuous(a));
    step(&mut app, 1.5);

    let sense = app.world().resource::<SenseSystem>();
    let active = sense.outlines.get(a).copied().expect("outline record");
    assert!(!active.stimulus.continuous);
    assert_eq!(active.remaining_lifetime, 8.5);
    // default blip lifetime is 2s
    assert_eq!(sense.blips.iter().next().map(|(_, r)| r), Some(0.5));
}

#[test]
fn outline_scenario_over_frames() {
    let mut app = test_app(ten_second_outlines());
    let (a, mesh) = spawn_character(&mut app);

    app.world_mut()
        .send_event(SenseRequest::Trigger(Stimulus::new(Vec3::ZERO, a)));
    step(&mut app, 0.0);
    assert_eq!(
        app.world().get::<CustomDepth>(mesh).copied(),
        Some(CustomDepth { enabled: true, stencil: 110 })
    );

    step(&mut app, 5.0);
    assert_eq!(app.world().get::<CustomDepth>(mesh).unwrap().stencil, 105);

    step(&mut app, 6.0);
    assert!(app.world().resource::<SenseSystem>().outlines.is_empty());
    assert_eq!(
        app.world().get::<CustomDepth>(mesh).copied(),
        Some(CustomDepth { enabled: false, stencil: 0 })
    );
}

#[test]
fn commands_extension_reaches_the_system() {
    let mut app = test_app(SenseConfig::default());
    let (a, _) = spawn_character(&mut app);

    app.world_mut()
        .commands()
        .trigger_stimulus(Stimulus::continuous(Vec3::ONE, a));
    app.world_mut().flush();
    {
        let sense = app.world().resource::<SenseSystem>();
        assert!(sense.outlines.get(a).unwrap().stimulus.continuous);
        assert_eq!(sense.blips.len(), 1);
    }

    app.world_mut().commands().stop_continuous_stimulus(a);
    app.world_mut().flush();
    let sense = app.world().resource::<SenseSystem>();
    assert!(!sense.outlines.get(a).unwrap().stimulus.continuous);
}

#[test]
fn commands_without_sense_system_are_noops() {
    let mut world = World::new();
    world.insert_resource(SenseConfig::default());
    let a = world.spawn(Character).id();
    world
        .commands()
        .trigger_stimulus(Stimulus::new(Vec3::ZERO, a));
    world.commands().stop_continuous_stimulus(a);
    world.flush();
    let blips = world.query_filtered::<Entity, With<Blip>>().iter(&world).count();
    assert_eq!(blips, 0);
}

#[test]
fn app_exit_clears_bookkeeping_without_cleanup() {
    let mut app = test_app(ten_second_outlines());
    let (a, mesh) = spawn_character(&mut app);
    app.world_mut().resource_mut::<SenseDebug>().draw_trail = true;
    app.world_mut()
        .send_event(SenseRequest::Trigger(Stimulus::new(Vec3::ZERO, a)));
    step(&mut app, 0.0);
    let blip = app
        .world()
        .resource::<SenseSystem>()
        .blips
        .iter()
        .next()
        .map(|(e, _)| e)
        .expect("blip");

    app.world_mut().send_event(AppExit::Success);
    step(&mut app, 0.0);

    let sense = app.world().resource::<SenseSystem>();
    assert!(sense.blips.is_empty());
    assert!(sense.outlines.is_empty());
    assert!(!app.world().resource::<SenseDebug>().draw_trail);
    // teardown leaves the world alone
    assert!(app.world().get_entity(blip).is_ok());
    assert!(app.world().get::<CustomDepth>(mesh).unwrap().enabled);
}

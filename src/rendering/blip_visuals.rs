use bevy::prelude::*;

use crate::core::components::{Blip, BlipKind};

const SMELL_COLOR: Color = Color::srgb(0.5, 0.95, 0.3);
const OTHER_COLOR: Color = Color::srgb(0.85, 0.85, 0.95);
const BLIP_RADIUS: f32 = 0.12;

#[derive(Resource)]
pub struct BlipVisuals {
    pub mesh: Handle<Mesh>,
    pub smell: Handle<StandardMaterial>,
    pub other: Handle<StandardMaterial>,
}

pub struct BlipVisualsPlugin;

impl Plugin for BlipVisualsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_blip_visuals)
            .add_systems(PostUpdate, attach_blip_visuals);
    }
}

fn setup_blip_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let unlit = |color: Color| StandardMaterial {
        base_color: color,
        unlit: true,
        ..default()
    };
    commands.insert_resource(BlipVisuals {
        mesh: meshes.add(Sphere::new(BLIP_RADIUS)),
        smell: materials.add(unlit(SMELL_COLOR)),
        other: materials.add(unlit(OTHER_COLOR)),
    });
}

fn attach_blip_visuals(
    mut commands: Commands,
    visuals: Option<Res<BlipVisuals>>,
    q: Query<(Entity, &BlipKind), Added<Blip>>,
) {
    let Some(visuals) = visuals else {
        return;
    };
    for (entity, kind) in q.iter() {
        let material = match kind.as_str() {
            "smell" => visuals.smell.clone(),
            _ => visuals.other.clone(),
        };
        commands
            .entity(entity)
            .insert((Mesh3d(visuals.mesh.clone()), MeshMaterial3d(material)));
    }
}

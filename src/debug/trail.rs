use bevy::prelude::*;

use crate::core::components::Blip;
use crate::sense::SenseSystem;

const TRAIL_COLOR: Color = Color::srgb(0.55, 1.0, 0.35);
const BLIP_MARK_RADIUS: f32 = 0.15;

/// Live blip positions ordered oldest first (least remaining lifetime first).
pub fn blip_trail_points<'a>(
    sense: &SenseSystem,
    lookup: impl Fn(Entity) -> Option<&'a GlobalTransform>,
) -> Vec<Vec3> {
    let mut blips: Vec<(f32, Vec3)> = sense
        .blips
        .iter()
        .filter_map(|(e, remaining)| lookup(e).map(|tf| (remaining, tf.translation())))
        .collect();
    blips.sort_by(|a, b| a.0.total_cmp(&b.0));
    blips.into_iter().map(|(_, p)| p).collect()
}

pub(super) fn draw_blip_trail(
    sense: Option<Res<SenseSystem>>,
    q: Query<&GlobalTransform, With<Blip>>,
    mut gizmos: Gizmos,
) {
    let Some(sense) = sense else {
        return;
    };
    let points = blip_trail_points(&sense, |e| q.get(e).ok());
    for p in &points {
        gizmos.sphere(Isometry3d::from_translation(*p), BLIP_MARK_RADIUS, TRAIL_COLOR);
    }
    if points.len() > 1 {
        gizmos.linestrip(points, TRAIL_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_runs_oldest_to_newest_and_skips_unresolved() {
        let mut world = World::new();
        let mut sense = SenseSystem::default();
        let spawn_at = |world: &mut World, x: f32| {
            world
                .spawn(GlobalTransform::from_translation(Vec3::new(x, 0.0, 0.0)))
                .id()
        };
        let newest = spawn_at(&mut world, 3.0);
        let oldest = spawn_at(&mut world, 1.0);
        let middle = spawn_at(&mut world, 2.0);
        let hidden = world.spawn_empty().id();
        sense.blips.register(&world, newest, 1.9);
        sense.blips.register(&world, oldest, 0.2);
        sense.blips.register(&world, middle, 1.0);
        sense.blips.register(&world, hidden, 0.5);

        let points = blip_trail_points(&sense, |e| world.get::<GlobalTransform>(e));
        let xs: Vec<f32> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }
}

//! Spawn helpers: fighters start on the ground at opposite ends, facing each other.

use bevy::prelude::*;

use crate::components::{AiControlled, Archetype, Body, Facing, Fighter, Health, Side};
use crate::config::FightConfig;

/// Starting top-left corner and facing for a side.
pub fn spawn_placement(side: Side, config: &FightConfig) -> (Vec2, Facing) {
    let arena = &config.arena;
    let y = arena.ground_y - arena.fighter_height;

    match side {
        Side::One => (Vec2::new(arena.left_spawn_x, y), Facing::Right),
        Side::Two => (Vec2::new(arena.width - arena.right_spawn_offset, y), Facing::Left),
    }
}

/// Full component set of a freshly spawned fighter.
///
/// Kinematics/CombatState/FighterInput приходят через Required Components.
pub fn fighter_bundle(side: Side, archetype: Archetype, config: &FightConfig) -> impl Bundle {
    let (position, facing) = spawn_placement(side, config);
    let size = Vec2::new(config.arena.fighter_width, config.arena.fighter_height);

    (
        Fighter { side, archetype },
        Body::new(position, size, facing),
        Health::new(config.stats(archetype).max_health),
    )
}

/// Spawn helper для создания бойца
pub fn spawn_fighter(
    world: &mut World,
    side: Side,
    archetype: Archetype,
    ai_controlled: bool,
    config: &FightConfig,
) -> Entity {
    let mut entity = world.spawn(fighter_bundle(side, archetype, config));
    if ai_controlled {
        entity.insert(AiControlled);
    }
    entity.id()
}

/// Despawn every fighter (round reset).
pub fn despawn_fighters(world: &mut World) {
    let fighters: Vec<Entity> = world
        .query_filtered::<Entity, With<Fighter>>()
        .iter(world)
        .collect();

    for entity in fighters {
        world.despawn(entity);
    }
}

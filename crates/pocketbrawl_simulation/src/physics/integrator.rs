//! Kinematic integrator для бойцов
//!
//! Архитектура:
//! - Custom velocity integration (units/tick, без delta time — тик фиксирован)
//! - Gravity только в воздухе
//! - Ground clamp по линии земли + clamp по ширине арены
//!
//! Работает каждый тик для каждого бойца, независимо от attack/guard.

use bevy::prelude::*;

use crate::components::{Body, Fighter, Kinematics};
use crate::config::{ArenaConfig, FightConfig, PhysicsTuning};

/// Advance one fighter by one tick.
pub fn integrate(
    body: &mut Body,
    kinematics: &mut Kinematics,
    physics: &PhysicsTuning,
    arena: &ArenaConfig,
) {
    if !kinematics.on_ground {
        kinematics.velocity.y += physics.gravity;
    }

    body.position += kinematics.velocity;

    // Ground collision: нижняя грань дошла до земли → snap
    if body.bottom() >= arena.ground_y {
        body.position.y = arena.ground_y - body.size.y;
        kinematics.velocity.y = 0.0;
        kinematics.on_ground = true;
    }

    let max_x = (arena.width - body.size.x).max(0.0);
    body.position.x = body.position.x.clamp(0.0, max_x);
}

/// System: integrate all fighters (после update_fighters).
pub fn integrate_fighters(
    config: Res<FightConfig>,
    mut fighters: Query<(&mut Body, &mut Kinematics), With<Fighter>>,
) {
    for (mut body, mut kinematics) in fighters.iter_mut() {
        integrate(&mut body, &mut kinematics, &config.physics, &config.arena);
    }
}

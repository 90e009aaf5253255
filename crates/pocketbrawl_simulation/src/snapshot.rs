//! Render snapshot: всё, что presentation layer нужно для одного кадра.
//!
//! Read-only копия состояния, serde-сериализуемая (для UI, логов, тестов).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{Archetype, Body, Facing, Fighter, Health, Kinematics, Side};
use crate::config::FightConfig;
use crate::fighter::{Action, CombatState};
use crate::round::{RoundOutcome, RoundPhase, RoundState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterSnapshot {
    pub side: Side,
    pub archetype: Archetype,
    pub name: String,
    /// Hex colour tag, e.g. "#FF6B35"
    pub color: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub on_ground: bool,
    pub facing: Facing,
    pub action: Action,
    pub health: u32,
    pub max_health: u32,
    pub health_fraction: f32,
    pub guarding: bool,
    pub invulnerable: bool,
    pub animation_frame: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightSnapshot {
    pub phase: RoundPhase,
    pub round: u32,
    pub round_time: u32,
    pub tick: u64,
    pub winner: Option<RoundOutcome>,
    pub score: [u32; 2],
    /// Отсортированы по Side
    pub fighters: Vec<FighterSnapshot>,
}

impl FightSnapshot {
    pub fn fighter(&self, side: Side) -> Option<&FighterSnapshot> {
        self.fighters.iter().find(|fighter| fighter.side == side)
    }
}

/// Copy the current fight state out of the world.
pub fn capture_snapshot(world: &mut World) -> FightSnapshot {
    let config = world.get_resource::<FightConfig>().cloned().unwrap_or_default();
    let round = world.get_resource::<RoundState>().cloned().unwrap_or_default();

    let mut query = world.query::<(&Fighter, &Body, &Kinematics, &Health, &CombatState)>();
    let mut fighters: Vec<FighterSnapshot> = query
        .iter(world)
        .map(|(fighter, body, kinematics, health, state)| {
            let stats = config.stats(fighter.archetype);
            FighterSnapshot {
                side: fighter.side,
                archetype: fighter.archetype,
                name: stats.name.clone(),
                color: stats.color.clone(),
                x: body.position.x,
                y: body.position.y,
                width: body.size.x,
                height: body.size.y,
                velocity_x: kinematics.velocity.x,
                velocity_y: kinematics.velocity.y,
                on_ground: kinematics.on_ground,
                facing: body.facing,
                action: state.action,
                health: health.current,
                max_health: health.max,
                health_fraction: health.fraction(),
                guarding: state.guarding,
                invulnerable: state.invulnerable,
                animation_frame: state.animation.frame,
            }
        })
        .collect();
    fighters.sort_by_key(|fighter| fighter.side);

    FightSnapshot {
        phase: round.phase,
        round: round.current_round,
        round_time: round.round_time,
        tick: round.tick,
        winner: round.winner,
        score: round.score,
        fighters,
    }
}

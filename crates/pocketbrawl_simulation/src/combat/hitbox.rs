//! Hitbox geometry для атак
//!
//! Архитектура:
//! - Hitbox существует только пока атака активна (CombatState::attack)
//! - Один прямоугольник перед телом по facing
//! - Вертикально ужат на `hitbox_inset` сверху и снизу
//! - Hurt-box = полное тело (Body::hurtbox)

use bevy::prelude::*;

use crate::components::{Body, Facing};
use crate::config::AttackTable;
use crate::fighter::{AttackKind, CombatState};
use crate::geometry::Rect;

/// Hitbox активной атаки (пересчитывается каждый тик)
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Hitbox {
    pub rect: Rect,
    pub damage: u32,
    pub kind: AttackKind,
}

/// Hit-boxes of a fighter this tick. Empty unless an attack is active.
pub fn attack_hitboxes(body: &Body, state: &CombatState, attacks: &AttackTable) -> Vec<Hitbox> {
    let Some(kind) = state.attack_kind() else {
        return Vec::new();
    };

    let profile = kind.profile(attacks);
    let x = match body.facing {
        Facing::Right => body.position.x + body.size.x,
        Facing::Left => body.position.x - profile.reach,
    };
    let inset = attacks.hitbox_inset;

    vec![Hitbox {
        rect: Rect::new(
            x,
            body.position.y + inset,
            profile.reach,
            (body.size.y - 2.0 * inset).max(0.0),
        ),
        damage: profile.damage,
        kind,
    }]
}

//! Combat system module
//!
//! ECS ответственность:
//! - Hit-box geometry активных атак
//! - Collision: hit-box vs hurt-box (AABB)
//! - Damage, knockback, invulnerability window
//! - Events: AttackStarted, FighterHit
//!
//! Presentation (звук, hit flash, screen shake) только читает события.

use bevy::prelude::*;

pub mod events;
pub mod hitbox;
pub mod resolver;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod resolver_tests;

// Re-export основных типов
pub use events::{AttackStarted, FighterHit};
pub use hitbox::{attack_hitboxes, Hitbox};
pub use resolver::{apply_hit, resolve, resolve_attacks, FighterView, Hit};

/// Combat Plugin
///
/// Регистрирует combat события. Системы (`resolve_attacks`) ставит
/// `SimulationPlugin` в общую цепочку тика.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AttackStarted>().add_event::<FighterHit>();
    }
}

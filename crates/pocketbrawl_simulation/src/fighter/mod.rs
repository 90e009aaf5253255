//! Fighter module: per-fighter state machine (movement, jump, guard, attacks,
//! cooldowns, invulnerability) and spawn helpers.

pub mod spawn;
pub mod state;
pub mod systems;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod state_tests;

pub use spawn::{despawn_fighters, fighter_bundle, spawn_fighter, spawn_placement};
pub use state::{Action, ActiveAttack, AnimationClock, AttackKind, CombatState, Cooldowns};
pub use systems::update_fighters;

//! Combat events — для presentation layer (звук, UI, hit flash)
//!
//! Core никогда не вызывает rendering/audio напрямую, только пишет события.

use bevy::prelude::*;

use crate::components::Side;
use crate::fighter::AttackKind;

/// Событие: атака началась (swing sound, animation trigger)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackStarted {
    pub round: u32,
    pub tick: u64,
    pub side: Side,
    pub attack: AttackKind,
}

/// Событие: удар прошёл (урон применён)
///
/// `position` — центр defender после удара (точка для hit effect).
#[derive(Event, Debug, Clone, PartialEq)]
pub struct FighterHit {
    pub round: u32,
    pub tick: u64,
    pub attacker: Side,
    pub defender: Side,
    pub attack: AttackKind,
    pub damage: u32,
    pub position: Vec2,
    /// Health defender после удара
    pub defender_health: u32,
}

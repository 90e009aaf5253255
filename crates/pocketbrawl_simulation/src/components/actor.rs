//! Базовые компоненты бойца: Fighter, Health, AiControlled

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{FighterInput, Kinematics};
use crate::fighter::CombatState;

/// Which end of the arena a fighter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect, Serialize, Deserialize)]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::One, Side::Two];

    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
}

/// Stat/ability profile. Stats live in `FightConfig`, not on the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum Archetype {
    /// Slow, tanky, special = forward dash.
    Heavy,
    /// Quick, fragile, special = teleport (invulnerability window).
    Fast,
}

/// Боец (одна сторона поединка)
///
/// Movement/combat state приходят через Required Components;
/// Body и Health задаются при спавне из FightConfig.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(Kinematics, CombatState, FighterInput)]
pub struct Fighter {
    pub side: Side,
    pub archetype: Archetype,
}

/// Здоровье бойца
///
/// Инвариант: 0 ≤ current ≤ max, max фиксирован при спавне.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.max);
    }

    /// 0.0..=1.0, for health bars.
    pub fn fraction(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }
}

/// Маркер: ввод генерирует AI policy, а не хост
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct AiControlled;

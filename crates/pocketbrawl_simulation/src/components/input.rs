//! Нормализованный ввод бойца (7 кнопок)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Input snapshot for one fighter, one tick.
///
/// Хост (клавиатура + touch merge) или AI policy перезаписывает его
/// каждый тик; симуляция только читает. Противоречивые комбинации
/// разрешаются приоритетом в `CombatState::update`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct FighterInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub guard: bool,
    pub light_attack: bool,
    pub heavy_attack: bool,
    pub special: bool,
}

impl FighterInput {
    pub fn has_attack(&self) -> bool {
        self.light_attack || self.heavy_attack || self.special
    }

    pub fn has_movement(&self) -> bool {
        self.move_left || self.move_right
    }

    /// Every button held at once.
    pub fn mash() -> Self {
        Self {
            move_left: true,
            move_right: true,
            jump: true,
            guard: true,
            light_attack: true,
            heavy_attack: true,
            special: true,
        }
    }
}

//! Movement компоненты: Body (transform + size), Kinematics (velocity, ground flag)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// -1.0 for left, 1.0 for right.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Тело бойца в экранных координатах
///
/// `position` — верхний левый угол, y растёт вниз (земля внизу экрана).
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Body {
    pub position: Vec2,
    pub size: Vec2,
    pub facing: Facing,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2, facing: Facing) -> Self {
        Self {
            position,
            size,
            facing,
        }
    }

    /// Hurt-box: the full body bounds.
    pub fn hurtbox(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }
}

/// Скорость (units/tick) + ground flag
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Kinematics {
    pub velocity: Vec2,
    pub on_ground: bool,
}

impl Default for Kinematics {
    fn default() -> Self {
        // Бойцы спавнятся стоя на земле
        Self {
            velocity: Vec2::ZERO,
            on_ground: true,
        }
    }
}

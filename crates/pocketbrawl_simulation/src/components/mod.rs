//! ECS Components для бойцов
//!
//! Организация по доменам:
//! - actor: идентичность и здоровье (Fighter, Side, Archetype, Health, AiControlled)
//! - movement: тело и кинематика (Body, Facing, Kinematics)
//! - input: снимок ввода на тик (FighterInput)
//!
//! Боевое состояние (CombatState) живёт в `crate::fighter`.

pub mod actor;
pub mod input;
pub mod movement;

// Re-exports для удобного импорта
pub use actor::*;
pub use input::*;
pub use movement::*;

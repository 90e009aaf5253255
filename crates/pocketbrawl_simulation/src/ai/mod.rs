//! AI decision-making module
//!
//! Одна простая policy (distance bands + random draws), без уровней сложности.

pub mod policy;
pub mod systems;

// Re-export основных типов
pub use policy::decide;
pub use systems::drive_ai_fighters;

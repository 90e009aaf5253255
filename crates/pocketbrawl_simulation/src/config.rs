//! Fight tuning: archetype stat table, attack table, physics, arena, AI, round.
//!
//! Loaded once before the match (defaults or TOML) and inserted as a resource.
//! Nothing mutates it while a round is running.
//!
//! Все длительности — в тиках симуляции (60 Hz).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::Archetype;
use crate::error::FightError;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FightConfig {
    pub heavy: ArchetypeStats,
    pub fast: ArchetypeStats,
    pub attacks: AttackTable,
    pub physics: PhysicsTuning,
    pub arena: ArenaConfig,
    pub ai: AiTuning,
    pub round: RoundTuning,
}

impl Default for FightConfig {
    fn default() -> Self {
        Self {
            heavy: ArchetypeStats::heavy(),
            fast: ArchetypeStats::fast(),
            attacks: AttackTable::default(),
            physics: PhysicsTuning::default(),
            arena: ArenaConfig::default(),
            ai: AiTuning::default(),
            round: RoundTuning::default(),
        }
    }
}

impl FightConfig {
    /// Parse a (possibly partial) TOML document; missing sections keep defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, FightError> {
        let config: FightConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, FightError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn stats(&self, archetype: Archetype) -> &ArchetypeStats {
        match archetype {
            Archetype::Heavy => &self.heavy,
            Archetype::Fast => &self.fast,
        }
    }

    pub fn validate(&self) -> Result<(), FightError> {
        for stats in [&self.heavy, &self.fast] {
            if stats.max_health == 0 {
                return Err(FightError::InvalidTuning {
                    field: "max_health",
                    reason: "must be greater than zero",
                });
            }
            if stats.speed < 0.0 || stats.jump_power < 0.0 {
                return Err(FightError::InvalidTuning {
                    field: "speed/jump_power",
                    reason: "must not be negative",
                });
            }
        }

        for profile in [&self.attacks.light, &self.attacks.heavy, &self.attacks.special] {
            if profile.active_ticks == 0 {
                return Err(FightError::InvalidTuning {
                    field: "active_ticks",
                    reason: "an attack must stay active for at least one tick",
                });
            }
        }

        if self.round.ticks_per_second == 0 {
            return Err(FightError::InvalidTuning {
                field: "ticks_per_second",
                reason: "must be greater than zero",
            });
        }
        if self.round.round_seconds == 0 {
            return Err(FightError::InvalidTuning {
                field: "round_seconds",
                reason: "must be greater than zero",
            });
        }
        if self.round.rounds_to_win == 0 {
            return Err(FightError::InvalidTuning {
                field: "rounds_to_win",
                reason: "must be greater than zero",
            });
        }

        let ai = &self.ai;
        let probabilities = [
            ai.light_attack_chance,
            ai.heavy_attack_chance,
            ai.special_chance,
            ai.guard_chance,
            ai.jump_chance,
        ];
        if probabilities.iter().any(|p| !(0.0..=1.0).contains(p)) {
            return Err(FightError::InvalidTuning {
                field: "ai chances",
                reason: "probabilities must lie in [0, 1]",
            });
        }
        if ai.near_distance > ai.far_distance {
            return Err(FightError::InvalidTuning {
                field: "near_distance",
                reason: "must not exceed far_distance",
            });
        }

        if self.arena.width < self.arena.fighter_width {
            return Err(FightError::InvalidTuning {
                field: "arena.width",
                reason: "arena narrower than a fighter",
            });
        }

        Ok(())
    }
}

// ============================================================================
// Archetypes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeStats {
    /// Display name for round-end messages ("WARRIOR WINS!").
    pub name: String,
    /// Cosmetic colour tag for the renderer.
    pub color: String,
    /// Horizontal walk speed (units/tick).
    pub speed: f32,
    /// Initial upward velocity of a jump (units/tick).
    pub jump_power: f32,
    pub max_health: u32,
    pub special: SpecialEffect,
}

impl ArchetypeStats {
    pub fn heavy() -> Self {
        Self {
            name: "Warrior".into(),
            color: "#FF6B35".into(),
            speed: 2.5,
            jump_power: 15.0,
            max_health: 120,
            special: SpecialEffect::Dash { impulse: 8.0 },
        }
    }

    pub fn fast() -> Self {
        Self {
            name: "Ninja".into(),
            color: "#8B5CF6".into(),
            speed: 4.0,
            jump_power: 18.0,
            max_health: 80,
            special: SpecialEffect::Phase {
                invulnerable_ticks: 30,
            },
        }
    }
}

/// Archetype-specific side effect of the special attack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpecialEffect {
    /// Charge forward along facing.
    Dash { impulse: f32 },
    /// Teleport: invulnerable for a fixed window.
    Phase { invulnerable_ticks: u32 },
}

// ============================================================================
// Attacks
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackProfile {
    pub damage: u32,
    /// Hit-box width in front of the body.
    pub reach: f32,
    pub cooldown_ticks: u32,
    /// How long `is_attacking` stays up after the attack starts.
    pub active_ticks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackTable {
    pub light: AttackProfile,
    pub heavy: AttackProfile,
    pub special: AttackProfile,
    /// Hit-box is inset this much from the top and bottom of the body.
    pub hitbox_inset: f32,
    /// Horizontal velocity added to a hit defender.
    pub knockback: f32,
    /// Invulnerability granted to a hit defender.
    pub hit_invulnerability_ticks: u32,
}

impl Default for AttackTable {
    fn default() -> Self {
        Self {
            // 300ms / 500ms / 800ms при 60 Hz
            light: AttackProfile { damage: 15, reach: 60.0, cooldown_ticks: 20, active_ticks: 18 },
            heavy: AttackProfile { damage: 25, reach: 80.0, cooldown_ticks: 40, active_ticks: 30 },
            special: AttackProfile { damage: 35, reach: 60.0, cooldown_ticks: 180, active_ticks: 48 },
            hitbox_inset: 10.0,
            knockback: 5.0,
            hit_invulnerability_ticks: 30,
        }
    }
}

// ============================================================================
// Physics / arena
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Added to vertical velocity every airborne tick.
    pub gravity: f32,
    /// Horizontal velocity multiplier on ticks without movement input.
    pub damping: f32,
    /// Horizontal velocity multiplier while guarding.
    pub guard_slowdown: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            damping: 0.8,
            guard_slowdown: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    /// Y of the ground line; fighters stand with their bottom edge on it.
    pub ground_y: f32,
    pub fighter_width: f32,
    pub fighter_height: f32,
    /// Spawn x of side one (left end).
    pub left_spawn_x: f32,
    /// Side two spawns at `width - right_spawn_offset`.
    pub right_spawn_offset: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            ground_y: 400.0,
            fighter_width: 50.0,
            fighter_height: 80.0,
            left_spawn_x: 100.0,
            right_spawn_offset: 150.0,
        }
    }
}

// ============================================================================
// AI / round
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiTuning {
    /// Beyond this horizontal distance the AI walks toward the opponent.
    pub far_distance: f32,
    /// Within this distance the AI rolls for attacks and guard.
    pub near_distance: f32,
    pub light_attack_chance: f64,
    pub heavy_attack_chance: f64,
    pub special_chance: f64,
    pub guard_chance: f64,
    /// Rolled every tick regardless of distance.
    pub jump_chance: f64,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            far_distance: 150.0,
            near_distance: 80.0,
            light_attack_chance: 0.3,
            heavy_attack_chance: 0.1,
            special_chance: 0.05,
            guard_chance: 0.2,
            jump_chance: 0.02,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundTuning {
    pub round_seconds: u32,
    /// Simulation ticks per round-clock second (and the fixed timestep rate).
    pub ticks_per_second: u32,
    /// KO wins needed to take the match.
    pub rounds_to_win: u32,
}

impl Default for RoundTuning {
    fn default() -> Self {
        Self {
            round_seconds: 99,
            ticks_per_second: 60,
            rounds_to_win: 2,
        }
    }
}

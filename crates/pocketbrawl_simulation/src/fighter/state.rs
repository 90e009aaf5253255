//! Fighter combat state machine.
//!
//! One `CombatState::update` per fighter per tick, fixed priority:
//!
//! 1. **Timers**: cooldowns, invulnerability, active attack tick down (floor 0)
//! 2. **Movement**: walk left/right or damp to idle (skipped while attacking)
//! 3. **Jump**: only from the ground and not while attacking
//! 4. **Guard**: whenever the guard cooldown is ready
//! 5. **Attack**: light → heavy → special, first ready one wins
//!
//! Later steps overwrite the action tag of earlier ones, so contradictory
//! input always resolves as movement < jump < guard < attack.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{Archetype, Body, Facing, FighterInput, Kinematics};
use crate::config::{ArchetypeStats, AttackProfile, AttackTable, FightConfig, SpecialEffect};

// ============================================================================
// Action tag
// ============================================================================

/// What the fighter is doing right now.
///
/// Drives hit-box geometry here and animation selection in the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum Action {
    #[default]
    Idle,
    Walk,
    Jump,
    Guard,
    LightAttack,
    HeavyAttack,
    Special,
}

impl Action {
    pub fn is_attack(self) -> bool {
        matches!(self, Action::LightAttack | Action::HeavyAttack | Action::Special)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum AttackKind {
    Light,
    Heavy,
    Special,
}

impl AttackKind {
    pub fn action(self) -> Action {
        match self {
            AttackKind::Light => Action::LightAttack,
            AttackKind::Heavy => Action::HeavyAttack,
            AttackKind::Special => Action::Special,
        }
    }

    pub fn profile(self, table: &AttackTable) -> &AttackProfile {
        match self {
            AttackKind::Light => &table.light,
            AttackKind::Heavy => &table.heavy,
            AttackKind::Special => &table.special,
        }
    }
}

/// Attack in progress. Cleared when `ticks_remaining` runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub struct ActiveAttack {
    pub kind: AttackKind,
    pub ticks_remaining: u32,
}

// ============================================================================
// Timers
// ============================================================================

/// Ticks until each action can be started again (0 = ready).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub struct Cooldowns {
    /// Shared by light and heavy attacks.
    pub attack: u32,
    /// Never armed: guard is always available.
    pub guard: u32,
    pub special: u32,
}

impl Cooldowns {
    pub fn tick(&mut self) {
        self.attack = self.attack.saturating_sub(1);
        self.guard = self.guard.saturating_sub(1);
        self.special = self.special.saturating_sub(1);
    }
}

const ANIMATION_FRAMES: u8 = 4;
const TICKS_PER_ANIMATION_FRAME: u8 = 10;

/// Presentation-only walk cycle counter. Not part of the combat rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub struct AnimationClock {
    pub frame: u8,
    timer: u8,
}

impl AnimationClock {
    pub fn advance(&mut self) {
        self.timer += 1;
        if self.timer >= TICKS_PER_ANIMATION_FRAME {
            self.frame = (self.frame + 1) % ANIMATION_FRAMES;
            self.timer = 0;
        }
    }
}

// ============================================================================
// Combat State Component
// ============================================================================

/// Per-fighter state machine.
///
/// Инварианты (на границе тиков):
/// - `attack.is_some()` ⇔ `action.is_attack()`
/// - `invulnerable_ticks > 0` ⇒ `invulnerable`
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CombatState {
    pub action: Action,
    pub attack: Option<ActiveAttack>,
    pub guarding: bool,
    pub invulnerable: bool,
    pub invulnerable_ticks: u32,
    pub cooldowns: Cooldowns,
    pub animation: AnimationClock,
}

impl CombatState {
    pub fn is_attacking(&self) -> bool {
        self.attack.is_some()
    }

    pub fn attack_kind(&self) -> Option<AttackKind> {
        self.attack.map(|attack| attack.kind)
    }

    /// Overwrites any running invulnerability window.
    pub fn make_invulnerable(&mut self, ticks: u32) {
        self.invulnerable = ticks > 0;
        self.invulnerable_ticks = ticks;
    }

    /// Advance one tick with this tick's input.
    ///
    /// Returns the attack started this tick, if any. Requests whose cooldown
    /// is not ready are ignored without any partial effect.
    pub fn update(
        &mut self,
        input: &FighterInput,
        body: &mut Body,
        kinematics: &mut Kinematics,
        archetype: Archetype,
        config: &FightConfig,
    ) -> Option<AttackKind> {
        let stats = config.stats(archetype);

        self.tick_timers();
        self.animation.advance();
        self.guarding = false;

        self.apply_movement(input, body, kinematics, stats, config.physics.damping);

        if input.jump && kinematics.on_ground && !self.is_attacking() {
            kinematics.velocity.y = -stats.jump_power;
            kinematics.on_ground = false;
            self.action = Action::Jump;
        }

        if input.guard && self.cooldowns.guard == 0 {
            self.guarding = true;
            kinematics.velocity.x *= config.physics.guard_slowdown;
            // Guard mid-swing keeps the attack tag
            if !self.is_attacking() {
                self.action = Action::Guard;
            }
        }

        let kind = self.select_attack(input)?;
        self.start_attack(kind, body, kinematics, stats, &config.attacks);
        Some(kind)
    }

    fn tick_timers(&mut self) {
        self.cooldowns.tick();

        if self.invulnerable_ticks > 0 {
            self.invulnerable_ticks -= 1;
            if self.invulnerable_ticks == 0 {
                self.invulnerable = false;
            }
        } else {
            self.invulnerable = false;
        }

        if let Some(attack) = self.attack.as_mut() {
            attack.ticks_remaining = attack.ticks_remaining.saturating_sub(1);
            if attack.ticks_remaining == 0 {
                self.attack = None;
            }
        }
    }

    fn apply_movement(
        &mut self,
        input: &FighterInput,
        body: &mut Body,
        kinematics: &mut Kinematics,
        stats: &ArchetypeStats,
        damping: f32,
    ) {
        if self.is_attacking() {
            return;
        }

        // Left wins when both directions are held
        if input.move_left {
            kinematics.velocity.x = -stats.speed;
            body.facing = Facing::Left;
            self.action = Action::Walk;
        } else if input.move_right {
            kinematics.velocity.x = stats.speed;
            body.facing = Facing::Right;
            self.action = Action::Walk;
        } else {
            kinematics.velocity.x *= damping;
            self.action = Action::Idle;
        }
    }

    fn select_attack(&self, input: &FighterInput) -> Option<AttackKind> {
        if input.light_attack && self.cooldowns.attack == 0 {
            Some(AttackKind::Light)
        } else if input.heavy_attack && self.cooldowns.attack == 0 {
            Some(AttackKind::Heavy)
        } else if input.special && self.cooldowns.special == 0 {
            Some(AttackKind::Special)
        } else {
            None
        }
    }

    fn start_attack(
        &mut self,
        kind: AttackKind,
        body: &Body,
        kinematics: &mut Kinematics,
        stats: &ArchetypeStats,
        attacks: &AttackTable,
    ) {
        let profile = kind.profile(attacks);

        self.attack = Some(ActiveAttack {
            kind,
            ticks_remaining: profile.active_ticks,
        });
        self.action = kind.action();
        kinematics.velocity.x = 0.0;

        match kind {
            AttackKind::Light | AttackKind::Heavy => self.cooldowns.attack = profile.cooldown_ticks,
            AttackKind::Special => {
                self.cooldowns.special = profile.cooldown_ticks;
                match stats.special {
                    SpecialEffect::Dash { impulse } => {
                        kinematics.velocity.x = body.facing.sign() * impulse;
                    }
                    SpecialEffect::Phase { invulnerable_ticks } => {
                        self.make_invulnerable(invulnerable_ticks);
                    }
                }
            }
        }
    }
}

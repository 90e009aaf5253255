//! Attack resolution: hit-box vs hurt-box → damage, knockback, invulnerability
//!
//! Обе стороны резолвятся из одного pre-resolution снимка, поэтому порядок
//! бойцов не влияет на результат: взаимные удары применяются оба.

use bevy::ecs::error::BevyError;
use bevy::prelude::*;

use crate::combat::hitbox::attack_hitboxes;
use crate::combat::FighterHit;
use crate::components::{Body, Fighter, Health, Kinematics, Side};
use crate::config::{AttackTable, FightConfig};
use crate::error::FightError;
use crate::fighter::{AttackKind, CombatState};
use crate::round::RoundState;

/// Снимок бойца до резолва удара
#[derive(Debug, Clone)]
pub struct FighterView {
    pub side: Side,
    pub body: Body,
    pub state: CombatState,
}

/// Попадание (ещё не применённое)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub attacker: Side,
    pub defender: Side,
    pub attack: AttackKind,
    pub damage: u32,
    /// -1.0 / 1.0: куда отбрасывает defender
    pub direction: f32,
}

/// Hits `attacker` lands on `defender` this tick.
///
/// Guarding or invulnerable defenders take nothing.
pub fn resolve(attacker: &FighterView, defender: &FighterView, attacks: &AttackTable) -> Vec<Hit> {
    if defender.state.guarding || defender.state.invulnerable {
        return Vec::new();
    }

    let hurtbox = defender.body.hurtbox();
    let direction = knockback_direction(&attacker.body, &defender.body);

    attack_hitboxes(&attacker.body, &attacker.state, attacks)
        .into_iter()
        .filter(|hitbox| hitbox.rect.overlaps(&hurtbox))
        .map(|hitbox| Hit {
            attacker: attacker.side,
            defender: defender.side,
            attack: hitbox.kind,
            damage: hitbox.damage,
            direction,
        })
        .collect()
}

/// Away from the attacker; attacker's facing breaks a tie.
fn knockback_direction(attacker: &Body, defender: &Body) -> f32 {
    let dx = defender.center().x - attacker.center().x;
    if dx > 0.0 {
        1.0
    } else if dx < 0.0 {
        -1.0
    } else {
        attacker.facing.sign()
    }
}

/// Apply one hit to the defender. Returns false if the defender already
/// became invulnerable earlier this tick.
pub fn apply_hit(
    hit: &Hit,
    health: &mut Health,
    kinematics: &mut Kinematics,
    state: &mut CombatState,
    attacks: &AttackTable,
) -> bool {
    if state.invulnerable {
        return false;
    }

    health.take_damage(hit.damage);
    kinematics.velocity.x += hit.direction * attacks.knockback;
    state.make_invulnerable(attacks.hit_invulnerability_ticks);
    true
}

/// System: resolve attacks both ways, apply hits, emit `FighterHit`.
///
/// Требует ровно двух бойцов (иначе — ошибка программиста, fail fast).
pub fn resolve_attacks(
    config: Res<FightConfig>,
    round: Res<RoundState>,
    mut fighters: Query<(&Fighter, &Body, &mut Health, &mut Kinematics, &mut CombatState)>,
    mut hit_events: EventWriter<FighterHit>,
) -> Result<(), BevyError> {
    let mut views: Vec<FighterView> = fighters
        .iter()
        .map(|(fighter, body, _, _, state)| FighterView {
            side: fighter.side,
            body: *body,
            state: state.clone(),
        })
        .collect();

    if views.len() != 2 {
        return Err(FightError::FightersNotReady { found: views.len() }.into());
    }
    views.sort_by_key(|view| view.side);

    let attacks = &config.attacks;
    let hits: Vec<Hit> = resolve(&views[0], &views[1], attacks)
        .into_iter()
        .chain(resolve(&views[1], &views[0], attacks))
        .collect();

    for hit in &hits {
        for (fighter, body, mut health, mut kinematics, mut state) in fighters.iter_mut() {
            if fighter.side != hit.defender {
                continue;
            }
            if !apply_hit(hit, &mut health, &mut kinematics, &mut state, attacks) {
                continue;
            }

            hit_events.write(FighterHit {
                round: round.current_round,
                tick: round.tick,
                attacker: hit.attacker,
                defender: hit.defender,
                attack: hit.attack,
                damage: hit.damage,
                position: body.center(),
                defender_health: health.current,
            });

            crate::logger::log_info(&format!(
                "💥 {:?} hit {:?} with {:?} for {} (health {}/{})",
                hit.attacker, hit.defender, hit.attack, hit.damage, health.current, health.max
            ));
        }
    }

    Ok(())
}

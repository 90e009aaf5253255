//! Simple AI policy: distance bands + Bernoulli draws
//!
//! - Далеко (> far_distance): идём к противнику
//! - Близко (< near_distance): light / heavy / special / guard, каждый независимо
//! - Между: ничего (ждём, пока противник подойдёт)
//! - Прыжок: независимо от дистанции
//!
//! RNG инжектится снаружи (DeterministicRng в App, любой `Rng` в тестах).

use rand::Rng;

use crate::components::{Body, FighterInput};
use crate::config::AiTuning;

/// Produce this tick's input for an AI fighter.
///
/// Draw order is fixed (light, heavy, special, guard, jump) so a seeded RNG
/// replays the same decisions.
pub fn decide(me: &Body, opponent: &Body, tuning: &AiTuning, rng: &mut impl Rng) -> FighterInput {
    let mut input = FighterInput::default();
    let offset = opponent.position.x - me.position.x;
    let distance = offset.abs();

    if distance > tuning.far_distance {
        if offset > 0.0 {
            input.move_right = true;
        } else {
            input.move_left = true;
        }
    } else if distance < tuning.near_distance {
        input.light_attack = rng.gen_bool(tuning.light_attack_chance);
        input.heavy_attack = rng.gen_bool(tuning.heavy_attack_chance);
        input.special = rng.gen_bool(tuning.special_chance);
        input.guard = rng.gen_bool(tuning.guard_chance);
    }

    input.jump = rng.gen_bool(tuning.jump_chance);
    input
}

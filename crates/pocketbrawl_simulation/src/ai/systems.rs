//! AI systems: policy → FighterInput для AiControlled бойцов.

use bevy::prelude::*;

use crate::ai::decide;
use crate::components::{AiControlled, Body, Fighter, FighterInput, Side};
use crate::config::FightConfig;
use crate::DeterministicRng;

/// Система: AI input generation
///
/// Перезаписывает FighterInput каждого AI бойца до `update_fighters`.
/// Бойцы обходятся в порядке Side, чтобы RNG draws были детерминированы.
pub fn drive_ai_fighters(
    config: Res<FightConfig>,
    mut rng: ResMut<DeterministicRng>,
    bodies: Query<(&Fighter, &Body)>,
    mut ai_fighters: Query<(&Fighter, &mut FighterInput), With<AiControlled>>,
) {
    let find_body = |side: Side| {
        bodies
            .iter()
            .find(|(fighter, _)| fighter.side == side)
            .map(|(_, body)| *body)
    };

    let mut controlled: Vec<_> = ai_fighters.iter_mut().collect();
    controlled.sort_by_key(|(fighter, _)| fighter.side);

    for (fighter, input) in controlled.iter_mut() {
        let (Some(me), Some(opponent)) = (find_body(fighter.side), find_body(fighter.side.opponent()))
        else {
            continue;
        };

        **input = decide(&me, &opponent, &config.ai, &mut rng.rng);
    }
}

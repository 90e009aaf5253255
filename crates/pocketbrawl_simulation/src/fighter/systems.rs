//! Fighter systems: input → state machine.

use bevy::prelude::*;

use crate::combat::AttackStarted;
use crate::components::{Body, Fighter, FighterInput, Kinematics};
use crate::config::FightConfig;
use crate::fighter::CombatState;
use crate::round::RoundState;

/// System: advance every fighter's state machine with its input snapshot.
///
/// Emits `AttackStarted` for audio/UI when an attack begins.
pub fn update_fighters(
    config: Res<FightConfig>,
    round: Res<RoundState>,
    mut fighters: Query<(&Fighter, &FighterInput, &mut Body, &mut Kinematics, &mut CombatState)>,
    mut started_events: EventWriter<AttackStarted>,
) {
    for (fighter, input, mut body, mut kinematics, mut state) in fighters.iter_mut() {
        let Some(attack) = state.update(input, &mut body, &mut kinematics, fighter.archetype, &config)
        else {
            continue;
        };

        started_events.write(AttackStarted {
            round: round.current_round,
            tick: round.tick,
            side: fighter.side,
            attack,
        });

        crate::logger::log(&format!(
            "⚔️ {:?} started {:?} attack (round {}, tick {})",
            fighter.side, attack, round.current_round, round.tick
        ));
    }
}

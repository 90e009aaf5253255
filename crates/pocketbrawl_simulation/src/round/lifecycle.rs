//! Round/match lifecycle: вызывается хостом между тиками, не из систем.
//!
//! - `start_match` — счёт в ноль, раунд 1, бойцы на стартовых позициях
//! - `start_next_round` — следующий раунд после окончания текущего
//! - `submit_input` — ввод человека на следующий тик

use bevy::prelude::*;

use crate::components::{Archetype, Fighter, FighterInput, Side};
use crate::config::FightConfig;
use crate::error::FightError;
use crate::fighter::{despawn_fighters, spawn_fighter};
use crate::round::{RoundPhase, RoundState};

/// Кто за какую сторону играет
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FighterSetup {
    pub archetype: Archetype,
    pub ai_controlled: bool,
}

/// Match line-up (resource). Default: human Heavy vs AI Fast.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct MatchSetup {
    pub fighters: [FighterSetup; 2],
}

impl Default for MatchSetup {
    fn default() -> Self {
        Self {
            fighters: [
                FighterSetup {
                    archetype: Archetype::Heavy,
                    ai_controlled: false,
                },
                FighterSetup {
                    archetype: Archetype::Fast,
                    ai_controlled: true,
                },
            ],
        }
    }
}

impl MatchSetup {
    /// Both sides driven by the AI policy.
    pub fn ai_vs_ai() -> Self {
        let mut setup = Self::default();
        for fighter in setup.fighters.iter_mut() {
            fighter.ai_controlled = true;
        }
        setup
    }

    pub fn for_side(&self, side: Side) -> FighterSetup {
        self.fighters[side.index()]
    }
}

/// Reset score and round counter, spawn fresh fighters, start round 1.
pub fn start_match(world: &mut World) {
    world.resource_mut::<RoundState>().reset_match();
    begin_round(world);
}

/// Start the next round once the current one has ended.
///
/// Refuses while a round is live or once a side has won the match.
pub fn start_next_round(world: &mut World) -> Result<(), FightError> {
    let rounds_to_win = world.resource::<FightConfig>().round.rounds_to_win;
    let round = world.resource::<RoundState>();

    if round.is_live() {
        return Err(FightError::RoundInProgress {
            round: round.current_round,
        });
    }
    if let Some(winner) = round.match_winner(rounds_to_win) {
        return Err(FightError::MatchDecided { winner });
    }

    if round.phase == RoundPhase::RoundEnding {
        world.resource_mut::<RoundState>().current_round += 1;
    }
    begin_round(world);
    Ok(())
}

/// Write a human fighter's input for the next tick.
pub fn submit_input(world: &mut World, side: Side, input: FighterInput) -> Result<(), FightError> {
    let mut fighters = world.query::<(&Fighter, &mut FighterInput)>();

    let mut target = fighters
        .iter_mut(world)
        .find(|(fighter, _)| fighter.side == side)
        .map(|(_, target)| target)
        .ok_or(FightError::FighterMissing(side))?;

    *target = input;
    Ok(())
}

fn begin_round(world: &mut World) {
    let config = world.resource::<FightConfig>().clone();
    let setup = world.resource::<MatchSetup>().clone();

    despawn_fighters(world);
    for side in Side::BOTH {
        let fighter = setup.for_side(side);
        spawn_fighter(world, side, fighter.archetype, fighter.ai_controlled, &config);
    }

    let mut round = world.resource_mut::<RoundState>();
    round.begin_round(&config.round);

    crate::logger::log_info(&format!(
        "🔔 Round {} start: {} vs {}",
        round.current_round,
        config.stats(setup.for_side(Side::One).archetype).name,
        config.stats(setup.for_side(Side::Two).archetype).name
    ));
}

//! Round systems: clock, judgement, run condition.

use bevy::ecs::error::BevyError;
use bevy::prelude::*;

use crate::components::{Fighter, Health};
use crate::config::FightConfig;
use crate::error::FightError;
use crate::round::{RoundOutcome, RoundState};

/// Событие: раунд окончен (KO или time up)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEnded {
    pub round: u32,
    pub tick: u64,
    pub outcome: RoundOutcome,
}

/// Run condition: the tick pipeline only runs while a round is live.
pub fn round_in_progress(round: Option<Res<RoundState>>) -> bool {
    round.is_some_and(|round| round.is_live())
}

/// System: first in the tick, advances the round clock.
pub fn advance_round_clock(config: Res<FightConfig>, mut round: ResMut<RoundState>) {
    if round.advance_clock(&config.round) {
        crate::logger::log(&format!("⏱️ Round {} clock hit zero", round.current_round));
    }
}

/// System: last in the tick, after combat. Ends the round on KO or time up.
pub fn judge_round(
    config: Res<FightConfig>,
    mut round: ResMut<RoundState>,
    fighters: Query<(&Fighter, &Health)>,
    mut ended_events: EventWriter<RoundEnded>,
) -> Result<(), BevyError> {
    let mut alive = [true; 2];
    let mut archetypes = [None; 2];
    let mut found = 0;
    for (fighter, health) in fighters.iter() {
        alive[fighter.side.index()] = health.is_alive();
        archetypes[fighter.side.index()] = Some(fighter.archetype);
        found += 1;
    }
    if found != 2 {
        return Err(FightError::FightersNotReady { found }.into());
    }

    let Some(outcome) = round.judge(alive) else {
        return Ok(());
    };

    round.conclude(outcome);
    ended_events.write(RoundEnded {
        round: round.current_round,
        tick: round.tick,
        outcome,
    });

    let headline = match outcome.winner() {
        Some(side) => {
            let name = archetypes[side.index()]
                .map(|archetype| config.stats(archetype).name.as_str())
                .unwrap_or("?");
            format!("{} WINS!", name.to_uppercase())
        }
        None => "TIME UP!".to_string(),
    };
    crate::logger::log_info(&format!(
        "🏁 Round {} over at tick {}: {} (score {}-{})",
        round.current_round, round.tick, headline, round.score[0], round.score[1]
    ));

    if let Some(champion) = round.match_winner(config.round.rounds_to_win) {
        crate::logger::log_info(&format!("🏆 Match decided: {:?} takes it", champion));
    }

    Ok(())
}

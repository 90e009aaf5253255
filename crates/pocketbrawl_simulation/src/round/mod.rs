//! Round controller: round clock, KO / time-up judgement, best-of match score.
//!
//! Раунд управляется двумя путями:
//! - Системы в тике: `advance_round_clock` (первой), `judge_round` (последней)
//! - Хост между тиками: `start_match`, `start_next_round`, `submit_input`

use bevy::prelude::*;

pub mod lifecycle;
pub mod state;
pub mod systems;

pub use lifecycle::{start_match, start_next_round, submit_input, FighterSetup, MatchSetup};
pub use state::{RoundOutcome, RoundPhase, RoundState};
pub use systems::{advance_round_clock, judge_round, round_in_progress, RoundEnded};

/// Round Plugin
///
/// Ресурсы RoundState/MatchSetup и событие RoundEnded. Раунд не стартует сам:
/// хост вызывает `start_match`.
pub struct RoundPlugin;

impl Plugin for RoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RoundState>()
            .init_resource::<MatchSetup>()
            .add_event::<RoundEnded>();
    }
}

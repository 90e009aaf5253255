//! Round/match state: clock, outcome, score.
//!
//! Тик-счётчик вместо wall-clock таймера: `round_time` падает на 1 каждые
//! `ticks_per_second` тиков, так что время раунда детерминировано.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::config::RoundTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum RoundPhase {
    #[default]
    NotStarted,
    InRound,
    /// Раунд окончен, тики заморожены до start_next_round / start_match
    RoundEnding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum RoundOutcome {
    Winner(Side),
    TimeExpired,
}

impl RoundOutcome {
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::Winner(side) => Some(side),
            RoundOutcome::TimeExpired => None,
        }
    }
}

/// Round controller state (resource)
///
/// Инварианты:
/// - `round_time` только убывает внутри раунда
/// - `winner.is_some()` ⇔ `phase == RoundEnding`
#[derive(Resource, Debug, Clone, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct RoundState {
    pub phase: RoundPhase,
    /// 1-based
    pub current_round: u32,
    /// Секунды до конца раунда
    pub round_time: u32,
    /// Тики с начала раунда
    pub tick: u64,
    /// Тики внутри текущей секунды
    second_ticks: u32,
    pub time_expired: bool,
    pub winner: Option<RoundOutcome>,
    /// KO-победы по сторонам (Side::index)
    pub score: [u32; 2],
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            phase: RoundPhase::NotStarted,
            current_round: 1,
            round_time: RoundTuning::default().round_seconds,
            tick: 0,
            second_ticks: 0,
            time_expired: false,
            winner: None,
            score: [0, 0],
        }
    }
}

impl RoundState {
    pub fn is_live(&self) -> bool {
        self.phase == RoundPhase::InRound
    }

    /// Fresh clock for the current round; keeps round number and score.
    pub fn begin_round(&mut self, tuning: &RoundTuning) {
        self.phase = RoundPhase::InRound;
        self.round_time = tuning.round_seconds;
        self.tick = 0;
        self.second_ticks = 0;
        self.time_expired = false;
        self.winner = None;
    }

    /// Back to round 1 with an empty score.
    pub fn reset_match(&mut self) {
        *self = Self::default();
    }

    /// One tick of the round clock. Returns true once time has run out.
    pub fn advance_clock(&mut self, tuning: &RoundTuning) -> bool {
        self.tick += 1;
        self.second_ticks += 1;

        if self.second_ticks >= tuning.ticks_per_second {
            self.second_ticks = 0;
            if self.round_time > 0 {
                self.round_time -= 1;
                if self.round_time == 0 {
                    self.time_expired = true;
                }
            }
        }

        self.time_expired
    }

    /// Outcome for this tick given who is still standing (indexed by side).
    ///
    /// KO beats time expiry. If both fall on the same tick side one's KO is
    /// checked first, so side two takes the round.
    pub fn judge(&self, alive: [bool; 2]) -> Option<RoundOutcome> {
        if !alive[Side::One.index()] {
            Some(RoundOutcome::Winner(Side::Two))
        } else if !alive[Side::Two.index()] {
            Some(RoundOutcome::Winner(Side::One))
        } else if self.time_expired {
            Some(RoundOutcome::TimeExpired)
        } else {
            None
        }
    }

    /// Record the outcome and freeze the round. Time-outs score nobody.
    pub fn conclude(&mut self, outcome: RoundOutcome) {
        self.winner = Some(outcome);
        self.phase = RoundPhase::RoundEnding;
        if let RoundOutcome::Winner(side) = outcome {
            self.score[side.index()] += 1;
        }
    }

    pub fn match_winner(&self, rounds_to_win: u32) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|side| self.score[side.index()] >= rounds_to_win)
    }
}

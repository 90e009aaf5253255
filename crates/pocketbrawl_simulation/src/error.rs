//! Fight error types.
//!
//! Valid player input never produces an error: contradictory buttons are
//! resolved by priority and out-of-range values are clamped. What remains is
//! config loading and caller misuse of the round lifecycle.

use thiserror::Error;

use crate::components::Side;

#[derive(Error, Debug)]
pub enum FightError {
    /// Config file could not be read.
    #[error("failed to read fight config: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// Config TOML failed to parse.
    #[error("failed to parse fight config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config parsed but a tuning value is unusable.
    #[error("invalid tuning `{field}`: {reason}")]
    InvalidTuning {
        field: &'static str,
        reason: &'static str,
    },

    /// Tick pipeline ran without exactly two fighters in the arena.
    #[error("expected two fighters in the arena, found {found}")]
    FightersNotReady { found: usize },

    /// Input submitted for a side that has no fighter.
    #[error("no fighter spawned for {0:?}")]
    FighterMissing(Side),

    /// Next round requested while the current one is still being fought.
    #[error("round {round} has not ended yet")]
    RoundInProgress { round: u32 },

    /// Next round requested after the match already has a winner.
    #[error("match already decided in favour of {winner:?}")]
    MatchDecided { winner: Side },
}

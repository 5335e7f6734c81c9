//! # scorecard_games
//!
//! Scoring and settlement for golf side games.
//!
//! Given an 18-hole round (course holes, players, per-hole strokes) and the
//! games the group agreed to play, the engine computes each game's standings
//! hole by hole. The settlement calculator then turns those results into
//! dollar balances and a short list of "who pays whom" transfers.
//!
//! ## How it works
//!
//! 1. Build or load a [`Round`] (see [`config::round_from_json`]). Scores may
//!    be partial: an unrecorded cell simply contributes nothing.
//! 2. Call [`score_game`] for one game or [`score_round`] for all of them.
//!    Every format is a pure function selected from a format → scorer table;
//!    formats without rules return a "not implemented" result instead of
//!    failing.
//! 3. Call [`settle_round`] (or [`settle_rounds`] for a multi-round event) to
//!    get per-game deltas, net balances and transfers.
//!
//! ## Implemented formats
//!
//! Skins (with carryover), Nassau (individual or team, stroke totals),
//! Best Ball, Stableford and Modified Stableford, Match Play, 3-Point and
//! Wolf. Scramble, Bingo Bango Bongo, Vegas, Hammer, Rabbit, Trash, Chicago
//! and Defender are recognised but not scored.
//!
//! ## Quick start
//!
//! ```rust
//! use scorecard_games::{score_round, settle_round, simulate_round, SimulationRequest};
//!
//! let round = simulate_round(SimulationRequest::new(4).seeded(42));
//!
//! for scored in score_round(&round) {
//!     println!("{}: implemented = {}", scored.name, scored.result.is_implemented());
//! }
//!
//! let settlement = settle_round(&round);
//! for transfer in &settlement.transfers {
//!     println!("{transfer}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod scoring_engine;
pub mod settlement;
pub mod simulate;

// Convenience re-exports so callers can use `scorecard_games::score_game`
// directly without reaching into `scoring_engine::`.
pub use error::EngineError;
pub use scoring_engine::{
    leaderboard, score_game, score_round, Game, GameFormat, GameResult, HoleInfo, Player,
    PlayerId, Round, Score, ScoredGame, Standing, Team,
};
pub use settlement::{settle_round, settle_rounds, Balances, GameLedger, Settlement, Transfer};
pub use simulate::{simulate_round, SimulationRequest};

#[cfg(test)]
mod test_helpers;

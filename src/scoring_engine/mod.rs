//! Scoring engine: round strokes in, per-format results out.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Round, player, score, game and per-format settings types |
//! | `helpers`     | Score-card and par lookups shared by every format |
//! | `evaluator`   | Point tables, match status strings, point splits |
//! | `engine`      | `GameResult`, the format → scorer table, `score_game` / `score_round` |
//! | `formats`     | One scorer per game format |
//! | `leaderboard` | Gross stroke-play standings |

pub mod engine;
pub mod evaluator;
pub mod formats;
pub mod helpers;
pub mod leaderboard;
pub mod models;

pub use engine::{score_game, score_round, scorer, GameResult, ScoredGame, Scorer};
pub use leaderboard::{leaderboard, Standing};
pub use models::{
    BetSettings, Game, GameFormat, HoleInfo, NassauMode, NassauScope, NassauSettings, Player,
    PlayerId, Round, Score, SkinsSettings, Team, ThreePointPairs, ThreePointSettings, WolfChoice,
    WolfSettings, HOLE_COUNT,
};

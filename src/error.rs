//! Errors raised while loading or validating round data.
//!
//! Scoring and settlement never fail: they work on whatever partial data a
//! round holds. Only the boundary (JSON decoding, structural validation)
//! reports errors.

use crate::scoring_engine::models::PlayerId;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hole {0} is listed more than once")]
    DuplicateHole(u8),

    #[error("hole {0} is missing from the course layout")]
    MissingHole(u8),

    #[error("hole numbers must run 1..=18, found {0}")]
    HoleOutOfRange(u8),

    #[error("score for hole {hole} references unknown player {player_id}")]
    UnknownPlayer { player_id: PlayerId, hole: u8 },

    #[error("score for player {player_id} references unknown hole {hole}")]
    UnknownHole { player_id: PlayerId, hole: u8 },

    #[error("player {player_id} has more than one score on hole {hole}")]
    DuplicateScore { player_id: PlayerId, hole: u8 },

    #[error("player {player_id} has a zero-stroke score on hole {hole}")]
    ZeroStrokes { player_id: PlayerId, hole: u8 },

    #[error("game {game_id} lists unknown player {player_id}")]
    UnknownGamePlayer { game_id: String, player_id: PlayerId },

    #[error("team {team_id} in game {game_id} includes {player_id}, who is not in the game")]
    TeamOutsider { game_id: String, team_id: String, player_id: PlayerId },

    #[error("player {player_id} is on more than one team in game {game_id}")]
    PlayerOnTwoTeams { game_id: String, player_id: PlayerId },
}

pub type Result<T> = std::result::Result<T, EngineError>;

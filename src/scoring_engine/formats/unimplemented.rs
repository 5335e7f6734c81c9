use serde::{Deserialize, Serialize};

use crate::scoring_engine::models::{Game, GameFormat, Round};

/// Placeholder result for formats the engine does not score yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotImplemented {
    pub format: GameFormat,
    pub message: String,
}

pub fn score(_round: &Round, game: &Game) -> NotImplemented {
    tracing::warn!(game = %game.id, format = ?game.format, "Format has no scoring implementation");
    NotImplemented {
        format: game.format,
        message: format!("{} scoring is not implemented yet", game.format),
    }
}

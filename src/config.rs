//! Loading rounds and games from JSON, plus opt-in structural validation.
//!
//! The scorers accept anything that deserializes. `validate_round` is for
//! callers that want to reject a malformed round before it reaches the UI.

use std::collections::{BTreeSet, HashSet};

use crate::error::{EngineError, Result};
use crate::scoring_engine::models::{Game, Round, HOLE_COUNT};

pub fn round_from_json(json: &str) -> Result<Round> {
    Ok(serde_json::from_str(json)?)
}

pub fn game_from_json(json: &str) -> Result<Game> {
    Ok(serde_json::from_str(json)?)
}

/// Decode and validate in one step.
pub fn load_round(json: &str) -> Result<Round> {
    let round = round_from_json(json)?;
    validate_round(&round)?;
    Ok(round)
}

fn validate_holes(round: &Round) -> Result<()> {
    let mut seen = BTreeSet::new();
    for hole in &round.holes {
        if hole.number == 0 || hole.number > HOLE_COUNT {
            return Err(EngineError::HoleOutOfRange(hole.number));
        }
        if !seen.insert(hole.number) {
            return Err(EngineError::DuplicateHole(hole.number));
        }
    }
    match (1..=HOLE_COUNT).find(|n| !seen.contains(n)) {
        Some(missing) => Err(EngineError::MissingHole(missing)),
        None => Ok(()),
    }
}

fn validate_scores(round: &Round) -> Result<()> {
    let players: HashSet<&str> = round.players.iter().map(|p| p.id.as_str()).collect();
    let mut seen = HashSet::new();
    for score in &round.scores {
        let (player_id, hole) = (score.player_id.clone(), score.hole_number);
        if !players.contains(score.player_id.as_str()) {
            return Err(EngineError::UnknownPlayer { player_id, hole });
        }
        if !round.holes.iter().any(|h| h.number == hole) {
            return Err(EngineError::UnknownHole { player_id, hole });
        }
        if !seen.insert((score.player_id.as_str(), hole)) {
            return Err(EngineError::DuplicateScore { player_id, hole });
        }
        if score.strokes == Some(0) {
            return Err(EngineError::ZeroStrokes { player_id, hole });
        }
    }
    Ok(())
}

/// Participant and team checks for one game against the round's players.
pub fn validate_game(round: &Round, game: &Game) -> Result<()> {
    for id in &game.player_ids {
        if round.player(id).is_none() {
            return Err(EngineError::UnknownGamePlayer {
                game_id: game.id.clone(),
                player_id: id.clone(),
            });
        }
    }

    let mut placed = HashSet::new();
    for team in &game.teams {
        for id in &team.player_ids {
            if !game.player_ids.contains(id) {
                return Err(EngineError::TeamOutsider {
                    game_id: game.id.clone(),
                    team_id: team.id.clone(),
                    player_id: id.clone(),
                });
            }
            if !placed.insert(id.as_str()) {
                return Err(EngineError::PlayerOnTwoTeams {
                    game_id: game.id.clone(),
                    player_id: id.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Structural checks on a round and every game attached to it.
/// Missing scores are fine; contradictions are not.
pub fn validate_round(round: &Round) -> Result<()> {
    validate_holes(round)?;
    validate_scores(round)?;
    for game in &round.games {
        validate_game(round, game)?;
    }
    Ok(())
}

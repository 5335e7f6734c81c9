//! Round and game builders shared by the unit tests.

use crate::scoring_engine::models::{Game, GameFormat, HoleInfo, Player, Round, Score, Team};

/// An 18-hole, all par-4 round with one player per id and no scores.
pub fn make_round(player_ids: &[&str]) -> Round {
    Round {
        id: "round-1".into(),
        course_id: "course-1".into(),
        course_name: "Test Links".into(),
        holes: (1..=18)
            .map(|n| HoleInfo { number: n, par: 4, yards: None, handicap: None })
            .collect(),
        players: player_ids
            .iter()
            .map(|id| Player {
                id: id.to_string(),
                name: id.to_uppercase(),
                handicap: None,
                group_id: None,
            })
            .collect(),
        scores: vec![],
        games: vec![],
    }
}

/// Record a full 18-hole card for `player`.
pub fn card(round: &mut Round, player: &str, strokes: [u32; 18]) {
    for (i, s) in strokes.iter().enumerate() {
        round.scores.push(Score::new(player, i as u8 + 1, Some(*s)));
    }
}

/// Record a single hole.
pub fn hole(round: &mut Round, player: &str, hole: u8, strokes: u32) {
    round.scores.push(Score::new(player, hole, Some(strokes)));
}

pub fn make_game(format: GameFormat, player_ids: &[&str]) -> Game {
    Game {
        id: format!("{format:?}").to_lowercase(),
        format,
        name: format.to_string(),
        player_ids: player_ids.iter().map(|s| s.to_string()).collect(),
        teams: vec![],
        settings: serde_json::Map::new(),
    }
}

pub fn make_team(id: &str, player_ids: &[&str]) -> Team {
    Team {
        id: id.into(),
        name: id.to_uppercase(),
        player_ids: player_ids.iter().map(|s| s.to_string()).collect(),
    }
}

/// Set a settings key on a game.
pub fn with_setting(mut game: Game, key: &str, value: serde_json::Value) -> Game {
    game.settings.insert(key.to_string(), value);
    game
}

/// 18 holes of the same score.
pub fn flat(strokes: u32) -> [u32; 18] {
    [strokes; 18]
}

/// 18 holes of `base` with `hole` (1-based) replaced by `strokes`.
pub fn flat_except(base: u32, hole: u8, strokes: u32) -> [u32; 18] {
    let mut card = [base; 18];
    card[hole as usize - 1] = strokes;
    card
}

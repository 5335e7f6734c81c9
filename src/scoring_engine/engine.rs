use serde::{Deserialize, Serialize};

use crate::scoring_engine::{
    formats::{
        best_ball::{self, BestBallResult},
        match_play::{self, MatchPlayResult},
        nassau::{self, NassauResult},
        skins::{self, SkinsResult},
        stableford::{self, StablefordResult},
        three_point::{self, ThreePointResult},
        unimplemented::{self, NotImplemented},
        wolf::{self, WolfResult},
    },
    models::{Game, GameFormat, Round},
};

/// Result of scoring one game, tagged by the shape of its breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "result", rename_all = "camelCase")]
pub enum GameResult {
    Skins(SkinsResult),
    BestBall(BestBallResult),
    Nassau(NassauResult),
    /// Standard and modified stableford share a shape.
    Stableford(StablefordResult),
    MatchPlay(MatchPlayResult),
    ThreePoint(ThreePointResult),
    Wolf(WolfResult),
    NotImplemented(NotImplemented),
}

impl GameResult {
    pub fn is_implemented(&self) -> bool {
        !matches!(self, GameResult::NotImplemented(_))
    }

    /// Known simplifications a UI should show next to the result.
    pub fn limitations(&self) -> Vec<String> {
        match self {
            GameResult::Nassau(r) if r.match_mode_fallback => vec![
                "Nassau match mode is not supported yet; segments are decided by stroke totals."
                    .to_string(),
            ],
            GameResult::MatchPlay(_) => vec![
                "Matches are played out through 18 holes; early close-outs (e.g. 3&2) are not detected."
                    .to_string(),
            ],
            GameResult::NotImplemented(n) => vec![n.message.clone()],
            _ => Vec::new(),
        }
    }
}

/// Signature shared by every entry in the lookup table.
pub type Scorer = fn(&Round, &Game) -> GameResult;

fn score_skins(round: &Round, game: &Game) -> GameResult {
    GameResult::Skins(skins::score(round, game))
}

fn score_best_ball(round: &Round, game: &Game) -> GameResult {
    GameResult::BestBall(best_ball::score(round, game))
}

fn score_nassau(round: &Round, game: &Game) -> GameResult {
    GameResult::Nassau(nassau::score(round, game))
}

fn score_stableford(round: &Round, game: &Game) -> GameResult {
    GameResult::Stableford(stableford::score(round, game))
}

fn score_modified_stableford(round: &Round, game: &Game) -> GameResult {
    GameResult::Stableford(stableford::score_modified(round, game))
}

fn score_match_play(round: &Round, game: &Game) -> GameResult {
    GameResult::MatchPlay(match_play::score(round, game))
}

fn score_three_point(round: &Round, game: &Game) -> GameResult {
    GameResult::ThreePoint(three_point::score(round, game))
}

fn score_wolf(round: &Round, game: &Game) -> GameResult {
    GameResult::Wolf(wolf::score(round, game))
}

fn score_unimplemented(round: &Round, game: &Game) -> GameResult {
    GameResult::NotImplemented(unimplemented::score(round, game))
}

/// Format → scorer. Adding a format means adding a row here.
static SCORERS: [(GameFormat, Scorer); 16] = [
    (GameFormat::Skins,              score_skins),
    (GameFormat::Nassau,             score_nassau),
    (GameFormat::BestBall,           score_best_ball),
    (GameFormat::Scramble,           score_unimplemented),
    (GameFormat::Wolf,               score_wolf),
    (GameFormat::ThreePoint,         score_three_point),
    (GameFormat::Stableford,         score_stableford),
    (GameFormat::ModifiedStableford, score_modified_stableford),
    (GameFormat::MatchPlay,          score_match_play),
    (GameFormat::BingoBangoBongo,    score_unimplemented),
    (GameFormat::Vegas,              score_unimplemented),
    (GameFormat::Hammer,             score_unimplemented),
    (GameFormat::Rabbit,             score_unimplemented),
    (GameFormat::Trash,              score_unimplemented),
    (GameFormat::Chicago,            score_unimplemented),
    (GameFormat::Defender,           score_unimplemented),
];

/// Look up the scorer for a format.
pub fn scorer(format: GameFormat) -> Scorer {
    SCORERS
        .iter()
        .find(|(f, _)| *f == format)
        .map(|(_, s)| *s)
        .unwrap_or(score_unimplemented)
}

/// Score one game against a round.
pub fn score_game(round: &Round, game: &Game) -> GameResult {
    tracing::debug!(round = %round.id, game = %game.id, format = ?game.format, "Scoring game");
    scorer(game.format)(round, game)
}

/// A game paired with its freshly computed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredGame {
    pub game_id: String,
    pub name: String,
    pub format: GameFormat,
    pub result: GameResult,
}

/// Score every game attached to the round.
pub fn score_round(round: &Round) -> Vec<ScoredGame> {
    round
        .games
        .iter()
        .map(|game| ScoredGame {
            game_id: game.id.clone(),
            name: game.name.clone(),
            format: game.format,
            result: score_game(round, game),
        })
        .collect()
}

//! Head-to-head match play between the first two participants.
//!
//! The match is always evaluated through all eighteen holes: a match that
//! is closed out early ("3&2") still reports the final hole-18 status.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::scoring_engine::{
    evaluator::match_status,
    helpers::{holes, score_by_hole},
    models::{Game, PlayerId, Round},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchHole {
    pub hole: u8,
    pub winner: Option<PlayerId>,
    /// Both players had a score, so the hole counted (halved or won).
    pub decided: bool,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayResult {
    pub player1: Option<PlayerId>,
    pub player2: Option<PlayerId>,
    /// Holes up for player 1; negative when player 2 leads.
    pub diff: i32,
    pub current_status: String,
    pub holes: Vec<MatchHole>,
    /// Leader after the last hole, if not all square.
    pub winner: Option<PlayerId>,
}

pub fn score(round: &Round, game: &Game) -> MatchPlayResult {
    let (p1, p2) = match game.player_ids.as_slice() {
        [a, b, ..] => (a, b),
        _ => {
            tracing::warn!(game = %game.id, players = game.player_ids.len(), "Match play needs two players");
            return MatchPlayResult {
                player1: game.player_ids.first().cloned(),
                player2: None,
                diff: 0,
                current_status: match_status(0),
                holes: Vec::new(),
                winner: None,
            };
        }
    };

    let card1 = score_by_hole(&round.scores, p1);
    let card2 = score_by_hole(&round.scores, p2);

    let mut diff = 0i32;
    let mut log = Vec::with_capacity(holes().len());
    for hole in holes() {
        let (winner, decided) = match (card1.get(&hole), card2.get(&hole)) {
            (Some(a), Some(b)) => match a.cmp(b) {
                Ordering::Less => {
                    diff += 1;
                    (Some(p1.clone()), true)
                }
                Ordering::Greater => {
                    diff -= 1;
                    (Some(p2.clone()), true)
                }
                Ordering::Equal => (None, true),
            },
            _ => (None, false),
        };
        log.push(MatchHole { hole, winner, decided, status: match_status(diff) });
    }

    let winner = match diff.cmp(&0) {
        Ordering::Greater => Some(p1.clone()),
        Ordering::Less    => Some(p2.clone()),
        Ordering::Equal   => None,
    };

    MatchPlayResult {
        player1: Some(p1.clone()),
        player2: Some(p2.clone()),
        diff,
        current_status: match_status(diff),
        holes: log,
        winner,
    }
}

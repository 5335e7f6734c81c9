use serde::{Deserialize, Serialize};

use crate::scoring_engine::{
    evaluator::{stableford_points, PointTable},
    helpers::{cards_for, holes, par_by_hole},
    models::{Game, PlayerId, Round},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolePoints {
    pub hole: u8,
    pub strokes: u32,
    pub par: u8,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StablefordEntry {
    pub player_id: PlayerId,
    pub points: i32,
    pub holes_played: u32,
    pub holes: Vec<HolePoints>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StablefordResult {
    pub modified: bool,
    /// Ranked by points, best first.
    pub standings: Vec<StablefordEntry>,
}

fn score_with(round: &Round, game: &Game, table: PointTable) -> StablefordResult {
    let pars = par_by_hole(round);
    let mut standings: Vec<StablefordEntry> = cards_for(round, &game.player_ids)
        .into_iter()
        .map(|(player_id, card)| {
            let holes: Vec<HolePoints> = holes()
                .filter_map(|hole| {
                    let strokes = *card.get(&hole)?;
                    let par = *pars.get(&hole)?;
                    Some(HolePoints { hole, strokes, par, points: stableford_points(strokes, par, table) })
                })
                .collect();
            StablefordEntry {
                player_id,
                points: holes.iter().map(|h| h.points).sum(),
                holes_played: holes.len() as u32,
                holes,
            }
        })
        .collect();

    // Stable sort keeps participant order among equal totals.
    standings.sort_by(|a, b| b.points.cmp(&a.points));

    StablefordResult { modified: table == PointTable::Modified, standings }
}

pub fn score(round: &Round, game: &Game) -> StablefordResult {
    score_with(round, game, PointTable::Standard)
}

pub fn score_modified(round: &Round, game: &Game) -> StablefordResult {
    score_with(round, game, PointTable::Modified)
}

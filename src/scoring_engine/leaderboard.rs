//! Gross stroke-play standings for everyone in the round, independent of
//! any side game.

use serde::{Deserialize, Serialize};

use crate::scoring_engine::{
    evaluator::to_par_label,
    helpers::{par_by_hole, score_by_hole},
    models::{PlayerId, Round},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub player_id: PlayerId,
    pub name: String,
    pub strokes: u64,
    /// Par of the holes this player has recorded.
    pub par: u64,
    pub to_par: i64,
    pub to_par_label: String,
    pub holes_played: u32,
    /// Highest hole number with a score, 0 before teeing off.
    pub thru: u8,
}

pub fn leaderboard(round: &Round) -> Vec<Standing> {
    let pars = par_by_hole(round);
    let mut standings: Vec<Standing> = round
        .players
        .iter()
        .map(|player| {
            let card = score_by_hole(&round.scores, &player.id);
            let rated: Vec<(u64, u64)> = card
                .iter()
                .filter_map(|(hole, &strokes)| pars.get(hole).map(|&par| (u64::from(strokes), u64::from(par))))
                .collect();
            let strokes: u64 = rated.iter().map(|(s, _)| s).sum();
            let par: u64 = rated.iter().map(|(_, p)| p).sum();
            // At most 18 u32 cells per player, so both totals fit in i64.
            let to_par = strokes as i64 - par as i64;
            Standing {
                player_id: player.id.clone(),
                name: player.name.clone(),
                strokes,
                par,
                to_par,
                to_par_label: to_par_label(to_par),
                holes_played: rated.len() as u32,
                thru: card.keys().next_back().copied().unwrap_or(0),
            }
        })
        .collect();

    standings.sort_by(|a, b| {
        (a.holes_played == 0)
            .cmp(&(b.holes_played == 0))
            .then(a.to_par.cmp(&b.to_par))
            .then(b.holes_played.cmp(&a.holes_played))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    standings
}

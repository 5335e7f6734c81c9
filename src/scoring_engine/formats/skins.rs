use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scoring_engine::{
    helpers::{cards_for, decode_settings, holes, unique_min},
    models::{Game, PlayerId, Round, SkinsSettings},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSkins {
    /// Skins won, carries included.
    pub skins: u32,
    pub holes_won: Vec<u8>,
}

/// One contested hole. Holes with fewer than two recorded scores are not logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinsHole {
    pub hole: u8,
    pub winner: Option<PlayerId>,
    /// Skins at stake on this hole.
    pub value: u32,
    /// The hole was tied and its value rolled forward.
    pub carried: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinsResult {
    pub players: BTreeMap<PlayerId, PlayerSkins>,
    pub holes: Vec<SkinsHole>,
    pub total_skins: u32,
    /// Skins still riding on a tie when the round ran out.
    pub unclaimed_carry: u32,
}

pub fn score(round: &Round, game: &Game) -> SkinsResult {
    let settings: SkinsSettings = decode_settings(game);
    let carryover = settings.carryover();
    let cards = cards_for(round, &game.player_ids);

    let mut result = SkinsResult {
        players: game
            .player_ids
            .iter()
            .map(|id| (id.clone(), PlayerSkins::default()))
            .collect(),
        ..SkinsResult::default()
    };

    let mut carry = 1u32;
    for hole in holes() {
        let entries: Vec<(&PlayerId, u32)> = cards
            .iter()
            .filter_map(|(id, card)| card.get(&hole).map(|&s| (id, s)))
            .collect();
        if entries.len() < 2 {
            continue;
        }

        match unique_min(entries) {
            Some(winner) => {
                let won = result.players.entry(winner.clone()).or_default();
                won.skins += carry;
                won.holes_won.push(hole);
                result.total_skins += carry;
                result.holes.push(SkinsHole {
                    hole,
                    winner: Some(winner.clone()),
                    value: carry,
                    carried: false,
                });
                carry = 1;
            }
            None => {
                result.holes.push(SkinsHole { hole, winner: None, value: carry, carried: carryover });
                if carryover {
                    carry += 1;
                }
            }
        }
    }

    result.unclaimed_carry = if carryover { carry - 1 } else { 0 };
    result
}

//! Wolf for a four-player rotation.
//!
//! The wolf on hole N is rotation slot `(N - 1) % 4`. What the wolf decided
//! on each hole is not derivable from strokes; it is read from
//! `wolfHoleChoices`, and a hole without a (valid) choice is no decision.
//!
//! Points are zero-sum per hole:
//! - lone wolf beats the field's best ball: wolf +L, each other player −L/3
//! - lone wolf loses: mirrored
//! - partner mode: each winner +P, each loser −P
//! - ties score nothing

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scoring_engine::{
    helpers::{best_ball, decode_settings, holes, score_by_hole, ScoreCard},
    models::{Game, PlayerId, Round, WolfChoice, WolfSettings},
};

pub const ROTATION_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WolfOutcome {
    /// Wolf's side had the lower best ball.
    WolfWon,
    WolfLost,
    Halved,
    /// Choice unset, invalid, or scores missing.
    NoDecision,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WolfHole {
    pub hole: u8,
    pub wolf_id: PlayerId,
    pub choice: Option<WolfChoice>,
    pub outcome: WolfOutcome,
    /// Point swing per player on this hole.
    pub points: BTreeMap<PlayerId, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WolfResult {
    /// False when the rotation is not exactly four distinct players.
    pub configured: bool,
    pub rotation: Vec<PlayerId>,
    pub points: BTreeMap<PlayerId, f64>,
    pub holes: Vec<WolfHole>,
}

fn resolve_rotation(game: &Game, settings: &WolfSettings) -> Option<Vec<PlayerId>> {
    let order = settings
        .wolf_order_player_ids
        .clone()
        .unwrap_or_else(|| game.player_ids.clone());
    let distinct = order
        .iter()
        .enumerate()
        .all(|(i, id)| !order[..i].contains(id));
    (order.len() == ROTATION_SIZE && distinct).then_some(order)
}

/// The wolf's side and the other side for a valid choice.
fn sides<'a>(
    rotation: &'a [PlayerId],
    wolf: &'a PlayerId,
    choice: &WolfChoice,
) -> Option<(Vec<&'a PlayerId>, Vec<&'a PlayerId>)> {
    match choice {
        WolfChoice::Lone => {
            let field = rotation.iter().filter(|id| *id != wolf).collect();
            Some((vec![wolf], field))
        }
        WolfChoice::Partner { partner_id } => {
            if partner_id == wolf {
                return None;
            }
            let partner = rotation.iter().find(|id| *id == partner_id)?;
            let others = rotation
                .iter()
                .filter(|id| *id != wolf && *id != partner)
                .collect();
            Some((vec![wolf, partner], others))
        }
    }
}

/// Decode each hole's choice on its own. Entries with a bad hole key or an
/// incomplete choice (e.g. partner mode before a partner is picked) are
/// skipped with a warning.
fn hole_choices(game: &Game, settings: &WolfSettings) -> BTreeMap<u8, WolfChoice> {
    settings
        .wolf_hole_choices
        .iter()
        .filter_map(|(key, raw)| {
            let Ok(hole) = key.parse::<u8>() else {
                tracing::warn!(game = %game.id, key = %key, "Wolf choice keyed by something other than a hole number");
                return None;
            };
            match serde_json::from_value::<WolfChoice>(raw.clone()) {
                Ok(choice) => Some((hole, choice)),
                Err(e) => {
                    tracing::warn!(game = %game.id, hole, error = %e, "Incomplete wolf choice, hole left undecided");
                    None
                }
            }
        })
        .collect()
}

fn side_best(cards: &BTreeMap<&PlayerId, ScoreCard>, side: &[&PlayerId], hole: u8) -> Option<u32> {
    best_ball(side.iter().filter_map(|id| cards.get(id)), hole)
}

pub fn score(round: &Round, game: &Game) -> WolfResult {
    let settings: WolfSettings = decode_settings(game);
    let Some(rotation) = resolve_rotation(game, &settings) else {
        tracing::warn!(game = %game.id, "Wolf needs a rotation of exactly four distinct players");
        return WolfResult::default();
    };

    let cards: BTreeMap<&PlayerId, ScoreCard> = rotation
        .iter()
        .map(|id| (id, score_by_hole(&round.scores, id)))
        .collect();
    let choices = hole_choices(game, &settings);
    let lone = settings.lone_points();
    let partner = settings.partner_points();

    let mut totals: BTreeMap<PlayerId, f64> = rotation.iter().map(|id| (id.clone(), 0.0)).collect();
    let mut log = Vec::new();

    for hole in holes() {
        let wolf = &rotation[(hole as usize - 1) % ROTATION_SIZE];
        let choice = choices.get(&hole);

        let decided = choice
            .and_then(|c| sides(&rotation, wolf, c))
            .and_then(|(wolf_side, other_side)| {
                let w = side_best(&cards, &wolf_side, hole)?;
                let o = side_best(&cards, &other_side, hole)?;
                Some((wolf_side, other_side, w.cmp(&o)))
            });

        let mut points = BTreeMap::new();
        let outcome = match decided {
            None => WolfOutcome::NoDecision,
            Some((_, _, Ordering::Equal)) => WolfOutcome::Halved,
            Some((wolf_side, other_side, ordering)) => {
                let wolf_won = ordering == Ordering::Less;
                let (win_each, lose_each) = if wolf_side.len() == 1 {
                    let field = other_side.len() as f64;
                    if wolf_won { (lone, lone / field) } else { (lone / field, lone) }
                } else {
                    (partner, partner)
                };
                let (winners, losers) = if wolf_won { (wolf_side, other_side) } else { (other_side, wolf_side) };
                for id in winners {
                    points.insert(id.clone(), win_each);
                }
                for id in losers {
                    points.insert(id.clone(), -lose_each);
                }
                if wolf_won { WolfOutcome::WolfWon } else { WolfOutcome::WolfLost }
            }
        };

        for (id, p) in &points {
            *totals.entry(id.clone()).or_insert(0.0) += p;
        }
        log.push(WolfHole { hole, wolf_id: wolf.clone(), choice: choice.cloned(), outcome, points });
    }

    WolfResult { configured: true, rotation: rotation.clone(), points: totals, holes: log }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring_engine::models::GameFormat;
    use crate::test_helpers::*;
    use serde_json::json;

    const PLAYERS: [&str; 4] = ["a", "b", "c", "d"];

    fn wolf_game(choices: serde_json::Value) -> Game {
        with_setting(make_game(GameFormat::Wolf, &PLAYERS), "wolfHoleChoices", choices)
    }

    fn sum(points: &BTreeMap<PlayerId, f64>) -> f64 {
        points.values().sum()
    }

    #[test]
    fn wolf_rotates_every_hole() {
        let res = score(&make_round(&PLAYERS), &wolf_game(json!({})));
        let wolves: Vec<&str> = res.holes.iter().take(5).map(|h| h.wolf_id.as_str()).collect();
        assert_eq!(wolves, vec!["a", "b", "c", "d", "a"]);
        assert!(res.holes.iter().all(|h| h.outcome == WolfOutcome::NoDecision));
    }

    #[test]
    fn lone_wolf_win_takes_three() {
        let mut round = make_round(&PLAYERS);
        for (p, s) in [("a", 3), ("b", 4), ("c", 4), ("d", 5)] {
            hole(&mut round, p, 1, s);
        }
        let res = score(&round, &wolf_game(json!({ "1": { "mode": "lone" } })));
        assert_eq!(res.holes[0].outcome, WolfOutcome::WolfWon);
        assert_eq!(res.points["a"], 3.0);
        assert_eq!(res.points["b"], -1.0);
        assert_eq!(sum(&res.points), 0.0);
    }

    #[test]
    fn lone_wolf_loss_pays_three() {
        let mut round = make_round(&PLAYERS);
        for (p, s) in [("a", 5), ("b", 4), ("c", 6), ("d", 6)] {
            hole(&mut round, p, 1, s);
        }
        let res = score(&round, &wolf_game(json!({ "1": { "mode": "lone" } })));
        assert_eq!(res.holes[0].outcome, WolfOutcome::WolfLost);
        assert_eq!(res.points["a"], -3.0);
        assert_eq!(res.points["c"], 1.0);
    }

    #[test]
    fn partner_hole_splits_the_stake() {
        let mut round = make_round(&PLAYERS);
        // Hole 2: b is wolf, picks d. b/d best 4 vs a/c best 5.
        for (p, s) in [("a", 5), ("b", 6), ("c", 5), ("d", 4)] {
            hole(&mut round, p, 2, s);
        }
        let res = score(&round, &wolf_game(json!({ "2": { "mode": "partner", "partnerId": "d" } })));
        assert_eq!(res.holes[1].outcome, WolfOutcome::WolfWon);
        assert_eq!(res.points["b"], 1.0);
        assert_eq!(res.points["d"], 1.0);
        assert_eq!(res.points["a"], -1.0);
        assert_eq!(res.points["c"], -1.0);
    }

    #[test]
    fn configurable_partner_stake() {
        let mut round = make_round(&PLAYERS);
        for (p, s) in [("a", 4), ("b", 4), ("c", 5), ("d", 5)] {
            hole(&mut round, p, 1, s);
        }
        let game = with_setting(
            wolf_game(json!({ "1": { "mode": "partner", "partnerId": "c" } })),
            "wolfPartnerPoints",
            json!(2.0),
        );
        let res = score(&round, &game);
        // a/c best 4 vs b/d best 4: halved.
        assert_eq!(res.holes[0].outcome, WolfOutcome::Halved);
        assert_eq!(sum(&res.points), 0.0);

        let mut round = make_round(&PLAYERS);
        for (p, s) in [("a", 6), ("b", 4), ("c", 5), ("d", 5)] {
            hole(&mut round, p, 1, s);
        }
        let res = score(&round, &game);
        assert_eq!(res.points["b"], 2.0);
        assert_eq!(res.points["a"], -2.0);
    }

    #[test]
    fn invalid_partner_is_no_decision() {
        let mut round = make_round(&PLAYERS);
        for p in PLAYERS {
            hole(&mut round, p, 1, 4);
        }
        for partner in ["a", "zed"] {
            let res = score(&round, &wolf_game(json!({ "1": { "mode": "partner", "partnerId": partner } })));
            assert_eq!(res.holes[0].outcome, WolfOutcome::NoDecision);
        }
    }

    #[test]
    fn missing_side_scores_are_no_decision() {
        let mut round = make_round(&PLAYERS);
        hole(&mut round, "a", 1, 3);
        let res = score(&round, &wolf_game(json!({ "1": { "mode": "lone" } })));
        assert_eq!(res.holes[0].outcome, WolfOutcome::NoDecision);
        assert!(res.holes[0].points.is_empty());
    }

    #[test]
    fn explicit_order_overrides_participants() {
        let game = with_setting(wolf_game(json!({})), "wolfOrderPlayerIds", json!(["d", "c", "b", "a"]));
        let res = score(&make_round(&PLAYERS), &game);
        assert_eq!(res.holes[0].wolf_id, "d");
        assert_eq!(res.holes[3].wolf_id, "a");
    }

    #[test]
    fn three_player_rotation_is_degenerate() {
        let game = make_game(GameFormat::Wolf, &["a", "b", "c"]);
        let res = score(&make_round(&["a", "b", "c"]), &game);
        assert!(!res.configured);
        assert!(res.points.is_empty());
        assert!(res.holes.is_empty());
    }

    #[test]
    fn incomplete_choice_only_affects_its_own_hole() {
        let mut round = make_round(&PLAYERS);
        for (p, s) in [("a", 3), ("b", 4), ("c", 4), ("d", 5)] {
            hole(&mut round, p, 1, s);
        }
        let game = with_setting(
            wolf_game(json!({
                "1": { "mode": "lone" },
                "2": { "mode": "partner" },
                "3": { "mode": "partner", "partnerId": null },
                "x": { "mode": "lone" }
            })),
            "wolfLonePoints",
            json!(6.0),
        );
        let res = score(&round, &game);
        assert_eq!(res.holes[0].outcome, WolfOutcome::WolfWon);
        assert_eq!(res.points["a"], 6.0);
        assert_eq!(res.points["b"], -2.0);
        assert_eq!(res.holes[1].choice, None);
        assert_eq!(res.holes[2].choice, None);
        assert_eq!(sum(&res.points), 0.0);
    }
}

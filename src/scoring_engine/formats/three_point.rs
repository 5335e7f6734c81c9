//! 2v2 three-point system.
//!
//! Each hole is worth three points: A1 vs B1, A2 vs B2, and the best ball of
//! each side. A sub-match is only played when both of its scores exist.

use serde::{Deserialize, Serialize};

use crate::scoring_engine::{
    evaluator::split_point,
    helpers::{decode_settings, holes, score_by_hole},
    models::{Game, PlayerId, Round, ThreePointPairs, ThreePointSettings},
};

/// Points for side A and side B in one sub-match; `None` if it was not played.
pub type SubMatch = Option<(f64, f64)>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreePointHole {
    pub hole: u8,
    pub pair1: SubMatch,
    pub pair2: SubMatch,
    pub best_ball: SubMatch,
    pub team_a_points: f64,
    pub team_b_points: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreePointResult {
    /// False when the pairing was missing or invalid; totals are then zero.
    pub configured: bool,
    pub team_a: Vec<PlayerId>,
    pub team_b: Vec<PlayerId>,
    pub team_a_points: f64,
    pub team_b_points: f64,
    pub holes: Vec<ThreePointHole>,
}

impl ThreePointResult {
    /// Team A points minus team B points.
    pub fn differential(&self) -> f64 {
        self.team_a_points - self.team_b_points
    }
}

/// `[A1, A2, B1, B2]` when all four slots hold distinct players.
fn resolve_pairs(pairs: &ThreePointPairs) -> Option<[PlayerId; 4]> {
    let ids = [
        pairs.team_a1.clone()?,
        pairs.team_a2.clone()?,
        pairs.team_b1.clone()?,
        pairs.team_b2.clone()?,
    ];
    let distinct = ids
        .iter()
        .enumerate()
        .all(|(i, id)| ids.iter().skip(i + 1).all(|other| other != id));
    distinct.then_some(ids)
}

fn sub_match(a: Option<u32>, b: Option<u32>) -> SubMatch {
    Some(split_point(a?, b?))
}

pub fn score(round: &Round, game: &Game) -> ThreePointResult {
    let settings: ThreePointSettings = decode_settings(game);
    let Some([a1, a2, b1, b2]) = settings.three_point_pairs.as_ref().and_then(resolve_pairs) else {
        tracing::warn!(game = %game.id, "3-point game has no complete pairing");
        return ThreePointResult::default();
    };

    let [ca1, ca2, cb1, cb2] = [&a1, &a2, &b1, &b2].map(|id| score_by_hole(&round.scores, id));

    let mut result = ThreePointResult {
        configured: true,
        team_a: vec![a1.clone(), a2.clone()],
        team_b: vec![b1.clone(), b2.clone()],
        ..ThreePointResult::default()
    };

    for hole in holes() {
        let [sa1, sa2, sb1, sb2] = [&ca1, &ca2, &cb1, &cb2].map(|c| c.get(&hole).copied());
        let best_a = sa1.into_iter().chain(sa2).min();
        let best_b = sb1.into_iter().chain(sb2).min();

        let pair1 = sub_match(sa1, sb1);
        let pair2 = sub_match(sa2, sb2);
        let best_ball = sub_match(best_a, best_b);

        let played = [pair1, pair2, best_ball];
        let team_a_points: f64 = played.iter().flatten().map(|(a, _)| a).sum();
        let team_b_points: f64 = played.iter().flatten().map(|(_, b)| b).sum();

        result.team_a_points += team_a_points;
        result.team_b_points += team_b_points;
        result.holes.push(ThreePointHole { hole, pair1, pair2, best_ball, team_a_points, team_b_points });
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring_engine::models::GameFormat;
    use crate::test_helpers::*;
    use serde_json::json;

    fn paired_game() -> Game {
        with_setting(
            make_game(GameFormat::ThreePoint, &["a1", "a2", "b1", "b2"]),
            "threePointPairs",
            json!({ "teamA1": "a1", "teamA2": "a2", "teamB1": "b1", "teamB2": "b2" }),
        )
    }

    #[test]
    fn sweep_is_three_points() {
        let mut round = make_round(&["a1", "a2", "b1", "b2"]);
        for (p, s) in [("a1", 3), ("a2", 4), ("b1", 4), ("b2", 5)] {
            hole(&mut round, p, 1, s);
        }
        let res = score(&round, &paired_game());
        assert!(res.configured);
        assert_eq!(res.holes[0].team_a_points, 3.0);
        assert_eq!(res.team_a_points, 3.0);
        assert_eq!(res.team_b_points, 0.0);
    }

    #[test]
    fn split_hole_with_halved_best_ball() {
        let mut round = make_round(&["a1", "a2", "b1", "b2"]);
        // A1 beats B1, B2 beats A2, best balls tie at 3.
        for (p, s) in [("a1", 3), ("a2", 5), ("b1", 4), ("b2", 3)] {
            hole(&mut round, p, 1, s);
        }
        let res = score(&round, &paired_game());
        let h = &res.holes[0];
        assert_eq!(h.pair1, Some((1.0, 0.0)));
        assert_eq!(h.pair2, Some((0.0, 1.0)));
        assert_eq!(h.best_ball, Some((0.5, 0.5)));
        assert_eq!(res.team_a_points, 1.5);
        assert_eq!(res.team_b_points, 1.5);
    }

    #[test]
    fn missing_partner_score_skips_only_that_pairing() {
        let mut round = make_round(&["a1", "a2", "b1", "b2"]);
        for (p, s) in [("a1", 4), ("b1", 5), ("b2", 4)] {
            hole(&mut round, p, 1, s);
        }
        let res = score(&round, &paired_game());
        let h = &res.holes[0];
        assert_eq!(h.pair1, Some((1.0, 0.0)));
        assert_eq!(h.pair2, None);
        // A best ball 4 (a1) vs B best ball 4 (b2).
        assert_eq!(h.best_ball, Some((0.5, 0.5)));
        assert_eq!(res.differential(), 1.0);
    }

    #[test]
    fn full_round_totals_to_fifty_four() {
        let mut round = make_round(&["a1", "a2", "b1", "b2"]);
        for p in ["a1", "a2", "b1", "b2"] {
            card(&mut round, p, flat(4));
        }
        let res = score(&round, &paired_game());
        assert_eq!(res.team_a_points + res.team_b_points, 54.0);
        assert_eq!(res.differential(), 0.0);
    }

    #[test]
    fn missing_pairing_is_a_zero_result() {
        let mut round = make_round(&["a1", "a2", "b1", "b2"]);
        card(&mut round, "a1", flat(3));
        let res = score(&round, &make_game(GameFormat::ThreePoint, &["a1", "a2", "b1", "b2"]));
        assert!(!res.configured);
        assert_eq!(res.team_a_points, 0.0);
        assert!(res.holes.is_empty());
    }

    #[test]
    fn repeated_player_in_pairing_is_rejected() {
        let game = with_setting(
            make_game(GameFormat::ThreePoint, &["a1", "a2", "b1"]),
            "threePointPairs",
            json!({ "teamA1": "a1", "teamA2": "a2", "teamB1": "b1", "teamB2": "a1" }),
        );
        let res = score(&make_round(&["a1", "a2", "b1"]), &game);
        assert!(!res.configured);
    }
}

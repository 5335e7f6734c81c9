//! Money rules: turn one game's result into signed per-player dollar deltas.
//!
//! Every rule below moves money between participants of the same game, so a
//! game's deltas sum to zero (up to float rounding). Wolf is the exception
//! in principle: it passes point totals through as-is, and those are only
//! zero-sum because the format scores them that way.

use std::collections::BTreeMap;

use crate::scoring_engine::{
    formats::{
        best_ball::BestBallResult,
        match_play::MatchPlayResult,
        nassau::{NassauResult, Segment},
        skins::SkinsResult,
        three_point::ThreePointResult,
        wolf::WolfResult,
    },
    helpers::decode_settings,
    models::{BetSettings, Game, PlayerId},
    GameResult,
};

/// player id → signed dollars.
pub type Balances = BTreeMap<PlayerId, f64>;

/// Add `amount` to `balances`, split evenly across `ids`.
fn credit_split(balances: &mut Balances, ids: &[PlayerId], amount: f64) {
    if ids.is_empty() {
        return;
    }
    let each = amount / ids.len() as f64;
    for id in ids {
        *balances.entry(id.clone()).or_insert(0.0) += each;
    }
}

fn credit(balances: &mut Balances, id: &str, amount: f64) {
    *balances.entry(id.to_string()).or_insert(0.0) += amount;
}

fn skins_deltas(result: &SkinsResult, bet: f64) -> Balances {
    let mut balances = Balances::new();
    let n = result.players.len();
    if n == 0 {
        return balances;
    }
    let cost_each = result.total_skins as f64 * bet / n as f64;
    for (id, won) in &result.players {
        credit(&mut balances, id, won.skins as f64 * bet - cost_each);
    }
    balances
}

fn nassau_deltas(result: &NassauResult, bet: f64) -> Balances {
    let mut balances = Balances::new();
    for segment in Segment::ALL {
        let Some(winner_id) = result.winner(segment) else { continue };
        let Some(winner) = result.competitors.iter().find(|c| c.id == winner_id) else { continue };
        // Only competitors who played the segment pay for it.
        let losers: Vec<_> = result
            .competitors
            .iter()
            .filter(|c| c.id != winner_id && !c.player_ids.is_empty())
            .filter(|c| c.segment(segment).holes_played > 0)
            .collect();
        if losers.is_empty() || winner.player_ids.is_empty() {
            continue;
        }
        credit_split(&mut balances, &winner.player_ids, bet);
        let per_loser = bet / losers.len() as f64;
        for loser in losers {
            credit_split(&mut balances, &loser.player_ids, -per_loser);
        }
    }
    balances
}

fn best_ball_deltas(result: &BestBallResult, bet: f64) -> Balances {
    let mut balances = Balances::new();
    let Some(winner) = result.winner.as_deref().and_then(|id| result.team(id)) else {
        return balances;
    };
    let losers: Vec<PlayerId> = result
        .teams
        .iter()
        .filter(|t| t.team_id != winner.team_id)
        .flat_map(|t| t.player_ids.iter().cloned())
        .collect();
    if losers.is_empty() || winner.player_ids.is_empty() {
        return balances;
    }
    credit_split(&mut balances, &winner.player_ids, bet);
    credit_split(&mut balances, &losers, -bet);
    balances
}

fn three_point_deltas(result: &ThreePointResult, bet: f64) -> Balances {
    let mut balances = Balances::new();
    if !result.configured {
        return balances;
    }
    let amount = result.differential() * bet;
    credit_split(&mut balances, &result.team_a, amount);
    credit_split(&mut balances, &result.team_b, -amount);
    balances
}

fn match_play_deltas(result: &MatchPlayResult, bet: f64) -> Balances {
    let mut balances = Balances::new();
    let (Some(winner), Some(p1), Some(p2)) = (&result.winner, &result.player1, &result.player2) else {
        return balances;
    };
    let loser = if winner == p1 { p2 } else { p1 };
    credit(&mut balances, winner, bet);
    credit(&mut balances, loser, -bet);
    balances
}

fn wolf_deltas(result: &WolfResult, bet: f64) -> Balances {
    result.points.iter().map(|(id, points)| (id.clone(), points * bet)).collect()
}

/// Per-player deltas for one game. Games without a positive `betAmount`,
/// stableford, and unimplemented formats produce nothing.
pub fn game_deltas(game: &Game, result: &GameResult) -> Balances {
    let settings: BetSettings = decode_settings(game);
    let bet = match settings.bet_amount {
        Some(b) if b.is_finite() && b > 0.0 => b,
        _ => return Balances::new(),
    };

    match result {
        GameResult::Skins(r)      => skins_deltas(r, bet),
        GameResult::Nassau(r)     => nassau_deltas(r, bet),
        GameResult::BestBall(r)   => best_ball_deltas(r, bet),
        GameResult::ThreePoint(r) => three_point_deltas(r, bet),
        GameResult::MatchPlay(r)  => match_play_deltas(r, bet),
        GameResult::Wolf(r)       => wolf_deltas(r, bet),
        GameResult::Stableford(_) | GameResult::NotImplemented(_) => Balances::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring_engine::{models::GameFormat, score_game};
    use crate::test_helpers::*;
    use serde_json::json;

    fn with_bet(game: Game, bet: f64) -> Game {
        with_setting(game, "betAmount", json!(bet))
    }

    fn total(balances: &Balances) -> f64 {
        balances.values().sum()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn skins_winnings_minus_equal_share_of_pot() {
        let mut round = make_round(&["a", "b", "c"]);
        card(&mut round, "a", flat_except(4, 1, 3));
        card(&mut round, "b", flat_except(4, 2, 3));
        card(&mut round, "c", flat(4));
        let game = with_bet(with_setting(make_game(GameFormat::Skins, &["a", "b", "c"]), "carryover", json!(false)), 5.0);
        let deltas = game_deltas(&game, &score_game(&round, &game));
        // Pot 2 skins x $5 = $10, each pays $3.33; a and b each collect $5.
        assert!(close(deltas["a"], 5.0 - 10.0 / 3.0));
        assert!(close(deltas["c"], -10.0 / 3.0));
        assert!(close(total(&deltas), 0.0));
    }

    #[test]
    fn no_bet_no_money() {
        let mut round = make_round(&["a", "b"]);
        card(&mut round, "a", flat(3));
        card(&mut round, "b", flat(4));
        let game = make_game(GameFormat::MatchPlay, &["a", "b"]);
        assert!(game_deltas(&game, &score_game(&round, &game)).is_empty());
    }

    #[test]
    fn point_value_alias_is_accepted() {
        let mut round = make_round(&["a", "b"]);
        card(&mut round, "a", flat(3));
        card(&mut round, "b", flat(4));
        let game = with_setting(make_game(GameFormat::MatchPlay, &["a", "b"]), "pointValue", json!(10));
        let deltas = game_deltas(&game, &score_game(&round, &game));
        assert_eq!(deltas["a"], 10.0);
        assert_eq!(deltas["b"], -10.0);
    }

    #[test]
    fn nassau_pays_each_decided_segment() {
        let mut round = make_round(&["a", "b", "c"]);
        card(&mut round, "a", flat_except(4, 1, 3));
        card(&mut round, "b", flat(4));
        card(&mut round, "c", flat(4));
        let game = with_bet(make_game(GameFormat::Nassau, &["a", "b", "c"]), 10.0);
        let deltas = game_deltas(&game, &score_game(&round, &game));
        // a wins front and overall; back nine is tied three ways.
        assert!(close(deltas["a"], 20.0));
        assert!(close(deltas["b"], -10.0));
        assert!(close(deltas["c"], -10.0));
    }

    #[test]
    fn nassau_segment_not_started_costs_nothing() {
        let mut round = make_round(&["a", "b", "c"]);
        card(&mut round, "a", flat_except(4, 1, 3));
        card(&mut round, "b", flat(4));
        // c joined at the turn.
        for h in 10..=18 {
            hole(&mut round, "c", h, 6);
        }
        let game = with_bet(make_game(GameFormat::Nassau, &["a", "b", "c"]), 10.0);
        let deltas = game_deltas(&game, &score_game(&round, &game));
        // Front: a beats b; c has no front-nine holes and pays nothing for it.
        // Back: a and b tie. Overall: c's 54 is the low total.
        assert!(close(deltas["a"], 10.0 - 5.0));
        assert!(close(deltas["b"], -10.0 - 5.0));
        assert!(close(deltas["c"], 10.0));
        assert!(close(total(&deltas), 0.0));
    }

    #[test]
    fn team_nassau_splits_within_teams() {
        let mut round = make_round(&["a", "b", "c", "d"]);
        card(&mut round, "a", flat(3));
        for p in ["b", "c", "d"] {
            card(&mut round, p, flat(4));
        }
        let mut game = with_bet(
            with_setting(make_game(GameFormat::Nassau, &["a", "b", "c", "d"]), "nassauScope", json!("team")),
            10.0,
        );
        game.teams = vec![make_team("t1", &["a", "b"]), make_team("t2", &["c", "d"])];
        let deltas = game_deltas(&game, &score_game(&round, &game));
        assert!(close(deltas["a"], 15.0));
        assert!(close(deltas["b"], 15.0));
        assert!(close(deltas["c"], -15.0));
        assert!(close(total(&deltas), 0.0));
    }

    #[test]
    fn best_ball_winner_split_funded_by_losers() {
        let mut round = make_round(&["a", "b", "c", "d"]);
        card(&mut round, "a", flat(3));
        card(&mut round, "c", flat(4));
        let mut game = with_bet(make_game(GameFormat::BestBall, &["a", "b", "c", "d"]), 20.0);
        game.teams = vec![make_team("t1", &["a", "b"]), make_team("t2", &["c", "d"])];
        let deltas = game_deltas(&game, &score_game(&round, &game));
        assert_eq!(deltas["a"], 10.0);
        assert_eq!(deltas["b"], 10.0);
        assert_eq!(deltas["c"], -10.0);
        assert_eq!(deltas["d"], -10.0);
    }

    #[test]
    fn three_point_differential_times_bet() {
        let mut round = make_round(&["a1", "a2", "b1", "b2"]);
        for (p, s) in [("a1", 3), ("a2", 4), ("b1", 4), ("b2", 5)] {
            hole(&mut round, p, 1, s);
        }
        let game = with_bet(
            with_setting(
                make_game(GameFormat::ThreePoint, &["a1", "a2", "b1", "b2"]),
                "threePointPairs",
                json!({ "teamA1": "a1", "teamA2": "a2", "teamB1": "b1", "teamB2": "b2" }),
            ),
            2.0,
        );
        let deltas = game_deltas(&game, &score_game(&round, &game));
        // 3 points x $2 = $6 per side, $3 each.
        assert_eq!(deltas["a1"], 3.0);
        assert_eq!(deltas["b2"], -3.0);
    }

    #[test]
    fn unconfigured_three_point_moves_nothing() {
        let round = make_round(&["a1", "a2", "b1", "b2"]);
        let game = with_bet(make_game(GameFormat::ThreePoint, &["a1", "a2", "b1", "b2"]), 2.0);
        assert!(game_deltas(&game, &score_game(&round, &game)).is_empty());
    }

    #[test]
    fn wolf_points_times_bet() {
        let mut round = make_round(&["a", "b", "c", "d"]);
        for (p, s) in [("a", 3), ("b", 4), ("c", 4), ("d", 5)] {
            hole(&mut round, p, 1, s);
        }
        let game = with_bet(
            with_setting(make_game(GameFormat::Wolf, &["a", "b", "c", "d"]), "wolfHoleChoices", json!({ "1": { "mode": "lone" } })),
            5.0,
        );
        let deltas = game_deltas(&game, &score_game(&round, &game));
        assert_eq!(deltas["a"], 15.0);
        assert_eq!(deltas["d"], -5.0);
        assert!(close(total(&deltas), 0.0));
    }

    #[test]
    fn halved_match_moves_nothing() {
        let mut round = make_round(&["a", "b"]);
        card(&mut round, "a", flat(4));
        card(&mut round, "b", flat(4));
        let game = with_bet(make_game(GameFormat::MatchPlay, &["a", "b"]), 10.0);
        assert!(game_deltas(&game, &score_game(&round, &game)).is_empty());
    }

    #[test]
    fn stableford_has_no_money_rule() {
        let mut round = make_round(&["a", "b"]);
        card(&mut round, "a", flat(3));
        let game = with_bet(make_game(GameFormat::Stableford, &["a", "b"]), 10.0);
        assert!(game_deltas(&game, &score_game(&round, &game)).is_empty());
    }
}

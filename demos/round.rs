//! Simulate a foursome, score every game and print who pays whom.
//!
//! Run with: `cargo run --example round`
//! Set `RUST_LOG=scorecard_games=debug` to see dispatch logging.
//!
//! 1. **Leaderboard**: gross strokes and to-par for each player.
//! 2. **Games**: one summary line per format, plus any known limitations.
//! 3. **Settlement**: per-game deltas, net balances and transfers.

use scorecard_games::{
    leaderboard, score_round, settle_round, simulate_round, GameFormat, GameResult, Round,
    SimulationRequest,
};
use tracing_subscriber::EnvFilter;

fn summary(round: &Round, result: &GameResult) -> String {
    match result {
        GameResult::Skins(r) => {
            let mut parts: Vec<String> = r
                .players
                .iter()
                .filter(|(_, p)| p.skins > 0)
                .map(|(id, p)| format!("{} {}", round.player_name(id), p.skins))
                .collect();
            if r.unclaimed_carry > 0 {
                parts.push(format!("{} carried", r.unclaimed_carry));
            }
            parts.join(", ")
        }
        GameResult::BestBall(r) => r
            .teams
            .iter()
            .map(|t| format!("{} {} thru {}", t.team_name, t.total, t.holes_played))
            .collect::<Vec<_>>()
            .join(" vs "),
        GameResult::Nassau(r) => {
            let name = |w: &Option<String>| w.clone().unwrap_or_else(|| "push".into());
            format!(
                "front {}, back {}, overall {}",
                name(&r.front_winner),
                name(&r.back_winner),
                name(&r.overall_winner)
            )
        }
        GameResult::Stableford(r) => r
            .standings
            .iter()
            .map(|e| format!("{} {}", round.player_name(&e.player_id), e.points))
            .collect::<Vec<_>>()
            .join(", "),
        GameResult::MatchPlay(r) => {
            let p1 = r.player1.as_deref().unwrap_or("-");
            format!("{} {}", round.player_name(p1), r.current_status)
        }
        GameResult::ThreePoint(r) if r.configured => {
            format!("{:.1} - {:.1}", r.team_a_points, r.team_b_points)
        }
        GameResult::ThreePoint(_) => "pairs not set".into(),
        GameResult::Wolf(r) => r
            .points
            .iter()
            .map(|(id, p)| format!("{} {:+.1}", round.player_name(id), p))
            .collect::<Vec<_>>()
            .join(", "),
        GameResult::NotImplemented(_) => "not scored".into(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut request = SimulationRequest::new(4).seeded(2024);
    request.unrecorded_fraction = 0.05;
    request.formats.push(GameFormat::Vegas);
    let round = simulate_round(request);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {}  ({})", round.course_name, round.id);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (pos, s) in leaderboard(&round).iter().enumerate() {
        println!("  {:>2}. {:<6} {:>4}  {:>3} strokes  thru {}", pos + 1, s.name, s.to_par_label, s.strokes, s.thru);
    }

    println!();
    for scored in score_round(&round) {
        println!("  [{}] {}", scored.name, summary(&round, &scored.result));
        for note in scored.result.limitations() {
            println!("        note: {note}");
        }
    }

    let settlement = settle_round(&round);
    println!();
    for ledger in &settlement.games {
        if ledger.deltas.is_empty() {
            continue;
        }
        let line: Vec<String> = ledger
            .deltas
            .iter()
            .map(|(id, d)| format!("{} {:+.2}", round.player_name(id), d))
            .collect();
        println!("  {:<20} {}", ledger.name, line.join("  "));
    }
    println!();
    for (id, balance) in &settlement.balances {
        println!("  {:<6} {:+.2}", round.player_name(id), balance);
    }
    println!();
    if settlement.transfers.is_empty() {
        println!("  All square.");
    }
    for transfer in &settlement.transfers {
        println!("  {}", transfer);
    }
}

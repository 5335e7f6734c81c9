//! Synthetic rounds for demos and property tests.
//!
//! Pass `rng_seed: Some(u64)` to get the same round every time.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, RngCore, SeedableRng};
use serde_json::json;

use crate::scoring_engine::models::{
    Game, GameFormat, HoleInfo, Player, Round, Score, Team, HOLE_COUNT,
};

const NAMES: [&str; 8] = ["Ann", "Bo", "Cy", "Dee", "Eli", "Fay", "Gus", "Hal"];

/// Par layout of one nine before shuffling: 36 par.
const NINE: [u8; 9] = [3, 3, 4, 4, 4, 4, 4, 5, 5];

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRequest {
    pub players: usize,
    pub rng_seed: Option<u64>,
    /// Share of cells left unrecorded (`strokes: None`), 0.0..=1.0.
    pub unrecorded_fraction: f64,
    /// One game is attached per entry.
    pub formats: Vec<GameFormat>,
    pub bet_amount: Option<f64>,
}

impl SimulationRequest {
    /// A complete card for `players` with the implemented formats and a $5 bet.
    pub fn new(players: usize) -> Self {
        SimulationRequest {
            players,
            rng_seed: None,
            unrecorded_fraction: 0.0,
            formats: vec![
                GameFormat::Skins,
                GameFormat::Nassau,
                GameFormat::BestBall,
                GameFormat::Stableford,
                GameFormat::MatchPlay,
                GameFormat::ThreePoint,
                GameFormat::Wolf,
            ],
            bet_amount: Some(5.0),
        }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

fn layout<R: Rng>(rng: &mut R) -> Vec<HoleInfo> {
    let mut pars = Vec::with_capacity(HOLE_COUNT as usize);
    for _ in 0..2 {
        let mut nine = NINE;
        nine.shuffle(rng);
        pars.extend(nine);
    }
    let mut stroke_index: Vec<u8> = (1..=HOLE_COUNT).collect();
    stroke_index.shuffle(rng);

    pars.into_iter()
        .zip(stroke_index)
        .enumerate()
        .map(|(i, (par, handicap))| {
            let yards = match par {
                3 => rng.gen_range(140..=220),
                4 => rng.gen_range(330..=460),
                _ => rng.gen_range(480..=580),
            };
            HoleInfo { number: i as u8 + 1, par, yards: Some(yards), handicap: Some(handicap) }
        })
        .collect()
}

/// Strokes for one hole, skewed toward bogey golf.
fn strokes_for<R: Rng>(rng: &mut R, par: u8) -> u32 {
    let roll: u32 = rng.gen_range(0..100);
    let diff: i32 = match roll {
        0..=2 if par == 5 => -2,
        0..=14            => -1,
        15..=54           => 0,
        55..=84           => 1,
        85..=96           => 2,
        _                 => 3,
    };
    (par as i32 + diff).max(1) as u32
}

fn ids(players: &[Player], n: usize) -> Vec<String> {
    players.iter().take(n).map(|p| p.id.clone()).collect()
}

fn make_game<R: Rng>(rng: &mut R, index: usize, format: GameFormat, players: &[Player], bet: Option<f64>) -> Game {
    let mut game = Game {
        id: format!("g{}", index + 1),
        format,
        name: format.to_string(),
        player_ids: ids(players, players.len()),
        teams: Vec::new(),
        settings: serde_json::Map::new(),
    };
    if let Some(bet) = bet {
        game.settings.insert("betAmount".into(), json!(bet));
    }

    match format {
        GameFormat::BestBall if players.len() >= 2 => {
            let half = players.len().div_ceil(2);
            game.teams = vec![
                Team { id: "t1".into(), name: "Team 1".into(), player_ids: ids(players, half) },
                Team {
                    id: "t2".into(),
                    name: "Team 2".into(),
                    player_ids: players[half..].iter().map(|p| p.id.clone()).collect(),
                },
            ];
        }
        GameFormat::MatchPlay => game.player_ids.truncate(2),
        GameFormat::ThreePoint if players.len() >= 4 => {
            game.player_ids.truncate(4);
            game.settings.insert(
                "threePointPairs".into(),
                json!({
                    "teamA1": players[0].id, "teamA2": players[1].id,
                    "teamB1": players[2].id, "teamB2": players[3].id,
                }),
            );
        }
        GameFormat::Wolf if players.len() >= 4 => {
            game.player_ids.truncate(4);
            let mut choices = serde_json::Map::new();
            for hole in 1..=HOLE_COUNT {
                let wolf = (hole as usize - 1) % 4;
                let choice = if rng.gen_bool(0.25) {
                    json!({ "mode": "lone" })
                } else {
                    let partner = (wolf + rng.gen_range(1..4)) % 4;
                    json!({ "mode": "partner", "partnerId": players[partner].id })
                };
                choices.insert(hole.to_string(), choice);
            }
            game.settings.insert("wolfHoleChoices".into(), serde_json::Value::Object(choices));
        }
        _ => {}
    }
    game
}

/// Build an 18-hole, par-72 round with random scores and the requested games.
pub fn simulate_round(request: SimulationRequest) -> Round {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    let unrecorded = if request.unrecorded_fraction.is_finite() {
        request.unrecorded_fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let holes = layout(&mut rng);
    let players: Vec<Player> = (0..request.players)
        .map(|i| Player {
            id: format!("p{}", i + 1),
            name: NAMES.get(i).map(|n| n.to_string()).unwrap_or_else(|| format!("Player {}", i + 1)),
            handicap: Some(rng.gen_range(0..=30) as f32),
            group_id: None,
        })
        .collect();

    let mut scores = Vec::with_capacity(players.len() * holes.len());
    for player in &players {
        for hole in &holes {
            let strokes = if rng.gen_bool(unrecorded) { None } else { Some(strokes_for(&mut rng, hole.par)) };
            scores.push(Score::new(player.id.clone(), hole.number, strokes));
        }
    }

    let games = request
        .formats
        .iter()
        .enumerate()
        .map(|(i, &format)| make_game(&mut rng, i, format, &players, request.bet_amount))
        .collect();

    let round = Round {
        id: format!("sim-{:08X}", rng.next_u32()),
        course_id: "sim-course".into(),
        course_name: "Simulated Links".into(),
        holes,
        players,
        scores,
        games,
    };
    tracing::debug!(round = %round.id, players = round.players.len(), games = round.games.len(), "Simulated round");
    round
}

//! Settlement: every game's money deltas, combined and netted into payments.
//!
//! | Module    | Purpose |
//! |-----------|---------|
//! | `deltas`  | Per-format rules turning a `GameResult` into dollar deltas |
//! | `netting` | Greedy reduction of net balances to pairwise transfers |

pub mod deltas;
pub mod netting;

use serde::{Deserialize, Serialize};

use crate::scoring_engine::{models::GameFormat, score_game, Round};

pub use deltas::{game_deltas, Balances};
pub use netting::{apply_transfers, net_transfers, round_cents, Transfer, SETTLED_EPSILON};

/// One game's contribution to the settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLedger {
    pub round_id: String,
    pub game_id: String,
    pub name: String,
    pub format: GameFormat,
    pub deltas: Balances,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub games: Vec<GameLedger>,
    /// Net dollars per player across every game, positive = collects.
    pub balances: Balances,
    pub transfers: Vec<Transfer>,
}

/// Settle every game in one round.
pub fn settle_round(round: &Round) -> Settlement {
    settle_rounds(std::slice::from_ref(round))
}

/// Settle every game across several rounds at once (e.g. a tournament),
/// so players make one set of payments instead of one per round.
pub fn settle_rounds(rounds: &[Round]) -> Settlement {
    let mut settlement = Settlement::default();

    for round in rounds {
        for game in &round.games {
            let result = score_game(round, game);
            let deltas = game_deltas(game, &result);
            for (id, amount) in &deltas {
                *settlement.balances.entry(id.clone()).or_insert(0.0) += amount;
            }
            settlement.games.push(GameLedger {
                round_id: round.id.clone(),
                game_id: game.id.clone(),
                name: game.name.clone(),
                format: game.format,
                deltas,
            });
        }
    }

    settlement.transfers = net_transfers(&settlement.balances);
    tracing::debug!(
        rounds = rounds.len(),
        games = settlement.games.len(),
        transfers = settlement.transfers.len(),
        "Settled"
    );
    settlement
}

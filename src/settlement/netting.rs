//! Greedy debt netting.
//!
//! Debtors and creditors are each sorted by size, largest first, and the
//! largest debtor pays the largest creditor `min(debt, credit)`. Whichever side
//! hits zero is skipped and matching continues until one list runs out.
//! Each transfer clears at least one party, so `n` non-zero balances settle in
//! at most `n - 1` transfers. This is not guaranteed to be the true minimum
//! number of payments.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scoring_engine::models::PlayerId;
use crate::settlement::deltas::Balances;

/// Balances within a cent of zero are settled.
pub const SETTLED_EPSILON: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub from: PlayerId,
    pub to: PlayerId,
    /// Dollars, rounded to the cent.
    pub amount: f64,
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pays {} ${:.2}", self.from, self.to, self.amount)
    }
}

pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

fn by_size_desc(a: &(&PlayerId, f64), b: &(&PlayerId, f64)) -> Ordering {
    b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal)
}

/// Reduce net balances (positive = owed money) to a list of payments.
pub fn net_transfers(balances: &Balances) -> Vec<Transfer> {
    let mut debtors: Vec<(&PlayerId, f64)> = balances
        .iter()
        .filter(|(_, b)| **b < -SETTLED_EPSILON)
        .map(|(id, &b)| (id, -b))
        .collect();
    let mut creditors: Vec<(&PlayerId, f64)> = balances
        .iter()
        .filter(|(_, b)| **b > SETTLED_EPSILON)
        .map(|(id, &b)| (id, b))
        .collect();
    // Stable sorts: equal amounts stay in player-id order.
    debtors.sort_by(by_size_desc);
    creditors.sort_by(by_size_desc);

    let mut transfers = Vec::with_capacity(debtors.len().max(creditors.len()));
    let (mut i, mut j) = (0, 0);
    while i < debtors.len() && j < creditors.len() {
        let amount = debtors[i].1.min(creditors[j].1);
        transfers.push(Transfer {
            from: debtors[i].0.clone(),
            to: creditors[j].0.clone(),
            amount: round_cents(amount),
        });
        debtors[i].1 -= amount;
        creditors[j].1 -= amount;
        if debtors[i].1 < SETTLED_EPSILON {
            i += 1;
        }
        if creditors[j].1 < SETTLED_EPSILON {
            j += 1;
        }
    }

    tracing::debug!(players = balances.len(), transfers = transfers.len(), "Netted balances");
    transfers
}

/// Apply transfers to a copy of `balances`; used to check a settlement clears.
pub fn apply_transfers(balances: &Balances, transfers: &[Transfer]) -> Balances {
    let mut after = balances.clone();
    for t in transfers {
        *after.entry(t.from.clone()).or_insert(0.0) += t.amount;
        *after.entry(t.to.clone()).or_insert(0.0) -= t.amount;
    }
    after
}

//! Shared lookups every format function starts from.
//!
//! Formats never read `Round::scores` directly. They build a [`ScoreCard`]
//! per player with [`score_by_hole`] (which already drops unrecorded holes)
//! and a par table with [`par_by_hole`], then walk [`holes`]. Keeping that
//! step in one place is what makes every format tolerate partial rounds the
//! same way.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::de::DeserializeOwned;

use crate::scoring_engine::models::{Game, PlayerId, Round, Score, HOLE_COUNT};

/// hole number → recorded strokes for a single player.
pub type ScoreCard = BTreeMap<u8, u32>;

/// hole number → par.
pub type ParTable = BTreeMap<u8, u8>;

/// Holes every format iterates, front nine first.
pub fn holes() -> RangeInclusive<u8> {
    1..=HOLE_COUNT
}

/// Front nine, back nine, full round.
pub fn front_nine() -> RangeInclusive<u8> {
    1..=9
}

pub fn back_nine() -> RangeInclusive<u8> {
    10..=HOLE_COUNT
}

/// Build a hole → strokes map for one player, silently dropping unrecorded
/// holes. A stroke count of zero is not a legal score and is dropped too.
pub fn score_by_hole(scores: &[Score], player_id: &str) -> ScoreCard {
    scores
        .iter()
        .filter(|s| s.player_id == player_id)
        .filter_map(|s| match s.strokes {
            Some(n) if n > 0 => Some((s.hole_number, n)),
            _ => None,
        })
        .collect()
}

/// Build a hole → par map for the round.
pub fn par_by_hole(round: &Round) -> ParTable {
    round.holes.iter().map(|h| (h.number, h.par)).collect()
}

/// Score cards for a list of players, in the given order.
pub fn cards_for(round: &Round, player_ids: &[PlayerId]) -> Vec<(PlayerId, ScoreCard)> {
    player_ids
        .iter()
        .map(|id| (id.clone(), score_by_hole(&round.scores, id)))
        .collect()
}

/// Lowest recorded score among `cards` on `hole`, or `None` if nobody has one.
pub fn best_ball<'a>(cards: impl IntoIterator<Item = &'a ScoreCard>, hole: u8) -> Option<u32> {
    cards.into_iter().filter_map(|c| c.get(&hole).copied()).min()
}

/// The key holding the strictly lowest value. Ties (or an empty input) give `None`.
pub fn unique_min<K, V: Ord + Copy>(entries: impl IntoIterator<Item = (K, V)>) -> Option<K> {
    let mut best: Option<(K, V)> = None;
    let mut tied = false;
    for (key, value) in entries {
        match best.as_ref().map(|(_, v)| *v) {
            Some(current) if value == current => tied = true,
            Some(current) if value > current => {}
            _ => {
                best = Some((key, value));
                tied = false;
            }
        }
    }
    match (best, tied) {
        (Some((key, _)), false) => Some(key),
        _ => None,
    }
}

/// Decode a format's typed settings from the game's settings bag.
///
/// A malformed bag falls back to the format's defaults; scoring never fails
/// because of settings.
pub fn decode_settings<T: DeserializeOwned + Default>(game: &Game) -> T {
    let bag = serde_json::Value::Object(game.settings.clone());
    match serde_json::from_value(bag) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(game = %game.id, format = %game.format, error = %e, "Malformed game settings, using defaults");
            T::default()
        }
    }
}

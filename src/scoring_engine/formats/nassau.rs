//! Nassau: three independent stroke-play bets (front nine, back nine, overall).
//!
//! Match mode is accepted in settings but scored as stroke play; the result
//! carries `match_mode_fallback` so a caller can say so instead of presenting
//! the numbers as true match play.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::scoring_engine::{
    formats::best_ball::team_total,
    helpers::{back_nine, cards_for, decode_settings, front_nine, holes, unique_min},
    models::{Game, NassauMode, NassauScope, NassauSettings, PlayerId, Round},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Segment {
    Front,
    Back,
    Overall,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Front, Segment::Back, Segment::Overall];

    pub fn holes(self) -> RangeInclusive<u8> {
        match self {
            Segment::Front   => front_nine(),
            Segment::Back    => back_nine(),
            Segment::Overall => holes(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentTotal {
    pub strokes: u64,
    pub holes_played: u32,
}

/// A player (individual scope) or a team (team scope).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub id: String,
    pub name: String,
    pub player_ids: Vec<PlayerId>,
    pub front: SegmentTotal,
    pub back: SegmentTotal,
    pub overall: SegmentTotal,
}

impl Competitor {
    pub fn segment(&self, segment: Segment) -> &SegmentTotal {
        match segment {
            Segment::Front   => &self.front,
            Segment::Back    => &self.back,
            Segment::Overall => &self.overall,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NassauResult {
    pub scope: NassauScope,
    pub mode: NassauMode,
    /// Match mode was requested and stroke totals were used instead.
    pub match_mode_fallback: bool,
    pub competitors: Vec<Competitor>,
    pub front_winner: Option<String>,
    pub back_winner: Option<String>,
    pub overall_winner: Option<String>,
}

impl NassauResult {
    pub fn winner(&self, segment: Segment) -> Option<&str> {
        match segment {
            Segment::Front   => self.front_winner.as_deref(),
            Segment::Back    => self.back_winner.as_deref(),
            Segment::Overall => self.overall_winner.as_deref(),
        }
    }
}

fn segment_total(per_hole: &[(u8, u32)], segment: Segment) -> SegmentTotal {
    let range = segment.holes();
    let played: Vec<u64> = per_hole
        .iter()
        .filter(|(h, _)| range.contains(h))
        .map(|&(_, s)| u64::from(s))
        .collect();
    SegmentTotal { strokes: played.iter().sum(), holes_played: played.len() as u32 }
}

fn competitor(id: String, name: String, player_ids: Vec<PlayerId>, per_hole: &[(u8, u32)]) -> Competitor {
    Competitor {
        id,
        name,
        player_ids,
        front: segment_total(per_hole, Segment::Front),
        back: segment_total(per_hole, Segment::Back),
        overall: segment_total(per_hole, Segment::Overall),
    }
}

fn competitors(round: &Round, game: &Game, scope: NassauScope) -> Vec<Competitor> {
    match scope {
        NassauScope::Individual => cards_for(round, &game.player_ids)
            .into_iter()
            .map(|(id, card)| {
                let per_hole: Vec<(u8, u32)> = card.into_iter().collect();
                let name = round.player_name(&id).to_string();
                competitor(id.clone(), name, vec![id], &per_hole)
            })
            .collect(),
        NassauScope::Team => game
            .teams
            .iter()
            .map(|team| {
                let total = team_total(round, team);
                let per_hole: Vec<(u8, u32)> = total
                    .holes
                    .iter()
                    .filter_map(|h| h.score.map(|s| (h.hole, s)))
                    .collect();
                competitor(team.id.clone(), team.name.clone(), team.player_ids.clone(), &per_hole)
            })
            .collect(),
    }
}

/// Outright low total among competitors that played the segment. A lone
/// competitor has nobody to beat.
fn segment_winner(competitors: &[Competitor], segment: Segment) -> Option<String> {
    let contenders: Vec<(&str, u64)> = competitors
        .iter()
        .filter(|c| c.segment(segment).holes_played > 0)
        .map(|c| (c.id.as_str(), c.segment(segment).strokes))
        .collect();
    if contenders.len() < 2 {
        return None;
    }
    unique_min(contenders).map(str::to_string)
}

pub fn score(round: &Round, game: &Game) -> NassauResult {
    let settings: NassauSettings = decode_settings(game);
    let scope = settings.nassau_scope.unwrap_or_default();
    let mode = settings.nassau_mode.unwrap_or_default();
    let match_mode_fallback = mode == NassauMode::Match;
    if match_mode_fallback {
        tracing::warn!(game = %game.id, "Nassau match mode is not implemented, scoring stroke totals");
    }

    let competitors = competitors(round, game, scope);
    NassauResult {
        scope,
        mode,
        match_mode_fallback,
        front_winner: segment_winner(&competitors, Segment::Front),
        back_winner: segment_winner(&competitors, Segment::Back),
        overall_winner: segment_winner(&competitors, Segment::Overall),
        competitors,
    }
}

use serde::{Deserialize, Serialize};

use crate::scoring_engine::{
    helpers::{best_ball, cards_for, holes, unique_min, ScoreCard},
    models::{Game, PlayerId, Round, Team},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamHole {
    pub hole: u8,
    /// Lowest member score, `None` when no member has recorded the hole.
    pub score: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamTotal {
    pub team_id: String,
    pub team_name: String,
    pub player_ids: Vec<PlayerId>,
    /// Sum of the team's best balls.
    pub total: u64,
    pub holes_played: u32,
    pub holes: Vec<TeamHole>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestBallResult {
    pub teams: Vec<TeamTotal>,
    /// Team id with the outright lowest total.
    pub winner: Option<String>,
}

impl BestBallResult {
    pub fn team(&self, team_id: &str) -> Option<&TeamTotal> {
        self.teams.iter().find(|t| t.team_id == team_id)
    }
}

/// Best-ball totals for one team. Shared with Nassau's team scope.
pub fn team_total(round: &Round, team: &Team) -> TeamTotal {
    let cards = cards_for(round, &team.player_ids);
    let members: Vec<&ScoreCard> = cards.iter().map(|(_, c)| c).collect();

    let holes: Vec<TeamHole> = holes()
        .map(|hole| TeamHole { hole, score: best_ball(members.iter().copied(), hole) })
        .collect();
    let played: Vec<u64> = holes.iter().filter_map(|h| h.score.map(u64::from)).collect();

    TeamTotal {
        team_id: team.id.clone(),
        team_name: team.name.clone(),
        player_ids: team.player_ids.clone(),
        total: played.iter().sum(),
        holes_played: played.len() as u32,
        holes,
    }
}

pub fn score(round: &Round, game: &Game) -> BestBallResult {
    if game.teams.len() < 2 {
        tracing::warn!(game = %game.id, teams = game.teams.len(), "Best ball needs at least two teams");
    }

    let teams: Vec<TeamTotal> = game.teams.iter().map(|t| team_total(round, t)).collect();
    let winner = unique_min(
        teams
            .iter()
            .filter(|t| t.holes_played > 0)
            .map(|t| (t.team_id.clone(), t.total)),
    );

    BestBallResult { teams, winner }
}

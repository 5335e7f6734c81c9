use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};

/// Player identifiers are opaque strings assigned by the round container.
pub type PlayerId = String;

/// Number of holes every format iterates over.
pub const HOLE_COUNT: u8 = 18;

// ---------------------------------------------------------------------------
// Round primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleInfo {
    pub number: u8,
    pub par: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yards: Option<u32>,
    /// Stroke index (difficulty rating) of the hole, 1 = hardest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handicap: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handicap: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// One cell of the scorecard. `strokes: None` means "not recorded yet",
/// which is different from any stroke count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub player_id: PlayerId,
    pub hole_number: u8,
    #[serde(default)]
    pub strokes: Option<u32>,
}

impl Score {
    pub fn new(player_id: impl Into<PlayerId>, hole_number: u8, strokes: Option<u32>) -> Self {
        Score { player_id: player_id.into(), hole_number, strokes }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: String,
    #[serde(default)]
    pub course_id: String,
    #[serde(default)]
    pub course_name: String,
    pub holes: Vec<HoleInfo>,
    pub players: Vec<Player>,
    #[serde(default)]
    pub scores: Vec<Score>,
    #[serde(default)]
    pub games: Vec<Game>,
}

impl Round {
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Display name for a player id, falling back to the id itself.
    pub fn player_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.player(id).map(|p| p.name.as_str()).unwrap_or(id)
    }
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameFormat {
    Skins,
    Nassau,
    BestBall,
    Scramble,
    Wolf,
    ThreePoint,
    Stableford,
    ModifiedStableford,
    MatchPlay,
    BingoBangoBongo,
    Vegas,
    Hammer,
    Rabbit,
    Trash,
    Chicago,
    Defender,
}

impl GameFormat {
    pub const ALL: [GameFormat; 16] = [
        GameFormat::Skins,
        GameFormat::Nassau,
        GameFormat::BestBall,
        GameFormat::Scramble,
        GameFormat::Wolf,
        GameFormat::ThreePoint,
        GameFormat::Stableford,
        GameFormat::ModifiedStableford,
        GameFormat::MatchPlay,
        GameFormat::BingoBangoBongo,
        GameFormat::Vegas,
        GameFormat::Hammer,
        GameFormat::Rabbit,
        GameFormat::Trash,
        GameFormat::Chicago,
        GameFormat::Defender,
    ];
}

impl fmt::Display for GameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameFormat::Skins              => "Skins",
            GameFormat::Nassau             => "Nassau",
            GameFormat::BestBall           => "Best Ball",
            GameFormat::Scramble           => "Scramble",
            GameFormat::Wolf               => "Wolf",
            GameFormat::ThreePoint         => "3-Point System",
            GameFormat::Stableford         => "Stableford",
            GameFormat::ModifiedStableford => "Modified Stableford",
            GameFormat::MatchPlay          => "Match Play",
            GameFormat::BingoBangoBongo    => "Bingo Bango Bongo",
            GameFormat::Vegas              => "Vegas",
            GameFormat::Hammer             => "Hammer",
            GameFormat::Rabbit             => "Rabbit",
            GameFormat::Trash              => "Trash",
            GameFormat::Chicago            => "Chicago",
            GameFormat::Defender           => "Defender",
        };
        write!(f, "{}", s)
    }
}

/// Players competing as one unit. Order matters for formats with pairings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub player_ids: Vec<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub format: GameFormat,
    pub name: String,
    pub player_ids: Vec<PlayerId>,
    #[serde(default)]
    pub teams: Vec<Team>,
    /// Loosely-typed settings bag as authored by the UI or the voice parser.
    /// Each format decodes its own typed view of it.
    #[serde(default)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Per-format settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkinsSettings {
    pub carryover: Option<bool>,
    #[serde(alias = "pointValue")]
    pub bet_amount: Option<f64>,
}

impl SkinsSettings {
    pub fn carryover(&self) -> bool {
        self.carryover.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NassauScope {
    #[default]
    Individual,
    Team,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NassauMode {
    #[default]
    Stroke,
    /// Accepted but scored as stroke play.
    Match,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NassauSettings {
    pub nassau_scope: Option<NassauScope>,
    pub nassau_mode: Option<NassauMode>,
    #[serde(alias = "pointValue")]
    pub bet_amount: Option<f64>,
}

/// Settings for formats whose only knob is the wager.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BetSettings {
    #[serde(alias = "pointValue")]
    pub bet_amount: Option<f64>,
}

/// Explicit 2v2 pairing: A1 plays B1, A2 plays B2.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThreePointPairs {
    pub team_a1: Option<PlayerId>,
    pub team_a2: Option<PlayerId>,
    pub team_b1: Option<PlayerId>,
    pub team_b2: Option<PlayerId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThreePointSettings {
    pub three_point_pairs: Option<ThreePointPairs>,
    #[serde(alias = "pointValue")]
    pub bet_amount: Option<f64>,
}

/// The wolf's call on one hole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum WolfChoice {
    Lone,
    Partner {
        #[serde(rename = "partnerId")]
        partner_id: PlayerId,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WolfSettings {
    pub wolf_order_player_ids: Option<Vec<PlayerId>>,
    /// Hole number (as a string key) → raw choice. Entries are decoded one
    /// at a time so a half-entered choice only affects its own hole.
    pub wolf_hole_choices: BTreeMap<String, serde_json::Value>,
    pub wolf_lone_points: Option<f64>,
    pub wolf_partner_points: Option<f64>,
    #[serde(alias = "pointValue")]
    pub bet_amount: Option<f64>,
}

impl WolfSettings {
    pub const DEFAULT_LONE_POINTS: f64 = 3.0;
    pub const DEFAULT_PARTNER_POINTS: f64 = 1.0;

    pub fn lone_points(&self) -> f64 {
        self.wolf_lone_points.unwrap_or(Self::DEFAULT_LONE_POINTS)
    }

    pub fn partner_points(&self) -> f64 {
        self.wolf_partner_points.unwrap_or(Self::DEFAULT_PARTNER_POINTS)
    }
}

//! Request and response shapes exchanged with callers of the pairing service.

use crate::models::tournament::FloatPolicy;
use serde::{Deserialize, Serialize};

/// Roster plus complete history, as sent by the caller.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PairingRequest {
    #[serde(default)]
    pub rounds: u32,
    pub players: Vec<RosterEntry>,
    /// One inner list per completed round, games in board order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub games: Vec<Vec<GameRecord>>,
    #[serde(default, rename = "float")]
    pub float_policy: FloatPolicy,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub elo: i32,
}

/// A past game, or a bye when `bye` is set (then `black` is ignored).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub black: Option<String>,
    /// 1.0 white won, 0.5 draw, 0.0 black won; absent when not yet known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bye: bool,
}

impl GameRecord {
    /// A played (or pending) game between two named competitors.
    pub fn game(white: impl Into<String>, black: impl Into<String>, result: Option<f64>) -> Self {
        Self {
            white: white.into(),
            black: Some(black.into()),
            result,
            bye: false,
        }
    }

    /// A bye for the named competitor.
    pub fn bye(competitor: impl Into<String>) -> Self {
        Self {
            white: competitor.into(),
            bye: true,
            ..Self::default()
        }
    }
}

/// One line of the next round's pairings.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PairingEntry {
    pub white: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub black: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bye: bool,
    /// Pairing is a rematch or restricted pairing made as a fallback.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub unresolved: bool,
}

/// Next round's pairings, serialized as a bare JSON array.
pub type PairingResponse = Vec<PairingEntry>;

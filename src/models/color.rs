//! Piece colors and color-preference strength.

use serde::{Deserialize, Serialize};

/// Color a competitor plays (or is due) in a game.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// No color due: no games played yet, or colors balanced.
    #[default]
    NoColor,
    White,
    Black,
}

/// How strongly a competitor wants their due color.
///
/// Ordered: a stronger preference compares greater.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorPreference {
    /// White and black counts are equal.
    #[default]
    None,
    /// Imbalance of one.
    Mild,
    /// Imbalance of two.
    Alternation,
    /// Imbalance of three or more.
    Absolute,
}

impl ColorPreference {
    /// Map a white/black count imbalance to a preference strength.
    pub fn from_imbalance(diff: u32) -> Self {
        match diff {
            0 => ColorPreference::None,
            1 => ColorPreference::Mild,
            2 => ColorPreference::Alternation,
            _ => ColorPreference::Absolute,
        }
    }
}

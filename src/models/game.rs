//! Match: one pairing decision for a round (a game or a bye).

use crate::models::competitor::CompetitorId;

/// A pairing for the round: white vs black, or a bye for `white` alone.
///
/// Holds competitor ids, not the competitors; resolve them through the
/// [`Tournament`](crate::models::Tournament) that produced the match.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Match {
    pub white: CompetitorId,
    /// None for a bye.
    pub black: Option<CompetitorId>,
    /// Set when no rematch-free opponent existed and this pairing is a best-effort fallback.
    pub unresolved: bool,
}

impl Match {
    /// A regular game, `white` vs `black`.
    pub fn game(white: CompetitorId, black: CompetitorId) -> Self {
        Self {
            white,
            black: Some(black),
            unresolved: false,
        }
    }

    /// A bye for `competitor`.
    pub fn bye(competitor: CompetitorId) -> Self {
        Self {
            white: competitor,
            black: None,
            unresolved: false,
        }
    }

    /// A pairing made despite a rematch or restriction.
    pub fn fallback(white: CompetitorId, black: CompetitorId) -> Self {
        Self {
            unresolved: true,
            ..Self::game(white, black)
        }
    }

    /// Whether this entry is a bye (no black).
    pub fn is_bye(&self) -> bool {
        self.black.is_none()
    }
}

/// All matches generated for one round, plus how many were fallbacks.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Pairings {
    pub round: u32,
    pub matches: Vec<Match>,
    /// Number of matches with `unresolved` set.
    pub unresolved: usize,
}

impl Pairings {
    /// Wrap a round's matches, counting the fallbacks among them.
    pub fn new(round: u32, matches: Vec<Match>) -> Self {
        let unresolved = matches.iter().filter(|m| m.unresolved).count();
        Self {
            round,
            matches,
            unresolved,
        }
    }

    /// The bye entries, in output order.
    pub fn byes(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|m| m.is_bye())
    }

    /// No fallback pairings this round.
    pub fn is_fully_resolved(&self) -> bool {
        self.unresolved == 0
    }
}

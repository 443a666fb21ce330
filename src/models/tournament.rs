//! Tournament roster, round state, and errors.

use crate::models::competitor::{Competitor, CompetitorId};
use serde::{Deserialize, Serialize};

/// Errors that can occur while building a tournament or generating pairings.
#[derive(Clone, Debug, PartialEq)]
pub enum TournamentError {
    /// Rounds are numbered from 1.
    InvalidRound(u32),
    /// No encoded history was supplied.
    MissingData,
    /// The encoded history could not be parsed.
    MalformedData(String),
    /// A game references a name that is not on the roster.
    UnknownCompetitor(String),
    /// A non-bye game has no black participant.
    MissingOpponent,
    /// A game lists the same competitor on both sides.
    SelfPairing(String),
    /// Two roster entries share a name (names are how games reference competitors).
    DuplicateCompetitorName(String),
    /// Game result other than 1.0, 0.5 or 0.0.
    InvalidResult(f64),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidRound(round) => {
                write!(f, "Invalid round {}: rounds start at 1", round)
            }
            TournamentError::MissingData => write!(f, "Missing 'data' parameter"),
            TournamentError::MalformedData(e) => write!(f, "Invalid JSON: {}", e),
            TournamentError::UnknownCompetitor(name) => write!(f, "Unknown player: {}", name),
            TournamentError::MissingOpponent => write!(f, "Black player missing for non-bye game"),
            TournamentError::SelfPairing(name) => {
                write!(f, "Player cannot play themselves: {}", name)
            }
            TournamentError::DuplicateCompetitorName(name) => {
                write!(f, "Duplicate player name: {}", name)
            }
            TournamentError::InvalidResult(r) => {
                write!(f, "Invalid result {}: expected 1.0, 0.5 or 0.0", r)
            }
        }
    }
}

impl std::error::Error for TournamentError {}

/// What happens to the odd competitor out of a score group.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatPolicy {
    /// Every odd group gives its lowest-rated member a bye.
    #[default]
    #[serde(alias = "bye")]
    ByeEachGroup,
    /// An odd group first tries to pull a competitor up from the next group;
    /// only when nobody can float up does it give a bye.
    Upfloat,
}

/// Full state for one pairing call: roster plus round bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct Tournament {
    /// Competitors in registration order. `competitors[i].id == i + 1`.
    competitors: Vec<Competitor>,
    /// Configured number of rounds (0 = not limited).
    pub total_rounds: u32,
    /// Round most recently requested from `generate_pairings`.
    pub current_round: u32,
    pub float_policy: FloatPolicy,
    /// Raised when some group could not be paired without a rematch or restriction.
    pub(crate) pairing_error: bool,
}

impl Tournament {
    /// Create an empty tournament.
    pub fn new(total_rounds: u32) -> Self {
        Self {
            total_rounds,
            ..Self::default()
        }
    }

    /// Builder-style setter for the odd-group policy.
    pub fn with_float_policy(mut self, policy: FloatPolicy) -> Self {
        self.float_policy = policy;
        self
    }

    /// Register a competitor; ids are assigned 1..N in call order.
    pub fn add_competitor(&mut self, name: impl Into<String>, rating: i32) -> CompetitorId {
        let id = self.competitors.len() as CompetitorId + 1;
        self.competitors.push(Competitor::new(id, name, rating));
        id
    }

    /// All competitors in registration order.
    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    pub(crate) fn competitors_mut(&mut self) -> &mut [Competitor] {
        &mut self.competitors
    }

    /// Look up a competitor by id.
    pub fn competitor(&self, id: CompetitorId) -> Option<&Competitor> {
        let idx = self.index_of(id)?;
        Some(&self.competitors[idx])
    }

    /// Mutable lookup by id.
    pub fn competitor_mut(&mut self, id: CompetitorId) -> Option<&mut Competitor> {
        let idx = self.index_of(id)?;
        Some(&mut self.competitors[idx])
    }

    /// First competitor registered under `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Competitor> {
        self.competitors.iter().find(|c| c.name == name)
    }

    pub(crate) fn index_of(&self, id: CompetitorId) -> Option<usize> {
        let idx = (id as usize).checked_sub(1)?;
        (idx < self.competitors.len()).then_some(idx)
    }

    /// Whether the last `generate_pairings` call used a best-effort fallback.
    pub fn pairing_error(&self) -> bool {
        self.pairing_error
    }

    /// Mutable access to two distinct competitors by index.
    pub(crate) fn pair_mut(&mut self, a: usize, b: usize) -> (&mut Competitor, &mut Competitor) {
        debug_assert_ne!(a, b, "a competitor cannot be paired with itself");
        if a < b {
            let (lo, hi) = self.competitors.split_at_mut(b);
            (&mut lo[a], &mut hi[0])
        } else {
            let (lo, hi) = self.competitors.split_at_mut(a);
            (&mut hi[0], &mut lo[b])
        }
    }
}

//! Data structures for Swiss pairing: competitors, matches, tournament state, wire shapes.

mod color;
mod competitor;
mod game;
mod request;
mod tournament;

pub use color::{Color, ColorPreference};
pub use competitor::{record_game, Competitor, CompetitorId};
pub use game::{Match, Pairings};
pub use request::{GameRecord, PairingEntry, PairingRequest, PairingResponse, RosterEntry};
pub use tournament::{FloatPolicy, Tournament, TournamentError};

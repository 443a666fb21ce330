//! Swiss-system pairing service: library with the pairing engine and history replay.

pub mod logic;
pub mod models;

pub use logic::{
    allocate_colors, generate_pairings, make_groups, pair_request, pairing_order, parse_request,
    replay_request, to_response, ColorAllocation, ColorStep,
};
pub use models::{
    record_game, Color, ColorPreference, Competitor, CompetitorId, FloatPolicy, GameRecord, Match,
    PairingEntry, PairingRequest, PairingResponse, Pairings, RosterEntry, Tournament,
    TournamentError,
};

//! Pairing logic: score groups, round-1 seeding, group pairing, history replay.

mod first_round;
mod grouping;
mod replay;
mod rounds;
mod subsequent;

pub use grouping::{make_groups, pairing_order};
pub use replay::{pair_request, parse_request, replay_request, to_response};
pub use rounds::generate_pairings;
pub use subsequent::{allocate_colors, ColorAllocation, ColorStep};

//! Round dispatch: first-round seeding or score-group pairing.

use crate::logic::first_round::pair_first_round;
use crate::logic::subsequent::pair_subsequent_round;
use crate::models::{Pairings, Tournament, TournamentError};

/// Generate pairings for `round` and record every paired game into the roster.
///
/// Resets the pairing error before pairing. A group that could not be paired
/// without a rematch still yields matches; those are tagged `unresolved` and
/// counted in [`Pairings::unresolved`], and [`Tournament::pairing_error`] is raised.
pub fn generate_pairings(
    tournament: &mut Tournament,
    round: u32,
) -> Result<Pairings, TournamentError> {
    if round == 0 {
        return Err(TournamentError::InvalidRound(round));
    }
    if tournament.total_rounds > 0 && round > tournament.total_rounds {
        log::warn!(
            "Pairing round {} of a {}-round tournament",
            round,
            tournament.total_rounds
        );
    }

    tournament.current_round = round;
    tournament.pairing_error = false;

    let matches = if round == 1 {
        pair_first_round(tournament)
    } else {
        pair_subsequent_round(tournament, round)
    };
    let pairings = Pairings::new(round, matches);

    log::info!(
        "Round {}: {} pairing(s) for {} competitor(s), {} bye(s)",
        round,
        pairings.matches.len(),
        tournament.competitors().len(),
        pairings.byes().count()
    );
    if !pairings.is_fully_resolved() {
        log::warn!(
            "Round {}: {} pairing(s) could not avoid a rematch or restriction",
            round,
            pairings.unresolved
        );
    }
    Ok(pairings)
}

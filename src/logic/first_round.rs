//! Round 1: top half of the rating list against the bottom half.

use crate::logic::grouping::sort_by_rating;
use crate::models::{record_game, Match, Tournament};

/// Pair round 1 and record every game into both competitors' history.
///
/// 1. Sort by rating (highest first).
/// 2. Pair top[i] with bottom[i]; the bottom half gets the extra competitor when odd.
/// 3. Colors alternate per board: board 0 top plays white, board 1 bottom plays white, ...
/// 4. With an odd roster the lowest-rated competitor gets the bye.
pub(crate) fn pair_first_round(tournament: &mut Tournament) -> Vec<Match> {
    let mut order: Vec<usize> = (0..tournament.competitors().len()).collect();
    sort_by_rating(tournament, &mut order);

    let middle = order.len() / 2;
    let mut matches = Vec::with_capacity(middle + 1);

    for board in 0..middle {
        let (top, bottom) = (order[board], order[middle + board]);
        let (white, black) = if board % 2 == 0 { (top, bottom) } else { (bottom, top) };
        let (w, b) = tournament.pair_mut(white, black);
        record_game(w, b);
        matches.push(Match::game(w.id, b.id));
    }

    if order.len() % 2 == 1 {
        let last = order[order.len() - 1];
        matches.push(Match::bye(tournament.competitors()[last].id));
    }

    matches
}

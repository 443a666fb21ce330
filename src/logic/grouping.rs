//! Score groups: partition the roster into runs of equal score.

use crate::models::{Competitor, Tournament};
use std::cmp::Ordering;

/// Pairing order: score descending, then average opponent rating descending,
/// then rating descending. Ties keep registration order.
pub fn pairing_order(a: &Competitor, b: &Competitor) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| {
            b.average_opponent_rating()
                .total_cmp(&a.average_opponent_rating())
        })
        .then_with(|| b.rating.cmp(&a.rating))
}

/// Build score groups for the next round, highest score first.
///
/// Each group is a list of indices into `tournament.competitors()`, in
/// pairing order. Recomputed from scratch on every call.
pub fn make_groups(tournament: &Tournament) -> Vec<Vec<usize>> {
    let competitors = tournament.competitors();
    let mut order: Vec<usize> = (0..competitors.len()).collect();
    order.sort_by(|&a, &b| pairing_order(&competitors[a], &competitors[b]));

    let mut groups: Vec<Vec<usize>> = Vec::new();
    for idx in order {
        match groups.last_mut() {
            Some(group) if competitors[group[0]].score == competitors[idx].score => group.push(idx),
            _ => groups.push(vec![idx]),
        }
    }
    groups
}

/// Sort indices by rating, highest first. Equal ratings keep their relative order.
pub(crate) fn sort_by_rating(tournament: &Tournament, indices: &mut [usize]) {
    let competitors = tournament.competitors();
    indices.sort_by(|&a, &b| competitors[b].rating.cmp(&competitors[a].rating));
}

//! Rounds after the first: pair within score groups, byes and upfloats for odd groups.

use crate::logic::grouping::{make_groups, sort_by_rating};
use crate::models::{record_game, Color, Competitor, FloatPolicy, Match, Tournament};
use std::collections::VecDeque;

/// Which step of the color cascade decided a pairing's colors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorStep {
    /// One is due white, the other due black.
    Complementary,
    /// Exactly one is due white and the other is not due black.
    DueWhite,
    /// Exactly one is due black and the other is not due white.
    DueBlack,
    /// No due color settles it; higher priority plays white.
    Priority,
}

/// Outcome of the color cascade for a pair `(first, second)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColorAllocation {
    pub step: ColorStep,
    pub first_gets_white: bool,
}

/// Decide colors for `first` vs `second`.
///
/// The arms are evaluated in order; a later arm is only reached when every
/// earlier one failed to match.
pub fn allocate_colors(first: &Competitor, second: &Competitor) -> ColorAllocation {
    use Color::{Black, White};

    let (step, first_gets_white) = match (first.due_color(), second.due_color()) {
        (White, Black) => (ColorStep::Complementary, true),
        (Black, White) => (ColorStep::Complementary, false),
        (White, other) if other != White => (ColorStep::DueWhite, true),
        (other, White) if other != White => (ColorStep::DueWhite, false),
        (Black, other) if other != Black => (ColorStep::DueBlack, false),
        (other, Black) if other != Black => (ColorStep::DueBlack, true),
        _ => (ColorStep::Priority, first.should_take_priority_over(second)),
    };
    ColorAllocation {
        step,
        first_gets_white,
    }
}

/// Pair every score group, highest first.
pub(crate) fn pair_subsequent_round(tournament: &mut Tournament, round: u32) -> Vec<Match> {
    let mut groups: VecDeque<Vec<usize>> = make_groups(tournament).into();
    log::debug!("Round {}: {} score group(s)", round, groups.len());

    let mut matches = Vec::new();
    while let Some(mut group) = groups.pop_front() {
        if group.len() % 2 == 1 && tournament.float_policy == FloatPolicy::Upfloat {
            if let Some(next) = groups.front_mut() {
                if let Some(pos) = find_upfloater(tournament, &group, next, round) {
                    let idx = next.remove(pos);
                    let floater = &mut tournament.competitors_mut()[idx];
                    floater.increment_upfloat_count();
                    floater.upfloated_prev = true;
                    log::debug!("{} floats up into a score group of {}", floater.name, group.len());
                    group.push(idx);
                }
            }
        }
        matches.extend(pair_group(tournament, group));
    }
    matches
}

/// First competitor of `next` (in group order) allowed to float up and able to
/// play someone in `group`.
fn find_upfloater(
    tournament: &Tournament,
    group: &[usize],
    next: &[usize],
    round: u32,
) -> Option<usize> {
    let competitors = tournament.competitors();
    next.iter().position(|&idx| {
        let candidate = &competitors[idx];
        candidate.can_upfloat(round)
            && !candidate.upfloated_prev
            && group.iter().any(|&g| competitors[g].can_play(candidate))
    })
}

/// Pair one score group: a lone competitor gets a bye, an odd group gives its
/// lowest-rated member a bye and pairs the rest.
fn pair_group(tournament: &mut Tournament, mut group: Vec<usize>) -> Vec<Match> {
    match group.len() {
        0 => Vec::new(),
        1 => vec![Match::bye(tournament.competitors()[group[0]].id)],
        n if n % 2 == 0 => pair_even_group(tournament, &group),
        _ => {
            sort_by_rating(tournament, &mut group);
            let bye = group.pop().map(|idx| tournament.competitors()[idx].id);
            let mut matches = pair_even_group(tournament, &group);
            matches.extend(bye.map(Match::bye));
            matches
        }
    }
}

/// Pair an even group top half against bottom half, swapping bottom-half
/// entries forward to avoid rematches.
fn pair_even_group(tournament: &mut Tournament, group: &[usize]) -> Vec<Match> {
    let mid = group.len() / 2;
    let top = &group[..mid];
    let mut bottom = group[mid..].to_vec();
    let mut matches = Vec::with_capacity(mid);

    for (i, &player) in top.iter().enumerate() {
        let competitors = tournament.competitors();
        if !competitors[player].can_play(&competitors[bottom[i]]) {
            let alternative = (i + 1..bottom.len())
                .find(|&j| competitors[player].can_play(&competitors[bottom[j]]));
            match alternative {
                Some(j) => bottom.swap(i, j),
                None => tournament.pairing_error = true,
            }
        }
        matches.push(pair_two(tournament, player, bottom[i]));
    }
    matches
}

/// Assign colors and record the game. A pair that cannot play is emitted as a
/// fallback match without touching either history.
fn pair_two(tournament: &mut Tournament, first: usize, second: usize) -> Match {
    let (p, q) = tournament.pair_mut(first, second);
    if !p.can_play(q) {
        log::warn!(
            "No valid opponent for {}; pairing with {} anyway",
            p.name,
            q.name
        );
        let fallback = Match::fallback(p.id, q.id);
        tournament.pairing_error = true;
        return fallback;
    }

    let allocation = allocate_colors(p, q);
    let (white, black) = if allocation.first_gets_white { (p, q) } else { (q, p) };
    log::debug!(
        "{} (white) vs {} (black) via {:?}",
        white.name,
        black.name,
        allocation.step
    );
    record_game(white, black);
    Match::game(white.id, black.id)
}

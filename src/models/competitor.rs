//! Competitor record: identity, score, and the pairing state derived from history.

use crate::models::color::{Color, ColorPreference};
use indexmap::IndexSet;
use std::cell::Cell;
use std::collections::HashSet;

/// Stable competitor identifier (1..N in registration order, never reused).
pub type CompetitorId = u32;

/// A competitor in the tournament.
#[derive(Clone, Debug)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    pub rating: i32,
    /// Accumulated points (0, 0.5 or 1 per game; 1 for a bye).
    pub score: f64,
    /// Opponents faced, in the order faced.
    opponents: IndexSet<CompetitorId>,
    /// Opponents this competitor must never face.
    restrictions: HashSet<CompetitorId>,
    /// One entry per non-bye game, chronological.
    colors: Vec<Color>,
    /// Ratings of opponents faced, parallel to `opponents`.
    opponent_ratings: Vec<i32>,
    /// Cached average opponent rating. Cleared whenever a rating sample is added.
    aro: Cell<Option<f64>>,
    pub upfloat_count: u32,
    pub upfloated_prev: bool,
    pub received_bye: bool,
}

impl Competitor {
    /// Create a competitor with an empty history and zero score.
    pub fn new(id: CompetitorId, name: impl Into<String>, rating: i32) -> Self {
        Self {
            id,
            name: name.into(),
            rating,
            score: 0.0,
            opponents: IndexSet::new(),
            restrictions: HashSet::new(),
            colors: Vec::new(),
            opponent_ratings: Vec::new(),
            aro: Cell::new(None),
            upfloat_count: 0,
            upfloated_prev: false,
            received_bye: false,
        }
    }

    /// Whether a game against `other` is allowed: not self, not a rematch, not restricted.
    pub fn can_play(&self, other: &Competitor) -> bool {
        other.id != self.id
            && !self.opponents.contains(&other.id)
            && !self.restrictions.contains(&other.id)
    }

    /// Whether `id` has already been faced.
    pub fn has_played(&self, id: CompetitorId) -> bool {
        self.opponents.contains(&id)
    }

    /// Opponent ids in the order they were faced.
    pub fn opponents(&self) -> impl Iterator<Item = CompetitorId> + '_ {
        self.opponents.iter().copied()
    }

    /// Colors played, one per non-bye game, oldest first.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    fn color_counts(&self) -> (u32, u32) {
        self.colors.iter().fold((0, 0), |(w, b), c| match c {
            Color::White => (w + 1, b),
            Color::Black => (w, b + 1),
            Color::NoColor => (w, b),
        })
    }

    /// The color played less often so far; `NoColor` when balanced or no games played.
    pub fn due_color(&self) -> Color {
        let (white, black) = self.color_counts();
        if white > black {
            Color::Black
        } else if black > white {
            Color::White
        } else {
            Color::NoColor
        }
    }

    /// How strongly the due color is wanted, from the white/black imbalance.
    pub fn preference_strength(&self) -> ColorPreference {
        let (white, black) = self.color_counts();
        ColorPreference::from_imbalance(white.abs_diff(black))
    }

    /// Total priority order for color allocation: stronger preference, then higher
    /// rating, then lower id.
    pub fn should_take_priority_over(&self, other: &Competitor) -> bool {
        let (mine, theirs) = (self.preference_strength(), other.preference_strength());
        if mine != theirs {
            return mine > theirs;
        }
        if self.rating != other.rating {
            return self.rating > other.rating;
        }
        self.id < other.id
    }

    /// Same number of whites and blacks played as `other`.
    pub fn is_color_history_equal(&self, other: &Competitor) -> bool {
        self.colors.len() == other.colors.len() && self.color_counts() == other.color_counts()
    }

    /// Color of the first game played; `NoColor` before any game.
    pub fn first_color_played(&self) -> Color {
        self.colors.first().copied().unwrap_or_default()
    }

    /// Average rating of opponents faced (0.0 with no opponents). Computed lazily.
    pub fn average_opponent_rating(&self) -> f64 {
        if let Some(aro) = self.aro.get() {
            return aro;
        }
        let aro = if self.opponent_ratings.is_empty() {
            0.0
        } else {
            let sum: i64 = self.opponent_ratings.iter().map(|&r| i64::from(r)).sum();
            sum as f64 / self.opponent_ratings.len() as f64
        };
        self.aro.set(Some(aro));
        aro
    }

    /// Record an opponent. Recording the same opponent twice is a no-op.
    pub fn record_opponent(&mut self, id: CompetitorId) {
        self.opponents.insert(id);
    }

    /// Append a played color.
    pub fn record_color(&mut self, color: Color) {
        self.colors.push(color);
    }

    /// Add an opponent rating sample and drop the cached average.
    pub fn record_opponent_rating(&mut self, rating: i32) {
        self.opponent_ratings.push(rating);
        self.aro.set(None);
    }

    /// Add points from a game or bye.
    pub fn add_score(&mut self, points: f64) {
        self.score += points;
    }

    /// Note that this competitor has had a bye.
    pub fn mark_bye_received(&mut self) {
        self.received_bye = true;
    }

    /// Count one more float into a higher score group.
    pub fn increment_upfloat_count(&mut self) {
        self.upfloat_count += 1;
    }

    /// Forbid pairing with `id` from now on.
    pub fn add_pairing_restriction(&mut self, id: CompetitorId) {
        self.restrictions.insert(id);
    }

    /// Soft cap on upfloating: fewer upfloats so far than half the round number.
    pub fn can_upfloat(&self, current_round: u32) -> bool {
        self.upfloat_count < current_round / 2
    }
}

/// Record a game between `white` and `black` into both histories.
///
/// Keeps opponent membership symmetric: each side gains the other's id, rating
/// sample and one color entry.
pub fn record_game(white: &mut Competitor, black: &mut Competitor) {
    white.record_opponent(black.id);
    black.record_opponent(white.id);
    white.record_opponent_rating(black.rating);
    black.record_opponent_rating(white.rating);
    white.record_color(Color::White);
    black.record_color(Color::Black);
}

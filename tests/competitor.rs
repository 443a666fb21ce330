//! Integration tests for the competitor record: eligibility, color preference, cached statistics.

use swiss_pairing_web::{record_game, Color, ColorPreference, Competitor};

#[test]
fn can_play_rejects_self_rematch_and_restriction() {
    let mut a = Competitor::new(1, "A", 2000);
    let b = Competitor::new(2, "B", 1800);
    let c = Competitor::new(3, "C", 1600);

    assert!(a.can_play(&b));
    assert!(!a.can_play(&a.clone()));

    a.record_opponent(b.id);
    assert!(!a.can_play(&b));

    a.add_pairing_restriction(c.id);
    assert!(!a.can_play(&c));
}

#[test]
fn record_opponent_is_idempotent_and_ordered() {
    let mut a = Competitor::new(1, "A", 2000);
    a.record_opponent(3);
    a.record_opponent(2);
    a.record_opponent(3);
    assert_eq!(a.opponents().collect::<Vec<_>>(), vec![3, 2]);
    assert!(a.has_played(2));
    assert!(!a.has_played(4));
}

#[test]
fn due_color_and_strength_follow_imbalance() {
    let mut p = Competitor::new(1, "P", 1500);
    assert_eq!(p.due_color(), Color::NoColor);
    assert_eq!(p.preference_strength(), ColorPreference::None);

    p.record_color(Color::White);
    assert_eq!(p.due_color(), Color::Black);
    assert_eq!(p.preference_strength(), ColorPreference::Mild);

    p.record_color(Color::Black);
    assert_eq!(p.due_color(), Color::NoColor);
    assert_eq!(p.preference_strength(), ColorPreference::None);

    p.record_color(Color::Black);
    p.record_color(Color::Black);
    assert_eq!(p.due_color(), Color::White);
    assert_eq!(p.preference_strength(), ColorPreference::Alternation);

    p.record_color(Color::Black);
    assert_eq!(p.preference_strength(), ColorPreference::Absolute);
    p.record_color(Color::Black);
    assert_eq!(p.preference_strength(), ColorPreference::Absolute);
    assert_eq!(p.colors().len(), 6);
    assert_eq!(p.first_color_played(), Color::White);
}

#[test]
fn priority_uses_strength_then_rating_then_id() {
    let mut strong = Competitor::new(5, "Strong", 1200);
    strong.record_color(Color::White);
    strong.record_color(Color::White);
    let mut mild = Competitor::new(1, "Mild", 2400);
    mild.record_color(Color::Black);
    assert!(strong.should_take_priority_over(&mild));
    assert!(!mild.should_take_priority_over(&strong));

    let high = Competitor::new(3, "High", 2000);
    let low = Competitor::new(2, "Low", 1900);
    assert!(high.should_take_priority_over(&low));
    assert!(!low.should_take_priority_over(&high));

    let first = Competitor::new(1, "First", 1500);
    let second = Competitor::new(2, "Second", 1500);
    assert!(first.should_take_priority_over(&second));
    assert!(!second.should_take_priority_over(&first));
}

#[test]
fn average_opponent_rating_is_never_stale() {
    let mut p = Competitor::new(1, "P", 1500);
    assert_eq!(p.average_opponent_rating(), 0.0);

    p.record_opponent_rating(2000);
    assert_eq!(p.average_opponent_rating(), 2000.0);

    p.record_opponent_rating(1000);
    assert_eq!(p.average_opponent_rating(), 1500.0);
    // Cached read returns the same value.
    assert_eq!(p.average_opponent_rating(), 1500.0);

    p.record_opponent_rating(1600);
    assert!((p.average_opponent_rating() - 1533.333).abs() < 0.001);
}

#[test]
fn record_game_updates_both_sides() {
    let mut white = Competitor::new(1, "W", 2000);
    let mut black = Competitor::new(2, "B", 1800);
    record_game(&mut white, &mut black);

    assert!(white.has_played(black.id));
    assert!(black.has_played(white.id));
    assert_eq!(white.colors(), &[Color::White]);
    assert_eq!(black.colors(), &[Color::Black]);
    assert_eq!(white.average_opponent_rating(), 1800.0);
    assert_eq!(black.average_opponent_rating(), 2000.0);
    assert!(!white.is_color_history_equal(&black));
}

#[test]
fn color_history_equality_counts_colors() {
    let mut a = Competitor::new(1, "A", 1500);
    let mut b = Competitor::new(2, "B", 1500);
    assert!(a.is_color_history_equal(&b));
    a.record_color(Color::White);
    a.record_color(Color::Black);
    b.record_color(Color::Black);
    b.record_color(Color::White);
    assert!(a.is_color_history_equal(&b));
    b.record_color(Color::White);
    assert!(!a.is_color_history_equal(&b));
}

#[test]
fn upfloat_cap_is_half_the_round() {
    let mut p = Competitor::new(1, "P", 1500);
    assert!(!p.can_upfloat(1));
    assert!(p.can_upfloat(2));
    p.increment_upfloat_count();
    assert!(!p.can_upfloat(3));
    assert!(p.can_upfloat(4));
}

#[test]
fn score_and_bye_bookkeeping() {
    let mut p = Competitor::new(1, "P", 1500);
    p.add_score(0.5);
    p.add_score(1.0);
    p.mark_bye_received();
    assert_eq!(p.score, 1.5);
    assert!(p.received_bye);
    assert!(p.colors().is_empty());
}

//! History replay: rebuild a tournament from a roster and every completed round.

use crate::logic::rounds::generate_pairings;
use crate::models::{
    record_game, CompetitorId, GameRecord, PairingEntry, PairingRequest, PairingResponse, Pairings,
    Tournament, TournamentError,
};
use std::collections::HashMap;

/// Parse the encoded request. Empty input is `MissingData`, bad JSON is `MalformedData`.
pub fn parse_request(data: &str) -> Result<PairingRequest, TournamentError> {
    if data.trim().is_empty() {
        return Err(TournamentError::MissingData);
    }
    serde_json::from_str(data).map_err(|e| TournamentError::MalformedData(e.to_string()))
}

/// Build a fresh tournament from `request` and replay its history.
///
/// Returns the tournament and the round to pair next (completed rounds + 1).
/// Games are replayed in round order, then board order. A game records colors,
/// opponents and opponent ratings for both sides before its result is scored;
/// a bye scores 1 point and records no color.
pub fn replay_request(request: &PairingRequest) -> Result<(Tournament, u32), TournamentError> {
    let mut tournament = Tournament::new(request.rounds).with_float_policy(request.float_policy);
    let mut by_name: HashMap<&str, CompetitorId> = HashMap::new();
    for entry in &request.players {
        if by_name.contains_key(entry.name.as_str()) {
            return Err(TournamentError::DuplicateCompetitorName(entry.name.clone()));
        }
        let id = tournament.add_competitor(entry.name.as_str(), entry.elo);
        by_name.insert(entry.name.as_str(), id);
    }

    for round in &request.games {
        replay_round(&mut tournament, &by_name, round)?;
    }

    let next_round = request.games.len() as u32 + 1;
    Ok((tournament, next_round))
}

fn lookup(by_name: &HashMap<&str, CompetitorId>, name: &str) -> Result<usize, TournamentError> {
    by_name
        .get(name)
        .map(|&id| id as usize - 1)
        .ok_or_else(|| TournamentError::UnknownCompetitor(name.to_string()))
}

/// Replay one round. A competitor who started the round with a lower score than
/// their opponent is counted as upfloated; only the latest round's upfloats
/// stay flagged as `upfloated_prev`.
fn replay_round(
    tournament: &mut Tournament,
    by_name: &HashMap<&str, CompetitorId>,
    games: &[GameRecord],
) -> Result<(), TournamentError> {
    let start_scores: Vec<f64> = tournament.competitors().iter().map(|c| c.score).collect();
    for c in tournament.competitors_mut() {
        c.upfloated_prev = false;
    }

    for game in games {
        let white = lookup(by_name, &game.white)?;

        if game.bye {
            let c = &mut tournament.competitors_mut()[white];
            c.mark_bye_received();
            c.add_score(1.0);
            continue;
        }

        let black_name = game
            .black
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(TournamentError::MissingOpponent)?;
        let black = lookup(by_name, black_name)?;
        if white == black {
            return Err(TournamentError::SelfPairing(game.white.clone()));
        }
        let (white_points, black_points) = match game.result {
            None => (0.0, 0.0),
            Some(r) if r == 1.0 => (1.0, 0.0),
            Some(r) if r == 0.5 => (0.5, 0.5),
            Some(r) if r == 0.0 => (0.0, 1.0),
            Some(r) => return Err(TournamentError::InvalidResult(r)),
        };

        let (w, b) = tournament.pair_mut(white, black);
        record_game(w, b);
        if start_scores[white] < start_scores[black] {
            w.increment_upfloat_count();
            w.upfloated_prev = true;
        } else if start_scores[black] < start_scores[white] {
            b.increment_upfloat_count();
            b.upfloated_prev = true;
        }
        w.add_score(white_points);
        b.add_score(black_points);
    }
    Ok(())
}

/// Translate engine matches into the response shape, by competitor name.
pub fn to_response(tournament: &Tournament, pairings: &Pairings) -> PairingResponse {
    pairings
        .matches
        .iter()
        .filter_map(|m| {
            let white = tournament.competitor(m.white)?;
            let black = m
                .black
                .and_then(|id| tournament.competitor(id))
                .map(|c| c.name.clone());
            Some(PairingEntry {
                white: white.name.clone(),
                black,
                bye: m.is_bye(),
                unresolved: m.unresolved,
            })
        })
        .collect()
}

/// Full request path: parse, replay, pair the next round, render the response.
pub fn pair_request(data: &str) -> Result<PairingResponse, TournamentError> {
    let request = parse_request(data)?;
    let (mut tournament, round) = replay_request(&request)?;
    let pairings = generate_pairings(&mut tournament, round)?;
    Ok(to_response(&tournament, &pairings))
}

//! Match resolution: record a result, advance the winner, and cascade
//! automatic CPU-vs-CPU decisions until the bracket needs the player
//! again or ends.

use crate::models::{Entrant, Slot, Status, Tournament, TournamentError};
use rand::Rng;

/// Apply one match result and run cascading CPU resolution.
///
/// All precondition checks happen before any mutation, so on `Err` the
/// tournament is structurally unchanged.
pub fn apply_match_result<R: Rng>(
    tournament: &mut Tournament,
    round_index: usize,
    match_index: usize,
    winner: &Entrant,
    rng: &mut R,
) -> Result<(), TournamentError> {
    apply_match_result_stepwise(tournament, round_index, match_index, winner, rng).map(|_| ())
}

/// Like [`apply_match_result`], but returns a snapshot of the
/// tournament after the applied result and after every simulated CPU
/// match, so a host can animate the cascade one step at a time.
pub fn apply_match_result_stepwise<R: Rng>(
    tournament: &mut Tournament,
    round_index: usize,
    match_index: usize,
    winner: &Entrant,
    rng: &mut R,
) -> Result<Vec<Tournament>, TournamentError> {
    if tournament.status.is_terminal() {
        return Err(TournamentError::TerminalTournament);
    }
    let m = tournament
        .get_match(round_index, match_index)
        .ok_or(TournamentError::OutOfRange {
            round: round_index,
            match_index,
        })?;
    if m.winner.is_some() {
        return Err(TournamentError::MatchAlreadyDecided);
    }
    // The winner must be one of two seated occupants; a match with a
    // pending slot is not ready to be decided.
    if m.occupants().is_none() || !m.has_occupant(winner) {
        return Err(TournamentError::InvalidWinner);
    }

    record_and_advance(tournament, round_index, match_index, winner.clone());
    let mut snapshots = vec![tournament.clone()];

    // Work-list cascade: each pass decides exactly one CPU match, so
    // the loop ends after at most one decision per remaining match.
    while tournament.status == Status::InProgress {
        let Some((r, i)) = next_cpu_match(tournament) else {
            break;
        };
        let w = simulate_winner(tournament, r, i, rng);
        record_and_advance(tournament, r, i, w);
        snapshots.push(tournament.clone());
    }

    Ok(snapshots)
}

/// Probability that the first team wins a simulated match.
///
/// Linear in the level difference, scaled up by the win-rate modifier,
/// and clamped away from 0 and 1 so no simulated match is a foregone
/// conclusion. The constants are a tunable policy; tests pin only the
/// monotonic shape.
pub fn win_probability(level_a: i32, level_b: i32, modifier: i32) -> f64 {
    const BASE_WEIGHT: f64 = 0.03;
    const MODIFIER_WEIGHT: f64 = 0.005;
    let weight = (BASE_WEIGHT + MODIFIER_WEIGHT * f64::from(modifier)).max(0.0);
    let p = 0.5 + f64::from(level_a - level_b) * weight;
    p.clamp(0.05, 0.95)
}

/// Record `winner` on the addressed match, seat it in the next round,
/// and re-evaluate the tournament status.
fn record_and_advance(
    tournament: &mut Tournament,
    round: usize,
    match_index: usize,
    winner: Entrant,
) {
    tournament.rounds[round][match_index].winner = Some(winner.clone());
    let next = round + 1;
    if next < tournament.rounds.len() {
        tournament.rounds[next][match_index / 2].slots[match_index % 2] =
            Slot::Team(winner.clone());
    }
    update_status(tournament, round, match_index, &winner);
}

/// Outcome evaluation after one decided match: the player losing ends
/// the tournament; a decided final crowns a champion.
fn update_status(tournament: &mut Tournament, round: usize, match_index: usize, winner: &Entrant) {
    let m = &tournament.rounds[round][match_index];
    let player_played = m.has_occupant(&Entrant::Player);
    if player_played && !winner.is_player() {
        tournament.status = Status::PlayerEliminated;
    } else if round + 1 == tournament.rounds.len() {
        tournament.status = Status::Champion(winner.clone());
    }
}

/// First undecided match whose occupants are both seated CPU teams.
fn next_cpu_match(tournament: &Tournament) -> Option<(usize, usize)> {
    for (r, round) in tournament.rounds.iter().enumerate() {
        for (i, m) in round.iter().enumerate() {
            if m.winner.is_some() {
                continue;
            }
            if let Some((a, b)) = m.occupants() {
                if !a.is_player() && !b.is_player() {
                    return Some((r, i));
                }
            }
        }
    }
    None
}

/// Draw a winner for a CPU match, biased by the occupants' catalog
/// levels and the tournament's win-rate modifier.
fn simulate_winner<R: Rng>(
    tournament: &Tournament,
    round: usize,
    match_index: usize,
    rng: &mut R,
) -> Entrant {
    let m = &tournament.rounds[round][match_index];
    let (a, b) = match m.occupants() {
        Some((a, b)) => (a.clone(), b.clone()),
        // Unreachable: next_cpu_match only yields fully seated matches.
        None => return Entrant::Player,
    };
    let p = win_probability(
        tournament.entrant_level(&a),
        tournament.entrant_level(&b),
        tournament.level_win_rate_modifier,
    );
    let winner = if rng.gen_bool(p) { a.clone() } else { b.clone() };
    log::debug!(
        "CPU match r{} m{}: {:?} vs {:?} => {:?} (p={:.2})",
        round,
        match_index,
        a,
        b,
        winner,
        p
    );
    winner
}

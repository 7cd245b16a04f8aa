//! Bracket construction: sample opponents, seed round 1, assign byes.

use crate::catalog::Catalog;
use crate::logic::eligibility::eligible_opponents;
use crate::models::{
    BracketMatch, Entrant, Opponent, Slot, Status, Tournament, TournamentError,
    TournamentSettings,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use uuid::Uuid;

/// Build a new tournament from `settings`.
///
/// 1. Filter the catalog to eligible opponents.
/// 2. Sample `team_count - 1` of them uniformly without replacement.
/// 3. Shuffle player + opponents into a seeding order.
/// 4. Pair the first `2n - p` entrants into round-1 matches (`p` = next
///    power of two); the rest receive byes straight into round 2. The
///    player never takes a bye: if shuffled into the bye tail, the
///    player swaps with the first paired entrant.
/// 5. Pre-allocate later rounds as pending matches, halving to one final.
pub fn generate_tournament<R: Rng>(
    catalog: &Catalog,
    settings: &TournamentSettings,
    rng: &mut R,
) -> Result<Tournament, TournamentError> {
    let eligible = eligible_opponents(catalog, settings)?;
    let required = settings.team_count - 1;
    if eligible.count() < required {
        return Err(TournamentError::InsufficientOpponents {
            required,
            available: eligible.count(),
        });
    }

    let pool: Vec<&Opponent> = eligible
        .keys
        .iter()
        .filter_map(|k| catalog.get(k))
        .collect();
    let sampled: Vec<&Opponent> = pool.choose_multiple(rng, required).copied().collect();

    let participants: HashMap<_, _> = sampled
        .iter()
        .map(|o| (o.key.clone(), (*o).clone()))
        .collect();

    let mut entrants: Vec<Entrant> = Vec::with_capacity(settings.team_count);
    entrants.push(Entrant::Player);
    entrants.extend(sampled.iter().map(|o| Entrant::Opponent(o.key.clone())));
    entrants.shuffle(rng);

    let n = entrants.len();
    let p = n.next_power_of_two();
    let byes = p - n;
    let playing = n - byes; // 2n - p, always >= 2

    if byes > 0 {
        if let Some(pos) = entrants[playing..].iter().position(Entrant::is_player) {
            entrants.swap(playing + pos, 0);
        }
    }

    let mut rounds = Vec::new();
    let mut first_round = Vec::with_capacity(p / 2);
    for pair in entrants[..playing].chunks_exact(2) {
        first_round.push(BracketMatch::pairing(pair[0].clone(), pair[1].clone()));
    }
    let bye_teams: Vec<Entrant> = entrants[playing..].to_vec();
    for team in &bye_teams {
        first_round.push(BracketMatch::bye(team.clone()));
    }
    rounds.push(first_round);

    let mut size = p / 2;
    while size > 1 {
        size /= 2;
        rounds.push((0..size).map(|_| BracketMatch::pending()).collect());
    }

    // Seat bye teams directly in their round-2 slots.
    for (offset, team) in bye_teams.iter().enumerate() {
        let match_index = playing / 2 + offset;
        rounds[1][match_index / 2].slots[match_index % 2] = Slot::Team(team.clone());
    }

    log::debug!(
        "Generated bracket: {} entrants, {} slots, {} bye(s)",
        n,
        p,
        byes
    );

    Ok(Tournament {
        id: Uuid::new_v4(),
        rounds,
        participants,
        bye_teams,
        level_win_rate_modifier: settings.level_win_rate_modifier,
        status: Status::InProgress,
    })
}

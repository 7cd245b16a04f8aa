//! Integration tests for bracket construction: sampling, seeding, byes.

use cup_tournament_web::{
    generate_tournament, Catalog, Entrant, Opponent, Slot, Status, TournamentError,
    TournamentSettings,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn catalog_of(count: usize) -> Catalog {
    let opponents = (0..count)
        .map(|i| Opponent {
            key: format!("opp-{i}"),
            name: format!("Team {i}"),
            series: "Season 1".to_string(),
            source: "league".to_string(),
            level: 20 + (i as u8 % 10) * 3,
            difficulty: "normal".to_string(),
        })
        .collect();
    Catalog::new(opponents)
}

fn settings_for(catalog: &Catalog, team_count: usize) -> TournamentSettings {
    TournamentSettings {
        player_team_level: 30,
        team_count,
        level_tolerance_lower: 50,
        level_tolerance_upper: 50,
        level_win_rate_modifier: 0,
        allowed_sources: ["league".to_string()].into_iter().collect(),
        unlocked_opponents: catalog.opponents().iter().map(|o| o.key.clone()).collect(),
    }
}

#[test]
fn four_team_bracket_has_two_rounds() {
    let catalog = catalog_of(3);
    let settings = settings_for(&catalog, 4);
    let mut rng = StdRng::seed_from_u64(1);
    let t = generate_tournament(&catalog, &settings, &mut rng).unwrap();

    assert_eq!(t.rounds.len(), 2);
    assert_eq!(t.rounds[0].len(), 2);
    assert_eq!(t.rounds[1].len(), 1);
    assert_eq!(t.participants.len(), 3);
    assert!(t.bye_teams.is_empty());
    assert_eq!(t.status, Status::InProgress);

    // All round-1 slots are seated teams, none decided yet.
    for m in &t.rounds[0] {
        assert!(m.occupants().is_some());
        assert!(m.winner.is_none());
    }
    // The final is fully pending.
    assert_eq!(t.rounds[1][0].slots, [Slot::Pending, Slot::Pending]);
}

#[test]
fn insufficient_opponents_is_reported_with_counts() {
    let catalog = catalog_of(2);
    let settings = settings_for(&catalog, 4);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        generate_tournament(&catalog, &settings, &mut rng),
        Err(TournamentError::InsufficientOpponents {
            required: 3,
            available: 2
        })
    );
}

#[test]
fn five_team_bracket_rounds_up_with_three_byes() {
    let catalog = catalog_of(4);
    let settings = settings_for(&catalog, 5);
    let mut rng = StdRng::seed_from_u64(7);
    let t = generate_tournament(&catalog, &settings, &mut rng).unwrap();

    // 5 entrants round up to 8 slots: 4 + 2 + 1 matches.
    assert_eq!(t.rounds.len(), 3);
    assert_eq!(t.rounds[0].len(), 4);
    assert_eq!(t.rounds[1].len(), 2);
    assert_eq!(t.rounds[2].len(), 1);

    assert_eq!(t.bye_teams.len(), 3);
    assert!(!t.bye_teams.contains(&Entrant::Player));

    // Bye matches carry a pre-recorded winner and a Bye slot.
    let bye_matches: Vec<_> = t.rounds[0]
        .iter()
        .filter(|m| m.slots.contains(&Slot::Bye))
        .collect();
    assert_eq!(bye_matches.len(), 3);
    for m in &bye_matches {
        assert!(m.winner.is_some());
    }

    // Every bye team is already seated in round 2.
    for team in &t.bye_teams {
        let seated = t.rounds[1]
            .iter()
            .any(|m| m.slots.contains(&Slot::Team(team.clone())));
        assert!(seated, "bye team {team:?} not seated in round 2");
    }
}

#[test]
fn player_never_receives_a_bye() {
    let catalog = catalog_of(6);
    for seed in 0..50 {
        for team_count in [3, 5, 6, 7] {
            let settings = settings_for(&catalog, team_count);
            let mut rng = StdRng::seed_from_u64(seed);
            let t = generate_tournament(&catalog, &settings, &mut rng).unwrap();
            assert!(
                !t.bye_teams.contains(&Entrant::Player),
                "player got a bye with seed {seed}, team_count {team_count}"
            );
            // The player is seated exactly once in round 1.
            let seats = t.rounds[0]
                .iter()
                .filter(|m| m.has_occupant(&Entrant::Player))
                .count();
            assert_eq!(seats, 1);
        }
    }
}

#[test]
fn sampled_opponents_are_distinct_and_eligible() {
    let catalog = catalog_of(10);
    let settings = settings_for(&catalog, 8);
    let mut rng = StdRng::seed_from_u64(3);
    let t = generate_tournament(&catalog, &settings, &mut rng).unwrap();

    assert_eq!(t.participants.len(), 7);
    for key in t.participants.keys() {
        assert!(catalog.get(key).is_some());
    }
}

#[test]
fn same_seed_builds_same_bracket() {
    let catalog = catalog_of(8);
    let settings = settings_for(&catalog, 6);
    let a = generate_tournament(&catalog, &settings, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = generate_tournament(&catalog, &settings, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a.rounds, b.rounds);
    assert_eq!(a.bye_teams, b.bye_teams);
    assert_eq!(a.participants, b.participants);
}

#[test]
fn rounds_halve_to_a_single_final() {
    let catalog = catalog_of(15);
    for team_count in 2..=16 {
        let settings = settings_for(&catalog, team_count);
        let mut rng = StdRng::seed_from_u64(9);
        let t = generate_tournament(&catalog, &settings, &mut rng).unwrap();

        let p = team_count.next_power_of_two();
        let mut expected = p / 2;
        for round in &t.rounds {
            assert_eq!(round.len(), expected);
            expected = (expected / 2).max(1);
        }
        assert_eq!(t.rounds.last().map(Vec::len), Some(1));
    }
}

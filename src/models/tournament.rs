//! Tournament bracket, match, status, and engine errors.

use crate::models::opponent::{Opponent, OpponentKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Malformed or contradictory settings (e.g. team_count < 2).
    InvalidConfiguration(&'static str),
    /// Not enough eligible opponents to fill the bracket.
    InsufficientOpponents { required: usize, available: usize },
    /// The tournament already ended; no further results may be applied.
    TerminalTournament,
    /// round_index/match_index do not address an existing match.
    OutOfRange { round: usize, match_index: usize },
    /// The addressed match already has a recorded winner.
    MatchAlreadyDecided,
    /// The proposed winner is not one of the match's two occupants.
    InvalidWinner,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidConfiguration(reason) => {
                write!(f, "Invalid configuration: {}", reason)
            }
            TournamentError::InsufficientOpponents { required, available } => {
                write!(
                    f,
                    "Not enough eligible opponents: need {}, have {}",
                    required, available
                )
            }
            TournamentError::TerminalTournament => write!(f, "Tournament already ended"),
            TournamentError::OutOfRange { round, match_index } => {
                write!(f, "No match at round {}, index {}", round, match_index)
            }
            TournamentError::MatchAlreadyDecided => write!(f, "Match already has a winner"),
            TournamentError::InvalidWinner => {
                write!(f, "Winner is not one of the match's occupants")
            }
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// A team taking part in a tournament: the player or a catalog opponent.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entrant {
    Player,
    Opponent(OpponentKey),
}

impl Entrant {
    pub fn is_player(&self) -> bool {
        matches!(self, Entrant::Player)
    }
}

/// One side of a match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Awaiting the winner of an earlier match.
    Pending,
    /// No opponent; the other occupant advances automatically.
    Bye,
    Team(Entrant),
}

impl Slot {
    /// The occupying team, if one is seated.
    pub fn team(&self) -> Option<&Entrant> {
        match self {
            Slot::Team(e) => Some(e),
            _ => None,
        }
    }
}

/// A single bracket match: two slots and an optional recorded winner.
/// A winner, once recorded, is immutable and is one of the two occupants.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketMatch {
    pub slots: [Slot; 2],
    pub winner: Option<Entrant>,
}

impl BracketMatch {
    /// A later-round match with both sides still undetermined.
    pub fn pending() -> Self {
        Self {
            slots: [Slot::Pending, Slot::Pending],
            winner: None,
        }
    }

    /// A round-1 pairing of two seeded teams.
    pub fn pairing(a: Entrant, b: Entrant) -> Self {
        Self {
            slots: [Slot::Team(a), Slot::Team(b)],
            winner: None,
        }
    }

    /// A round-1 bye: the team advances without playing, so the winner
    /// is recorded at creation.
    pub fn bye(team: Entrant) -> Self {
        Self {
            slots: [Slot::Team(team.clone()), Slot::Bye],
            winner: Some(team),
        }
    }

    /// Whether `entrant` occupies one of the two slots.
    pub fn has_occupant(&self, entrant: &Entrant) -> bool {
        self.slots.iter().any(|s| s.team() == Some(entrant))
    }

    /// Both occupants, when both sides are seated teams.
    pub fn occupants(&self) -> Option<(&Entrant, &Entrant)> {
        match (self.slots[0].team(), self.slots[1].team()) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }
}

/// Lifecycle status of a tournament. The two terminal statuses are
/// absorbing: once set, no further result may be applied.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    InProgress,
    PlayerEliminated,
    Champion(Entrant),
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// Full bracket state for one tournament.
///
/// Created by `logic::bracket::generate_tournament` and mutated only
/// through `logic::resolve::apply_match_result`; a failed operation
/// leaves the value structurally unchanged.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Rounds from first to final; match counts halve toward a single
    /// final match.
    pub rounds: Vec<Vec<BracketMatch>>,
    /// Catalog metadata for every opponent drawn into this bracket
    /// (the player is a fixed singleton and is excluded).
    pub participants: HashMap<OpponentKey, Opponent>,
    /// Teams that advanced into round 2 without playing.
    pub bye_teams: Vec<Entrant>,
    /// Snapshot of the settings' win-rate modifier, used when
    /// simulating CPU matches.
    pub level_win_rate_modifier: i32,
    pub status: Status,
}

impl Tournament {
    /// The addressed match, if it exists.
    pub fn get_match(&self, round: usize, match_index: usize) -> Option<&BracketMatch> {
        self.rounds.get(round).and_then(|r| r.get(match_index))
    }

    /// The single match of the last round.
    pub fn final_match(&self) -> Option<&BracketMatch> {
        self.rounds.last().and_then(|r| r.first())
    }

    /// Catalog level of an entrant (0 for the player, who never appears
    /// in a simulated match).
    pub fn entrant_level(&self, entrant: &Entrant) -> i32 {
        match entrant {
            Entrant::Player => 0,
            Entrant::Opponent(key) => self.participants.get(key).map_or(0, |o| i32::from(o.level)),
        }
    }
}

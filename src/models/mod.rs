//! Data structures for the cup tournament: opponents, settings, bracket state.

mod opponent;
mod settings;
mod tournament;

pub use opponent::{Opponent, OpponentKey};
pub use settings::TournamentSettings;
pub use tournament::{
    BracketMatch, Entrant, Slot, Status, Tournament, TournamentError, TournamentId,
};

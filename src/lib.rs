//! Cup tournament web app: library with the opponent catalog, data
//! model, and single-elimination tournament engine.

pub mod catalog;
pub mod logic;
pub mod models;

pub use catalog::Catalog;
pub use logic::{
    apply_match_result, apply_match_result_stepwise, eligible_opponents, generate_tournament,
    win_probability, EligibleOpponents,
};
pub use models::{
    BracketMatch, Entrant, Opponent, OpponentKey, Slot, Status, Tournament, TournamentError,
    TournamentId, TournamentSettings,
};

//! Tournament engine logic: eligibility, bracket construction, match
//! resolution.

mod bracket;
mod eligibility;
mod resolve;

pub use bracket::generate_tournament;
pub use eligibility::{eligible_opponents, EligibleOpponents};
pub use resolve::{apply_match_result, apply_match_result_stepwise, win_probability};

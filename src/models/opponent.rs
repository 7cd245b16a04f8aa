//! Opponent catalog record.

use serde::{Deserialize, Serialize};

/// Unique identifier for a catalog opponent (used in matches and lookups).
pub type OpponentKey = String;

/// One playable opponent team at one difficulty.
///
/// The catalog ships one record per (team, difficulty) pair, so `key`
/// is unique while `name` can repeat across difficulties.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Opponent {
    pub key: OpponentKey,
    pub name: String,
    /// Series/group the team belongs to (for catalog filtering in the UI).
    pub series: String,
    /// Game mode the team is fought in; matched against `allowed_sources`.
    pub source: String,
    pub level: u8,
    /// Difficulty label, e.g. "normal" or "extreme".
    pub difficulty: String,
}

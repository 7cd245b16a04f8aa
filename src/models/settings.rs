//! Per-tournament configuration supplied by the host.

use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::RangeInclusive;

/// Settings for one eligibility query or tournament build.
///
/// The engine never mutates these; the host collects them from user
/// input and passes them to every setup operation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentSettings {
    pub player_team_level: u8,
    /// Total participants including the player; at least 2.
    pub team_count: usize,
    /// How far below the player's level an opponent may be.
    pub level_tolerance_lower: i32,
    /// How far above the player's level an opponent may be.
    pub level_tolerance_upper: i32,
    /// Bias applied when simulating CPU matches: higher values make the
    /// higher-level side win more often.
    pub level_win_rate_modifier: i32,
    /// Game modes whose opponents may be drawn into the bracket.
    pub allowed_sources: HashSet<String>,
    /// Catalog keys the player has unlocked.
    pub unlocked_opponents: HashSet<String>,
}

impl TournamentSettings {
    /// Check the settings are internally consistent.
    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.team_count < 2 {
            return Err(TournamentError::InvalidConfiguration(
                "team_count must be at least 2",
            ));
        }
        if self.level_tolerance_lower < 0 || self.level_tolerance_upper < 0 {
            return Err(TournamentError::InvalidConfiguration(
                "level tolerance bounds must not be negative",
            ));
        }
        Ok(())
    }

    /// Inclusive opponent-level range accepted by these settings.
    pub fn level_range(&self) -> RangeInclusive<i32> {
        let level = i32::from(self.player_team_level);
        (level - self.level_tolerance_lower)..=(level + self.level_tolerance_upper)
    }
}

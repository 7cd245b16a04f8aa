//! Eligibility filter: which catalog opponents a configuration allows.

use crate::catalog::Catalog;
use crate::models::{OpponentKey, TournamentError, TournamentSettings};

/// Result of an eligibility query: the eligible keys in catalog order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EligibleOpponents {
    pub keys: Vec<OpponentKey>,
}

impl EligibleOpponents {
    pub fn count(&self) -> usize {
        self.keys.len()
    }
}

/// Compute the set of opponents usable under `settings`.
///
/// An opponent is eligible iff its source is allowed, its key is
/// unlocked, and its level lies within the settings' tolerance range
/// around the player's level. Pure function of catalog + settings.
pub fn eligible_opponents(
    catalog: &Catalog,
    settings: &TournamentSettings,
) -> Result<EligibleOpponents, TournamentError> {
    settings.validate()?;
    let range = settings.level_range();
    let keys = catalog
        .opponents()
        .iter()
        .filter(|o| settings.allowed_sources.contains(&o.source))
        .filter(|o| settings.unlocked_opponents.contains(&o.key))
        .filter(|o| range.contains(&i32::from(o.level)))
        .map(|o| o.key.clone())
        .collect();
    Ok(EligibleOpponents { keys })
}

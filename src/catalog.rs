//! Opponent catalog: the ordered, immutable list of teams a tournament
//! can draw from. Loaded once by the host (CSV) and only read by the
//! engine.

use crate::models::Opponent;
use std::io::Read;

/// Ordered collection of catalog opponents with key lookup.
#[derive(Clone, Debug)]
pub struct Catalog {
    opponents: Vec<Opponent>,
}

impl Catalog {
    pub fn new(opponents: Vec<Opponent>) -> Self {
        Self { opponents }
    }

    /// Read a catalog from CSV with a header row matching the
    /// `Opponent` field names (key,name,series,source,level,difficulty).
    pub fn from_csv(reader: impl Read) -> Result<Self, csv::Error> {
        let mut opponents = Vec::new();
        for record in csv::Reader::from_reader(reader).deserialize() {
            opponents.push(record?);
        }
        Ok(Self { opponents })
    }

    /// All opponents in catalog order.
    pub fn opponents(&self) -> &[Opponent] {
        &self.opponents
    }

    /// Look up an opponent by its unique key.
    pub fn get(&self, key: &str) -> Option<&Opponent> {
        self.opponents.iter().find(|o| o.key == key)
    }

    pub fn len(&self) -> usize {
        self.opponents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opponents.is_empty()
    }
}

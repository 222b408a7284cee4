use crate::dice::Face;
use crate::trial::Results;
use crate::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-roll jackpot flags. A roll is a jackpot
/// when every die shows the same face.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Jackpots(BTreeMap<Roll, bool>);

impl Jackpots {
    /// how many rolls were jackpots
    pub fn count(&self) -> usize {
        self.0.values().filter(|&&hit| hit).count()
    }
    pub fn is_jackpot(&self, roll: Roll) -> Option<bool> {
        self.0.get(&roll).copied()
    }
    /// roll numbers of every jackpot
    pub fn hits(&self) -> impl Iterator<Item = Roll> + '_ {
        self.0.iter().filter(|(_, hit)| **hit).map(|(&roll, _)| roll)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<F: Face> From<&Results<F>> for Jackpots {
    fn from(results: &Results<F>) -> Self {
        Self(
            results
                .rows()
                .map(|(roll, row)| (roll, row.iter().all(|face| face == &row[0])))
                .collect(),
        )
    }
}

impl std::fmt::Display for Jackpots {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "roll\tjackpot")?;
        for (roll, hit) in self.0.iter() {
            writeln!(f, "{}\t{}", roll, hit)?;
        }
        Ok(())
    }
}

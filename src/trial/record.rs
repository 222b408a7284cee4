use crate::*;
use serde::Serialize;

/// One die's outcome in one roll. A row of the narrow table.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Record<F> {
    pub roll: Roll,
    pub die: Position,
    pub face: F,
}

impl<F> Record<F> {
    pub fn key(&self) -> (Roll, Position) {
        (self.roll, self.die)
    }
}

impl<F: std::fmt::Display> std::fmt::Display for Record<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}", self.roll, self.die, self.face)
    }
}

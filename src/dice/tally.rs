use super::*;
use crate::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Observed distribution over faces.
///
/// The sum of the counts is the total number of draws.
/// The count of a face is the number of times it was drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally<F: Ord> {
    mass: usize,
    counts: BTreeMap<F, usize>,
}

impl<F: Ord> Default for Tally<F> {
    fn default() -> Self {
        Self {
            mass: 0,
            counts: BTreeMap::new(),
        }
    }
}

impl<F: Face> Tally<F> {
    /// times a given face was witnessed. 0 if never.
    pub fn count(&self, face: &F) -> usize {
        self.counts.get(face).copied().unwrap_or(0)
    }
    /// total draws witnessed
    pub fn mass(&self) -> usize {
        self.mass
    }
    /// witness one more draw
    pub fn witness(&mut self, face: F) {
        self.mass += 1;
        *self.counts.entry(face).or_insert(0) += 1;
    }
    pub fn iter(&self) -> impl Iterator<Item = (&F, &usize)> {
        self.counts.iter()
    }
}

impl<F: Face> Density for Tally<F> {
    type S = F;
    fn density(&self, x: &Self::S) -> Probability {
        match self.mass {
            0 => 0.,
            n => self.count(x) as Probability / n as Probability,
        }
    }
    fn support(&self) -> impl Iterator<Item = &Self::S> {
        self.counts.keys()
    }
}

impl<F: Face> FromIterator<F> for Tally<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut tally = Self::default();
        iter.into_iter().for_each(|face| tally.witness(face));
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_frequencies() {
        let tally = [1, 3, 3, 3].into_iter().collect::<Tally<_>>();
        assert_eq!(tally.mass(), 4);
        assert_eq!(tally.count(&3), 3);
        assert_eq!(tally.count(&2), 0);
        assert_eq!(tally.density(&1), 0.25);
        assert_eq!(tally.support().copied().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn empty_has_no_density() {
        let tally = Tally::<u8>::default();
        assert_eq!(tally.density(&1), 0.);
    }
}

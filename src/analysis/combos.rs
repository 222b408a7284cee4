use super::*;
use crate::dice::Face;
use crate::trial::Results;
use serde::Serialize;
use std::collections::BTreeMap;

/// Distinct combinations and how many rolls produced each.
///
/// Sorted by count, most frequent first. Equal counts fall back to the
/// combination's own ordering, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Combos<F>(Vec<(Combination<F>, usize)>);

impl<F: Face> Combos<F> {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(Combination<F>, usize)> {
        self.0.iter()
    }
    /// occurrences of a combination. 0 if never rolled.
    pub fn count(&self, combination: &Combination<F>) -> usize {
        self.0
            .iter()
            .find(|(c, _)| c == combination)
            .map(|&(_, n)| n)
            .unwrap_or(0)
    }
    pub fn most_common(&self) -> Option<&(Combination<F>, usize)> {
        self.0.first()
    }
    /// total rolls accounted for
    pub fn mass(&self) -> usize {
        self.0.iter().map(|(_, n)| n).sum()
    }
}

impl<F: Face> From<&Results<F>> for Combos<F> {
    fn from(results: &Results<F>) -> Self {
        let mut counts = BTreeMap::<Combination<F>, usize>::new();
        for (_, row) in results.rows() {
            *counts.entry(Combination::from(row)).or_insert(0) += 1;
        }
        let mut combos = counts.into_iter().collect::<Vec<_>>();
        combos.sort_by(|(a, m), (b, n)| n.cmp(m).then_with(|| a.cmp(b)));
        Self(combos)
    }
}

impl<F: Face> std::fmt::Display for Combos<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "combination\tcount")?;
        for (combination, count) in self.0.iter() {
            writeln!(f, "{}\t{}", combination, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_regardless_of_order() {
        let mut results = Results::new(2);
        results.record([1, 2]).unwrap();
        results.record([2, 1]).unwrap();
        results.record([3, 3]).unwrap();
        let combos = Combos::from(&results);
        assert_eq!(combos.len(), 2);
        assert_eq!(
            combos.iter().cloned().collect::<Vec<_>>(),
            vec![
                (Combination::from(vec![1, 2]), 2),
                (Combination::from(vec![3, 3]), 1),
            ]
        );
        assert_eq!(combos.mass(), 3);
    }

    #[test]
    fn ties_break_ascending() {
        let mut results = Results::new(2);
        results.record(["z", "z"]).unwrap();
        results.record(["b", "a"]).unwrap();
        results.record(["m", "a"]).unwrap();
        results.record(["a", "b"]).unwrap();
        let combos = Combos::from(&results);
        let order = combos
            .iter()
            .map(|(c, n)| (c.to_string(), *n))
            .collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![
                ("(a, b)".to_string(), 2),
                ("(a, m)".to_string(), 1),
                ("(z, z)".to_string(), 1),
            ]
        );
        assert_eq!(combos.most_common().map(|&(_, n)| n), Some(2));
        assert_eq!(combos.count(&Combination::from(vec!["q", "q"])), 0);
    }
}

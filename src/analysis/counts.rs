use crate::dice::Face;
use crate::trial::Results;
use crate::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// How many dice showed each face, per roll.
///
/// Columns are every face observed anywhere in the trial, sorted.
/// A face missing from a roll counts zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaceCounts<F> {
    faces: Vec<F>,
    rows: BTreeMap<Roll, Vec<usize>>,
}

impl<F: Face> FaceCounts<F> {
    /// column labels
    pub fn faces(&self) -> &[F] {
        &self.faces
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    /// counts for a roll, aligned with `faces()`
    pub fn row(&self, roll: Roll) -> Option<&[usize]> {
        self.rows.get(&roll).map(Vec::as_slice)
    }
    /// count of a face in a roll. None if the roll or face is absent from the table.
    pub fn get(&self, roll: Roll, face: &F) -> Option<usize> {
        let column = self.faces.binary_search(face).ok()?;
        self.rows.get(&roll).map(|row| row[column])
    }
    pub fn rows(&self) -> impl Iterator<Item = (&Roll, &Vec<usize>)> {
        self.rows.iter()
    }
}

impl<F: Face> From<&Results<F>> for FaceCounts<F> {
    fn from(results: &Results<F>) -> Self {
        let faces = results
            .rows()
            .flat_map(|(_, row)| row.iter())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect::<Vec<F>>();
        let rows = results
            .rows()
            .map(|(roll, row)| {
                let mut counts = vec![0; faces.len()];
                for face in row {
                    if let Ok(column) = faces.binary_search(face) {
                        counts[column] += 1;
                    }
                }
                (roll, counts)
            })
            .collect();
        Self { faces, rows }
    }
}

impl<F: Face> std::fmt::Display for FaceCounts<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "roll")?;
        for face in self.faces.iter() {
            write!(f, "\t{}", face)?;
        }
        writeln!(f)?;
        for (roll, counts) in self.rows.iter() {
            write!(f, "{}", roll)?;
            for count in counts {
                write!(f, "\t{}", count)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_die_two_rolls() {
        let mut results = Results::new(1);
        results.record([1]).unwrap();
        results.record([3]).unwrap();
        let counts = FaceCounts::from(&results);
        assert_eq!(counts.faces(), &[1, 3]);
        assert_eq!(counts.get(1, &1), Some(1));
        assert_eq!(counts.get(1, &3), Some(0));
        assert_eq!(counts.get(2, &1), Some(0));
        assert_eq!(counts.get(2, &3), Some(1));
        assert_eq!(counts.get(2, &2), None);
        assert_eq!(counts.get(3, &1), None);
    }

    #[test]
    fn counts_sum_to_dice() {
        let mut results = Results::new(4);
        results.record([6, 6, 2, 6]).unwrap();
        results.record([1, 2, 3, 4]).unwrap();
        let counts = FaceCounts::from(&results);
        assert_eq!(counts.faces(), &[1, 2, 3, 4, 6]);
        assert_eq!(counts.row(1), Some(&[0, 1, 0, 0, 3][..]));
        assert!(counts.rows().all(|(_, row)| row.iter().sum::<usize>() == 4));
        assert_eq!(counts.to_string(), "roll\t1\t2\t3\t4\t6\n1\t0\t1\t0\t0\t3\n2\t1\t1\t1\t1\t0\n");
    }
}

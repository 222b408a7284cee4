use super::*;
use crate::dice::Face;
use crate::*;
use serde::Serialize;

/// Accumulated outcomes of every roll in a trial.
///
/// Stored roll-major: roll r occupies `faces[(r - 1) * dice .. r * dice]`,
/// in die order. Rows are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Results<F> {
    dice: usize,
    faces: Vec<F>,
}

impl<F: Face> Results<F> {
    pub fn new(dice: usize) -> Self {
        Self {
            dice,
            faces: Vec::new(),
        }
    }
    /// number of dice per roll
    pub fn dice(&self) -> usize {
        self.dice
    }
    /// number of completed rolls
    pub fn rolls(&self) -> usize {
        self.faces.len() / self.dice.max(1)
    }
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Append one roll under the next roll number.
    ///
    /// The roll must hold exactly one face per die; otherwise
    /// nothing is appended.
    pub fn record<I>(&mut self, roll: I) -> Result<Roll>
    where
        I: IntoIterator<Item = F>,
    {
        let before = self.faces.len();
        self.faces.extend(roll);
        match self.faces.len() - before {
            n if n == self.dice => Ok(self.rolls()),
            n => {
                self.faces.truncate(before);
                Err(Error::InvalidInput(format!(
                    "roll has {} faces for {} dice",
                    n, self.dice
                )))
            }
        }
    }

    /// (roll number, faces in die order) for every roll.
    pub fn rows(&self) -> impl Iterator<Item = (Roll, &[F])> {
        self.faces
            .chunks(self.dice.max(1))
            .enumerate()
            .map(|(i, row)| (i + 1, row))
    }
    /// the face a die showed in a roll
    pub fn get(&self, roll: Roll, die: Position) -> Option<&F> {
        match (roll, die) {
            (0, _) => None,
            (_, d) if d >= self.dice => None,
            (r, d) => self.faces.get((r - 1) * self.dice + d),
        }
    }
    pub fn records(&self) -> impl Iterator<Item = Record<F>> + '_ {
        self.rows().flat_map(|(roll, row)| {
            row.iter().enumerate().map(move |(die, face)| Record {
                roll,
                die,
                face: face.clone(),
            })
        })
    }

    pub fn wide(&self) -> Wide<F> {
        Wide::from(self)
    }
    pub fn narrow(&self) -> Narrow<F> {
        Narrow::from(self)
    }
    pub fn reshape(&self, form: Form) -> Table<F> {
        match form {
            Form::Wide => Table::Wide(self.wide()),
            Form::Narrow => Table::Narrow(self.narrow()),
        }
    }
}

impl<F: Face> std::fmt::Display for Results<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.wide())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Results<u8> {
        let mut results = Results::new(2);
        results.record([1, 2]).unwrap();
        results.record([2, 1]).unwrap();
        results.record([3, 3]).unwrap();
        results
    }

    #[test]
    fn rolls_are_numbered_from_one() {
        let results = sample();
        assert_eq!(results.rolls(), 3);
        assert_eq!(
            results.rows().map(|(r, _)| r).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn wrong_width_appends_nothing() {
        let mut results = sample();
        assert!(matches!(results.record([4]), Err(Error::InvalidInput(_))));
        assert!(matches!(
            results.record([4, 5, 6]),
            Err(Error::InvalidInput(_))
        ));
        assert_eq!(results, sample());
        assert_eq!(results.record([4, 5]), Ok(4));
        assert_eq!(results.get(4, 1), Some(&5));
    }

    #[test]
    fn lookup() {
        let results = sample();
        assert_eq!(results.get(1, 1), Some(&2));
        assert_eq!(results.get(3, 0), Some(&3));
        assert_eq!(results.get(0, 0), None);
        assert_eq!(results.get(4, 0), None);
        assert_eq!(results.get(1, 2), None);
    }

    #[test]
    fn records_are_roll_major() {
        let keys = sample().records().map(|r| r.key()).collect::<Vec<_>>();
        assert_eq!(keys, vec![(1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1)]);
    }
}

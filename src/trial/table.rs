use super::*;
use crate::dice::Face;
use crate::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Results pivoted to one row per roll and one column per die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wide<F> {
    dice: usize,
    rows: BTreeMap<Roll, Vec<F>>,
}

impl<F: Face> Wide<F> {
    pub fn dice(&self) -> usize {
        self.dice
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn row(&self, roll: Roll) -> Option<&[F]> {
        self.rows.get(&roll).map(Vec::as_slice)
    }
    pub fn get(&self, roll: Roll, die: Position) -> Option<&F> {
        self.rows.get(&roll).and_then(|row| row.get(die))
    }
    pub fn rows(&self) -> impl Iterator<Item = (&Roll, &Vec<F>)> {
        self.rows.iter()
    }
}

impl<F: Face> From<&Results<F>> for Wide<F> {
    fn from(results: &Results<F>) -> Self {
        Self {
            dice: results.dice(),
            rows: results
                .rows()
                .map(|(roll, row)| (roll, row.to_vec()))
                .collect(),
        }
    }
}

impl<F: Face> std::fmt::Display for Wide<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "roll")?;
        for die in 0..self.dice {
            write!(f, "\t{}", die)?;
        }
        writeln!(f)?;
        for (roll, row) in self.rows.iter() {
            write!(f, "{}", roll)?;
            for face in row {
                write!(f, "\t{}", face)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Results stacked to one row per (roll, die).
///
/// Records are kept sorted by (roll, die).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Narrow<F> {
    records: Vec<Record<F>>,
}

impl<F: Face> Narrow<F> {
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    pub fn get(&self, roll: Roll, die: Position) -> Option<&F> {
        self.records
            .binary_search_by_key(&(roll, die), Record::key)
            .ok()
            .map(|i| &self.records[i].face)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Record<F>> {
        self.records.iter()
    }
}

impl<F: Face> From<&Results<F>> for Narrow<F> {
    fn from(results: &Results<F>) -> Self {
        Self {
            records: results.records().collect(),
        }
    }
}

impl<F: Face> std::fmt::Display for Narrow<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "roll\tdie\tface")?;
        for record in self.records.iter() {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}

/// Either layout of the same results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Table<F> {
    Wide(Wide<F>),
    Narrow(Narrow<F>),
}

impl<F: Face> Table<F> {
    pub fn form(&self) -> Form {
        match self {
            Self::Wide(_) => Form::Wide,
            Self::Narrow(_) => Form::Narrow,
        }
    }
    pub fn get(&self, roll: Roll, die: Position) -> Option<&F> {
        match self {
            Self::Wide(wide) => wide.get(roll, die),
            Self::Narrow(narrow) => narrow.get(roll, die),
        }
    }
}

impl<F: Face> std::fmt::Display for Table<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Wide(wide) => write!(f, "{}", wide),
            Self::Narrow(narrow) => write!(f, "{}", narrow),
        }
    }
}

use crate::analysis::Analyzer;
use crate::analysis::Combos;
use crate::analysis::FaceCounts;
use crate::dice::Face;
use crate::trial::Form;
use crate::trial::Table;
use crate::*;
use colored::Colorize;
use serde::Serialize;

/// Everything one run produced, ready for printing or JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Report<F> {
    pub seed: Option<u64>,
    pub dice: usize,
    pub rolls: usize,
    pub die: Vec<(F, Weight)>,
    pub jackpots: usize,
    pub combos: Combos<F>,
    pub face_counts: FaceCounts<F>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<Table<F>>,
}

impl<F: Face> Report<F> {
    /// Run every analysis over the analyzer's trial.
    /// `form` selects whether, and how, the raw rolls are included.
    pub fn collect(analyzer: &mut Analyzer<F>, seed: Option<u64>, form: Option<Form>) -> Self {
        let jackpots = analyzer.jackpot();
        let combos = analyzer.combo().clone();
        let face_counts = analyzer.face_counts_roll().clone();
        let trial = analyzer.trial().borrow();
        let die = trial
            .dice()
            .first()
            .map(|d| d.borrow().show())
            .unwrap_or_default();
        Self {
            seed,
            dice: trial.dice().len(),
            rolls: trial.rolls(),
            die,
            jackpots,
            combos,
            face_counts,
            table: form.map(|form| trial.show(form)),
        }
    }
}

impl<F: Face> std::fmt::Display for Report<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", "die".bold())?;
        writeln!(f, "face\tweight")?;
        for (face, weight) in self.die.iter() {
            writeln!(f, "{}\t{}", face, weight)?;
        }
        if let Some(table) = self.table.as_ref() {
            writeln!(f)?;
            writeln!(f, "{} ({})", "rolls".bold(), table.form())?;
            write!(f, "{}", table)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{} {} of {} rolls with {} dice",
            "jackpots".bold(),
            self.jackpots.to_string().green(),
            self.rolls,
            self.dice
        )?;
        writeln!(f)?;
        writeln!(f, "{}", "combinations".bold())?;
        write!(f, "{}", self.combos)?;
        writeln!(f)?;
        writeln!(f, "{}", "face counts per roll".bold())?;
        write!(f, "{}", self.face_counts)
    }
}

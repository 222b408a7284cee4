use super::*;
use crate::dice::Face;
use crate::trial::Trial;
use crate::*;

/// Computes statistics over a shared trial and keeps the latest of each.
///
/// Caches are stale until recomputed: playing more rolls on the trial
/// does not touch them. Every analysis call rebuilds its table from the
/// trial's current results and replaces the cached copy. The trial itself
/// is only ever read.
#[derive(Debug)]
pub struct Analyzer<F> {
    trial: Shared<Trial<F>>,
    jackpots: Option<Jackpots>,
    combos: Option<Combos<F>>,
    counts: Option<FaceCounts<F>>,
}

impl<F: Face> Analyzer<F> {
    pub fn new(trial: Shared<Trial<F>>) -> Self {
        Self {
            trial,
            jackpots: None,
            combos: None,
            counts: None,
        }
    }

    pub fn trial(&self) -> &Shared<Trial<F>> {
        &self.trial
    }

    /// Number of rolls in which every die showed the same face.
    pub fn jackpot(&mut self) -> usize {
        let jackpots = Jackpots::from(self.trial.borrow().results());
        let count = jackpots.count();
        log::debug!("{} jackpots in {} rolls", count, jackpots.len());
        self.jackpots = Some(jackpots);
        count
    }
    /// Distinct per-roll combinations with their counts, most frequent first.
    pub fn combo(&mut self) -> &Combos<F> {
        let combos = Combos::from(self.trial.borrow().results());
        log::debug!("{} distinct combinations", combos.len());
        self.combos.insert(combos)
    }
    /// Per-roll count of each observed face.
    pub fn face_counts_roll(&mut self) -> &FaceCounts<F> {
        let counts = FaceCounts::from(self.trial.borrow().results());
        log::debug!("{} faces observed", counts.faces().len());
        self.counts.insert(counts)
    }

    /// Last computed jackpot flags, if any.
    pub fn jackpots(&self) -> Option<&Jackpots> {
        self.jackpots.as_ref()
    }
    /// Last computed combinations, if any.
    pub fn combos(&self) -> Option<&Combos<F>> {
        self.combos.as_ref()
    }
    /// Last computed face counts, if any.
    pub fn face_counts(&self) -> Option<&FaceCounts<F>> {
        self.counts.as_ref()
    }
}

impl<F: Face> From<Trial<F>> for Analyzer<F> {
    fn from(trial: Trial<F>) -> Self {
        Self::new(trial.shared())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Die;

    fn loaded(face: u8) -> Shared<Die<u8>> {
        let die = Die::new(1..=6).unwrap().shared();
        for f in (1..=6).filter(|&f| f != face) {
            die.borrow_mut().set_weight(&f, 0.).unwrap();
        }
        die
    }

    #[test]
    fn forced_jackpots() {
        let dice = vec![loaded(2), loaded(2), loaded(2)];
        let mut trial = Trial::seeded(dice, 0).unwrap();
        trial.play(10).unwrap();
        let mut analyzer = Analyzer::from(trial);
        assert_eq!(analyzer.jackpot(), 10);
        assert_eq!(analyzer.jackpots().map(Jackpots::len), Some(10));
    }

    #[test]
    fn caches_start_empty() {
        let trial = Trial::seeded(vec![loaded(1)], 0).unwrap().shared();
        let analyzer = Analyzer::new(trial);
        assert!(analyzer.jackpots().is_none());
        assert!(analyzer.combos().is_none());
        assert!(analyzer.face_counts().is_none());
    }

    #[test]
    fn recompute_after_more_plays() {
        let trial = Trial::seeded(vec![loaded(4), loaded(4)], 0).unwrap().shared();
        trial.borrow_mut().play(3).unwrap();
        let mut analyzer = Analyzer::new(trial.clone());
        assert_eq!(analyzer.jackpot(), 3);
        assert_eq!(analyzer.combo().mass(), 3);
        assert_eq!(analyzer.face_counts_roll().len(), 3);

        trial.borrow_mut().play(5).unwrap();
        assert_eq!(analyzer.jackpots().map(Jackpots::count), Some(3));
        assert_eq!(analyzer.jackpot(), 8);
        assert_eq!(analyzer.combo().mass(), 8);
        assert_eq!(analyzer.face_counts_roll().len(), 8);
        assert_eq!(analyzer.face_counts().and_then(|c| c.get(8, &4)), Some(2));
        assert_eq!(trial.borrow().rolls(), 8);
    }

    #[test]
    fn mixed_dice_combos() {
        let dice = vec![loaded(1), loaded(2)];
        let mut trial = Trial::seeded(dice, 9).unwrap();
        trial.play(6).unwrap();
        let mut analyzer = Analyzer::from(trial);
        assert_eq!(analyzer.jackpot(), 0);
        let combos = analyzer.combo();
        assert_eq!(combos.len(), 1);
        assert_eq!(
            combos.most_common(),
            Some(&(Combination::from(vec![1, 2]), 6))
        );
    }

    #[test]
    fn fair_dice_jackpot_rate() {
        let dice = (0..2).map(|_| Die::new(1..=6).unwrap().shared()).collect();
        let mut trial = Trial::seeded(dice, 17).unwrap();
        trial.play(60_000).unwrap();
        let mut analyzer = Analyzer::from(trial);
        let rate = analyzer.jackpot() as Probability / 60_000.;
        assert!((rate - 1. / 6.).abs() < CONVERGENCE_TOLERANCE);
    }
}

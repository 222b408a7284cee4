use super::*;
use crate::*;
use rand::Rng;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// A die with a fixed, ordered set of distinct faces
/// and a mutable unnormalized weight per face.
///
/// Weights start at [`DEFAULT_WEIGHT`]. Any weight may be zero, but
/// rolling needs at least one positive weight. Rolling never mutates the
/// die and never remembers outcomes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Die<F> {
    faces: Vec<F>,
    weights: Vec<Weight>,
}

impl<F: Face> Die<F> {
    /// Build a die from an ordered list of distinct faces.
    pub fn new<I>(faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = F>,
    {
        let faces = faces.into_iter().collect::<Vec<F>>();
        if faces.is_empty() {
            return Err(Error::InvalidInput("a die needs at least one face".into()));
        }
        let ref mut seen = BTreeSet::new();
        if let Some(dupe) = faces.iter().find(|&face| !seen.insert(face)) {
            return Err(Error::InvalidInput(format!("duplicate face {}", dupe)));
        }
        log::debug!("new die with {} faces", faces.len());
        Ok(Self {
            weights: vec![DEFAULT_WEIGHT; faces.len()],
            faces,
        })
    }

    /// Move this die behind a shared handle so a trial and its owner
    /// can both reach it.
    pub fn shared(self) -> Shared<Self> {
        Rc::new(RefCell::new(self))
    }

    pub fn faces(&self) -> &[F] {
        &self.faces
    }
    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }
    pub fn len(&self) -> usize {
        self.faces.len()
    }
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
    /// the weight of a given face, if it is on this die.
    pub fn weight(&self, face: &F) -> Option<Weight> {
        self.position(face).map(|i| self.weights[i])
    }
    /// sum of all weights. zero means the die cannot be rolled.
    pub fn mass(&self) -> Weight {
        self.weights.iter().sum()
    }
    /// the set of faces, order erased.
    pub fn face_set(&self) -> BTreeSet<&F> {
        self.faces.iter().collect()
    }

    /// Replace the weight of one face.
    ///
    /// Anything convertible to a float is accepted; the result must be
    /// finite and nonnegative, and the die's total weight must stay finite.
    /// On error nothing changes.
    pub fn set_weight<W>(&mut self, face: &F, weight: W) -> Result<()>
    where
        W: Into<Weight>,
    {
        let weight = weight.into();
        let i = self
            .position(face)
            .ok_or_else(|| Error::UnknownFace(face.to_string()))?;
        if !weight.is_finite() || weight < 0. {
            return Err(Error::InvalidWeight(format!(
                "{} for face {} must be a finite nonnegative number",
                weight, face
            )));
        }
        let mass = self
            .weights
            .iter()
            .enumerate()
            .map(|(j, &w)| if j == i { weight } else { w })
            .sum::<Weight>();
        if !mass.is_finite() {
            return Err(Error::InvalidWeight(format!(
                "{} for face {} overflows the total weight",
                weight, face
            )));
        }
        log::debug!("face {} weight {} -> {}", face, self.weights[i], weight);
        self.weights[i] = weight;
        Ok(())
    }

    /// Snapshot the current weights into something that can draw faces.
    pub fn sampler(&self) -> Result<Sampler<'_, F>> {
        Sampler::try_from(self)
    }

    /// Draw `n` faces independently, with replacement, proportional to weight.
    pub fn roll<R>(&self, n: usize, rng: &mut R) -> Result<Vec<F>>
    where
        R: Rng + ?Sized,
    {
        if n == 0 {
            return Err(Error::InvalidArgument("roll count must be positive".into()));
        }
        let sampler = self.sampler()?;
        Ok((0..n).map(|_| sampler.draw(rng)).cloned().collect())
    }

    /// Draw a single face.
    pub fn roll_once<R>(&self, rng: &mut R) -> Result<F>
    where
        R: Rng + ?Sized,
    {
        self.roll(DEFAULT_ROLLS, rng)
            .map(|mut faces| faces.swap_remove(0))
    }

    /// Current (face, weight) pairs in construction order.
    pub fn show(&self) -> Vec<(F, Weight)> {
        self.faces
            .iter()
            .cloned()
            .zip(self.weights.iter().copied())
            .collect()
    }

    fn position(&self, face: &F) -> Option<usize> {
        self.faces.iter().position(|f| f == face)
    }
}

impl<F: Face> Density for Die<F> {
    type S = F;
    fn density(&self, x: &Self::S) -> Probability {
        match (self.weight(x), self.mass()) {
            (Some(w), m) if m > 0. => w / m,
            _ => 0.,
        }
    }
    fn support(&self) -> impl Iterator<Item = &Self::S> {
        self.faces.iter()
    }
}

impl<F: Face> std::fmt::Display for Die<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "face\tweight")?;
        for (face, weight) in self.faces.iter().zip(self.weights.iter()) {
            writeln!(f, "{}\t{}", face, weight)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn fresh_weights_are_one() {
        let die = Die::new(1..=6).unwrap();
        assert!(die.show().iter().all(|&(_, w)| w == 1.0));
        assert_eq!(
            die.show().iter().map(|&(f, _)| f).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn string_faces() {
        let die = Die::new(["H", "T"]).unwrap();
        assert_eq!(die.show(), vec![("H", 1.0), ("T", 1.0)]);
    }

    #[test]
    fn rejects_empty() {
        let faces: Vec<u8> = vec![];
        assert!(matches!(Die::new(faces), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn rejects_duplicates() {
        assert!(matches!(Die::new([1, 2, 2]), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn set_weight_touches_one_face() {
        let mut die = Die::new([1, 2, 3]).unwrap();
        die.set_weight(&1, 2.5).unwrap();
        assert_eq!(die.show(), vec![(1, 2.5), (2, 1.0), (3, 1.0)]);
    }

    #[test]
    fn set_weight_accepts_integers() {
        let mut die = Die::new(['a', 'b']).unwrap();
        die.set_weight(&'b', 7u32).unwrap();
        assert_eq!(die.weight(&'b'), Some(7.0));
    }

    #[test]
    fn unknown_face_changes_nothing() {
        let mut die = Die::new([1, 2, 3]).unwrap();
        let before = die.show();
        assert!(matches!(die.set_weight(&4, 1.0), Err(Error::UnknownFace(_))));
        assert!(matches!(die.set_weight(&4, 1.0), Err(Error::UnknownFace(_))));
        assert_eq!(die.show(), before);
    }

    #[test]
    fn bad_weights_change_nothing() {
        let mut die = Die::new([1, 2, 3]).unwrap();
        let before = die.show();
        for w in [-1., f64::NAN, f64::INFINITY] {
            assert!(matches!(die.set_weight(&2, w), Err(Error::InvalidWeight(_))));
        }
        assert_eq!(die.show(), before);
    }

    #[test]
    fn total_weight_stays_finite() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut die = Die::new([1, 2, 3]).unwrap();
        die.set_weight(&1, f64::MAX).unwrap();
        assert!(matches!(
            die.set_weight(&2, f64::MAX),
            Err(Error::InvalidWeight(_))
        ));
        assert_eq!(die.show(), vec![(1, f64::MAX), (2, 1.0), (3, 1.0)]);
        assert!(die.mass().is_finite());
        assert!(die.density(&1) > 0.99);
        assert_eq!(die.roll(5, rng).unwrap(), vec![1; 5]);
    }

    #[test]
    fn roll_returns_n_faces() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let die = Die::new([1, 2, 3]).unwrap();
        let faces = die.roll(50, rng).unwrap();
        assert_eq!(faces.len(), 50);
        assert!(faces.iter().all(|f| die.faces().contains(f)));
    }

    #[test]
    fn roll_once_stays_on_the_die() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let die = Die::new(["a", "b", "c"]).unwrap();
        assert!(die.faces().contains(&die.roll_once(rng).unwrap()));
    }

    #[test]
    fn roll_zero_is_rejected() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let die = Die::new([1, 2, 3]).unwrap();
        assert!(matches!(die.roll(0, rng), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn zero_weight_is_never_drawn() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let mut die = Die::new([1, 2, 3]).unwrap();
        die.set_weight(&2, 0.).unwrap();
        assert!(die.roll(1000, rng).unwrap().iter().all(|&f| f != 2));
    }

    #[test]
    fn all_zero_is_degenerate() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut die = Die::new([1, 2]).unwrap();
        die.set_weight(&1, 0.).unwrap();
        die.set_weight(&2, 0.).unwrap();
        assert!(matches!(
            die.roll(1, rng),
            Err(Error::DegenerateDistribution(_))
        ));
    }

    #[test]
    fn dominant_face_converges() {
        let ref mut rng = SmallRng::seed_from_u64(42);
        let mut die = Die::new([1, 2, 3]).unwrap();
        die.set_weight(&3, 1000).unwrap();
        let tally = die.roll(100_000, rng).unwrap().into_iter().collect::<Tally<_>>();
        let expected = die.density(&3);
        assert!((expected - 1000. / 1002.).abs() < 1e-12);
        assert!((tally.density(&3) - expected).abs() < CONVERGENCE_TOLERANCE);
    }

    #[test]
    fn density_normalizes() {
        let mut die = Die::new([1, 2]).unwrap();
        die.set_weight(&1, 3.).unwrap();
        assert_eq!(die.density(&1), 0.75);
        assert_eq!(die.density(&2), 0.25);
        assert_eq!(die.density(&9), 0.);
    }
}

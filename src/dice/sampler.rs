use super::*;
use crate::*;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

/// Weighted draws from a die's faces, fixed at the weights
/// the die had when the sampler was built.
#[derive(Debug, Clone)]
pub struct Sampler<'d, F> {
    faces: &'d [F],
    index: WeightedIndex<Weight>,
}

impl<'d, F> Sampler<'d, F> {
    /// One face, drawn with probability weight / mass.
    pub fn draw<R>(&self, rng: &mut R) -> &'d F
    where
        R: Rng + ?Sized,
    {
        &self.faces[self.index.sample(rng)]
    }
}

impl<'d, F: Face> TryFrom<&'d Die<F>> for Sampler<'d, F> {
    type Error = Error;
    fn try_from(die: &'d Die<F>) -> Result<Self> {
        if !die.mass().is_finite() {
            return Err(Error::InvalidWeight("total weight is not finite".into()));
        }
        WeightedIndex::new(die.weights())
            .map(|index| Self {
                faces: die.faces(),
                index,
            })
            .map_err(|e| match e {
                rand::distr::weighted::Error::InsufficientNonZero => {
                    Error::DegenerateDistribution("every face has zero weight".into())
                }
                e => Error::InvalidWeight(e.to_string()),
            })
    }
}

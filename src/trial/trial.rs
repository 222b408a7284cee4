use super::*;
use crate::dice::Die;
use crate::dice::Face;
use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::cell::RefCell;
use std::rc::Rc;

/// One experiment: a fixed, ordered set of dice rolled together
/// any number of times.
///
/// Dice are shared with their owner, not copied. A weight change made
/// through any handle applies from the next [`Trial::play`] onward; a
/// single `play` call reads every die's weights once, up front, and
/// rolls the whole batch against that snapshot. Earlier rows are never
/// rewritten.
#[derive(Debug)]
pub struct Trial<F> {
    dice: Vec<Shared<Die<F>>>,
    results: Results<F>,
    rng: SmallRng,
}

impl<F: Face> Trial<F> {
    /// Trial drawing from OS entropy.
    pub fn new(dice: Vec<Shared<Die<F>>>) -> Result<Self> {
        Self::build(dice, SmallRng::from_os_rng())
    }
    /// Trial whose rolls are reproducible from `seed`.
    pub fn seeded(dice: Vec<Shared<Die<F>>>, seed: u64) -> Result<Self> {
        Self::build(dice, SmallRng::seed_from_u64(seed))
    }

    fn build(dice: Vec<Shared<Die<F>>>, rng: SmallRng) -> Result<Self> {
        let first = dice
            .first()
            .ok_or_else(|| Error::InvalidInput("a trial needs at least one die".into()))?
            .borrow()
            .faces()
            .to_vec();
        let ref expected = first.iter().collect::<std::collections::BTreeSet<_>>();
        if let Some(i) = dice.iter().position(|d| d.borrow().face_set() != *expected) {
            return Err(Error::InvalidInput(format!(
                "die {} has a different face set than die 0",
                i
            )));
        }
        log::debug!("new trial with {} dice of {} faces", dice.len(), first.len());
        Ok(Self {
            results: Results::new(dice.len()),
            dice,
            rng,
        })
    }

    /// Move this trial behind a shared handle so analyzers can
    /// follow it across later plays.
    pub fn shared(self) -> Shared<Self> {
        Rc::new(RefCell::new(self))
    }

    pub fn dice(&self) -> &[Shared<Die<F>>] {
        &self.dice
    }
    pub fn results(&self) -> &Results<F> {
        &self.results
    }
    /// number of completed rolls so far
    pub fn rolls(&self) -> usize {
        self.results.rolls()
    }

    /// Roll every die, in order, `rolls` times and append the outcomes.
    ///
    /// Returns everything recorded so far, not just this batch. If any die
    /// cannot be rolled nothing is appended.
    pub fn play(&mut self, rolls: usize) -> Result<&Results<F>> {
        Self::roll_into(&self.dice, &mut self.results, rolls, &mut self.rng)?;
        Ok(&self.results)
    }

    /// Same as [`Trial::play`], drawing from a caller-supplied generator
    /// instead of the trial's own. Each draw takes one `u64` per die,
    /// in die order.
    pub fn play_with<R>(&mut self, rolls: usize, rng: &mut R) -> Result<&Results<F>>
    where
        R: Rng + ?Sized,
    {
        Self::roll_into(&self.dice, &mut self.results, rolls, rng)?;
        Ok(&self.results)
    }

    fn roll_into<R>(
        dice: &[Shared<Die<F>>],
        results: &mut Results<F>,
        rolls: usize,
        rng: &mut R,
    ) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        if rolls == 0 {
            return Err(Error::InvalidArgument("rolls must be positive".into()));
        }
        let dice = dice.iter().map(|d| d.borrow()).collect::<Vec<_>>();
        let samplers = dice
            .iter()
            .map(|d| d.sampler())
            .collect::<Result<Vec<_>>>()?;
        for _ in 0..rolls {
            results.record(samplers.iter().map(|s| s.draw(rng)).cloned())?;
        }
        log::debug!(
            "played {} rolls, {} recorded in total",
            rolls,
            results.rolls()
        );
        Ok(())
    }

    /// The accumulated results in either layout.
    pub fn show(&self, form: Form) -> Table<F> {
        self.results.reshape(form)
    }
    pub fn wide(&self) -> Wide<F> {
        self.results.wide()
    }
    pub fn narrow(&self) -> Narrow<F> {
        self.results.narrow()
    }
}

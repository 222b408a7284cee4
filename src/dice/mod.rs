//! Weighted dice.
//!
//! A [`Die`] owns an ordered set of distinct faces and one unnormalized
//! weight per face. Drawing goes through a [`Sampler`], which snapshots the
//! weights at the moment it is built. [`Tally`] collects what came out.

mod die;
mod face;
mod sampler;
mod tally;

pub use die::*;
pub use face::*;
pub use sampler::*;
pub use tally::*;

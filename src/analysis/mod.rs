//! Descriptive statistics over a trial's results.
//!
//! Each statistic is a plain table built from [`Results`](crate::trial::Results)
//! with `From`. The [`Analyzer`] recomputes them on demand and caches the
//! latest copy of each.

mod analyzer;
mod combination;
mod combos;
mod counts;
mod jackpots;

pub use analyzer::*;
pub use combination::*;
pub use combos::*;
pub use counts::*;
pub use jackpots::*;

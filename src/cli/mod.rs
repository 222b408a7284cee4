//! Command-line driver: build dice from arguments, play a trial,
//! print every statistic.

mod args;
mod report;

pub use args::*;
pub use report::*;

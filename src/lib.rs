//! Weighted dice simulation.
//!
//! Three stages, strictly one-way:
//! - [`dice`]: weighted dice and their samplers
//! - [`trial`]: repeated simultaneous rolls of a fixed set of dice
//! - [`analysis`]: jackpot, combination, and face-count statistics over a trial
pub mod analysis;
pub mod dice;
pub mod error;
pub mod trial;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::Error;
pub use error::Result;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Unnormalized relative likelihood of a face.
pub type Weight = f64;
/// Normalized likelihood of a face.
pub type Probability = f64;
/// 1-based roll number within a trial.
pub type Roll = usize;
/// 0-based index of a die within a trial.
pub type Position = usize;
/// Shared, single-threaded, interior-mutable handle.
pub type Shared<T> = std::rc::Rc<std::cell::RefCell<T>>;

// ============================================================================
// TRAITS
// ============================================================================
/// generalization of any probability distribution over faces.
///
/// implemented by
/// - Die   , where the density is the weight normalized by the weight sum
/// - Tally , where the density is the observed frequency
pub trait Density {
    type S;

    fn density(&self, x: &Self::S) -> Probability;
    fn support(&self) -> impl Iterator<Item = &Self::S>;
}

// ============================================================================
// PARAMETERS
// ============================================================================
/// Weight every face starts with.
pub const DEFAULT_WEIGHT: Weight = 1.0;
/// Draws per call to `Die::roll` when the caller has no preference.
pub const DEFAULT_ROLLS: usize = 1;
/// Absolute tolerance between empirical and theoretical face frequencies.
pub const CONVERGENCE_TOLERANCE: Probability = 0.01;
/// Environment variable consulted for a seed when none is passed explicitly.
pub const SEED_VAR: &str = "MONTECARLO_SEED";
/// Environment variable consulted for the terminal log level.
pub const LOG_VAR: &str = "MONTECARLO_LOG";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
/// `MONTECARLO_LOG` overrides the level when it names a valid filter.
/// Fails if a logger is already installed.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> std::result::Result<(), log::SetLoggerError> {
    let level = std::env::var(LOG_VAR)
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(level);
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}

/// Seed from the environment, if one is set and parses.
pub fn seed() -> Option<u64> {
    std::env::var(SEED_VAR)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
}

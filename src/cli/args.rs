use crate::dice::Die;
use crate::dice::Symbol;
use crate::trial::Form;
use crate::trial::Trial;
use crate::*;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Roll weighted dice and summarize the outcomes", long_about = None)]
pub struct Args {
    /// Faces shared by every die, comma separated
    #[arg(short, long, value_delimiter = ',', default_value = "1,2,3,4,5,6")]
    pub faces: Vec<Symbol>,
    /// Number of dice rolled together
    #[arg(short, long, default_value_t = 3)]
    pub dice: usize,
    /// Weight override applied to every die, as FACE=WEIGHT (repeatable)
    #[arg(short, long = "weight", value_parser = parse_weight)]
    pub weights: Vec<(Symbol, Weight)>,
    /// Number of rolls to play
    #[arg(short, long, default_value_t = 1000)]
    pub rolls: usize,
    /// Seed for reproducible rolls (falls back to MONTECARLO_SEED)
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Layout of the printed rolls table: wide or narrow
    #[arg(long, default_value = "wide")]
    pub form: Form,
    /// Print every roll, not just the statistics
    #[arg(long)]
    pub show: bool,
    /// Emit JSON instead of tab-separated tables
    #[arg(long)]
    pub json: bool,
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed.or_else(crate::seed)
    }

    /// One die carrying every requested weight.
    pub fn die(&self) -> Result<Die<Symbol>> {
        let mut die = Die::new(self.faces.iter().cloned())?;
        for (face, weight) in self.weights.iter() {
            die.set_weight(face, *weight)?;
        }
        Ok(die)
    }

    /// A trial of identical, independently shared copies of `die()`.
    pub fn trial(&self) -> Result<Trial<Symbol>> {
        let die = self.die()?;
        let dice = (0..self.dice)
            .map(|_| die.clone().shared())
            .collect::<Vec<_>>();
        match self.seed() {
            Some(seed) => Trial::seeded(dice, seed),
            None => Trial::new(dice),
        }
    }
}

/// FACE=WEIGHT
fn parse_weight(s: &str) -> std::result::Result<(Symbol, Weight), String> {
    let (face, weight) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FACE=WEIGHT, got {:?}", s))?;
    let weight = weight
        .trim()
        .parse::<Weight>()
        .map_err(|e| Error::InvalidWeight(format!("{:?}: {}", weight, e)).to_string())?;
    Ok((Symbol::from(face), weight))
}

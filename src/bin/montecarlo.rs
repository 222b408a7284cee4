//! Monte Carlo Binary
//!
//! Rolls a set of identical weighted dice and prints jackpots,
//! combinations, and per-roll face counts.

use clap::Parser;
use montecarlo::analysis::Analyzer;
use montecarlo::cli::Args;
use montecarlo::cli::Report;
use montecarlo::*;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.level())?;
    let mut trial = args.trial()?;
    log::info!(
        "rolling {} dice {} times (seed {})",
        args.dice,
        args.rolls,
        args.seed()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".into())
    );
    trial.play(args.rolls)?;
    let ref mut analyzer = Analyzer::from(trial);
    let report = Report::collect(analyzer, args.seed(), args.show.then_some(args.form));
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&report)?),
        false => print!("{}", report),
    }
    Ok(())
}

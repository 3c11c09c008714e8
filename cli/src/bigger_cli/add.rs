use std::time::Instant;

use anyhow::{Context, Result};
use bigger_bigint::BigInt;
use clap::Args;

use super::BiggerCli;
use crate::{operand_name, parse_operands, read_operands, Stats};

impl BiggerCli {
  pub fn add<const MAX_WORDS: usize>(&self, AddArgs { verbose, values }: &AddArgs) -> Result<()> {
    let start = Instant::now();
    let operands = parse_operands::<MAX_WORDS>(&read_operands(values)?)?;
    let sum = operands
      .iter()
      .try_fold(BigInt::ZERO, |sum: BigInt<MAX_WORDS>, operand| sum.checked_add(operand))
      .context("cannot add operands")?;

    if *verbose {
      for (i, operand) in operands.iter().enumerate() {
        println!("{} = {operand}", operand_name(i));
      }
      let names = (0..operands.len()).map(operand_name).collect::<Vec<_>>();
      println!("{} = {sum}", names.join(" + "));
    } else {
      println!("{sum}");
    }

    let mut stats = Stats::new(BigInt::<MAX_WORDS>::capacity());
    operands.iter().for_each(|operand| stats.record_operand(operand));
    stats.record_result(&sum);
    self.report(stats, start);
    Ok(())
  }
}

#[derive(Debug, Args)]
pub struct AddArgs {
  /// Print every operand, then the sum, in the form `a + b = ...`.
  #[arg(long, short)]
  pub verbose: bool,
  /// Decimal integers; read one per line from stdin if none are given.
  pub values: Vec<String>,
}

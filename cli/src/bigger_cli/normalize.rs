use std::time::Instant;

use anyhow::Result;
use bigger_bigint::BigInt;
use clap::Args;

use super::BiggerCli;
use crate::{parse_operands, read_operands, Stats};

impl BiggerCli {
  pub fn normalize<const MAX_WORDS: usize>(
    &self,
    NormalizeArgs { values }: &NormalizeArgs,
  ) -> Result<()> {
    let start = Instant::now();
    let operands = parse_operands::<MAX_WORDS>(&read_operands(values)?)?;
    let mut stats = Stats::new(BigInt::<MAX_WORDS>::capacity());
    for operand in &operands {
      println!("{operand}");
      stats.record_operand(operand);
      stats.record_result(operand);
    }
    self.report(stats, start);
    Ok(())
  }
}

#[derive(Debug, Args)]
pub struct NormalizeArgs {
  /// Decimal integers; read one per line from stdin if none are given.
  pub values: Vec<String>,
}

use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};
use bigger_bigint::BigInt;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Capacity {
  /// 32 words (288 digits)
  Small,
  /// 256 words (2304 digits)
  Standard,
  /// 4096 words (36864 digits)
  Large,
}

/// The operands given on the command line, or one per non-empty line of stdin
/// if there are none.
pub fn read_operands(args: &[String]) -> Result<Vec<String>> {
  if !args.is_empty() {
    return Ok(args.to_vec());
  }
  let mut operands = Vec::new();
  for line in io::stdin().lock().lines() {
    let line = line.context("cannot read stdin")?;
    let line = line.trim();
    if !line.is_empty() {
      operands.push(line.to_owned());
    }
  }
  if operands.is_empty() {
    bail!("expected at least one operand");
  }
  Ok(operands)
}

pub fn parse_operands<const MAX_WORDS: usize>(
  operands: &[String],
) -> Result<Vec<BigInt<MAX_WORDS>>> {
  operands
    .iter()
    .enumerate()
    .map(|(i, src)| {
      src.parse::<BigInt<MAX_WORDS>>().with_context(|| format!("cannot parse operand {}", i + 1))
    })
    .collect()
}

/// `a` through `z`, then `x27`, `x28`, ...
pub fn operand_name(index: usize) -> String {
  match u8::try_from(index) {
    Ok(index @ 0..=25) => char::from(b'a' + index).to_string(),
    _ => format!("x{}", index + 1),
  }
}

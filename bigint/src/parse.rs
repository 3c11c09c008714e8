use std::str::FromStr;

use crate::{BigInt, Error};

impl<const MAX_WORDS: usize> BigInt<MAX_WORDS> {
  /// Parses ASCII decimal digits, most significant first.
  ///
  /// Leading zeros are skipped, so an empty or all-zero string is zero. Any
  /// other character fails the whole parse.
  pub fn parse_decimal(src: &str) -> Result<Self, Error> {
    let digits = src.trim_start_matches('0');
    let skipped = src.len() - digits.len();
    let mut acc = Self::ZERO;
    for (index, ch) in digits.char_indices() {
      let digit = ch.to_digit(10).ok_or(Error::InvalidDigit { found: ch, index: skipped + index })?;
      acc.mul_add(10, digit)?;
    }
    acc.trim();
    Ok(acc)
  }
}

impl<const MAX_WORDS: usize> FromStr for BigInt<MAX_WORDS> {
  type Err = Error;

  fn from_str(src: &str) -> Result<Self, Error> {
    Self::parse_decimal(src)
  }
}

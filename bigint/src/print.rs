use std::fmt::{self, Display};

use crate::{BigInt, BASE_DIGITS};

impl<const MAX_WORDS: usize> BigInt<MAX_WORDS> {
  pub fn to_decimal_string(&self) -> String {
    self.to_string()
  }
}

impl<const MAX_WORDS: usize> Display for BigInt<MAX_WORDS> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let Some((top, rest)) = self.words().split_last() else {
      return f.write_str("0");
    };
    write!(f, "{top}")?;
    for word in rest.iter().rev() {
      write!(f, "{word:0width$}", width = BASE_DIGITS)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::decimal_samples;

  #[test]
  fn zero() {
    assert_eq!(BigInt::<4>::ZERO.to_decimal_string(), "0");
    assert_eq!(BigInt::<4>::parse_decimal("").unwrap().to_decimal_string(), "0");
    assert_eq!(BigInt::<4>::from_integer(0).unwrap().to_decimal_string(), "0");
  }

  #[test]
  fn pads_inner_words() {
    let big = BigInt::<4>::from_words(&[5, 0, 7]).unwrap();
    assert_eq!(big.to_decimal_string(), "7000000000000000005");
    let big = BigInt::<4>::from_words(&[999_999_999, 1]).unwrap();
    assert_eq!(big.to_decimal_string(), "1999999999");
  }

  #[test]
  fn round_trip() {
    for sample in decimal_samples() {
      let big: BigInt = sample.parse().unwrap();
      assert_eq!(big.to_decimal_string(), sample);
      assert_eq!(big.digit_count(), sample.len());
    }
  }

  #[test]
  fn leading_zeros_are_dropped() {
    assert_eq!(BigInt::<4>::parse_decimal("000123").unwrap().to_string(), "123");
  }

  #[test]
  fn reference_sum() {
    let a: BigInt = "1234567890123456712312389012345678901234567890".parse().unwrap();
    let b: BigInt = "9876543210987654321123123098765432109876543210".parse().unwrap();
    assert_eq!(
      a.checked_add(&b).unwrap().to_string(),
      "11111111101111111033435512111111111011111111100"
    );
  }
}

use num_bigint::BigUint;

use crate::{BigInt, BASE};

pub fn to_biguint<const MAX_WORDS: usize>(big: &BigInt<MAX_WORDS>) -> BigUint {
  big.words().iter().rev().fold(BigUint::default(), |acc, &word| acc * BASE + word)
}

/// Canonical decimal strings: edge values around word boundaries, the two
/// operands of the original demo, and pseudo-random values of growing length.
pub fn decimal_samples() -> Vec<String> {
  let mut samples: Vec<String> = [
    "0",
    "1",
    "9",
    "10",
    "999999999",
    "1000000000",
    "1000000001",
    "999999999999999999",
    "1000000000000000000",
    "1234567890123456712312389012345678901234567890",
    "9876543210987654321123123098765432109876543210",
  ]
  .into_iter()
  .map(String::from)
  .collect();

  let mut state = 0x9e37_79b9_7f4a_7c15u64;
  let mut next = move || {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    state
  };
  for len in [2, 8, 9, 10, 17, 18, 19, 27, 28, 45, 100, 333, 1000, 2000] {
    let digits = (0..len)
      .map(|i| {
        let digit = next() % 10;
        let digit = if i == 0 { digit.max(1) } else { digit };
        char::from(b'0' + digit as u8)
      })
      .collect();
    samples.push(digits);
  }
  samples
}

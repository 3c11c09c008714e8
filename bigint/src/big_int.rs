use std::{
  fmt::{self, Debug},
  hash::{Hash, Hasher},
};

use crate::{Error, BASE, BASE_DIGITS, DEFAULT_MAX_WORDS};

/// An unsigned integer held as base-10^9 words, least significant first, in a
/// fixed buffer of `MAX_WORDS` words.
///
/// A `BigInt` is always canonical: the most significant used word is non-zero,
/// zero has no words at all, and every slot past `len` is zero. Operations that
/// would need more than `MAX_WORDS` words fail with [`Error::CapacityExceeded`].
#[derive(Clone, Copy)]
pub struct BigInt<const MAX_WORDS: usize = DEFAULT_MAX_WORDS> {
  words: [u32; MAX_WORDS],
  len: usize,
}

impl<const MAX_WORDS: usize> BigInt<MAX_WORDS> {
  pub const ZERO: Self = BigInt { words: [0; MAX_WORDS], len: 0 };

  /// Splits `n` into as many words as it needs (at most three).
  pub fn from_integer(mut n: u64) -> Result<Self, Error> {
    let mut big = Self::ZERO;
    while n != 0 {
      big.push((n % BASE as u64) as u32)?;
      n /= BASE as u64;
    }
    Ok(big)
  }

  /// Builds a value from raw words, least significant first. Trailing zero words
  /// are dropped before the capacity is checked.
  pub fn from_words(words: &[u32]) -> Result<Self, Error> {
    if let Some(&word) = words.iter().find(|&&word| word >= BASE) {
      return Err(Error::WordOutOfRange { word });
    }
    let used = words.iter().rposition(|&word| word != 0).map_or(0, |i| i + 1);
    let mut big = Self::ZERO;
    for &word in &words[..used] {
      big.push(word)?;
    }
    Ok(big)
  }

  pub const fn capacity() -> usize {
    MAX_WORDS
  }

  pub fn words(&self) -> &[u32] {
    &self.words[..self.len]
  }

  pub fn word_count(&self) -> usize {
    self.len
  }

  pub fn is_zero(&self) -> bool {
    self.len == 0
  }

  /// The number of decimal digits in the canonical rendering; zero has one.
  pub fn digit_count(&self) -> usize {
    match self.words().last() {
      None => 1,
      Some(top) => (self.len - 1) * BASE_DIGITS + top.ilog10() as usize + 1,
    }
  }

  pub fn checked_add(&self, other: &Self) -> Result<Self, Error> {
    let mut sum = Self::ZERO;
    let mut carry = 0;
    // slots past `len` are zero, so the shorter operand reads as zero-extended
    for i in 0..self.len.max(other.len) {
      let total = self.words[i] as u64 + other.words[i] as u64 + carry;
      sum.push((total % BASE as u64) as u32)?;
      carry = total / BASE as u64;
    }
    if carry != 0 {
      sum.push(carry as u32)?;
    }
    sum.trim();
    Ok(sum)
  }

  /// `self = self * mul + add`; the caller keeps `mul` and `add` small enough
  /// that the final carry is a valid word.
  pub(crate) fn mul_add(&mut self, mul: u32, add: u32) -> Result<(), Error> {
    let mut carry = add as u64;
    for word in &mut self.words[..self.len] {
      let total = *word as u64 * mul as u64 + carry;
      *word = (total % BASE as u64) as u32;
      carry = total / BASE as u64;
    }
    if carry != 0 {
      self.push(carry as u32)?;
    }
    Ok(())
  }

  pub(crate) fn trim(&mut self) {
    while self.len > 0 && self.words[self.len - 1] == 0 {
      self.len -= 1;
    }
  }

  fn push(&mut self, word: u32) -> Result<(), Error> {
    debug_assert!(word < BASE);
    if self.len == MAX_WORDS {
      return Err(Error::CapacityExceeded { capacity: MAX_WORDS });
    }
    self.words[self.len] = word;
    self.len += 1;
    Ok(())
  }
}

impl<const MAX_WORDS: usize> Default for BigInt<MAX_WORDS> {
  fn default() -> Self {
    Self::ZERO
  }
}

impl<const MAX_WORDS: usize> PartialEq for BigInt<MAX_WORDS> {
  fn eq(&self, other: &Self) -> bool {
    self.words() == other.words()
  }
}

impl<const MAX_WORDS: usize> Eq for BigInt<MAX_WORDS> {}

impl<const MAX_WORDS: usize> Hash for BigInt<MAX_WORDS> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.words().hash(state);
  }
}

impl<const MAX_WORDS: usize> Debug for BigInt<MAX_WORDS> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("BigInt").field(&self.words()).finish()
  }
}

mod big_int;
mod error;
mod parse;
mod print;

pub use big_int::*;
pub use error::*;

/// The radix of a word.
pub const BASE: u32 = 1_000_000_000;

/// The number of decimal digits in a full word.
pub const BASE_DIGITS: usize = 9;

pub const DEFAULT_MAX_WORDS: usize = capacity::STANDARD;

/// Named word capacities for `BigInt`.
pub mod capacity {
  pub const SMALL: usize = 32;
  pub const STANDARD: usize = 256;
  pub const LARGE: usize = 4096;
}

#[cfg(test)]
mod testing;

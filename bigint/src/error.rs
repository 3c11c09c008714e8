#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  #[error("invalid digit in input: {found:?} at byte {index}")]
  InvalidDigit { found: char, index: usize },
  #[error("overflow; value needs more than {capacity} words")]
  CapacityExceeded { capacity: usize },
  #[error("word {word} is not below the base of 1000000000")]
  WordOutOfRange { word: u32 },
}

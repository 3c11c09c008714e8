use std::{
  fmt::{self, Display},
  time::Duration,
};

use bigger_bigint::BigInt;

/// Sizes and timing of one command, printed to stderr with `--stats`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stats {
  /// The configured capacity, in words.
  pub capacity: u64,

  pub operands: u64,
  pub operand_words: u64,
  pub operand_digits: u64,

  pub results: u64,
  pub result_words: u64,
  pub result_digits: u64,
  /// The largest word count of any result; a high water mark against `capacity`.
  pub result_max_words: u64,

  pub time: Duration,
}

impl Stats {
  pub fn new(capacity: usize) -> Self {
    Stats { capacity: capacity as u64, ..Default::default() }
  }

  pub fn record_operand<const MAX_WORDS: usize>(&mut self, operand: &BigInt<MAX_WORDS>) {
    self.operands += 1;
    self.operand_words += operand.word_count() as u64;
    self.operand_digits += operand.digit_count() as u64;
  }

  pub fn record_result<const MAX_WORDS: usize>(&mut self, result: &BigInt<MAX_WORDS>) {
    self.results += 1;
    self.result_words += result.word_count() as u64;
    self.result_digits += result.digit_count() as u64;
    self.result_max_words = self.result_max_words.max(result.word_count() as u64);
  }
}

impl Display for Stats {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let lines = [
      ("Operands", None),
      ("  Count", Some((self.operands, ""))),
      ("  Words", Some((self.operand_words, ""))),
      ("  Digits", Some((self.operand_digits, ""))),
      ("", None),
      ("Results", None),
      ("  Count", Some((self.results, ""))),
      ("  Words", Some((self.result_words, ""))),
      ("  Digits", Some((self.result_digits, ""))),
      ("  Largest", Some((self.result_max_words, "words"))),
      ("  Capacity", Some((self.capacity, "words"))),
      ("", None),
      ("Performance", None),
      ("  Time", Some((self.time.as_micros() as u64, "us"))),
    ];

    let label_width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = lines
      .iter()
      .filter_map(|(_, value)| value.map(|(value, _)| Grouped(value).to_string().len()))
      .max()
      .unwrap_or(0)
      .max(Grouped(1_000_000).to_string().len());

    for (label, value) in lines {
      match value {
        None => write!(f, "\n{label}")?,
        Some((value, "")) => {
          write!(f, "\n{label:<label_width$}   {:>value_width$}", Grouped(value))?
        }
        Some((value, unit)) => {
          write!(f, "\n{label:<label_width$}   {:>value_width$} {unit}", Grouped(value))?
        }
      }
    }

    Ok(())
  }
}

/// An integer written with `_` between groups of three digits.
struct Grouped(u64);

impl Display for Grouped {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = self.0.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
      if i != 0 && (digits.len() - i) % 3 == 0 {
        grouped.push('_');
      }
      grouped.push(ch);
    }
    f.pad(&grouped)
  }
}

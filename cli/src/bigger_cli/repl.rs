use anyhow::Result;
use bigger_bigint::BigInt;
use rustyline::{error::ReadlineError, DefaultEditor};

use super::BiggerCli;

impl BiggerCli {
  /// Adds each entered integer to a running total. Bad input is reported and
  /// leaves the total unchanged.
  pub fn repl<const MAX_WORDS: usize>(&self) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut total = BigInt::<MAX_WORDS>::ZERO;
    loop {
      let line = match editor.readline("+ ") {
        Ok(line) => line,
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
        Err(err) => return Err(err.into()),
      };
      let line = line.trim();
      if line.is_empty() {
        continue;
      }
      editor.add_history_entry(line)?;
      if line == "reset" {
        total = BigInt::ZERO;
      } else {
        match line.parse::<BigInt<MAX_WORDS>>().and_then(|operand| total.checked_add(&operand)) {
          Ok(sum) => total = sum,
          Err(err) => {
            eprintln!("error: {err}");
            continue;
          }
        }
      }
      println!("{total}");
    }
    Ok(())
  }
}

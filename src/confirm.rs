//! Manual confirmation gate
//!
//! The withdrawal flow stops twice and asks the operator to proceed. The
//! capability is a trait so tests can script the answers.

use eyre::{Context, Result};
use std::io::{self, Write};

/// Asks the operator whether to proceed
pub trait Confirm {
    /// Returns true only on an explicit affirmative answer
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Blocking stdin prompt; only the exact answer "y" proceeds
pub struct StdinConfirmer;

impl Confirm for StdinConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        print!("{prompt} ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut answer = String::new();
        io::stdin()
            .read_line(&mut answer)
            .context("Failed to read confirmation")?;

        Ok(answer.trim() == "y")
    }
}

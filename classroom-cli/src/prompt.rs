//! Terminal implementation of the confirmation / acknowledgement port.

use classroom_core::Interaction;
use colored::Colorize;
use std::io::{self, BufRead, Write};

pub struct TerminalInteraction {
    assume_yes: bool,
}

impl TerminalInteraction {
    pub const fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Interaction for TerminalInteraction {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{} [y/N] ", prompt.yellow());
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => is_affirmative(&line),
            Err(e) => {
                tracing::warn!("Could not read confirmation: {}", e);
                false
            }
        }
    }

    fn notify(&self, message: &str) {
        println!("{}", message.green());
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative(" YES "));
        assert!(!is_affirmative("\n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yep"));
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        assert!(TerminalInteraction::new(true).confirm("Delete?"));
    }
}

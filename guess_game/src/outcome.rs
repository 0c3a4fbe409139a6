use std::cmp::Ordering;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GuessOutcome {
    TooLow,
    TooHigh,
    Correct,
}

impl GuessOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            GuessOutcome::TooLow => "Oops. Your guess was LOW.",
            GuessOutcome::TooHigh => "Oops. Your guess was HIGH.",
            GuessOutcome::Correct => "Good job! You guessed it!",
        }
    }
}

pub fn classify(guess: i64, target: i64) -> GuessOutcome {
    match guess.cmp(&target) {
        Ordering::Less => GuessOutcome::TooLow,
        Ordering::Greater => GuessOutcome::TooHigh,
        Ordering::Equal => GuessOutcome::Correct,
    }
}

/// How a session ended. There is no third variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum SessionOutcome {
    Won { attempts: u32, target: i64 },
    Exhausted { target: i64 },
}

impl SessionOutcome {
    pub fn target(&self) -> i64 {
        match *self {
            SessionOutcome::Won { target, .. } | SessionOutcome::Exhausted { target } => target,
        }
    }

    pub fn is_won(&self) -> bool {
        matches!(self, SessionOutcome::Won { .. })
    }
}

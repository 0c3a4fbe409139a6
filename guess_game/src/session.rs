//! The guessing loop.
//!
//! A [`Session`] owns the target and the attempt counter. [`play`] drives it
//! against a line source and a line sink until it reaches a terminal outcome.
//! Lines that do not parse as an integer move the session into
//! [`Phase::AwaitingValidInput`] and are never charged as an attempt.

use log::{debug, info, trace};

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::io::{LineSink, LineSource};
use crate::outcome::{GuessOutcome, SessionOutcome, classify};
use crate::random::TargetSource;

pub const INVALID_INPUT_MSG: &str = "Invalid input. Please enter a number.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// The last line was rejected; the same attempt number is still open.
    AwaitingValidInput,
    Done(SessionOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Invalid,
    Guess(GuessOutcome),
}

#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    target: i64,
    attempts_used: u32,
    invalid_inputs: u32,
    guesses: Vec<i64>,
    phase: Phase,
}

impl Session {
    pub fn new(config: GameConfig, source: &mut impl TargetSource) -> Self {
        let target = source.pick(config.range);
        debug!("drew target {target} from {}", config.range);
        Self {
            config,
            target,
            attempts_used: 0,
            invalid_inputs: 0,
            guesses: Vec::new(),
            phase: Phase::Playing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<SessionOutcome> {
        match self.phase {
            Phase::Done(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// 1-based number of the attempt the next valid guess will use.
    pub fn attempt(&self) -> u32 {
        self.attempts_used + 1
    }

    pub fn remaining(&self) -> u32 {
        self.config.max_attempts - self.attempts_used
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn invalid_inputs(&self) -> u32 {
        self.invalid_inputs
    }

    pub fn guesses(&self) -> &[i64] {
        &self.guesses
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn submit(&mut self, line: &str) -> Result<Feedback> {
        if let Phase::Done(_) = self.phase {
            return Err(GameError::SessionFinished);
        }

        let guess: i64 = match line.trim().parse() {
            Ok(num) => num,
            Err(_) => {
                debug!("rejected input {line:?} at guess #{}", self.attempt());
                self.invalid_inputs += 1;
                self.phase = Phase::AwaitingValidInput;
                return Ok(Feedback::Invalid);
            }
        };

        self.attempts_used += 1;
        self.guesses.push(guess);
        let verdict = classify(guess, self.target);
        trace!("guess #{} = {guess} -> {verdict:?}", self.attempts_used);

        self.phase = match verdict {
            GuessOutcome::Correct => Phase::Done(SessionOutcome::Won {
                attempts: self.attempts_used,
                target: self.target,
            }),
            _ if self.attempts_used == self.config.max_attempts => {
                Phase::Done(SessionOutcome::Exhausted {
                    target: self.target,
                })
            }
            _ => Phase::Playing,
        };
        Ok(Feedback::Guess(verdict))
    }
}

/// A finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub outcome: SessionOutcome,
    pub guesses: Vec<i64>,
    pub invalid_inputs: u32,
}

pub fn play(
    config: GameConfig,
    source: &mut impl TargetSource,
    input: &mut impl LineSource,
    output: &mut impl LineSink,
) -> Result<Summary> {
    let mut session = Session::new(config, source);
    let tries = if config.max_attempts == 1 { "try" } else { "tries" };
    output.write_line(&format!(
        "I've chosen a random number between {} and {}.",
        config.range.low(),
        config.range.high()
    ))?;
    output.write_line(&format!(
        "Can you guess it? You have {} {tries}.",
        config.max_attempts
    ))?;

    loop {
        if let Some(outcome) = session.outcome() {
            if let SessionOutcome::Exhausted { target } = outcome {
                output.write_line(&format!(
                    "Sorry, you didn't guess my number. It was: {target}"
                ))?;
            }
            info!(
                "session finished: {outcome:?} ({} invalid inputs)",
                session.invalid_inputs()
            );
            return Ok(Summary {
                outcome,
                guesses: session.guesses,
                invalid_inputs: session.invalid_inputs,
            });
        }

        output.write_line(&format!(
            "Guess #{} (You have {} guesses left):",
            session.attempt(),
            session.remaining()
        ))?;

        let line = input
            .read_line()?
            .ok_or_else(|| GameError::InputExhausted {
                attempt: session.attempt(),
                max_attempts: config.max_attempts,
            })?;

        match session.submit(&line)? {
            Feedback::Invalid => output.write_line(INVALID_INPUT_MSG)?,
            Feedback::Guess(verdict) => output.write_line(verdict.message())?,
        }
    }
}

pub fn run_session(
    config: GameConfig,
    source: &mut impl TargetSource,
    input: &mut impl LineSource,
    output: &mut impl LineSink,
) -> Result<SessionOutcome> {
    play(config, source, input, output).map(|summary| summary.outcome)
}

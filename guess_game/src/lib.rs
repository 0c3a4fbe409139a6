//! Number-guessing game.
//!
//! One session draws a hidden target from a range, then reads guesses line by
//! line and answers LOW, HIGH or correct until the player wins or runs out of
//! tries. Input, output and the random source are all injected so a session
//! can be driven from canned input.

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod outcome;
pub mod random;
pub mod report;
pub mod session;

pub use config::{GameConfig, GuessRange};
pub use error::{GameError, Result};
pub use io::{LineSink, LineSource};
pub use outcome::{GuessOutcome, SessionOutcome, classify};
pub use random::{FixedTarget, RngTarget, TargetSource};
pub use report::SessionReport;
pub use session::{Feedback, Phase, Session, Summary, play, run_session};

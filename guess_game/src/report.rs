use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::{DurationMilliSeconds, serde_as};

use crate::config::{GameConfig, GuessRange};
use crate::outcome::SessionOutcome;
use crate::session::Summary;

#[serde_as]
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    pub target: i64,
    pub attempts_used: u32,
    pub max_attempts: u32,
    pub range: GuessRange,
    pub guesses: Vec<i64>,
    pub invalid_inputs: u32,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub elapsed: Duration,
    pub finished_at: DateTime<Utc>,
}

impl SessionReport {
    pub fn new(config: &GameConfig, summary: Summary, elapsed: Duration) -> Self {
        Self {
            outcome: summary.outcome,
            target: summary.outcome.target(),
            attempts_used: summary.guesses.len() as u32,
            max_attempts: config.max_attempts,
            range: config.range,
            guesses: summary.guesses,
            invalid_inputs: summary.invalid_inputs,
            elapsed,
            finished_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

use std::fmt;

use serde::Serialize;

use crate::error::{GameError, Result};

pub const DEFAULT_LOW: i64 = 1;
pub const DEFAULT_HIGH: i64 = 100;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Inclusive `[low, high]` range the target is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuessRange {
    low: i64,
    high: i64,
}

impl GuessRange {
    pub fn new(low: i64, high: i64) -> Result<Self> {
        if low > high {
            return Err(GameError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    pub fn contains(&self, n: i64) -> bool {
        self.low <= n && n <= self.high
    }
}

impl fmt::Display for GuessRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.low, self.high)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    pub range: GuessRange,
    pub max_attempts: u32,
}

impl GameConfig {
    pub fn new(low: i64, high: i64, max_attempts: u32) -> Result<Self> {
        if max_attempts == 0 {
            return Err(GameError::NoAttempts);
        }
        Ok(Self {
            range: GuessRange::new(low, high)?,
            max_attempts,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            range: GuessRange {
                low: DEFAULT_LOW,
                high: DEFAULT_HIGH,
            },
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_to_hundred_with_ten_tries() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.range.low(), 1);
        assert_eq!(cfg.range.high(), 100);
        assert_eq!(cfg.max_attempts, 10);
    }

    #[test]
    fn test_single_value_range_is_allowed() {
        let range = GuessRange::new(1, 1).unwrap();
        assert!(range.contains(1));
        assert!(!range.contains(0));
        assert!(!range.contains(2));
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let err = GuessRange::new(10, 1).unwrap_err();
        assert!(matches!(err, GameError::InvalidRange { low: 10, high: 1 }));
    }

    #[test]
    fn test_zero_attempts_is_rejected() {
        let err = GameConfig::new(1, 100, 0).unwrap_err();
        assert!(matches!(err, GameError::NoAttempts));
    }

    #[test]
    fn test_range_display() {
        let range = GuessRange::new(-5, 5).unwrap();
        assert_eq!(range.to_string(), "-5..=5");
    }
}

use crate::error::{ChallengeError, Result};

/// Sum of 1..=n. Cannot overflow for any `u32`.
pub fn sum_to(n: u32) -> u64 {
    let n = u64::from(n);
    n * (n + 1) / 2
}

/// Sum of `low, low + |step|, ...` up to and including `high`.
pub fn sum_with_step(low: i64, high: i64, step: i64) -> Result<i64> {
    if step == 0 {
        return Err(ChallengeError::ZeroStep);
    }
    let step = step.checked_abs().ok_or(ChallengeError::StepOverflow)?;

    let mut total: i64 = 0;
    let mut current = low;
    while current <= high {
        total = total
            .checked_add(current)
            .ok_or(ChallengeError::SumOverflow { low, high, step })?;
        current = match current.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_to() {
        assert_eq!(sum_to(100), 5050);
        assert_eq!(sum_to(10), 55);
        assert_eq!(sum_to(0), 0);
    }

    #[test]
    fn test_sum_to_largest_input() {
        assert_eq!(sum_to(u32::MAX), 9_223_372_034_707_292_160);
    }

    #[test]
    fn test_sum_to_matches_stepped_sum() {
        for n in [1u32, 2, 7, 1000] {
            assert_eq!(sum_to(n) as i64, sum_with_step(1, i64::from(n), 1).unwrap());
        }
    }

    #[test]
    fn test_sum_with_step() {
        assert_eq!(sum_with_step(0, 100, 1).unwrap(), 5050);
        assert_eq!(sum_with_step(0, 10, 2).unwrap(), 30);
        assert_eq!(sum_with_step(5, 15, 3).unwrap(), 5 + 8 + 11 + 14);
    }

    #[test]
    fn test_negative_step_is_made_positive() {
        assert_eq!(sum_with_step(0, 10, -2).unwrap(), 30);
    }

    #[test]
    fn test_empty_range() {
        assert_eq!(sum_with_step(10, 1, 1).unwrap(), 0);
    }

    #[test]
    fn test_zero_step_is_rejected() {
        assert!(matches!(sum_with_step(0, 10, 0), Err(ChallengeError::ZeroStep)));
    }

    #[test]
    fn test_min_step_overflows() {
        assert!(matches!(
            sum_with_step(0, 10, i64::MIN),
            Err(ChallengeError::StepOverflow)
        ));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(matches!(
            sum_with_step(i64::MAX - 1, i64::MAX, 1),
            Err(ChallengeError::SumOverflow { .. })
        ));
    }

    #[test]
    fn test_stops_at_i64_max() {
        assert_eq!(sum_with_step(i64::MAX, i64::MAX, 1).unwrap(), i64::MAX);
    }
}

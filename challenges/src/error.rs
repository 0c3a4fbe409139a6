use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChallengeError {
    #[error("step must not be zero")]
    ZeroStep,

    #[error("step is too large")]
    StepOverflow,

    #[error("sum of {low}..={high} (step {step}) does not fit in 64 bits")]
    SumOverflow { low: i64, high: i64, step: i64 },
}

pub type Result<T> = std::result::Result<T, ChallengeError>;

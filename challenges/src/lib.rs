//! Solutions to the beginner challenge set: FizzBuzz, a password checker and
//! sums over integer ranges.

pub mod error;
pub mod fizzbuzz;
pub mod password;
pub mod sum;

pub use error::{ChallengeError, Result};
pub use fizzbuzz::{fizzbuzz, fizzbuzz_sequence};
pub use password::{PasswordIssue, PasswordReport, check_password};
pub use sum::{sum_to, sum_with_step};

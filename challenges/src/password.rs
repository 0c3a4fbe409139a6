use std::fmt;

use serde::Serialize;

pub const MIN_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordIssue {
    TooShort,
    NoUppercase,
    NoNumber,
}

impl fmt::Display for PasswordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordIssue::TooShort => {
                write!(f, "Must be at least {MIN_LENGTH} characters long.")
            }
            PasswordIssue::NoUppercase => write!(f, "Must contain at least one uppercase letter."),
            PasswordIssue::NoNumber => write!(f, "Must contain at least one number."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordReport {
    pub password: String,
    pub has_min_length: bool,
    pub has_uppercase: bool,
    pub has_number: bool,
}

impl PasswordReport {
    pub fn is_valid(&self) -> bool {
        self.has_min_length && self.has_uppercase && self.has_number
    }

    /// Failed rules in check order.
    pub fn issues(&self) -> Vec<PasswordIssue> {
        let mut issues = Vec::new();
        if !self.has_min_length {
            issues.push(PasswordIssue::TooShort);
        }
        if !self.has_uppercase {
            issues.push(PasswordIssue::NoUppercase);
        }
        if !self.has_number {
            issues.push(PasswordIssue::NoNumber);
        }
        issues
    }
}

pub fn check_password(password: &str) -> PasswordReport {
    PasswordReport {
        password: password.to_string(),
        has_min_length: password.chars().count() >= MIN_LENGTH,
        has_uppercase: password.chars().any(char::is_uppercase),
        has_number: password.chars().any(char::is_numeric),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_valid_password() {
        let report = check_password("Password123");
        assert!(report.is_valid());
        assert!(report.issues().is_empty());
    }

    #[test]
    fn test_short_password_fails_every_rule() {
        let report = check_password("short");
        assert_eq!(
            report.issues(),
            vec![
                PasswordIssue::TooShort,
                PasswordIssue::NoUppercase,
                PasswordIssue::NoNumber
            ]
        );
    }

    #[test]
    fn test_missing_number() {
        assert_eq!(check_password("LongPassword").issues(), vec![PasswordIssue::NoNumber]);
    }

    #[test]
    fn test_missing_uppercase() {
        assert_eq!(check_password("password123").issues(), vec![PasswordIssue::NoUppercase]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 7 chars, 14 bytes
        let report = check_password("ÄÖÜäöü1");
        assert!(!report.has_min_length);
        assert!(report.has_uppercase);
        assert!(report.has_number);
    }

    #[test]
    fn test_issue_messages() {
        assert_eq!(
            PasswordIssue::TooShort.to_string(),
            "Must be at least 8 characters long."
        );
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Password strength scoring for the signup form.
//!
//! Five independent checks each contribute one point; the total maps to a
//! coarse level shown in the strength meter. Signup requires at least `Fair`.

/// Individual checks contributing to the strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checks {
    pub length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

/// Coarse strength level derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Weak,
    Fair,
    Good,
    Strong,
}

impl Level {
    /// The i18n key for the strength meter label.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            Level::Weak => "password-strength-weak",
            Level::Fair => "password-strength-fair",
            Level::Good => "password-strength-good",
            Level::Strong => "password-strength-strong",
        }
    }
}

/// Result of scoring a candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub score: u8,
    pub level: Level,
    pub checks: Checks,
}

impl Strength {
    /// Whether the password clears the signup threshold.
    #[must_use]
    pub fn is_acceptable(self) -> bool {
        self.score >= 3
    }
}

/// Scores a candidate password.
#[must_use]
pub fn strength(password: &str) -> Strength {
    let checks = Checks {
        length: password.chars().count() >= 8,
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        digit: password.chars().any(|c| c.is_ascii_digit()),
        symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
    };

    let score = [
        checks.length,
        checks.lowercase,
        checks.uppercase,
        checks.digit,
        checks.symbol,
    ]
    .iter()
    .filter(|passed| **passed)
    .count() as u8;

    let level = match score {
        5 => Level::Strong,
        4 => Level::Good,
        3 => Level::Fair,
        _ => Level::Weak,
    };

    Strength {
        score,
        level,
        checks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_weak() {
        let s = strength("");
        assert_eq!(s.score, 0);
        assert_eq!(s.level, Level::Weak);
        assert!(!s.is_acceptable());
    }

    #[test]
    fn all_checks_give_strong() {
        let s = strength("Tr4ining!Day");
        assert_eq!(s.score, 5);
        assert_eq!(s.level, Level::Strong);
        assert!(s.is_acceptable());
    }

    #[test]
    fn three_checks_give_fair() {
        // lowercase + uppercase + digit, but short and no symbol
        let s = strength("Abc123");
        assert_eq!(s.score, 3);
        assert_eq!(s.level, Level::Fair);
        assert!(s.is_acceptable());
    }

    #[test]
    fn four_checks_give_good() {
        // length + lowercase + uppercase + digit
        let s = strength("Abcdefg123");
        assert_eq!(s.score, 4);
        assert_eq!(s.level, Level::Good);
    }

    #[test]
    fn lowercase_digits_only_is_weak() {
        let s = strength("12345a");
        assert_eq!(s.score, 2);
        assert_eq!(s.level, Level::Weak);
        assert!(!s.is_acceptable());
    }

    #[test]
    fn levels_order_by_strength() {
        assert!(Level::Weak < Level::Fair);
        assert!(Level::Fair < Level::Good);
        assert!(Level::Good < Level::Strong);
    }

    #[test]
    fn message_keys_are_distinct() {
        let keys = [
            Level::Weak.message_key(),
            Level::Fair.message_key(),
            Level::Good.message_key(),
            Level::Strong.message_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}

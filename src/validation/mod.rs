// SPDX-License-Identifier: MPL-2.0
//! Field validators shared by every form in the application.
//!
//! Validators are pure predicates over the raw field text. Each form collects
//! every failure into an ordered list of message keys so the user sees one
//! combined error toast per submission attempt, and records a per-field
//! [`FieldStatus`] used to highlight inputs.

pub mod password;

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\-\(\)]{10,}$").expect("phone regex"));

/// Visual validation state of a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// Untouched or cleared by editing.
    #[default]
    Neutral,
    Valid,
    Invalid,
}

impl FieldStatus {
    /// Converts a validation outcome into a highlight state.
    #[must_use]
    pub fn from_valid(is_valid: bool) -> Self {
        if is_valid {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }

    #[must_use]
    pub fn is_invalid(self) -> bool {
        self == FieldStatus::Invalid
    }
}

/// Returns true for a plausible email address.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns true for a plausible phone number.
///
/// Whitespace is stripped before matching; at least ten digits or separator
/// characters must remain, with an optional leading `+`.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

/// Returns true when the trimmed value has at least `min` characters.
#[must_use]
pub fn has_min_len(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// Returns true for a non-empty selection value.
#[must_use]
pub fn is_selected<T>(value: &Option<T>) -> bool {
    value.is_some()
}

/// Accumulates validation failures for one submission attempt.
///
/// Failures keep insertion order so the combined error toast lists them in
/// the same order the fields appear on screen.
#[derive(Debug, Default)]
pub struct ErrorList {
    keys: Vec<&'static str>,
}

impl ErrorList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `key` as a failure unless `ok` holds, returning the outcome
    /// as a [`FieldStatus`] for field highlighting.
    pub fn check(&mut self, ok: bool, key: &'static str) -> FieldStatus {
        if !ok {
            self.keys.push(key);
        }
        FieldStatus::from_valid(ok)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[must_use]
    pub fn into_keys(self) -> Vec<&'static str> {
        self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_email() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@training.example.org"));
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("no-at.example.com"));
        assert!(!is_valid_email("spaces in@mail.com"));
        assert!(!is_valid_email("missing@tld"));
    }

    #[test]
    fn accepts_phone_with_separators() {
        assert!(is_valid_phone("0123456789"));
        assert!(is_valid_phone("+27 11 555 0199"));
        assert!(is_valid_phone("(011) 555-0199"));
    }

    #[test]
    fn rejects_short_or_lettered_phone() {
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("phone number"));
    }

    #[test]
    fn min_len_trims_before_counting() {
        assert!(has_min_len("  ab  ", 2));
        assert!(!has_min_len("  a  ", 2));
        assert!(!has_min_len("         ", 1));
    }

    #[test]
    fn error_list_preserves_order() {
        let mut errors = ErrorList::new();
        assert_eq!(
            errors.check(false, "error-email-invalid"),
            FieldStatus::Invalid
        );
        assert_eq!(
            errors.check(true, "error-phone-invalid"),
            FieldStatus::Valid
        );
        assert_eq!(
            errors.check(false, "error-name-too-short"),
            FieldStatus::Invalid
        );

        assert_eq!(
            errors.into_keys(),
            vec!["error-email-invalid", "error-name-too-short"]
        );
    }

    #[test]
    fn empty_error_list_reports_empty() {
        let mut errors = ErrorList::new();
        errors.check(true, "error-email-invalid");
        assert!(errors.is_empty());
    }
}

//! # Field Validators
//!
//! Reusable field-level validation rules for forms.
//!
//! ## Validator Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Field Validator Contract                           │
//! │                                                                         │
//! │  A validator is a pure closure:  Fn(&str) -> Option<ValidationError>    │
//! │                                                                         │
//! │  • None                 → value passes this rule                        │
//! │  • Some(error)          → value fails, error.code() names the rule      │
//! │                                                                         │
//! │  EMPTINESS RULE                                                         │
//! │  Every rule except `required` passes an empty value. Absence is         │
//! │  exclusively `required`'s concern; a format rule on an optional field   │
//! │  must stay silent until the user actually types something.              │
//! │                                                                         │
//! │  SNAPSHOT RULE                                                          │
//! │  Rules parameterized by external state (sufficient_funds) capture a     │
//! │  SNAPSHOT at construction. The consumer rebuilds the validator when     │
//! │  the underlying state changes - closures are never assumed fresh.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use banca_core::validation::sufficient_funds;
//! use banca_core::Money;
//!
//! let gate = sufficient_funds(Money::from_cents(10_000));
//! assert!(gate("150").is_some()); // $150 > $100 balance
//! assert!(gate("100").is_none());
//! ```

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::error::ValidationError;
use crate::money::Money;

/// A field-level validation rule.
pub type FieldValidator = Box<dyn Fn(&str) -> Option<ValidationError> + Send + Sync>;

// =============================================================================
// Presence & Length
// =============================================================================

/// Fails on empty or whitespace-only values. The only rule that cares about
/// absence.
pub fn required(field: &str) -> FieldValidator {
    let field = field.to_string();
    Box::new(move |value| {
        if value.trim().is_empty() {
            Some(ValidationError::Required {
                field: field.clone(),
            })
        } else {
            None
        }
    })
}

/// Fails when a non-empty value is shorter than `min` characters.
pub fn min_length(field: &str, min: usize) -> FieldValidator {
    let field = field.to_string();
    Box::new(move |value| {
        if value.is_empty() {
            return None;
        }
        if value.chars().count() < min {
            Some(ValidationError::TooShort {
                field: field.clone(),
                min,
            })
        } else {
            None
        }
    })
}

/// Fails when a non-empty, trimmed value is shorter than `min` characters.
/// Separate code from `min_length` so address feedback stays specific.
pub fn address_min_length(min: usize) -> FieldValidator {
    Box::new(move |value| {
        if value.is_empty() {
            return None;
        }
        if value.trim().chars().count() < min {
            Some(ValidationError::AddressTooShort { required_min: min })
        } else {
            None
        }
    })
}

/// Fails when a description exceeds `max` characters.
pub fn description_max_length(max: usize) -> FieldValidator {
    Box::new(move |value| {
        let actual = value.chars().count();
        if value.is_empty() || actual <= max {
            None
        } else {
            Some(ValidationError::DescriptionTooLong { max, actual })
        }
    })
}

// =============================================================================
// Numeric Bounds
// =============================================================================
// Bound rules parse the value as a number and compare against an inclusive
// bound. Unparseable input passes: format is `currency_format`'s concern.

/// Fails unless the amount is strictly positive.
pub fn positive_amount() -> FieldValidator {
    Box::new(|value| match Money::parse(value) {
        Some(amount) if !amount.is_positive() => Some(ValidationError::NotPositiveAmount),
        _ => None,
    })
}

/// Fails when the amount is below `min` (inclusive bound).
pub fn min_transaction_amount(min: Money) -> FieldValidator {
    Box::new(move |value| match Money::parse(value) {
        Some(amount) if amount < min => Some(ValidationError::MinTransactionAmount {
            required_min: min,
            actual: amount,
        }),
        _ => None,
    })
}

/// Fails when the amount exceeds `max` (inclusive bound).
pub fn max_transaction_amount(max: Money) -> FieldValidator {
    Box::new(move |value| match Money::parse(value) {
        Some(amount) if amount > max => Some(ValidationError::MaxTransactionAmount {
            allowed_max: max,
            actual: amount,
        }),
        _ => None,
    })
}

/// Fails when an opening balance is below `min`.
pub fn min_initial_balance(min: Money) -> FieldValidator {
    Box::new(move |value| match Money::parse(value) {
        Some(amount) if amount < min => Some(ValidationError::MinInitialBalance {
            required_min: min,
            actual: amount,
        }),
        _ => None,
    })
}

/// Fails when a balance exceeds `max`.
pub fn max_balance(max: Money) -> FieldValidator {
    Box::new(move |value| match Money::parse(value) {
        Some(amount) if amount > max => Some(ValidationError::MaxBalance {
            allowed_max: max,
            actual: amount,
        }),
        _ => None,
    })
}

/// Fails when the amount exceeds the available balance.
///
/// `available` is a snapshot taken at construction time. Reattach the rule
/// whenever the selected account changes; it does not track the account.
pub fn sufficient_funds(available: Money) -> FieldValidator {
    Box::new(move |value| match Money::parse(value) {
        Some(requested) if requested > available => Some(ValidationError::InsufficientFunds {
            available,
            requested,
        }),
        _ => None,
    })
}

// =============================================================================
// Pattern Rules
// =============================================================================

fn currency_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("valid currency pattern"))
}

fn account_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{10}$").expect("valid account number pattern"))
}

fn dni_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{8}$").expect("valid DNI pattern"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{9}$").expect("valid phone pattern"))
}

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$").expect("valid name pattern"))
}

/// Digits with at most two decimal places ("150", "150.7", "150.75").
pub fn currency_format() -> FieldValidator {
    Box::new(|value| {
        if value.is_empty() {
            return None;
        }
        if currency_regex().is_match(value.trim()) {
            None
        } else {
            Some(ValidationError::InvalidCurrencyFormat)
        }
    })
}

/// Exactly 10 digits.
pub fn account_number() -> FieldValidator {
    Box::new(|value| {
        if value.is_empty() {
            return None;
        }
        if account_number_regex().is_match(value) {
            None
        } else {
            Some(ValidationError::InvalidAccountNumber)
        }
    })
}

/// Parameterized digit-count range, like `new RegExp` on the fly.
pub fn account_number_range(min_digits: usize, max_digits: usize) -> FieldValidator {
    let pattern = Regex::new(&format!(r"^[0-9]{{{},{}}}$", min_digits, max_digits))
        .expect("valid account range pattern");
    Box::new(move |value| {
        if value.is_empty() {
            return None;
        }
        if pattern.is_match(value) {
            None
        } else {
            Some(ValidationError::AccountNumberOutOfRange {
                min_digits,
                max_digits,
            })
        }
    })
}

/// Peruvian national ID: exactly 8 digits.
pub fn dni() -> FieldValidator {
    Box::new(|value| {
        if value.is_empty() {
            return None;
        }
        if dni_regex().is_match(value) {
            None
        } else {
            Some(ValidationError::InvalidDni)
        }
    })
}

/// Peruvian mobile number: exactly 9 digits.
pub fn phone() -> FieldValidator {
    Box::new(|value| {
        if value.is_empty() {
            return None;
        }
        if phone_regex().is_match(value) {
            None
        } else {
            Some(ValidationError::InvalidPhone)
        }
    })
}

/// Letters (including Spanish accents) and spaces only.
pub fn name_format() -> FieldValidator {
    Box::new(|value| {
        if value.is_empty() {
            return None;
        }
        if name_regex().is_match(value) {
            None
        } else {
            Some(ValidationError::InvalidNameFormat)
        }
    })
}

/// Same character set as names, distinct code for occupation feedback.
pub fn occupation() -> FieldValidator {
    Box::new(|value| {
        if value.is_empty() {
            return None;
        }
        if name_regex().is_match(value) {
            None
        } else {
            Some(ValidationError::InvalidOccupation)
        }
    })
}

/// Requires an upper-case letter, a lower-case letter and a digit.
pub fn strong_password() -> FieldValidator {
    Box::new(|value| {
        if value.is_empty() {
            return None;
        }
        let has_upper = value.chars().any(|c| c.is_uppercase());
        let has_lower = value.chars().any(|c| c.is_lowercase());
        let has_digit = value.chars().any(|c| c.is_ascii_digit());
        if has_upper && has_lower && has_digit {
            None
        } else {
            Some(ValidationError::WeakPassword)
        }
    })
}

// =============================================================================
// Date Rules
// =============================================================================

/// Parses a form date value as a calendar instant.
///
/// Accepts ISO dates (`2025-03-01`), datetime-local values
/// (`2025-03-01T10:15`) and full ISO timestamps. Returns None for anything
/// else; date rules treat unparseable input as absent.
pub fn parse_instant(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}

/// Fails when the birth date yields an age below `min_years` today.
pub fn min_age(min_years: u32) -> FieldValidator {
    min_age_at(min_years, Utc::now().date_naive())
}

/// Deterministic variant of [`min_age`]: the reference date is explicit.
pub fn min_age_at(min_years: u32, today: NaiveDate) -> FieldValidator {
    Box::new(move |value| {
        let birth = parse_instant(value)?.date();
        let mut age = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        if age < min_years as i32 {
            Some(ValidationError::BelowMinimumAge { min_years })
        } else {
            None
        }
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rule = required("accountNumber");
        assert_eq!(rule("").unwrap().code(), "required");
        assert_eq!(rule("   ").unwrap().code(), "required");
        assert!(rule("1234567890").is_none());
    }

    #[test]
    fn test_empty_passes_every_format_rule() {
        for rule in [
            currency_format(),
            account_number(),
            account_number_range(10, 20),
            dni(),
            phone(),
            name_format(),
            occupation(),
            strong_password(),
            positive_amount(),
            sufficient_funds(Money::zero()),
        ] {
            assert!(rule("").is_none());
        }
    }

    #[test]
    fn test_positive_amount() {
        let rule = positive_amount();
        assert_eq!(rule("0").unwrap().code(), "notPositiveAmount");
        assert_eq!(rule("-5").unwrap().code(), "notPositiveAmount");
        assert!(rule("0.01").is_none());
        // Non-numeric input is not this rule's concern
        assert!(rule("abc").is_none());
    }

    #[test]
    fn test_transaction_amount_bounds_are_inclusive() {
        let min = min_transaction_amount(Money::from_cents(100));
        assert!(min("1").is_none());
        assert_eq!(min("0.99").unwrap().code(), "minTransactionAmount");

        let max = max_transaction_amount(Money::from_cents(500_000));
        assert!(max("5000").is_none());
        assert_eq!(max("5000.01").unwrap().code(), "maxTransactionAmount");
    }

    #[test]
    fn test_sufficient_funds_snapshot() {
        let rule = sufficient_funds(Money::from_cents(10_000));
        assert!(rule("100").is_none());
        assert!(rule("99.99").is_none());
        let err = rule("150").unwrap();
        assert_eq!(err.code(), "insufficientFunds");
        assert_eq!(
            err,
            ValidationError::InsufficientFunds {
                available: Money::from_cents(10_000),
                requested: Money::from_cents(15_000),
            }
        );
    }

    #[test]
    fn test_zero_balance_rejects_any_positive_amount() {
        let rule = sufficient_funds(Money::zero());
        assert_eq!(rule("0.01").unwrap().code(), "insufficientFunds");
        assert!(rule("0").is_none());
    }

    #[test]
    fn test_currency_format() {
        let rule = currency_format();
        assert!(rule("150").is_none());
        assert!(rule("150.7").is_none());
        assert!(rule("150.75").is_none());
        assert_eq!(rule("150.755").unwrap().code(), "invalidCurrencyFormat");
        assert_eq!(rule("-150").unwrap().code(), "invalidCurrencyFormat");
        assert_eq!(rule("abc").unwrap().code(), "invalidCurrencyFormat");
    }

    #[test]
    fn test_account_number_patterns() {
        let fixed = account_number();
        assert!(fixed("1234567890").is_none());
        assert_eq!(fixed("123").unwrap().code(), "invalidAccountNumber");

        let ranged = account_number_range(10, 20);
        assert!(ranged("1234567890").is_none());
        assert!(ranged("12345678901234567890").is_none());
        assert_eq!(
            ranged("123456789").unwrap().code(),
            "invalidAccountNumberRange"
        );
        assert_eq!(
            ranged("123456789012345678901").unwrap().code(),
            "invalidAccountNumberRange"
        );
        assert_eq!(ranged("12345abcde").unwrap().code(), "invalidAccountNumberRange");
    }

    #[test]
    fn test_identity_patterns() {
        assert!(dni()("12345678").is_none());
        assert_eq!(dni()("1234567").unwrap().code(), "invalidDNI");
        assert!(phone()("987654321").is_none());
        assert_eq!(phone()("98765432").unwrap().code(), "invalidPhone");
    }

    #[test]
    fn test_name_format_accepts_accents() {
        let rule = name_format();
        assert!(rule("María José Ñandú").is_none());
        assert_eq!(rule("Maria123").unwrap().code(), "invalidNameFormat");
        assert_eq!(occupation()("Dev-Ops").unwrap().code(), "invalidOccupation");
    }

    #[test]
    fn test_strong_password() {
        let rule = strong_password();
        assert!(rule("Abcdef12").is_none());
        assert_eq!(rule("abcdef12").unwrap().code(), "weakPassword");
        assert_eq!(rule("ABCDEF12").unwrap().code(), "weakPassword");
        assert_eq!(rule("Abcdefgh").unwrap().code(), "weakPassword");
    }

    #[test]
    fn test_min_age_at() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let rule = min_age_at(crate::MIN_CUSTOMER_AGE, today);

        assert!(rule("2007-06-15").is_none()); // 18th birthday today
        assert_eq!(rule("2007-06-16").unwrap().code(), "minAge"); // tomorrow
        assert!(rule("1990-01-01").is_none());
        // Unparseable input is treated as absent
        assert!(rule("not-a-date").is_none());
    }

    #[test]
    fn test_parse_instant_formats() {
        assert!(parse_instant("2025-03-01").is_some());
        assert!(parse_instant("2025-03-01T10:15").is_some());
        assert!(parse_instant("2025-03-01T10:15:30").is_some());
        assert!(parse_instant("03/01/2025").is_none());
        assert!(parse_instant("").is_none());
    }
}

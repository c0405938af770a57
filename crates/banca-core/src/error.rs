//! # Error Types
//!
//! Domain-specific error types for banca-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  banca-core errors (this file)                                          │
//! │  ├── CoreError        - General domain errors                           │
//! │  ├── ValidationError  - Field/form validation failures (stable codes)   │
//! │  └── CheckoutError    - Cart feasibility gate failures                  │
//! │                                                                         │
//! │  banca-client errors (separate crate)                                   │
//! │  └── ClientError      - Transport + server-rejected requests            │
//! │                                                                         │
//! │  Flow: ValidationError → (never leaves the client)                      │
//! │        CheckoutError   → blocks submission before the network           │
//! │        ClientError     → session dispatcher → user-visible message      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, bound, actual value)
//! 3. Errors are enum variants, never String
//! 4. Every validation variant carries a stable code so a UI or test can
//!    branch on *which* rule failed, not just "is the field invalid"

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Checkout feasibility gate failure (wraps CheckoutError).
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field- and form-level validation errors.
///
/// Each variant corresponds to exactly one validation rule. The [`code`]
/// method returns the rule's stable tag; two different rules never share a
/// tag, so consumers can branch on the failed rule.
///
/// [`code`]: ValidationError::code
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is shorter than the minimum length.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Amount must be strictly positive.
    #[error("amount must be positive")]
    NotPositiveAmount,

    /// Amount is below the minimum transaction amount.
    #[error("amount must be at least {required_min}")]
    MinTransactionAmount { required_min: Money, actual: Money },

    /// Amount exceeds the maximum transaction amount.
    #[error("amount must be at most {allowed_max}")]
    MaxTransactionAmount { allowed_max: Money, actual: Money },

    /// Initial balance is below the minimum.
    #[error("initial balance must be at least {required_min}")]
    MinInitialBalance { required_min: Money, actual: Money },

    /// Balance exceeds the maximum allowed.
    #[error("balance must be at most {allowed_max}")]
    MaxBalance { allowed_max: Money, actual: Money },

    /// Requested amount exceeds the available balance.
    #[error("insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds { available: Money, requested: Money },

    /// Not a valid currency amount (digits with 1-2 decimal places).
    #[error("invalid currency format")]
    InvalidCurrencyFormat,

    /// Account number is not exactly 10 digits.
    #[error("invalid account number")]
    InvalidAccountNumber,

    /// Account number digit count is outside the configured range.
    #[error("account number must be {min_digits} to {max_digits} digits")]
    AccountNumberOutOfRange { min_digits: usize, max_digits: usize },

    /// Transaction description exceeds the maximum length.
    #[error("description must be at most {max} characters")]
    DescriptionTooLong { max: usize, actual: usize },

    /// Start date is after end date.
    #[error("start date must not be after end date")]
    DateRangeInvalid,

    /// Birth date yields an age below the threshold.
    #[error("must be at least {min_years} years old")]
    BelowMinimumAge { min_years: u32 },

    /// National ID is not exactly 8 digits.
    #[error("invalid DNI")]
    InvalidDni,

    /// Phone number is not exactly 9 digits.
    #[error("invalid phone number")]
    InvalidPhone,

    /// Name contains characters outside letters and spaces.
    #[error("name may only contain letters and spaces")]
    InvalidNameFormat,

    /// Occupation contains characters outside letters and spaces.
    #[error("occupation may only contain letters and spaces")]
    InvalidOccupation,

    /// Address is shorter than the minimum length.
    #[error("address must be at least {required_min} characters")]
    AddressTooShort { required_min: usize },

    /// Password lacks required character classes.
    #[error("password must contain upper case, lower case and a digit")]
    WeakPassword,

    /// Password and confirmation do not match.
    #[error("passwords do not match")]
    PasswordMismatch,
}

impl ValidationError {
    /// Stable error code for UI branching and tests.
    ///
    /// Codes follow the error keys of the original form layer, so snapshots
    /// and translations keyed on them keep working.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Required { .. } => "required",
            ValidationError::TooShort { .. } => "minlength",
            ValidationError::NotPositiveAmount => "notPositiveAmount",
            ValidationError::MinTransactionAmount { .. } => "minTransactionAmount",
            ValidationError::MaxTransactionAmount { .. } => "maxTransactionAmount",
            ValidationError::MinInitialBalance { .. } => "minInitialBalance",
            ValidationError::MaxBalance { .. } => "maxBalance",
            ValidationError::InsufficientFunds { .. } => "insufficientFunds",
            ValidationError::InvalidCurrencyFormat => "invalidCurrencyFormat",
            ValidationError::InvalidAccountNumber => "invalidAccountNumber",
            ValidationError::AccountNumberOutOfRange { .. } => "invalidAccountNumberRange",
            ValidationError::DescriptionTooLong { .. } => "descriptionTooLong",
            ValidationError::DateRangeInvalid => "dateRangeInvalid",
            ValidationError::BelowMinimumAge { .. } => "minAge",
            ValidationError::InvalidDni => "invalidDNI",
            ValidationError::InvalidPhone => "invalidPhone",
            ValidationError::InvalidNameFormat => "invalidNameFormat",
            ValidationError::InvalidOccupation => "invalidOccupation",
            ValidationError::AddressTooShort { .. } => "addressTooShort",
            ValidationError::WeakPassword => "weakPassword",
            ValidationError::PasswordMismatch => "passwordMismatch",
        }
    }
}

// =============================================================================
// Checkout Error
// =============================================================================

/// Checkout feasibility gate failures.
///
/// Evaluated client-side against the last-fetched snapshots before an order
/// is submitted. A stale snapshot can let an infeasible order through; the
/// server is the final arbiter and rejects it (surfaced as a client error).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckoutError {
    /// Cart has no line items.
    #[error("cart is empty")]
    EmptyCart,

    /// Settlement account balance does not cover the cart total.
    #[error("insufficient funds: available {available}, required {required}")]
    InsufficientFunds { available: Money, required: Money },

    /// A line item's quantity exceeds the product's last-fetched stock.
    #[error("insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: String,
        name: String,
        available: i64,
        requested: i64,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::InsufficientFunds {
            available: Money::from_cents(10_000),
            requested: Money::from_cents(15_000),
        };
        assert_eq!(
            err.to_string(),
            "insufficient funds: available $100.00, requested $150.00"
        );
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            ValidationError::NotPositiveAmount,
            ValidationError::InvalidCurrencyFormat,
            ValidationError::DateRangeInvalid,
            ValidationError::PasswordMismatch,
            ValidationError::InvalidDni,
            ValidationError::InvalidPhone,
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::NotPositiveAmount;
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_checkout_error_message() {
        let err = CheckoutError::InsufficientStock {
            product_id: "p1".to_string(),
            name: "Teclado".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for Teclado: available 3, requested 5"
        );
    }
}

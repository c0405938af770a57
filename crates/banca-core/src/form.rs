//! # Form Value Graph
//!
//! Composes field- and form-level validators over a named set of fields and
//! recomputes the full error picture on every value change.
//!
//! ## Evaluation Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Form Evaluation Model                               │
//! │                                                                         │
//! │  set("amount", "150")                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  For EVERY field: run its validators against its current value          │
//! │  For EVERY form rule: run it against the full value map                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  errors("amount")  → [insufficientFunds]                                │
//! │  form_errors()     → [dateRangeInvalid, ...]                            │
//! │                                                                         │
//! │  • Deterministic: same values ⇒ same errors, every time                 │
//! │  • Form-level errors attach to the form, never to a field, and do not   │
//! │    suppress (or get suppressed by) field-level errors                   │
//! │  • Full recomputation keeps sibling dependencies trivially correct:     │
//! │    confirm-password reacts to new-password without a dependency graph   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use banca_core::form::{password_match, Form};
//! use banca_core::validation::{min_length, required, strong_password};
//!
//! let mut form = Form::new()
//!     .field("newPassword", vec![required("newPassword"), min_length("newPassword", 6), strong_password()])
//!     .field("confirmPassword", vec![required("confirmPassword")])
//!     .cross(password_match("newPassword", "confirmPassword"));
//!
//! form.set("newPassword", "Abcdef12");
//! form.set("confirmPassword", "Abcdef1");
//! assert!(form.has_form_error("passwordMismatch"));
//!
//! form.set("confirmPassword", "Abcdef12");
//! assert!(form.form_errors().is_empty());
//! ```

use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::validation::{parse_instant, FieldValidator};

/// Read-only view of every field's current value, handed to form rules.
#[derive(Debug, Default)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    /// Current value of `field`; absent fields read as empty.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }
}

/// A form-level (cross-field) validation rule.
pub type FormValidator = Box<dyn Fn(&FormValues) -> Option<ValidationError> + Send + Sync>;

// =============================================================================
// Form
// =============================================================================

/// A named set of fields with attached validators.
///
/// ## Invariants
/// - Every registered field always has a (possibly empty) value and a
///   current error set
/// - Errors always reflect the current values; there is no "stale until
///   touched" state
#[derive(Default)]
pub struct Form {
    values: FormValues,
    field_rules: BTreeMap<String, Vec<FieldValidator>>,
    form_rules: Vec<FormValidator>,
    field_errors: BTreeMap<String, Vec<ValidationError>>,
    form_errors: Vec<ValidationError>,
}

impl Form {
    pub fn new() -> Self {
        Form::default()
    }

    /// Registers a field with its validators, starting empty.
    pub fn field(mut self, name: &str, validators: Vec<FieldValidator>) -> Self {
        self.values.values.insert(name.to_string(), String::new());
        self.field_rules.insert(name.to_string(), validators);
        self.revalidate();
        self
    }

    /// Attaches a form-level rule.
    pub fn cross(mut self, validator: FormValidator) -> Self {
        self.form_rules.push(validator);
        self.revalidate();
        self
    }

    /// Sets a field's value and recomputes every error.
    pub fn set(&mut self, name: &str, value: &str) {
        self.values
            .values
            .insert(name.to_string(), value.to_string());
        self.revalidate();
    }

    /// Replaces a field's validators and recomputes.
    ///
    /// This is how snapshot-parameterized rules stay fresh: when the
    /// selected account changes, the consumer rebuilds
    /// `sufficient_funds(new_balance)` and swaps it in here.
    pub fn set_validators(&mut self, name: &str, validators: Vec<FieldValidator>) {
        self.values
            .values
            .entry(name.to_string())
            .or_default();
        self.field_rules.insert(name.to_string(), validators);
        self.revalidate();
    }

    /// Clears every value (validators stay attached) and recomputes.
    pub fn reset(&mut self) {
        for value in self.values.values.values_mut() {
            value.clear();
        }
        self.revalidate();
    }

    /// Current value of a field.
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name)
    }

    /// Current errors of a field.
    pub fn errors(&self, name: &str) -> &[ValidationError] {
        self.field_errors
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Current form-level errors.
    pub fn form_errors(&self) -> &[ValidationError] {
        &self.form_errors
    }

    /// Whether `name` currently carries an error with the given code.
    pub fn has_error(&self, name: &str, code: &str) -> bool {
        self.errors(name).iter().any(|e| e.code() == code)
    }

    /// Whether the form currently carries a form-level error with the code.
    pub fn has_form_error(&self, code: &str) -> bool {
        self.form_errors.iter().any(|e| e.code() == code)
    }

    /// No field errors and no form errors.
    pub fn is_valid(&self) -> bool {
        self.form_errors.is_empty() && self.field_errors.values().all(Vec::is_empty)
    }

    fn revalidate(&mut self) {
        let field_errors = self
            .field_rules
            .iter()
            .map(|(name, rules)| {
                let value = self.values.get(name);
                let errors = rules.iter().filter_map(|rule| rule(value)).collect();
                (name.clone(), errors)
            })
            .collect();
        let form_errors = self
            .form_rules
            .iter()
            .filter_map(|rule| rule(&self.values))
            .collect();
        self.field_errors = field_errors;
        self.form_errors = form_errors;
    }
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("values", &self.values)
            .field("field_errors", &self.field_errors)
            .field("form_errors", &self.form_errors)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Cross-Field Rules
// =============================================================================

/// Fails iff both bound fields are non-empty and start > end, compared as
/// calendar instants. Either field empty (or unparseable) passes.
pub fn date_range(start_field: &str, end_field: &str) -> FormValidator {
    let start_field = start_field.to_string();
    let end_field = end_field.to_string();
    Box::new(move |values| {
        let start = parse_instant(values.get(&start_field))?;
        let end = parse_instant(values.get(&end_field))?;
        if start > end {
            Some(ValidationError::DateRangeInvalid)
        } else {
            None
        }
    })
}

/// Fails iff both password fields are non-empty and unequal.
pub fn password_match(password_field: &str, confirm_field: &str) -> FormValidator {
    let password_field = password_field.to_string();
    let confirm_field = confirm_field.to_string();
    Box::new(move |values| {
        let password = values.get(&password_field);
        let confirm = values.get(&confirm_field);
        if password.is_empty() || confirm.is_empty() {
            return None;
        }
        if password != confirm {
            Some(ValidationError::PasswordMismatch)
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
    use crate::money::Money;
    use crate::validation::{
        account_number_range, description_max_length, min_initial_balance, min_length,
        positive_amount, required, strong_password, sufficient_funds,
    };
    use crate::{
        ACCOUNT_NUMBER_MAX_DIGITS, ACCOUNT_NUMBER_MIN_DIGITS, MAX_DESCRIPTION_LENGTH,
        MIN_PASSWORD_LENGTH,
    };

    fn withdrawal_form(balance: Money) -> Form {
        Form::new()
            .field("accountId", vec![required("accountId")])
            .field(
                "amount",
                vec![
                    required("amount"),
                    positive_amount(),
                    sufficient_funds(balance),
                ],
            )
    }

    #[test]
    fn test_withdrawal_scenario() {
        let mut form = withdrawal_form(Money::from_cents(10_000));
        form.set("accountId", "a1");

        form.set("amount", "150");
        assert!(form.has_error("amount", "insufficientFunds"));
        assert!(!form.is_valid());

        form.set("amount", "100");
        assert!(form.errors("amount").is_empty());
        assert!(form.is_valid());

        form.set("amount", "0");
        assert!(form.has_error("amount", "notPositiveAmount"));
        assert!(!form.has_error("amount", "insufficientFunds"));
    }

    #[test]
    fn test_reattaching_balance_snapshot() {
        let mut form = withdrawal_form(Money::from_cents(10_000));
        form.set("accountId", "a1");
        form.set("amount", "150");
        assert!(form.has_error("amount", "insufficientFunds"));

        // User selects a richer account; the consumer rebuilds the rule
        form.set_validators(
            "amount",
            vec![
                required("amount"),
                positive_amount(),
                sufficient_funds(Money::from_cents(50_000)),
            ],
        );
        assert!(form.errors("amount").is_empty());
    }

    #[test]
    fn test_create_account_form() {
        let mut form = Form::new()
            .field(
                "accountNumber",
                vec![
                    required("accountNumber"),
                    account_number_range(ACCOUNT_NUMBER_MIN_DIGITS, ACCOUNT_NUMBER_MAX_DIGITS),
                ],
            )
            .field(
                "initialBalance",
                vec![required("initialBalance"), min_initial_balance(Money::zero())],
            );

        form.set("accountNumber", "123");
        form.set("initialBalance", "-5");
        assert!(form.has_error("accountNumber", "invalidAccountNumberRange"));
        assert!(form.has_error("initialBalance", "minInitialBalance"));

        form.set("accountNumber", "1234567890");
        form.set("initialBalance", "0");
        assert!(form.is_valid());
    }

    #[test]
    fn test_description_length_gate() {
        let mut form = Form::new().field(
            "description",
            vec![description_max_length(MAX_DESCRIPTION_LENGTH)],
        );

        form.set("description", &"x".repeat(MAX_DESCRIPTION_LENGTH));
        assert!(form.is_valid());

        form.set("description", &"x".repeat(MAX_DESCRIPTION_LENGTH + 1));
        assert!(form.has_error("description", "descriptionTooLong"));
    }

    #[test]
    fn test_password_match_clears_when_fixed() {
        let mut form = Form::new()
            .field(
                "newPassword",
                vec![
                    required("newPassword"),
                    min_length("newPassword", MIN_PASSWORD_LENGTH),
                    strong_password(),
                ],
            )
            .field("confirmPassword", vec![required("confirmPassword")])
            .cross(password_match("newPassword", "confirmPassword"));

        form.set("newPassword", "Abcdef12");
        form.set("confirmPassword", "Abcdef1");
        assert!(form.has_form_error("passwordMismatch"));

        form.set("confirmPassword", "Abcdef12");
        assert!(form.form_errors().is_empty());
        assert!(form.is_valid());
    }

    #[test]
    fn test_password_match_silent_while_either_empty() {
        let mut form = Form::new()
            .field("newPassword", vec![])
            .field("confirmPassword", vec![])
            .cross(password_match("newPassword", "confirmPassword"));

        form.set("newPassword", "Abcdef12");
        assert!(!form.has_form_error("passwordMismatch"));
    }

    #[test]
    fn test_date_range_matrix() {
        let mut form = Form::new()
            .field("startDate", vec![])
            .field("endDate", vec![])
            .cross(date_range("startDate", "endDate"));

        // Either bound empty passes
        form.set("startDate", "2025-02-01");
        assert!(form.form_errors().is_empty());

        // start == end passes
        form.set("endDate", "2025-02-01");
        assert!(form.form_errors().is_empty());

        // start < end passes
        form.set("endDate", "2025-02-02");
        assert!(form.form_errors().is_empty());

        // start > end fails
        form.set("endDate", "2025-01-31");
        assert!(form.has_form_error("dateRangeInvalid"));

        // clearing a bound clears the failure
        form.set("startDate", "");
        assert!(form.form_errors().is_empty());
    }

    #[test]
    fn test_form_error_independent_of_field_errors() {
        let mut form = Form::new()
            .field("startDate", vec![required("startDate")])
            .field("endDate", vec![required("endDate")])
            .cross(date_range("startDate", "endDate"));

        form.set("startDate", "2025-02-02");
        form.set("endDate", "2025-02-01");

        // The cross-field failure coexists with (and does not replace)
        // whatever the fields themselves report
        assert!(form.has_form_error("dateRangeInvalid"));
        assert!(form.errors("startDate").is_empty());
        assert!(form.errors("endDate").is_empty());
    }

    #[test]
    fn test_datetime_local_values_compare_as_instants() {
        let mut form = Form::new()
            .field("startDate", vec![])
            .field("endDate", vec![])
            .cross(date_range("startDate", "endDate"));

        form.set("startDate", "2025-02-01T10:30");
        form.set("endDate", "2025-02-01T09:00");
        assert!(form.has_form_error("dateRangeInvalid"));

        form.set("endDate", "2025-02-01T10:30");
        assert!(form.form_errors().is_empty());
    }

    #[test]
    fn test_reset_clears_values_and_recomputes() {
        let mut form = Form::new().field("amount", vec![required("amount")]);
        form.set("amount", "50");
        assert!(form.is_valid());

        form.reset();
        assert_eq!(form.value("amount"), "");
        assert!(form.has_error("amount", "required"));
    }
}

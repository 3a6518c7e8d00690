use std::error::Error;
use std::fmt;

use serde::Deserialize;

use super::account::MAX_NAME_LEN;

/// A single input constraint violation, identifying the offending field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collected validation failures for a malformed request.
///
/// Requests are rejected with the full violation list before any store
/// interaction takes place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl Error for ValidationErrors {}

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid request: ")?;
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

fn check(violations: Vec<FieldViolation>) -> Result<(), ValidationErrors> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(violations))
    }
}

fn validate_money(amount: i64, currency: &str) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    if amount < 0 {
        violations.push(FieldViolation {
            field: "amount",
            message: "must not be negative",
        });
    }
    if currency.trim().is_empty() {
        violations.push(FieldViolation {
            field: "currency",
            message: "must not be blank",
        });
    }
    violations
}

/// Request to open a new account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewAccount {
    pub name: String,
}

impl NewAccount {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut violations = Vec::new();
        if self.name.trim().is_empty() {
            violations.push(FieldViolation {
                field: "name",
                message: "must not be blank",
            });
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            violations.push(FieldViolation {
                field: "name",
                message: "must be at most 255 characters",
            });
        }
        check(violations)
    }
}

/// Request to credit an account balance
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Deposit {
    pub amount: i64,
    pub currency: String,
}

impl Deposit {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        check(validate_money(self.amount, &self.currency))
    }
}

/// Request to debit an account balance
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Withdrawal {
    pub amount: i64,
    pub currency: String,
}

impl Withdrawal {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        check(validate_money(self.amount, &self.currency))
    }
}

/// Request to move funds between two accounts as one atomic unit
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Transfer {
    pub amount: i64,
    pub currency: String,
}

impl Transfer {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        check(validate_money(self.amount, &self.currency))
    }
}

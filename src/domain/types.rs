//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (valid UUID, non-empty name,
//! non-negative money amount) so that once a value reaches the domain layer it
//! can be treated as trusted.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided amount was negative or not a finite number.
    #[error("amount must be a non-negative number")]
    NegativeAmount,
    /// Provided uuid failed format validation.
    #[error("invalid uuid value")]
    InvalidUuid,
}

/// Unique identifier of a client record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Generate a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for ClientId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClientId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            Uuid::parse_str(s).map_err(|_| TypeConstraintError::InvalidUuid)?,
        ))
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

/// Client name wrapper enforcing trimmed, non-empty values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ClientName(String);

impl ClientName {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the name as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ClientName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ClientName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ClientName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClientName> for String {
    fn from(value: ClientName) -> Self {
        value.0
    }
}

/// Money amount wrapper rejecting negative and non-finite values.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct NonNegativeAmount(f64);

impl NonNegativeAmount {
    /// Validates that the amount is finite and not below zero.
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if !value.is_finite() || value < 0.0 {
            return Err(TypeConstraintError::NegativeAmount);
        }
        Ok(Self(value))
    }

    /// Returns the raw `f64` backing this amount.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for NonNegativeAmount {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonNegativeAmount> for f64 {
    fn from(value: NonNegativeAmount) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_id_round_trips_through_string() {
        let id = ClientId::new();
        let parsed: ClientId = id.to_string().parse().expect("valid uuid");
        assert_eq!(id, parsed);
    }

    #[test]
    fn client_id_rejects_garbage() {
        assert_eq!(
            "not-a-uuid".parse::<ClientId>(),
            Err(TypeConstraintError::InvalidUuid)
        );
    }

    #[test]
    fn client_name_trims_and_rejects_empty() {
        let name = ClientName::new("  Alice  ").expect("valid name");
        assert_eq!(name.as_str(), "Alice");
        assert_eq!(ClientName::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn amount_rejects_negative_and_nan() {
        assert!(NonNegativeAmount::new(0.0).is_ok());
        assert!(NonNegativeAmount::new(1500.5).is_ok());
        assert_eq!(
            NonNegativeAmount::new(-0.01),
            Err(TypeConstraintError::NegativeAmount)
        );
        assert_eq!(
            NonNegativeAmount::new(f64::NAN),
            Err(TypeConstraintError::NegativeAmount)
        );
    }
}

//! Newtype wrappers for row identifiers.
//!
//! Identifiers are database serials, so only strictly positive values are valid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Why a string or integer was rejected as an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("identifier is not an integer")]
    NotAnInteger,
    #[error("identifier must be positive")]
    NotPositive,
}

/// Identifies a registered customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct CustomerId(i32);

impl CustomerId {
    pub fn new(id: i32) -> Result<Self, IdError> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(IdError::NotPositive)
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CustomerId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: i32 = s.trim().parse().map_err(|_| IdError::NotAnInteger)?;
        Self::new(id)
    }
}

impl TryFrom<i32> for CustomerId {
    type Error = IdError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<CustomerId> for i32 {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}

/// Identifies a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct ProductId(i32);

impl ProductId {
    pub fn new(id: i32) -> Result<Self, IdError> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(IdError::NotPositive)
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ProductId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: i32 = s.trim().parse().map_err(|_| IdError::NotAnInteger)?;
        Self::new(id)
    }
}

impl TryFrom<i32> for ProductId {
    type Error = IdError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<ProductId> for i32 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

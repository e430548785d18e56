//! Cart line quantities.

use serde::{Deserialize, Serialize};

/// A strictly positive number of units added to a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Quantity(i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("quantity must be greater than zero")]
pub struct NonPositiveQuantity;

impl Quantity {
    pub fn new(units: i32) -> Result<Self, NonPositiveQuantity> {
        if units > 0 {
            Ok(Self(units))
        } else {
            Err(NonPositiveQuantity)
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Quantity {
    type Error = NonPositiveQuantity;

    fn try_from(units: i32) -> Result<Self, Self::Error> {
        Self::new(units)
    }
}

impl From<Quantity> for i32 {
    fn from(q: Quantity) -> Self {
        q.0
    }
}

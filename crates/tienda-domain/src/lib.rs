//! Value types shared by the shop service layers.
//!
//! Pure types with no framework dependencies: identifiers, quantities,
//! price bounds and email shape checks. Parsing is fallible and never panics.

pub mod email;
pub mod id;
pub mod price;
pub mod quantity;

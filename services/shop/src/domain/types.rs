use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use tienda_domain::price::PriceRange;

/// Registered customer, including the stored password digest.
///
/// Never serialized directly; handlers map it to a response type without
/// `password_hash`.
#[derive(Debug, Clone)]
pub struct Customer {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields of a customer row before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub product_id: i32,
    pub description: String,
    pub price: Decimal,
}

/// Catalog search filters, combined with AND. `None` imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub description: Option<String>,
    pub price: PriceRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub cart_id: i32,
    pub customer_id: i32,
    pub cart_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub cart_item_id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A cart line with its catalog product attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub item: CartItem,
    pub product: Product,
}

/// A cart with every line eagerly loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartWithItems {
    pub cart: Cart,
    pub lines: Vec<CartLine>,
}

/// Result of an insert guarded by a unique index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome<T> {
    Created(T),
    /// Another writer already holds the unique key.
    Conflict,
}


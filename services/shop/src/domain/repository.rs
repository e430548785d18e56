#![allow(async_fn_in_trait)]

use crate::domain::types::{
    Cart, CartItem, CartWithItems, Customer, InsertOutcome, NewCustomer, Product, ProductFilter,
};
use crate::error::ShopServiceError;

/// Repository for customer accounts.
pub trait CustomerRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Customer>, ShopServiceError>;

    async fn find_by_id(&self, customer_id: i32) -> Result<Option<Customer>, ShopServiceError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, ShopServiceError>;

    /// Insert a customer. Fails with `EmailAlreadyExists` when the email is taken.
    async fn create(&self, customer: &NewCustomer) -> Result<Customer, ShopServiceError>;

    /// Returns `false` when no customer has `customer_id`.
    async fn update_address(
        &self,
        customer_id: i32,
        address: &str,
    ) -> Result<bool, ShopServiceError>;

    /// Returns `false` when no customer has `customer_id`.
    async fn update_password_hash(
        &self,
        customer_id: i32,
        password_hash: &str,
    ) -> Result<bool, ShopServiceError>;
}

/// Read-only access to the product catalog.
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, ShopServiceError>;

    async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, ShopServiceError>;

    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, ShopServiceError>;
}

/// Repository for carts and their lines.
///
/// Implementations must back `(customer_id, cart_name)` and
/// `(cart_id, product_id)` with unique indexes and report a violated index as
/// `InsertOutcome::Conflict`, never as an error.
pub trait CartRepository: Send + Sync {
    async fn find_cart(
        &self,
        customer_id: i32,
        cart_name: &str,
    ) -> Result<Option<Cart>, ShopServiceError>;

    async fn insert_cart(
        &self,
        customer_id: i32,
        cart_name: &str,
    ) -> Result<InsertOutcome<Cart>, ShopServiceError>;

    async fn find_item(
        &self,
        cart_id: i32,
        product_id: i32,
    ) -> Result<Option<CartItem>, ShopServiceError>;

    async fn insert_item(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<InsertOutcome<CartItem>, ShopServiceError>;

    /// Atomically add `delta` to the stored quantity. Returns `false` when the
    /// item no longer exists.
    async fn increment_quantity(
        &self,
        cart_item_id: i32,
        delta: i32,
    ) -> Result<bool, ShopServiceError>;

    async fn list_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<CartWithItems>, ShopServiceError>;
}

/// One-way, salted, cost-parameterized credential hashing.
pub trait PasswordHasherPort: Send + Sync {
    async fn hash(&self, raw: &str) -> Result<String, ShopServiceError>;

    /// `Ok(false)` on mismatch; `Err` only when the digest is unusable.
    async fn verify(&self, raw: &str, digest: &str) -> Result<bool, ShopServiceError>;

    /// Digest of no real credential, made with the live cost parameters.
    /// Verifying against it costs the same as verifying a stored digest.
    fn decoy_digest(&self) -> &str;
}

use anyhow::anyhow;

use tienda_domain::id::{CustomerId, ProductId};
use tienda_domain::quantity::Quantity;

use crate::domain::repository::{CartRepository, CustomerRepository, ProductRepository};
use crate::domain::types::{Cart, CartItem, CartWithItems, InsertOutcome};
use crate::error::ShopServiceError;

/// Upper bound on lookup/insert rounds when racing other writers.
pub const MAX_RESOLVE_ATTEMPTS: usize = 3;

// ── AddToCart ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AddToCartInput {
    pub customer_id: i32,
    pub cart_name: String,
    pub product_id: i32,
    pub quantity: i32,
}

pub struct AddToCartUseCase<C: CartRepository, U: CustomerRepository, P: ProductRepository> {
    pub carts: C,
    pub customers: U,
    pub products: P,
}

impl<C: CartRepository, U: CustomerRepository, P: ProductRepository> AddToCartUseCase<C, U, P> {
    pub async fn execute(&self, input: AddToCartInput) -> Result<(), ShopServiceError> {
        let customer_id =
            CustomerId::new(input.customer_id).map_err(|_| ShopServiceError::InvalidId)?;
        let product_id =
            ProductId::new(input.product_id).map_err(|_| ShopServiceError::InvalidId)?;
        let cart_name = input.cart_name.trim();
        if cart_name.is_empty() {
            return Err(ShopServiceError::MissingData);
        }
        let quantity =
            Quantity::new(input.quantity).map_err(|_| ShopServiceError::InvalidQuantity)?;

        if self.customers.find_by_id(customer_id.get()).await?.is_none() {
            return Err(ShopServiceError::CustomerNotFound);
        }
        if self.products.find_by_id(product_id.get()).await?.is_none() {
            return Err(ShopServiceError::ProductNotFound);
        }

        let cart = self.resolve_cart(customer_id, cart_name).await?;
        let item = self.upsert_item(&cart, product_id, quantity).await?;
        tracing::info!(
            cart_id = cart.cart_id,
            cart_item_id = item,
            product_id = product_id.get(),
            quantity = quantity.get(),
            "added to cart"
        );
        Ok(())
    }

    async fn resolve_cart(
        &self,
        customer_id: CustomerId,
        cart_name: &str,
    ) -> Result<Cart, ShopServiceError> {
        for _ in 0..MAX_RESOLVE_ATTEMPTS {
            if let Some(cart) = self.carts.find_cart(customer_id.get(), cart_name).await? {
                return Ok(cart);
            }
            match self.carts.insert_cart(customer_id.get(), cart_name).await? {
                InsertOutcome::Created(cart) => {
                    tracing::info!(cart_id = cart.cart_id, cart_name, "cart created");
                    return Ok(cart);
                }
                InsertOutcome::Conflict => {
                    tracing::warn!(
                        customer_id = customer_id.get(),
                        cart_name,
                        "cart created concurrently, re-reading"
                    );
                }
            }
        }
        Err(anyhow!("cart for customer {customer_id} did not settle").into())
    }

    /// Returns the id of the item that now carries the quantity.
    async fn upsert_item(
        &self,
        cart: &Cart,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Result<i32, ShopServiceError> {
        for _ in 0..MAX_RESOLVE_ATTEMPTS {
            if let Some(CartItem {
                cart_item_id,
                quantity: current,
                ..
            }) = self.carts.find_item(cart.cart_id, product_id.get()).await?
            {
                if current.checked_add(quantity.get()).is_none() {
                    return Err(ShopServiceError::InvalidQuantity);
                }
                if self
                    .carts
                    .increment_quantity(cart_item_id, quantity.get())
                    .await?
                {
                    return Ok(cart_item_id);
                }
                continue;
            }
            match self
                .carts
                .insert_item(cart.cart_id, product_id.get(), quantity.get())
                .await?
            {
                InsertOutcome::Created(item) => return Ok(item.cart_item_id),
                InsertOutcome::Conflict => {
                    tracing::warn!(
                        cart_id = cart.cart_id,
                        product_id = product_id.get(),
                        "cart item created concurrently, re-reading"
                    );
                }
            }
        }
        Err(anyhow!("item for product {product_id} in cart {} did not settle", cart.cart_id).into())
    }
}

// ── GetCartsByCustomer ───────────────────────────────────────────────────────

pub struct GetCartsByCustomerUseCase<C: CartRepository> {
    pub carts: C,
}

impl<C: CartRepository> GetCartsByCustomerUseCase<C> {
    pub async fn execute(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<CartWithItems>, ShopServiceError> {
        self.carts.list_by_customer(customer_id.get()).await
    }
}

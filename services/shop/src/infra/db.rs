use std::collections::HashMap;

use anyhow::{Context as _, anyhow};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, RuntimeErr, sea_query::Expr, sqlx,
};

use tienda_shop_schema::{cart_items, carts, customers, products};

use crate::domain::repository::{CartRepository, CustomerRepository, ProductRepository};
use crate::domain::types::{
    Cart, CartItem, CartLine, CartWithItems, Customer, InsertOutcome, NewCustomer, Product,
    ProductFilter,
};
use crate::error::ShopServiceError;

/// Classifies by the driver's error kind (SQLSTATE 23505 on Postgres).
fn is_unique_violation(err: &DbErr) -> bool {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(e))) => {
            e.is_unique_violation()
        }
        _ => false,
    }
}

// ── Customer repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCustomerRepository {
    pub db: DatabaseConnection,
}

impl CustomerRepository for DbCustomerRepository {
    async fn list(&self) -> Result<Vec<Customer>, ShopServiceError> {
        let models = customers::Entity::find()
            .order_by_asc(customers::Column::CustomerId)
            .all(&self.db)
            .await
            .context("list customers")?;
        Ok(models.into_iter().map(customer_from_model).collect())
    }

    async fn find_by_id(&self, customer_id: i32) -> Result<Option<Customer>, ShopServiceError> {
        let model = customers::Entity::find_by_id(customer_id)
            .one(&self.db)
            .await
            .context("find customer by id")?;
        Ok(model.map(customer_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, ShopServiceError> {
        let model = customers::Entity::find()
            .filter(customers::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find customer by email")?;
        Ok(model.map(customer_from_model))
    }

    async fn create(&self, customer: &NewCustomer) -> Result<Customer, ShopServiceError> {
        let now = Utc::now();
        let inserted = customers::ActiveModel {
            first_name: Set(customer.first_name.clone()),
            last_name: Set(customer.last_name.clone()),
            email: Set(customer.email.clone()),
            phone_number: Set(customer.phone_number.clone()),
            address: Set(customer.address.clone()),
            password: Set(customer.password_hash.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match inserted {
            Ok(model) => Ok(customer_from_model(model)),
            Err(e) if is_unique_violation(&e) => Err(ShopServiceError::EmailAlreadyExists),
            Err(e) => Err(anyhow::Error::new(e).context("create customer").into()),
        }
    }

    async fn update_address(
        &self,
        customer_id: i32,
        address: &str,
    ) -> Result<bool, ShopServiceError> {
        let result = customers::Entity::update_many()
            .col_expr(customers::Column::Address, Expr::value(address))
            .col_expr(customers::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(customers::Column::CustomerId.eq(customer_id))
            .exec(&self.db)
            .await
            .context("update customer address")?;
        Ok(result.rows_affected > 0)
    }

    async fn update_password_hash(
        &self,
        customer_id: i32,
        password_hash: &str,
    ) -> Result<bool, ShopServiceError> {
        let result = customers::Entity::update_many()
            .col_expr(customers::Column::Password, Expr::value(password_hash))
            .col_expr(customers::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(customers::Column::CustomerId.eq(customer_id))
            .exec(&self.db)
            .await
            .context("update customer password")?;
        Ok(result.rows_affected > 0)
    }
}

fn customer_from_model(m: customers::Model) -> Customer {
    Customer {
        customer_id: m.customer_id,
        first_name: m.first_name,
        last_name: m.last_name,
        email: m.email,
        phone_number: m.phone_number,
        address: m.address,
        password_hash: m.password,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

// ── Product repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProductRepository {
    pub db: DatabaseConnection,
}

impl ProductRepository for DbProductRepository {
    async fn list(&self) -> Result<Vec<Product>, ShopServiceError> {
        let models = products::Entity::find()
            .order_by_asc(products::Column::ProductId)
            .all(&self.db)
            .await
            .context("list products")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, ShopServiceError> {
        let mut query = products::Entity::find();
        if let Some(description) = &filter.description {
            query = query.filter(products::Column::Description.contains(description));
        }
        if let Some(min) = filter.price.min {
            query = query.filter(products::Column::Price.gte(min));
        }
        if let Some(max) = filter.price.max {
            query = query.filter(products::Column::Price.lte(max));
        }
        let models = query
            .order_by_asc(products::Column::ProductId)
            .all(&self.db)
            .await
            .context("search products")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, ShopServiceError> {
        let model = products::Entity::find_by_id(product_id)
            .one(&self.db)
            .await
            .context("find product by id")?;
        Ok(model.map(product_from_model))
    }
}

fn product_from_model(m: products::Model) -> Product {
    Product {
        product_id: m.product_id,
        description: m.description,
        price: m.price,
    }
}

// ── Cart repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCartRepository {
    pub db: DatabaseConnection,
}

impl CartRepository for DbCartRepository {
    async fn find_cart(
        &self,
        customer_id: i32,
        cart_name: &str,
    ) -> Result<Option<Cart>, ShopServiceError> {
        let model = carts::Entity::find()
            .filter(carts::Column::CustomerId.eq(customer_id))
            .filter(carts::Column::CartName.eq(cart_name))
            .one(&self.db)
            .await
            .context("find cart by customer and name")?;
        Ok(model.map(cart_from_model))
    }

    async fn insert_cart(
        &self,
        customer_id: i32,
        cart_name: &str,
    ) -> Result<InsertOutcome<Cart>, ShopServiceError> {
        let inserted = carts::ActiveModel {
            customer_id: Set(customer_id),
            cart_name: Set(cart_name.to_owned()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match inserted {
            Ok(model) => Ok(InsertOutcome::Created(cart_from_model(model))),
            Err(e) if is_unique_violation(&e) => Ok(InsertOutcome::Conflict),
            Err(e) => Err(anyhow::Error::new(e).context("insert cart").into()),
        }
    }

    async fn find_item(
        &self,
        cart_id: i32,
        product_id: i32,
    ) -> Result<Option<CartItem>, ShopServiceError> {
        let model = cart_items::Entity::find()
            .filter(cart_items::Column::CartId.eq(cart_id))
            .filter(cart_items::Column::ProductId.eq(product_id))
            .one(&self.db)
            .await
            .context("find cart item")?;
        Ok(model.map(cart_item_from_model))
    }

    async fn insert_item(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<InsertOutcome<CartItem>, ShopServiceError> {
        let now = Utc::now();
        let inserted = cart_items::ActiveModel {
            cart_id: Set(cart_id),
            product_id: Set(product_id),
            quantity: Set(quantity),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match inserted {
            Ok(model) => Ok(InsertOutcome::Created(cart_item_from_model(model))),
            Err(e) if is_unique_violation(&e) => Ok(InsertOutcome::Conflict),
            Err(e) => Err(anyhow::Error::new(e).context("insert cart item").into()),
        }
    }

    async fn increment_quantity(
        &self,
        cart_item_id: i32,
        delta: i32,
    ) -> Result<bool, ShopServiceError> {
        // Single UPDATE so concurrent increments never lose each other. The
        // bound leaves the row untouched rather than overflowing the column.
        let result = cart_items::Entity::update_many()
            .col_expr(
                cart_items::Column::Quantity,
                Expr::col(cart_items::Column::Quantity).add(delta),
            )
            .col_expr(cart_items::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(cart_items::Column::CartItemId.eq(cart_item_id))
            .filter(cart_items::Column::Quantity.lte(i32::MAX.saturating_sub(delta)))
            .exec(&self.db)
            .await
            .context("increment cart item quantity")?;
        Ok(result.rows_affected > 0)
    }

    async fn list_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<CartWithItems>, ShopServiceError> {
        let cart_models = carts::Entity::find()
            .filter(carts::Column::CustomerId.eq(customer_id))
            .order_by_asc(carts::Column::CartId)
            .all(&self.db)
            .await
            .context("list carts by customer")?;
        if cart_models.is_empty() {
            return Ok(vec![]);
        }

        let cart_ids: Vec<i32> = cart_models.iter().map(|c| c.cart_id).collect();
        let rows = cart_items::Entity::find()
            .filter(cart_items::Column::CartId.is_in(cart_ids))
            .find_also_related(products::Entity)
            .order_by_asc(cart_items::Column::CartItemId)
            .all(&self.db)
            .await
            .context("list cart items with products")?;

        let mut lines_by_cart: HashMap<i32, Vec<CartLine>> = HashMap::new();
        for (item, product) in rows {
            let product = product.ok_or_else(|| {
                anyhow!(
                    "cart item {} references missing product {}",
                    item.cart_item_id,
                    item.product_id
                )
            })?;
            lines_by_cart
                .entry(item.cart_id)
                .or_default()
                .push(CartLine {
                    item: cart_item_from_model(item),
                    product: product_from_model(product),
                });
        }

        Ok(cart_models
            .into_iter()
            .map(|model| {
                let lines = lines_by_cart.remove(&model.cart_id).unwrap_or_default();
                CartWithItems {
                    cart: cart_from_model(model),
                    lines,
                }
            })
            .collect())
    }
}

fn cart_from_model(m: carts::Model) -> Cart {
    Cart {
        cart_id: m.cart_id,
        customer_id: m.customer_id,
        cart_name: m.cart_name,
        created_at: m.created_at,
    }
}

fn cart_item_from_model(m: cart_items::Model) -> CartItem {
    CartItem {
        cart_item_id: m.cart_item_id,
        cart_id: m.cart_id,
        product_id: m.product_id,
        quantity: m.quantity,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

/// Readiness check: one round-trip to the database.
pub async fn ping(db: &DatabaseConnection) -> Result<(), ShopServiceError> {
    db.ping().await.context("ping database")?;
    Ok(())
}

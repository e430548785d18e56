use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use tienda_domain::id::CustomerId;

use crate::domain::types::{CartLine, CartWithItems};
use crate::error::ShopServiceError;
use crate::handlers::catalog::ProductResponse;
use crate::handlers::{DataResponse, MessageResponse, json_body};
use crate::state::AppState;
use crate::usecase::cart::{AddToCartInput, AddToCartUseCase, GetCartsByCustomerUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CartItemResponse {
    pub cart_item_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub product: ProductResponse,
}

#[derive(Serialize)]
pub struct CartResponse {
    pub cart_id: i32,
    pub customer_id: i32,
    pub cart_name: String,
    #[serde(serialize_with = "tienda_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub items: Vec<CartItemResponse>,
}

impl From<CartLine> for CartItemResponse {
    fn from(line: CartLine) -> Self {
        Self {
            cart_item_id: line.item.cart_item_id,
            product_id: line.item.product_id,
            quantity: line.item.quantity,
            product: line.product.into(),
        }
    }
}

impl From<CartWithItems> for CartResponse {
    fn from(cart: CartWithItems) -> Self {
        Self {
            cart_id: cart.cart.cart_id,
            customer_id: cart.cart.customer_id,
            cart_name: cart.cart.cart_name,
            created_at: cart.cart.created_at,
            items: cart.lines.into_iter().map(CartItemResponse::from).collect(),
        }
    }
}

// ── POST /cart/add ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddToCartRequest {
    pub customer_id: Option<i32>,
    pub cart_name: Option<String>,
    pub product_id: Option<i32>,
    pub quantity: Option<i32>,
}

pub async fn add_to_cart(
    State(state): State<AppState>,
    body: Result<Json<AddToCartRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ShopServiceError> {
    let body = json_body(body)?;
    let (Some(customer_id), Some(cart_name), Some(product_id), Some(quantity)) =
        (body.customer_id, body.cart_name, body.product_id, body.quantity)
    else {
        return Err(ShopServiceError::MissingData);
    };
    let usecase = AddToCartUseCase {
        carts: state.cart_repo(),
        customers: state.customer_repo(),
        products: state.product_repo(),
    };
    usecase
        .execute(AddToCartInput {
            customer_id,
            cart_name,
            product_id,
            quantity,
        })
        .await?;
    Ok(Json(MessageResponse {
        message: "Product added to cart successfully",
    }))
}

// ── GET /cart/all ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CartsQuery {
    pub customer_id: Option<String>,
}

pub async fn get_carts(
    State(state): State<AppState>,
    Query(query): Query<CartsQuery>,
) -> Result<Json<DataResponse<Vec<CartResponse>>>, ShopServiceError> {
    let raw = query
        .customer_id
        .filter(|id| !id.trim().is_empty())
        .ok_or(ShopServiceError::MissingData)?;
    let customer_id: CustomerId = raw.parse().map_err(|_| ShopServiceError::InvalidId)?;
    let usecase = GetCartsByCustomerUseCase {
        carts: state.cart_repo(),
    };
    let carts = usecase.execute(customer_id).await?;
    Ok(Json(DataResponse {
        data: carts.into_iter().map(CartResponse::from).collect(),
    }))
}

use axum::{
    Json,
    extract::{Query, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::types::Product;
use crate::error::ShopServiceError;
use crate::handlers::DataResponse;
use crate::state::AppState;
use crate::usecase::catalog::{ListProductsUseCase, SearchProductsInput, SearchProductsUseCase};

#[derive(Serialize)]
pub struct ProductResponse {
    pub product_id: i32,
    pub description: String,
    /// Serialized as a decimal string.
    pub price: Decimal,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.product_id,
            description: product.description,
            price: product.price,
        }
    }
}

// ── GET /cart/product ────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<ProductResponse>>>, ShopServiceError> {
    let usecase = ListProductsUseCase {
        repo: state.product_repo(),
    };
    let products = usecase.execute().await?;
    Ok(Json(DataResponse {
        data: products.into_iter().map(ProductResponse::from).collect(),
    }))
}

// ── GET /cart/products ───────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct SearchQuery {
    pub description: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<DataResponse<Vec<ProductResponse>>>, ShopServiceError> {
    let usecase = SearchProductsUseCase {
        repo: state.product_repo(),
    };
    let products = usecase
        .execute(SearchProductsInput {
            description: query.description,
            min_price: query.min_price,
            max_price: query.max_price,
        })
        .await?;
    Ok(Json(DataResponse {
        data: products.into_iter().map(ProductResponse::from).collect(),
    }))
}

use tienda_domain::price::{PriceRange, parse_price_bound};

use crate::domain::repository::ProductRepository;
use crate::domain::types::{Product, ProductFilter};
use crate::error::ShopServiceError;

// ── ListProducts ─────────────────────────────────────────────────────────────

pub struct ListProductsUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> ListProductsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Product>, ShopServiceError> {
        self.repo.list().await
    }
}

// ── SearchProducts ───────────────────────────────────────────────────────────

/// Raw search parameters as received from the query string.
#[derive(Debug, Default)]
pub struct SearchProductsInput {
    pub description: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl SearchProductsInput {
    /// Normalize into a filter. Blank values impose no constraint.
    pub fn into_filter(self) -> Result<ProductFilter, ShopServiceError> {
        let min = parse_price_bound(self.min_price.as_deref())
            .map_err(|_| ShopServiceError::InvalidPrice)?;
        let max = parse_price_bound(self.max_price.as_deref())
            .map_err(|_| ShopServiceError::InvalidPrice)?;
        let description = self
            .description
            .map(|d| d.trim().to_owned())
            .filter(|d| !d.is_empty());
        Ok(ProductFilter {
            description,
            price: PriceRange { min, max },
        })
    }
}

pub struct SearchProductsUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> SearchProductsUseCase<R> {
    pub async fn execute(
        &self,
        input: SearchProductsInput,
    ) -> Result<Vec<Product>, ShopServiceError> {
        let filter = input.into_filter()?;
        self.repo.search(&filter).await
    }
}

use tienda_shop::error::ShopServiceError;
use tienda_shop::usecase::catalog::{
    ListProductsUseCase, SearchProductsInput, SearchProductsUseCase,
};

use crate::helpers::{InMemoryShop, test_catalog};

fn search(description: Option<&str>, min: Option<&str>, max: Option<&str>) -> SearchProductsInput {
    SearchProductsInput {
        description: description.map(str::to_owned),
        min_price: min.map(str::to_owned),
        max_price: max.map(str::to_owned),
    }
}

async fn search_ids(input: SearchProductsInput) -> Vec<i32> {
    SearchProductsUseCase {
        repo: InMemoryShop::with_products(test_catalog()),
    }
    .execute(input)
    .await
    .unwrap()
    .into_iter()
    .map(|p| p.product_id)
    .collect()
}

#[tokio::test]
async fn should_list_every_product() {
    let products = ListProductsUseCase {
        repo: InMemoryShop::with_products(test_catalog()),
    }
    .execute()
    .await
    .unwrap();
    assert_eq!(products.len(), 4);
}

#[tokio::test]
async fn should_return_whole_catalog_when_no_filter_given() {
    assert_eq!(search_ids(search(None, None, None)).await, vec![7, 8, 9, 10]);
    assert_eq!(
        search_ids(search(Some(""), Some(" "), Some(""))).await,
        vec![7, 8, 9, 10]
    );
}

#[tokio::test]
async fn should_keep_only_prices_inside_inclusive_range() {
    assert_eq!(
        search_ids(search(None, Some("10"), Some("20"))).await,
        vec![8, 9]
    );
}

#[tokio::test]
async fn should_combine_description_and_price_filters() {
    assert_eq!(
        search_ids(search(Some("tea"), Some("6"), None)).await,
        vec![8]
    );
    assert_eq!(search_ids(search(Some("Tea"), None, None)).await, vec![9]);
}

#[tokio::test]
async fn should_reject_unparsable_bounds() {
    let uc = SearchProductsUseCase {
        repo: InMemoryShop::with_products(test_catalog()),
    };
    for input in [
        search(None, Some("abc"), None),
        search(None, None, Some("1.2.3")),
        search(None, Some("-5"), None),
    ] {
        let result = uc.execute(input).await;
        assert!(
            matches!(result, Err(ShopServiceError::InvalidPrice)),
            "expected InvalidPrice, got {result:?}"
        );
    }
}

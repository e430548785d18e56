use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use tienda_core::health::healthz;
use tienda_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    cart::{add_to_cart, get_carts},
    catalog::{list_products, search_products},
    customer::{
        get_customer, list_customers, login_customer, register_customer, update_address,
        update_password,
    },
    health::readyz,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Customers
        .route("/customers", get(list_customers))
        .route("/customers/", get(list_customers))
        .route("/customers/reg", post(register_customer))
        .route("/customers/login", post(login_customer))
        .route("/customers/{id}", get(get_customer))
        .route("/customers/{id}/address", put(update_address))
        .route("/customers/{id}/password", put(update_password))
        // Catalog
        .route("/cart/product", get(list_products))
        .route("/cart/products", get(search_products))
        // Carts
        .route("/cart/add", post(add_to_cart))
        .route("/cart/all", get(get_carts))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}

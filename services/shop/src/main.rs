use sea_orm::Database;
use tracing::info;

use tienda_core::config::Config as _;
use tienda_core::tracing::init_tracing;

use tienda_shop::config::ShopConfig;
use tienda_shop::infra::password::Argon2Hasher;
use tienda_shop::router::build_router;
use tienda_shop::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ShopConfig::from_env();

    let hasher = Argon2Hasher::new(
        config.password_hash_memory_kib,
        config.password_hash_iterations,
        config.password_hash_parallelism,
    )
    .expect("invalid password hash parameters");

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let router = build_router(AppState { db, hasher });
    let http_addr = format!("0.0.0.0:{}", config.shop_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("shop service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}

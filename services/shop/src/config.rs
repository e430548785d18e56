use serde::Deserialize;

use tienda_core::config::Config;

/// Shop service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct ShopConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8080). Env var: `SHOP_PORT`.
    #[serde(default = "default_shop_port")]
    pub shop_port: u16,
    /// Argon2 memory cost in KiB. Env var: `PASSWORD_HASH_MEMORY_KIB`.
    #[serde(default = "default_memory_kib")]
    pub password_hash_memory_kib: u32,
    #[serde(default = "default_iterations")]
    pub password_hash_iterations: u32,
    #[serde(default = "default_parallelism")]
    pub password_hash_parallelism: u32,
}

impl Config for ShopConfig {}

fn default_shop_port() -> u16 {
    8080
}

fn default_memory_kib() -> u32 {
    19_456
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}

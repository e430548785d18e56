use sea_orm::DatabaseConnection;

use crate::infra::db::{DbCartRepository, DbCustomerRepository, DbProductRepository};
use crate::infra::password::Argon2Hasher;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub hasher: Argon2Hasher,
}

impl AppState {
    pub fn customer_repo(&self) -> DbCustomerRepository {
        DbCustomerRepository {
            db: self.db.clone(),
        }
    }

    pub fn product_repo(&self) -> DbProductRepository {
        DbProductRepository {
            db: self.db.clone(),
        }
    }

    pub fn cart_repo(&self) -> DbCartRepository {
        DbCartRepository {
            db: self.db.clone(),
        }
    }

    pub fn hasher(&self) -> Argon2Hasher {
        self.hasher.clone()
    }
}

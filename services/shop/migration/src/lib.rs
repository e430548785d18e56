use sea_orm_migration::prelude::*;

mod m20250301_000001_create_customers;
mod m20250301_000002_create_products;
mod m20250301_000003_create_carts;
mod m20250301_000004_create_cart_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_customers::Migration),
            Box::new(m20250301_000002_create_products::Migration),
            Box::new(m20250301_000003_create_carts::Migration),
            Box::new(m20250301_000004_create_cart_items::Migration),
        ]
    }
}

//! sea-orm entities for the shop database.

pub mod cart_items;
pub mod carts;
pub mod customers;
pub mod products;

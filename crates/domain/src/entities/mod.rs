//! Entities owned by aggregates

pub mod order_item;

pub use order_item::OrderItem;

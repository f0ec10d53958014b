//! NerdStore sales domain
//!
//! The `Order` aggregate and its `OrderItem` lines, together with the rules
//! that keep an order consistent: per-product quantity limits, merging of
//! repeated products, and a derived total value.
//!
//! Pure domain code: no I/O, no persistence, no async.

extern crate self as nerdstore_domain;

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{Order, MAX_UNITS_PER_ITEM, MIN_UNITS_PER_ITEM};
pub use entities::OrderItem;
pub use error::DomainError;
pub use events::OrderUpdate;
pub use ids::{CustomerId, OrderId, ProductId};
pub use value_objects::{Money, OrderStatus};

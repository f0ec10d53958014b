//! Value objects - Immutable objects defined by their attributes

mod money;
mod order_status;

pub use money::Money;
pub use order_status::OrderStatus;

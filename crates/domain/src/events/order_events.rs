//! Order mutation outcomes.

use crate::value_objects::OrderStatus;
use crate::ProductId;

/// Outcome of mutating an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderUpdate {
    /// A new product line was appended
    ItemAdded { product_id: ProductId, quantity: u32 },
    /// An existing product line absorbed the incoming units
    ItemQuantityIncreased {
        product_id: ProductId,
        from: u32,
        to: u32,
    },
    /// The order's lifecycle status was set
    StatusChanged { from: OrderStatus, to: OrderStatus },
}

impl OrderUpdate {
    /// Product affected by this update, if any.
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            Self::ItemAdded { product_id, .. } | Self::ItemQuantityIncreased { product_id, .. } => {
                Some(*product_id)
            }
            Self::StatusChanged { .. } => None,
        }
    }
}

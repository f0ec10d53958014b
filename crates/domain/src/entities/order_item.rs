//! Order item entity - one product line inside an order

use serde::{Deserialize, Serialize};

use crate::aggregates::order::MIN_UNITS_PER_ITEM;
use crate::error::DomainError;
use crate::value_objects::Money;
use crate::ProductId;

/// A single product line: product, quantity and unit price.
///
/// # Invariants
///
/// - `quantity >= MIN_UNITS_PER_ITEM` at all times. Checked by `new()`, and
///   preserved because the only mutation adds units.
/// - `unit_price * quantity` fits in a [`Money`] amount. Checked by `new()`;
///   the owning order re-checks before adding units.
///
/// Quantity can only grow through [`Order::add_item`](crate::Order::add_item),
/// which enforces the per-product maximum before touching the line.
///
/// # Example
///
/// ```
/// use nerdstore_domain::{Money, OrderItem, ProductId};
///
/// let item = OrderItem::new(ProductId::new(), "Keyboard", 2, Money::from(100)).unwrap();
/// assert_eq!(item.line_value(), Money::from(200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OrderItemWireFormat", into = "OrderItemWireFormat")]
pub struct OrderItem {
    product_id: ProductId,
    product_name: String,
    quantity: u32,
    unit_price: Money,
}

impl OrderItem {
    /// Create a new order line.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `quantity` is below
    /// [`MIN_UNITS_PER_ITEM`], or if the line value overflows.
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> Result<Self, DomainError> {
        if quantity < MIN_UNITS_PER_ITEM {
            return Err(DomainError::validation(format!(
                "Minimum of {} units per product",
                MIN_UNITS_PER_ITEM
            )));
        }
        if unit_price.checked_times(quantity).is_none() {
            return Err(DomainError::validation(
                "Line value exceeds the supported monetary range",
            ));
        }

        Ok(Self {
            product_id,
            product_name: product_name.into(),
            quantity,
            unit_price,
        })
    }

    #[inline]
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    #[inline]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Value of this line (`unit_price * quantity`).
    pub fn line_value(&self) -> Money {
        self.unit_price.times(self.quantity)
    }

    /// Add units to this line. No upper bound here; the owning order checks
    /// the per-product maximum before calling.
    pub(crate) fn increment_quantity(&mut self, units: u32) {
        self.quantity = self.quantity.saturating_add(units);
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Wire format; deserializing goes back through `OrderItem::new` so the
/// minimum-units rule also holds for items read from the outside.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderItemWireFormat {
    product_id: ProductId,
    product_name: String,
    quantity: u32,
    unit_price: Money,
}

impl TryFrom<OrderItemWireFormat> for OrderItem {
    type Error = DomainError;

    fn try_from(wire: OrderItemWireFormat) -> Result<Self, Self::Error> {
        OrderItem::new(
            wire.product_id,
            wire.product_name,
            wire.quantity,
            wire.unit_price,
        )
    }
}

impl From<OrderItem> for OrderItemWireFormat {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name,
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item(quantity: u32, price: i64) -> OrderItem {
        OrderItem::new(ProductId::new(), "Produto Test", quantity, Money::from(price)).unwrap()
    }

    mod constructor {
        use super::*;

        #[test]
        fn new_keeps_all_fields() {
            let product_id = ProductId::new();
            let item = OrderItem::new(product_id, "Produto Test", 2, Money::from(100)).unwrap();

            assert_eq!(item.product_id(), product_id);
            assert_eq!(item.product_name(), "Produto Test");
            assert_eq!(item.quantity(), 2);
            assert_eq!(item.unit_price(), Money::from(100));
        }

        #[test]
        fn new_accepts_minimum_quantity() {
            assert_eq!(item(MIN_UNITS_PER_ITEM, 10).quantity(), 1);
        }

        #[test]
        fn new_rejects_zero_quantity() {
            let err = OrderItem::new(ProductId::new(), "Produto Test", 0, Money::from(100))
                .unwrap_err();

            assert!(err.is_validation());
            assert_eq!(
                err.to_string(),
                "Validation failed: Minimum of 1 units per product"
            );
        }

        #[test]
        fn new_rejects_line_value_out_of_range() {
            let err = OrderItem::new(ProductId::new(), "Big", 2, Money::new(Decimal::MAX))
                .unwrap_err();

            assert!(err.is_validation());
            assert!(err.to_string().contains("monetary range"));
        }

        #[test]
        fn new_accepts_largest_representable_line() {
            let item =
                OrderItem::new(ProductId::new(), "Big", 1, Money::new(Decimal::MAX)).unwrap();
            assert_eq!(item.line_value(), Money::new(Decimal::MAX));
        }

        #[test]
        fn new_does_not_cap_quantity() {
            // The maximum is an order-level rule
            assert_eq!(item(40, 1).quantity(), 40);
        }
    }

    mod behaviour {
        use super::*;

        #[test]
        fn line_value_is_price_times_quantity() {
            assert_eq!(item(3, 25).line_value(), Money::from(75));
        }

        #[test]
        fn line_value_keeps_cents() {
            let item = OrderItem::new(
                ProductId::new(),
                "Cable",
                3,
                "9.99".parse::<Money>().unwrap(),
            )
            .unwrap();
            assert_eq!(item.line_value(), "29.97".parse::<Money>().unwrap());
        }

        #[test]
        fn increment_quantity_adds_units() {
            let mut item = item(2, 100);
            item.increment_quantity(5);
            assert_eq!(item.quantity(), 7);
            assert_eq!(item.line_value(), Money::from(700));
        }
    }

    mod serde_format {
        use super::*;

        #[test]
        fn serializes_camel_case_fields() {
            let item = item(2, 100);
            let json = serde_json::to_value(&item).unwrap();

            assert_eq!(json["productName"], "Produto Test");
            assert_eq!(json["quantity"], 2);
            assert_eq!(json["unitPrice"], "100");
        }

        #[test]
        fn deserialize_restores_item() {
            let original = item(4, 12);
            let json = serde_json::to_string(&original).unwrap();
            let back: OrderItem = serde_json::from_str(&json).unwrap();
            assert_eq!(back, original);
        }

        #[test]
        fn deserialize_rejects_zero_quantity() {
            let json = format!(
                r#"{{"productId":"{}","productName":"X","quantity":0,"unitPrice":"1"}}"#,
                ProductId::new()
            );
            let result: Result<OrderItem, _> = serde_json::from_str(&json);
            assert!(result.is_err());
        }
    }
}

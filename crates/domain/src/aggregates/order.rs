//! Order aggregate - A customer's order and its product lines
//!
//! # Rustic DDD Design
//!
//! This aggregate follows Rustic DDD principles:
//! - **Private fields**: All fields are encapsulated
//! - **Factory-gated construction**: `new_draft()` is the only public way in,
//!   so every order starts life as a `Draft`
//! - **Read-only views**: items are exposed as a slice; line quantities can
//!   only change through `add_item()`
//! - **Derived state**: `total_value` is recomputed from all lines on every
//!   successful mutation, never patched incrementally. The new total is
//!   computed before anything changes, so an overflow leaves the order intact

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::entities::OrderItem;
use crate::error::DomainError;
use crate::events::OrderUpdate;
use crate::ids::{CustomerId, OrderId, ProductId};
use crate::value_objects::{Money, OrderStatus};

/// Minimum units of a single product on an order line
pub const MIN_UNITS_PER_ITEM: u32 = 1;

/// Maximum units of a single product on an order, counting merged lines
pub const MAX_UNITS_PER_ITEM: u32 = 15;

/// A customer's order
///
/// # Invariants
///
/// - At most one line per `ProductId`
/// - Every line holds between `MIN_UNITS_PER_ITEM` and `MAX_UNITS_PER_ITEM` units
/// - `total_value` equals the sum of all line values
///
/// # Example
///
/// ```
/// use nerdstore_domain::{CustomerId, Money, Order, OrderItem, OrderStatus, ProductId};
///
/// let mut order = Order::new_draft(CustomerId::new());
/// let item = OrderItem::new(ProductId::new(), "Produto Test", 2, Money::from(100)).unwrap();
///
/// order.add_item(item).unwrap();
///
/// assert_eq!(order.status(), OrderStatus::Draft);
/// assert_eq!(order.total_value(), Money::from(200));
/// ```
#[derive(Debug, Clone)]
pub struct Order {
    // Identity
    id: OrderId,
    customer_id: CustomerId,

    // Lifecycle
    status: OrderStatus,

    // Lines
    items: Vec<OrderItem>,
    /// Derived from `items`; replaced by `projected_total()` on every add
    total_value: Money,

    created_at: DateTime<Utc>,
}

impl Order {
    pub const MIN_UNITS_PER_ITEM: u32 = MIN_UNITS_PER_ITEM;
    pub const MAX_UNITS_PER_ITEM: u32 = MAX_UNITS_PER_ITEM;

    // =========================================================================
    // Construction
    // =========================================================================

    fn new(customer_id: CustomerId, status: OrderStatus) -> Self {
        Self {
            id: OrderId::new(),
            customer_id,
            status,
            items: Vec::new(),
            total_value: Money::zero(),
            created_at: Utc::now(),
        }
    }

    /// Create a new, empty draft order for a customer.
    ///
    /// This is the only way to obtain an `Order`.
    pub fn new_draft(customer_id: CustomerId) -> Self {
        let order = Self::new(customer_id, OrderStatus::Draft);
        tracing::debug!("Created draft order {} for customer {}", order.id, customer_id);
        order
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    /// Returns the order's unique identifier.
    #[inline]
    pub fn id(&self) -> OrderId {
        self.id
    }

    #[inline]
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    #[inline]
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the order lines in insertion order.
    ///
    /// A line that absorbed a merge is moved to the end.
    #[inline]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns the line for a product, if present.
    pub fn item(&self, product_id: ProductId) -> Option<&OrderItem> {
        self.items.iter().find(|i| i.product_id() == product_id)
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the sum of all line values.
    #[inline]
    pub fn total_value(&self) -> Money {
        self.total_value
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Add a product line to the order.
    ///
    /// If the order already has a line for the same product, the incoming
    /// units are merged into it and the incoming item is dropped; the merged
    /// line is moved to the end of the list. Otherwise the item is appended.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the product's quantity on the
    /// order, existing units included, would exceed [`MAX_UNITS_PER_ITEM`],
    /// or if the resulting total would not fit in a [`Money`] amount.
    /// The order is left untouched in both cases.
    pub fn add_item(&mut self, item: OrderItem) -> Result<OrderUpdate, DomainError> {
        let existing = self.position_of(item.product_id());
        self.validate_allowed_quantity(existing, &item)?;
        let total_value = self.projected_total(existing, &item)?;

        let update = match existing {
            Some(index) => {
                let mut merged = self.items.remove(index);
                let from = merged.quantity();
                merged.increment_quantity(item.quantity());
                let update = OrderUpdate::ItemQuantityIncreased {
                    product_id: merged.product_id(),
                    from,
                    to: merged.quantity(),
                };
                self.items.push(merged);
                update
            }
            None => {
                let update = OrderUpdate::ItemAdded {
                    product_id: item.product_id(),
                    quantity: item.quantity(),
                };
                self.items.push(item);
                update
            }
        };

        self.total_value = total_value;
        tracing::debug!(
            "Order {} updated: {:?}, total now {}",
            self.id,
            update,
            self.total_value
        );
        Ok(update)
    }

    /// Put the order in `Draft` status, whatever it was before.
    pub fn set_draft_status(&mut self) -> OrderUpdate {
        let previous = std::mem::replace(&mut self.status, OrderStatus::Draft);
        OrderUpdate::StatusChanged {
            from: previous,
            to: self.status,
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn position_of(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|i| i.product_id() == product_id)
    }

    fn validate_allowed_quantity(
        &self,
        existing: Option<usize>,
        item: &OrderItem,
    ) -> Result<(), DomainError> {
        let projected = match existing {
            Some(index) => self.items[index].quantity().checked_add(item.quantity()),
            None => Some(item.quantity()),
        };

        // Overflow can only mean "too many"
        if projected.is_some_and(|units| units <= MAX_UNITS_PER_ITEM) {
            Ok(())
        } else {
            Err(DomainError::validation(format!(
                "Maximum of {} units per product",
                MAX_UNITS_PER_ITEM
            )))
        }
    }

    /// Sum of all line values as they will be once `item` is added, in the
    /// order the lines will end up in. Expects the quantity check to have passed.
    fn projected_total(
        &self,
        existing: Option<usize>,
        item: &OrderItem,
    ) -> Result<Money, DomainError> {
        let incoming = match existing {
            Some(index) => {
                let current = &self.items[index];
                current
                    .unit_price()
                    .checked_times(current.quantity() + item.quantity())
            }
            None => item.unit_price().checked_times(item.quantity()),
        };

        self.items
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != existing)
            .map(|(_, line)| line.unit_price().checked_times(line.quantity()))
            .chain(std::iter::once(incoming))
            .try_fold(Money::zero(), |total, value| total.checked_add(value?))
            .ok_or_else(|| {
                DomainError::validation("Order total exceeds the supported monetary range")
            })
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Outbound wire format. There is no matching `Deserialize`: orders are only
/// created through `Order::new_draft`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderWireFormat<'a> {
    id: OrderId,
    customer_id: CustomerId,
    status: OrderStatus,
    items: &'a [OrderItem],
    total_value: Money,
    created_at: DateTime<Utc>,
}

impl Serialize for Order {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = OrderWireFormat {
            id: self.id,
            customer_id: self.customer_id,
            status: self.status,
            items: &self.items,
            total_value: self.total_value,
            created_at: self.created_at,
        };
        wire.serialize(serializer)
    }
}

// ============================================================================
// Tests
// ============================================================================

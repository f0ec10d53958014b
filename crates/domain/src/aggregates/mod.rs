//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns domain events from mutations
//!
//! # Rustic DDD Principles
//!
//! | Classic DDD Pattern | Rustic Equivalent |
//! |---------------------|-------------------|
//! | Private fields + getters | Private fields + `#[inline]` accessors |
//! | Aggregate root guards | Ownership (borrow checker enforces) |
//! | Read-only collections | Slices (`&[T]`) with `pub(crate)` mutators |
//! | Factory pattern | Private `new()` + named public constructor |
//! | Domain Events | Return enums from mutations |

pub mod order;

pub use order::{Order, MAX_UNITS_PER_ITEM, MIN_UNITS_PER_ITEM};

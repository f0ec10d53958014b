//! Domain Events
//!
//! ## Aggregate Mutation Events
//!
//! Return types from aggregate mutations, communicating what happened when
//! state was modified.

pub mod order_events;

pub use order_events::*;

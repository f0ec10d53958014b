//! Order lifecycle status enum

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Order lifecycle status
///
/// # State Transitions
///
/// ```text
/// (none) -> Draft   (factory only)
/// ```
///
/// `Started`, `Paid`, `Delivered` and `Cancelled` are declared so that
/// external collaborators can name them, but no transition into them exists
/// in the sales core yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
    /// Order is being assembled; items can be added
    Draft,
    /// Checkout has begun
    Started,
    /// Payment has been confirmed
    Paid,
    /// Order reached the customer
    Delivered,
    /// Order was abandoned or voided
    Cancelled,
}

impl OrderStatus {
    /// Returns true if the order is still a draft
    #[inline]
    pub fn is_draft(self) -> bool {
        matches!(self, Self::Draft)
    }

    /// Returns the status as a lowercase string slice
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Started => "started",
            Self::Paid => "paid",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "started" => Ok(Self::Started),
            "paid" => Ok(Self::Paid),
            "delivered" => Ok(Self::Delivered),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Err(DomainError::parse(format!("Unknown order status: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_draft_is_draft() {
        assert!(OrderStatus::Draft.is_draft());
        assert!(!OrderStatus::Started.is_draft());
        assert!(!OrderStatus::Paid.is_draft());
        assert!(!OrderStatus::Delivered.is_draft());
        assert!(!OrderStatus::Cancelled.is_draft());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for status in [
            OrderStatus::Draft,
            OrderStatus::Started,
            OrderStatus::Paid,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.to_string().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("DRAFT".parse::<OrderStatus>().unwrap(), OrderStatus::Draft);
        assert_eq!(
            " Canceled ".parse::<OrderStatus>().unwrap(),
            OrderStatus::Cancelled
        );
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "shipped".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err, DomainError::parse("Unknown order status: shipped"));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_string(&OrderStatus::Delivered).unwrap();
        assert_eq!(json, "\"delivered\"");
    }
}

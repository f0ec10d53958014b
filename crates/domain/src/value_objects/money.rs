//! Monetary amount value object
//!
//! Wraps `rust_decimal::Decimal` so prices and totals keep exact decimal
//! precision. Currency is implicit; the sales context works in one currency.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A decimal monetary amount.
///
/// # Example
///
/// ```
/// use nerdstore_domain::Money;
///
/// let price = Money::from(100);
/// assert_eq!(price.times(3), Money::from(300));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a monetary amount from a decimal value.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply this amount by a unit count.
    ///
    /// # Panics
    ///
    /// Panics if the result is outside the `Decimal` range; use
    /// [`Money::checked_times`] when the operands are not known to fit.
    pub fn times(self, units: u32) -> Self {
        Self(self.0 * Decimal::from(units))
    }

    /// Multiply this amount by a unit count, returning `None` on overflow.
    pub fn checked_times(self, units: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(units)).map(Self)
    }

    /// Add two amounts, returning `None` on overflow.
    pub fn checked_add(self, rhs: Money) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Self)
            .map_err(|e| DomainError::parse(format!("Invalid monetary amount '{}': {}", s, e)))
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{LedgerError, Result};

/// Money amount in the smallest currency unit (integer, never fractional)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);
    pub const MAX: Money = Money(u64::MAX);

    /// create from an amount of smallest units
    pub fn from_units(units: u64) -> Self {
        Money(units)
    }

    /// get the raw unit count
    pub fn units(&self) -> u64 {
        self.0
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// addition that reports overflow instead of wrapping
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// subtraction that reports underflow instead of wrapping
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// addition clamped at the representable maximum
    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// subtraction clamped at zero
    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    /// minimum of two values
    pub fn min(self, other: Money) -> Money {
        Money(self.0.min(other.0))
    }

    /// maximum of two values
    pub fn max(self, other: Money) -> Money {
        Money(self.0.max(other.0))
    }

    /// convert to a decimal in major units, given the unit scale
    /// (e.g. scale 9 renders 1_000_000_000 units as 1.0)
    pub fn to_decimal(&self, scale: u32) -> Decimal {
        Decimal::from_i128_with_scale(self.0 as i128, scale)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Money {
    fn from(units: u64) -> Self {
        Money(units)
    }
}

/// annual percentage yield in basis points, 0..=10000 (0%..100%)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Apy(u16);

impl Apy {
    pub const ZERO: Apy = Apy(0);
    pub const MAX_BPS: u16 = 10_000;

    /// create from basis points, rejecting anything above 100%
    pub fn from_bps(bps: u16) -> Result<Self> {
        if bps > Self::MAX_BPS {
            return Err(LedgerError::InvalidApy { bps });
        }
        Ok(Apy(bps))
    }

    /// get as basis points
    pub fn bps(&self) -> u16 {
        self.0
    }

    /// get as a decimal fraction (1000 bps -> 0.1000)
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(self.0 as i64, 4)
    }

    /// get as a percentage (1000 bps -> 10.00)
    pub fn as_percentage(&self) -> Decimal {
        Decimal::new(self.0 as i64, 2)
    }
}

impl fmt::Display for Apy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

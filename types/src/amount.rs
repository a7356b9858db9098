//! Monetary amounts in minor units.
//!
//! Amounts are fixed-point integers (u64) to avoid floating-point errors.
//! One display unit is 100 minor units, so `Amount::new(4000)` is "40.00".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Number of minor units in one display unit (two decimal places).
pub const MINOR_PER_UNIT: u64 = 100;

/// A non-negative monetary amount in minor units.
///
/// The currency it denominates is carried separately; an `Amount` on its own
/// is just a quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub fn new(minor: u64) -> Self {
        Self(minor)
    }

    /// Build an amount from whole display units ("40" -> 40.00).
    pub fn from_units(units: u64) -> Self {
        Self(units * MINOR_PER_UNIT)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / MINOR_PER_UNIT, self.0 % MINOR_PER_UNIT)
    }
}

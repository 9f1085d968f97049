//! Defines [Amount], the exact fixed-point decimal type used for all gold
//! values.
//!
//! Binary floating point is never used for amounts since repeated small
//! transactions would accumulate rounding drift.

use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Sub},
    str::FromStr,
};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

/// A quantity of gold, quantized to two fractional digits.
///
/// New instances should be created through [Amount::parse], which validates
/// and quantizes user input. Arithmetic on amounts is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// An amount of zero gold.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Parse a user supplied decimal string into an amount.
    ///
    /// Accepts either `.` or `,` as the fractional separator and trims
    /// surrounding whitespace, e.g. `"12,5"` parses to `12.50`. The value is
    /// quantized to two fractional digits using round-half-to-even.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if the text is not a finite decimal
    /// number or if the value is negative.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let trimmed = text.trim();
        let normalized = trimmed.replace(',', ".");

        let value = Decimal::from_str(&normalized)
            .map_err(|_| Error::InvalidAmount(trimmed.to_owned()))?;

        if value.is_sign_negative() {
            return Err(Error::InvalidAmount(trimmed.to_owned()));
        }

        Ok(Self(
            value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven),
        ))
    }
}

impl fmt::Display for Amount {
    /// Renders with exactly two fractional digits and the `g` unit suffix,
    /// e.g. `12.50g`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}g", self.0)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.0;
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0 - rhs.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::zero(), Add::add)
    }
}

impl Serialize for Amount {
    /// Serializes as the bare decimal string with two fractional digits and
    /// no unit suffix, e.g. `12.50`, preserving exactness across read/write
    /// cycles.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{:.2}", self.0))
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;

        Amount::parse(&text).map_err(serde::de::Error::custom)
    }
}

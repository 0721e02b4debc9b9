//! Fixed-point money amounts.
//!
//! Amounts are stored as a whole number of cents so that sums are exact and
//! do not depend on the order in which transactions are added up.

use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Sub},
    str::FromStr,
};

use serde::{Serialize, Serializer};

const CENTS_PER_UNIT: i64 = 100;
const MAX_FRACTION_DIGITS: usize = 2;

/// An amount of money with two decimal places of precision.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    /// The amount zero.
    pub const ZERO: Amount = Amount(0);

    /// The largest amount a single transaction may have.
    ///
    /// Keeps the totals of any realistic number of transactions far from the
    /// limits of `i64`.
    pub const MAXIMUM: Amount = Amount::from_units(1_000_000_000);

    /// Create an amount from a whole number of cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create an amount from a whole number of currency units, e.g. dollars.
    pub const fn from_units(units: i64) -> Self {
        Self(units * CENTS_PER_UNIT)
    }

    /// The amount as a whole number of cents.
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Whether the amount is strictly greater than zero.
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Whether the amount is strictly less than zero.
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// The whole currency units of the absolute amount, e.g. 12 for -12.34.
    pub const fn whole_units(self) -> u64 {
        self.0.unsigned_abs() / CENTS_PER_UNIT as u64
    }

    /// The cents of the absolute amount, e.g. 34 for -12.34.
    pub const fn fractional_cents(self) -> u64 {
        self.0.unsigned_abs() % CENTS_PER_UNIT as u64
    }

    /// The amount as a floating point number, for charts and JSON output.
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / CENTS_PER_UNIT as f64
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };

        write!(
            f,
            "{sign}{}.{:02}",
            self.whole_units(),
            self.fractional_cents()
        )
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// The errors that can occur when parsing an [Amount] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseAmountError {
    /// The text was empty or only whitespace.
    #[error("an amount is required")]
    Empty,

    /// The text is not a decimal number.
    #[error("\"{0}\" is not a number")]
    NotANumber(String),

    /// The text has more than two digits after the decimal point.
    #[error("\"{0}\" has more than two decimal places")]
    TooPrecise(String),

    /// The number does not fit in the range of representable amounts.
    #[error("\"{0}\" is too large")]
    OutOfRange(String),
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    /// Parse a decimal number such as "12", "-3.5" or "1200.25".
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();

        if text.is_empty() {
            return Err(ParseAmountError::Empty);
        }

        let (is_negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (units, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let is_all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if (units.is_empty() && fraction.is_empty())
            || !is_all_digits(units)
            || !is_all_digits(fraction)
        {
            return Err(ParseAmountError::NotANumber(text.to_owned()));
        }

        if fraction.len() > MAX_FRACTION_DIGITS {
            return Err(ParseAmountError::TooPrecise(text.to_owned()));
        }

        let out_of_range = || ParseAmountError::OutOfRange(text.to_owned());

        let units: i64 = if units.is_empty() {
            0
        } else {
            units.parse().map_err(|_| out_of_range())?
        };

        // Right pad so that "1.5" is read as 50 cents rather than 5.
        let cents: i64 = format!("{fraction:0<width$}", width = MAX_FRACTION_DIGITS)
            .parse()
            .map_err(|_| ParseAmountError::NotANumber(text.to_owned()))?;

        let total = units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|whole| whole.checked_add(cents))
            .ok_or_else(out_of_range)?;

        Ok(Amount(if is_negative { -total } else { total }))
    }
}

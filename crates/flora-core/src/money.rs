//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                    │
//! │                                                                │
//! │  In JavaScript/floating point:                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                  │
//! │                                                                │
//! │  OUR SOLUTION: Integer Centavos                                │
//! │    R$ 150,00 is stored as 15000                                │
//! │    Parsing and formatting happen only at the boundaries        │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use flora_core::money::Money;
//!
//! // Create from centavos (preferred)
//! let total = Money::from_cents(15000); // R$ 150,00
//!
//! // Parse form input
//! let typed = Money::from_decimal_str("99.90").unwrap();
//! assert_eq!(typed.cents(), 9990);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (centavos for BRL).
///
/// Signed so that subtraction stays closed; order totals themselves are
/// validated non-negative at the form boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use flora_core::money::Money;
    ///
    /// let total = Money::from_cents(15000); // R$ 150,00
    /// assert_eq!(total.cents(), 15000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal string ("150", "99.90", "99,90") into Money.
    ///
    /// Accepts an optional leading minus, a whole part, and at most two
    /// fraction digits behind a single `.` or `,` separator. Returns `None`
    /// for anything else — there is no NaN to smuggle through here.
    ///
    /// ## Example
    /// ```rust
    /// use flora_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal_str("150").unwrap().cents(), 15000);
    /// assert_eq!(Money::from_decimal_str("99.9").unwrap().cents(), 9990);
    /// assert_eq!(Money::from_decimal_str("99,90").unwrap().cents(), 9990);
    /// assert!(Money::from_decimal_str("abc").is_none());
    /// ```
    pub fn from_decimal_str(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        if digits.is_empty() {
            return None;
        }

        let (whole, frac) = match digits.find(|c| c == '.' || c == ',') {
            Some(pos) => (&digits[..pos], &digits[pos + 1..]),
            None => (digits, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        if frac.len() > 2 {
            return None;
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().ok()?
        };
        let frac_cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().ok()? * 10,
            _ => frac.parse::<i64>().ok()?,
        };

        let cents = whole.checked_mul(100)?.checked_add(frac_cents)?;
        Some(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (reais) portion.
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (centavos) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// This is for logs and error messages. The UI formats amounts through
/// `ConfigState::format_currency` to honor the configured symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.reais().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(15000);
        assert_eq!(money.cents(), 15000);
        assert_eq!(money.reais(), 150);
        assert_eq!(money.cents_part(), 0);
    }

    #[test]
    fn test_from_decimal_str_whole() {
        assert_eq!(Money::from_decimal_str("150").unwrap().cents(), 15000);
        assert_eq!(Money::from_decimal_str("0").unwrap().cents(), 0);
        assert_eq!(Money::from_decimal_str(" 220 ").unwrap().cents(), 22000);
    }

    #[test]
    fn test_from_decimal_str_fraction() {
        assert_eq!(Money::from_decimal_str("99.90").unwrap().cents(), 9990);
        assert_eq!(Money::from_decimal_str("99.9").unwrap().cents(), 9990);
        assert_eq!(Money::from_decimal_str("99,90").unwrap().cents(), 9990);
        assert_eq!(Money::from_decimal_str(".50").unwrap().cents(), 50);
        assert_eq!(Money::from_decimal_str("180.").unwrap().cents(), 18000);
    }

    #[test]
    fn test_from_decimal_str_negative() {
        assert_eq!(Money::from_decimal_str("-5.50").unwrap().cents(), -550);
        assert!(Money::from_decimal_str("-5.50").unwrap().is_negative());
    }

    #[test]
    fn test_from_decimal_str_rejects_garbage() {
        assert!(Money::from_decimal_str("").is_none());
        assert!(Money::from_decimal_str("   ").is_none());
        assert!(Money::from_decimal_str("abc").is_none());
        assert!(Money::from_decimal_str("12.345").is_none()); // sub-centavo
        assert!(Money::from_decimal_str("1.2.3").is_none());
        assert!(Money::from_decimal_str("1,234.56").is_none()); // thousands separator
        assert!(Money::from_decimal_str("NaN").is_none());
        assert!(Money::from_decimal_str("-").is_none());
        assert!(Money::from_decimal_str("12e3").is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(15000)), "150.00");
        assert_eq!(format!("{}", Money::from_cents(9990)), "99.90");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(15000);
        let b = Money::from_cents(22000);

        assert_eq!((a + b).cents(), 37000);
        assert_eq!((b - a).cents(), 7000);

        let mut sum = Money::zero();
        sum += a;
        sum += b;
        assert_eq!(sum.cents(), 37000);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert_eq!(Money::default(), zero);

        assert!(Money::from_cents(-1).is_negative());
        assert!(!Money::from_cents(1).is_negative());
    }

    #[test]
    fn test_serde_wire_format_is_cents() {
        let json = serde_json::to_string(&Money::from_cents(9990)).unwrap();
        assert_eq!(json, "9990");

        let back: Money = serde_json::from_str("15000").unwrap();
        assert_eq!(back, Money::from_cents(15000));
    }
}

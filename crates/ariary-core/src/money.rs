//! # Money Module
//!
//! Provides the `Money` type for ariary amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE ARIARY HAS NO MINOR UNIT                                           │
//! │                                                                         │
//! │  Prices, totals and payments are whole ariary:                         │
//! │    12 500 Ar, never 12 500.40 Ar                                       │
//! │                                                                         │
//! │  Floats only show up transiently (tax, discount percentages).          │
//! │  They are rounded once, at the boundary, by Money::from_amount.        │
//! │                                                                         │
//! │  After that every sum is exact i64 arithmetic.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ariary_core::money::Money;
//!
//! let price = Money::from_ariary(2_500);
//! let total = price * 3 + Money::from_ariary(500);
//!
//! assert_eq!(total.ariary(), 8_000);
//! assert_eq!(total.to_string(), "8 000 Ar");
//! assert_eq!(total.in_words(), "huit mille ariary");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::validation::{admit_amount, admit_money, ValidationResult};
use crate::words::{receipt_sentence, spell_whole_amount, INVALID_AMOUNT_SENTINEL};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole ariary.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and change due
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support, TypeScript binding for the register UI
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Sale total ──► Money ──┬──► Display: "12 500 Ar"                       │
/// │                         │                                               │
/// │                         └──► in_words(): "douze mille cinq cents ariary"│
/// │                                  │                                      │
/// │                                  ├──► printed receipt                   │
/// │                                  └──► sale email (amount_in_words)      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole ariary.
    ///
    /// ## Example
    /// ```rust
    /// use ariary_core::money::Money;
    ///
    /// let price = Money::from_ariary(12_500);
    /// assert_eq!(price.ariary(), 12_500);
    /// ```
    #[inline]
    pub const fn from_ariary(ariary: i64) -> Self {
        Money(ariary)
    }

    /// Creates a Money value from a computed float amount, rounding half-up.
    ///
    /// ## Example
    /// ```rust
    /// use ariary_core::money::Money;
    ///
    /// // 18% tax on 1 234 Ar
    /// let tax = Money::from_amount(1_234.0 * 0.18).unwrap();
    /// assert_eq!(tax.ariary(), 222);
    ///
    /// assert!(Money::from_amount(f64::NAN).is_err());
    /// ```
    pub fn from_amount(amount: f64) -> ValidationResult<Self> {
        // MAX_SPELLABLE_AMOUNT fits comfortably in i64.
        admit_amount(amount).map(|whole| Money(whole as i64))
    }

    /// Returns the value in ariary.
    #[inline]
    pub const fn ariary(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    ///
    /// ## Example
    /// ```rust
    /// use ariary_core::money::Money;
    ///
    /// let refund = Money::from_ariary(-550);
    /// assert_eq!(refund.abs().ariary(), 550);
    /// ```
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use ariary_core::money::Money;
    ///
    /// let unit_price = Money::from_ariary(1_200);
    /// assert_eq!(unit_price.multiply_quantity(3).ariary(), 3_600);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Spells the amount in French, or returns the invalid-amount sentinel
    /// for negative values.
    ///
    /// ## Example
    /// ```rust
    /// use ariary_core::money::Money;
    ///
    /// assert_eq!(Money::from_ariary(1_001).in_words(), "mille un ariary");
    /// assert_eq!(Money::from_ariary(-1).in_words(), "montant invalide");
    /// ```
    pub fn in_words(&self) -> String {
        admit_money(*self)
            .map(spell_whole_amount)
            .unwrap_or_else(|_| INVALID_AMOUNT_SENTINEL.to_string())
    }

    /// Receipt sentence for this amount.
    ///
    /// ## Example
    /// ```rust
    /// use ariary_core::money::Money;
    ///
    /// assert_eq!(
    ///     Money::from_ariary(200).format_in_words(),
    ///     "Arrêté à la somme de : deux cents ariary."
    /// );
    /// ```
    pub fn format_in_words(&self) -> String {
        receipt_sentence(&self.in_words())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Groups thousands with a space, as on Malagasy receipts: `1 234 567 Ar`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{} Ar", sign, group_thousands(self.0.unsigned_abs()))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    grouped
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing line totals into a sale total.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AmountError;

    #[test]
    fn test_from_ariary() {
        let money = Money::from_ariary(12_500);
        assert_eq!(money.ariary(), 12_500);
    }

    #[test]
    fn test_from_amount_rounds_once() {
        assert_eq!(Money::from_amount(21.7).unwrap().ariary(), 22);
        assert_eq!(Money::from_amount(21.3).unwrap().ariary(), 21);
        assert_eq!(
            Money::from_amount(-4.0),
            Err(AmountError::Negative(-4.0))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_ariary(0).to_string(), "0 Ar");
        assert_eq!(Money::from_ariary(500).to_string(), "500 Ar");
        assert_eq!(Money::from_ariary(12_500).to_string(), "12 500 Ar");
        assert_eq!(Money::from_ariary(1_234_567).to_string(), "1 234 567 Ar");
        assert_eq!(Money::from_ariary(-550).to_string(), "-550 Ar");
        assert_eq!(Money::from_ariary(-100_000).to_string(), "-100 000 Ar");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_ariary(1000);
        let b = Money::from_ariary(500);

        assert_eq!((a + b).ariary(), 1500);
        assert_eq!((a - b).ariary(), 500);
        assert_eq!((a * 3).ariary(), 3000);

        let mut c = a;
        c += b;
        c -= Money::from_ariary(200);
        assert_eq!(c.ariary(), 1300);
    }

    #[test]
    fn test_sum_of_line_totals() {
        let lines = [
            Money::from_ariary(1_200).multiply_quantity(2),
            Money::from_ariary(800),
            Money::from_ariary(18_000),
        ];
        let total: Money = lines.iter().copied().sum();
        assert_eq!(total.ariary(), 21_200);
        assert_eq!(total.in_words(), "vingt et un mille deux cents ariary");
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());
        assert_eq!(zero, Money::default());

        let negative = Money::from_ariary(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().ariary(), 100);
    }

    #[test]
    fn test_in_words_matches_float_entry_point() {
        for n in [0_i64, 1, 80, 200, 1_001, 21_000, 1_234_567, 2_000_000] {
            assert_eq!(
                Money::from_ariary(n).in_words(),
                crate::words::convert_amount_to_words(n as f64)
            );
        }
        assert_eq!(Money::from_ariary(-1).in_words(), "montant invalide");
    }

    #[test]
    fn test_format_in_words() {
        assert_eq!(
            Money::zero().format_in_words(),
            "Arrêté à la somme de : zéro ariary."
        );
    }
}

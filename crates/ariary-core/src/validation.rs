//! # Validation Module
//!
//! Decides whether an amount can be spelled, and rounds it.
//!
//! ## Where Amounts Come From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Amount Admission                                   │
//! │                                                                         │
//! │  Sale total in the register UI                                         │
//! │  ├── already whole ariary (most sales)                                 │
//! │  └── fractional after tax / discount arithmetic (21.7)                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  admit_amount() ← THIS MODULE                                          │
//! │  ├── NaN, ±∞, negative, oversized → AmountError                        │
//! │  └── rounds half-up exactly once → u64                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  words::convert_integer()                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ariary_core::validation::admit_amount;
//!
//! assert_eq!(admit_amount(21.7).unwrap(), 22);
//! assert!(admit_amount(-1.0).is_err());
//! ```

use crate::error::AmountError;
use crate::money::Money;
use crate::MAX_SPELLABLE_AMOUNT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, AmountError>;

// =============================================================================
// Amount Validators
// =============================================================================

/// Admits a floating-point amount and rounds it to whole ariary.
///
/// ## Rules
/// - NaN and infinities are refused
/// - Negative amounts are refused (`-0.0` is zero, not negative)
/// - Rounding is half-up: 0.5 → 1, 21.5 → 22
/// - The rounded value must not exceed [`MAX_SPELLABLE_AMOUNT`]
///
/// ## Example
/// ```rust
/// use ariary_core::validation::admit_amount;
/// use ariary_core::AmountError;
///
/// assert_eq!(admit_amount(21.3).unwrap(), 21);
/// assert_eq!(admit_amount(f64::NAN), Err(AmountError::NotANumber));
/// ```
pub fn admit_amount(amount: f64) -> ValidationResult<u64> {
    if amount.is_nan() {
        return Err(AmountError::NotANumber);
    }

    if amount.is_infinite() {
        return Err(AmountError::NotFinite(amount));
    }

    if amount < 0.0 {
        return Err(AmountError::Negative(amount));
    }

    // Half-up and half-away-from-zero agree on non-negative values.
    let rounded = amount.round();

    if rounded > MAX_SPELLABLE_AMOUNT as f64 {
        return Err(AmountError::TooLarge {
            value: rounded,
            max: MAX_SPELLABLE_AMOUNT,
        });
    }

    Ok(rounded as u64)
}

/// Admits an integer amount.
///
/// ## Example
/// ```rust
/// use ariary_core::money::Money;
/// use ariary_core::validation::admit_money;
///
/// assert_eq!(admit_money(Money::from_ariary(12_500)).unwrap(), 12_500);
/// assert!(admit_money(Money::from_ariary(-500)).is_err());
/// ```
pub fn admit_money(money: Money) -> ValidationResult<u64> {
    let ariary = money.ariary();

    if ariary < 0 {
        return Err(AmountError::Negative(ariary as f64));
    }

    let whole = ariary as u64;
    if whole > MAX_SPELLABLE_AMOUNT {
        return Err(AmountError::TooLarge {
            value: ariary as f64,
            max: MAX_SPELLABLE_AMOUNT,
        });
    }

    Ok(whole)
}

// =============================================================================
// Unit Tests
// =============================================================================

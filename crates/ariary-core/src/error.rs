//! # Error Types
//!
//! Domain-specific error types for ariary-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ariary-core errors (this file)                                        │
//! │  └── AmountError     - Amount cannot be spelled                        │
//! │                                                                         │
//! │  ariary-cli errors (separate crate)                                    │
//! │  ├── ConfigError     - Config file / environment problems              │
//! │  └── CliError        - What the command line reports                   │
//! │                                                                         │
//! │  Template entry points never surface AmountError: they degrade to      │
//! │  the "montant invalide" sentinel instead.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Amount Error
// =============================================================================

/// Why an amount was refused.
///
/// ## When This Occurs
/// ```text
/// Sale total (f64, after tax math)
///      │
///      ▼
/// admit_amount()
///      │
///      ├── NaN                → NotANumber
///      ├── ±∞                 → NotFinite
///      ├── < 0                → Negative
///      └── > 10^15 - 1        → TooLarge
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AmountError {
    /// Amount is NaN (usually an empty or garbled input field upstream).
    #[error("Amount is not a number")]
    NotANumber,

    /// Amount is infinite.
    #[error("Amount is not finite: {0}")]
    NotFinite(f64),

    /// Amount is below zero.
    #[error("Amount must not be negative: {0}")]
    Negative(f64),

    /// Rounded amount is beyond what can be spelled.
    #[error("Amount {value} exceeds maximum spellable amount ({max})")]
    TooLarge { value: f64, max: u64 },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(AmountError::NotANumber.to_string(), "Amount is not a number");
        assert_eq!(
            AmountError::Negative(-1.5).to_string(),
            "Amount must not be negative: -1.5"
        );
        assert_eq!(
            AmountError::NotFinite(f64::INFINITY).to_string(),
            "Amount is not finite: inf"
        );

        let err = AmountError::TooLarge {
            value: 1e16,
            max: 999_999_999_999_999,
        };
        assert_eq!(
            err.to_string(),
            "Amount 10000000000000000 exceeds maximum spellable amount (999999999999999)"
        );
    }
}

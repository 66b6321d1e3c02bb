//! # ariary-core: Amount-In-Words for Ariary Receipts
//!
//! This crate turns sale totals into the French phrase printed on every
//! receipt and sent in every sale email. It is pure: no I/O, no state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ariary POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Register UI / receipt templates / email relay         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ sale total (number)                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ariary-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   words   │  │   money   │  │  receipt  │  │ validation│  │   │
//! │  │   │ speller   │  │   Money   │  │  payloads │  │  rounding │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 ariary-cli (command line front end)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`words`] - French amount speller and its receipt/email wrappers
//! - [`money`] - Money type in whole ariary
//! - [`receipt`] - Payloads for receipts, emails and the register UI
//! - [`validation`] - Amount admission and rounding
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output
//! 2. **Total**: template entry points never fail, bad input prints "montant invalide"
//! 3. **Round Once**: float amounts are rounded at the entry point, nowhere else
//! 4. **Explicit Errors**: the tagged API returns typed [`AmountError`]s
//!
//! ## Example Usage
//!
//! ```rust
//! use ariary_core::{convert_amount_to_words, format_amount_in_words, Money};
//!
//! assert_eq!(convert_amount_to_words(1_234_567.0),
//!     "un million deux cent trente-quatre mille cinq cent soixante-sept ariary");
//!
//! let total = Money::from_ariary(2_000);
//! assert_eq!(total.format_in_words(), format_amount_in_words(2_000.0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod receipt;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::AmountError;
pub use money::Money;
pub use receipt::{AmountInWords, EmailTemplateParams};
pub use words::{
    convert_amount_to_words, format_amount_in_words, get_amount_in_words, spell_amount,
    spell_integer, INVALID_AMOUNT_SENTINEL,
};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest amount that can be spelled.
///
/// Stays below 2^53 so every admitted amount is an exact `f64` integer.
pub const MAX_SPELLABLE_AMOUNT: u64 = 999_999_999_999_999;

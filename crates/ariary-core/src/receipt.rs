//! # Receipt Payloads
//!
//! Shapes the amount-in-words for the places that print or send it.
//!
//! ## Consumers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Who Uses What                                   │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────────┐                     │
//! │  │  Printed receipt    │   │  Sale email         │                     │
//! │  │  ─────────────────  │   │  ─────────────────  │                     │
//! │  │  receipt_total_line │   │  EmailTemplateParams│                     │
//! │  │  "Arrêté à la       │   │  amount_in_words =  │                     │
//! │  │   somme de : ... ." │   │  "... ariary"       │                     │
//! │  └─────────────────────┘   └─────────────────────┘                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────┐                   │
//! │  │  Register UI (TypeScript)                       │                   │
//! │  │  ─────────────────────────────────────────────  │                   │
//! │  │  AmountInWords { amount, words, sentence }      │                   │
//! │  └─────────────────────────────────────────────────┘                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::money::Money;
use crate::validation::{admit_amount, admit_money};
use crate::words::{format_amount_in_words, get_amount_in_words, INVALID_AMOUNT_SENTINEL};

/// Email template variable holding the bare phrase.
pub const AMOUNT_IN_WORDS_KEY: &str = "amount_in_words";

/// Email template variable holding the formatted total.
pub const AMOUNT_KEY: &str = "amount";

// =============================================================================
// Amount In Words
// =============================================================================

/// An amount together with both of its spelled forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AmountInWords {
    /// Rounded amount in ariary. `None` when the input was refused.
    #[ts(type = "number | null")]
    pub amount: Option<u64>,

    /// Bare phrase, or the invalid-amount sentinel.
    pub words: String,

    /// Receipt sentence wrapping `words`.
    pub sentence: String,
}

impl AmountInWords {
    /// Builds the payload for a computed float total.
    ///
    /// ## Example
    /// ```rust
    /// use ariary_core::receipt::AmountInWords;
    ///
    /// let payload = AmountInWords::from_amount(21.7);
    /// assert_eq!(payload.amount, Some(22));
    /// assert_eq!(payload.words, "vingt-deux ariary");
    /// ```
    pub fn from_amount(amount: f64) -> Self {
        AmountInWords {
            amount: admit_amount(amount).ok(),
            words: get_amount_in_words(amount),
            sentence: format_amount_in_words(amount),
        }
    }

    /// Builds the payload for an integer total.
    pub fn from_money(money: Money) -> Self {
        AmountInWords {
            amount: admit_money(money).ok(),
            words: money.in_words(),
            sentence: money.format_in_words(),
        }
    }

    /// Whether the amount could be spelled.
    pub fn is_valid(&self) -> bool {
        self.amount.is_some()
    }
}

/// The "amount in words" line printed under the receipt totals.
pub fn receipt_total_line(amount: f64) -> String {
    format_amount_in_words(amount)
}

// =============================================================================
// Email Template Params
// =============================================================================

/// Variables handed to the email relay for a sale email.
///
/// Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailTemplateParams(BTreeMap<String, String>);

impl EmailTemplateParams {
    /// Params for a sale total: `amount` and `amount_in_words`.
    ///
    /// ## Example
    /// ```rust
    /// use ariary_core::receipt::EmailTemplateParams;
    ///
    /// let params = EmailTemplateParams::for_total(12_500.0);
    /// assert_eq!(params.get("amount"), Some("12 500 Ar"));
    /// assert_eq!(
    ///     params.get("amount_in_words"),
    ///     Some("douze mille cinq cents ariary")
    /// );
    /// ```
    pub fn for_total(amount: f64) -> Self {
        let formatted = match Money::from_amount(amount) {
            Ok(money) => money.to_string(),
            Err(_) => INVALID_AMOUNT_SENTINEL.to_string(),
        };

        EmailTemplateParams::default()
            .with(AMOUNT_KEY, formatted)
            .with(AMOUNT_IN_WORDS_KEY, get_amount_in_words(amount))
    }

    /// Adds or replaces a variable.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Looks up a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// JSON object for the relay's `template_params` field.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_in_words_valid() {
        let payload = AmountInWords::from_amount(1_234_567.0);
        assert!(payload.is_valid());
        assert_eq!(payload.amount, Some(1_234_567));
        assert_eq!(
            payload.words,
            "un million deux cent trente-quatre mille cinq cent soixante-sept ariary"
        );
        assert_eq!(
            payload.sentence,
            "Arrêté à la somme de : un million deux cent trente-quatre mille cinq cent soixante-sept ariary."
        );
    }

    #[test]
    fn test_amount_in_words_invalid() {
        let payload = AmountInWords::from_amount(f64::NAN);
        assert!(!payload.is_valid());
        assert_eq!(payload.words, "montant invalide");
        assert_eq!(payload.sentence, "Arrêté à la somme de : montant invalide.");
    }

    #[test]
    fn test_from_money_agrees_with_from_amount() {
        for n in [0_i64, 80, 101, 21_000, 2_000_000] {
            assert_eq!(
                AmountInWords::from_money(Money::from_ariary(n)),
                AmountInWords::from_amount(n as f64)
            );
        }
        assert_eq!(
            AmountInWords::from_money(Money::from_ariary(-1)),
            AmountInWords::from_amount(-1.0)
        );
    }

    #[test]
    fn test_from_money_uses_money_phrases() {
        for n in [-1_i64, 0, 71, 200_000, 1_234_567] {
            let money = Money::from_ariary(n);
            let payload = AmountInWords::from_money(money);
            assert_eq!(payload.words, money.in_words());
            assert_eq!(payload.sentence, money.format_in_words());
        }
    }

    #[test]
    fn test_amount_in_words_serializes_camel_case() {
        let json = serde_json::to_value(AmountInWords::from_amount(100.0)).unwrap();
        assert_eq!(json["amount"], 100);
        assert_eq!(json["words"], "cent ariary");
        assert_eq!(json["sentence"], "Arrêté à la somme de : cent ariary.");

        let invalid = serde_json::to_value(AmountInWords::from_amount(-1.0)).unwrap();
        assert!(invalid["amount"].is_null());
    }

    #[test]
    fn test_receipt_total_line() {
        assert_eq!(
            receipt_total_line(2000.0),
            "Arrêté à la somme de : deux mille ariary."
        );
    }

    #[test]
    fn test_email_params() {
        let params = EmailTemplateParams::for_total(80.0).with("customer_name", "Rakoto");
        assert_eq!(params.len(), 3);
        assert_eq!(params.get(AMOUNT_IN_WORDS_KEY), Some("quatre-vingt ariary"));
        assert_eq!(params.get(AMOUNT_KEY), Some("80 Ar"));
        assert_eq!(params.get("customer_name"), Some("Rakoto"));

        let json: serde_json::Value = serde_json::from_str(&params.to_json().unwrap()).unwrap();
        assert_eq!(json["amount_in_words"], "quatre-vingt ariary");
    }

    #[test]
    fn test_email_params_invalid_total() {
        let params = EmailTemplateParams::for_total(-3.0);
        assert_eq!(params.get(AMOUNT_KEY), Some("montant invalide"));
        assert_eq!(params.get(AMOUNT_IN_WORDS_KEY), Some("montant invalide"));
    }
}

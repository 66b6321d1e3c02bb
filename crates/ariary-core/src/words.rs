//! # Amount In Words
//!
//! Spells an ariary amount out in French, the way it is printed under the
//! total of every receipt and sent in every sale email.
//!
//! ## Decomposition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1 234 567.4 Ar                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  admit_amount() ── NaN / negative / too large ──► "montant invalide"    │
//! │       │ rounds once: 1 234 567                                          │
//! │       ▼                                                                 │
//! │  convert_integer()   peels scales, largest first                        │
//! │    ├── 1       × 10^6  ──► "un million"                                 │
//! │    ├── 234     × 10^3  ──► "deux cent trente-quatre mille"              │
//! │    └── 567             ──► "cinq cent soixante-sept"                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "... soixante-sept" + " ariary"                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## French Counting Rules Applied
//! - 17..19 are full table entries ("dix-sept"), never composed here
//! - 70..79 and 90..99 reuse the teens: 71 = "soixante-onze"
//! - "et un" after vingt..soixante only: 21 = "vingt et un", 81 = "quatre-vingt-un"
//! - 80 is "quatre-vingt", without the plural "s"
//! - "cents" only on a bare multiple: 200 = "deux cents", 201 = "deux cent un"
//! - "mille" never takes an "s" and never a leading "un"
//! - "million" / "milliard" take an "s" above one
//!
//! ## Usage
//! ```rust
//! use ariary_core::words::{convert_amount_to_words, format_amount_in_words};
//!
//! assert_eq!(convert_amount_to_words(21.0), "vingt et un ariary");
//! assert_eq!(
//!     format_amount_in_words(2000.0),
//!     "Arrêté à la somme de : deux mille ariary."
//! );
//! assert_eq!(convert_amount_to_words(-1.0), "montant invalide");
//! ```

use crate::validation::{admit_amount, ValidationResult};

// =============================================================================
// Lexical Tables
// =============================================================================

/// Currency name appended to every phrase. Invariant: no plural form.
pub const CURRENCY_NAME: &str = "ariary";

/// Returned instead of a phrase when the amount cannot be spelled.
pub const INVALID_AMOUNT_SENTINEL: &str = "montant invalide";

/// Preamble of the receipt sentence.
pub const RECEIPT_PREAMBLE: &str = "Arrêté à la somme de : ";

const UNITS: [&str; 20] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix",
    "onze", "douze", "treize", "quatorze", "quinze", "seize", "dix-sept", "dix-huit",
    "dix-neuf",
];

// 0 and 1 are handled by the units table.
const TENS: [&str; 10] = [
    "",
    "",
    "vingt",
    "trente",
    "quarante",
    "cinquante",
    "soixante",
    "soixante-dix",
    "quatre-vingt",
    "quatre-vingt-dix",
];

/// Scale boundaries, largest first.
const SCALES: [(u64, &str); 4] = [
    (1_000_000_000, "milliard"),
    (1_000_000, "million"),
    (1_000, "mille"),
    (100, "cent"),
];

const THOUSAND: u64 = SCALES[2].0;
const HUNDRED: (u64, &str) = SCALES[3];

// =============================================================================
// Public API
// =============================================================================

/// Converts an amount into French words followed by the currency name.
///
/// Never fails: NaN, infinite, negative and oversized amounts all come back
/// as [`INVALID_AMOUNT_SENTINEL`], so the result can be dropped straight into
/// a receipt template.
///
/// ## Example
/// ```rust
/// use ariary_core::words::convert_amount_to_words;
///
/// assert_eq!(convert_amount_to_words(0.0), "zéro ariary");
/// assert_eq!(convert_amount_to_words(21.7), "vingt-deux ariary");
/// assert_eq!(convert_amount_to_words(f64::NAN), "montant invalide");
/// ```
pub fn convert_amount_to_words(amount: f64) -> String {
    spell_amount(amount).unwrap_or_else(|_| INVALID_AMOUNT_SENTINEL.to_string())
}

/// Receipt form: `"Arrêté à la somme de : <words>."`
///
/// ## Example
/// ```rust
/// use ariary_core::words::format_amount_in_words;
///
/// assert_eq!(
///     format_amount_in_words(100.0),
///     "Arrêté à la somme de : cent ariary."
/// );
/// ```
pub fn format_amount_in_words(amount: f64) -> String {
    receipt_sentence(&convert_amount_to_words(amount))
}

/// Bare phrase, for templates that supply their own surrounding text.
pub fn get_amount_in_words(amount: f64) -> String {
    convert_amount_to_words(amount)
}

/// Tagged variant of [`convert_amount_to_words`].
///
/// ## Example
/// ```rust
/// use ariary_core::words::spell_amount;
/// use ariary_core::AmountError;
///
/// assert_eq!(spell_amount(1000.0).unwrap(), "mille ariary");
/// assert!(matches!(spell_amount(-3.0), Err(AmountError::Negative(_))));
/// ```
pub fn spell_amount(amount: f64) -> ValidationResult<String> {
    admit_amount(amount).map(spell_whole_amount)
}

/// Spells a whole number without the currency name.
///
/// ## Example
/// ```rust
/// use ariary_core::words::spell_integer;
///
/// assert_eq!(spell_integer(80), "quatre-vingt");
/// assert_eq!(spell_integer(2_000_000), "deux millions");
/// ```
pub fn spell_integer(n: u64) -> String {
    convert_integer(n)
}

/// Phrase for an already admitted amount, currency included.
pub(crate) fn spell_whole_amount(whole: u64) -> String {
    format!("{} {}", spell_integer(whole), CURRENCY_NAME)
}

/// Wraps a phrase (or the sentinel) in the receipt preamble.
pub(crate) fn receipt_sentence(words: &str) -> String {
    format!("{}{}.", RECEIPT_PREAMBLE, words)
}

// =============================================================================
// Decomposition
// =============================================================================

fn convert_integer(n: u64) -> String {
    if n == 0 {
        return UNITS[0].to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let mut remainder = n;

    for &(magnitude, name) in SCALES.iter().filter(|(m, _)| *m >= THOUSAND) {
        let count = remainder / magnitude;
        if count == 0 {
            continue;
        }

        if magnitude == THOUSAND {
            if count == 1 {
                parts.push(name.to_string());
            } else {
                parts.push(format!("{} {}", convert_hundreds(count), name));
            }
        } else {
            // Only the milliard count can reach 1000 ("mille milliards").
            let count_words = if count < THOUSAND {
                convert_hundreds(count)
            } else {
                convert_integer(count)
            };
            let plural = if count > 1 { "s" } else { "" };
            parts.push(format!("{} {}{}", count_words, name, plural));
        }

        remainder %= magnitude;
    }

    if remainder > 0 {
        parts.push(convert_hundreds(remainder));
    }

    parts.join(" ")
}

/// 0..=999. Zero contributes nothing.
fn convert_hundreds(n: u64) -> String {
    let (hundred, cent) = HUNDRED;
    let hundreds = n / hundred;
    let rest = n % hundred;

    let mut parts: Vec<String> = Vec::with_capacity(2);

    match hundreds {
        0 => {}
        1 => parts.push(cent.to_string()),
        h if rest == 0 => parts.push(format!("{} {}s", UNITS[h as usize], cent)),
        h => parts.push(format!("{} {}", UNITS[h as usize], cent)),
    }

    if rest > 0 {
        parts.push(convert_tens(rest));
    }

    parts.join(" ")
}

/// 0..=99.
fn convert_tens(n: u64) -> String {
    if n < 20 {
        return UNITS[n as usize].to_string();
    }

    let tens = (n / 10) as usize;
    let units = (n % 10) as usize;

    match (tens, units) {
        (7, 0) | (9, 0) => TENS[tens].to_string(),
        (7, u) => format!("{}-{}", TENS[6], UNITS[10 + u]),
        (9, u) => format!("{}-{}", TENS[8], UNITS[10 + u]),
        (t, 0) => TENS[t].to_string(),
        (t, 1) if t != 8 => format!("{} et un", TENS[t]),
        (t, u) => format!("{}-{}", TENS[t], UNITS[u]),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

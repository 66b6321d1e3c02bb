//! # Command Output
//!
//! Turns raw amount arguments into what the `ariary` command prints.
//!
//! ```text
//! "12 500"  ──► parse_amount ──► 12500.0 ──► AmountInWords ──► text / JSON
//! "abc"     ──► parse_amount ──► NaN     ──► "montant invalide" (exit 2)
//! ```

use std::io::Write;

use ariary_core::receipt::{receipt_total_line, AmountInWords, EmailTemplateParams};
use ariary_core::words::get_amount_in_words;
use tracing::{debug, warn};

use crate::config::OutputFormat;
use crate::error::{CliError, CliResult};

/// Which form of the phrase to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    /// Bare phrase: `"cent ariary"`.
    Words,
    /// Receipt sentence: `"Arrêté à la somme de : cent ariary."`
    Receipt,
}

/// Rendered output plus whether every amount could be spelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub output: String,
    pub all_valid: bool,
}

/// Parses an amount argument.
///
/// Accepts space / underscore digit grouping and a decimal comma. Anything
/// else that fails to parse becomes NaN so it spells as the sentinel.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    match cleaned.parse::<f64>() {
        Ok(amount) => amount,
        Err(e) => {
            warn!(raw, error = %e, "Unparsable amount");
            f64::NAN
        }
    }
}

/// Renders one phrase per amount.
pub fn render_amounts(raw: &[String], phrase: Phrase, format: OutputFormat) -> CliResult<Report> {
    let records: Vec<AmountInWords> = raw
        .iter()
        .map(|r| {
            let amount = parse_amount(r);
            let record = AmountInWords::from_amount(amount);
            debug!(raw = %r, amount, words = %record.words, "Spelled amount");
            record
        })
        .collect();

    let all_valid = records.iter().all(AmountInWords::is_valid);

    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&records)?,
        OutputFormat::Text => records
            .iter()
            .map(|record| match phrase {
                Phrase::Words => record.words.clone(),
                Phrase::Receipt => record.sentence.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };

    Ok(Report { output, all_valid })
}

/// Renders the email template variables for one sale total.
pub fn render_email(raw: &str, vars: &[String], format: OutputFormat) -> CliResult<Report> {
    let amount = parse_amount(raw);
    let mut params = EmailTemplateParams::for_total(amount);

    for var in vars {
        let (key, value) = var
            .split_once('=')
            .filter(|(key, _)| !key.trim().is_empty())
            .ok_or_else(|| CliError::InvalidVar(var.clone()))?;
        params = params.with(key.trim(), value);
    }

    let all_valid = AmountInWords::from_amount(amount).is_valid();

    let output = match format {
        OutputFormat::Json => params.to_json()?,
        OutputFormat::Text => {
            let mut lines = vec![
                format!("amount_in_words = {}", get_amount_in_words(amount)),
                receipt_total_line(amount),
            ];
            lines.extend(vars.iter().cloned());
            lines.join("\n")
        }
    };

    Ok(Report { output, all_valid })
}

/// Writes the report followed by a newline.
pub fn write_report<W: Write>(report: &Report, mut out: W) -> CliResult<()> {
    writeln!(out, "{}", report.output)?;
    out.flush()?;
    Ok(())
}

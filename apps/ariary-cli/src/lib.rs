//! # Ariary CLI
//!
//! Command line front end over `ariary-core`, for shell scripts and the
//! receipt / email template builders.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           ariary CLI                                    │
//! │                                                                         │
//! │  logging::init ──► config (file → env → flags) ──► output ──► stdout   │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                                        ariary-core                      │
//! │                                                                         │
//! │  logs ──► tracing-subscriber ──► stderr                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `ARIARY_FORMAT` - Output format (`text` or `json`)
//! - `ARIARY_LOG` - Log filter (e.g. `debug`, `ariary_cli=trace`)

pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use config::{CliConfig, OutputFormat};
pub use error::{CliError, CliResult, ConfigError};
pub use output::{Phrase, Report};

#![forbid(unsafe_code)]
//! Translation coverage auditing for web UIs localized with JSON catalogs.
//!
//! Scans UI sources for `t('some.key')` lookups and for text that skipped the
//! translation layer, flattens each locale's `translation.json`, and reports
//! missing keys per locale, unused keys, and files with hardcoded strings.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langaudit::{AuditOptions, audit};
//!
//! let report = audit(&AuditOptions::default())?;
//! for locale in &report.locales {
//!     println!("{}: {} missing", locale.locale, locale.missing.len());
//! }
//! std::process::exit(if report.is_passing() { 0 } else { 1 });
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Limitations
//!
//! Key extraction is lexical. Only string-literal arguments are seen, so
//! computed keys such as `` t(`plans.${tier}`) `` are never reported as used.
//! Hardcoded-string detection is heuristic and tolerates false positives.

pub mod audit;
pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod heuristics;
pub mod scan;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    audit::{AuditReport, FileUsage, LocaleCoverage, analyze_files, audit},
    catalog::{CatalogTree, discover_locales, flatten, load_catalog},
    config::{AuditOptions, DEFAULT_CONFIG_FILE},
    error::Error,
    extract::extract_used_keys,
    heuristics::{HeuristicConfig, find_hardcoded_strings},
    scan::{SourceFilter, SourceScan, collect_source_files},
    types::{HardcodedStringFinding, SkippedFile, SourceFile, TranslationKey},
};

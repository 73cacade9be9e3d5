//! The audit pass: scan sources, load catalogs, compare.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    catalog::{catalog_path, load_catalog},
    config::AuditOptions,
    error::Error,
    extract::extract_used_keys,
    heuristics::{BoxedHeuristic, detect_with},
    scan::collect_source_files,
    types::{HardcodedStringFinding, SkippedFile, SourceFile, TranslationKey},
};

/// Coverage of one required locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocaleCoverage {
    pub locale: String,
    pub catalog_path: PathBuf,
    /// Whether the catalog file existed. An absent catalog audits as empty.
    pub present: bool,
    /// Number of flattened keys in the catalog.
    pub key_count: usize,
    /// Used keys absent from the catalog, sorted.
    pub missing: Vec<TranslationKey>,
    /// Set when the catalog could not be parsed; `missing` is then empty
    /// because no comparison was possible.
    pub error: Option<String>,
}

impl LocaleCoverage {
    pub fn is_complete(&self) -> bool {
        self.error.is_none() && self.missing.is_empty()
    }
}

/// Everything one audit run found.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct AuditReport {
    pub files_scanned: usize,
    pub used_keys: BTreeSet<TranslationKey>,
    pub locales: Vec<LocaleCoverage>,
    pub primary_locale: String,
    /// Keys in the primary catalog never used in code, sorted.
    pub unused: Vec<TranslationKey>,
    /// False when the primary catalog could not be parsed.
    pub unused_available: bool,
    /// Files with suspected hardcoded text, sorted by path.
    pub hardcoded: Vec<HardcodedStringFinding>,
    pub skipped: Vec<SkippedFile>,
}

impl AuditReport {
    /// True when every required catalog loaded and contains every used key.
    pub fn is_passing(&self) -> bool {
        self.locales.iter().all(LocaleCoverage::is_complete)
    }

    pub fn locale(&self, locale: &str) -> Option<&LocaleCoverage> {
        self.locales.iter().find(|c| c.locale == locale)
    }

    /// Missing keys for `locale`, or `None` if it was not audited.
    pub fn missing_in(&self, locale: &str) -> Option<&[TranslationKey]> {
        self.locale(locale).map(|c| c.missing.as_slice())
    }

    pub fn total_missing(&self) -> usize {
        self.locales.iter().map(|c| c.missing.len()).sum()
    }
}

/// What a single source file contributes to the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileUsage {
    pub used_keys: BTreeSet<TranslationKey>,
    pub hardcoded: Vec<HardcodedStringFinding>,
}

impl FileUsage {
    /// Analyzes one file.
    pub fn of(file: &SourceFile, heuristics: &[BoxedHeuristic]) -> Self {
        let strings = detect_with(heuristics, &file.content);
        let hardcoded = if strings.is_empty() {
            Vec::new()
        } else {
            vec![HardcodedStringFinding {
                path: file.path.clone(),
                strings,
            }]
        };
        FileUsage {
            used_keys: extract_used_keys(&file.content),
            hardcoded,
        }
    }

    /// Set union of two usages. Commutative and associative up to the order
    /// of `hardcoded`, which callers sort.
    pub fn merge(mut self, other: FileUsage) -> FileUsage {
        self.used_keys.extend(other.used_keys);
        self.hardcoded.extend(other.hardcoded);
        self
    }
}

/// Analyzes `files` in parallel and merges the per-file results.
pub fn analyze_files(files: &[SourceFile], heuristics: &[BoxedHeuristic]) -> FileUsage {
    let mut usage = files
        .par_iter()
        .map(|file| FileUsage::of(file, heuristics))
        .reduce(FileUsage::default, FileUsage::merge);
    usage.hardcoded.sort_by(|a, b| a.path.cmp(&b.path));
    usage
}

/// Compares `used` against one locale's catalog.
pub fn compare_locale(
    locale: &str,
    path: &Path,
    used: &BTreeSet<TranslationKey>,
) -> (LocaleCoverage, Option<BTreeSet<TranslationKey>>) {
    let mut coverage = LocaleCoverage {
        locale: locale.to_string(),
        catalog_path: path.to_path_buf(),
        present: path.exists(),
        key_count: 0,
        missing: Vec::new(),
        error: None,
    };

    match load_catalog(path) {
        Ok(tree) => {
            let keys = tree.map(|t| t.flatten()).unwrap_or_default();
            coverage.key_count = keys.len();
            coverage.missing = used.difference(&keys).cloned().collect();
            debug!(
                locale,
                keys = coverage.key_count,
                missing = coverage.missing.len(),
                "compared catalog"
            );
            (coverage, Some(keys))
        }
        Err(e) => {
            warn!(locale, path = %path.display(), error = %e, "malformed catalog");
            coverage.error = Some(e.to_string());
            (coverage, None)
        }
    }
}

/// Runs a full audit.
///
/// Only an unreadable code root or an invalid exclusion pattern returns an
/// error. Unreadable files and malformed catalogs are recorded in the report.
pub fn audit(options: &AuditOptions) -> Result<AuditReport, Error> {
    let filter = options.source_filter()?;
    let scan = collect_source_files(&options.code_roots, &filter)?;

    let heuristics = options.heuristics.heuristics();
    debug!(
        heuristics = ?heuristics.iter().map(|h| h.name()).collect::<Vec<_>>(),
        files = scan.files.len(),
        "analyzing sources"
    );
    let usage = analyze_files(&scan.files, &heuristics);

    let mut report = AuditReport {
        files_scanned: scan.files.len(),
        primary_locale: options.primary_locale.clone(),
        hardcoded: usage.hardcoded,
        skipped: scan.skipped,
        ..AuditReport::default()
    };

    let mut primary_keys: Option<Option<BTreeSet<TranslationKey>>> = None;
    for locale in options.required_locales()? {
        let path = catalog_path(&options.locales_dir, &locale, &options.catalog_file);
        let (coverage, keys) = compare_locale(&locale, &path, &usage.used_keys);
        if locale == options.primary_locale {
            primary_keys = Some(keys);
        }
        report.locales.push(coverage);
    }

    // The primary locale need not be a required one.
    let primary_keys = match primary_keys {
        Some(keys) => keys,
        None => {
            let path = catalog_path(
                &options.locales_dir,
                &options.primary_locale,
                &options.catalog_file,
            );
            compare_locale(&options.primary_locale, &path, &usage.used_keys).1
        }
    };

    if let Some(keys) = primary_keys {
        report.unused = keys.difference(&usage.used_keys).cloned().collect();
        report.unused_available = true;
    }
    report.used_keys = usage.used_keys;

    info!(
        files = report.files_scanned,
        used_keys = report.used_keys.len(),
        missing = report.total_missing(),
        unused = report.unused.len(),
        "audit finished"
    );
    Ok(report)
}

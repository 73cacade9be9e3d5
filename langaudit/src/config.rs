//! Audit configuration, loadable from a TOML file.
//!
//! Every field has a default matching the conventional project layout, so an
//! empty file (or no file at all) audits `src/` against `locales/{en,ar,es}`.
//!
//! ```toml
//! code_roots = ["src"]
//! locales_dir = "public/locales"
//! locales = ["en", "ar"]
//!
//! [heuristics]
//! min_length = 5
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{discover_locales, validate_locale},
    error::Error,
    heuristics::HeuristicConfig,
    scan::SourceFilter,
};

/// File name picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "langaudit.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AuditOptions {
    /// Directories scanned for UI source files.
    pub code_roots: Vec<PathBuf>,
    /// Recognized source file extensions, without the dot.
    pub extensions: Vec<String>,
    /// Glob patterns for paths that are never scanned.
    pub exclude: Vec<String>,
    /// Directory holding one subdirectory per locale.
    pub locales_dir: PathBuf,
    /// Catalog file name inside each locale subdirectory.
    pub catalog_file: String,
    /// Locales every used key must be present in.
    pub locales: Vec<String>,
    /// Locale whose catalog defines which keys are unused.
    pub primary_locale: String,
    /// Use the subdirectories of `locales_dir` instead of `locales`.
    pub discover_locales: bool,
    pub heuristics: HeuristicConfig,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            code_roots: vec![PathBuf::from("src")],
            extensions: ["js", "jsx", "ts", "tsx"].map(String::from).to_vec(),
            exclude: vec!["**/node_modules/**".to_string()],
            locales_dir: PathBuf::from("locales"),
            catalog_file: "translation.json".to_string(),
            locales: ["en", "ar", "es"].map(String::from).to_vec(),
            primary_locale: "en".to_string(),
            discover_locales: false,
            heuristics: HeuristicConfig::default(),
        }
    }
}

impl AuditOptions {
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Checks every configured locale code and exclusion pattern.
    pub fn validate(&self) -> Result<(), Error> {
        validate_locale(&self.primary_locale)?;
        for locale in &self.locales {
            validate_locale(locale)?;
        }
        self.source_filter()?;
        Ok(())
    }

    pub fn source_filter(&self) -> Result<SourceFilter, Error> {
        SourceFilter::new(&self.extensions, &self.exclude)
    }

    /// Returns the locales to audit, deduplicated in first-seen order.
    pub fn required_locales(&self) -> Result<Vec<String>, Error> {
        let candidates = if self.discover_locales {
            discover_locales(&self.locales_dir)?
        } else {
            self.locales.clone()
        };

        let mut locales: Vec<String> = Vec::with_capacity(candidates.len());
        for locale in candidates {
            if !locales.contains(&locale) {
                locales.push(locale);
            }
        }
        Ok(locales)
    }
}

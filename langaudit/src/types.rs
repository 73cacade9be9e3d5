//! Core data model shared by the scanner, the catalog loader and the audit.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A dot-delimited translation key such as `admin.nav.overview`.
///
/// Keys are opaque: they are compared byte for byte, never normalized.
pub type TranslationKey = String;

/// A UI source file read whole into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        SourceFile {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Suspected untranslated strings found in one source file, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HardcodedStringFinding {
    pub path: PathBuf,
    pub strings: Vec<String>,
}

/// A source file that matched the scan filters but could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

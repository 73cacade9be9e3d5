//! Loading and flattening of per-locale JSON translation catalogs.
//!
//! A catalog is a JSON object whose nested objects group keys and whose
//! leaves are display strings:
//!
//! ```json
//! { "nav": { "home": "Home", "logout": "Log out" }, "plans": ["Basic", "Pro"] }
//! ```
//!
//! flattens to `{"nav.home", "nav.logout", "plans"}`. Arrays are leaves.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use tracing::debug;
use unic_langid::LanguageIdentifier;

use crate::{error::Error, traits::Parser, types::TranslationKey};

/// The parsed content of one catalog file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogTree {
    pub root: Map<String, Value>,
}

impl CatalogTree {
    /// Returns the set of dotted leaf paths in this catalog.
    pub fn flatten(&self) -> BTreeSet<TranslationKey> {
        flatten(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl Parser for CatalogTree {
    fn parse_str(content: &str) -> Result<Self, Error> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(root) => Ok(CatalogTree { root }),
            other => Err(Error::InvalidCatalog(format!(
                "top level must be an object, found {}",
                json_kind(&other)
            ))),
        }
    }
}

/// Loads the catalog at `path`.
///
/// Returns `Ok(None)` when the file does not exist, so a locale that has not
/// been started yet audits as an empty catalog instead of failing the run.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Option<CatalogTree>, Error> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "catalog file absent");
        return Ok(None);
    }
    CatalogTree::read_from(path).map(Some)
}

/// Returns the dotted path of every leaf under `root`.
///
/// Any non-object value is a leaf, arrays included. An empty nested object
/// contributes no key.
pub fn flatten(root: &Map<String, Value>) -> BTreeSet<TranslationKey> {
    let mut keys = BTreeSet::new();
    flatten_into(root, "", &mut keys);
    keys
}

fn flatten_into(map: &Map<String, Value>, prefix: &str, keys: &mut BTreeSet<TranslationKey>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Object(child) => flatten_into(child, &path, keys),
            _ => {
                keys.insert(path);
            }
        }
    }
}

/// Returns the path of `locale`'s catalog under `locales_dir`.
pub fn catalog_path(locales_dir: &Path, locale: &str, catalog_file: &str) -> PathBuf {
    locales_dir.join(locale).join(catalog_file)
}

/// Lists the locale subdirectories of `locales_dir`, sorted.
///
/// Directory names that are not BCP 47 identifiers are skipped. A missing
/// directory yields no locales.
pub fn discover_locales<P: AsRef<Path>>(locales_dir: P) -> Result<Vec<String>, Error> {
    let locales_dir = locales_dir.as_ref();
    if !locales_dir.is_dir() {
        debug!(path = %locales_dir.display(), "locales directory absent");
        return Ok(Vec::new());
    }

    let mut locales = Vec::new();
    for entry in fs::read_dir(locales_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if validate_locale(&name).is_ok() {
            locales.push(name);
        } else {
            debug!(name = %name, "skipping non-locale directory");
        }
    }
    locales.sort();
    Ok(locales)
}

/// Checks that `locale` is a BCP 47 language identifier such as `en` or `pt-BR`.
pub fn validate_locale(locale: &str) -> Result<(), Error> {
    if locale.is_empty() {
        return Err(Error::InvalidLocale(locale.to_string()));
    }
    locale
        .parse::<LanguageIdentifier>()
        .map(|_| ())
        .map_err(|_| Error::InvalidLocale(locale.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! Resolution of audit options from defaults, the config file, and flags.
//!
//! Precedence: command-line flags, then the config file, then defaults.

use std::path::{Path, PathBuf};

use langaudit::{AuditOptions, DEFAULT_CONFIG_FILE};
use tracing::debug;

use crate::validation::{validate_extension, validate_file_path, validate_language_code};

/// Option values given on the command line. Empty means "not given".
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub code_roots: Vec<PathBuf>,
    pub locales_dir: Option<PathBuf>,
    pub catalog_file: Option<String>,
    pub locales: Vec<String>,
    pub primary_locale: Option<String>,
    pub discover_locales: bool,
    pub extensions: Vec<String>,
    /// Added to the configured exclusions rather than replacing them.
    pub exclude: Vec<String>,
}

/// Loads the explicit config file, else `langaudit.toml` in `cwd` if present,
/// else the defaults.
pub fn load_base_options(config: Option<&Path>, cwd: &Path) -> Result<AuditOptions, String> {
    let path = match config {
        Some(path) => {
            validate_file_path(path)?;
            path.to_path_buf()
        }
        None => {
            let candidate = cwd.join(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                return Ok(AuditOptions::default());
            }
            candidate
        }
    };

    debug!(path = %path.display(), "loading config file");
    AuditOptions::from_toml_file(&path)
        .map_err(|e| format!("Failed to load config {}: {}", path.display(), e))
}

pub fn apply_overrides(mut options: AuditOptions, overrides: OptionOverrides) -> AuditOptions {
    if !overrides.code_roots.is_empty() {
        options.code_roots = overrides.code_roots;
    }
    if let Some(dir) = overrides.locales_dir {
        options.locales_dir = dir;
    }
    if let Some(file) = overrides.catalog_file {
        options.catalog_file = file;
    }
    if !overrides.locales.is_empty() {
        options.locales = overrides.locales;
    }
    if let Some(primary) = overrides.primary_locale {
        options.primary_locale = primary;
    }
    if overrides.discover_locales {
        options.discover_locales = true;
    }
    if !overrides.extensions.is_empty() {
        options.extensions = overrides.extensions;
    }
    options.exclude.extend(overrides.exclude);
    options
}

/// Builds the final, validated options for a run.
pub fn resolve_options(
    config: Option<&Path>,
    cwd: &Path,
    overrides: OptionOverrides,
) -> Result<AuditOptions, String> {
    for lang in overrides.locales.iter().chain(&overrides.primary_locale) {
        validate_language_code(lang)?;
    }
    for ext in &overrides.extensions {
        validate_extension(ext)?;
    }

    let options = apply_overrides(load_base_options(config, cwd)?, overrides);
    options
        .validate()
        .map_err(|e| format!("Invalid configuration: {}", e))?;
    Ok(options)
}

//! Collection of UI source files under the configured code roots.

use std::{
    fs,
    path::{Path, PathBuf},
};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    error::Error,
    traits::read_text,
    types::{SkippedFile, SourceFile},
};

/// Decides which files under a code root are UI sources.
#[derive(Debug, Clone)]
pub struct SourceFilter {
    extensions: Vec<String>,
    exclude: GlobSet,
}

impl SourceFilter {
    /// Builds a filter from bare extensions (`tsx` or `.tsx`) and exclusion globs.
    pub fn new<S: AsRef<str>>(extensions: &[S], exclude: &[S]) -> Result<Self, Error> {
        let extensions = extensions
            .iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        // literal_separator keeps `*` from crossing directory boundaries.
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude {
            let glob = GlobBuilder::new(pattern.as_ref())
                .literal_separator(true)
                .build()?;
            builder.add(glob);
        }

        Ok(SourceFilter {
            extensions,
            exclude: builder.build()?,
        })
    }

    pub fn matches(&self, path: &Path) -> bool {
        let has_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.extensions
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false);
        has_extension && !self.exclude.is_match(path)
    }
}

/// The readable source files found by a scan, plus the ones that were not.
#[derive(Debug, Clone, Default)]
pub struct SourceScan {
    pub files: Vec<SourceFile>,
    pub skipped: Vec<SkippedFile>,
}

/// Lists the paths of every source file under `roots`, sorted and deduplicated.
///
/// A root that does not exist contributes nothing. A root that exists but
/// cannot be listed fails the whole scan.
pub fn list_source_files<P: AsRef<Path>>(
    roots: &[P],
    filter: &SourceFilter,
) -> Result<Vec<PathBuf>, Error> {
    let mut paths = Vec::new();
    for root in roots {
        paths.extend(list_root(root.as_ref(), filter)?);
    }
    paths.sort();
    paths.dedup();
    Ok(paths)
}

fn list_root(root: &Path, filter: &SourceFilter) -> Result<Vec<PathBuf>, Error> {
    if !root.exists() {
        warn!(root = %root.display(), "code root does not exist, nothing to scan");
        return Ok(Vec::new());
    }
    if root.is_file() {
        return Ok(if filter.matches(root) {
            vec![root.to_path_buf()]
        } else {
            Vec::new()
        });
    }
    fs::read_dir(root).map_err(|e| Error::unreadable_root(root, e))?;

    let walker = WalkBuilder::new(root)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .hidden(false)
        .ignore(true)
        .parents(true)
        .build();

    let mut out = Vec::new();
    for dent in walker {
        let dent = match dent {
            Ok(d) => d,
            Err(e) => {
                warn!(root = %root.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let is_file = dent.file_type().map(|t| t.is_file()).unwrap_or(false);
        if is_file && filter.matches(dent.path()) {
            out.push(dent.into_path());
        }
    }
    debug!(root = %root.display(), files = out.len(), "listed code root");
    Ok(out)
}

/// Reads every source file under `roots` in parallel.
///
/// Unreadable files are returned in [`SourceScan::skipped`] rather than
/// failing the scan.
pub fn collect_source_files<P: AsRef<Path>>(
    roots: &[P],
    filter: &SourceFilter,
) -> Result<SourceScan, Error> {
    let paths = list_source_files(roots, filter)?;

    let read: Vec<Result<SourceFile, SkippedFile>> = paths
        .into_par_iter()
        .map(|path| match read_text(&path) {
            Ok(content) => Ok(SourceFile { path, content }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable source file");
                Err(SkippedFile {
                    path,
                    reason: e.to_string(),
                })
            }
        })
        .collect();

    let mut scan = SourceScan::default();
    for result in read {
        match result {
            Ok(file) => scan.files.push(file),
            Err(skipped) => scan.skipped.push(skipped),
        }
    }
    Ok(scan)
}

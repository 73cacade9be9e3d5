use langaudit::AuditReport;
use serde_json::json;

/// How many items of each list the text report shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLimits {
    pub max_keys: usize,
    pub max_files: usize,
    pub max_samples: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            max_keys: 50,
            max_files: 10,
            max_samples: 3,
        }
    }
}

/// Pushes up to `limit` rendered items, then a remainder line if any were cut.
///
/// Items get `indent` and `bullet`; the remainder line only gets `indent`.
fn push_capped<T>(
    lines: &mut Vec<String>,
    items: &[T],
    limit: usize,
    indent: &str,
    bullet: &str,
    render: impl Fn(&T) -> String,
) {
    for item in items.iter().take(limit) {
        lines.push(format!("{}{}{}", indent, bullet, render(item)));
    }
    if items.len() > limit {
        lines.push(format!("{}... and {} more", indent, items.len() - limit));
    }
}

pub fn render_human(report: &AuditReport, limits: &DisplayLimits) -> String {
    let mut lines = Vec::new();
    lines.push("=== Translation Audit ===".to_string());
    lines.push(format!("Files scanned: {}", report.files_scanned));
    lines.push(format!("Unique keys in use: {}", report.used_keys.len()));

    lines.push("\nCatalogs:".to_string());
    if report.locales.is_empty() {
        lines.push("  (no locales audited)".to_string());
    }
    for coverage in &report.locales {
        let status = if let Some(error) = &coverage.error {
            format!("error: {}", error)
        } else if !coverage.present {
            "absent".to_string()
        } else {
            format!("{} keys", coverage.key_count)
        };
        lines.push(format!(
            "  {}: {} ({})",
            coverage.locale,
            status,
            coverage.catalog_path.display()
        ));
    }

    for coverage in &report.locales {
        if coverage.missing.is_empty() {
            continue;
        }
        lines.push(format!(
            "\nMissing in {} ({}):",
            coverage.locale,
            coverage.missing.len()
        ));
        push_capped(&mut lines, &coverage.missing, limits.max_keys, "  ", "- ", |k| {
            k.clone()
        });
    }

    if !report.unused_available {
        lines.push(format!(
            "\nUnused keys: unavailable, {} catalog could not be parsed",
            report.primary_locale
        ));
    } else if !report.unused.is_empty() {
        lines.push(format!(
            "\nUnused in {} ({}):",
            report.primary_locale,
            report.unused.len()
        ));
        push_capped(&mut lines, &report.unused, limits.max_keys, "  ", "- ", |k| {
            k.clone()
        });
    }

    if !report.skipped.is_empty() {
        lines.push(format!("\nSkipped files ({}):", report.skipped.len()));
        push_capped(&mut lines, &report.skipped, limits.max_files, "  ", "- ", |s| {
            format!("{}: {}", s.path.display(), s.reason)
        });
    }

    if !report.hardcoded.is_empty() {
        lines.push(format!(
            "\nFiles with hardcoded strings ({}):",
            report.hardcoded.len()
        ));
        for finding in report.hardcoded.iter().take(limits.max_files) {
            lines.push(format!(
                "  {} ({}):",
                finding.path.display(),
                finding.strings.len()
            ));
            push_capped(
                &mut lines,
                &finding.strings,
                limits.max_samples,
                "    ",
                "",
                |s| format!("\"{}\"", s),
            );
        }
        if report.hardcoded.len() > limits.max_files {
            lines.push(format!(
                "  ... and {} more files",
                report.hardcoded.len() - limits.max_files
            ));
        }
    }

    let failing: Vec<&str> = report
        .locales
        .iter()
        .filter(|c| !c.is_complete())
        .map(|c| c.locale.as_str())
        .collect();
    if failing.is_empty() {
        lines.push("\nResult: PASS".to_string());
    } else {
        lines.push(format!(
            "\nResult: FAIL ({} missing keys; incomplete locales: {})",
            report.total_missing(),
            failing.join(", ")
        ));
    }

    lines.join("\n")
}

pub fn render_json(report: &AuditReport) -> Result<String, String> {
    let locales: Vec<_> = report
        .locales
        .iter()
        .map(|c| {
            json!({
                "locale": c.locale,
                "catalog": c.catalog_path,
                "present": c.present,
                "keys": c.key_count,
                "missing": c.missing,
                "error": c.error,
            })
        })
        .collect();

    let unused = if report.unused_available {
        json!(report.unused)
    } else {
        serde_json::Value::Null
    };

    let body = json!({
        "summary": {
            "files_scanned": report.files_scanned,
            "used_keys": report.used_keys.len(),
            "missing": report.total_missing(),
            "unused": report.unused.len(),
            "hardcoded_files": report.hardcoded.len(),
            "skipped_files": report.skipped.len(),
        },
        "passed": report.is_passing(),
        "primary_locale": report.primary_locale,
        "locales": locales,
        "unused": unused,
        "hardcoded": report.hardcoded,
        "skipped": report.skipped,
    });

    serde_json::to_string_pretty(&body)
        .map_err(|e| format!("Failed to serialize audit report JSON: {}", e))
}

pub fn print_or_write(output: Option<&String>, content: &str) -> Result<(), String> {
    if let Some(path) = output {
        std::fs::write(path, content).map_err(|e| format!("Failed to write {}: {}", path, e))?;
        println!("Report written: {}", path);
    } else {
        println!("{}", content);
    }
    Ok(())
}

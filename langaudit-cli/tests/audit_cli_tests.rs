use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn langaudit_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("langaudit"))
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    langaudit_cmd()
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// A project where `ar` lacks `nav.logout`.
fn school_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(
        &root.join("src/components/Nav.jsx"),
        r#"export const Nav = () => (
  <nav>
    <a href="/">{t('nav.home')}</a>
    <button>{t("nav.logout")}</button>
    <span>Our professors</span>
  </nav>
);"#,
    );
    write(
        &root.join("locales/en/translation.json"),
        r#"{"nav": {"home": "Home", "logout": "Log out"}, "footer": {"legal": "Legal"}}"#,
    );
    write(
        &root.join("locales/ar/translation.json"),
        r#"{"nav": {"home": "الرئيسية"}}"#,
    );
    write(
        &root.join("locales/es/translation.json"),
        r#"{"nav": {"home": "Inicio", "logout": "Cerrar sesión"}}"#,
    );
    dir
}

#[test]
fn test_missing_key_exits_non_zero() {
    let project = school_project();
    let output = run_in(project.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Files scanned: 1"), "stdout: {}", stdout);
    assert!(stdout.contains("Unique keys in use: 2"));
    assert!(stdout.contains("Missing in ar (1):\n  - nav.logout"));
    assert!(!stdout.contains("Missing in en"));
    assert!(!stdout.contains("Missing in es"));
    assert!(stdout.contains("Unused in en (1):\n  - footer.legal"));
    assert!(stdout.contains("\"Our professors\""));
    assert!(stdout.contains("Result: FAIL"));
}

#[test]
fn test_complete_catalogs_exit_zero() {
    let project = school_project();
    write(
        &project.path().join("locales/ar/translation.json"),
        r#"{"nav": {"home": "الرئيسية", "logout": "تسجيل الخروج"}}"#,
    );

    let output = run_in(project.path(), &[]);

    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Result: PASS"));
}

#[test]
fn test_empty_project_exits_zero() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Files scanned: 0"));
    assert!(stdout.contains("Unique keys in use: 0"));
    assert!(stdout.contains("  en: absent"));
}

#[test]
fn test_locale_flag_limits_required_locales() {
    let project = school_project();
    let output = run_in(project.path(), &["--locale", "en", "--locale", "es"]);

    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("  ar:"));
}

#[test]
fn test_json_output() {
    let project = school_project();
    let output = run_in(project.path(), &["--json"]);

    assert_eq!(output.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["passed"], false);
    assert_eq!(v["summary"]["files_scanned"], 1);
    let locales = v["locales"].as_array().unwrap();
    assert_eq!(locales.len(), 3);
    assert_eq!(locales[1]["locale"], "ar");
    assert_eq!(locales[1]["missing"], serde_json::json!(["nav.logout"]));
    assert_eq!(v["unused"], serde_json::json!(["footer.legal"]));
}

#[test]
fn test_report_written_to_file() {
    let project = school_project();
    let output = run_in(project.path(), &["--json", "-o", "reports/audit.json"]);

    assert_eq!(output.status.code(), Some(1));
    let written = fs::read_to_string(project.path().join("reports/audit.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(v["summary"]["used_keys"], 2);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Report written"));
}

#[test]
fn test_malformed_catalog_is_reported_and_fails() {
    let project = school_project();
    write(
        &project.path().join("locales/es/translation.json"),
        r#"{"nav": "#,
    );

    let output = run_in(project.path(), &["--locale", "en", "--locale", "es"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("  es: error: parse error"));
    assert!(stdout.contains("  en: 3 keys"));
}

#[test]
fn test_config_file_is_honored() {
    let project = school_project();
    let root = project.path();
    fs::rename(root.join("src"), root.join("app")).unwrap();
    write(
        &root.join("langaudit.toml"),
        "code_roots = [\"app\"]\nlocales = [\"en\", \"es\"]\n",
    );

    let output = run_in(root, &[]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Files scanned: 1"));
}

#[test]
fn test_caps_in_text_report() {
    let dir = TempDir::new().unwrap();
    let keys: Vec<String> = (0..8).map(|i| format!("t('page.k{}')", i)).collect();
    write(&dir.path().join("src/Page.jsx"), &keys.join(";\n"));

    let output = run_in(dir.path(), &["--locale", "en", "--max-keys", "3"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Missing in en (8):"));
    assert!(stdout.contains("  - page.k2\n  ... and 5 more"));
    assert!(!stdout.contains("page.k3"));
}

#[test]
fn test_invalid_locale_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["--locale", "not a locale"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid language code"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let project = school_project();
    let output = run_in(project.path(), &["--json", "--verbose"]);

    serde_json::from_slice::<serde_json::Value>(&output.stdout)
        .expect("stdout should be pure JSON even with debug logging");
    assert!(String::from_utf8_lossy(&output.stderr).contains("audit finished"));
}

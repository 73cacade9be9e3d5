use std::path::PathBuf;

use clap::Parser;
use langaudit::audit;
use langaudit_cli::{
    DisplayLimits, EXIT_ERROR, EXIT_MISSING_KEYS, EXIT_PASS, OptionOverrides, print_or_write,
    render_human, render_json, resolve_options, validation::validate_output_path,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Audit translation coverage: keys used in UI code versus per-locale JSON catalogs.
///
/// With no flags, scans `src/` and compares against `locales/<locale>/translation.json`
/// for en, ar and es. Exits 1 when any used key is missing from a required locale.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to ./langaudit.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Code root to scan; repeat for several
    #[arg(long = "src", value_name = "DIR")]
    code_roots: Vec<PathBuf>,

    /// Directory with one subdirectory per locale
    #[arg(long, value_name = "DIR")]
    locales_dir: Option<PathBuf>,

    /// Catalog file name inside each locale directory
    #[arg(long, value_name = "NAME")]
    catalog_file: Option<String>,

    /// Required locale; repeat for several
    #[arg(short, long = "locale", value_name = "CODE")]
    locales: Vec<String>,

    /// Locale whose catalog defines unused keys
    #[arg(long, value_name = "CODE")]
    primary_locale: Option<String>,

    /// Audit every locale directory found instead of the configured list
    #[arg(long)]
    discover_locales: bool,

    /// Source file extension; repeat for several
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Glob of paths to skip; repeat for several
    #[arg(long, value_name = "GLOB")]
    exclude: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Maximum keys listed per section
    #[arg(long, default_value_t = 50)]
    max_keys: usize,

    /// Maximum files listed per section
    #[arg(long, default_value_t = 10)]
    max_files: usize,

    /// Maximum hardcoded strings shown per file
    #[arg(long, default_value_t = 3)]
    max_samples: usize,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "langaudit=debug,langaudit_cli=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Logs go to stderr so the report on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<i32, String> {
    if let Some(output) = &args.output {
        validate_output_path(output)?;
    }

    let cwd = std::env::current_dir()
        .map_err(|e| format!("Cannot determine working directory: {}", e))?;
    let overrides = OptionOverrides {
        code_roots: args.code_roots,
        locales_dir: args.locales_dir,
        catalog_file: args.catalog_file,
        locales: args.locales,
        primary_locale: args.primary_locale,
        discover_locales: args.discover_locales,
        extensions: args.extensions,
        exclude: args.exclude,
    };
    let options = resolve_options(args.config.as_deref(), &cwd, overrides)?;
    debug!(?options, "resolved options");

    let report = audit(&options).map_err(|e| format!("Audit failed: {}", e))?;

    let rendered = if args.json {
        render_json(&report)?
    } else {
        let limits = DisplayLimits {
            max_keys: args.max_keys,
            max_files: args.max_files,
            max_samples: args.max_samples,
        };
        render_human(&report, &limits)
    };
    print_or_write(args.output.as_ref(), &rendered)?;

    Ok(if report.is_passing() {
        EXIT_PASS
    } else {
        EXIT_MISSING_KEYS
    })
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_ERROR);
        }
    }
}

//! CLI library for testing purposes

pub mod options;
pub mod report;
pub mod validation;

pub use options::{OptionOverrides, resolve_options};
pub use report::{DisplayLimits, print_or_write, render_human, render_json};

/// Every required locale has every used key.
pub const EXIT_PASS: i32 = 0;
/// At least one used key is missing, or a required catalog is malformed.
pub const EXIT_MISSING_KEYS: i32 = 1;
/// The audit could not run.
pub const EXIT_ERROR: i32 = 2;

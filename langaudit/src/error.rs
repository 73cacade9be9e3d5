//! All error types for the langaudit crate.
//!
//! Only conditions that stop an audit, or a single catalog, surface as `Error`.
//! Unreadable source files and missing catalogs are report entries instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("cannot read code root `{}`: {source}", .path.display())]
    UnreadableRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("invalid locale `{0}`")]
    InvalidLocale(String),

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] globset::Error),
}

impl Error {
    /// Creates an error for a code root that exists but cannot be listed.
    pub fn unreadable_root(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::UnreadableRoot {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_parse_error() {
        let json_error =
            serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::Parse(json_error);
        assert!(error.to_string().contains("parse error"));
    }

    #[test]
    fn test_config_error() {
        let toml_error = toml::from_str::<toml::Value>("locales = [").unwrap_err();
        let error = Error::Config(toml_error);
        assert!(error.to_string().starts_with("config error"));
    }

    #[test]
    fn test_unreadable_root_error() {
        let error = Error::unreadable_root(
            "src",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(error.to_string(), "cannot read code root `src`: denied");
    }

    #[test]
    fn test_invalid_locale_error() {
        let error = Error::InvalidLocale("not a locale".to_string());
        assert_eq!(error.to_string(), "invalid locale `not a locale`");
    }

    #[test]
    fn test_invalid_catalog_error() {
        let error = Error::InvalidCatalog("top level must be an object".to_string());
        assert_eq!(
            error.to_string(),
            "invalid catalog: top level must be an object"
        );
    }
}

//! Traits for loading audit inputs from disk.

use std::{fs::File, io::Read, path::Path};

use crate::error::Error;

/// A document that can be parsed from text, and therefore from a file.
///
/// # Example
///
/// ```rust,no_run
/// use langaudit::{CatalogTree, traits::Parser};
/// let catalog = CatalogTree::read_from("locales/en/translation.json")?;
/// println!("{} keys", catalog.flatten().len());
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from an in-memory string.
    fn parse_str(content: &str) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path, decoding any byte-order mark first.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let content = read_text(path)?;
        Self::parse_str(&content)
    }
}

/// Reads a whole file as UTF-8, honoring UTF-8 and UTF-16 byte-order marks.
///
/// Editors on Windows routinely save catalogs with a BOM, which `serde_json`
/// would otherwise reject.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let file = File::open(path).map_err(Error::Io)?;
    let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .build(file);

    let mut decoded = String::new();
    decoder.read_to_string(&mut decoded).map_err(Error::Io)?;
    Ok(decoded)
}

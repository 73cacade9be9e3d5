//! Lexical extraction of translation keys from `t(...)` calls.
//!
//! This is a textual scan, not a parse: only literal first arguments are
//! seen. `t(key)`, `t('a.' + b)` and `` t(`a.${b}`) `` are invisible to it.

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::TranslationKey;

lazy_static! {
    // The literal must be the whole first argument: `t('a')`, `t('a', opts)`.
    static ref T_CALL_REGEX: Regex =
        Regex::new(r#"t\(\s*(?:'([^'\n]+)'|"([^"\n]+)"|`([^`]+)`)\s*[,)]"#).unwrap();
}

/// `t` must not be the tail of a longer identifier (`format(`, `$t(`), but may
/// follow a member access (`i18n.t(`).
fn starts_call(content: &str, at: usize) -> bool {
    content[..at]
        .chars()
        .next_back()
        .is_none_or(|c| !(c.is_alphanumeric() || c == '_' || c == '$'))
}

/// Returns every key passed as a string literal to `t(...)` in `content`.
pub fn extract_used_keys(content: &str) -> BTreeSet<TranslationKey> {
    T_CALL_REGEX
        .captures_iter(content)
        .filter(|caps| starts_call(content, caps.get(0).map_or(0, |m| m.start())))
        .filter_map(|caps| {
            if let Some(m) = caps.get(1).or_else(|| caps.get(2)) {
                return Some(m.as_str());
            }
            // Template literals with substitutions are computed keys.
            caps.get(3)
                .map(|m| m.as_str())
                .filter(|literal| !literal.contains("${"))
        })
        .map(str::to_string)
        .collect()
}

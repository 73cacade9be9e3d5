//! Heuristics that flag user-facing text left out of the translation layer.
//!
//! Each heuristic implements [`Heuristic`]. [`find_hardcoded_strings`] runs the
//! enabled ones in a fixed order and merges their output into one
//! deduplicated list that keeps first-seen order.
//!
//! These are best-effort signals. Attribute-adjacent text can be flagged and
//! interpolated text is missed; neither is treated as a defect.

pub mod markup;
pub mod script;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use markup::MarkupTextHeuristic;
pub use script::{ScriptRange, ScriptRunHeuristic};

/// A heuristic that can be shared across the scan's worker threads.
pub type BoxedHeuristic = Box<dyn Heuristic + Send + Sync>;

/// A detector for hardcoded strings in one file's content.
pub trait Heuristic {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Appends every suspect string found in `content`, in source order.
    fn detect(&self, content: &str, out: &mut Vec<String>);
}

/// Tunable thresholds for the hardcoded-string heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Run the markup-text heuristic.
    pub markup_text: bool,
    /// Markup text shorter than this many characters is ignored.
    pub min_length: usize,
    /// Markup text containing any of these substrings is ignored.
    pub attribute_markers: Vec<String>,
    /// Run the script-run heuristic.
    pub script_runs: bool,
    /// Character ranges whose runs are always reported.
    pub scripts: Vec<ScriptRange>,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            markup_text: true,
            min_length: 4,
            attribute_markers: vec![
                "className".to_string(),
                "onClick".to_string(),
                "onChange".to_string(),
            ],
            script_runs: true,
            scripts: vec![ScriptRange::ARABIC],
        }
    }
}

impl HeuristicConfig {
    /// Builds the enabled heuristics in reporting order.
    pub fn heuristics(&self) -> Vec<BoxedHeuristic> {
        let mut heuristics: Vec<BoxedHeuristic> = Vec::new();
        if self.markup_text {
            heuristics.push(Box::new(MarkupTextHeuristic::new(
                self.min_length,
                self.attribute_markers.clone(),
            )));
        }
        if self.script_runs && !self.scripts.is_empty() {
            heuristics.push(Box::new(ScriptRunHeuristic::new(self.scripts.clone())));
        }
        heuristics
    }
}

/// Runs `heuristics` over `content` and returns the deduplicated findings.
pub fn detect_with(heuristics: &[BoxedHeuristic], content: &str) -> Vec<String> {
    let mut found = Vec::new();
    for heuristic in heuristics {
        heuristic.detect(content, &mut found);
    }

    let mut seen: HashSet<String> = HashSet::new();
    found.retain(|s| seen.insert(s.clone()));
    found
}

/// Returns the suspected hardcoded strings in `content` under `config`.
pub fn find_hardcoded_strings(content: &str, config: &HeuristicConfig) -> Vec<String> {
    detect_with(&config.heuristics(), content)
}

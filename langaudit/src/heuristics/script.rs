use serde::{Deserialize, Serialize};

use super::Heuristic;

/// An inclusive range of Unicode scalar values treated as one script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScriptRange {
    pub start: u32,
    pub end: u32,
}

impl ScriptRange {
    /// The Arabic block, U+0600..=U+06FF.
    pub const ARABIC: ScriptRange = ScriptRange {
        start: 0x0600,
        end: 0x06FF,
    };

    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end).contains(&(c as u32))
    }
}

/// Flags every maximal run of characters from the configured scripts.
///
/// Source code is written in ASCII, so any such run is user-facing text that
/// bypassed the catalogs, whatever markup surrounds it.
#[derive(Debug, Clone)]
pub struct ScriptRunHeuristic {
    ranges: Vec<ScriptRange>,
}

impl ScriptRunHeuristic {
    pub fn new(ranges: Vec<ScriptRange>) -> Self {
        Self { ranges }
    }

    fn in_script(&self, c: char) -> bool {
        self.ranges.iter().any(|r| r.contains(c))
    }
}

impl Heuristic for ScriptRunHeuristic {
    fn name(&self) -> &'static str {
        "script-run"
    }

    fn detect(&self, content: &str, out: &mut Vec<String>) {
        let mut run_start: Option<usize> = None;
        for (idx, c) in content.char_indices() {
            match (self.in_script(c), run_start) {
                (true, None) => run_start = Some(idx),
                (false, Some(start)) => {
                    out.push(content[start..idx].to_string());
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            out.push(content[start..].to_string());
        }
    }
}

use lazy_static::lazy_static;
use regex::Regex;

use super::Heuristic;

lazy_static! {
    static ref TEXT_NODE_REGEX: Regex = Regex::new(r">([^<>]+)<").unwrap();
}

/// Flags Latin-script text placed directly between two tags.
///
/// A candidate is the whitespace-trimmed text between a `>` and the next `<`.
/// It is reported when it starts with an uppercase ASCII letter, contains a
/// lowercase ASCII letter, is at least `min_length` characters long, and
/// contains none of the attribute markers. The casing rule alone rules out
/// numbers (`2024`) and constant-case names (`API_KEY`).
#[derive(Debug, Clone)]
pub struct MarkupTextHeuristic {
    min_length: usize,
    attribute_markers: Vec<String>,
}

impl MarkupTextHeuristic {
    pub fn new(min_length: usize, attribute_markers: Vec<String>) -> Self {
        Self {
            min_length,
            attribute_markers,
        }
    }

    fn accepts(&self, text: &str) -> bool {
        if text.chars().count() < self.min_length {
            return false;
        }
        if !text.starts_with(|c: char| c.is_ascii_uppercase()) {
            return false;
        }
        if !text.chars().any(|c| c.is_ascii_lowercase()) {
            return false;
        }
        !self
            .attribute_markers
            .iter()
            .any(|marker| text.contains(marker.as_str()))
    }
}

impl Heuristic for MarkupTextHeuristic {
    fn name(&self) -> &'static str {
        "markup-text"
    }

    fn detect(&self, content: &str, out: &mut Vec<String>) {
        for caps in TEXT_NODE_REGEX.captures_iter(content) {
            let text = caps[1].trim();
            if self.accepts(text) {
                out.push(text.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::HeuristicConfig;
    use indoc::indoc;

    fn detect(content: &str) -> Vec<String> {
        let config = HeuristicConfig::default();
        let heuristic = MarkupTextHeuristic::new(config.min_length, config.attribute_markers);
        let mut out = Vec::new();
        heuristic.detect(content, &mut out);
        out
    }

    #[test]
    fn test_multiline_jsx_text_is_trimmed() {
        let src = indoc! {"
            <Button>
              Subscribe now
            </Button>
        "};
        assert_eq!(detect(src), vec!["Subscribe now"]);
    }

    #[test]
    fn test_lowercase_start_is_ignored() {
        assert!(detect("<p>hello world</p>").is_empty());
    }

    #[test]
    fn test_short_text_is_ignored() {
        assert!(detect("<td>Abc</td>").is_empty());
        assert_eq!(detect("<td>Abcd</td>"), vec!["Abcd"]);
    }

    #[test]
    fn test_constant_case_and_numbers_are_ignored() {
        let src = "<code>API_KEY</code><span>2024</span><i>USD</i><b>1,250.00</b><s>HTTP2_URL</s>";
        assert!(detect(src).is_empty());
    }

    #[test]
    fn test_expression_children_are_ignored() {
        assert!(detect("<h1>{t('home.title')}</h1>").is_empty());
    }

    #[test]
    fn test_attribute_marker_excludes_match() {
        let src = r#"<p>Read more className="x"</p>"#;
        assert!(detect(src).is_empty());
    }

    #[test]
    fn test_each_text_node_is_reported() {
        let src = "<li>First lesson</li><li>Second lesson</li>";
        assert_eq!(detect(src), vec!["First lesson", "Second lesson"]);
    }

    #[test]
    fn test_arabic_text_node_is_left_to_script_heuristic() {
        assert!(detect("<p>مرحبا بكم</p>").is_empty());
    }
}

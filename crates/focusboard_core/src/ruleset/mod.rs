//! Instructional Ruleset Markdown derivation.
//!
//! # Responsibility
//! - Convert raw ruleset text into a bulleted Markdown document under a
//!   fixed heading.
//!
//! # Invariants
//! - Empty or whitespace-only input converts to the empty string.
//! - Conversion is idempotent over its own output: re-importing an exported
//!   document produces the same Markdown, with no double bullets.

use once_cell::sync::Lazy;
use regex::Regex;

/// Heading emitted at the top of every converted document.
pub const RULESET_HEADER: &str = "## Instructional Ruleset";

static BULLET_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-*+]|\d+[.)])\s+").expect("valid bullet prefix regex"));

/// Converts raw ruleset text into Markdown bullets under [`RULESET_HEADER`].
///
/// Rules:
/// - CRLF line endings are normalized to LF and the text is trimmed.
/// - Blank lines and a repeated [`RULESET_HEADER`] line are dropped.
/// - Each remaining line becomes one `- ` bullet; a pre-existing bullet or
///   number prefix is stripped first so re-imports do not stack markers.
pub fn ruleset_to_markdown(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut lines = vec![RULESET_HEADER.to_string(), String::new()];
    for line in trimmed.lines() {
        let line = line.trim();
        if line.is_empty() || line == RULESET_HEADER {
            continue;
        }
        let body = BULLET_PREFIX_RE.replace(line, "");
        lines.push(format!("- {body}"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{ruleset_to_markdown, RULESET_HEADER};

    #[test]
    fn converts_lines_to_bullets_under_header() {
        let markdown = ruleset_to_markdown("stay factual\n\nanswer briefly\r\ncite sources");
        assert_eq!(
            markdown,
            format!("{RULESET_HEADER}\n\n- stay factual\n- answer briefly\n- cite sources")
        );
    }

    #[test]
    fn blank_input_converts_to_empty_string() {
        assert_eq!(ruleset_to_markdown(""), "");
        assert_eq!(ruleset_to_markdown("  \n\t "), "");
    }

    #[test]
    fn conversion_is_idempotent_over_exported_output() {
        let first = ruleset_to_markdown("1. plan first\n- then act\n* then review");
        let second = ruleset_to_markdown(&first);
        assert_eq!(first, second);
        assert!(first.contains("- plan first"));
        assert!(!first.contains("- - "));
    }
}

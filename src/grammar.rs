//! Questionnaire Line Grammar
//!
//! Maps one physical line to the shape it has in the document grammar.
//! The parser and the validator both consume this classification without
//! depending on each other, so the precedence order here is the single
//! place where ambiguous lines get resolved.

use regex::Regex;
use std::sync::LazyLock;

static QUESTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(.*)$").expect("valid question regex"));

static SUB_NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+\d+\.\s+(.*)$").expect("valid sub-item regex"));

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+(.*)$").expect("valid bullet regex"));

/// Shape of a single line
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind<'a> {
    /// Top-level header (`# Title`)
    Header(&'a str),
    /// Second-level header opening a block (`## Name`)
    BlockHeader(&'a str),
    /// Numbered line at column 0 (`1. Text`)
    Question { number: &'a str, text: &'a str },
    /// Indented numbered line (`   1. Text`)
    SubNumbered(&'a str),
    /// Bullet line (`- Text` or `* Text`), indented or not
    SubBullet(&'a str),
    /// Whitespace only
    Blank,
    /// Anything else, carries the trimmed line
    Other(&'a str),
}

/// Classify a raw line
///
/// Leading whitespace is inspected before anything is stripped, so an
/// indented numbered line can never be mistaken for a question.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let stripped = line.trim();
    if stripped.is_empty() {
        return LineKind::Blank;
    }

    if let Some(rest) = stripped.strip_prefix("# ") {
        return LineKind::Header(rest.trim());
    }

    if let Some(rest) = stripped.strip_prefix("## ") {
        return LineKind::BlockHeader(rest.trim());
    }

    let indented = line.starts_with(char::is_whitespace);

    if !indented && let Some(caps) = QUESTION_RE.captures(stripped) {
        let number = caps.get(1).map_or("", |m| m.as_str());
        let text = caps.get(2).map_or("", |m| m.as_str().trim());
        return LineKind::Question { number, text };
    }

    if let Some(caps) = SUB_NUMBERED_RE.captures(line) {
        return LineKind::SubNumbered(caps.get(1).map_or("", |m| m.as_str().trim()));
    }

    if let Some(caps) = BULLET_RE.captures(stripped) {
        return LineKind::SubBullet(caps.get(1).map_or("", |m| m.as_str().trim()));
    }

    LineKind::Other(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_headers() {
        assert_eq!(classify_line("# Title "), LineKind::Header("Title"));
        assert_eq!(classify_line("## Block A"), LineKind::BlockHeader("Block A"));
        assert_eq!(classify_line("### Deeper"), LineKind::Other("### Deeper"));
        assert_eq!(classify_line("#NoSpace"), LineKind::Other("#NoSpace"));
    }

    #[test]
    fn test_classify_question() {
        assert_eq!(
            classify_line("12. What is it?"),
            LineKind::Question {
                number: "12",
                text: "What is it?"
            }
        );
    }

    #[test]
    fn test_indented_numbered_is_sub_item() {
        assert_eq!(classify_line("   1. nested"), LineKind::SubNumbered("nested"));
        assert_eq!(classify_line("\t2. tabbed"), LineKind::SubNumbered("tabbed"));
    }

    #[test]
    fn test_classify_bullets() {
        assert_eq!(classify_line("- one"), LineKind::SubBullet("one"));
        assert_eq!(classify_line("  * two"), LineKind::SubBullet("two"));
    }

    #[test]
    fn test_number_without_space_is_other() {
        assert_eq!(classify_line("1.text"), LineKind::Other("1.text"));
        assert_eq!(classify_line("1."), LineKind::Other("1."));
        assert_eq!(classify_line("-dash"), LineKind::Other("-dash"));
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("   \t"), LineKind::Blank);
    }

    #[test]
    fn test_plain_text_is_other() {
        assert_eq!(classify_line("  some prose "), LineKind::Other("some prose"));
    }
}

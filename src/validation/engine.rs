//! Validation Engine
//!
//! Strict structural checks over normalized questionnaire text. Runs in two
//! passes: the header check, then the block/question grammar check which
//! accumulates every error it finds.

use std::fmt;

use anyhow::Result;
use regex::Regex;

use crate::grammar::{classify_line, LineKind};
use crate::profile::Profile;

/// A structural violation
///
/// Line numbers are 1-based and count lines of the validated text.
/// `ValidationResult::map_lines` translates them to file lines.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuralError {
    /// The document does not open with the required header
    HeaderFormat {
        expected: String,
        found: Option<String>,
    },
    /// A numbered question appears before any block header
    OrphanItem { line: usize, text: String },
    /// A block was closed without any numbered question
    ///
    /// `line` is where the closing was detected: the next block header, or
    /// one past the last line when the document ends.
    EmptyBlock { name: String, line: usize },
    /// A non-blank line matching none of the known shapes
    UnexpectedText { line: usize, text: String },
}

impl StructuralError {
    pub fn line(&self) -> Option<usize> {
        match self {
            StructuralError::HeaderFormat { .. } => None,
            StructuralError::OrphanItem { line, .. }
            | StructuralError::EmptyBlock { line, .. }
            | StructuralError::UnexpectedText { line, .. } => Some(*line),
        }
    }

    fn line_mut(&mut self) -> Option<&mut usize> {
        match self {
            StructuralError::HeaderFormat { .. } => None,
            StructuralError::OrphanItem { line, .. }
            | StructuralError::EmptyBlock { line, .. }
            | StructuralError::UnexpectedText { line, .. } => Some(line),
        }
    }
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralError::HeaderFormat {
                expected,
                found: Some(found),
            } => write!(
                f,
                "Invalid questionnaire header '{}', expected '{}'",
                found, expected
            ),
            StructuralError::HeaderFormat {
                expected,
                found: None,
            } => write!(f, "Missing questionnaire header, expected '{}'", expected),
            StructuralError::OrphanItem { line, text } => write!(
                f,
                "Line {}: numbered item outside of any block: '{}'",
                line, text
            ),
            StructuralError::EmptyBlock { name, line } => write!(
                f,
                "Line {}: block '{}' contains no numbered questions",
                line, name
            ),
            StructuralError::UnexpectedText { line, text } => {
                write!(f, "Line {}: unexpected text: '{}'", line, text)
            }
        }
    }
}

impl std::error::Error for StructuralError {}

/// Result of validating a document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationResult {
    pub errors: Vec<StructuralError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add_error(&mut self, error: StructuralError) {
        self.errors.push(error);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Rewrite every error line number through `f`
    pub fn map_lines<F>(&mut self, f: F)
    where
        F: Fn(usize) -> usize,
    {
        for line in self.errors.iter_mut().filter_map(StructuralError::line_mut) {
            *line = f(*line);
        }
    }

    /// One message per error, in detection order
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Block tracking state of the grammar pass
#[derive(Debug, Clone, PartialEq)]
enum BlockState {
    NoBlockOpen,
    BlockOpenEmpty { name: String },
    BlockOpenHasQuestion,
}

/// Structural validator bound to one profile's header rule
#[derive(Debug, Clone)]
pub struct Validator {
    header: Regex,
    expected_header: String,
}

impl Validator {
    pub fn new(profile: &Profile) -> Result<Self> {
        Ok(Self {
            header: profile.header_regex()?,
            expected_header: profile.header_template(),
        })
    }

    /// Run both passes over normalized text
    pub fn validate(&self, content: &str) -> ValidationResult {
        let lines: Vec<&str> = content.lines().collect();
        let mut result = ValidationResult::new();

        match self.check_header(&lines) {
            Ok(header_line) => self.check_blocks(&lines, header_line, &mut result),
            Err(error) => result.add_error(error),
        }

        log::debug!("Validation found {} errors", result.errors.len());
        result
    }

    /// First pass: the first non-blank line must be the required header
    ///
    /// Returns the 1-based line number of the header.
    fn check_header(&self, lines: &[&str]) -> Result<usize, StructuralError> {
        let first = lines
            .iter()
            .enumerate()
            .find(|(_, line)| !line.trim().is_empty());

        match first {
            Some((idx, line)) if self.header.is_match(line.trim_end()) => Ok(idx + 1),
            Some((_, line)) => Err(StructuralError::HeaderFormat {
                expected: self.expected_header.clone(),
                found: Some(line.trim().to_string()),
            }),
            None => Err(StructuralError::HeaderFormat {
                expected: self.expected_header.clone(),
                found: None,
            }),
        }
    }

    /// Second pass: block and question grammar after the header line
    fn check_blocks(&self, lines: &[&str], header_line: usize, result: &mut ValidationResult) {
        let mut state = BlockState::NoBlockOpen;

        for (idx, line) in lines.iter().enumerate().skip(header_line) {
            let line_num = idx + 1;

            match classify_line(line) {
                LineKind::BlockHeader(name) => {
                    if let BlockState::BlockOpenEmpty { name: previous } = state {
                        result.add_error(StructuralError::EmptyBlock {
                            name: previous,
                            line: line_num,
                        });
                    }
                    state = BlockState::BlockOpenEmpty {
                        name: name.to_string(),
                    };
                }
                LineKind::Question { .. } => match state {
                    BlockState::NoBlockOpen => result.add_error(StructuralError::OrphanItem {
                        line: line_num,
                        text: line.trim().to_string(),
                    }),
                    _ => state = BlockState::BlockOpenHasQuestion,
                },
                LineKind::SubNumbered(_) | LineKind::SubBullet(_) | LineKind::Blank => {}
                LineKind::Header(_) | LineKind::Other(_) => {
                    result.add_error(StructuralError::UnexpectedText {
                        line: line_num,
                        text: line.trim().to_string(),
                    });
                }
            }
        }

        if let BlockState::BlockOpenEmpty { name } = state {
            result.add_error(StructuralError::EmptyBlock {
                name,
                line: lines.len() + 1,
            });
        }
    }
}

/// Validate an entire document against a profile
pub fn validate_document(content: &str, profile: &Profile) -> Result<ValidationResult> {
    Ok(Validator::new(profile)?.validate(content))
}

//! Questionnaire Document Tree
//!
//! Plain data produced by one parse. No validation logic and no rendering
//! concerns live here.

use serde::Serialize;

/// A parsed questionnaire
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    /// Text of the first top-level header, empty if there is none
    pub title: String,
    /// Blocks in source order
    pub blocks: Vec<Block>,
}

/// A named group of questions opened by a `## ` header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub name: String,
    pub questions: Vec<Question>,
}

/// A numbered question with its sub-items
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub text: String,
    /// Indented numbered lines and bullet lines, in source order
    pub sub: Vec<String>,
}

impl Document {
    /// Total number of questions across all blocks
    pub fn question_count(&self) -> usize {
        self.blocks.iter().map(|b| b.questions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.blocks.is_empty()
    }
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            questions: Vec::new(),
        }
    }
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sub: Vec::new(),
        }
    }
}

//! Questionnaire Parser
//!
//! Lenient, single-pass extraction of the document tree. Unrecognized lines
//! are skipped rather than reported; strictness belongs to the validator.

pub mod ast;

pub use ast::{Block, Document, Question};

use crate::grammar::{classify_line, LineKind};

/// Parse normalized text into a document tree
///
/// Never fails. A malformed document yields a partial or empty tree.
pub fn parse_document(text: &str) -> Document {
    let mut builder = DocumentBuilder::default();

    for line in text.lines() {
        builder.push(classify_line(line));
    }

    let document = builder.finish();
    log::debug!(
        "Parsed {} blocks with {} questions",
        document.blocks.len(),
        document.question_count()
    );
    document
}

/// Accumulator for the open block and question during a parse
#[derive(Debug, Default)]
struct DocumentBuilder {
    title: Option<String>,
    blocks: Vec<Block>,
    block: Option<Block>,
    question: Option<Question>,
}

impl DocumentBuilder {
    fn push(&mut self, kind: LineKind<'_>) {
        match kind {
            LineKind::Header(text) => {
                // First header wins; later ones carry no structure.
                if self.title.is_none() {
                    self.title = Some(text.to_string());
                }
            }
            LineKind::BlockHeader(name) => {
                self.close_block();
                self.block = Some(Block::new(name));
            }
            LineKind::Question { text, .. } => {
                self.close_question();
                self.question = Some(Question::new(text));
            }
            LineKind::SubNumbered(text) | LineKind::SubBullet(text) => {
                if let Some(question) = self.question.as_mut() {
                    question.sub.push(text.to_string());
                }
            }
            LineKind::Blank | LineKind::Other(_) => {}
        }
    }

    /// Attach the open question to the open block
    ///
    /// A question opened before any block has nowhere to go and is dropped.
    fn close_question(&mut self) {
        if let Some(question) = self.question.take() {
            match self.block.as_mut() {
                Some(block) => block.questions.push(question),
                None => log::debug!("Dropping question outside of any block: {}", question.text),
            }
        }
    }

    fn close_block(&mut self) {
        self.close_question();
        if let Some(block) = self.block.take() {
            self.blocks.push(block);
        }
    }

    fn finish(mut self) -> Document {
        self.close_block();
        Document {
            title: self.title.unwrap_or_default(),
            blocks: self.blocks,
        }
    }
}

//! Questionnaire Tools
//!
//! Conversion of structured plain-text questionnaires to HTML, and strict
//! validation of their structure.
//!
//! This library provides:
//! - Document loading with comment stripping and source line tracking
//! - A line classifier shared by the parser and the validator
//! - A lenient parser producing a block/question tree
//! - A strict two-pass structural validator
//! - Profile-based header configuration
//! - HTML and JSON rendering

pub mod app;
pub mod config;
pub mod grammar;
pub mod loader;
pub mod parser;
pub mod profile;
pub mod render;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use grammar::{classify_line, LineKind};
pub use loader::{load_document, load_source, strip_comments, LoadError, SourceText};
pub use parser::{parse_document, Block, Document, Question};
pub use profile::{Profile, ProfileRegistry};
pub use render::{HtmlRenderer, JsonRenderer, Renderer};
pub use validation::{validate_document, StructuralError, ValidationResult, Validator};

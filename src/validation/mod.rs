//! Structural Validation
//!
//! Strict grammar checks kept apart from the lenient parser.

pub mod engine;

pub use engine::{validate_document, StructuralError, ValidationResult, Validator};

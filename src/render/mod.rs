//! Questionnaire Rendering
//!
//! Turns a parsed document into an output file. Every text field is HTML
//! escaped; question and sub-item texts additionally go through inline
//! markdown.

pub mod markdown;

use std::fmt::{self, Write as _};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::parser::{Block, Document, Question};

pub use markdown::{escape_text, inline_markdown};

const EMBEDDED_TEMPLATE: &str = include_str!("../../resources/templates/questionnaire.html");

const TITLE_PLACEHOLDER: &str = "{{ title }}";
const BLOCKS_PLACEHOLDER: &str = "{{ blocks }}";

/// Produces the final text for a document
pub trait Renderer {
    fn render(&self, document: &Document) -> Result<String>;
}

/// HTML page built from a template with `{{ title }}` and `{{ blocks }}`
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    template: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            template: EMBEDDED_TEMPLATE.to_string(),
        }
    }
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom template string
    pub fn with_template(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(BLOCKS_PLACEHOLDER) {
            bail!("Template has no '{}' placeholder", BLOCKS_PLACEHOLDER);
        }
        Ok(Self { template })
    }

    /// Load a custom template from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let template = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path.display()))?;
        Self::with_template(template)
            .with_context(|| format!("Invalid template: {}", path.display()))
    }

    fn render_blocks(&self, blocks: &[Block]) -> Result<String, fmt::Error> {
        let mut out = String::new();
        for block in blocks {
            writeln!(out, "  <section class=\"block\">")?;
            writeln!(out, "    <h2>{}</h2>", escape_text(&block.name))?;
            if !block.questions.is_empty() {
                writeln!(out, "    <ol class=\"questions\">")?;
                for question in &block.questions {
                    render_question(&mut out, question)?;
                }
                writeln!(out, "    </ol>")?;
            }
            writeln!(out, "  </section>")?;
        }
        Ok(out)
    }
}

fn render_question(out: &mut String, question: &Question) -> fmt::Result {
    write!(
        out,
        "      <li class=\"question\">{}",
        inline_markdown(&question.text)
    )?;
    if question.sub.is_empty() {
        return writeln!(out, "</li>");
    }

    writeln!(out)?;
    writeln!(out, "        <ul class=\"sub\">")?;
    for item in &question.sub {
        writeln!(out, "          <li>{}</li>", inline_markdown(item))?;
    }
    writeln!(out, "        </ul>")?;
    writeln!(out, "      </li>")
}

impl Renderer for HtmlRenderer {
    fn render(&self, document: &Document) -> Result<String> {
        let blocks = self
            .render_blocks(&document.blocks)
            .context("Failed to render blocks")?;
        let title = escape_text(&document.title);

        // Placeholders are substituted around the block markup, never inside it.
        let (head, tail) = self
            .template
            .split_once(BLOCKS_PLACEHOLDER)
            .context("Template has no blocks placeholder")?;

        let mut html = head.replace(TITLE_PLACEHOLDER, &title);
        html.push_str(blocks.trim_end_matches('\n'));
        html.push_str(&tail.replace(TITLE_PLACEHOLDER, &title));
        Ok(html)
    }
}

/// The document tree as pretty printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, document: &Document) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(document).context("Failed to serialize document")?;
        json.push('\n');
        Ok(json)
    }
}

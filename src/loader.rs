//! Document Loader
//!
//! Reads a questionnaire file and normalizes its text: comment spans are
//! removed, then surrounding whitespace is trimmed. Every normalized line
//! keeps the line number it had in the file. No structural checks happen
//! here.

use regex::Regex;
use std::fmt;
use std::io;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Shortest `<!-- ... -->` span, may cross line breaks
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment regex"));

/// Failure to load a document
#[derive(Debug)]
pub enum LoadError {
    /// The path does not resolve to an existing file
    NotFound(PathBuf),
    /// The file exists but could not be read as UTF-8 text
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            LoadError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::NotFound(_) => None,
            LoadError::Io { source, .. } => Some(source),
        }
    }
}

/// Normalized document text that remembers where its lines came from
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceText {
    pub text: String,
    /// 1-based source line of every normalized line
    source_lines: Vec<usize>,
}

impl SourceText {
    /// Normalize raw file content
    ///
    /// A leading byte order mark is dropped, comment spans are removed and
    /// the result is trimmed.
    pub fn new(raw: &str) -> Self {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
        let (stripped, origins) = strip_tracked(raw);

        let lead = stripped.len() - stripped.trim_start().len();
        let text = stripped.trim().to_string();

        let newlines: Vec<usize> = raw.match_indices('\n').map(|(idx, _)| idx).collect();
        let mut source_lines = Vec::new();
        let mut offset = lead;
        for line in text.split_inclusive('\n') {
            let origin = origins[offset];
            source_lines.push(newlines.partition_point(|&nl| nl < origin) + 1);
            offset += line.len();
        }

        Self { text, source_lines }
    }

    /// Source line of a 1-based line of the normalized text
    ///
    /// Lines past the end continue counting from the last known line.
    pub fn source_line(&self, line: usize) -> usize {
        if line == 0 {
            return 0;
        }
        match self.source_lines.get(line - 1) {
            Some(&source) => source,
            None => {
                let last = self.source_lines.last().copied().unwrap_or(0);
                last + (line - self.source_lines.len())
            }
        }
    }
}

/// Read a document from disk and normalize it
pub fn load_source(path: &Path) -> Result<SourceText, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let raw = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    log::debug!("Loaded {} bytes from {}", raw.len(), path.display());
    Ok(SourceText::new(&raw))
}

/// Read a document from disk and return its normalized text
pub fn load_document(path: &Path) -> Result<String, LoadError> {
    load_source(path).map(|source| source.text)
}

/// Strip comment spans and trim the result
pub fn normalize(text: &str) -> String {
    SourceText::new(text).text
}

/// Remove every comment span
///
/// Each opening marker pairs with the nearest closing marker after it. An
/// unterminated opening marker is left in place. Removal repeats until no
/// span is left, so markers glued together by a removal are stripped too.
pub fn strip_comments(text: &str) -> String {
    strip_tracked(text).0
}

/// Remove comment spans, keeping the input offset of every kept byte
fn strip_tracked(text: &str) -> (String, Vec<usize>) {
    let mut current = text.to_string();
    let mut origins: Vec<usize> = (0..text.len()).collect();
    let mut removed = 0;

    loop {
        let spans: Vec<Range<usize>> = COMMENT_RE.find_iter(&current).map(|m| m.range()).collect();
        if spans.is_empty() {
            break;
        }
        removed += spans.len();

        let mut kept = String::with_capacity(current.len());
        let mut kept_origins = Vec::with_capacity(origins.len());
        let mut last = 0;
        for span in spans {
            kept.push_str(&current[last..span.start]);
            kept_origins.extend_from_slice(&origins[last..span.start]);
            last = span.end;
        }
        kept.push_str(&current[last..]);
        kept_origins.extend_from_slice(&origins[last..]);

        current = kept;
        origins = kept_origins;
    }

    if removed > 0 {
        log::debug!("Removed {} comment spans", removed);
    }
    (current, origins)
}

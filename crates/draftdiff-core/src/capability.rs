//! Capability classification for a pair of extracted documents.
//!
//! Decides, before any diff runs, whether a text-level diff can be
//! produced and why not. Rules are evaluated in a fixed order; the
//! first match wins even when several conditions hold at once.

use serde::{Deserialize, Serialize};

/// Outcome of text extraction for one document version.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Extracted plain text, `None` when extraction produced nothing.
    pub text: Option<String>,
    /// Whether the extraction subsystem was present at all.
    pub extraction_available: bool,
    /// Whether the underlying binary has no usable text layer
    /// (scanned/image-only PDF).
    pub looks_binary: bool,
}

impl ExtractionResult {
    /// Wrap already-extracted text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            extraction_available: true,
            looks_binary: false,
        }
    }

    /// Marker for a build or deployment without the text extractor.
    pub fn unavailable() -> Self {
        Self {
            text: None,
            extraction_available: false,
            looks_binary: false,
        }
    }

    fn has_content(&self) -> bool {
        self.text
            .as_deref()
            .map(|t| !t.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Whether and why a text diff can (not) be produced for a version pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Both sides extracted usable text; a line diff is available.
    Ready,
    /// The text extractor is not installed on this build.
    ParserMissing,
    /// At least one side has no usable text layer.
    BinaryDetected,
    /// Extraction ran but at least one side is empty after trimming.
    NoContent,
}

/// Classify a version pair from its two extraction results.
pub fn classify(previous: &ExtractionResult, current: &ExtractionResult) -> Capability {
    if !previous.extraction_available || !current.extraction_available {
        return Capability::ParserMissing;
    }
    if previous.looks_binary || current.looks_binary {
        return Capability::BinaryDetected;
    }
    if !previous.has_content() || !current.has_content() {
        return Capability::NoContent;
    }
    Capability::Ready
}

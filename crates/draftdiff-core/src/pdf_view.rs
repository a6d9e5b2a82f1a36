//! PDF side-by-side fallback descriptor.
//!
//! When no text diff can be produced (and optionally alongside one),
//! the caller renders the two raw PDFs next to each other with coarse
//! change markers. The marker list is derived upstream from document
//! structure; this module only assembles the descriptor.

use serde::{Deserialize, Serialize};

/// Classification of one coarse change marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Addition,
    Removal,
    Edit,
}

/// One coarse change between two documents, at page granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeMarker {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: MarkerKind,
    pub preview: Option<String>,
}

/// Descriptor for rendering two PDFs side by side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PdfView {
    pub previous_pdf_url: Option<String>,
    pub current_pdf_url: Option<String>,
    pub changes: Vec<ChangeMarker>,
}

/// Assemble the fallback descriptor. Locators are nullable: a version
/// with no stored binary still gets a descriptor so the caller is never
/// left without a view.
pub fn build_pdf_view(
    previous_pdf_url: Option<String>,
    current_pdf_url: Option<String>,
    changes: Vec<ChangeMarker>,
) -> PdfView {
    PdfView {
        previous_pdf_url,
        current_pdf_url,
        changes,
    }
}

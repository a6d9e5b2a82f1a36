//! Request/response models for the DraftDiff API

use draftdiff_core::{Capability, DiffRow, DiffStats, PdfView};
use serde::{Deserialize, Serialize};

/// One side of a comparison request.
///
/// Callers either upload the raw PDF (`pdf_base64`) for server-side
/// extraction, or supply already-extracted `text`. `storage_url` is
/// passed through into the PDF fallback view.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionPayload {
    pub version_number: u32,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub pdf_base64: Option<String>,
    #[serde(default)]
    pub storage_url: Option<String>,
}

/// Request to compare two submitted versions
#[derive(Debug, Clone, Deserialize)]
pub struct CompareRequest {
    pub previous: VersionPayload,
    pub current: VersionPayload,
}

/// Response from a comparison
#[derive(Debug, Clone, Serialize)]
pub struct CompareResponse {
    pub capability: Capability,
    pub rows: Vec<DiffRow>,
    pub stats: DiffStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_view: Option<PdfView>,
    /// User-facing guidance when no text diff is available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Request to highlight word-level changes in a related line pair
#[derive(Debug, Clone, Deserialize)]
pub struct WordDiffRequest {
    pub left: String,
    pub right: String,
}

/// Response with word-level segments
#[derive(Debug, Clone, Serialize)]
pub struct WordDiffResponse {
    pub segments: Vec<draftdiff_core::Segment>,
}

/// Map a capability to the guidance shown to the reviewer.
pub fn capability_message(capability: Capability) -> Option<String> {
    match capability {
        Capability::Ready => None,
        Capability::ParserMissing => Some(
            "Text extraction is not available on this server; showing the PDF side-by-side view instead.".to_string(),
        ),
        Capability::BinaryDetected => Some(
            "At least one version has no usable text layer (scanned PDF?); showing the PDF side-by-side view instead.".to_string(),
        ),
        Capability::NoContent => Some(
            "No text content was found in at least one version.".to_string(),
        ),
    }
}

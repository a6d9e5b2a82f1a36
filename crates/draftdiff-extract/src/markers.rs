//! Coarse page-level change markers from document structure.
//!
//! Matches pages by position and compares SHA-256 checksums of their
//! content streams. The result feeds the PDF side-by-side fallback
//! view when no text diff is possible; it is intentionally coarse and
//! independent of the line/word diff.

use draftdiff_core::{ChangeMarker, MarkerKind};
use lopdf::Document;
use sha2::{Digest, Sha256};

use crate::error::ExtractError;

/// Parse PDF bytes and return the page count.
pub fn page_count(bytes: &[u8]) -> Result<u32, ExtractError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractError::ParseError(e.to_string()))?;
    Ok(doc.get_pages().len() as u32)
}

/// Derive per-page change markers between two versions.
///
/// Pages present in both documents with differing checksums emit `edit`
/// markers; pages only in the current document emit `addition`; pages
/// only in the previous document emit `removal`. Marker ids are
/// deterministic (`page-<n>`, 1-based).
pub fn page_markers(previous: &[u8], current: &[u8]) -> Result<Vec<ChangeMarker>, ExtractError> {
    let previous_digests = page_digests(previous)?;
    let current_digests = page_digests(current)?;

    let shared = previous_digests.len().min(current_digests.len());
    let mut markers = Vec::new();

    for page in 0..shared {
        if previous_digests[page] != current_digests[page] {
            markers.push(marker(page + 1, MarkerKind::Edit, "revised"));
        }
    }
    for page in shared..current_digests.len() {
        markers.push(marker(page + 1, MarkerKind::Addition, "added"));
    }
    for page in shared..previous_digests.len() {
        markers.push(marker(page + 1, MarkerKind::Removal, "removed"));
    }

    Ok(markers)
}

fn marker(page: usize, kind: MarkerKind, what: &str) -> ChangeMarker {
    ChangeMarker {
        id: format!("page-{}", page),
        label: format!("Page {}", page),
        kind,
        preview: Some(format!("Page {} {}", page, what)),
    }
}

fn page_digests(bytes: &[u8]) -> Result<Vec<[u8; 32]>, ExtractError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractError::ParseError(e.to_string()))?;

    let mut digests = Vec::new();
    for (_number, page_id) in doc.get_pages() {
        let content = doc
            .get_page_content(page_id)
            .map_err(|e| ExtractError::ParseError(e.to_string()))?;
        digests.push(Sha256::digest(&content).into());
    }
    Ok(digests)
}

//! Plain-text extraction with binary-content detection.

use draftdiff_core::ExtractionResult;

/// Extract plain text from PDF bytes.
///
/// Never fails: a document the parser rejects, or one that parses into
/// pages but carries no usable text layer (scanned/image-only), is
/// reported as `looks_binary`. Built without the `pdf` feature this
/// always reports the extractor as unavailable, which the engine maps
/// to the `parser_missing` capability.
#[cfg(feature = "pdf")]
pub fn extract_text(bytes: &[u8]) -> ExtractionResult {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => {
            let no_text_layer = text.trim().is_empty() && has_pages(bytes);
            if no_text_layer {
                tracing::debug!(
                    "no text layer in {}-byte document with pages",
                    bytes.len()
                );
            }
            ExtractionResult {
                text: Some(text),
                extraction_available: true,
                looks_binary: no_text_layer,
            }
        }
        Err(err) => {
            tracing::debug!("text extraction failed: {}", err);
            ExtractionResult {
                text: None,
                extraction_available: true,
                looks_binary: true,
            }
        }
    }
}

#[cfg(not(feature = "pdf"))]
pub fn extract_text(_bytes: &[u8]) -> ExtractionResult {
    ExtractionResult::unavailable()
}

#[cfg(feature = "pdf")]
fn has_pages(bytes: &[u8]) -> bool {
    lopdf::Document::load_mem(bytes)
        .map(|doc| !doc.get_pages().is_empty())
        .unwrap_or(false)
}

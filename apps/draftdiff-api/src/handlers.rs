//! HTTP handlers for the DraftDiff API

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::sync::Arc;

use draftdiff_core::{DiffRequest, DocumentVersion, ExtractionResult};
use draftdiff_extract::{extract_text, page_markers};

use crate::error::ApiError;
use crate::models::{
    capability_message, CompareRequest, CompareResponse, VersionPayload, WordDiffRequest,
    WordDiffResponse,
};
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Word-level highlighting for one related line pair
pub async fn word_diff(Json(req): Json<WordDiffRequest>) -> Json<WordDiffResponse> {
    let segments = draftdiff_core::compute_word_diff(&req.left, &req.right);
    Json(WordDiffResponse { segments })
}

/// Compare two submitted versions
pub async fn compare(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    let previous = prepare_version(&req.previous)?;
    let current = prepare_version(&req.current)?;

    // Coarse page markers for the fallback view, when both raw
    // binaries are on hand. A marker failure is not fatal: the view
    // simply ships without markers.
    let markers = match (&previous.pdf_bytes, &current.pdf_bytes) {
        (Some(prev), Some(cur)) => page_markers(prev, cur).unwrap_or_else(|e| {
            tracing::warn!("page marker derivation failed: {}", e);
            Vec::new()
        }),
        _ => Vec::new(),
    };

    let request = DiffRequest::new(previous.version, current.version)?.with_markers(markers);
    let result = state.engine.compare(&request);

    tracing::info!(
        "Compared v{} -> v{}: {:?} (+{} -{} ={}{})",
        request.previous().version_number,
        request.current().version_number,
        result.capability,
        result.stats.additions,
        result.stats.removals,
        result.stats.unchanged,
        if result.stats.truncated {
            ", truncated"
        } else {
            ""
        },
    );

    Ok(Json(CompareResponse {
        message: capability_message(result.capability),
        capability: result.capability,
        rows: result.rows,
        stats: result.stats,
        pdf_view: result.pdf_view,
    }))
}

struct PreparedVersion {
    version: DocumentVersion,
    pdf_bytes: Option<Vec<u8>>,
}

fn prepare_version(payload: &VersionPayload) -> Result<PreparedVersion, ApiError> {
    let pdf_bytes = payload
        .pdf_base64
        .as_deref()
        .map(|b64| {
            BASE64
                .decode(b64)
                .map_err(|e| ApiError::InvalidRequest(format!("Invalid PDF base64: {}", e)))
        })
        .transpose()?;

    let extraction = match (&payload.text, &pdf_bytes) {
        // Already-extracted text wins over a binary upload
        (Some(text), _) => ExtractionResult::from_text(text.clone()),
        (None, Some(bytes)) => extract_text(bytes),
        // Nothing supplied at all: classified as no_content downstream
        (None, None) => ExtractionResult {
            text: None,
            extraction_available: true,
            looks_binary: false,
        },
    };

    let mut version = DocumentVersion::new(payload.version_number, extraction);
    if let Some(url) = &payload.storage_url {
        version = version.with_storage_url(url.clone());
    }

    Ok(PreparedVersion { version, pdf_bytes })
}

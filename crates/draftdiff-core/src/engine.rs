//! Engine orchestration: capability gate, line diff, fallback view.
//!
//! `DiffEngine` is stateless given its configuration; one value is
//! shared across concurrent comparisons. A comparison is a blocking,
//! CPU-bound unit of work bounded by the line ceiling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::capability::{self, Capability, ExtractionResult};
use crate::error::DiffError;
use crate::line::{self, DiffRow, DiffStats};
use crate::pdf_view::{self, ChangeMarker, PdfView};

/// Default combined line-count ceiling for a single comparison.
pub const DEFAULT_LINE_LIMIT: usize = 4000;

/// Immutable snapshot of one submitted document version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentVersion {
    /// Monotonically increasing per thesis.
    pub version_number: u32,
    pub extraction: ExtractionResult,
    /// Locator for the original stored binary, when one exists.
    pub storage_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DocumentVersion {
    pub fn new(version_number: u32, extraction: ExtractionResult) -> Self {
        Self {
            version_number,
            extraction,
            storage_url: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_storage_url(mut self, url: impl Into<String>) -> Self {
        self.storage_url = Some(url.into());
        self
    }
}

/// A validated pair of versions to compare. Ephemeral: built per
/// request, never persisted.
#[derive(Debug, Clone)]
pub struct DiffRequest {
    previous: DocumentVersion,
    current: DocumentVersion,
    markers: Vec<ChangeMarker>,
}

impl DiffRequest {
    /// Pair two versions for comparison. The previous version must be
    /// strictly older than the current one.
    pub fn new(previous: DocumentVersion, current: DocumentVersion) -> Result<Self, DiffError> {
        if previous.version_number >= current.version_number {
            return Err(DiffError::VersionOrder {
                previous: previous.version_number,
                current: current.version_number,
            });
        }
        Ok(Self {
            previous,
            current,
            markers: Vec::new(),
        })
    }

    /// Attach coarse change markers for the PDF fallback view.
    pub fn with_markers(mut self, markers: Vec<ChangeMarker>) -> Self {
        self.markers = markers;
        self
    }

    pub fn previous(&self) -> &DocumentVersion {
        &self.previous
    }

    pub fn current(&self) -> &DocumentVersion {
        &self.current
    }
}

/// Computed comparison output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffResult {
    pub capability: Capability,
    /// Only meaningful when `capability` is `Ready`.
    pub rows: Vec<DiffRow>,
    pub stats: DiffStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_view: Option<PdfView>,
}

/// Engine configuration.
#[derive(Debug, Clone, Copy)]
pub struct DiffConfig {
    /// Combined line count above which the diff is truncated.
    pub line_limit: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            line_limit: DEFAULT_LINE_LIMIT,
        }
    }
}

/// Stateless comparison engine.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    config: DiffConfig,
}

impl DiffEngine {
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    /// Compare two versions.
    ///
    /// Never fails: degraded inputs map to a non-ready capability, and
    /// a non-ready result always carries a `pdf_view` so the caller has
    /// a fallback.
    pub fn compare(&self, request: &DiffRequest) -> DiffResult {
        let capability = capability::classify(&request.previous.extraction, &request.current.extraction);

        let (rows, stats) = if capability == Capability::Ready {
            let previous_text = request.previous.extraction.text.as_deref().unwrap_or("");
            let current_text = request.current.extraction.text.as_deref().unwrap_or("");
            let previous_lines: Vec<&str> = previous_text.split('\n').collect();
            let current_lines: Vec<&str> = current_text.split('\n').collect();
            let diff = line::compute_line_diff(&previous_lines, &current_lines, self.config.line_limit);
            (diff.rows, diff.stats)
        } else {
            (Vec::new(), DiffStats::default())
        };

        let pdf_view = self.fallback_view(request, capability);

        DiffResult {
            capability,
            rows,
            stats,
            pdf_view,
        }
    }

    // Mandatory when no text diff is available; supplementary alongside
    // a ready diff when a stored binary or marker list exists.
    fn fallback_view(&self, request: &DiffRequest, capability: Capability) -> Option<PdfView> {
        let has_locator =
            request.previous.storage_url.is_some() || request.current.storage_url.is_some();
        if capability == Capability::Ready && !has_locator && request.markers.is_empty() {
            return None;
        }
        Some(pdf_view::build_pdf_view(
            request.previous.storage_url.clone(),
            request.current.storage_url.clone(),
            request.markers.clone(),
        ))
    }
}

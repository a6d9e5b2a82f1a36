//! DraftDiff core engine
//!
//! Pure version-comparison for thesis drafts: given two extracted
//! document versions, produce either a line-level diff with word-level
//! highlighting, or a capability signal explaining why a text diff is
//! unavailable paired with a PDF side-by-side fallback descriptor.
//!
//! The engine performs no I/O. Text extraction and binary fetch happen
//! upstream (see the `draftdiff-extract` crate); every degraded input
//! maps to a `Capability` value rather than an error.

pub mod capability;
pub mod engine;
pub mod error;
pub mod line;
pub mod pdf_view;
pub mod word;

mod lcs;

pub use capability::{classify, Capability, ExtractionResult};
pub use engine::{
    DiffConfig, DiffEngine, DiffRequest, DiffResult, DocumentVersion, DEFAULT_LINE_LIMIT,
};
pub use error::DiffError;
pub use line::{compute_line_diff, DiffRow, DiffStats, LineDiff, RowKind};
pub use pdf_view::{build_pdf_view, ChangeMarker, MarkerKind, PdfView};
pub use word::{compute_word_diff, Segment, SegmentKind};

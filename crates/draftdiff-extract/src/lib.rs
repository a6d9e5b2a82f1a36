//! Text extraction and structural inspection for submitted drafts.
//!
//! This crate is the I/O-free collaborator in front of the pure diff
//! engine: it turns raw PDF bytes into the `ExtractionResult` consumed
//! by the capability classifier, and derives coarse page-level change
//! markers for the PDF side-by-side fallback view.

pub mod error;
pub mod markers;
pub mod text;

pub use error::ExtractError;
pub use markers::{page_count, page_markers};
pub use text::extract_text;

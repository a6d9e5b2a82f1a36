//! Application state for the DraftDiff API

use draftdiff_core::{DiffConfig, DiffEngine, DEFAULT_LINE_LIMIT};

pub struct AppState {
    pub engine: DiffEngine,
}

impl AppState {
    pub fn new() -> Self {
        // Truncation ceiling from env or default
        let line_limit = std::env::var("DRAFTDIFF_LINE_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_LINE_LIMIT);

        tracing::info!("Diff line limit: {}", line_limit);

        Self {
            engine: DiffEngine::new(DiffConfig { line_limit }),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

use std::sync::Arc;

use crate::recommendation::catalog::Catalog;
use crate::recommendation::narration::Narrator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only recommendation tables, built once at startup.
    pub catalog: Arc<Catalog>,
    /// Present only when an OpenAI API key is configured.
    pub narrator: Option<Arc<dyn Narrator>>,
}

use std::sync::Arc;

use crate::completion::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Production: `OpenAiClient`.
    /// Tests swap in stubs to exercise the fail-soft dispatch paths.
    pub completion: Arc<dyn CompletionService>,
}

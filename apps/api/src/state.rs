use std::sync::Arc;

use crate::config::Config;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ResumeStore>,
    /// Kept alongside the store so handlers gaining config-dependent behavior
    /// don't need a signature change.
    #[allow(dead_code)]
    pub config: Config,
}

use std::sync::Arc;

use crate::config::Config;
use crate::directory::store::DirectoryStore;
use crate::showcase::store::ShowcaseStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Seeded single-candidate store behind `/profile`, `/projects`, `/search`, `/skills/top`.
    pub showcase: Arc<dyn ShowcaseStore>,
    /// Persistent profile directory behind `/profile/:id` and `/profiles`.
    pub directory: Arc<dyn DirectoryStore>,
    pub config: Config,
}

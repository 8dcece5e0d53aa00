//! Application State

use std::sync::Arc;

use landing_content::LandingContent;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Page content served at `/api/content`, validated at startup
    pub content: Arc<LandingContent>,
}

impl AppState {
    pub fn new(content: LandingContent) -> Self {
        Self {
            content: Arc::new(content),
        }
    }
}

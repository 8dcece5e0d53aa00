//! HTTP Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use landing_content::LandingContent;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub faq_items: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        faq_items: state.content.faqs.len(),
    })
}

/// Landing page content consumed by the frontend
pub async fn get_content(State(state): State<AppState>) -> Json<LandingContent> {
    tracing::debug!("serving landing content");
    Json(state.content.as_ref().clone())
}

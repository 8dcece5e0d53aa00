//! Error Types for Landing Content

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContentError>;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid FAQ entry {index}: {reason}")]
    InvalidFaq { index: usize, reason: String },

    #[error("Invalid pricing tier '{tier}': {reason}")]
    InvalidPricing { tier: String, reason: String },

    #[error("Accordion error: {0}")]
    Accordion(#[from] accordion_core::AccordionError),

    #[error("Could not read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

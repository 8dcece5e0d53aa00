//! # landing-content
//!
//! Copy, pricing and FAQ data for the DhanKanya landing page.
//!
//! The same `LandingContent` value is bundled into the WASM frontend as a
//! fallback and served by the server at `/api/content`, where it can be
//! overridden from a JSON file without rebuilding the frontend.
//!
//! ```text
//! ┌───────────────────┐  /api/content  ┌───────────────────┐
//! │  landing-server   │ ─────────────▶ │    landing-web    │
//! │ (file or default) │                │ (fetch, fallback  │
//! └───────────────────┘                │  to default)      │
//!                                      └───────────────────┘
//! ```

mod defaults;
pub mod error;
pub mod model;

pub use error::{ContentError, Result};
pub use model::{
    BillingPeriod, ButtonVariant, Faq, Highlight, LandingContent, NavLink, PlanFeature, Price,
    PricingTier, Step, Suggestion,
};

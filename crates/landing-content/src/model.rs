//! Content Models
//!
//! Everything the landing page renders. Prices use `rust_decimal` -
//! never use f64 for money!

use std::path::Path;

use accordion_core::{ItemId, validate_unique};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};

/// Anchor link in the navbar
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    /// Fragment target, e.g. `#pricing`
    pub link: String,
}

/// Clickable prompt suggestion under the hero
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub icon: String,
    pub text: String,
}

/// "How it works" step
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Display number, e.g. "01"
    pub number: String,
    pub title: String,
    pub description: String,
}

/// Icon + title + description card, used for use cases and features
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Monthly/yearly billing period
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    Month,
    Year,
}

impl std::fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
        }
    }
}

/// A price in a given currency per billing period
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub amount: Decimal,
    /// Currency symbol, e.g. "₹"
    pub currency: String,
    pub period: BillingPeriod,
}

impl Price {
    pub fn monthly(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            period: BillingPeriod::Month,
        }
    }

    pub fn is_free(&self) -> bool {
        self.amount.is_zero()
    }

    /// `₹199/month`
    pub fn label(&self) -> String {
        format!("{}{}/{}", self.currency, self.amount.normalize(), self.period)
    }
}

/// One line in a pricing card
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFeature {
    pub text: String,
    pub included: bool,
}

/// Button style for a pricing card call to action
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
}

/// A pricing card
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: Price,
    /// Small label next to the name, e.g. "Free" or "Coming"
    pub badge: String,
    pub description: String,
    pub features: Vec<PlanFeature>,
    pub button_text: String,
    #[serde(default)]
    pub button_variant: ButtonVariant,
    #[serde(default)]
    pub highlighted: bool,
}

impl PricingTier {
    pub fn included_count(&self) -> usize {
        self.features.iter().filter(|f| f.included).count()
    }
}

/// Question and answer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    /// Accordion identifier; derived from the position when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    pub question: String,
    pub answer: String,
}

/// The complete landing page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingContent {
    pub brand: String,
    pub headline: String,
    pub hero_badge: String,
    pub input_placeholder: String,
    pub nav: Vec<NavLink>,
    pub suggestions: Vec<Suggestion>,
    pub steps: Vec<Step>,
    pub use_cases: Vec<Highlight>,
    pub features: Vec<Highlight>,
    pub pricing: Vec<PricingTier>,
    pub faqs: Vec<Faq>,
}

impl LandingContent {
    /// Parse and validate content from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Load and validate content from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let content = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.as_ref().display(),
            faqs = content.faqs.len(),
            tiers = content.pricing.len(),
            "loaded landing content"
        );
        Ok(content)
    }

    /// FAQ entries as accordion `(identifier, label, body)` tuples
    pub fn faq_entries(&self) -> Vec<(ItemId, String, String)> {
        self.faqs
            .iter()
            .enumerate()
            .map(|(index, faq)| {
                let id = faq.id.clone().unwrap_or_else(|| ItemId::indexed(index));
                (id, faq.question.clone(), faq.answer.clone())
            })
            .collect()
    }

    /// Reject content the page cannot render correctly
    pub fn validate(&self) -> Result<()> {
        for (index, faq) in self.faqs.iter().enumerate() {
            if faq.question.trim().is_empty() {
                return Err(ContentError::InvalidFaq {
                    index,
                    reason: "question is empty".into(),
                });
            }
            if faq.id.as_ref().is_some_and(ItemId::is_unbound) {
                return Err(ContentError::InvalidFaq {
                    index,
                    reason: "identifier is empty".into(),
                });
            }
        }

        let entries = self.faq_entries();
        validate_unique(entries.iter().map(|(id, _, _)| id))?;

        for tier in &self.pricing {
            if tier.price.amount.is_sign_negative() {
                return Err(ContentError::InvalidPricing {
                    tier: tier.name.clone(),
                    reason: "price is negative".into(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_label() {
        assert_eq!(Price::monthly(dec!(199), "₹").label(), "₹199/month");
        assert_eq!(Price::monthly(dec!(0.00), "₹").label(), "₹0/month");
        assert!(Price::monthly(dec!(0), "₹").is_free());
    }

    #[test]
    fn test_faq_entries_use_index_ids() {
        let mut content = LandingContent::default();
        content.faqs.truncate(2);
        content.faqs[1].id = Some(ItemId::new("data"));

        let entries = content.faq_entries();
        assert_eq!(entries[0].0, ItemId::new("item-0"));
        assert_eq!(entries[1].0, ItemId::new("data"));
    }

    #[test]
    fn test_duplicate_faq_ids_rejected() {
        let mut content = LandingContent::default();
        content.faqs[2].id = Some(ItemId::new("item-0"));

        let err = content.validate().unwrap_err();
        assert!(matches!(err, ContentError::Accordion(_)));
    }

    #[test]
    fn test_empty_question_rejected() {
        let mut content = LandingContent::default();
        content.faqs[0].question = "  ".into();

        let err = content.validate().unwrap_err();
        assert!(matches!(err, ContentError::InvalidFaq { index: 0, .. }));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut content = LandingContent::default();
        content.pricing[0].price.amount = dec!(-1);
        assert!(matches!(
            content.validate(),
            Err(ContentError::InvalidPricing { .. })
        ));
    }

    #[test]
    fn test_json_roundtrip_keeps_prices_exact() {
        let content = LandingContent::default();
        let json = serde_json::to_string(&content).unwrap();
        let parsed = LandingContent::from_json_str(&json).unwrap();
        assert_eq!(parsed.pricing[1].price.amount, dec!(199));
        assert_eq!(parsed, content);
    }

    #[test]
    fn test_hero_fields_in_json() {
        let value = serde_json::to_value(LandingContent::default()).unwrap();
        assert!(value["headline"].as_str().is_some_and(|s| !s.is_empty()));
        assert!(value["input_placeholder"].as_str().is_some_and(|s| !s.is_empty()));
        assert!(value.get("tagline").is_none());
    }
}

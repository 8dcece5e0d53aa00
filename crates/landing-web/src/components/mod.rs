//! UI Components

pub mod accordion;
mod cards;

pub use accordion::{Accordion, AccordionContent, AccordionItem, AccordionTrigger, FaqAccordion};
pub use cards::{HighlightCard, PricingCard, StepCard, icon_glyph};

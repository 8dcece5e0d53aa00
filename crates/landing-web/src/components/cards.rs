//! Card components for the marketing sections

use landing_content::{ButtonVariant, Highlight, PricingTier, Step};
use leptos::prelude::*;

/// Glyph for a content icon name
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "wallet" => "👛",
        "target" => "🎯",
        "trending-up" => "📈",
        "pie-chart" => "📊",
        "credit-card" => "💳",
        "shield" => "🛡️",
        "brain" => "🧠",
        "message-circle" => "💬",
        "indian-rupee" => "₹",
        _ => "•",
    }
}

#[component]
pub fn StepCard(step: Step) -> impl IntoView {
    view! {
        <div class="group p-8 rounded-2xl bg-[#0f0f0f] border border-[#1f1f1f] hover:border-[#333333] transition-all duration-300">
            <div class="text-5xl font-bold text-[#1f1f1f] mb-6 group-hover:text-[#00ff88] transition-colors duration-300">
                {step.number}
            </div>
            <h3 class="text-xl font-medium mb-3 text-[#f5f5f5]">{step.title}</h3>
            <p class="text-[#666666] leading-relaxed text-sm">{step.description}</p>
        </div>
    }
}

#[component]
pub fn HighlightCard(highlight: Highlight) -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl bg-[#0f0f0f] border border-[#1f1f1f] hover:border-[#333333] transition-colors">
            <div class="text-3xl mb-4">{icon_glyph(&highlight.icon)}</div>
            <h3 class="text-lg font-medium mb-2 text-[#f5f5f5]">{highlight.title}</h3>
            <p class="text-[#666666] text-sm leading-relaxed">{highlight.description}</p>
        </div>
    }
}

#[component]
pub fn PricingCard(tier: PricingTier) -> impl IntoView {
    let card_class = if tier.highlighted {
        "bg-[#00ff88]/5 border border-[#00ff88]/30 p-8 rounded-2xl flex flex-col h-full"
    } else {
        "bg-[#0f0f0f] border border-[#1f1f1f] p-8 rounded-2xl flex flex-col h-full"
    };
    let button_class = match tier.button_variant {
        ButtonVariant::Default => "btn btn-primary w-full mt-auto",
        ButtonVariant::Outline => "btn btn-outline w-full mt-auto",
    };
    let price = tier.price.label();

    view! {
        <div class=card_class>
            <div class="flex items-center gap-2 mb-2">
                <h3 class="text-2xl font-bold text-[#f5f5f5]">{tier.name}</h3>
                <span class="badge">{tier.badge}</span>
            </div>
            <div class="text-4xl font-bold mb-2 text-[#f5f5f5]">{price}</div>
            <p class="text-[#666666] mb-8 text-sm">{tier.description}</p>

            <ul class="space-y-4 mb-10 flex-1">
                {tier
                    .features
                    .into_iter()
                    .map(|feature| {
                        let (mark, text_class) = if feature.included {
                            ("✓", "text-sm text-[#cccccc]")
                        } else {
                            ("✕", "text-sm text-[#444444]")
                        };
                        view! {
                            <li class="flex items-center gap-3">
                                <span class="w-5 h-5 rounded-full flex items-center justify-center flex-shrink-0">
                                    {mark}
                                </span>
                                <span class=text_class>{feature.text}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <button type="button" class=button_class>{tier.button_text}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_default_icon_has_a_glyph() {
        let content = landing_content::LandingContent::default();
        let names = content
            .suggestions
            .iter()
            .map(|s| s.icon.as_str())
            .chain(content.use_cases.iter().map(|h| h.icon.as_str()))
            .chain(content.features.iter().map(|h| h.icon.as_str()));

        for name in names {
            assert_ne!(icon_glyph(name), "•", "no glyph for {name}");
        }
    }
}

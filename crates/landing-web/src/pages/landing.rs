//! Landing Page

use accordion_core::{ExpansionMode, ItemId};
use chrono::Datelike;
use landing_content::LandingContent;
use leptos::prelude::*;

use crate::api;
use crate::components::{FaqAccordion, HighlightCard, PricingCard, StepCard, icon_glyph};

#[component]
pub fn LandingPage() -> impl IntoView {
    let (content, set_content) = signal(LandingContent::default());

    leptos::task::spawn_local(async move {
        match api::fetch_content().await {
            Ok(fetched) => set_content.set(fetched),
            Err(e) => log::warn!("Using bundled content: {e}"),
        }
    });

    let faq = faq_entries_memo(content);

    view! {
        <div class="landing min-h-screen bg-[#0a0a0a] text-[#f5f5f5] font-sans">
            {move || {
                let c = content.get();
                view! {
                    <Navbar brand=c.brand.clone() links=c.nav.clone() />
                    <Hero content=c />
                }
            }}
            <div class="relative z-10 bg-[#0a0a0a]/50 border-t border-[#222222]">
                {move || {
                    let c = content.get();
                    view! {
                        <HowItWorks content=c.clone() />
                        <PricingSection content=c />
                    }
                }}
                <FaqSection entries=faq />
                {move || view! { <Footer brand=content.with(|c| c.brand.clone()) /> }}
            </div>
        </div>
    }
}

/// FAQ entries that only notify when the entries themselves change, so a
/// refetch with the same FAQ keeps the open panel.
fn faq_entries_memo(content: ReadSignal<LandingContent>) -> Memo<Vec<(ItemId, String, String)>> {
    Memo::new(move |_| content.with(LandingContent::faq_entries))
}

#[component]
fn Navbar(brand: String, links: Vec<landing_content::NavLink>) -> impl IntoView {
    view! {
        <nav class="fixed top-0 inset-x-0 z-50 flex items-center justify-between px-6 py-4 backdrop-blur-md">
            <a href="#home" class="flex items-center gap-2">
                <span class="w-8 h-8 bg-[#222222]/50 border border-[#333333] rounded-lg flex items-center justify-center">
                    "₹"
                </span>
                <span class="text-sm font-bold hidden md:block">{brand}</span>
            </a>
            <ul class="hidden md:flex items-center gap-6">
                {links
                    .into_iter()
                    .map(|l| view! { <li><a href=l.link class="text-sm text-[#888888] hover:text-[#f5f5f5]">{l.name}</a></li> })
                    .collect_view()}
            </ul>
            <div class="hidden md:flex items-center gap-2">
                <a href="/signin" class="btn btn-ghost">"SignIn"</a>
                <a href="/signup" class="btn btn-primary">"SignUp"</a>
            </div>
        </nav>
    }
}

#[component]
fn Hero(content: LandingContent) -> impl IntoView {
    view! {
        <section id="home" class="hero relative pt-[180px] pb-24 px-6 flex flex-col items-center justify-center">
            <div class="mb-8 inline-flex items-center gap-2 px-3 py-1.5 rounded-full bg-[#1a1a1a] border border-[#333333]">
                <span class="bg-[#333333] text-[10px] uppercase font-bold px-2 py-0.5 rounded-full">"Feature"</span>
                <span class="text-xs text-[#888888]">{content.hero_badge}" ↗"</span>
            </div>

            <h1 class="text-5xl md:text-7xl font-bold text-center tracking-tight mb-8 max-w-4xl">
                {content.headline}
            </h1>

            <div class="w-full max-w-[800px] bg-[#0a0a0a] border border-[#262626] rounded-2xl p-4">
                <textarea
                    class="w-full bg-transparent border-none outline-none resize-none h-[80px] text-lg font-light"
                    placeholder=content.input_placeholder
                />
            </div>

            <div class="mt-8 flex flex-wrap justify-center gap-3 max-w-[800px]">
                {content
                    .suggestions
                    .into_iter()
                    .map(|s| {
                        view! {
                            <button type="button" class="pill">
                                <span>{icon_glyph(&s.icon)}</span>
                                <span>{s.text}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn HowItWorks(content: LandingContent) -> impl IntoView {
    view! {
        <section id="features" class="py-32 px-6">
            <div class="max-w-[1280px] mx-auto">
                <SectionHeading title="How it works" subtitle="Three simple steps to financial clarity" />
                <div class="grid md:grid-cols-3 gap-8">
                    {content.steps.into_iter().map(|step| view! { <StepCard step=step /> }).collect_view()}
                </div>

                <SectionHeading title="What you can do" subtitle="Everyday money questions, answered" />
                <div class="grid md:grid-cols-3 gap-6">
                    {content
                        .use_cases
                        .into_iter()
                        .map(|highlight| view! { <HighlightCard highlight=highlight /> })
                        .collect_view()}
                </div>

                <SectionHeading title="Why DhanKanya" subtitle="Built for how India earns and saves" />
                <div class="grid md:grid-cols-4 gap-6">
                    {content
                        .features
                        .into_iter()
                        .map(|highlight| view! { <HighlightCard highlight=highlight /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingSection(content: LandingContent) -> impl IntoView {
    view! {
        <section id="pricing" class="py-32 px-6 border-t border-[#1a1a1a]">
            <div class="max-w-[1280px] mx-auto">
                <SectionHeading title="Pricing" subtitle="Start free, upgrade when you're ready" />
                <div class="grid md:grid-cols-2 gap-8 max-w-4xl mx-auto items-stretch">
                    {content.pricing.into_iter().map(|tier| view! { <PricingCard tier=tier /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FaqSection(entries: Memo<Vec<(ItemId, String, String)>>) -> impl IntoView {
    view! {
        <section id="faq" class="py-32 px-6 border-t border-[#1a1a1a]">
            <div class="max-w-[1280px] mx-auto">
                <div class="text-center mb-20">
                    <h2 class="text-3xl md:text-4xl font-semibold mb-4 tracking-tight">"FAQ"</h2>
                </div>
                <div class="max-w-2xl mx-auto">
                    {move || {
                        view! { <FaqAccordion entries=entries.get() mode=ExpansionMode::Single class="space-y-4" /> }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-24">
            <h2 class="text-3xl md:text-4xl font-semibold mb-4 text-[#f5f5f5] tracking-tight">{title}</h2>
            <p class="text-[#666666]">{subtitle}</p>
        </div>
    }
}

#[component]
fn Footer(brand: String) -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer id="contact" class="py-12 px-6 border-t border-[#1a1a1a] bg-[#050505] text-center">
            <div class="flex items-center justify-center gap-2 mb-4 opacity-50">
                <span>"₹"</span>
                <span class="font-bold tracking-tight">{brand.clone()}</span>
            </div>
            <p class="text-xs text-[#444444]">{format!("© {year} {brand}. All rights reserved.")}</p>
        </footer>
    }
}

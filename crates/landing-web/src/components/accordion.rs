//! Accordion Components
//!
//! `Accordion` owns the group state, `AccordionItem` names one panel, and
//! `AccordionTrigger`/`AccordionContent` find both through context.

use accordion_core::{
    AccordionConfig, ExpansionMode, ItemId, ItemScope, PanelState, Result, Transition, validate_unique,
};
use leptos::context::Provider;
use leptos::prelude::*;

use crate::channel::{AccordionChannel, lenient_panel_state, use_channel, use_item_id};

/// Group container. Creates one channel for the lifetime of this mount.
#[component]
pub fn Accordion(
    #[prop(optional)] mode: ExpansionMode,
    #[prop(default = true)] collapsible: bool,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let channel = AccordionChannel::new(AccordionConfig { mode, collapsible });

    view! {
        <Provider value=channel>
            <div class=format!("w-full {class}") data-mode=mode.to_string()>
                {children()}
            </div>
        </Provider>
    }
}

/// One panel. Without a `value` a fresh identifier is generated.
#[component]
pub fn AccordionItem(
    #[prop(into, optional)] value: Option<ItemId>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let id = value.unwrap_or_else(ItemId::generate);
    let channel = use_context::<AccordionChannel>();
    let value_attr = id.to_string();
    let state = Memo::new({
        let id = id.clone();
        move |_| lenient_panel_state(channel, &id)
    });

    view! {
        <Provider value=ItemScope::new(id)>
            <div
                class=format!("border-b {class}")
                data-value=value_attr
                data-state=move || state.get().as_str()
            >
                {children()}
            </div>
        </Provider>
    }
}

/// Clickable header. Must be rendered inside an `Accordion`.
#[component]
pub fn AccordionTrigger(
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let channel = use_channel("AccordionTrigger").unwrap_or_else(|err| panic!("{err}"));
    let id = use_item_id("AccordionTrigger");
    let state = Memo::new({
        let id = id.clone();
        move |_| channel.panel_state(&id)
    });

    let on_click = move |_| {
        toggle_from_trigger(channel, &id);
    };

    view! {
        <div class="flex">
            <button
                type="button"
                class=format!(
                    "flex flex-1 items-center justify-between py-4 font-medium transition-all hover:underline {class}"
                )
                data-state=move || state.get().as_str()
                aria-expanded=move || state.get().is_open().to_string()
                on:click=on_click
            >
                {children()}
                <ChevronDown open=state />
            </button>
        </div>
    }
}

/// A trigger with no item scope never toggles, so the sentinel stays inactive.
fn toggle_from_trigger(channel: AccordionChannel, id: &ItemId) -> Option<Transition> {
    if id.is_unbound() {
        log::warn!("AccordionTrigger clicked outside an AccordionItem; ignoring");
        return None;
    }
    Some(channel.toggle(id.clone()))
}

/// Collapsible body. Visible only while its item is the open one.
#[component]
pub fn AccordionContent(
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let channel = use_context::<AccordionChannel>();
    let id = use_item_id("AccordionContent");
    let state = Memo::new(move |_| lenient_panel_state(channel, &id));

    let classes = move || {
        let visibility = match state.get() {
            PanelState::Open => "grid-rows-[1fr] opacity-100",
            PanelState::Closed => "grid-rows-[0fr] opacity-0",
        };
        format!("overflow-hidden text-sm transition-all duration-200 ease-in-out grid {visibility} {class}")
    };

    view! {
        <div
            class=classes
            data-state=move || state.get().as_str()
            aria-hidden=move || (!state.get().is_open()).to_string()
        >
            <div class="overflow-hidden">
                <div class="pb-4 pt-0">{children()}</div>
            </div>
        </div>
    }
}

fn check_entries(entries: &[(ItemId, String, String)]) -> Result<()> {
    validate_unique(entries.iter().map(|(id, _, _)| id))
}

#[component]
fn ChevronDown(open: Memo<PanelState>) -> impl IntoView {
    view! {
        <svg
            class="h-4 w-4 shrink-0 transition-transform duration-200"
            class=("rotate-180", move || open.get().is_open())
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="m6 9 6 6 6-6" />
        </svg>
    }
}

/// Data-driven group built from `(identifier, label, body)` entries.
///
/// Duplicate identifiers are rejected before anything renders.
#[component]
pub fn FaqAccordion(
    entries: Vec<(ItemId, String, String)>,
    #[prop(optional)] mode: ExpansionMode,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    if let Err(err) = check_entries(&entries) {
        log::error!("refusing to render accordion: {err}");
        return view! { <p class="text-sm text-[#888888]">"This section is unavailable right now."</p> }
            .into_any();
    }

    view! {
        <Accordion mode=mode class=class>
            {entries
                .into_iter()
                .map(|(id, label, body)| {
                    view! {
                        <AccordionItem
                            value=id
                            class="border border-[#1f1f1f] bg-[#0f0f0f] rounded-xl px-6 data-[state=open]:border-[#333333]"
                        >
                            <AccordionTrigger class="text-left hover:no-underline py-6 text-[#f5f5f5] text-sm font-medium">
                                {label}
                            </AccordionTrigger>
                            <AccordionContent class="text-[#888888] pb-6 leading-relaxed">
                                {body}
                            </AccordionContent>
                        </AccordionItem>
                    }
                })
                .collect_view()}
        </Accordion>
    }
    .into_any()
}

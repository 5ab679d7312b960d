use leptos::prelude::*;

use crate::components::disclosure::glyph_class;

pub const LOGO_SRC: &str = "/assets/svg/blueberries.svg";

#[component]
pub fn Logo(#[prop(default = "")] class: &'static str) -> impl IntoView {
    view! {
        <img src=LOGO_SRC alt="The Blueberries" class=class/>
    }
}

#[component]
pub fn ChevronDownIcon() -> impl IntoView {
    view! {
        <svg
            class="inline-block h-5 w-5 text-gray-400"
            viewBox="0 0 20 20"
            fill="currentColor"
            aria-hidden="true"
        >
            <path
                fill-rule="evenodd"
                clip-rule="evenodd"
                d="M5.23 7.21a.75.75 0 011.06.02L10 11.168l3.71-3.938a.75.75 0 111.08 1.04l-4.25 4.5a.75.75 0 01-1.08 0l-4.25-4.5a.75.75 0 01.02-1.06z"
            />
        </svg>
    }
}

/// Three-line "menu" glyph while closed, "X" glyph while open.
#[component]
pub fn MobileNavIcon(open: Signal<bool>) -> impl IntoView {
    view! {
        <svg
            aria-hidden="true"
            class="h-3.5 w-3.5 overflow-visible stroke-slate-700"
            fill="none"
            stroke-width="2"
            stroke-linecap="round"
        >
            <path
                d="M0 1H14M0 7H14M0 13H14"
                data-glyph="menu"
                class=move || glyph_class(!open.get())
            />
            <path
                d="M2 2L12 12M12 2L2 12"
                data-glyph="close"
                class=move || glyph_class(open.get())
            />
        </svg>
    }
}

use leptos::prelude::*;

use crate::components::links::NavTarget;

#[component]
pub fn Container(children: Children) -> impl IntoView {
    view! {
        <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
            { children() }
        </div>
    }
}

#[component]
pub fn NavLink(target: NavTarget) -> impl IntoView {
    view! {
        <a
            href=target.href
            class="inline-block rounded-lg px-2 py-1 text-sm text-slate-700 hover:bg-slate-100 hover:text-slate-900"
        >
            { target.label }
        </a>
    }
}

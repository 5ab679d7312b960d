// ui/src/routes.rs
use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::pages::{contact::Contact, home::Home, team::Team};

#[component]
fn NotFound() -> impl IntoView {
    view! {
      <section class="py-16 text-center">
        <h1 class="text-3xl font-bold text-slate-900">"404 – not found"</h1>
        <a href="/#" class="mt-4 inline-block underline">"Back home"</a>
      </section>
    }
}

#[component]
pub fn RoutesMenu() -> impl IntoView {
    view! {
      <Routes fallback=NotFound>
        <Route path=path!("")            view=Home    />
        <Route path=path!("/team")       view=Team    />
        <Route path=path!("/contact")    view=Contact />
      </Routes>
    }
}

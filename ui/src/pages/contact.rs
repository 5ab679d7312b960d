use leptos::prelude::*;

use crate::components::links::SOCIAL_LINKS;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
      <section class="py-16">
        <h1 class="text-4xl font-bold tracking-tight text-slate-900 mb-6">"Contact"</h1>
        <p class="text-lg text-slate-700 mb-4">"Message us on any of these:"</p>
        <ul class="space-y-2">
          <For
            each=|| SOCIAL_LINKS.iter()
            key=|link| link.name
            children=|link| view! {
              <li>
                <a href=link.href target="_blank" rel="noopener noreferrer" class="underline hover:text-slate-900">
                  { link.name }
                </a>
              </li>
            }
          />
        </ul>
      </section>
    }
}

use leptos::prelude::*;

#[component]
pub fn Team() -> impl IntoView {
    view! {
      <section class="py-16">
        <h1 class="text-4xl font-bold tracking-tight text-slate-900 mb-6">"The Team"</h1>
        <p class="text-lg text-slate-700">"The people behind The Blueberries."</p>
      </section>
    }
}

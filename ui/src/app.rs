use leptos::*;
use leptos::prelude::ElementChild;
use leptos::prelude::ClassAttribute;
use crate::components::{Footer, Header};
use crate::routes::RoutesMenu;
use leptos_router::components::Router;

use leptos_meta::provide_meta_context;
use leptos_meta::Meta;
use leptos_meta::Title;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
      <Title text="The Blueberries"/>
      <Meta name="description" content="The Blueberries: songs, performances and the people behind the band."/>

      <Router>
        <div class="flex min-h-screen flex-col">
          <Header/>

          <main class="mx-auto w-full max-w-7xl flex-1 px-4 sm:px-6 lg:px-8">
            <RoutesMenu/>
          </main>

          <Footer/>
        </div>
      </Router>
    }
}

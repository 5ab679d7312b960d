use leptos::prelude::ElementChild;
use leptos::prelude::ClassAttribute;
use leptos::prelude::GlobalAttributes;
use leptos::prelude::For;
use leptos::component;
use leptos::IntoView;
use leptos::view;

use crate::components::icons::LOGO_SRC;

struct Faq {
    question: &'static str,
    answer: &'static str,
}

static FAQS: [Faq; 3] = [
    Faq {
        question: "Where can I hear you play?",
        answer: "Upcoming dates are listed under Performances.",
    },
    Faq {
        question: "Do you take bookings?",
        answer: "Yes, reach out through the Contact page.",
    },
    Faq {
        question: "Where can I follow the band?",
        answer: "Every profile we keep is in the Socials menu.",
    },
];

#[component]
fn Section(id: &'static str, title: &'static str, children: leptos::prelude::Children) -> impl IntoView {
    view! {
      <section id=id class="py-16 scroll-mt-16">
        <h2 class="text-3xl font-bold tracking-tight text-slate-900 mb-6">{ title }</h2>
        { children() }
      </section>
    }
}

#[component]
pub fn Home() -> impl IntoView {
    view! {
      <div class="py-20 text-center">
        <img src=LOGO_SRC alt="The Blueberries" class="mx-auto h-24"/>
        <h1 class="mt-8 text-5xl font-bold tracking-tight text-slate-900">"The Blueberries"</h1>
      </div>

      <Section id="songs" title="Songs">
        <p class="text-lg text-slate-700">"Recordings land on our YouTube channel first."</p>
      </Section>

      <Section id="performances" title="Performances">
        <p class="text-lg text-slate-700">"No dates announced yet."</p>
      </Section>

      <Section id="faq" title="FAQ">
        <dl class="space-y-6">
          <For
            each=|| FAQS.iter()
            key=|faq| faq.question
            children=|faq: &'static Faq| view! {
              <div>
                <dt class="font-semibold text-slate-900">{ faq.question }</dt>
                <dd class="mt-1 text-slate-700">{ faq.answer }</dd>
              </div>
            }
          />
        </dl>
      </Section>
    }
}

use leptos::logging::log;
use leptos::prelude::*;

use crate::components::disclosure::{
    DROPDOWN_TRANSITION, Disclosure, MENU_PANEL_TRANSITION, MenuEvent, MobileMenu, OVERLAY_TRANSITION,
    PanelTransition,
};
use crate::components::icons::{ChevronDownIcon, Logo, MobileNavIcon};
use crate::components::layout::{Container, NavLink};
use crate::components::links::{HOME_HREF, NavItem, NavTarget, PRIMARY_NAV, SOCIAL_LINKS, SocialLink};

/// Class set for one rendition of the Socials dropdown.
#[derive(Clone, Copy)]
pub struct SocialsStyle {
    /// `data-panel` marker of the dropdown panel
    pub panel_id: &'static str,
    pub wrapper: &'static str,
    pub trigger: &'static str,
    pub panel: &'static str,
    pub link: &'static str,
}

pub const DESKTOP_SOCIALS: SocialsStyle = SocialsStyle {
    panel_id: "socials",
    wrapper: "relative",
    trigger: "inline-block rounded-lg px-2 py-1 text-sm text-slate-700 hover:bg-slate-100 hover:text-slate-900",
    panel: "absolute text-center -left-8 top-full z-10 mt-3 w-40 rounded-xl bg-white p-2 shadow-lg ring-1 ring-gray-900/5",
    link: "block rounded-lg py-1 text-sm text-slate-700 hover:bg-slate-100 hover:text-slate-900",
};

pub const MOBILE_SOCIALS: SocialsStyle = SocialsStyle {
    panel_id: "mobile-socials",
    wrapper: "relative",
    trigger: "flex w-full p-2",
    panel: "absolute -left-8 top-full z-10 mt-3 w-56 rounded-xl bg-white p-2 shadow-lg ring-1 ring-gray-900/5",
    link: "block rounded-lg px-3 py-2",
};

const OVERLAY_CLASS: &str = "fixed inset-0 bg-slate-300/50";

const MOBILE_PANEL_CLASS: &str = "absolute inset-x-0 top-full mt-4 flex origin-top flex-col \
    rounded-2xl bg-white p-4 text-lg tracking-tight text-slate-900 shadow-xl ring-1 ring-slate-900/5";

/// Base classes plus the transition classes for `state`.
fn panel_class(base: &str, transition: PanelTransition, state: Disclosure) -> String {
    format!("{base} {}", transition.classes(state))
}

fn aria_hidden(state: Disclosure) -> &'static str {
    if state.is_open() { "false" } else { "true" }
}

/// Toggle handler for a standalone dropdown.
pub fn socials_toggle(state: RwSignal<Disclosure>) -> Callback<()> {
    Callback::new(move |_: ()| state.update(|d| *d = d.toggled()))
}

/// One callback per [`MenuEvent`], all writing to the same menu signal.
#[derive(Clone, Copy)]
pub struct MenuHandlers {
    pub toggle: Callback<()>,
    pub toggle_socials: Callback<()>,
    pub link_activated: Callback<()>,
    pub dismiss: Callback<()>,
}

impl MenuHandlers {
    pub fn new(menu: RwSignal<MobileMenu>) -> Self {
        let dispatch = move |event: MenuEvent| {
            menu.update(|m| *m = m.apply(event));
            if cfg!(debug_assertions) {
                log!("mobile menu {:?} -> {:?}", event, menu.get_untracked());
            }
        };

        Self {
            toggle: Callback::new(move |_: ()| dispatch(MenuEvent::Toggle)),
            toggle_socials: Callback::new(move |_: ()| dispatch(MenuEvent::ToggleSocials)),
            link_activated: Callback::new(move |_: ()| dispatch(MenuEvent::LinkActivated)),
            dismiss: Callback::new(move |_: ()| dispatch(MenuEvent::Dismiss)),
        }
    }
}

/// "Socials" trigger plus the panel listing every [`SocialLink`].
/// The panel stays mounted; its classes follow `open` so closing animates too.
#[component]
pub fn SocialsDisclosure(
    open: Signal<bool>,
    on_toggle: Callback<()>,
    style: SocialsStyle,
) -> impl IntoView {
    let state = move || Disclosure::from_open(open.get());

    view! {
        <div class=style.wrapper>
            <button
                type="button"
                class=style.trigger
                aria-expanded=move || state().aria_expanded()
                on:click=move |_| on_toggle.run(())
            >
                "Socials"
                <ChevronDownIcon/>
            </button>

            <div
                data-panel=style.panel_id
                data-state=move || state().data_state()
                aria-hidden=move || aria_hidden(state())
                class=move || panel_class(style.panel, DROPDOWN_TRANSITION, state())
            >
                <For
                    each=|| SOCIAL_LINKS.iter()
                    key=|link| link.name
                    children=move |link: &'static SocialLink| {
                        view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class=style.link
                            >
                                { link.name }
                            </a>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn MobileNavLink(target: NavTarget, on_activate: Callback<()>) -> impl IntoView {
    view! {
        <a
            href=target.href
            class="block w-full p-2"
            on:click=move |_| on_activate.run(())
        >
            { target.label }
        </a>
    }
}

/// Hamburger toggle with the slide-down panel for narrow viewports.
#[component]
pub fn MobileNavigation(menu: RwSignal<MobileMenu>) -> impl IntoView {
    let handlers = MenuHandlers::new(menu);
    let state = move || menu.get().menu;
    let is_open = move || menu.get().is_open();

    let panel_items = PRIMARY_NAV
        .iter()
        .map(|item| match item {
            NavItem::Page(target) => view! {
                <MobileNavLink target=*target on_activate=handlers.link_activated/>
            }
            .into_any(),
            NavItem::Socials => view! {
                <SocialsDisclosure
                    open=Signal::derive(move || menu.get().socials_open())
                    on_toggle=handlers.toggle_socials
                    style=MOBILE_SOCIALS
                />
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <div>
            <button
                type="button"
                class="relative z-10 flex h-8 w-8 items-center justify-center [&:not(:focus-visible)]:focus:outline-none"
                aria-label="Toggle Navigation"
                aria-expanded=move || state().aria_expanded()
                on:click=move |_| handlers.toggle.run(())
            >
                <MobileNavIcon open=Signal::derive(is_open)/>
            </button>

            <div
                data-panel="overlay"
                data-state=move || state().data_state()
                aria-hidden="true"
                class=move || panel_class(OVERLAY_CLASS, OVERLAY_TRANSITION, state())
                on:click=move |_| handlers.dismiss.run(())
            ></div>
            <div
                data-panel="menu"
                data-state=move || state().data_state()
                aria-hidden=move || aria_hidden(state())
                class=move || panel_class(MOBILE_PANEL_CLASS, MENU_PANEL_TRANSITION, state())
            >
                { panel_items }
            </div>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let socials = RwSignal::new(Disclosure::Closed);
    let menu = RwSignal::new(MobileMenu::default());

    let desktop_items = PRIMARY_NAV
        .iter()
        .map(|item| match item {
            NavItem::Page(target) => view! { <NavLink target=*target/> }.into_any(),
            NavItem::Socials => view! {
                <SocialsDisclosure
                    open=Signal::derive(move || socials.get().is_open())
                    on_toggle=socials_toggle(socials)
                    style=DESKTOP_SOCIALS
                />
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <header class="pt-10">
            <Container>
                <nav class="relative z-50 flex justify-between">
                    <div class="flex items-center md:gap-x-12">
                        <a href=HOME_HREF aria-label="Home">
                            <Logo class="h-10 w-auto"/>
                        </a>
                        <div class="hidden md:flex md:gap-x-6">
                            { desktop_items }
                        </div>
                    </div>
                    <div class="-mr-1 md:hidden">
                        <MobileNavigation menu/>
                    </div>
                </nav>
            </Container>
        </header>
    }
}

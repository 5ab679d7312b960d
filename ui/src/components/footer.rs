use leptos::prelude::*;

use crate::clock::use_clock;
use crate::components::icons::Logo;
use crate::components::layout::{Container, NavLink};
use crate::components::links::nav_targets;

pub fn copyright_line(year: i32) -> String {
    format!("Copyright © {year:04} The Blueberries. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    // read on every render, a session crossing New Year shows the new year
    let year = use_clock().current_year();

    view! {
        <footer class="bg-slate-50">
            <Container>
                <div class="py-16">
                    <Logo class="mx-auto h-10 w-auto"/>
                    <nav class="mt-10 text-sm" aria-label="quick links">
                        <div class="-my-1 flex justify-center gap-x-6">
                            { nav_targets().map(|target| view! { <NavLink target/> }).collect_view() }
                        </div>
                    </nav>
                </div>
                <div class="flex flex-col items-center border-t border-slate-400/10 py-10 sm:flex-row-reverse sm:justify-between">
                    <p class="mt-6 text-sm text-slate-500 sm:mt-0">{ copyright_line(year) }</p>
                </div>
            </Container>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SiteClock;
    use crate::components::header::Header;
    use crate::components::links::HOME_HREF;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn render_on(y: i32, m: u32, d: u32) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(SiteClock::fixed(NaiveDate::from_ymd_opt(y, m, d).unwrap()));
            view! { <Footer/> }.to_html()
        })
    }

    fn hrefs(html: &str) -> BTreeSet<String> {
        html.split("href=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn copyright_line_wording() {
        assert_eq!(
            copyright_line(2031),
            "Copyright © 2031 The Blueberries. All rights reserved."
        );
    }

    #[test]
    fn copyright_follows_the_clock_year() {
        for (y, m, d, expected) in [(2031, 1, 1, 2031), (2031, 12, 31, 2031), (2032, 1, 1, 2032)] {
            let html = render_on(y, m, d);
            assert!(
                html.contains(&copyright_line(expected)),
                "{y}-{m}-{d} did not render {expected}"
            );
        }
    }

    #[test]
    fn footer_without_a_provided_clock_uses_the_system_year() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Footer/> }.to_html());
        let year = SiteClock::default().current_year();
        assert!(html.contains(&copyright_line(year)));
    }

    #[test]
    fn footer_links_match_the_desktop_header() {
        let footer = hrefs(&render_on(2031, 6, 1));

        let owner = Owner::new();
        let mut header = owner.with(|| hrefs(&view! { <Header/> }.to_html()));
        header.remove(HOME_HREF);
        // hidden dropdown panels stay mounted; keep in-site destinations only
        header.retain(|href| href.starts_with('/'));

        let expected: BTreeSet<_> = nav_targets().map(|t| t.href.to_owned()).collect();
        assert_eq!(footer, expected);
        assert_eq!(header, footer);
    }

    #[test]
    fn footer_has_no_external_links() {
        let html = render_on(2031, 6, 1);
        assert!(!html.contains("target=\"_blank\""));
        assert!(html.contains("aria-label=\"quick links\""));
    }
}

//! Fixed link tables shared by the header and the footer.

/// An in-site destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTarget {
    pub label: &'static str,
    pub href: &'static str,
}

/// An external profile, always opened in a new browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    /// display label, doubles as the `<For>` key
    pub name: &'static str,
    pub href: &'static str,
}

/// One slot in the primary navigation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Page(NavTarget),
    Socials,
}

pub const HOME_HREF: &str = "/#";

pub const SONGS: NavTarget = NavTarget { label: "Songs", href: "/#songs" };
pub const PERFORMANCES: NavTarget = NavTarget { label: "Performances", href: "/#performances" };
pub const FAQ: NavTarget = NavTarget { label: "FAQ", href: "/#faq" };
pub const TEAM: NavTarget = NavTarget { label: "The Team", href: "/team" };
pub const CONTACT: NavTarget = NavTarget { label: "Contact", href: "/contact" };

/// Header order. The footer renders the same row without the Socials slot.
pub static PRIMARY_NAV: [NavItem; 6] = [
    NavItem::Page(SONGS),
    NavItem::Page(PERFORMANCES),
    NavItem::Page(FAQ),
    NavItem::Page(TEAM),
    NavItem::Socials,
    NavItem::Page(CONTACT),
];

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        name: "Facebook",
        href: "https://www.facebook.com/people/Blueberries-Music/100088449282150/",
    },
    SocialLink {
        name: "YouTube",
        href: "https://www.youtube.com/@blueberries_music",
    },
    SocialLink {
        name: "Instagram",
        href: "https://www.instagram.com/blueberries.music/",
    },
    SocialLink {
        name: "TikTok",
        href: "https://www.tiktok.com/@blueberriesmusic",
    },
];

/// Plain page links in display order, Socials skipped.
pub fn nav_targets() -> impl Iterator<Item = NavTarget> {
    PRIMARY_NAV.iter().filter_map(|item| match item {
        NavItem::Page(target) => Some(*target),
        NavItem::Socials => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_targets_are_the_five_site_destinations_in_order() {
        let hrefs: Vec<_> = nav_targets().map(|t| t.href).collect();
        assert_eq!(
            hrefs,
            ["/#songs", "/#performances", "/#faq", "/team", "/contact"]
        );
    }

    #[test]
    fn socials_slot_sits_between_team_and_contact() {
        let pos = PRIMARY_NAV
            .iter()
            .position(|item| *item == NavItem::Socials)
            .unwrap();
        assert_eq!(PRIMARY_NAV[pos - 1], NavItem::Page(TEAM));
        assert_eq!(PRIMARY_NAV[pos + 1], NavItem::Page(CONTACT));
        assert_eq!(
            PRIMARY_NAV.iter().filter(|i| **i == NavItem::Socials).count(),
            1
        );
    }

    #[test]
    fn nav_hrefs_are_relative_site_paths() {
        for target in nav_targets() {
            assert!(!target.label.is_empty());
            assert!(target.href.starts_with('/'), "{}", target.href);
        }
        assert!(HOME_HREF.starts_with('/'));
    }

    #[test]
    fn social_links_keep_their_order_and_unique_names() {
        let names: Vec<_> = SOCIAL_LINKS.iter().map(|s| s.name).collect();
        assert_eq!(names, ["Facebook", "YouTube", "Instagram", "TikTok"]);

        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn social_hrefs_are_absolute_https() {
        for link in &SOCIAL_LINKS {
            let rest = link.href.strip_prefix("https://").unwrap_or_default();
            assert!(!rest.is_empty(), "{} has a bad href", link.name);
            assert!(!rest.contains(' '));
        }
    }
}

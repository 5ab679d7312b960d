//! Open/closed state for the dropdowns and the mobile menu.

/// A trigger + panel pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Closed => Disclosure::Open,
            Disclosure::Open => Disclosure::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Disclosure::Open
    }

    pub fn from_open(open: bool) -> Self {
        if open { Disclosure::Open } else { Disclosure::Closed }
    }

    /// Value for the trigger's `aria-expanded`.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }

    /// Value for the panel's `data-state`.
    pub fn data_state(self) -> &'static str {
        match self {
            Disclosure::Open => "open",
            Disclosure::Closed => "closed",
        }
    }
}

/// Enter/leave timings plus the resting classes of each state for a panel
/// that stays mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTransition {
    pub enter: &'static str,
    pub leave: &'static str,
    pub shown: &'static str,
    pub hidden: &'static str,
}

/// Closed panels keep their box but can't be seen, focused or clicked.
pub const INERT: &str = "invisible pointer-events-none";

impl PanelTransition {
    pub fn classes(&self, state: Disclosure) -> String {
        match state {
            Disclosure::Open => format!("transition {} {}", self.enter, self.shown),
            Disclosure::Closed => format!("transition {} {} {INERT}", self.leave, self.hidden),
        }
    }
}

pub const DROPDOWN_TRANSITION: PanelTransition = PanelTransition {
    enter: "ease-out duration-200",
    leave: "ease-in duration-150",
    shown: "opacity-100 translate-y-0",
    hidden: "opacity-0 translate-y-1",
};

pub const OVERLAY_TRANSITION: PanelTransition = PanelTransition {
    enter: "ease-out duration-150",
    leave: "ease-in duration-150",
    shown: "opacity-100",
    hidden: "opacity-0",
};

pub const MENU_PANEL_TRANSITION: PanelTransition = PanelTransition {
    enter: "ease-out duration-150",
    leave: "ease-in duration-100",
    shown: "opacity-100 scale-100",
    hidden: "opacity-0 scale-95",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// the hamburger / X button
    Toggle,
    /// the nested Socials trigger inside the panel
    ToggleSocials,
    /// any page link inside the panel
    LinkActivated,
    /// click on the backdrop
    Dismiss,
}

/// Mobile menu with its nested Socials dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    pub menu: Disclosure,
    pub socials: Disclosure,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn socials_open(&self) -> bool {
        self.menu.is_open() && self.socials.is_open()
    }

    pub fn apply(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::Toggle if self.menu.is_open() => Self::default(),
            MenuEvent::Toggle => Self {
                menu: Disclosure::Open,
                socials: Disclosure::Closed,
            },
            MenuEvent::ToggleSocials if self.menu.is_open() => Self {
                socials: self.socials.toggled(),
                ..self
            },
            MenuEvent::ToggleSocials => self,
            MenuEvent::LinkActivated | MenuEvent::Dismiss => Self::default(),
        }
    }
}

/// Classes for one of the two glyph paths in the mobile toggle.
/// Both paths stay mounted so the swap can animate.
pub fn glyph_class(visible: bool) -> &'static str {
    if visible {
        "origin-center transition"
    } else {
        "origin-center transition scale-90 opacity-0"
    }
}

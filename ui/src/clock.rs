use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};
use leptos::prelude::use_context;

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Viewer's local time zone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Clock handed to components through the Leptos context.
#[derive(Clone)]
pub struct SiteClock(Arc<dyn Clock>);

impl SiteClock {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self(Arc::new(clock))
    }

    pub fn fixed(date: NaiveDate) -> Self {
        Self::new(FixedClock(date))
    }

    pub fn current_year(&self) -> i32 {
        self.0.today().year()
    }
}

impl Default for SiteClock {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

/// Clock from context, or the system clock when none was provided.
pub fn use_clock() -> SiteClock {
    use_context::<SiteClock>().unwrap_or_default()
}

#[cfg(feature = "web")]
use leptos::*;
#[cfg(feature = "web")]
use leptos::logging::log;
#[cfg(feature = "web")]
use mount::mount_to_body;
#[cfg(feature = "web")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "web")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    log!("mounting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    mount_to_body(|| view! { <App/> });
}

pub mod app;
pub mod clock;
pub mod components;
pub mod pages;
pub mod routes;

pub use crate::app::App;

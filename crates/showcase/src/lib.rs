//! Browser showcase rendering every widget under theme defaults loaded from `theme.json`.

mod sections;
mod web_app;

pub use sections::{section_title, SECTIONS};
pub use web_app::{load_theme, ShowcaseApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <ShowcaseApp /> })
}

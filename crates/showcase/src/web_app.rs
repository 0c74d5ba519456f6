use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use ui_widgets::prelude::*;

use crate::sections::{render_section, section_title, SECTIONS};

const THEME_JSON: &str = include_str!("../theme.json");

/// Parses theme defaults, falling back to the widget defaults when the document is invalid.
pub fn load_theme(raw: &str) -> ThemeDefaults {
    match ThemeDefaults::from_json(raw) {
        Ok(theme) => {
            if let Err(err) = theme.validate_strict() {
                logging::debug_warn!("theme defaults keep a raw class: {err}");
            }
            theme
        }
        Err(err) => {
            logging::warn!("invalid theme defaults, using widget defaults: {err}");
            ThemeDefaults::default()
        }
    }
}

#[component]
pub fn ShowcaseApp() -> impl IntoView {
    provide_meta_context();
    let theme = load_theme(THEME_JSON);

    view! {
        <Title text="Widget showcase" />
        <Meta name="description" content="Every styled widget rendered with the bundled theme defaults." />

        <ThemeProvider theme=theme>
            <Router>
                <main class="mx-auto flex max-w-5xl flex-col gap-12 p-6">
                    <SectionNav />
                    <Routes>
                        <Route path="" view=AllSections />
                        <Route path="/widgets/:slug" view=SectionRoute />
                    </Routes>
                </main>
            </Router>
        </ThemeProvider>
    }
}

#[component]
fn SectionNav() -> impl IntoView {
    view! {
        <nav class="flex flex-wrap gap-3 text-sm" aria-label="Widgets">
            <A href="/">"All"</A>
            {SECTIONS
                .iter()
                .map(|(slug, title)| view! { <A href=format!("/widgets/{slug}")>{*title}</A> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn AllSections() -> impl IntoView {
    SECTIONS
        .iter()
        .map(|(slug, title)| {
            view! {
                <section id=*slug class="flex flex-col gap-4">
                    <h2 class="text-xl font-semibold">{*title}</h2>
                    {render_section(slug)}
                </section>
            }
        })
        .collect_view()
}

#[component]
fn SectionRoute() -> impl IntoView {
    let params = use_params_map();
    let slug = move || {
        params
            .with(|map| map.get("slug").cloned())
            .unwrap_or_default()
    };

    move || {
        let slug = slug();
        match section_title(&slug) {
            Some(title) => view! {
                <section class="flex flex-col gap-4">
                    <h1 class="text-2xl font-semibold">{title}</h1>
                    {render_section(&slug)}
                </section>
            }
            .into_view(),
            None => {
                logging::warn!("no showcase section named `{slug}`");
                view! {
                    <section class="flex flex-col gap-2">
                        <h1 class="text-2xl font-semibold">"Not found"</h1>
                        <p>{format!("No widget named `{slug}`.")}</p>
                    </section>
                }
                .into_view()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ui_widgets::prelude::{Color, FontWeight, Rounded};

    use super::*;

    #[test]
    fn bundled_theme_parses() {
        let theme = load_theme(THEME_JSON);
        assert_eq!(theme.color, Some(Color::Primary));
        assert_eq!(theme.rounded, Some(Rounded::Large));
        assert_eq!(theme.font_weight, Some(FontWeight::Medium));
        assert_eq!(theme.size, None);
    }

    #[test]
    fn malformed_theme_falls_back_to_defaults() {
        assert_eq!(load_theme("{ \"color\": "), ThemeDefaults::default());
        assert_eq!(load_theme("{ \"colour\": \"primary\" }"), ThemeDefaults::default());
    }

    #[test]
    fn custom_theme_values_are_kept() {
        let theme = load_theme(r#"{ "rounded": "rounded-[10px]" }"#);
        assert_eq!(theme.rounded, Some(Rounded::from("rounded-[10px]")));
    }
}

//! Class helpers and theme context shared by every widget.

use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::*;
use ui_tokens::{resolve, DesignToken, ThemeDefaults};

pub(crate) fn merge_layout_class(base: String, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base,
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Appends `class` to `base` while `flag` holds.
pub(crate) fn toggle_class(base: &str, flag: bool, class: &str) -> String {
    if flag {
        format!("{base} {class}")
    } else {
        base.to_string()
    }
}

/// Unique element id for widgets that need one to link labels and controls.
pub(crate) fn next_id(prefix: &str) -> String {
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    format!("{prefix}-{}", NEXT.fetch_add(1, Ordering::Relaxed))
}

/// Resolves a widget attribute against the theme and logs values outside the design scale.
pub(crate) fn pick<T: DesignToken>(prop: Option<T>, theme: Option<&T>, fallback: T) -> T {
    let token = resolve(prop, theme, fallback);
    if token.is_custom() {
        logging::debug_warn!(
            "{} `{}` is not on the design scale; emitting it as a raw class",
            T::KIND,
            token.token()
        );
    }
    token
}

#[component]
/// Provides theme-wide attribute defaults to every widget rendered inside.
pub fn ThemeProvider(
    /// Defaults applied where a widget attribute is not set explicitly.
    #[prop(optional)]
    theme: ThemeDefaults,
    children: Children,
) -> impl IntoView {
    provide_context(theme);
    children()
}

/// Returns the nearest [`ThemeDefaults`], or empty defaults outside a [`ThemeProvider`].
pub fn use_theme() -> ThemeDefaults {
    use_context::<ThemeDefaults>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ui_tokens::Size;

    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("flex".to_string(), None), "flex");
        assert_eq!(merge_layout_class("flex".to_string(), Some("")), "flex");
        assert_eq!(
            merge_layout_class("flex".to_string(), Some("mt-4")),
            "flex mt-4"
        );
    }

    #[test]
    fn toggle_class_follows_flag() {
        assert_eq!(toggle_class("grid", true, "active"), "grid active");
        assert_eq!(toggle_class("grid", false, "active"), "grid");
    }

    #[test]
    fn generated_ids_are_unique() {
        let first = next_id("field");
        let second = next_id("field");
        assert!(first.starts_with("field-"));
        assert_ne!(first, second);
    }

    #[test]
    fn pick_passes_custom_values_through() {
        assert_eq!(
            pick(Some(Size::from("h-[42px]")), None, Size::Medium),
            Size::Custom("h-[42px]".to_string())
        );
        assert_eq!(pick(None, Some(&Size::Large), Size::Medium), Size::Large);
    }
}

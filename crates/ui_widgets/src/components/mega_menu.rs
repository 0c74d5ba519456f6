use wasm_bindgen::JsCast;

use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Width of the dropdown panel.
pub enum MenuWidth {
    /// Full width of the positioning container.
    #[default]
    Full,
    /// Half width from the `md` breakpoint.
    Half,
    /// Capped at `max-w-6xl`.
    ExtraLarge,
    /// Capped at `max-w-4xl`.
    Large,
    /// Capped at `max-w-2xl`.
    Medium,
    /// Capped at `max-w-md`.
    Small,
}

impl MenuWidth {
    fn token(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Half => "half",
            Self::ExtraLarge => "extra_large",
            Self::Large => "large",
            Self::Medium => "medium",
            Self::Small => "small",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Full => "w-full",
            Self::Half => "w-full md:w-1/2",
            Self::ExtraLarge => "w-full max-w-6xl",
            Self::Large => "w-full max-w-4xl",
            Self::Medium => "w-full max-w-2xl",
            Self::Small => "w-full max-w-md",
        }
    }
}

fn menu_grid(cols: u8) -> &'static str {
    match cols {
        0 | 1 => "grid-cols-1",
        2 => "grid-cols-1 md:grid-cols-2",
        3 => "grid-cols-1 md:grid-cols-3",
        _ => "grid-cols-1 md:grid-cols-2 lg:grid-cols-4",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved style attributes of a mega menu.
pub struct MegaMenuStyle {
    /// Surface treatment.
    pub variant: Variant,
    /// Palette color.
    pub color: Color,
    /// Corner radius.
    pub rounded: Rounded,
    /// Inner padding.
    pub padding: Scale,
    /// Gap between grid cells.
    pub space: Scale,
    /// Panel width cap.
    pub width: MenuWidth,
    /// Grid columns from 1 to 4.
    pub grid_cols: u8,
}

impl Default for MegaMenuStyle {
    fn default() -> Self {
        Self {
            variant: Variant::Default,
            color: Color::Natural,
            rounded: Rounded::Small,
            padding: Scale::Medium,
            space: Scale::Small,
            width: MenuWidth::Full,
            grid_cols: 3,
        }
    }
}

impl MegaMenuStyle {
    /// Class string for the trigger button.
    pub fn trigger_classes(&self, open: bool) -> String {
        ClassList::new()
            .with("inline-flex items-center gap-1 px-3 py-2 text-sm font-medium transition-colors hover:opacity-80 focus-visible:outline-none focus-visible:ring-2")
            .with(rounded_class(&self.rounded))
            .with_if(open, "opacity-80")
            .build()
    }

    /// Class string for the dropdown panel in the given open state.
    pub fn panel_classes(&self, open: bool) -> String {
        ClassList::new()
            .with("absolute start-0 top-full z-30 mt-2 border shadow-lg transition-all duration-200")
            .with(self.width.classes())
            .with(color_variant(&self.variant, &self.color))
            .with(rounded_class(&self.rounded))
            .with(padding_class(&self.padding))
            .with(reveal_class(open))
            .build()
    }

    /// Class string for the content grid inside the panel.
    pub fn grid_classes(&self) -> String {
        ClassList::new()
            .with("grid")
            .with(menu_grid(self.grid_cols.clamp(1, 4)))
            .with(space_class(&self.space))
            .build()
    }
}

#[component]
/// Navigation trigger revealing a wide multi-column panel.
///
/// The panel closes on a click outside the menu and on `Escape`.
pub fn MegaMenu(
    #[prop(into)] trigger_label: String,
    #[prop(optional, into)] variant: Option<Variant>,
    #[prop(optional, into)] color: Option<Color>,
    #[prop(optional, into)] rounded: Option<Rounded>,
    #[prop(optional, into)] padding: Option<Scale>,
    #[prop(optional, into)] space: Option<Scale>,
    #[prop(optional)] width: MenuWidth,
    #[prop(default = 3)] grid_cols: u8,
    /// Open on click; when `false` the panel opens on hover.
    #[prop(default = true)]
    clickable: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let defaults = MegaMenuStyle::default();
    let style = store_value(MegaMenuStyle {
        variant: pick(variant, theme.variant.as_ref(), defaults.variant),
        color: pick(color, theme.color.as_ref(), defaults.color),
        rounded: pick(rounded, theme.rounded.as_ref(), defaults.rounded),
        padding: pick(padding, theme.padding.as_ref(), defaults.padding),
        space: pick(space, theme.space.as_ref(), defaults.space),
        width,
        grid_cols,
    });

    let open = create_rw_signal(false);
    let root = create_node_ref::<html::Div>();
    let panel_id = next_id("mega-menu");

    let away_click = window_event_listener(ev::mousedown, move |ev| {
        if !open.get_untracked() {
            return;
        }
        let Some(root) = root.get_untracked() else {
            return;
        };
        let inside = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .map(|target| root.contains(Some(&target)))
            .unwrap_or(false);
        if !inside {
            open.set(false);
        }
    });
    on_cleanup(move || away_click.remove());

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            open.set(false);
        }
    });
    on_cleanup(move || escape.remove());

    let chevron_class = Signal::derive(move || {
        if open.get() {
            "rotate-180 transition-transform duration-200".to_string()
        } else {
            "transition-transform duration-200".to_string()
        }
    });

    view! {
        <div
            node_ref=root
            class=merge_layout_class("relative".to_string(), layout_class)
            data-ui-primitive="true"
            data-ui-kind="mega-menu"
            data-ui-width=width.token()
            data-ui-state=move || if open.get() { "open" } else { "closed" }
            on:mouseenter=move |_| {
                if !clickable {
                    open.set(true);
                }
            }
            on:mouseleave=move |_| {
                if !clickable {
                    open.set(false);
                }
            }
        >
            <button
                type="button"
                class=move || style.with_value(|style| style.trigger_classes(open.get()))
                aria-haspopup="true"
                aria-controls=panel_id.clone()
                aria-expanded=move || bool_token(open.get())
                on:click=move |_| {
                    if clickable {
                        open.update(|open| *open = !*open);
                    }
                }
            >
                {trigger_label}
                <Icon icon=IconName::ChevronDown size=IconSize::Sm state_class=chevron_class />
            </button>
            <div
                id=panel_id
                class=move || style.with_value(|style| style.panel_classes(open.get()))
                aria-hidden=move || bool_token(!open.get())
                data-ui-slot="panel"
            >
                <div class=style.with_value(MegaMenuStyle::grid_classes)>{children()}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn panel_visibility_follows_open_state() {
        let style = MegaMenuStyle::default();
        assert!(style.panel_classes(false).contains("invisible"));
        let open = style.panel_classes(true);
        assert!(open.contains("visible opacity-100"));
        assert!(open.contains("w-full"));
        assert!(open.contains("p-3"));
    }

    #[test]
    fn grid_columns_are_clamped() {
        let style = MegaMenuStyle {
            grid_cols: 7,
            ..MegaMenuStyle::default()
        };
        assert_eq!(style.grid_classes(), "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-2");
        let single = MegaMenuStyle {
            grid_cols: 0,
            ..MegaMenuStyle::default()
        };
        assert_eq!(single.grid_classes(), "grid grid-cols-1 gap-2");
    }

    #[test]
    fn width_caps_panel() {
        let style = MegaMenuStyle {
            width: MenuWidth::Medium,
            ..MegaMenuStyle::default()
        };
        assert!(style.panel_classes(true).contains("max-w-2xl"));
    }
}

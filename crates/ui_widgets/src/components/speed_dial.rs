use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Viewport corner a speed dial floats in.
pub enum SpeedDialPosition {
    /// Bottom, trailing side.
    #[default]
    BottomEnd,
    /// Bottom, leading side.
    BottomStart,
    /// Top, trailing side.
    TopEnd,
    /// Top, leading side.
    TopStart,
}

impl SpeedDialPosition {
    fn token(self) -> &'static str {
        match self {
            Self::BottomEnd => "bottom-end",
            Self::BottomStart => "bottom-start",
            Self::TopEnd => "top-end",
            Self::TopStart => "top-start",
        }
    }

    fn anchor(self) -> &'static str {
        match self {
            Self::BottomEnd => "bottom-6 end-6 flex-col",
            Self::BottomStart => "bottom-6 start-6 flex-col",
            Self::TopEnd => "top-6 end-6 flex-col-reverse",
            Self::TopStart => "top-6 start-6 flex-col-reverse",
        }
    }

    fn is_bottom(self) -> bool {
        matches!(self, Self::BottomEnd | Self::BottomStart)
    }

    /// Side the action tooltips open towards, away from the nearest edge.
    fn tooltip_side(self) -> &'static str {
        match self {
            Self::BottomEnd | Self::TopEnd => "end-full me-3",
            Self::BottomStart | Self::TopStart => "start-full ms-3",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One action revealed by a [`SpeedDial`].
pub struct SpeedDialItem {
    /// Action glyph.
    pub icon: IconName,
    /// Accessible name and tooltip text.
    pub label: String,
    /// Navigates instead of firing `on_select` when set.
    pub href: Option<String>,
}

impl SpeedDialItem {
    /// Builds a callback-driven action.
    pub fn new(icon: IconName, label: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
            href: None,
        }
    }

    /// Turns the action into a link.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

fn dial_size(size: &Size) -> &str {
    match size {
        Size::ExtraSmall => "size-9",
        Size::Small => "size-11",
        Size::Medium => "size-14",
        Size::Large => "size-16",
        Size::ExtraLarge => "size-20",
        Size::Custom(raw) => raw.as_str(),
    }
}

fn action_size(size: &Size) -> &str {
    match size {
        Size::ExtraSmall => "size-7",
        Size::Small => "size-9",
        Size::Medium => "size-11",
        Size::Large => "size-12",
        Size::ExtraLarge => "size-14",
        Size::Custom(raw) => raw.as_str(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved style attributes of a speed dial.
pub struct SpeedDialStyle {
    /// Viewport corner and fan-out direction.
    pub position: SpeedDialPosition,
    /// Surface treatment of the trigger.
    pub variant: Variant,
    /// Palette color.
    pub color: Color,
    /// Trigger and action size.
    pub size: Size,
    /// Corner radius.
    pub rounded: Rounded,
    /// Gap between revealed actions.
    pub space: Scale,
}

impl Default for SpeedDialStyle {
    fn default() -> Self {
        Self {
            position: SpeedDialPosition::BottomEnd,
            variant: Variant::Default,
            color: Color::Natural,
            size: Size::Medium,
            rounded: Rounded::Full,
            space: Scale::ExtraSmall,
        }
    }
}

impl SpeedDialStyle {
    /// Class string for the floating container.
    pub fn container_classes(&self) -> String {
        ClassList::new()
            .with("group fixed z-40 flex items-center")
            .with(self.position.anchor())
            .build()
    }

    /// Class string for the action list in the given open state.
    pub fn menu_classes(&self, open: bool) -> String {
        ClassList::new()
            .with("flex flex-col items-center transition-all duration-200")
            .with(if self.position.is_bottom() { "mb-3" } else { "mt-3" })
            .with(space_class(&self.space))
            .with(reveal_class(open))
            .build()
    }

    /// Class string for the main trigger.
    pub fn trigger_classes(&self) -> String {
        ClassList::new()
            .with("inline-flex items-center justify-center shadow-lg transition-colors focus-visible:outline-none focus-visible:ring-2")
            .with(color_variant(&self.variant, &self.color))
            .with(rounded_class(&self.rounded))
            .with(dial_size(&self.size))
            .build()
    }

    /// Class string for each action button.
    pub fn action_classes(&self) -> String {
        ClassList::new()
            .with("relative inline-flex items-center justify-center border shadow-md transition-colors")
            .with(color_variant(&Variant::Base, &self.color))
            .with(rounded_class(&self.rounded))
            .with(action_size(&self.size))
            .build()
    }

    fn tooltip_classes(&self) -> String {
        format!(
            "pointer-events-none absolute top-1/2 -translate-y-1/2 whitespace-nowrap rounded-md bg-[#282828] px-2 py-1 text-xs text-white opacity-0 transition-opacity group-hover/action:opacity-100 {}",
            self.position.tooltip_side()
        )
    }
}

#[component]
/// Floating action button that fans out a list of secondary actions.
pub fn SpeedDial(
    #[prop(into)] items: Vec<SpeedDialItem>,
    #[prop(optional)] action_position: SpeedDialPosition,
    #[prop(optional, into)] variant: Option<Variant>,
    #[prop(optional, into)] color: Option<Color>,
    #[prop(optional, into)] size: Option<Size>,
    #[prop(optional, into)] rounded: Option<Rounded>,
    #[prop(optional, into)] space: Option<Scale>,
    /// Trigger glyph.
    #[prop(default = IconName::Plus)]
    icon: IconName,
    /// Open on click; when `false` the dial opens on hover.
    #[prop(default = true)]
    clickable: bool,
    #[prop(default = "Open actions".to_string(), into)] trigger_label: String,
    /// Receives the index of an action without `href`.
    #[prop(optional)]
    on_select: Option<Callback<usize>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    let defaults = SpeedDialStyle::default();
    let style = store_value(SpeedDialStyle {
        position: action_position,
        variant: pick(variant, theme.variant.as_ref(), defaults.variant),
        color: pick(color, theme.color.as_ref(), defaults.color),
        size: pick(size, theme.size.as_ref(), defaults.size),
        rounded: pick(rounded, None, defaults.rounded),
        space: pick(space, None, defaults.space),
    });

    let open = create_rw_signal(false);
    let menu_id = next_id("speed-dial");
    let glyph_size = style.with_value(|style| icon_size(&style.size));
    let trigger_icon_class = Signal::derive(move || {
        if open.get() {
            "rotate-45 transition-transform duration-200".to_string()
        } else {
            "transition-transform duration-200".to_string()
        }
    });

    let action_class = style.with_value(SpeedDialStyle::action_classes);
    let tooltip_class = style.with_value(SpeedDialStyle::tooltip_classes);
    let actions = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let tooltip = view! { <span class=tooltip_class.clone() role="tooltip">{item.label.clone()}</span> };
            let glyph = view! { <Icon icon=item.icon size=glyph_size /> };
            let control = match item.href {
                Some(href) => view! {
                    <a
                        href=href
                        class=action_class.clone()
                        aria-label=item.label.clone()
                        role="menuitem"
                    >
                        {glyph}
                        {tooltip}
                    </a>
                }
                .into_view(),
                None => view! {
                    <button
                        type="button"
                        class=action_class.clone()
                        aria-label=item.label.clone()
                        role="menuitem"
                        on:click=move |_| {
                            open.set(false);
                            if let Some(on_select) = on_select.as_ref() {
                                on_select.call(index);
                            }
                        }
                    >
                        {glyph}
                        {tooltip}
                    </button>
                }
                .into_view(),
            };
            view! { <li class="group/action">{control}</li> }
        })
        .collect_view();

    view! {
        <div
            class=merge_layout_class(style.with_value(SpeedDialStyle::container_classes), layout_class)
            data-ui-primitive="true"
            data-ui-kind="speed-dial"
            data-ui-position=action_position.token()
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
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    open.set(false);
                }
            }
        >
            <ul
                id=menu_id.clone()
                role="menu"
                class=move || style.with_value(|style| style.menu_classes(open.get()))
                aria-hidden=move || bool_token(!open.get())
            >
                {actions}
            </ul>
            <button
                type="button"
                class=style.with_value(SpeedDialStyle::trigger_classes)
                aria-label=trigger_label
                aria-controls=menu_id
                aria-haspopup="menu"
                aria-expanded=move || bool_token(open.get())
                on:click=move |_| {
                    if clickable {
                        open.update(|open| *open = !*open);
                    }
                }
            >
                <Icon icon size=IconSize::Lg state_class=trigger_icon_class />
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn menu_visibility_follows_open_state() {
        let style = SpeedDialStyle::default();
        let closed = style.menu_classes(false);
        assert!(closed.contains("invisible"));
        assert!(closed.contains("mb-3"));
        let open = style.menu_classes(true);
        assert!(open.contains("visible opacity-100"));
        assert!(!open.contains("invisible"));
    }

    #[test]
    fn top_positions_reverse_the_stack() {
        let style = SpeedDialStyle {
            position: SpeedDialPosition::TopStart,
            ..SpeedDialStyle::default()
        };
        assert!(style.container_classes().contains("top-6 start-6 flex-col-reverse"));
        assert!(style.menu_classes(true).contains("mt-3"));
        assert!(style.tooltip_classes().ends_with("start-full ms-3"));
    }

    #[test]
    fn trigger_is_round_and_sized() {
        let classes = SpeedDialStyle::default().trigger_classes();
        assert!(classes.contains("rounded-full"));
        assert!(classes.ends_with("size-14"));
    }

    #[test]
    fn link_items_carry_href() {
        let item = SpeedDialItem::new(IconName::Share, "Share").with_href("#share");
        assert_eq!(item.href.as_deref(), Some("#share"));
    }
}

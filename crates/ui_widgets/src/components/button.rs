use super::*;

const BUTTON_BASE: &str = "inline-flex items-center justify-center whitespace-nowrap transition-colors duration-150 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50";

fn button_size(size: &Size) -> &str {
    match size {
        Size::ExtraSmall => "h-7 px-2.5 gap-1 text-xs",
        Size::Small => "h-8 px-3 gap-1.5 text-sm",
        Size::Medium => "h-10 px-4 gap-2 text-sm",
        Size::Large => "h-11 px-5 gap-2 text-base",
        Size::ExtraLarge => "h-12 px-6 gap-2.5 text-lg",
        Size::Custom(raw) => raw.as_str(),
    }
}

fn circle_size(size: &Size) -> &str {
    match size {
        Size::ExtraSmall => "size-7 text-xs",
        Size::Small => "size-8 text-sm",
        Size::Medium => "size-10 text-sm",
        Size::Large => "size-11 text-base",
        Size::ExtraLarge => "size-12 text-lg",
        Size::Custom(raw) => raw.as_str(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved style attributes of a button.
pub struct ButtonStyle {
    /// Style family.
    pub variant: Variant,
    /// Color family.
    pub color: Color,
    /// Height, padding, and text size step.
    pub size: Size,
    /// Corner radius. Ignored for circle buttons.
    pub rounded: Rounded,
    /// Border width.
    pub border: Scale,
    /// Label weight.
    pub font_weight: FontWeight,
    /// Square icon-only button with a full radius.
    pub circle: bool,
    /// Stretch to the container width.
    pub full_width: bool,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            variant: Variant::Default,
            color: Color::Natural,
            size: Size::Medium,
            rounded: Rounded::Large,
            border: Scale::ExtraSmall,
            font_weight: FontWeight::Normal,
            circle: false,
            full_width: false,
        }
    }
}

impl ButtonStyle {
    /// Class string for the button element.
    pub fn classes(&self) -> String {
        let (rounded, size) = if self.circle {
            ("rounded-full", circle_size(&self.size))
        } else {
            (rounded_class(&self.rounded), button_size(&self.size))
        };
        ClassList::new()
            .with(BUTTON_BASE)
            .with(color_variant(&self.variant, &self.color))
            .with(border_class(&self.border))
            .with(rounded)
            .with(size)
            .with(font_weight_class(&self.font_weight))
            .with_if(self.full_width, "w-full")
            .build()
    }

    fn from_props(
        variant: Option<Variant>,
        color: Option<Color>,
        size: Option<Size>,
        rounded: Option<Rounded>,
        border: Option<Scale>,
        font_weight: Option<FontWeight>,
    ) -> Self {
        let theme = use_theme();
        let defaults = Self::default();
        Self {
            variant: pick(variant, theme.variant.as_ref(), defaults.variant),
            color: pick(color, theme.color.as_ref(), defaults.color),
            size: pick(size, theme.size.as_ref(), defaults.size),
            rounded: pick(rounded, theme.rounded.as_ref(), defaults.rounded),
            border: pick(border, theme.border.as_ref(), defaults.border),
            font_weight: pick(font_weight, theme.font_weight.as_ref(), defaults.font_weight),
            ..defaults
        }
    }
}

#[component]
/// Action button with color-family styling, optional icons, and a circle shape.
pub fn Button(
    #[prop(optional, into)] variant: Option<Variant>,
    #[prop(optional, into)] color: Option<Color>,
    #[prop(optional, into)] size: Option<Size>,
    #[prop(optional, into)] rounded: Option<Rounded>,
    #[prop(optional, into)] border: Option<Scale>,
    #[prop(optional, into)] font_weight: Option<FontWeight>,
    /// Leading icon.
    #[prop(optional)]
    icon: Option<IconName>,
    /// Trailing icon.
    #[prop(optional)]
    right_icon: Option<IconName>,
    #[prop(optional)] circle: bool,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// `type` attribute of the button element.
    #[prop(default = "button")]
    button_type: &'static str,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let style = ButtonStyle {
        circle,
        full_width,
        ..ButtonStyle::from_props(variant, color, size, rounded, border, font_weight)
    };
    let glyph_size = icon_size(&style.size);

    view! {
        <button
            type=button_type
            id=id
            class=merge_layout_class(style.classes(), layout_class)
            aria-label=aria_label
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=style.variant.to_string()
            data-ui-color=style.color.to_string()
            data-ui-size=style.size.to_string()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {icon.map(|icon| view! { <Icon icon size=glyph_size /> })}
            {children.map(|children| children())}
            {right_icon.map(|icon| view! { <Icon icon size=glyph_size /> })}
        </button>
    }
}

#[component]
/// Anchor rendered with button styling.
pub fn ButtonLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] variant: Option<Variant>,
    #[prop(optional, into)] color: Option<Color>,
    #[prop(optional, into)] size: Option<Size>,
    #[prop(optional, into)] rounded: Option<Rounded>,
    #[prop(optional, into)] border: Option<Scale>,
    #[prop(optional, into)] font_weight: Option<FontWeight>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] right_icon: Option<IconName>,
    #[prop(optional)] circle: bool,
    #[prop(optional)] full_width: bool,
    /// Link target, e.g. `_blank`.
    #[prop(optional, into)]
    target: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let style = ButtonStyle {
        circle,
        full_width,
        ..ButtonStyle::from_props(variant, color, size, rounded, border, font_weight)
    };
    let glyph_size = icon_size(&style.size);
    let rel = target
        .as_deref()
        .filter(|target| *target == "_blank")
        .map(|_| "noopener noreferrer");

    view! {
        <a
            href=href
            target=target
            rel=rel
            class=merge_layout_class(style.classes(), layout_class)
            data-ui-primitive="true"
            data-ui-kind="button-link"
            data-ui-variant=style.variant.to_string()
            data-ui-color=style.color.to_string()
        >
            {icon.map(|icon| view! { <Icon icon size=glyph_size /> })}
            {children.map(|children| children())}
            {right_icon.map(|icon| view! { <Icon icon size=glyph_size /> })}
        </a>
    }
}

/// Class string for a button group container.
pub(crate) fn button_group_class(orientation: Orientation, rounded: &Rounded, color: &Color) -> String {
    let axis = match orientation {
        Orientation::Horizontal => {
            "flex-row [&>*:not(:first-child)]:-ms-px [&>*:not(:first-child)]:rounded-s-none [&>*:not(:last-child)]:rounded-e-none"
        }
        Orientation::Vertical => {
            "flex-col [&>*:not(:first-child)]:-mt-px [&>*:not(:first-child)]:rounded-t-none [&>*:not(:last-child)]:rounded-b-none"
        }
    };
    ClassList::new()
        .with("inline-flex isolate")
        .with(axis)
        .with(rounded_class(rounded))
        .with(divider_color(color))
        .build()
}

fn divider_color(color: &Color) -> &str {
    match color {
        Color::Natural => "[&>*]:border-[#4B4B4B] dark:[&>*]:border-[#DDDDDD]",
        Color::White => "[&>*]:border-[#EBEBEB]",
        Color::Primary => "[&>*]:border-[#006570] dark:[&>*]:border-[#01B8CA]",
        Color::Secondary => "[&>*]:border-[#1A59CC] dark:[&>*]:border-[#6DAAFB]",
        Color::Success => "[&>*]:border-[#0B6B38] dark:[&>*]:border-[#06C167]",
        Color::Warning => "[&>*]:border-[#A47301] dark:[&>*]:border-[#FDC034]",
        Color::Danger => "[&>*]:border-[#B60E2B] dark:[&>*]:border-[#FC7F79]",
        Color::Info => "[&>*]:border-[#096A95] dark:[&>*]:border-[#3EB7ED]",
        Color::Silver => "[&>*]:border-[#6C6C6C] dark:[&>*]:border-[#A6A6A6]",
        Color::Misc => "[&>*]:border-[#6C3FA0] dark:[&>*]:border-[#BA83F9]",
        Color::Dawn => "[&>*]:border-[#87502D] dark:[&>*]:border-[#DB976B]",
        Color::Dark => "[&>*]:border-[#1B1B1B]",
        Color::Custom(raw) => raw.as_str(),
    }
}

#[component]
/// Joins adjacent buttons into one segmented control.
pub fn ButtonGroup(
    #[prop(optional)] orientation: Orientation,
    #[prop(optional, into)] rounded: Option<Rounded>,
    /// Color of the dividers between joined buttons.
    #[prop(optional, into)]
    color: Option<Color>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let rounded = pick(rounded, theme.rounded.as_ref(), Rounded::Large);
    let color = pick(color, theme.color.as_ref(), Color::Natural);

    view! {
        <div
            role="group"
            class=merge_layout_class(button_group_class(orientation, &rounded, &color), layout_class)
            data-ui-primitive="true"
            data-ui-kind="button-group"
            data-ui-orientation=orientation.token()
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_button_uses_filled_natural_palette() {
        let classes = ButtonStyle::default().classes();
        assert!(classes.starts_with(BUTTON_BASE));
        assert!(classes.contains(color_variant(&Variant::Default, &Color::Natural)));
        assert!(classes.contains("rounded-lg"));
        assert!(classes.contains("h-10 px-4"));
        assert!(!classes.contains("w-full"));
    }

    #[test]
    fn circle_overrides_radius_and_padding() {
        let style = ButtonStyle {
            circle: true,
            size: Size::Small,
            ..ButtonStyle::default()
        };
        let classes = style.classes();
        assert!(classes.contains("rounded-full"));
        assert!(classes.contains("size-8"));
        assert!(!classes.contains("px-3"));
    }

    #[test]
    fn custom_size_passes_through() {
        let style = ButtonStyle {
            size: Size::from("h-[42px] px-7"),
            full_width: true,
            ..ButtonStyle::default()
        };
        let classes = style.classes();
        assert!(classes.contains("h-[42px] px-7"));
        assert!(classes.ends_with("w-full"));
    }

    #[test]
    fn group_axis_follows_orientation() {
        let horizontal = button_group_class(Orientation::Horizontal, &Rounded::Large, &Color::Natural);
        assert!(horizontal.contains("flex-row"));
        let vertical = button_group_class(Orientation::Vertical, &Rounded::Full, &Color::Primary);
        assert!(vertical.contains("flex-col"));
        assert!(vertical.contains("rounded-full"));
        assert_eq!(
            divider_color(&Color::from("[&>*]:border-lime-500")),
            "[&>*]:border-lime-500"
        );
    }
}

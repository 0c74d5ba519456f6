use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Placement of the status dot on a badge.
pub enum BadgeIndicator {
    /// No dot.
    #[default]
    None,
    /// Inline dot before the label.
    Left,
    /// Inline dot after the label.
    Right,
    /// Corner dot, top start.
    TopLeft,
    /// Corner dot, top end.
    TopRight,
    /// Corner dot, bottom start.
    BottomLeft,
    /// Corner dot, bottom end.
    BottomRight,
}

impl BadgeIndicator {
    fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }

    fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }

    fn placement(self) -> &'static str {
        match self {
            Self::None | Self::Left | Self::Right => "relative",
            Self::TopLeft => "absolute -top-1 -start-1",
            Self::TopRight => "absolute -top-1 -end-1",
            Self::BottomLeft => "absolute -bottom-1 -start-1",
            Self::BottomRight => "absolute -bottom-1 -end-1",
        }
    }
}

fn badge_size(size: &Size) -> &str {
    match size {
        Size::ExtraSmall => "px-1.5 py-0.5 gap-1 text-[10px]",
        Size::Small => "px-2 py-0.5 gap-1 text-xs",
        Size::Medium => "px-2.5 py-1 gap-1.5 text-sm",
        Size::Large => "px-3 py-1 gap-1.5 text-base",
        Size::ExtraLarge => "px-3.5 py-1.5 gap-2 text-lg",
        Size::Custom(raw) => raw.as_str(),
    }
}

fn badge_circle_size(size: &Size) -> &str {
    match size {
        Size::ExtraSmall => "size-4 text-[10px]",
        Size::Small => "size-5 text-xs",
        Size::Medium => "size-6 text-sm",
        Size::Large => "size-7 text-base",
        Size::ExtraLarge => "size-8 text-lg",
        Size::Custom(raw) => raw.as_str(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved style attributes of a badge.
pub struct BadgeStyle {
    /// Style family.
    pub variant: Variant,
    /// Color family, shared by the surface and the status dot.
    pub color: Color,
    /// Padding and text size step.
    pub size: Size,
    /// Corner radius. Ignored for circle badges.
    pub rounded: Rounded,
    /// Border width.
    pub border: Scale,
    /// Label weight.
    pub font_weight: FontWeight,
    /// Fixed square footprint with a full radius, for counters.
    pub circle: bool,
    /// Status dot placement.
    pub indicator: BadgeIndicator,
    /// Animate the status dot.
    pub pulse: bool,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            variant: Variant::Default,
            color: Color::Natural,
            size: Size::ExtraSmall,
            rounded: Rounded::Small,
            border: Scale::ExtraSmall,
            font_weight: FontWeight::Normal,
            circle: false,
            indicator: BadgeIndicator::None,
            pulse: false,
        }
    }
}

impl BadgeStyle {
    /// Class string for the badge surface.
    pub fn classes(&self) -> String {
        let (rounded, size) = if self.circle {
            ("rounded-full justify-center", badge_circle_size(&self.size))
        } else {
            (rounded_class(&self.rounded), badge_size(&self.size))
        };
        ClassList::new()
            .with("inline-flex items-center relative")
            .with(color_variant(&self.variant, &self.color))
            .with(border_class(&self.border))
            .with(rounded)
            .with(size)
            .with(font_weight_class(&self.font_weight))
            .build()
    }

    /// Class string for the status dot, or `None` without an indicator.
    pub fn dot_classes(&self) -> Option<String> {
        if self.indicator == BadgeIndicator::None {
            return None;
        }
        Some(
            ClassList::new()
                .with("flex size-2 rounded-full")
                .with(self.indicator.placement())
                .with(fill_color(&self.color))
                .with_if(
                    self.indicator.is_corner(),
                    "ring-2 ring-white dark:ring-[#18181B]",
                )
                .build(),
        )
    }

    /// Class string for the pulse ring drawn over the dot.
    pub fn pulse_classes(&self) -> Option<String> {
        if !self.pulse || self.indicator == BadgeIndicator::None {
            return None;
        }
        Some(format!(
            "absolute inline-flex size-full rounded-full opacity-75 animate-ping {}",
            fill_color(&self.color)
        ))
    }
}

#[component]
/// Compact status label with an optional dot, icon, and dismiss control.
pub fn Badge(
    #[prop(optional, into)] variant: Option<Variant>,
    #[prop(optional, into)] color: Option<Color>,
    #[prop(optional, into)] size: Option<Size>,
    #[prop(optional, into)] rounded: Option<Rounded>,
    #[prop(optional, into)] border: Option<Scale>,
    #[prop(optional, into)] font_weight: Option<FontWeight>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] circle: bool,
    #[prop(optional)] indicator: BadgeIndicator,
    #[prop(optional)] pulse: bool,
    /// Render a dismiss control that fades the badge out and removes it.
    #[prop(optional)]
    dismissible: bool,
    /// Fires once the badge has left the DOM.
    #[prop(optional)]
    on_dismiss: Option<Callback<()>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let theme = use_theme();
    let defaults = BadgeStyle::default();
    let style = BadgeStyle {
        variant: pick(variant, theme.variant.as_ref(), defaults.variant),
        color: pick(color, theme.color.as_ref(), defaults.color),
        size: pick(size, theme.size.as_ref(), defaults.size),
        rounded: pick(rounded, theme.rounded.as_ref(), defaults.rounded),
        border: pick(border, theme.border.as_ref(), defaults.border),
        font_weight: pick(font_weight, theme.font_weight.as_ref(), defaults.font_weight),
        circle,
        indicator,
        pulse,
    };

    let surface_class = merge_layout_class(style.classes(), layout_class);
    let glyph_size = icon_size(&style.size);
    let dot = store_value((style.dot_classes(), style.pulse_classes()));
    let render_dot = move || {
        dot.with_value(|(dot_class, pulse_class)| {
            dot_class.clone().map(|dot_class| {
                view! {
                    <span class=dot_class data-ui-slot="indicator" aria-hidden="true">
                        {pulse_class.clone().map(|pulse_class| view! { <span class=pulse_class></span> })}
                    </span>
                }
            })
        })
    };

    let dismiss = use_dismiss(DismissTransition::FADE_SCALE, on_dismiss);
    let variant_token = style.variant.to_string();
    let color_token = style.color.to_string();

    view! {
        <Show when=move || dismiss.is_present()>
            <span
                class={
                    let surface_class = surface_class.clone();
                    move || {
                        if dismissible {
                            format!("{surface_class} {}", dismiss.classes())
                        } else {
                            surface_class.clone()
                        }
                    }
                }
                data-ui-primitive="true"
                data-ui-kind="badge"
                data-ui-variant=variant_token.clone()
                data-ui-color=color_token.clone()
                data-ui-indicator=indicator.token()
                data-ui-state=move || dismiss.phase().token()
            >
                {(indicator == BadgeIndicator::Left).then(render_dot)}
                {icon.map(|icon| view! { <Icon icon size=glyph_size /> })}
                {children()}
                {(indicator == BadgeIndicator::Right || indicator.is_corner()).then(render_dot)}
                {dismissible
                    .then(|| {
                        view! {
                            <button
                                type="button"
                                class="inline-flex items-center justify-center rounded-sm opacity-70 transition-opacity hover:opacity-100 focus-visible:outline-none focus-visible:ring-1"
                                aria-label="Dismiss"
                                data-ui-slot="dismiss"
                                on:click=move |_| dismiss.dismiss()
                            >
                                <Icon icon=IconName::Dismiss size=IconSize::Xs />
                            </button>
                        }
                    })}
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_badge_is_extra_small_natural() {
        let classes = BadgeStyle::default().classes();
        assert!(classes.contains("px-1.5 py-0.5"));
        assert!(classes.contains(color_variant(&Variant::Default, &Color::Natural)));
        assert!(classes.contains("rounded "));
        assert_eq!(BadgeStyle::default().dot_classes(), None);
    }

    #[test]
    fn corner_dot_is_absolutely_positioned_with_ring() {
        let style = BadgeStyle {
            indicator: BadgeIndicator::TopRight,
            color: Color::Success,
            pulse: true,
            ..BadgeStyle::default()
        };
        let dot = style.dot_classes().expect("dot");
        assert!(dot.contains("absolute -top-1 -end-1"));
        assert!(dot.contains(fill_color(&Color::Success)));
        assert!(dot.contains("ring-2"));
        assert!(style.pulse_classes().expect("pulse").contains("animate-ping"));
    }

    #[test]
    fn inline_dot_has_no_ring_and_pulse_needs_indicator() {
        let style = BadgeStyle {
            indicator: BadgeIndicator::Left,
            ..BadgeStyle::default()
        };
        assert!(!style.dot_classes().expect("dot").contains("ring-2"));

        let style = BadgeStyle {
            pulse: true,
            ..BadgeStyle::default()
        };
        assert_eq!(style.pulse_classes(), None);
    }

    #[test]
    fn circle_badge_uses_square_footprint() {
        let style = BadgeStyle {
            circle: true,
            size: Size::Medium,
            ..BadgeStyle::default()
        };
        let classes = style.classes();
        assert!(classes.contains("rounded-full"));
        assert!(classes.contains("size-6"));
    }
}

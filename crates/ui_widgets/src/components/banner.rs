use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Viewport edge a banner attaches to.
pub enum BannerPosition {
    /// Top edge; the border sits underneath.
    #[default]
    Top,
    /// Bottom edge; the border sits on top.
    Bottom,
}

impl BannerPosition {
    fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

fn border_bottom(border: &Scale) -> &str {
    match border {
        Scale::None => "border-b-0",
        Scale::ExtraSmall => "border-b",
        Scale::Small => "border-b-2",
        Scale::Medium => "border-b-[3px]",
        Scale::Large => "border-b-4",
        Scale::ExtraLarge => "border-b-[5px]",
        Scale::Custom(raw) => raw.as_str(),
    }
}

fn border_top(border: &Scale) -> &str {
    match border {
        Scale::None => "border-t-0",
        Scale::ExtraSmall => "border-t",
        Scale::Small => "border-t-2",
        Scale::Medium => "border-t-[3px]",
        Scale::Large => "border-t-4",
        Scale::ExtraLarge => "border-t-[5px]",
        Scale::Custom(raw) => raw.as_str(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved style attributes of a banner.
pub struct BannerStyle {
    /// Surface treatment.
    pub variant: Variant,
    /// Palette color.
    pub color: Color,
    /// Viewport edge the banner attaches to.
    pub position: BannerPosition,
    /// Inner padding.
    pub padding: Scale,
    /// Border width on the edge facing the page content.
    pub border: Scale,
    /// Corner radius.
    pub rounded: Rounded,
    /// Gap between content children.
    pub space: Scale,
    /// Text weight.
    pub font_weight: FontWeight,
    /// Pin to the viewport edge instead of flowing with the page.
    pub fixed: bool,
}

impl Default for BannerStyle {
    fn default() -> Self {
        Self {
            variant: Variant::Default,
            color: Color::Natural,
            position: BannerPosition::Top,
            padding: Scale::Medium,
            border: Scale::None,
            rounded: Rounded::None,
            space: Scale::Small,
            font_weight: FontWeight::Normal,
            fixed: true,
        }
    }
}

impl BannerStyle {
    /// Class string for the banner container.
    pub fn classes(&self) -> String {
        let (edge, border) = match self.position {
            BannerPosition::Top => ("top-0", border_bottom(&self.border)),
            BannerPosition::Bottom => ("bottom-0", border_top(&self.border)),
        };
        ClassList::new()
            .with("flex w-full items-center justify-between")
            .with_if(self.fixed, "fixed inset-x-0 z-50")
            .with_if(self.fixed, edge)
            .with(color_variant(&self.variant, &self.color))
            .with(border)
            .with(padding_class(&self.padding))
            .with(space_class(&self.space))
            .with(rounded_class(&self.rounded))
            .with(font_weight_class(&self.font_weight))
            .build()
    }
}

#[component]
/// Full-width announcement strip pinned to the top or bottom of the viewport.
pub fn Banner(
    #[prop(optional, into)] variant: Option<Variant>,
    #[prop(optional, into)] color: Option<Color>,
    #[prop(optional)] position: BannerPosition,
    #[prop(optional, into)] padding: Option<Scale>,
    #[prop(optional, into)] border: Option<Scale>,
    #[prop(optional, into)] rounded: Option<Rounded>,
    #[prop(optional, into)] space: Option<Scale>,
    #[prop(optional, into)] font_weight: Option<FontWeight>,
    #[prop(default = true)] fixed: bool,
    #[prop(optional)] dismissible: bool,
    /// Fires once the banner has left the DOM.
    #[prop(optional)]
    on_dismiss: Option<Callback<()>>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let theme = use_theme();
    let defaults = BannerStyle::default();
    let style = BannerStyle {
        variant: pick(variant, theme.variant.as_ref(), defaults.variant),
        color: pick(color, theme.color.as_ref(), defaults.color),
        position,
        padding: pick(padding, theme.padding.as_ref(), defaults.padding),
        border: pick(border, theme.border.as_ref(), defaults.border),
        rounded: pick(rounded, theme.rounded.as_ref(), defaults.rounded),
        space: pick(space, theme.space.as_ref(), defaults.space),
        font_weight: pick(font_weight, theme.font_weight.as_ref(), defaults.font_weight),
        fixed,
    };

    let banner_class = merge_layout_class(style.classes(), layout_class);
    let variant_token = style.variant.to_string();
    let color_token = style.color.to_string();
    let dismiss = use_dismiss(DismissTransition::FADE_SLIDE, on_dismiss);

    view! {
        <Show when=move || dismiss.is_present()>
            <div
                id=id.clone()
                role="banner"
                class={
                    let banner_class = banner_class.clone();
                    move || format!("{banner_class} {}", dismiss.classes())
                }
                data-ui-primitive="true"
                data-ui-kind="banner"
                data-ui-variant=variant_token.clone()
                data-ui-color=color_token.clone()
                data-ui-position=position.token()
                data-ui-fixed=bool_token(fixed)
                data-ui-state=move || dismiss.phase().token()
            >
                <div class="flex flex-1 flex-wrap items-center gap-2" data-ui-slot="content">
                    {children()}
                </div>
                {dismissible
                    .then(|| {
                        view! {
                            <button
                                type="button"
                                class="inline-flex shrink-0 items-center justify-center rounded-md p-1 opacity-70 transition-opacity hover:opacity-100 focus-visible:outline-none focus-visible:ring-2"
                                aria-label="Close banner"
                                data-ui-slot="dismiss"
                                on:click=move |_| dismiss.dismiss()
                            >
                                <Icon icon=IconName::Dismiss size=IconSize::Sm />
                            </button>
                        }
                    })}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_banner_borders_its_bottom_edge() {
        let style = BannerStyle {
            border: Scale::Small,
            ..BannerStyle::default()
        };
        let classes = style.classes();
        assert!(classes.contains("fixed inset-x-0 z-50 top-0"));
        assert!(classes.contains("border-b-2"));
        assert!(!classes.contains("border-t"));
    }

    #[test]
    fn bottom_banner_borders_its_top_edge() {
        let style = BannerStyle {
            position: BannerPosition::Bottom,
            border: Scale::Medium,
            ..BannerStyle::default()
        };
        let classes = style.classes();
        assert!(classes.contains("bottom-0"));
        assert!(classes.contains("border-t-[3px]"));
    }

    #[test]
    fn flowing_banner_drops_viewport_pinning() {
        let style = BannerStyle {
            fixed: false,
            ..BannerStyle::default()
        };
        let classes = style.classes();
        assert!(!classes.contains("fixed"));
        assert!(!classes.contains("top-0"));
        assert!(classes.contains("p-3"));
        assert!(classes.contains("gap-2"));
    }
}

use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Which inline edge of a blockquote carries the accent border.
pub enum BorderSide {
    /// Leading edge.
    #[default]
    Start,
    /// Trailing edge.
    End,
    /// No accent border.
    None,
}

impl BorderSide {
    fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::None => "none",
        }
    }
}

fn border_start(border: &Scale) -> &str {
    match border {
        Scale::None => "border-s-0",
        Scale::ExtraSmall => "border-s",
        Scale::Small => "border-s-2",
        Scale::Medium => "border-s-[3px]",
        Scale::Large => "border-s-4",
        Scale::ExtraLarge => "border-s-[5px]",
        Scale::Custom(raw) => raw.as_str(),
    }
}

fn border_end(border: &Scale) -> &str {
    match border {
        Scale::None => "border-e-0",
        Scale::ExtraSmall => "border-e",
        Scale::Small => "border-e-2",
        Scale::Medium => "border-e-[3px]",
        Scale::Large => "border-e-4",
        Scale::ExtraLarge => "border-e-[5px]",
        Scale::Custom(raw) => raw.as_str(),
    }
}

fn quote_size(size: &Size) -> &str {
    match size {
        Size::ExtraSmall => "text-sm",
        Size::Small => "text-base",
        Size::Medium => "text-lg",
        Size::Large => "text-xl",
        Size::ExtraLarge => "text-2xl",
        Size::Custom(raw) => raw.as_str(),
    }
}

fn quote_icon_size(size: &Size) -> IconSize {
    match size {
        Size::ExtraSmall | Size::Small => IconSize::Md,
        Size::Medium | Size::Custom(_) => IconSize::Lg,
        Size::Large | Size::ExtraLarge => IconSize::Xl,
    }
}

/// Blockquote styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockquoteStyle {
    /// Surface treatment.
    pub variant: Variant,
    /// Palette color.
    pub color: Color,
    /// Quote text size.
    pub size: Size,
    /// Inner padding.
    pub padding: Scale,
    /// Gap between children.
    pub space: Scale,
    /// Corner radius.
    pub rounded: Rounded,
    /// Border width.
    pub border: Scale,
    /// Side carrying the accent border.
    pub border_side: BorderSide,
}

impl Default for BlockquoteStyle {
    fn default() -> Self {
        Self {
            variant: Variant::Default,
            color: Color::Natural,
            size: Size::Medium,
            padding: Scale::Small,
            space: Scale::Small,
            rounded: Rounded::Small,
            border: Scale::Medium,
            border_side: BorderSide::Start,
        }
    }
}

impl BlockquoteStyle {
    /// Class string for the `<figure>` wrapper.
    pub fn classes(&self) -> String {
        let accent = match self.border_side {
            BorderSide::Start => border_start(&self.border),
            BorderSide::End => border_end(&self.border),
            BorderSide::None => "border-0",
        };
        ClassList::new()
            .with("flex flex-col")
            .with(color_variant(&self.variant, &self.color))
            .with("border-0")
            .with_if(self.border_side != BorderSide::None, accent)
            .with(padding_class(&self.padding))
            .with(space_class(&self.space))
            .with(rounded_class(&self.rounded))
            .build()
    }

    /// Class string for the quoted text.
    pub fn text_classes(&self) -> String {
        ClassList::new()
            .with("italic leading-relaxed")
            .with(quote_size(&self.size))
            .build()
    }
}

#[component]
/// Quotation block with an accent border, quote mark, and optional attribution.
pub fn Blockquote(
    #[prop(optional, into)] variant: Option<Variant>,
    #[prop(optional, into)] color: Option<Color>,
    #[prop(optional, into)] size: Option<Size>,
    #[prop(optional, into)] padding: Option<Scale>,
    #[prop(optional, into)] space: Option<Scale>,
    #[prop(optional, into)] rounded: Option<Rounded>,
    #[prop(optional, into)] border: Option<Scale>,
    #[prop(optional)] border_side: BorderSide,
    #[prop(default = true)] quote_icon: bool,
    /// Author shown in the caption.
    #[prop(optional, into)]
    caption_name: Option<String>,
    /// Author role or affiliation.
    #[prop(optional, into)]
    caption_position: Option<String>,
    /// Author portrait URL.
    #[prop(optional, into)]
    caption_image: Option<String>,
    /// Source URL for the `cite` attribute.
    #[prop(optional, into)]
    cite: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let defaults = BlockquoteStyle::default();
    let style = BlockquoteStyle {
        variant: pick(variant, theme.variant.as_ref(), defaults.variant),
        color: pick(color, theme.color.as_ref(), defaults.color),
        size: pick(size, theme.size.as_ref(), defaults.size),
        padding: pick(padding, theme.padding.as_ref(), defaults.padding),
        space: pick(space, theme.space.as_ref(), defaults.space),
        rounded: pick(rounded, theme.rounded.as_ref(), defaults.rounded),
        border: pick(border, theme.border.as_ref(), defaults.border),
        border_side,
    };
    let has_caption = caption_name.is_some() || caption_position.is_some();
    let portrait_alt = caption_name.clone().unwrap_or_default();

    view! {
        <figure
            class=merge_layout_class(style.classes(), layout_class)
            data-ui-primitive="true"
            data-ui-kind="blockquote"
            data-ui-variant=style.variant.to_string()
            data-ui-color=style.color.to_string()
            data-ui-border-side=border_side.token()
        >
            {quote_icon
                .then(|| {
                    view! {
                        <span class="opacity-40" data-ui-slot="quote-icon">
                            <Icon icon=IconName::Quote size=quote_icon_size(&style.size) />
                        </span>
                    }
                })}
            <blockquote class=style.text_classes() cite=cite>
                {children()}
            </blockquote>
            {has_caption
                .then(|| {
                    view! {
                        <figcaption class="flex items-center gap-3 text-sm" data-ui-slot="caption">
                            {caption_image
                                .map(|src| {
                                    view! {
                                        <img
                                            class="size-8 rounded-full object-cover"
                                            src=src
                                            alt=portrait_alt
                                        />
                                    }
                                })}
                            <div class="flex flex-col">
                                {caption_name
                                    .map(|name| view! { <cite class="font-semibold not-italic">{name}</cite> })}
                                {caption_position
                                    .map(|position| view! { <span class="opacity-70">{position}</span> })}
                            </div>
                        </figcaption>
                    }
                })}
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn accent_border_follows_side() {
        let start = BlockquoteStyle::default().classes();
        assert!(start.contains("border-s-[3px]"));

        let end = BlockquoteStyle {
            border_side: BorderSide::End,
            border: Scale::Large,
            ..BlockquoteStyle::default()
        }
        .classes();
        assert!(end.contains("border-e-4"));
        assert!(!end.contains("border-s"));

        let none = BlockquoteStyle {
            border_side: BorderSide::None,
            ..BlockquoteStyle::default()
        }
        .classes();
        assert!(!none.contains("border-s"));
        assert!(!none.contains("border-e"));
    }

    #[test]
    fn quote_text_scales_with_size() {
        let style = BlockquoteStyle {
            size: Size::ExtraLarge,
            ..BlockquoteStyle::default()
        };
        assert_eq!(style.text_classes(), "italic leading-relaxed text-2xl");
        assert_eq!(quote_icon_size(&Size::Small), IconSize::Md);
    }
}

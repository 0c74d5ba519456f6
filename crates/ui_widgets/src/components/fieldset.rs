use super::*;

fn legend_size(size: &Size) -> &str {
    match size {
        Size::ExtraSmall => "px-1 text-xs",
        Size::Small => "px-1.5 text-sm",
        Size::Medium => "px-2 text-base",
        Size::Large => "px-2.5 text-lg",
        Size::ExtraLarge => "px-3 text-xl",
        Size::Custom(raw) => raw.as_str(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved style attributes of a fieldset.
pub struct FieldsetStyle {
    /// Surface treatment of the frame.
    pub variant: Variant,
    /// Palette color.
    pub color: Color,
    /// Legend size step.
    pub size: Size,
    /// Gap between children.
    pub space: Scale,
    /// Inner padding.
    pub padding: Scale,
    /// Corner radius.
    pub rounded: Rounded,
    /// Border width.
    pub border: Scale,
}

impl Default for FieldsetStyle {
    fn default() -> Self {
        Self {
            variant: Variant::Default,
            color: Color::Natural,
            size: Size::Medium,
            space: Scale::Small,
            padding: Scale::Small,
            rounded: Rounded::Small,
            border: Scale::ExtraSmall,
        }
    }
}

impl FieldsetStyle {
    /// Class string for the `<fieldset>` element.
    pub fn classes(&self) -> String {
        ClassList::new()
            .with("flex flex-col min-w-0 disabled:opacity-60 disabled:cursor-not-allowed")
            .with(color_variant(&self.variant, &self.color))
            .with(border_class(&self.border))
            .with(padding_class(&self.padding))
            .with(space_class(&self.space))
            .with(rounded_class(&self.rounded))
            .build()
    }

    /// Class string for the `<legend>` element.
    pub fn legend_classes(&self) -> String {
        ClassList::new()
            .with("font-semibold")
            .with(legend_size(&self.size))
            .build()
    }
}

#[component]
/// Groups related form controls under a legend.
pub fn Fieldset(
    #[prop(optional, into)] variant: Option<Variant>,
    #[prop(optional, into)] color: Option<Color>,
    #[prop(optional, into)] size: Option<Size>,
    #[prop(optional, into)] space: Option<Scale>,
    #[prop(optional, into)] padding: Option<Scale>,
    #[prop(optional, into)] rounded: Option<Rounded>,
    #[prop(optional, into)] border: Option<Scale>,
    #[prop(optional, into)] legend: Option<String>,
    /// Disables every control inside the group.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let defaults = FieldsetStyle::default();
    let style = FieldsetStyle {
        variant: pick(variant, theme.variant.as_ref(), defaults.variant),
        color: pick(color, theme.color.as_ref(), defaults.color),
        size: pick(size, theme.size.as_ref(), defaults.size),
        space: pick(space, theme.space.as_ref(), defaults.space),
        padding: pick(padding, theme.padding.as_ref(), defaults.padding),
        rounded: pick(rounded, theme.rounded.as_ref(), defaults.rounded),
        border: pick(border, theme.border.as_ref(), defaults.border),
    };
    let legend_class = style.legend_classes();

    view! {
        <fieldset
            id=id
            class=merge_layout_class(style.classes(), layout_class)
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="fieldset"
            data-ui-variant=style.variant.to_string()
            data-ui-color=style.color.to_string()
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {legend.map(|legend| view! { <legend class=legend_class>{legend}</legend> })}
            {children()}
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fieldset_combines_surface_and_spacing() {
        let style = FieldsetStyle {
            variant: Variant::Bordered,
            color: Color::Info,
            ..FieldsetStyle::default()
        };
        let classes = style.classes();
        assert!(classes.contains(color_variant(&Variant::Bordered, &Color::Info)));
        assert!(classes.contains("border p-2 gap-2 rounded"));
    }

    #[test]
    fn legend_tracks_size() {
        let style = FieldsetStyle {
            size: Size::Large,
            ..FieldsetStyle::default()
        };
        assert_eq!(style.legend_classes(), "font-semibold px-2.5 text-lg");
    }
}

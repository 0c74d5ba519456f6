use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Label placement of a text field.
pub enum FloatingLabel {
    /// Static label above the field.
    #[default]
    None,
    /// Label inside the field, shrinking to the top edge on focus or input.
    Inner,
    /// Label resting in the field and lifting onto the border on focus or input.
    Outer,
}

impl FloatingLabel {
    fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Inner => "inner",
            Self::Outer => "outer",
        }
    }
}

fn field_height(size: &Size) -> &str {
    match size {
        Size::ExtraSmall => "h-8 px-2 gap-1.5 text-xs",
        Size::Small => "h-9 px-2.5 gap-2 text-sm",
        Size::Medium => "h-10 px-3 gap-2 text-sm",
        Size::Large => "h-12 px-3.5 gap-2.5 text-base",
        Size::ExtraLarge => "h-14 px-4 gap-3 text-lg",
        Size::Custom(raw) => raw.as_str(),
    }
}

fn focus_ring(color: &Color) -> &str {
    match color {
        Color::Natural => "focus-within:ring-2 focus-within:ring-[#4B4B4B]/40 dark:focus-within:ring-[#DDDDDD]/40",
        Color::White => "focus-within:ring-2 focus-within:ring-[#DADADA]",
        Color::Primary => "focus-within:ring-2 focus-within:ring-[#007F8C]/40 dark:focus-within:ring-[#01B8CA]/40",
        Color::Secondary => "focus-within:ring-2 focus-within:ring-[#266EF1]/40 dark:focus-within:ring-[#6DAAFB]/40",
        Color::Success => "focus-within:ring-2 focus-within:ring-[#0E8345]/40 dark:focus-within:ring-[#06C167]/40",
        Color::Warning => "focus-within:ring-2 focus-within:ring-[#CA8D01]/40 dark:focus-within:ring-[#FDC034]/40",
        Color::Danger => "focus-within:ring-2 focus-within:ring-[#DE1135]/40 dark:focus-within:ring-[#FC7F79]/40",
        Color::Info => "focus-within:ring-2 focus-within:ring-[#0B84BA]/40 dark:focus-within:ring-[#3EB7ED]/40",
        Color::Silver => "focus-within:ring-2 focus-within:ring-[#868686]/40 dark:focus-within:ring-[#A6A6A6]/40",
        Color::Misc => "focus-within:ring-2 focus-within:ring-[#8750C5]/40 dark:focus-within:ring-[#BA83F9]/40",
        Color::Dawn => "focus-within:ring-2 focus-within:ring-[#A86438]/40 dark:focus-within:ring-[#DB976B]/40",
        Color::Dark => "focus-within:ring-2 focus-within:ring-[#282828]/40",
        Color::Custom(_) => "focus-within:ring-2",
    }
}

/// Input surfaces use the light bordered fill for the default family and a neutral card for
/// shadowed fields, so text stays readable.
fn field_surface(variant: &Variant, color: &Color) -> String {
    match variant {
        Variant::Default => color_variant(&Variant::Bordered, color).to_string(),
        Variant::Shadow => format!("{} shadow-md", color_variant(&Variant::Base, color)),
        other => color_variant(other, color).to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved style attributes of a text field.
pub struct TextFieldStyle {
    /// Surface treatment of the field shell.
    pub variant: Variant,
    /// Palette color.
    pub color: Color,
    /// Field height.
    pub size: Size,
    /// Corner radius.
    pub rounded: Rounded,
    /// Border width.
    pub border: Scale,
    /// Gap between the label, field, and messages.
    pub space: Scale,
    /// Label placement.
    pub floating: FloatingLabel,
}

impl Default for TextFieldStyle {
    fn default() -> Self {
        Self {
            variant: Variant::Default,
            color: Color::Natural,
            size: Size::Medium,
            rounded: Rounded::Small,
            border: Scale::ExtraSmall,
            space: Scale::Small,
            floating: FloatingLabel::None,
        }
    }
}

impl TextFieldStyle {
    /// Class string for the outer wrapper.
    pub fn wrapper_classes(&self) -> String {
        ClassList::new()
            .with("flex w-full flex-col")
            .with(space_class(&self.space))
            .build()
    }

    /// Class string for the bordered shell around the input and icons. Errors switch the
    /// surface and focus ring to the danger family.
    pub fn shell_classes(&self, invalid: bool) -> String {
        let danger = Color::Danger;
        let color = if invalid { &danger } else { &self.color };
        ClassList::new()
            .with("relative flex w-full items-center transition-shadow")
            .with(field_surface(&self.variant, color))
            .with(border_class(&self.border))
            .with(rounded_class(&self.rounded))
            .with(field_height(&self.size))
            .with(focus_ring(color))
            .with("has-[:disabled]:cursor-not-allowed has-[:disabled]:opacity-50")
            .build()
    }

    /// Class string for the `<input>`.
    pub fn input_classes(&self) -> String {
        ClassList::new()
            .with("peer h-full w-full min-w-0 bg-transparent outline-none placeholder:opacity-60 disabled:cursor-not-allowed")
            .with_if(self.floating == FloatingLabel::Inner, "pt-3")
            .build()
    }

    /// Class string for the label.
    pub fn label_classes(&self) -> String {
        match self.floating {
            FloatingLabel::None => ClassList::new()
                .with("font-medium")
                .with(text_size_class(&self.size))
                .build(),
            FloatingLabel::Inner => "pointer-events-none absolute start-0 top-1 text-[10px] opacity-70 transition-all duration-150 peer-placeholder-shown:top-1/2 peer-placeholder-shown:-translate-y-1/2 peer-placeholder-shown:text-sm peer-focus:top-1 peer-focus:translate-y-0 peer-focus:text-[10px]".to_string(),
            FloatingLabel::Outer => "pointer-events-none absolute start-0 top-0 -translate-y-[calc(50%+0.5rem)] bg-inherit px-1 text-xs transition-all duration-150 peer-placeholder-shown:top-1/2 peer-placeholder-shown:-translate-y-1/2 peer-placeholder-shown:text-sm peer-focus:top-0 peer-focus:-translate-y-[calc(50%+0.5rem)] peer-focus:text-xs".to_string(),
        }
    }
}

#[component]
/// Single-line text input with label, icons, help text, and error messages.
pub fn TextField(
    #[prop(optional, into)] variant: Option<Variant>,
    #[prop(optional, into)] color: Option<Color>,
    #[prop(optional, into)] size: Option<Size>,
    #[prop(optional, into)] rounded: Option<Rounded>,
    #[prop(optional, into)] border: Option<Scale>,
    #[prop(optional, into)] space: Option<Scale>,
    #[prop(optional)] floating: FloatingLabel,
    #[prop(optional, into)] label: Option<String>,
    /// Secondary text under the label.
    #[prop(optional, into)]
    description: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    /// Hint under the field, hidden while errors are shown.
    #[prop(optional, into)]
    help_text: Option<String>,
    #[prop(optional)] start_icon: Option<IconName>,
    #[prop(optional)] end_icon: Option<IconName>,
    /// `type` attribute of the input.
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    /// Validation messages; any entry marks the field invalid.
    #[prop(optional, into)]
    errors: MaybeSignal<Vec<String>>,
    /// Receives the input value on every keystroke.
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    let defaults = TextFieldStyle::default();
    let style = TextFieldStyle {
        variant: pick(variant, theme.variant.as_ref(), defaults.variant),
        color: pick(color, theme.color.as_ref(), defaults.color),
        size: pick(size, theme.size.as_ref(), defaults.size),
        rounded: pick(rounded, theme.rounded.as_ref(), defaults.rounded),
        border: pick(border, theme.border.as_ref(), defaults.border),
        space: pick(space, theme.space.as_ref(), defaults.space),
        floating,
    };

    let input_id = id.unwrap_or_else(|| next_id("text-field"));
    let message_id = format!("{input_id}-message");
    let errors = Signal::derive(move || errors.get());
    let invalid = Signal::derive(move || errors.with(|errors| !errors.is_empty()));
    let shell_style = style.clone();
    let shell_class = move || shell_style.shell_classes(invalid.get());
    let glyph_size = icon_size(&style.size);

    // Floating labels need a placeholder for `:placeholder-shown` to track the empty state.
    let placeholder = match floating {
        FloatingLabel::None => placeholder,
        FloatingLabel::Inner | FloatingLabel::Outer => Some(placeholder.unwrap_or_else(|| " ".to_string())),
    };
    let label_class = style.label_classes();
    let (static_label, floating_label) = match (floating, label) {
        (_, None) => (None, None),
        (FloatingLabel::None, Some(label)) => (Some(label), None),
        (_, Some(label)) => (None, Some(label)),
    };

    view! {
        <div
            class=merge_layout_class(style.wrapper_classes(), layout_class)
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-variant=style.variant.to_string()
            data-ui-color=style.color.to_string()
            data-ui-floating=floating.token()
            data-ui-invalid=move || bool_token(invalid.get())
        >
            {static_label
                .map(|label| {
                    view! {
                        <label class=label_class.clone() for=input_id.clone()>
                            {label}
                        </label>
                    }
                })}
            {description
                .map(|description| {
                    view! {
                        <p class="text-xs opacity-70" data-ui-slot="description">
                            {description}
                        </p>
                    }
                })}
            <div class=shell_class data-ui-slot="field">
                {start_icon.map(|icon| view! { <Icon icon size=glyph_size /> })}
                <div class="relative flex h-full flex-1 items-center">
                    <input
                        id=input_id.clone()
                        name=name
                        type=input_type
                        class=style.input_classes()
                        placeholder=placeholder
                        required=required
                        prop:value=move || value.get()
                        disabled=move || disabled.get()
                        aria-invalid=move || bool_token(invalid.get())
                        aria-describedby=message_id.clone()
                        on:input=move |ev| {
                            if let Some(on_input) = on_input.as_ref() {
                                on_input.call(event_target_value(&ev));
                            }
                        }
                    />
                    {floating_label
                        .map(|label| {
                            view! {
                                <label class=label_class.clone() for=input_id.clone()>
                                    {label}
                                </label>
                            }
                        })}
                </div>
                {end_icon.map(|icon| view! { <Icon icon size=glyph_size /> })}
            </div>
            <div id=message_id.clone() data-ui-slot="messages">
                {move || {
                    let errors = errors.get();
                    if errors.is_empty() {
                        help_text
                            .clone()
                            .map(|help| view! { <p class="text-xs opacity-70">{help}</p> })
                            .into_view()
                    } else {
                        errors
                            .into_iter()
                            .map(|message| {
                                view! {
                                    <p
                                        class="flex items-center gap-1 text-xs text-[#DE1135] dark:text-[#FC7F79]"
                                        role="alert"
                                    >
                                        <Icon icon=IconName::Warning size=IconSize::Xs />
                                        {message}
                                    </p>
                                }
                            })
                            .collect_view()
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_field_uses_bordered_surface() {
        let style = TextFieldStyle::default();
        let shell = style.shell_classes(false);
        assert!(shell.contains(color_variant(&Variant::Bordered, &Color::Natural)));
        assert!(shell.contains("h-10 px-3"));
        assert!(shell.contains("focus-within:ring-[#4B4B4B]/40"));
    }

    #[test]
    fn errors_switch_shell_to_danger() {
        let style = TextFieldStyle {
            color: Color::Primary,
            ..TextFieldStyle::default()
        };
        let shell = style.shell_classes(true);
        assert!(shell.contains(color_variant(&Variant::Bordered, &Color::Danger)));
        assert!(shell.contains("focus-within:ring-[#DE1135]/40"));
        assert!(!shell.contains("#007F8C"));
    }

    #[test]
    fn shadow_variant_adds_drop_shadow_to_card_surface() {
        let surface = field_surface(&Variant::Shadow, &Color::Info);
        assert!(surface.ends_with("shadow-md"));
        assert!(surface.starts_with(color_variant(&Variant::Base, &Color::Info)));
        assert_eq!(
            field_surface(&Variant::Outline, &Color::Info),
            color_variant(&Variant::Outline, &Color::Info)
        );
    }

    #[test]
    fn floating_labels_track_placeholder_state() {
        let inner = TextFieldStyle {
            floating: FloatingLabel::Inner,
            ..TextFieldStyle::default()
        };
        assert!(inner.label_classes().contains("peer-placeholder-shown:top-1/2"));
        assert!(inner.input_classes().contains("pt-3"));

        let stacked = TextFieldStyle::default();
        assert_eq!(stacked.label_classes(), "font-medium text-base");
        assert!(!stacked.input_classes().contains("pt-3"));
    }
}

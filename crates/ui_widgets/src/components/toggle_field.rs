use super::*;

fn track_size(size: &Size) -> &str {
    match size {
        Size::ExtraSmall => "h-4 w-7",
        Size::Small => "h-5 w-9",
        Size::Medium => "h-6 w-11",
        Size::Large => "h-7 w-[52px]",
        Size::ExtraLarge => "h-8 w-[60px]",
        Size::Custom(raw) => raw.as_str(),
    }
}

/// Thumb footprint and its travel when checked.
fn thumb_size(size: &Size) -> (&'static str, &'static str) {
    match size {
        Size::ExtraSmall => ("size-3", "translate-x-3 rtl:-translate-x-3"),
        Size::Small | Size::Custom(_) => ("size-4", "translate-x-4 rtl:-translate-x-4"),
        Size::Medium => ("size-5", "translate-x-5 rtl:-translate-x-5"),
        Size::Large => ("size-6", "translate-x-6 rtl:-translate-x-6"),
        Size::ExtraLarge => ("size-7", "translate-x-7 rtl:-translate-x-7"),
    }
}

const TRACK_OFF: &str = "bg-[#DDDDDD] dark:bg-[#4B4B4B]";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved style attributes of a toggle field.
pub struct ToggleFieldStyle {
    /// Track color while checked.
    pub color: Color,
    /// Track and thumb size step.
    pub size: Size,
}

impl Default for ToggleFieldStyle {
    fn default() -> Self {
        Self {
            color: Color::Primary,
            size: Size::Small,
        }
    }
}

impl ToggleFieldStyle {
    /// Class string for the switch track.
    pub fn track_classes(&self, checked: bool, invalid: bool) -> String {
        ClassList::new()
            .with("relative inline-flex shrink-0 cursor-pointer items-center rounded-full p-0.5 transition-colors duration-200 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50")
            .with(track_size(&self.size))
            .with(if checked { fill_color(&self.color) } else { TRACK_OFF })
            .with_if(invalid, "ring-2 ring-[#DE1135] dark:ring-[#FC7F79]")
            .build()
    }

    /// Class string for the sliding thumb.
    pub fn thumb_classes(&self, checked: bool) -> String {
        let (footprint, travel) = thumb_size(&self.size);
        ClassList::new()
            .with("pointer-events-none block rounded-full bg-white shadow transition-transform duration-200")
            .with(footprint)
            .with(if checked { travel } else { "translate-x-0" })
            .build()
    }
}

#[component]
/// Labeled on/off switch with `role="switch"` semantics.
pub fn ToggleField(
    #[prop(optional, into)] color: Option<Color>,
    #[prop(optional, into)] size: Option<Size>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    /// Initial and externally driven state; clicks update the widget's own copy.
    #[prop(optional, into)]
    checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] errors: MaybeSignal<Vec<String>>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    /// Receives the new state after each toggle.
    #[prop(optional)]
    on_toggle: Option<Callback<bool>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    let defaults = ToggleFieldStyle::default();
    let style = store_value(ToggleFieldStyle {
        color: pick(color, None, defaults.color),
        size: pick(size, theme.size.as_ref(), defaults.size),
    });

    let is_on = create_rw_signal(checked.get_untracked());
    create_effect(move |_| is_on.set(checked.get()));
    let errors = Signal::derive(move || errors.get());
    let invalid = Signal::derive(move || errors.with(|errors| !errors.is_empty()));

    let control_id = id.unwrap_or_else(|| next_id("toggle-field"));
    let label_id = format!("{control_id}-label");
    let has_label = label.is_some();

    let handle_toggle = move || {
        if disabled.get_untracked() {
            return;
        }
        let next = !is_on.get_untracked();
        is_on.set(next);
        if let Some(on_toggle) = on_toggle.as_ref() {
            on_toggle.call(next);
        }
    };

    view! {
        <div
            class=merge_layout_class("flex flex-col gap-1".to_string(), layout_class)
            data-ui-primitive="true"
            data-ui-kind="toggle-field"
            data-ui-color=style.with_value(|style| style.color.to_string())
            data-ui-selected=move || bool_token(is_on.get())
            data-ui-invalid=move || bool_token(invalid.get())
        >
            <div class="flex items-start gap-3">
                <button
                    type="button"
                    id=control_id.clone()
                    name=name
                    role="switch"
                    class=move || style.with_value(|style| style.track_classes(is_on.get(), invalid.get()))
                    aria-checked=move || is_on.get().to_string()
                    aria-labelledby=has_label.then(|| label_id.clone())
                    aria-invalid=move || bool_token(invalid.get())
                    disabled=move || disabled.get()
                    on:click=move |_| handle_toggle()
                    on:keydown=move |ev: KeyboardEvent| match ev.key().as_str() {
                        " " | "Enter" => {
                            ev.prevent_default();
                            handle_toggle();
                        }
                        _ => {}
                    }
                >
                    <span
                        class=move || style.with_value(|style| style.thumb_classes(is_on.get()))
                        data-ui-slot="thumb"
                    ></span>
                </button>
                <div class="flex flex-col">
                    {label
                        .map(|label| {
                            view! {
                                <label id=label_id.clone() for=control_id.clone() class="text-sm font-medium">
                                    {label}
                                </label>
                            }
                        })}
                    {description
                        .map(|description| {
                            view! { <p class="text-xs opacity-70">{description}</p> }
                        })}
                </div>
            </div>
            {move || {
                errors
                    .get()
                    .into_iter()
                    .map(|message| {
                        view! {
                            <p class="text-xs text-[#DE1135] dark:text-[#FC7F79]" role="alert">
                                {message}
                            </p>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn track_takes_color_only_while_checked() {
        let style = ToggleFieldStyle::default();
        let on = style.track_classes(true, false);
        assert!(on.contains(fill_color(&Color::Primary)));
        assert!(on.contains("h-5 w-9"));

        let off = style.track_classes(false, false);
        assert!(off.contains(TRACK_OFF));
        assert!(!off.contains(fill_color(&Color::Primary)));
    }

    #[test]
    fn thumb_travels_by_size_table() {
        let style = ToggleFieldStyle {
            size: Size::Large,
            ..ToggleFieldStyle::default()
        };
        assert!(style.thumb_classes(true).contains("size-6 translate-x-6"));
        assert!(style.thumb_classes(false).ends_with("size-6 translate-x-0"));
    }

    #[test]
    fn errors_ring_the_track() {
        let style = ToggleFieldStyle::default();
        assert!(style.track_classes(false, true).contains("ring-[#DE1135]"));
        assert_eq!(thumb_size(&Size::from("h-3 w-12")).0, "size-4");
    }
}

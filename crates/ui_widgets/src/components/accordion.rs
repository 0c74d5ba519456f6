use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Where an accordion trigger draws its chevron.
pub enum ChevronPosition {
    /// After the title.
    #[default]
    Right,
    /// Before the title.
    Left,
    /// No chevron.
    Hidden,
}

impl ChevronPosition {
    fn token(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Hidden => "hidden",
        }
    }
}

fn media_size(size: &Size) -> &str {
    match size {
        Size::ExtraSmall => "size-6",
        Size::Small => "size-8",
        Size::Medium => "size-10",
        Size::Large => "size-12",
        Size::ExtraLarge => "size-14",
        Size::Custom(raw) => raw.as_str(),
    }
}

const TRIGGER_ACTIVE: &str = "active-accordion-button";
const CONTENT_ACTIVE: &str = "active";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved style attributes of an accordion and its items.
pub struct AccordionStyle {
    /// Surface treatment.
    pub variant: Variant,
    /// Palette color.
    pub color: Color,
    /// Gap between items.
    pub space: Scale,
    /// Padding of the trigger and content.
    pub padding: Scale,
    /// Corner radius.
    pub rounded: Rounded,
    /// Size of item images.
    pub media_size: Size,
    /// Chevron placement on every trigger.
    pub chevron: ChevronPosition,
}

impl Default for AccordionStyle {
    fn default() -> Self {
        Self {
            variant: Variant::Default,
            color: Color::Natural,
            space: Scale::None,
            padding: Scale::Small,
            rounded: Rounded::None,
            media_size: Size::Small,
            chevron: ChevronPosition::Right,
        }
    }
}

impl AccordionStyle {
    /// Class string for the accordion container.
    pub fn list_classes(&self) -> String {
        ClassList::new()
            .with("flex w-full flex-col")
            .with(space_class(&self.space))
            .build()
    }

    /// Class string for one item.
    pub fn item_classes(&self) -> String {
        ClassList::new()
            .with("overflow-hidden")
            .with(color_variant(&self.variant, &self.color))
            .with(rounded_class(&self.rounded))
            .build()
    }

    /// Class string for an item trigger. Open items carry `active-accordion-button`.
    pub fn trigger_classes(&self, open: bool) -> String {
        let base = ClassList::new()
            .with("flex w-full items-center gap-3 text-start font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-inset")
            .with(padding_class(&self.padding))
            .build();
        toggle_class(&base, open, TRIGGER_ACTIVE)
    }

    /// Class string for the collapsible content wrapper. Open items carry `active`.
    pub fn content_classes(&self, open: bool) -> String {
        let rows = if open { "grid-rows-[1fr]" } else { "grid-rows-[0fr]" };
        let base = format!("grid transition-[grid-template-rows] duration-300 ease-in-out {rows}");
        toggle_class(&base, open, CONTENT_ACTIVE)
    }

    /// Class string for the padded content body.
    pub fn body_classes(&self) -> String {
        ClassList::new()
            .with(padding_class(&self.padding))
            .with("pt-0")
            .build()
    }

    /// Class string for an item image.
    pub fn media_classes(&self) -> String {
        ClassList::new()
            .with("shrink-0 rounded-full object-cover")
            .with(media_size(&self.media_size))
            .build()
    }
}

#[derive(Clone, Copy)]
struct AccordionContext {
    state: RwSignal<OpenSet>,
    style: StoredValue<AccordionStyle>,
}

#[component]
/// Vertically stacked disclosure items sharing one open set.
pub fn Accordion(
    #[prop(optional, into)] variant: Option<Variant>,
    #[prop(optional, into)] color: Option<Color>,
    #[prop(optional, into)] space: Option<Scale>,
    #[prop(optional, into)] padding: Option<Scale>,
    #[prop(optional, into)] rounded: Option<Rounded>,
    #[prop(optional, into)] media_size: Option<Size>,
    #[prop(optional)] chevron: ChevronPosition,
    /// Allow several items open at once.
    #[prop(optional)]
    multiple: bool,
    /// Ids of items open on first render.
    #[prop(optional, into)]
    initially_open: Vec<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let defaults = AccordionStyle::default();
    let style = AccordionStyle {
        variant: pick(variant, theme.variant.as_ref(), defaults.variant),
        color: pick(color, theme.color.as_ref(), defaults.color),
        space: pick(space, None, defaults.space),
        padding: pick(padding, theme.padding.as_ref(), defaults.padding),
        rounded: pick(rounded, None, defaults.rounded),
        media_size: pick(media_size, None, defaults.media_size),
        chevron,
    };
    let list_class = merge_layout_class(style.list_classes(), layout_class);
    let variant_token = style.variant.to_string();

    provide_context(AccordionContext {
        state: create_rw_signal(OpenSet::new(multiple, initially_open)),
        style: store_value(style),
    });

    view! {
        <div
            class=list_class
            data-ui-primitive="true"
            data-ui-kind="accordion"
            data-ui-variant=variant_token
            data-ui-chevron=chevron.token()
            data-ui-multiple=bool_token(multiple)
        >
            {children()}
        </div>
    }
}

#[component]
/// One collapsible section of an [`Accordion`].
pub fn AccordionItem(
    /// Key in the accordion's open set; also prefixes the element ids.
    #[prop(into)]
    id: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] icon: Option<IconName>,
    /// Image URL shown before the title.
    #[prop(optional, into)]
    image: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let context = use_context::<AccordionContext>().unwrap_or_else(|| {
        logging::warn!("AccordionItem `{id}` rendered outside an Accordion; using standalone state");
        AccordionContext {
            state: create_rw_signal(OpenSet::new(true, Vec::new())),
            style: store_value(AccordionStyle::default()),
        }
    });
    let AccordionContext { state, style } = context;

    let item_id = store_value(id.clone());
    let is_open = Signal::derive(move || item_id.with_value(|id| state.with(|open| open.is_open(id))));
    let trigger_id = format!("{id}-trigger");
    let panel_id = format!("{id}-panel");
    let chevron = style.with_value(|style| style.chevron);
    let chevron_class = Signal::derive(move || {
        if is_open.get() {
            "rotate-180 transition-transform duration-300".to_string()
        } else {
            "transition-transform duration-300".to_string()
        }
    });
    let render_chevron = move || {
        view! { <Icon icon=IconName::ChevronDown size=IconSize::Sm state_class=chevron_class /> }
    };

    view! {
        <div
            class=merge_layout_class(style.with_value(AccordionStyle::item_classes), layout_class)
            data-ui-slot="accordion-item"
            data-ui-state=move || if is_open.get() { "open" } else { "closed" }
        >
            <button
                type="button"
                id=trigger_id.clone()
                class=move || style.with_value(|style| style.trigger_classes(is_open.get()))
                aria-expanded=move || bool_token(is_open.get())
                aria-controls=panel_id.clone()
                on:click=move |_| {
                    item_id.with_value(|id| state.update(|open| {
                        open.toggle(id);
                    }));
                }
            >
                {(chevron == ChevronPosition::Left).then(render_chevron)}
                {icon.map(|icon| view! { <Icon icon size=IconSize::Md /> })}
                {image
                    .map(|src| {
                        view! {
                            <img
                                class=style.with_value(AccordionStyle::media_classes)
                                src=src
                                alt=""
                            />
                        }
                    })}
                <span class="flex flex-1 flex-col">
                    <span>{title}</span>
                    {description
                        .map(|description| {
                            view! { <span class="text-sm font-normal opacity-70">{description}</span> }
                        })}
                </span>
                {(chevron == ChevronPosition::Right).then(render_chevron)}
            </button>
            <div
                id=panel_id
                role="region"
                aria-labelledby=trigger_id
                class=move || style.with_value(|style| style.content_classes(is_open.get()))
            >
                <div class="overflow-hidden">
                    <div class=style.with_value(AccordionStyle::body_classes)>{children()}</div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn has_class(classes: &str, class: &str) -> bool {
        classes.split_whitespace().any(|candidate| candidate == class)
    }

    #[test]
    fn opening_marks_trigger_and_content_active() {
        let style = AccordionStyle::default();
        let mut state = OpenSet::new(false, Vec::new());

        assert!(state.toggle("shipping"));
        let open = state.is_open("shipping");
        assert!(has_class(&style.trigger_classes(open), "active-accordion-button"));
        assert!(has_class(&style.content_classes(open), "active"));
        assert!(has_class(&style.content_classes(open), "grid-rows-[1fr]"));

        assert!(!state.toggle("shipping"));
        let open = state.is_open("shipping");
        assert!(!has_class(&style.trigger_classes(open), "active-accordion-button"));
        assert!(!has_class(&style.content_classes(open), "active"));
        assert!(has_class(&style.content_classes(open), "grid-rows-[0fr]"));
    }

    #[test]
    fn items_follow_variant_and_radius() {
        let style = AccordionStyle {
            variant: Variant::Outline,
            color: Color::Secondary,
            rounded: Rounded::Large,
            ..AccordionStyle::default()
        };
        assert_eq!(
            style.item_classes(),
            format!(
                "overflow-hidden {} rounded-lg",
                color_variant(&Variant::Outline, &Color::Secondary)
            )
        );
    }

    #[test]
    fn media_uses_size_table() {
        let style = AccordionStyle {
            media_size: Size::Large,
            ..AccordionStyle::default()
        };
        assert!(style.media_classes().ends_with("size-12"));
        assert_eq!(AccordionStyle::default().list_classes(), "flex w-full flex-col gap-0");
    }
}

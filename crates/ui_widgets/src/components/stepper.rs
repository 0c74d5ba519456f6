use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Progress state of one step.
pub enum StepStatus {
    /// Finished; later separators take the color.
    Completed,
    /// Active step.
    Current,
    /// Active step waiting on work.
    Loading,
    /// Aborted.
    Canceled,
    /// Not reached yet.
    #[default]
    Pending,
}

impl StepStatus {
    fn token(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Current => "current",
            Self::Loading => "loading",
            Self::Canceled => "canceled",
            Self::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry of a [`Stepper`].
pub struct StepperItem {
    /// Step title.
    pub title: String,
    /// Optional secondary line.
    pub description: Option<String>,
    /// Progress state.
    pub status: StepStatus,
}

impl StepperItem {
    /// Builds a step without a description.
    pub fn new(title: impl Into<String>, status: StepStatus) -> Self {
        Self {
            title: title.into(),
            description: None,
            status,
        }
    }

    /// Adds a description line.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

fn bubble_size(size: &Size) -> &str {
    match size {
        Size::ExtraSmall => "size-6 text-[10px]",
        Size::Small => "size-7 text-xs",
        Size::Medium => "size-8 text-sm",
        Size::Large => "size-10 text-base",
        Size::ExtraLarge => "size-12 text-lg",
        Size::Custom(raw) => raw.as_str(),
    }
}

const PENDING: &str = "bg-transparent text-[#868686] border-[#DDDDDD] dark:text-[#A6A6A6] dark:border-[#4B4B4B]";
const SEPARATOR_IDLE: &str = "bg-[#DDDDDD] dark:bg-[#4B4B4B]";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved style attributes of a stepper.
pub struct StepperStyle {
    /// Layout axis of the steps.
    pub orientation: Orientation,
    /// Color of completed and active steps.
    pub color: Color,
    /// Bubble size.
    pub size: Size,
    /// Bubble border width.
    pub border: Scale,
    /// Gap between a bubble and its text.
    pub space: Scale,
}

impl Default for StepperStyle {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            color: Color::Natural,
            size: Size::Medium,
            border: Scale::ExtraSmall,
            space: Scale::Medium,
        }
    }
}

impl StepperStyle {
    /// Class string for the `<ol>`.
    pub fn list_classes(&self) -> String {
        match self.orientation {
            Orientation::Horizontal => "flex w-full items-start".to_string(),
            Orientation::Vertical => "flex flex-col".to_string(),
        }
    }

    /// Class string for one step's bubble and text row.
    pub fn item_classes(&self) -> String {
        let axis = match self.orientation {
            Orientation::Horizontal => "flex flex-col items-center text-center",
            Orientation::Vertical => "flex flex-row items-start",
        };
        ClassList::new()
            .with(axis)
            .with(space_class(&self.space))
            .build()
    }

    /// Class string for a step bubble.
    pub fn bubble_classes(&self, status: StepStatus) -> String {
        let tone = match status {
            StepStatus::Completed => fill_color(&self.color).to_string() + " text-white dark:text-black border-transparent",
            StepStatus::Current | StepStatus::Loading => {
                color_variant(&Variant::Outline, &self.color).to_string()
            }
            StepStatus::Canceled => {
                format!("{} text-white dark:text-black border-transparent", fill_color(&Color::Danger))
            }
            StepStatus::Pending => PENDING.to_string(),
        };
        ClassList::new()
            .with("flex shrink-0 items-center justify-center rounded-full font-medium transition-colors")
            .with(bubble_size(&self.size))
            .with(border_class(&self.border))
            .with(tone)
            .build()
    }

    /// Class string for the separator following a step with status `previous`.
    pub fn separator_classes(&self, previous: StepStatus) -> String {
        let axis = match self.orientation {
            Orientation::Horizontal => "mx-2 mt-4 h-0.5 flex-1 rounded-full",
            Orientation::Vertical => "my-1 ms-4 min-h-6 w-0.5 -translate-x-1/2 rounded-full",
        };
        let tone = if previous == StepStatus::Completed {
            fill_color(&self.color)
        } else {
            SEPARATOR_IDLE
        };
        ClassList::new().with(axis).with(tone).build()
    }
}

#[component]
/// Numbered progress indicator across a sequence of steps.
pub fn Stepper(
    #[prop(into)] steps: MaybeSignal<Vec<StepperItem>>,
    #[prop(optional)] orientation: Orientation,
    #[prop(optional, into)] color: Option<Color>,
    #[prop(optional, into)] size: Option<Size>,
    #[prop(optional, into)] border: Option<Scale>,
    #[prop(optional, into)] space: Option<Scale>,
    /// Makes bubbles clickable; receives the step index.
    #[prop(optional)]
    on_select: Option<Callback<usize>>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    let defaults = StepperStyle::default();
    let style = store_value(StepperStyle {
        orientation,
        color: pick(color, theme.color.as_ref(), defaults.color),
        size: pick(size, theme.size.as_ref(), defaults.size),
        border: pick(border, theme.border.as_ref(), defaults.border),
        space: pick(space, None, defaults.space),
    });
    let glyph_size = style.with_value(|style| icon_size(&style.size));

    let render_steps = move || {
        let steps = steps.get();
        let count = steps.len();
        let mut previous: Option<StepStatus> = None;
        let mut views = Vec::with_capacity(count * 2);
        for (index, step) in steps.into_iter().enumerate() {
            if let Some(previous) = previous {
                views.push(
                    view! {
                        <li
                            class=style.with_value(|style| style.separator_classes(previous))
                            aria-hidden="true"
                            data-ui-slot="separator"
                        ></li>
                    }
                    .into_view(),
                );
            }
            previous = Some(step.status);

            let status = step.status;
            let marker = match status {
                StepStatus::Completed => view! { <Icon icon=IconName::Checkmark size=glyph_size /> }.into_view(),
                StepStatus::Canceled => view! { <Icon icon=IconName::Dismiss size=glyph_size /> }.into_view(),
                StepStatus::Loading => view! {
                    <Icon icon=IconName::ArrowSync size=glyph_size state_class="animate-spin" />
                }
                .into_view(),
                StepStatus::Current | StepStatus::Pending => (index + 1).to_string().into_view(),
            };
            let is_current = matches!(status, StepStatus::Current | StepStatus::Loading);

            views.push(
                view! {
                    <li
                        class=style.with_value(StepperStyle::item_classes)
                        data-ui-slot="step"
                        data-ui-status=status.token()
                        aria-current=is_current.then_some("step")
                    >
                        <button
                            type="button"
                            class=style.with_value(|style| style.bubble_classes(status))
                            disabled=on_select.is_none()
                            aria-label=format!("Step {} of {count}", index + 1)
                            on:click=move |_| {
                                if let Some(on_select) = on_select.as_ref() {
                                    on_select.call(index);
                                }
                            }
                        >
                            {marker}
                        </button>
                        <div class="flex flex-col">
                            <span class="text-sm font-semibold">{step.title}</span>
                            {step
                                .description
                                .map(|description| {
                                    view! { <span class="text-xs opacity-70">{description}</span> }
                                })}
                        </div>
                    </li>
                }
                .into_view(),
            );
        }
        views.collect_view()
    };

    view! {
        <ol
            class=merge_layout_class(style.with_value(StepperStyle::list_classes), layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="stepper"
            data-ui-orientation=orientation.token()
        >
            {render_steps}
        </ol>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn separator_takes_color_after_completed_step() {
        let style = StepperStyle {
            color: Color::Success,
            ..StepperStyle::default()
        };
        assert!(style
            .separator_classes(StepStatus::Completed)
            .ends_with(fill_color(&Color::Success)));
        assert!(style
            .separator_classes(StepStatus::Current)
            .ends_with(SEPARATOR_IDLE));
    }

    #[test]
    fn bubble_tone_follows_status() {
        let style = StepperStyle {
            color: Color::Primary,
            ..StepperStyle::default()
        };
        assert!(style
            .bubble_classes(StepStatus::Completed)
            .contains(fill_color(&Color::Primary)));
        assert!(style
            .bubble_classes(StepStatus::Loading)
            .contains(color_variant(&Variant::Outline, &Color::Primary)));
        assert!(style
            .bubble_classes(StepStatus::Canceled)
            .contains(fill_color(&Color::Danger)));
        assert!(style.bubble_classes(StepStatus::Pending).contains(PENDING));
    }

    #[test]
    fn vertical_layout_stacks_steps() {
        let style = StepperStyle {
            orientation: Orientation::Vertical,
            ..StepperStyle::default()
        };
        assert_eq!(style.list_classes(), "flex flex-col");
        assert_eq!(style.item_classes(), "flex flex-row items-start gap-3");
        assert!(style.separator_classes(StepStatus::Pending).contains("w-0.5"));
    }

    #[test]
    fn items_build_with_descriptions() {
        let item = StepperItem::new("Shipping", StepStatus::Current).with_description("Address");
        assert_eq!(item.description.as_deref(), Some("Address"));
        assert_eq!(StepStatus::default(), StepStatus::Pending);
    }
}

//! One demo per widget, addressable by slug.

use leptos::*;
use ui_widgets::prelude::*;

/// Slug and title of every showcase section, in page order.
pub const SECTIONS: &[(&str, &str)] = &[
    ("accordion", "Accordion"),
    ("avatar", "Avatar"),
    ("badge", "Badge"),
    ("banner", "Banner"),
    ("blockquote", "Blockquote"),
    ("button", "Button"),
    ("device-mockup", "Device mockup"),
    ("fieldset", "Fieldset"),
    ("gallery", "Gallery"),
    ("mega-menu", "Mega menu"),
    ("speed-dial", "Speed dial"),
    ("stepper", "Stepper"),
    ("text-field", "Text field"),
    ("toggle-field", "Toggle field"),
];

/// Title of the section named `slug`.
pub fn section_title(slug: &str) -> Option<&'static str> {
    SECTIONS
        .iter()
        .find(|(candidate, _)| *candidate == slug)
        .map(|(_, title)| *title)
}

pub(crate) fn render_section(slug: &str) -> View {
    match slug {
        "accordion" => view! { <AccordionDemo /> }.into_view(),
        "avatar" => view! { <AvatarDemo /> }.into_view(),
        "badge" => view! { <BadgeDemo /> }.into_view(),
        "banner" => view! { <BannerDemo /> }.into_view(),
        "blockquote" => view! { <BlockquoteDemo /> }.into_view(),
        "button" => view! { <ButtonDemo /> }.into_view(),
        "device-mockup" => view! { <DeviceMockupDemo /> }.into_view(),
        "fieldset" => view! { <FieldsetDemo /> }.into_view(),
        "gallery" => view! { <GalleryDemo /> }.into_view(),
        "mega-menu" => view! { <MegaMenuDemo /> }.into_view(),
        "speed-dial" => view! { <SpeedDialDemo /> }.into_view(),
        "stepper" => view! { <StepperDemo /> }.into_view(),
        "text-field" => view! { <TextFieldDemo /> }.into_view(),
        "toggle-field" => view! { <ToggleFieldDemo /> }.into_view(),
        _ => ().into_view(),
    }
}

#[component]
fn AccordionDemo() -> impl IntoView {
    view! {
        <Accordion variant="bordered" rounded=Rounded::Medium space="small" initially_open=vec!["shipping".to_string()]>
            <AccordionItem id="shipping" title="Shipping" description="Delivery times and costs" icon=IconName::Info>
                "Orders ship within two business days."
            </AccordionItem>
            <AccordionItem id="returns" title="Returns" image="https://i.pravatar.cc/64?img=5">
                "Returns are accepted for thirty days."
            </AccordionItem>
            <AccordionItem id="warranty" title="Warranty">
                "Hardware carries a one year warranty."
            </AccordionItem>
        </Accordion>
        <Accordion multiple=true chevron=ChevronPosition::Left variant="outline" color="secondary">
            <AccordionItem id="first" title="Open several at once">
                "Items in this accordion stay open independently."
            </AccordionItem>
            <AccordionItem id="second" title="Chevron on the left">
                "The chevron sits before the title."
            </AccordionItem>
        </Accordion>
    }
}

#[component]
fn AvatarDemo() -> impl IntoView {
    view! {
        <div class="flex items-center gap-4">
            <Avatar src="https://i.pravatar.cc/128?img=12" alt="Profile photo" size="medium" status=PresenceStatus::Online />
            <Avatar name="Ada Lovelace" color="misc" size="large" status=PresenceStatus::Busy />
            <Avatar name="grace hopper" rounded="large" border="small" shadow="medium" />
            <AvatarGroup space="medium">
                <Avatar name="Ana Ruiz" color="success" border="small" />
                <Avatar name="Ben Ito" color="info" border="small" />
                <Avatar name="Cy Park" color="dawn" border="small" />
            </AvatarGroup>
        </div>
    }
}

#[component]
fn BadgeDemo() -> impl IntoView {
    let dismissed = create_rw_signal(0_u32);

    view! {
        <div class="flex flex-wrap items-center gap-3">
            <Badge>"Default"</Badge>
            <Badge variant="outline" color="success" indicator=BadgeIndicator::Left>"Active"</Badge>
            <Badge variant="bordered" color="warning" size="small" icon=IconName::Warning>"Review"</Badge>
            <Badge color="danger" circle=true>"9"</Badge>
            <Badge variant="shadow" color="info" indicator=BadgeIndicator::TopRight pulse=true>"Live"</Badge>
            <Badge
                variant="gradient"
                color="misc"
                dismissible=true
                on_dismiss=Callback::new(move |_| dismissed.update(|count| *count += 1))
            >
                "Dismiss me"
            </Badge>
            <span class="text-sm opacity-70">{move || format!("Dismissed: {}", dismissed.get())}</span>
        </div>
    }
}

#[component]
fn BannerDemo() -> impl IntoView {
    view! {
        <Banner fixed=false dismissible=true color="secondary" border="small" on_dismiss=Callback::new(|_| logging::log!("banner dismissed"))>
            <Icon icon=IconName::Info size=IconSize::Md />
            <span>"New widgets are available in this release."</span>
        </Banner>
        <Banner fixed=false position=BannerPosition::Bottom variant="bordered" color="warning" border="medium">
            <span>"Maintenance is scheduled for Sunday."</span>
        </Banner>
    }
}

#[component]
fn BlockquoteDemo() -> impl IntoView {
    view! {
        <Blockquote
            variant="bordered"
            color="primary"
            caption_name="Ada Lovelace"
            caption_position="Analyst"
            caption_image="https://i.pravatar.cc/64?img=47"
        >
            "The engine might compose elaborate pieces of music of any degree of complexity."
        </Blockquote>
        <Blockquote border_side=BorderSide::End quote_icon=false variant="transparent" color="dawn" size="small">
            "Simplicity is prerequisite for reliability."
        </Blockquote>
    }
}

#[component]
fn ButtonDemo() -> impl IntoView {
    let clicks = create_rw_signal(0_u32);

    view! {
        <div class="flex flex-wrap items-center gap-3">
            <Button on_click=Callback::new(move |_| clicks.update(|count| *count += 1))>
                {move || format!("Clicked {}", clicks.get())}
            </Button>
            <Button variant="outline" color="danger" icon=IconName::Dismiss>"Delete"</Button>
            <Button variant="shadow" color="success" right_icon=IconName::ChevronRight>"Continue"</Button>
            <Button variant="gradient" color="misc" size="large">"Upgrade"</Button>
            <Button circle=true color="info" icon=IconName::Search aria_label="Search" />
            <Button disabled=true>"Disabled"</Button>
            <ButtonLink href="#button" variant="transparent" color="secondary">"Link"</ButtonLink>
            <ButtonGroup color="primary">
                <Button variant="outline" color="primary" rounded="none">"Day"</Button>
                <Button variant="outline" color="primary" rounded="none">"Week"</Button>
                <Button variant="outline" color="primary" rounded="none">"Month"</Button>
            </ButtonGroup>
        </div>
        <Button full_width=true size="h-12 px-8 text-base">"Custom size passes through"</Button>
    }
}

#[component]
fn DeviceMockupDemo() -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-end gap-8">
            <DeviceMockup device=Device::Iphone src="https://picsum.photos/seed/phone/272/572" alt="Phone screenshot" />
            <DeviceMockup device=Device::Watch color="silver">
                <div class="flex h-full items-center justify-center text-2xl font-semibold">"10:09"</div>
            </DeviceMockup>
            <DeviceMockup device=Device::Laptop color="natural" src="https://picsum.photos/seed/laptop/512/278" alt="Laptop screenshot" />
        </div>
    }
}

#[component]
fn FieldsetDemo() -> impl IntoView {
    let locked = create_rw_signal(false);

    view! {
        <Fieldset legend="Billing" variant="bordered" disabled=locked>
            <TextField label="Card holder" placeholder="Name on card" />
            <TextField label="Postal code" input_type="text" />
        </Fieldset>
        <ToggleField label="Lock billing fields" checked=locked on_toggle=Callback::new(move |value| locked.set(value)) />
    }
}

#[component]
fn GalleryDemo() -> impl IntoView {
    let images = (1..=6)
        .map(|index| format!("https://picsum.photos/seed/gallery{index}/400/{}", 260 + index * 30))
        .collect::<Vec<_>>();
    let grid = images
        .iter()
        .map(|src| view! { <GalleryMedia src=src.clone() alt="Gallery image" /> })
        .collect_view();
    let masonry = images
        .into_iter()
        .map(|src| view! { <GalleryMedia src=src alt="Gallery image" shadow="small" /> })
        .collect_view();

    view! {
        <Gallery cols=3 animation=GalleryAnimation::Scale>{grid}</Gallery>
        <Gallery gallery_type=GalleryType::Masonry cols=4 gap="medium" animation=GalleryAnimation::Blur>
            {masonry}
        </Gallery>
    }
}

#[component]
fn MegaMenuDemo() -> impl IntoView {
    view! {
        <div class="flex gap-6">
            <MegaMenu trigger_label="Products" variant="base" grid_cols=3 width=MenuWidth::Large>
                <a href="#mega-menu" class="flex flex-col">
                    <span class="font-semibold">"Analytics"</span>
                    <span class="text-sm opacity-70">"Understand your traffic"</span>
                </a>
                <a href="#mega-menu" class="flex flex-col">
                    <span class="font-semibold">"Automation"</span>
                    <span class="text-sm opacity-70">"Build workflows"</span>
                </a>
                <a href="#mega-menu" class="flex flex-col">
                    <span class="font-semibold">"Security"</span>
                    <span class="text-sm opacity-70">"Protect your data"</span>
                </a>
            </MegaMenu>
            <MegaMenu trigger_label="Resources" clickable=false grid_cols=2 width=MenuWidth::Medium>
                <a href="#mega-menu">"Guides"</a>
                <a href="#mega-menu">"Changelog"</a>
            </MegaMenu>
        </div>
    }
}

#[component]
fn SpeedDialDemo() -> impl IntoView {
    let last = create_rw_signal(String::new());
    let items = vec![
        SpeedDialItem::new(IconName::Share, "Share"),
        SpeedDialItem::new(IconName::Print, "Print"),
        SpeedDialItem::new(IconName::Copy, "Copy"),
        SpeedDialItem::new(IconName::Mail, "Email").with_href("mailto:hello@example.com"),
    ];
    let labels = store_value(items.iter().map(|item| item.label.clone()).collect::<Vec<_>>());

    view! {
        <p class="text-sm opacity-70">
            {move || {
                let last = last.get();
                if last.is_empty() { "Pick an action from the dial.".to_string() } else { format!("Last action: {last}") }
            }}
        </p>
        <SpeedDial
            items=items
            color="primary"
            on_select=Callback::new(move |index: usize| {
                labels.with_value(|labels| {
                    if let Some(label) = labels.get(index) {
                        last.set(label.clone());
                    }
                });
            })
        />
        <SpeedDial
            items=vec![SpeedDialItem::new(IconName::Star, "Favorite")]
            action_position=SpeedDialPosition::BottomStart
            clickable=false
            variant="outline"
        />
    }
}

#[component]
fn StepperDemo() -> impl IntoView {
    let current = create_rw_signal(1_usize);
    let titles = ["Account", "Profile", "Billing", "Confirm"];
    let steps = Signal::derive(move || {
        let current = current.get();
        titles
            .iter()
            .enumerate()
            .map(|(index, title)| {
                let status = match index.cmp(&current) {
                    std::cmp::Ordering::Less => StepStatus::Completed,
                    std::cmp::Ordering::Equal => StepStatus::Current,
                    std::cmp::Ordering::Greater => StepStatus::Pending,
                };
                StepperItem::new(*title, status)
            })
            .collect::<Vec<_>>()
    });

    view! {
        <Stepper steps=steps color="success" on_select=Callback::new(move |index| current.set(index)) aria_label="Checkout progress" />
        <Stepper
            orientation=Orientation::Vertical
            size="small"
            steps=vec![
                StepperItem::new("Uploaded", StepStatus::Completed).with_description("report.pdf"),
                StepperItem::new("Scanning", StepStatus::Loading),
                StepperItem::new("Rejected", StepStatus::Canceled).with_description("Unsupported format"),
            ]
        />
    }
}

#[component]
fn TextFieldDemo() -> impl IntoView {
    let email = create_rw_signal(String::new());
    let errors = Signal::derive(move || {
        let email = email.get();
        if email.is_empty() || email.contains('@') {
            Vec::new()
        } else {
            vec!["Enter a valid email address.".to_string()]
        }
    });

    view! {
        <div class="grid gap-6 md:grid-cols-2">
            <TextField
                label="Email"
                description="We never share it."
                placeholder="you@example.com"
                start_icon=IconName::Mail
                input_type="email"
                value=email
                errors=errors
                help_text="Used for receipts."
                on_input=Callback::new(move |value| email.set(value))
            />
            <TextField label="Search" floating=FloatingLabel::Inner end_icon=IconName::Search variant="outline" />
            <TextField label="Username" floating=FloatingLabel::Outer variant="shadow" size="large" />
            <TextField label="Locked" disabled=true value="read only".to_string() />
        </div>
    }
}

#[component]
fn ToggleFieldDemo() -> impl IntoView {
    let accepted = create_rw_signal(false);
    let errors = Signal::derive(move || {
        if accepted.get() {
            Vec::new()
        } else {
            vec!["Accept the terms to continue.".to_string()]
        }
    });

    view! {
        <div class="flex flex-col gap-4">
            <ToggleField label="Notifications" description="Send me product updates." checked=true />
            <ToggleField label="Accept terms" color="success" size="medium" errors=errors on_toggle=Callback::new(move |value| accepted.set(value)) />
            <ToggleField label="Unavailable" disabled=true size="extra_small" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_section_has_a_unique_slug() {
        let mut slugs = SECTIONS.iter().map(|(slug, _)| *slug).collect::<Vec<_>>();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), SECTIONS.len());
        assert_eq!(SECTIONS.len(), 14);
    }

    #[test]
    fn titles_resolve_by_slug() {
        assert_eq!(section_title("speed-dial"), Some("Speed dial"));
        assert_eq!(section_title("carousel"), None);
    }
}

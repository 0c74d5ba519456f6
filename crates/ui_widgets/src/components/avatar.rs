use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Presence dot shown on the avatar corner.
pub enum PresenceStatus {
    /// Available.
    Online,
    /// Signed out.
    Offline,
    /// Do not disturb.
    Busy,
    /// Idle.
    Away,
}

impl PresenceStatus {
    fn token(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Busy => "busy",
            Self::Away => "away",
        }
    }

    fn dot(self) -> &'static str {
        match self {
            Self::Online => "bg-[#0E8345] dark:bg-[#06C167]",
            Self::Offline => "bg-[#868686] dark:bg-[#A6A6A6]",
            Self::Busy => "bg-[#DE1135] dark:bg-[#FC7F79]",
            Self::Away => "bg-[#CA8D01] dark:bg-[#FDC034]",
        }
    }
}

/// Up to two uppercase initials from a display name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn avatar_size(size: &Size) -> &str {
    match size {
        Size::ExtraSmall => "size-6 text-[10px]",
        Size::Small => "size-8 text-xs",
        Size::Medium => "size-10 text-sm",
        Size::Large => "size-14 text-base",
        Size::ExtraLarge => "size-20 text-xl",
        Size::Custom(raw) => raw.as_str(),
    }
}

fn status_size(size: &Size) -> &'static str {
    match size {
        Size::ExtraSmall => "size-1.5",
        Size::Small => "size-2",
        Size::Medium | Size::Custom(_) => "size-2.5",
        Size::Large => "size-3",
        Size::ExtraLarge => "size-4",
    }
}

fn group_overlap(space: &Scale) -> &str {
    match space {
        Scale::None => "-space-x-0",
        Scale::ExtraSmall => "-space-x-1",
        Scale::Small => "-space-x-2",
        Scale::Medium => "-space-x-3",
        Scale::Large => "-space-x-4",
        Scale::ExtraLarge => "-space-x-5",
        Scale::Custom(raw) => raw.as_str(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved style attributes of an avatar.
pub struct AvatarStyle {
    /// Fallback surface color for initials.
    pub color: Color,
    /// Avatar diameter.
    pub size: Size,
    /// Corner radius.
    pub rounded: Rounded,
    /// Border width.
    pub border: Scale,
    /// Drop shadow depth.
    pub shadow: Scale,
}

impl Default for AvatarStyle {
    fn default() -> Self {
        Self {
            color: Color::Natural,
            size: Size::Small,
            rounded: Rounded::Full,
            border: Scale::None,
            shadow: Scale::None,
        }
    }
}

impl AvatarStyle {
    /// Class string for the avatar frame.
    pub fn classes(&self) -> String {
        ClassList::new()
            .with("relative inline-flex shrink-0 items-center justify-center overflow-visible font-medium")
            .with(color_variant(&Variant::Default, &self.color))
            .with(avatar_size(&self.size))
            .with(rounded_class(&self.rounded))
            .with(border_class(&self.border))
            .with("border-white dark:border-[#18181B]")
            .with(shadow_class(&self.shadow))
            .build()
    }

    /// Class string for the presence dot.
    pub fn status_classes(&self, status: PresenceStatus) -> String {
        ClassList::new()
            .with("absolute bottom-0 end-0 rounded-full ring-2 ring-white dark:ring-[#18181B]")
            .with(status_size(&self.size))
            .with(status.dot())
            .build()
    }
}

/// Accessible name: `alt`, else the person's name, else a generic label.
fn avatar_label(alt: Option<&str>, name: &str) -> String {
    [alt.unwrap_or_default(), name]
        .into_iter()
        .map(str::trim)
        .find(|label| !label.is_empty())
        .unwrap_or("Avatar")
        .to_string()
}

#[component]
/// User picture with an initials fallback and optional presence dot.
pub fn Avatar(
    /// Image URL. Initials from `name` are shown when absent.
    #[prop(optional, into)]
    src: Option<String>,
    #[prop(optional, into)] alt: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] color: Option<Color>,
    #[prop(optional, into)] size: Option<Size>,
    #[prop(optional, into)] rounded: Option<Rounded>,
    #[prop(optional, into)] border: Option<Scale>,
    #[prop(optional, into)] shadow: Option<Scale>,
    #[prop(optional)] status: Option<PresenceStatus>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    let defaults = AvatarStyle::default();
    let style = AvatarStyle {
        color: pick(color, theme.color.as_ref(), defaults.color),
        size: pick(size, None, defaults.size),
        rounded: pick(rounded, None, defaults.rounded),
        border: pick(border, None, defaults.border),
        shadow: pick(shadow, None, defaults.shadow),
    };
    let name = name.unwrap_or_default();
    let label = avatar_label(alt.as_deref(), &name);
    let image_rounded = rounded_class(&style.rounded).to_string();
    let content = match src {
        Some(src) => view! {
            <img
                class=format!("size-full object-cover {image_rounded}")
                src=src
                alt=label.clone()
            />
        }
        .into_view(),
        None => view! { <span aria-hidden="true">{initials(&name)}</span> }.into_view(),
    };

    view! {
        <span
            class=merge_layout_class(style.classes(), layout_class)
            role="img"
            aria-label=label
            data-ui-primitive="true"
            data-ui-kind="avatar"
            data-ui-status=status.map(PresenceStatus::token)
        >
            {content}
            {status
                .map(|status| {
                    view! { <span class=style.status_classes(status) data-ui-slot="status"></span> }
                })}
        </span>
    }
}

#[component]
/// Overlapping row of avatars.
pub fn AvatarGroup(
    #[prop(optional, into)] space: Option<Scale>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let space = pick(space, None, Scale::Small);
    let class = format!("flex items-center {}", group_overlap(&space));

    view! {
        <div
            class=merge_layout_class(class, layout_class)
            data-ui-primitive="true"
            data-ui-kind="avatar-group"
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
    fn initials_take_first_two_words() {
        assert_eq!(initials("ada lovelace"), "AL");
        assert_eq!(initials("  Grace  Brewster Hopper "), "GB");
        assert_eq!(initials("linus"), "L");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn label_never_renders_empty() {
        assert_eq!(avatar_label(Some("Profile photo"), "Ada Lovelace"), "Profile photo");
        assert_eq!(avatar_label(None, "Ada Lovelace"), "Ada Lovelace");
        assert_eq!(avatar_label(Some("  "), ""), "Avatar");
        assert_eq!(avatar_label(None, ""), "Avatar");
    }

    #[test]
    fn default_avatar_is_small_and_round() {
        let classes = AvatarStyle::default().classes();
        assert!(classes.contains("size-8 text-xs"));
        assert!(classes.contains("rounded-full"));
        assert!(classes.contains("border-0"));
    }

    #[test]
    fn status_dot_uses_presence_color() {
        let style = AvatarStyle {
            size: Size::Large,
            ..AvatarStyle::default()
        };
        let dot = style.status_classes(PresenceStatus::Busy);
        assert!(dot.contains("size-3"));
        assert!(dot.ends_with("bg-[#DE1135] dark:bg-[#FC7F79]"));
    }

    #[test]
    fn group_overlap_follows_space() {
        assert_eq!(group_overlap(&Scale::Small), "-space-x-2");
        assert_eq!(group_overlap(&Scale::from("-space-x-6")), "-space-x-6");
    }
}

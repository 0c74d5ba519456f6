use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Layout strategy of a gallery.
pub enum GalleryType {
    /// Uniform grid rows.
    #[default]
    Default,
    /// CSS columns; items keep their natural height.
    Masonry,
}

impl GalleryType {
    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Masonry => "masonry",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Hover effect applied to every media item in a gallery.
pub enum GalleryAnimation {
    /// Static.
    #[default]
    None,
    /// Zoom in on hover.
    Scale,
    /// Blur on hover.
    Blur,
}

impl GalleryAnimation {
    fn classes(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Scale => "transition-transform duration-300 ease-in-out hover:scale-105",
            Self::Blur => "transition duration-300 ease-in-out hover:blur-sm",
        }
    }
}

const MAX_COLS: u8 = 6;

fn grid_cols(cols: u8) -> &'static str {
    match cols {
        0 | 1 => "grid-cols-1",
        2 => "grid-cols-2",
        3 => "grid-cols-2 md:grid-cols-3",
        4 => "grid-cols-2 md:grid-cols-4",
        5 => "grid-cols-2 md:grid-cols-3 lg:grid-cols-5",
        _ => "grid-cols-2 md:grid-cols-3 lg:grid-cols-6",
    }
}

fn masonry_cols(cols: u8) -> &'static str {
    match cols {
        0 | 1 => "columns-1",
        2 => "columns-2",
        3 => "columns-2 md:columns-3",
        4 => "columns-2 md:columns-4",
        5 => "columns-2 md:columns-3 lg:columns-5",
        _ => "columns-2 md:columns-3 lg:columns-6",
    }
}

/// Vertical spacing between stacked masonry items, matching the column gap.
fn masonry_item_space(gap: &Scale) -> &'static str {
    match gap {
        Scale::None => "mb-0",
        Scale::ExtraSmall => "mb-1",
        Scale::Small => "mb-2",
        Scale::Medium => "mb-3",
        Scale::Large => "mb-4",
        Scale::ExtraLarge => "mb-5",
        Scale::Custom(_) => "",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved style attributes of a gallery.
pub struct GalleryStyle {
    /// Grid or masonry.
    pub gallery_type: GalleryType,
    /// Column count at the widest breakpoint, between 1 and 6.
    pub cols: u8,
    /// Gap between items.
    pub gap: Scale,
    /// Hover effect for media items.
    pub animation: GalleryAnimation,
}

impl Default for GalleryStyle {
    fn default() -> Self {
        Self {
            gallery_type: GalleryType::Default,
            cols: 3,
            gap: Scale::Small,
            animation: GalleryAnimation::None,
        }
    }
}

impl GalleryStyle {
    /// Class string for the gallery container.
    pub fn classes(&self) -> String {
        let cols = self.cols.clamp(1, MAX_COLS);
        match self.gallery_type {
            GalleryType::Default => ClassList::new()
                .with("grid")
                .with(grid_cols(cols))
                .with(space_class(&self.gap))
                .build(),
            GalleryType::Masonry => ClassList::new()
                .with(masonry_cols(cols))
                .with(space_class(&self.gap))
                .build(),
        }
    }

    /// Extra classes for each media item wrapper.
    pub fn item_classes(&self) -> &'static str {
        match self.gallery_type {
            GalleryType::Default => "",
            GalleryType::Masonry => masonry_item_space(&self.gap),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct GalleryContext {
    item_class: &'static str,
    animation: GalleryAnimation,
}

#[component]
/// Responsive image grid or masonry layout.
pub fn Gallery(
    #[prop(optional)] gallery_type: GalleryType,
    #[prop(default = 3)] cols: u8,
    #[prop(optional, into)] gap: Option<Scale>,
    #[prop(optional)] animation: GalleryAnimation,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    if !(1..=MAX_COLS).contains(&cols) {
        logging::debug_warn!("gallery cols `{cols}` is outside 1..={MAX_COLS}; clamping");
    }
    let theme = use_theme();
    let style = GalleryStyle {
        gallery_type,
        cols,
        gap: pick(gap, theme.space.as_ref(), Scale::Small),
        animation,
    };
    provide_context(GalleryContext {
        item_class: style.item_classes(),
        animation,
    });

    view! {
        <div
            class=merge_layout_class(style.classes(), layout_class)
            data-ui-primitive="true"
            data-ui-kind="gallery"
            data-ui-type=gallery_type.token()
        >
            {children()}
        </div>
    }
}

/// Class strings for a media wrapper and its image.
fn media_classes(
    rounded: &Rounded,
    shadow: &Scale,
    item_class: &str,
    animation: GalleryAnimation,
) -> (String, String) {
    let wrapper = ClassList::new()
        .with("overflow-hidden break-inside-avoid")
        .with(item_class)
        .with(rounded_class(rounded))
        .with(shadow_class(shadow))
        .build();
    let image = ClassList::new()
        .with("block h-auto w-full max-w-full object-cover")
        .with(animation.classes())
        .build();
    (wrapper, image)
}

#[component]
/// Single image inside a [`Gallery`].
pub fn GalleryMedia(
    #[prop(into)] src: String,
    #[prop(optional, into)] alt: String,
    #[prop(optional, into)] rounded: Option<Rounded>,
    #[prop(optional, into)] shadow: Option<Scale>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    let rounded = pick(rounded, theme.rounded.as_ref(), Rounded::Small);
    let shadow = pick(shadow, theme.shadow.as_ref(), Scale::None);
    let context = use_context::<GalleryContext>().unwrap_or(GalleryContext {
        item_class: "",
        animation: GalleryAnimation::None,
    });
    let (wrapper_class, image_class) =
        media_classes(&rounded, &shadow, context.item_class, context.animation);

    view! {
        <div class=merge_layout_class(wrapper_class, layout_class) data-ui-slot="media">
            <img class=image_class src=src alt=alt loading="lazy" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_gallery_is_three_column_grid() {
        assert_eq!(
            GalleryStyle::default().classes(),
            "grid grid-cols-2 md:grid-cols-3 gap-2"
        );
        assert_eq!(GalleryStyle::default().item_classes(), "");
    }

    #[test]
    fn masonry_uses_columns_and_item_spacing() {
        let style = GalleryStyle {
            gallery_type: GalleryType::Masonry,
            cols: 4,
            gap: Scale::Large,
            ..GalleryStyle::default()
        };
        assert_eq!(style.classes(), "columns-2 md:columns-4 gap-4");
        assert_eq!(style.item_classes(), "mb-4");
    }

    #[test]
    fn column_count_is_clamped() {
        let wide = GalleryStyle {
            cols: 9,
            ..GalleryStyle::default()
        };
        assert!(wide.classes().contains("lg:grid-cols-6"));
        let empty = GalleryStyle {
            cols: 0,
            ..GalleryStyle::default()
        };
        assert!(empty.classes().contains("grid-cols-1"));
    }

    #[test]
    fn media_picks_up_animation() {
        let (wrapper, image) =
            media_classes(&Rounded::Large, &Scale::Medium, "mb-2", GalleryAnimation::Scale);
        assert_eq!(wrapper, "overflow-hidden break-inside-avoid mb-2 rounded-lg shadow-md");
        assert!(image.ends_with("hover:scale-105"));
    }
}

//! Styled widgets built on the shared token tables.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;
use ui_tokens::{
    border_class, color_variant, fill_color, font_weight_class, padding_class, rounded_class,
    shadow_class, space_class, text_size_class, ClassList, Color, FontWeight, Rounded, Scale,
    Size, Variant,
};

use crate::interaction::{reveal_class, use_dismiss, DismissTransition, OpenSet};
use crate::style::{bool_token, merge_layout_class, next_id, pick, toggle_class, use_theme};
use crate::{Icon, IconName, IconSize};

mod accordion;
mod avatar;
mod badge;
mod banner;
mod blockquote;
mod button;
mod device_mockup;
mod fieldset;
mod gallery;
mod mega_menu;
mod speed_dial;
mod stepper;
mod text_field;
mod toggle_field;

pub use accordion::{Accordion, AccordionItem, AccordionStyle, ChevronPosition};
pub use avatar::{initials, Avatar, AvatarGroup, AvatarStyle, PresenceStatus};
pub use badge::{Badge, BadgeIndicator, BadgeStyle};
pub use banner::{Banner, BannerPosition, BannerStyle};
pub use blockquote::{Blockquote, BlockquoteStyle, BorderSide};
pub use button::{Button, ButtonGroup, ButtonLink, ButtonStyle};
pub use device_mockup::{Device, DeviceMockup, DeviceStyle};
pub use fieldset::{Fieldset, FieldsetStyle};
pub use gallery::{Gallery, GalleryAnimation, GalleryMedia, GalleryStyle, GalleryType};
pub use mega_menu::{MegaMenu, MegaMenuStyle, MenuWidth};
pub use speed_dial::{SpeedDial, SpeedDialItem, SpeedDialPosition, SpeedDialStyle};
pub use stepper::{StepStatus, Stepper, StepperItem, StepperStyle};
pub use text_field::{FloatingLabel, TextField, TextFieldStyle};
pub use toggle_field::{ToggleField, ToggleFieldStyle};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Main axis for grouped and sequential widgets.
pub enum Orientation {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Orientation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Icon size matching a widget size step. Custom sizes use the standard icon.
fn icon_size(size: &Size) -> IconSize {
    match size {
        Size::ExtraSmall => IconSize::Xs,
        Size::Small | Size::Medium | Size::Custom(_) => IconSize::Sm,
        Size::Large => IconSize::Md,
        Size::ExtraLarge => IconSize::Lg,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn icon_size_tracks_widget_size() {
        assert_eq!(icon_size(&Size::ExtraSmall), IconSize::Xs);
        assert_eq!(icon_size(&Size::ExtraLarge), IconSize::Lg);
        assert_eq!(icon_size(&Size::from("h-9")), IconSize::Sm);
        assert_eq!(Orientation::default().token(), "horizontal");
    }
}

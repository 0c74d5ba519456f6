//! Styled Leptos widgets driven by design tokens.
//!
//! Every widget maps its style attributes through the `ui_tokens` tables to utility class
//! strings, renders caller-supplied children into fixed slots, and exposes the stable
//! `data-ui-*` attributes used by stylesheets and tests. Attribute values that are not on the
//! design scale pass through unchanged as raw classes.
//!
//! Wrap a tree in [`ThemeProvider`] to change the defaults of every widget inside it.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod components;
mod icon;
mod interaction;
mod style;

pub use components::{
    initials, Accordion, AccordionItem, AccordionStyle, Avatar, AvatarGroup, AvatarStyle, Badge,
    BadgeIndicator, BadgeStyle, Banner, BannerPosition, BannerStyle, Blockquote, BlockquoteStyle,
    BorderSide, Button, ButtonGroup, ButtonLink, ButtonStyle, ChevronPosition, Device,
    DeviceMockup, DeviceStyle, Fieldset, FieldsetStyle, FloatingLabel, Gallery, GalleryAnimation,
    GalleryMedia, GalleryStyle, GalleryType, MegaMenu, MegaMenuStyle, MenuWidth, Orientation,
    PresenceStatus, SpeedDial, SpeedDialItem, SpeedDialPosition, SpeedDialStyle, StepStatus,
    Stepper, StepperItem, StepperStyle, TextField, TextFieldStyle, ToggleField, ToggleFieldStyle,
};
pub use icon::{Icon, IconName, IconSize};
pub use interaction::{
    reduce_dismiss, use_dismiss, DismissAction, DismissHandle, DismissPhase, DismissTransition,
    OpenSet,
};
pub use style::{use_theme, ThemeProvider};

/// Convenience imports for applications composing the widget set.
pub mod prelude {
    pub use crate::{
        initials, Accordion, AccordionItem, Avatar, AvatarGroup, Badge, BadgeIndicator, Banner,
        BannerPosition, Blockquote, BorderSide, Button, ButtonGroup, ButtonLink, ChevronPosition,
        Device, DeviceMockup, Fieldset, FloatingLabel, Gallery, GalleryAnimation, GalleryMedia,
        GalleryType, Icon, IconName, IconSize, MegaMenu, MenuWidth, Orientation, PresenceStatus,
        SpeedDial, SpeedDialItem, SpeedDialPosition, StepStatus, Stepper, StepperItem, TextField,
        ThemeProvider, ToggleField,
    };
    pub use ui_tokens::{Color, FontWeight, Rounded, Scale, Size, ThemeDefaults, Variant};
}

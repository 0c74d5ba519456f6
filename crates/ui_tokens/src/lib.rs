//! Headless style resolution for the widget library.
//!
//! The crate owns the design-token enums, the shared variant-by-color palette, the generic
//! scales, and the theme defaults document. It has no rendering dependency so the tables can be
//! reused and tested outside the browser.

mod class_list;
mod error;
mod palette;
mod scale;
mod theme;
mod tokens;

pub use class_list::ClassList;
pub use error::{ConfigError, TokenError};
pub use palette::{color_variant, fill_color};
pub use scale::{
    border_class, font_weight_class, padding_class, rounded_class, shadow_class, space_class,
    text_size_class,
};
pub use theme::{resolve, ThemeDefaults};
pub use tokens::{Color, DesignToken, FontWeight, Rounded, Scale, Size, Variant};

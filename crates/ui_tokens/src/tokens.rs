//! Design-token enums shared by every widget.
//!
//! Each token parses leniently from its wire name (`"extra_small"`, `"primary"`, ...). Input that
//! is not part of the scale becomes `Custom` and is emitted verbatim as a class string, so callers
//! can always reach for a raw utility class instead of a named step.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TokenError;

/// Common surface of every design-token enum.
pub trait DesignToken: Clone {
    /// Attribute kind used in diagnostics.
    const KIND: &'static str;

    /// Wire name of the token, or the custom value unchanged.
    fn token(&self) -> &str;

    /// Returns `true` when the value is not part of the named scale.
    fn is_custom(&self) -> bool;
}

macro_rules! design_token {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal, default = $default:ident) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// Caller-supplied value passed through unchanged.
            Custom(String),
        }

        impl $name {
            /// Every named value, in table order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Attribute kind used in diagnostics.
            pub const KIND: &'static str = $kind;

            /// Wire name of the token, or the custom value unchanged.
            pub fn token(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Custom(raw) => raw.as_str(),
                }
            }

            /// Returns `true` when the value is not part of the named scale.
            pub fn is_custom(&self) -> bool {
                matches!(self, Self::Custom(_))
            }

            fn named(raw: &str) -> Option<Self> {
                match raw {
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl DesignToken for $name {
            const KIND: &'static str = $kind;

            fn token(&self) -> &str {
                $name::token(self)
            }

            fn is_custom(&self) -> bool {
                $name::is_custom(self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::named(raw).unwrap_or_else(|| Self::Custom(raw.to_string()))
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::named(&raw).unwrap_or(Self::Custom(raw))
            }
        }

        impl From<$name> for String {
            fn from(token: $name) -> Self {
                match token {
                    $name::Custom(raw) => raw,
                    named => named.token().to_string(),
                }
            }
        }

        impl FromStr for $name {
            type Err = TokenError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                Self::named(raw).ok_or_else(|| TokenError::Unknown {
                    kind: $kind,
                    value: raw.to_string(),
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}

design_token! {
    /// Visual style family selecting which palette table a widget reads.
    pub enum Variant ("variant", default = Default) {
        /// Neutral card-like surface that ignores the color family.
        Base => "base",
        /// Solid fill in the color family.
        Default => "default",
        /// Colored text and border on a transparent fill.
        Outline => "outline",
        /// Colored text only.
        Transparent => "transparent",
        /// Solid fill with a tinted drop shadow.
        Shadow => "shadow",
        /// Light tinted fill with a darker border.
        Bordered => "bordered",
        /// Two-stop gradient fill.
        Gradient => "gradient",
    }
}

design_token! {
    /// Semantic color family, light and dark mode included.
    pub enum Color ("color", default = Natural) {
        /// Neutral gray.
        Natural => "natural",
        /// White surface.
        White => "white",
        /// Brand teal.
        Primary => "primary",
        /// Brand blue.
        Secondary => "secondary",
        /// Positive green.
        Success => "success",
        /// Cautionary amber.
        Warning => "warning",
        /// Destructive red.
        Danger => "danger",
        /// Informational cyan.
        Info => "info",
        /// Light gray.
        Silver => "silver",
        /// Purple accent.
        Misc => "misc",
        /// Warm brown accent.
        Dawn => "dawn",
        /// Near-black surface.
        Dark => "dark",
    }
}

design_token! {
    /// Component size step.
    pub enum Size ("size", default = Medium) {
        ExtraSmall => "extra_small",
        Small => "small",
        Medium => "medium",
        Large => "large",
        ExtraLarge => "extra_large",
    }
}

design_token! {
    /// Generic step used for border width, padding, spacing, and shadow depth.
    pub enum Scale ("scale", default = ExtraSmall) {
        None => "none",
        ExtraSmall => "extra_small",
        Small => "small",
        Medium => "medium",
        Large => "large",
        ExtraLarge => "extra_large",
    }
}

design_token! {
    /// Corner radius step.
    pub enum Rounded ("rounded", default = Small) {
        None => "none",
        ExtraSmall => "extra_small",
        Small => "small",
        Medium => "medium",
        Large => "large",
        ExtraLarge => "extra_large",
        /// Pill or circle.
        Full => "full",
    }
}

design_token! {
    /// Text weight.
    pub enum FontWeight ("font_weight", default = Normal) {
        Light => "light",
        Normal => "normal",
        Medium => "medium",
        Semibold => "semibold",
        Bold => "bold",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lenient_parse_maps_wire_names_and_keeps_unknown_input() {
        assert_eq!(Color::from("primary"), Color::Primary);
        assert_eq!(Size::from("extra_large"), Size::ExtraLarge);
        assert_eq!(
            Rounded::from("rounded-[3px]"),
            Rounded::Custom("rounded-[3px]".to_string())
        );
        assert_eq!(Rounded::from("rounded-[3px]").token(), "rounded-[3px]");
    }

    #[test]
    fn strict_parse_rejects_unknown_tokens() {
        assert_eq!("outline".parse::<Variant>(), Ok(Variant::Outline));
        assert_eq!(
            "huge".parse::<Size>(),
            Err(TokenError::Unknown {
                kind: "size",
                value: "huge".to_string(),
            })
        );
    }

    #[test]
    fn wire_names_round_trip_for_every_named_value() {
        for color in Color::ALL {
            assert_eq!(&Color::from(color.token()), color);
            assert!(!color.is_custom());
        }
        for scale in Scale::ALL {
            assert_eq!(&Scale::from(scale.to_string()), scale);
        }
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&FontWeight::Semibold).expect("serialize");
        assert_eq!(json, "\"semibold\"");

        let custom: Variant = serde_json::from_str("\"glass\"").expect("deserialize");
        assert_eq!(custom, Variant::Custom("glass".to_string()));
    }

    #[test]
    fn defaults_match_documented_values() {
        assert_eq!(Variant::default(), Variant::Default);
        assert_eq!(Color::default(), Color::Natural);
        assert_eq!(Size::default(), Size::Medium);
        assert_eq!(Scale::default(), Scale::ExtraSmall);
        assert_eq!(Rounded::default(), Rounded::Small);
        assert_eq!(FontWeight::default(), FontWeight::Normal);
    }
}

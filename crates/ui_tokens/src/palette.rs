//! Shared variant-by-color palette.
//!
//! Every widget that paints a surface in a color family starts from [`color_variant`]. Widgets
//! with their own needs (focus rings, checked tracks, separators) keep smaller tables next to
//! their component.

use crate::{Color, Variant};

/// Resolves the class string for a `(variant, color)` pair.
///
/// A custom variant is returned verbatim; otherwise a custom color is returned verbatim.
pub fn color_variant<'a>(variant: &'a Variant, color: &'a Color) -> &'a str {
    let table: fn(&Color) -> Option<&'static str> = match variant {
        Variant::Base => base,
        Variant::Default => filled,
        Variant::Outline => outline,
        Variant::Transparent => transparent,
        Variant::Shadow => shadow,
        Variant::Bordered => bordered,
        Variant::Gradient => gradient,
        Variant::Custom(raw) => return raw.as_str(),
    };
    match table(color) {
        Some(classes) => classes,
        None => color.token(),
    }
}

/// Solid background in the color family, for dots, tracks, and separators.
pub fn fill_color(color: &Color) -> &str {
    match color {
        Color::Natural => "bg-[#4B4B4B] dark:bg-[#DDDDDD]",
        Color::White => "bg-white",
        Color::Primary => "bg-[#007F8C] dark:bg-[#01B8CA]",
        Color::Secondary => "bg-[#266EF1] dark:bg-[#6DAAFB]",
        Color::Success => "bg-[#0E8345] dark:bg-[#06C167]",
        Color::Warning => "bg-[#CA8D01] dark:bg-[#FDC034]",
        Color::Danger => "bg-[#DE1135] dark:bg-[#FC7F79]",
        Color::Info => "bg-[#0B84BA] dark:bg-[#3EB7ED]",
        Color::Silver => "bg-[#868686] dark:bg-[#A6A6A6]",
        Color::Misc => "bg-[#8750C5] dark:bg-[#BA83F9]",
        Color::Dawn => "bg-[#A86438] dark:bg-[#DB976B]",
        Color::Dark => "bg-[#282828]",
        Color::Custom(raw) => raw.as_str(),
    }
}

fn base(color: &Color) -> Option<&'static str> {
    if color.is_custom() {
        return None;
    }
    Some(
        "bg-white text-[#09090b] border-[#e4e4e7] shadow-sm dark:bg-[#18181B] dark:text-[#FAFAFA] dark:border-[#27272a]",
    )
}

fn filled(color: &Color) -> Option<&'static str> {
    let classes = match color {
        Color::Natural => "bg-[#4B4B4B] text-white dark:bg-[#DDDDDD] dark:text-black",
        Color::White => "bg-white text-[#3E3E3E]",
        Color::Primary => "bg-[#007F8C] text-white dark:bg-[#01B8CA] dark:text-black",
        Color::Secondary => "bg-[#266EF1] text-white dark:bg-[#6DAAFB] dark:text-black",
        Color::Success => "bg-[#0E8345] text-white dark:bg-[#06C167] dark:text-black",
        Color::Warning => "bg-[#CA8D01] text-white dark:bg-[#FDC034] dark:text-black",
        Color::Danger => "bg-[#DE1135] text-white dark:bg-[#FC7F79] dark:text-black",
        Color::Info => "bg-[#0B84BA] text-white dark:bg-[#3EB7ED] dark:text-black",
        Color::Silver => "bg-[#868686] text-white dark:bg-[#A6A6A6] dark:text-black",
        Color::Misc => "bg-[#8750C5] text-white dark:bg-[#BA83F9] dark:text-black",
        Color::Dawn => "bg-[#A86438] text-white dark:bg-[#DB976B] dark:text-black",
        Color::Dark => "bg-[#282828] text-white",
        Color::Custom(_) => return None,
    };
    Some(classes)
}

fn outline(color: &Color) -> Option<&'static str> {
    let classes = match color {
        Color::Natural => {
            "bg-transparent text-[#4B4B4B] border-[#4B4B4B] dark:text-[#DDDDDD] dark:border-[#DDDDDD]"
        }
        Color::White => "bg-transparent text-white border-white",
        Color::Primary => {
            "bg-transparent text-[#007F8C] border-[#007F8C] dark:text-[#01B8CA] dark:border-[#01B8CA]"
        }
        Color::Secondary => {
            "bg-transparent text-[#266EF1] border-[#266EF1] dark:text-[#6DAAFB] dark:border-[#6DAAFB]"
        }
        Color::Success => {
            "bg-transparent text-[#0E8345] border-[#0E8345] dark:text-[#06C167] dark:border-[#06C167]"
        }
        Color::Warning => {
            "bg-transparent text-[#CA8D01] border-[#CA8D01] dark:text-[#FDC034] dark:border-[#FDC034]"
        }
        Color::Danger => {
            "bg-transparent text-[#DE1135] border-[#DE1135] dark:text-[#FC7F79] dark:border-[#FC7F79]"
        }
        Color::Info => {
            "bg-transparent text-[#0B84BA] border-[#0B84BA] dark:text-[#3EB7ED] dark:border-[#3EB7ED]"
        }
        Color::Silver => {
            "bg-transparent text-[#868686] border-[#868686] dark:text-[#A6A6A6] dark:border-[#A6A6A6]"
        }
        Color::Misc => {
            "bg-transparent text-[#8750C5] border-[#8750C5] dark:text-[#BA83F9] dark:border-[#BA83F9]"
        }
        Color::Dawn => {
            "bg-transparent text-[#A86438] border-[#A86438] dark:text-[#DB976B] dark:border-[#DB976B]"
        }
        Color::Dark => {
            "bg-transparent text-[#282828] border-[#282828] dark:text-white dark:border-white"
        }
        Color::Custom(_) => return None,
    };
    Some(classes)
}

fn transparent(color: &Color) -> Option<&'static str> {
    let classes = match color {
        Color::Natural => "bg-transparent text-[#4B4B4B] dark:text-[#DDDDDD]",
        Color::White => "bg-transparent text-white",
        Color::Primary => "bg-transparent text-[#007F8C] dark:text-[#01B8CA]",
        Color::Secondary => "bg-transparent text-[#266EF1] dark:text-[#6DAAFB]",
        Color::Success => "bg-transparent text-[#0E8345] dark:text-[#06C167]",
        Color::Warning => "bg-transparent text-[#CA8D01] dark:text-[#FDC034]",
        Color::Danger => "bg-transparent text-[#DE1135] dark:text-[#FC7F79]",
        Color::Info => "bg-transparent text-[#0B84BA] dark:text-[#3EB7ED]",
        Color::Silver => "bg-transparent text-[#868686] dark:text-[#A6A6A6]",
        Color::Misc => "bg-transparent text-[#8750C5] dark:text-[#BA83F9]",
        Color::Dawn => "bg-transparent text-[#A86438] dark:text-[#DB976B]",
        Color::Dark => "bg-transparent text-[#282828] dark:text-white",
        Color::Custom(_) => return None,
    };
    Some(classes)
}

fn shadow(color: &Color) -> Option<&'static str> {
    let classes = match color {
        Color::Natural => {
            "bg-[#4B4B4B] text-white dark:bg-[#DDDDDD] dark:text-black shadow-[0px_4px_6px_-4px_rgba(134,134,134,0.5)]"
        }
        Color::White => "bg-white text-[#3E3E3E] shadow-[0px_4px_6px_-4px_rgba(0,0,0,0.1)]",
        Color::Primary => {
            "bg-[#007F8C] text-white dark:bg-[#01B8CA] dark:text-black shadow-[0px_4px_6px_-4px_rgba(0,149,164,0.5)]"
        }
        Color::Secondary => {
            "bg-[#266EF1] text-white dark:bg-[#6DAAFB] dark:text-black shadow-[0px_4px_6px_-4px_rgba(6,139,238,0.5)]"
        }
        Color::Success => {
            "bg-[#0E8345] text-white dark:bg-[#06C167] dark:text-black shadow-[0px_4px_6px_-4px_rgba(0,154,81,0.5)]"
        }
        Color::Warning => {
            "bg-[#CA8D01] text-white dark:bg-[#FDC034] dark:text-black shadow-[0px_4px_6px_-4px_rgba(252,176,1,0.5)]"
        }
        Color::Danger => {
            "bg-[#DE1135] text-white dark:bg-[#FC7F79] dark:text-black shadow-[0px_4px_6px_-4px_rgba(248,52,70,0.5)]"
        }
        Color::Info => {
            "bg-[#0B84BA] text-white dark:bg-[#3EB7ED] dark:text-black shadow-[0px_4px_6px_-4px_rgba(14,165,233,0.5)]"
        }
        Color::Silver => {
            "bg-[#868686] text-white dark:bg-[#A6A6A6] dark:text-black shadow-[0px_4px_6px_-4px_rgba(134,134,134,0.5)]"
        }
        Color::Misc => {
            "bg-[#8750C5] text-white dark:bg-[#BA83F9] dark:text-black shadow-[0px_4px_6px_-4px_rgba(150,72,238,0.5)]"
        }
        Color::Dawn => {
            "bg-[#A86438] text-white dark:bg-[#DB976B] dark:text-black shadow-[0px_4px_6px_-4px_rgba(184,122,82,0.5)]"
        }
        Color::Dark => "bg-[#282828] text-white shadow-[0px_4px_6px_-4px_rgba(0,0,0,0.5)]",
        Color::Custom(_) => return None,
    };
    Some(classes)
}

fn bordered(color: &Color) -> Option<&'static str> {
    let classes = match color {
        Color::Natural => {
            "bg-[#F3F3F3] text-[#282828] border-[#282828] dark:bg-[#4B4B4B] dark:text-[#E8E8E8] dark:border-[#E8E8E8]"
        }
        Color::White => "bg-white text-[#3E3E3E] border-[#DADADA]",
        Color::Primary => {
            "bg-[#E2F8FB] text-[#016974] border-[#016974] dark:bg-[#002D33] dark:text-[#77D5E3] dark:border-[#77D5E3]"
        }
        Color::Secondary => {
            "bg-[#EFF4FE] text-[#175BCC] border-[#175BCC] dark:bg-[#002661] dark:text-[#A9C9FF] dark:border-[#A9C9FF]"
        }
        Color::Success => {
            "bg-[#EAF6ED] text-[#166C3B] border-[#166C3B] dark:bg-[#002F14] dark:text-[#7FD99A] dark:border-[#7FD99A]"
        }
        Color::Warning => {
            "bg-[#FFF7E6] text-[#976A01] border-[#976A01] dark:bg-[#322300] dark:text-[#FDD067] dark:border-[#FDD067]"
        }
        Color::Danger => {
            "bg-[#FFF0EE] text-[#BB032A] border-[#BB032A] dark:bg-[#520810] dark:text-[#FFB2AB] dark:border-[#FFB2AB]"
        }
        Color::Info => {
            "bg-[#E7F6FD] text-[#08638C] border-[#08638C] dark:bg-[#03212F] dark:text-[#6EC9F2] dark:border-[#6EC9F2]"
        }
        Color::Silver => {
            "bg-[#F4F4F4] text-[#727272] border-[#727272] dark:bg-[#4B4B4B] dark:text-[#BBBBBB] dark:border-[#BBBBBB]"
        }
        Color::Misc => {
            "bg-[#F6F0FE] text-[#653C94] border-[#653C94] dark:bg-[#221431] dark:text-[#CBA2FA] dark:border-[#CBA2FA]"
        }
        Color::Dawn => {
            "bg-[#FBF2ED] text-[#7E4B2A] border-[#7E4B2A] dark:bg-[#2A190E] dark:text-[#E4B190] dark:border-[#E4B190]"
        }
        Color::Dark => "bg-[#282828] text-white border-[#727272]",
        Color::Custom(_) => return None,
    };
    Some(classes)
}

fn gradient(color: &Color) -> Option<&'static str> {
    let classes = match color {
        Color::Natural => {
            "bg-gradient-to-br from-[#282828] to-[#727272] text-white dark:from-[#A6A6A6] dark:to-[#FFFFFF] dark:text-black"
        }
        Color::White => "bg-gradient-to-br from-white to-[#E8E8E8] text-[#3E3E3E]",
        Color::Primary => {
            "bg-gradient-to-br from-[#016974] to-[#01B8CA] text-white dark:from-[#01B8CA] dark:to-[#B0E7EF] dark:text-black"
        }
        Color::Secondary => {
            "bg-gradient-to-br from-[#175BCC] to-[#6DAAFB] text-white dark:from-[#6DAAFB] dark:to-[#CDDEFF] dark:text-black"
        }
        Color::Success => {
            "bg-gradient-to-br from-[#166C3B] to-[#06C167] text-white dark:from-[#06C167] dark:to-[#B1EAC2] dark:text-black"
        }
        Color::Warning => {
            "bg-gradient-to-br from-[#976A01] to-[#FDC034] text-white dark:from-[#FDC034] dark:to-[#FEDF99] dark:text-black"
        }
        Color::Danger => {
            "bg-gradient-to-br from-[#BB032A] to-[#FC7F79] text-white dark:from-[#FC7F79] dark:to-[#FFD2CD] dark:text-black"
        }
        Color::Info => {
            "bg-gradient-to-br from-[#08638C] to-[#3EB7ED] text-white dark:from-[#3EB7ED] dark:to-[#9FDBF6] dark:text-black"
        }
        Color::Silver => {
            "bg-gradient-to-br from-[#5E5E5E] to-[#A6A6A6] text-white dark:from-[#868686] dark:to-[#BBBBBB] dark:text-black"
        }
        Color::Misc => {
            "bg-gradient-to-br from-[#653C94] to-[#BA83F9] text-white dark:from-[#BA83F9] dark:to-[#DDC1FC] dark:text-black"
        }
        Color::Dawn => {
            "bg-gradient-to-br from-[#7E4B2A] to-[#DB976B] text-white dark:from-[#DB976B] dark:to-[#EDCBB5] dark:text-black"
        }
        Color::Dark => "bg-gradient-to-br from-[#1E1E1E] to-[#4B4B4B] text-white",
        Color::Custom(_) => return None,
    };
    Some(classes)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn outline_primary_is_stable() {
        let first = color_variant(&Variant::Outline, &Color::Primary).to_string();
        let second = color_variant(&Variant::Outline, &Color::Primary).to_string();
        assert_eq!(first, second);
        assert!(first.contains("border-[#007F8C]"));
    }

    #[test]
    fn every_named_pair_resolves_to_classes() {
        for variant in Variant::ALL {
            for color in Color::ALL {
                let classes = color_variant(variant, color);
                assert!(!classes.is_empty(), "{variant}/{color} is empty");
                assert_ne!(classes, color.token(), "{variant}/{color} fell through");
                assert_eq!(
                    classes.matches('[').count(),
                    classes.matches(']').count(),
                    "{variant}/{color} has unbalanced brackets"
                );
            }
        }
    }

    #[test]
    fn fill_color_covers_every_named_color() {
        for color in Color::ALL {
            assert!(fill_color(color).starts_with("bg-"), "{color}");
        }
        assert_eq!(fill_color(&Color::from("bg-lime-400")), "bg-lime-400");
    }

    #[test]
    fn custom_color_passes_through() {
        let color = Color::from("bg-pink-500 text-white");
        assert_eq!(
            color_variant(&Variant::Default, &color),
            "bg-pink-500 text-white"
        );
    }

    #[test]
    fn custom_variant_wins_over_custom_color() {
        let variant = Variant::from("glass");
        let color = Color::from("bg-pink-500");
        assert_eq!(color_variant(&variant, &color), "glass");
        assert_eq!(color_variant(&variant, &Color::Danger), "glass");
    }
}

//! Shared scales for radius, border width, padding, gap, shadow, and typography.

use crate::{FontWeight, Rounded, Scale, Size};

/// Corner radius class.
pub fn rounded_class(rounded: &Rounded) -> &str {
    match rounded {
        Rounded::None => "rounded-none",
        Rounded::ExtraSmall => "rounded-sm",
        Rounded::Small => "rounded",
        Rounded::Medium => "rounded-md",
        Rounded::Large => "rounded-lg",
        Rounded::ExtraLarge => "rounded-xl",
        Rounded::Full => "rounded-full",
        Rounded::Custom(raw) => raw.as_str(),
    }
}

/// Border width class.
pub fn border_class(border: &Scale) -> &str {
    match border {
        Scale::None => "border-0",
        Scale::ExtraSmall => "border",
        Scale::Small => "border-2",
        Scale::Medium => "border-[3px]",
        Scale::Large => "border-4",
        Scale::ExtraLarge => "border-[5px]",
        Scale::Custom(raw) => raw.as_str(),
    }
}

/// Inner padding class.
pub fn padding_class(padding: &Scale) -> &str {
    match padding {
        Scale::None => "p-0",
        Scale::ExtraSmall => "p-1",
        Scale::Small => "p-2",
        Scale::Medium => "p-3",
        Scale::Large => "p-4",
        Scale::ExtraLarge => "p-5",
        Scale::Custom(raw) => raw.as_str(),
    }
}

/// Gap between children of a flex or grid container.
pub fn space_class(space: &Scale) -> &str {
    match space {
        Scale::None => "gap-0",
        Scale::ExtraSmall => "gap-1",
        Scale::Small => "gap-2",
        Scale::Medium => "gap-3",
        Scale::Large => "gap-4",
        Scale::ExtraLarge => "gap-5",
        Scale::Custom(raw) => raw.as_str(),
    }
}

/// Drop shadow depth.
pub fn shadow_class(shadow: &Scale) -> &str {
    match shadow {
        Scale::None => "shadow-none",
        Scale::ExtraSmall => "shadow-sm",
        Scale::Small => "shadow",
        Scale::Medium => "shadow-md",
        Scale::Large => "shadow-lg",
        Scale::ExtraLarge => "shadow-xl",
        Scale::Custom(raw) => raw.as_str(),
    }
}

/// Body text size for a component size step.
pub fn text_size_class(size: &Size) -> &str {
    match size {
        Size::ExtraSmall => "text-xs",
        Size::Small => "text-sm",
        Size::Medium => "text-base",
        Size::Large => "text-lg",
        Size::ExtraLarge => "text-xl",
        Size::Custom(raw) => raw.as_str(),
    }
}

/// Font weight class.
pub fn font_weight_class(weight: &FontWeight) -> &str {
    match weight {
        FontWeight::Light => "font-light",
        FontWeight::Normal => "font-normal",
        FontWeight::Medium => "font-medium",
        FontWeight::Semibold => "font-semibold",
        FontWeight::Bold => "font-bold",
        FontWeight::Custom(raw) => raw.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn named_steps_map_to_fixed_classes() {
        assert_eq!(rounded_class(&Rounded::Full), "rounded-full");
        assert_eq!(border_class(&Scale::Medium), "border-[3px]");
        assert_eq!(padding_class(&Scale::None), "p-0");
        assert_eq!(space_class(&Scale::Large), "gap-4");
        assert_eq!(shadow_class(&Scale::ExtraLarge), "shadow-xl");
        assert_eq!(text_size_class(&Size::Small), "text-sm");
        assert_eq!(font_weight_class(&FontWeight::Semibold), "font-semibold");
    }

    #[test]
    fn unmatched_values_pass_straight_through() {
        assert_eq!(text_size_class(&Size::from("text-[13px]")), "text-[13px]");
        assert_eq!(padding_class(&Scale::from("px-7 py-1")), "px-7 py-1");
        assert_eq!(rounded_class(&Rounded::from("rounded-t-lg")), "rounded-t-lg");
    }
}

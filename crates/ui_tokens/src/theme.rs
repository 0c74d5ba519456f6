//! Theme-wide attribute defaults loaded from a JSON document.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Color, FontWeight, Rounded, Scale, Size, Variant};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Attribute defaults applied to every widget that does not set the attribute explicitly.
///
/// Each field is optional; an unset field leaves the widget's own default in place.
pub struct ThemeDefaults {
    /// Default style family.
    pub variant: Option<Variant>,
    /// Default color family.
    pub color: Option<Color>,
    /// Default size step.
    pub size: Option<Size>,
    /// Default corner radius.
    pub rounded: Option<Rounded>,
    /// Default border width.
    pub border: Option<Scale>,
    /// Default inner padding.
    pub padding: Option<Scale>,
    /// Default gap between children.
    pub space: Option<Scale>,
    /// Default shadow depth.
    pub shadow: Option<Scale>,
    /// Default font weight.
    pub font_weight: Option<FontWeight>,
}

impl ThemeDefaults {
    /// Parses theme defaults from JSON. Unknown token values are kept as custom classes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] when the document is malformed or names an unknown field.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Rejects any field holding a custom (non-scale) value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CustomToken`] for the first custom value found.
    pub fn validate_strict(&self) -> Result<(), ConfigError> {
        let fields = [
            ("variant", self.variant.as_ref().map(|t| (t.is_custom(), t.token()))),
            ("color", self.color.as_ref().map(|t| (t.is_custom(), t.token()))),
            ("size", self.size.as_ref().map(|t| (t.is_custom(), t.token()))),
            ("rounded", self.rounded.as_ref().map(|t| (t.is_custom(), t.token()))),
            ("border", self.border.as_ref().map(|t| (t.is_custom(), t.token()))),
            ("padding", self.padding.as_ref().map(|t| (t.is_custom(), t.token()))),
            ("space", self.space.as_ref().map(|t| (t.is_custom(), t.token()))),
            ("shadow", self.shadow.as_ref().map(|t| (t.is_custom(), t.token()))),
            (
                "font_weight",
                self.font_weight.as_ref().map(|t| (t.is_custom(), t.token())),
            ),
        ];

        for (field, entry) in fields {
            if let Some((true, value)) = entry {
                return Err(ConfigError::CustomToken {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Picks an attribute value: explicit prop, then theme default, then the widget default.
pub fn resolve<T: Clone>(prop: Option<T>, theme: Option<&T>, fallback: T) -> T {
    prop.or_else(|| theme.cloned()).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_partial_documents() {
        let theme = ThemeDefaults::from_json(r#"{ "color": "primary", "rounded": "large" }"#)
            .expect("theme");
        assert_eq!(theme.color, Some(Color::Primary));
        assert_eq!(theme.rounded, Some(Rounded::Large));
        assert_eq!(theme.size, None);
    }

    #[test]
    fn rejects_unknown_fields_and_bad_json() {
        assert!(matches!(
            ThemeDefaults::from_json(r#"{ "colour": "primary" }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            ThemeDefaults::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn strict_validation_names_the_offending_field() {
        let theme = ThemeDefaults::from_json(r#"{ "size": "small", "padding": "px-9" }"#)
            .expect("theme");
        match theme.validate_strict() {
            Err(ConfigError::CustomToken { field, value }) => {
                assert_eq!(field, "padding");
                assert_eq!(value, "px-9");
            }
            other => panic!("expected custom token error, got {other:?}"),
        }
        assert!(ThemeDefaults::default().validate_strict().is_ok());
    }

    #[test]
    fn resolve_prefers_prop_then_theme_then_fallback() {
        assert_eq!(
            resolve(Some(Size::Large), Some(&Size::Small), Size::Medium),
            Size::Large
        );
        assert_eq!(resolve(None, Some(&Size::Small), Size::Medium), Size::Small);
        assert_eq!(resolve(None, None, Size::Medium), Size::Medium);
    }
}

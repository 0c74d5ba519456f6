use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors produced by strict token parsing.
pub enum TokenError {
    /// The input is not a wire name on the token's scale.
    #[error("unknown {kind} token `{value}`")]
    Unknown {
        /// Attribute kind, e.g. `color` or `size`.
        kind: &'static str,
        /// Rejected input.
        value: String,
    },
}

#[derive(Debug, Error)]
/// Errors produced while loading or validating [`crate::ThemeDefaults`].
pub enum ConfigError {
    /// The theme document is not valid JSON for the expected shape.
    #[error("invalid theme document: {0}")]
    Json(#[from] serde_json::Error),
    /// Strict validation found a value outside the named scale.
    #[error("theme field `{field}` uses custom token `{value}`")]
    CustomToken {
        /// Theme field holding the value.
        field: &'static str,
        /// Custom value found.
        value: String,
    },
}

use thiserror::Error;

/// Errors that can occur when loading or converting a custom format into a `FlowDefinition`.
#[derive(Error, Debug, Clone)]
pub enum FlowConversionError {
    #[error("Failed to parse flowchart JSON: {0}")]
    JsonParseError(String),

    #[error("Flowchart document is missing the '{0}' array")]
    MissingField(&'static str),

    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while encoding or decoding a `QualityAnalysis`.
#[derive(Error, Debug, Clone)]
pub enum ReportError {
    #[error("JSON encoding failed: {0}")]
    Json(String),

    #[error("Binary encoding failed: {0}")]
    Encode(String),

    #[error("Binary decoding failed: {0}")]
    Decode(String),
}

/// Errors raised when an analyzer is configured with unusable values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Weight '{name}' must be a finite, non-negative number, but was {value}")]
    InvalidWeight { name: &'static str, value: f64 },
}

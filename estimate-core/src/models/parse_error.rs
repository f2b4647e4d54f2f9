use thiserror::Error;

/// Returned when a string id does not name a known variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognised {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(
        kind: &'static str,
        value: &str,
    ) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

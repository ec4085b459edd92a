use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbjadError {
    /// A required value was missing or unusable.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },
    /// A reduced index fell outside its documented `1..=base` range.
    #[error("index {index} is outside 1..={base}")]
    InvalidIndex { index: u32, base: u32 },
}

impl AbjadError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AbjadError>;

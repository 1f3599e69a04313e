//! Error types for docsection

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionsError {
    /// An option value could not be coerced to the type it requires.
    #[error("Invalid value {value:?} for option `{key}`: expected {expected}")]
    InvalidOption {
        key: String,
        value: String,
        expected: &'static str,
    },
}

impl SectionsError {
    pub fn invalid_option(
        key: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidOption {
            key: key.into(),
            value: value.into(),
            expected,
        }
    }
}

pub type Result<T> = std::result::Result<T, SectionsError>;

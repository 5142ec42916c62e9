//! All error types for the langpack crate.
//!
//! Every fallible operation (discovery, loading, translation, rendering)
//! returns one of these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no locale resources found")]
    NoLocalesFound,

    #[error("locale `{0}` is not registered")]
    LocaleNotFound(String),

    #[error("key `{key}` not found in locale `{locale}`")]
    KeyNotFound { key: String, locale: String },

    #[error("malformed locale file: {0}")]
    MalformedLocaleFile(String),

    #[error("format error: {0}")]
    Format(String),

    #[error("no shared catalog installed")]
    Uninitialized,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a malformed-file error for a data line without a `=` separator.
    pub fn missing_separator(line: usize, content: &str) -> Self {
        Error::MalformedLocaleFile(format!("line {line}: missing `=` separator in `{content}`"))
    }

    /// Creates a malformed-file error for a key that appears twice in one file.
    pub fn duplicate_key(line: usize, key: &str) -> Self {
        Error::MalformedLocaleFile(format!("line {line}: duplicate key `{key}`"))
    }

    /// Creates a format error for a template that cannot be rendered.
    pub fn malformed_template(detail: impl Into<String>) -> Self {
        Error::Format(detail.into())
    }

    /// Creates a format error for a placeholder index with no matching argument.
    pub fn placeholder_out_of_range(index: usize, provided: usize) -> Self {
        Error::Format(format!(
            "placeholder `{{{index}}}` is out of range for {provided} argument(s)"
        ))
    }
}

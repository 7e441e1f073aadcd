//! Input text resolution.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Where the text to speak comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum TextSource {
    /// Literal text
    Text(String),
    /// UTF-8 text file
    File(PathBuf),
}

impl TextSource {
    /// Select the source from mutually exclusive arguments.
    ///
    /// Exactly one of `text` and `input` must be given.
    pub fn from_args(text: Option<String>, input: Option<PathBuf>) -> Result<Self> {
        match (text, input) {
            (Some(text), None) => Ok(Self::Text(text)),
            (None, Some(path)) => Ok(Self::File(path)),
            (Some(_), Some(_)) => Err(Error::Usage(
                "--text and --input cannot be used together".to_string(),
            )),
            (None, None) => Err(Error::Usage(
                "one of --text or --input is required".to_string(),
            )),
        }
    }

    /// Read the raw text.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::File(path) => std::fs::read_to_string(path).map_err(|e| Error::io(path, e)),
        }
    }
}

/// Trim surrounding whitespace, rejecting text that is empty afterwards.
pub fn normalize(text: &str) -> Result<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(text)
}

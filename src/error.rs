// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    Preference(PreferenceError),
}

/// Problems found while turning stored preference strings into typed values.
///
/// These indicate a corrupted settings store rather than a user mistake, so
/// callers log them and keep their previous state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    /// A brightness value that is not an integer percentage (e.g. `"abc"`).
    InvalidPercentage { field: &'static str, raw: String },

    /// A language code with no localization bundle.
    UnknownLanguage(String),
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceError::InvalidPercentage { field, raw } => {
                write!(f, "{field}: '{raw}' is not a percentage")
            }
            PreferenceError::UnknownLanguage(code) => write!(f, "unknown language '{code}'"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Preference(e) => write!(f, "Preference Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PreferenceError> for Error {
    fn from(err: PreferenceError) -> Self {
        Error::Preference(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Binary-level error type: everything a `token-forge` run can fail on,
//! flattened to one message for the user.

use std::fmt;

use forge_color::color::ParseColorError;

/// Errors surfaced to the user as `token-forge: <message>`.
#[derive(Debug)]
pub enum Error {
    /// Reading or writing a file failed.
    Io(std::io::Error),
    /// The config file exists but could not be read as TOML.
    Config(String),
    /// A configured color is not a valid hex string.
    Color(ParseColorError),
    /// The command line did not parse.
    Args(pico_args::Error),
    /// `--format` named something outside css/scss/json/js.
    UnknownFormat(String),
    /// A positional argument was given; the CLI takes none.
    UnexpectedArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "invalid config: {e}"),
            Self::Color(e) => write!(f, "invalid color: {e}"),
            Self::Args(e) => write!(f, "{e}"),
            Self::UnknownFormat(name) => {
                write!(f, "unknown format {name:?} (expected css, scss, json or js)")
            }
            Self::UnexpectedArgument(arg) => {
                write!(f, "unexpected argument {arg:?} (see --help)")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Color(e) => Some(e),
            Self::Args(e) => Some(e),
            Self::Config(_) | Self::UnknownFormat(_) | Self::UnexpectedArgument(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<ParseColorError> for Error {
    fn from(e: ParseColorError) -> Self {
        Self::Color(e)
    }
}

impl From<pico_args::Error> for Error {
    fn from(e: pico_args::Error) -> Self {
        Self::Args(e)
    }
}

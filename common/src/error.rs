//! Errors reported by the identifier types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// What a rejected input was supposed to look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Two hexadecimal digits (an [`crate::octet::Octet`]).
    Octet,
    /// Twelve hexadecimal digits in one of the accepted notations.
    Identifier,
}

impl Expected {
    pub fn message(&self) -> &'static str {
        match self {
            Expected::Octet => "Pass in two hexadecimal digits.",
            Expected::Identifier => "Pass in 12 hexadecimal digits.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The text did not match any accepted shape. Raised only at construction.
    #[error("{}", .expected.message())]
    InvalidInput { input: String, expected: Expected },

    /// Fragment widths must be a positive multiple of 4, at most 48.
    #[error("Invalid fragment width: {0} bits")]
    FragmentBits(u32),

    #[error("Unknown notation: {0}")]
    UnknownNotation(String),
}

impl Error {
    pub(crate) fn invalid_octet(input: &str) -> Self {
        Error::InvalidInput {
            input: input.to_string(),
            expected: Expected::Octet,
        }
    }

    pub(crate) fn invalid_identifier(input: &str) -> Self {
        Error::InvalidInput {
            input: input.to_string(),
            expected: Expected::Identifier,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput { .. })
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

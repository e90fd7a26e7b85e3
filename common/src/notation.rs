//! # Identifier Notations
//!
//! The four textual shapes a 48-bit identifier may be written in:
//! * **plain**: `a0b1c2d3e4f5`
//! * **hyphen**: `a0-b1-c2-d3-e4-f5`
//! * **colon**: `a0:b1:c2:d3:e4:f5`
//! * **dot**: `a0b1.c2d3.e4f5`
//!
//! Hex digits are accepted in either case. Separators must sit exactly
//! between groups; leading, trailing, missing or mixed separators are rejected.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Number of hex digits in a 48-bit identifier.
pub const HEX_DIGITS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    Plain,
    Hyphen,
    Colon,
    Dot,
}

impl Notation {
    pub const ALL: [Notation; 4] = [
        Notation::Plain,
        Notation::Hyphen,
        Notation::Colon,
        Notation::Dot,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Notation::Plain => "plain",
            Notation::Hyphen => "hyphen",
            Notation::Colon => "colon",
            Notation::Dot => "dot",
        }
    }

    /// The separator and the number of hex digits between separators.
    fn layout(&self) -> Option<(char, usize)> {
        match self {
            Notation::Plain => None,
            Notation::Hyphen => Some(('-', 2)),
            Notation::Colon => Some((':', 2)),
            Notation::Dot => Some(('.', 4)),
        }
    }

    /// Whether `text` is written in exactly this notation.
    pub fn matches(&self, text: &str) -> bool {
        match self.layout() {
            None => text.len() == HEX_DIGITS && is_hex(text),
            Some((separator, width)) => {
                let groups: Vec<&str> = text.split(separator).collect();
                groups.len() == HEX_DIGITS / width
                    && groups.iter().all(|group| group.len() == width && is_hex(group))
            }
        }
    }

    /// Returns the notation `text` is written in, if any.
    pub fn detect(text: &str) -> Option<Notation> {
        Self::ALL.into_iter().find(|notation| notation.matches(text))
    }

    /// Lays out twelve lowercase hex digits in this notation.
    pub(crate) fn render(&self, normalized: &str) -> String {
        let Some((separator, width)) = self.layout() else {
            return normalized.to_string();
        };

        let groups: Vec<&str> = normalized
            .as_bytes()
            .chunks(width)
            .filter_map(|chunk| std::str::from_utf8(chunk).ok())
            .collect();

        groups.join(separator.to_string().as_str())
    }
}

fn is_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Notation {
    type Err = Error;

    /// Parses a notation name (`plain`, `hyphen`, `colon`, `dot`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|notation| notation.name() == lower)
            .ok_or_else(|| Error::UnknownNotation(s.to_string()))
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

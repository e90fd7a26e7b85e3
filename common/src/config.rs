use crate::error::Result;
use crate::identifier::{DEFAULT_FRAGMENT_BITS, ExtendedIdentifier};
use crate::notation::Notation;

/// Rendering preferences for callers that print identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Notation used by [`Config::render`].
    pub notation: Notation,
    /// Width of the assigned prefix (OUI or CID) used by [`Config::split`].
    ///
    /// 24 for MA-L assignments, 36 for MA-S.
    pub prefix_bits: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notation: Notation::Colon,
            prefix_bits: DEFAULT_FRAGMENT_BITS,
        }
    }
}

impl Config {
    pub fn render(&self, id: &ExtendedIdentifier) -> String {
        id.to_notation(self.notation)
    }

    /// Splits `id` into its assigned prefix and the remaining digits.
    pub fn split(&self, id: &ExtendedIdentifier) -> Result<[String; 2]> {
        id.to_fragments(self.prefix_bits)
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

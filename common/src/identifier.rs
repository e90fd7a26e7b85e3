//! # 48-bit Extended Identifiers
//!
//! Models IEEE EUI-48 (extended unique) and ELI-48 (extended local)
//! identifiers. The first 24 or 36 bits of an EUI are its organizationally
//! unique identifier (OUI); the same bits of an ELI are its company ID (CID).
//!
//! An [`ExtendedIdentifier`] is built once from text in any of the
//! [`Notation`]s and never changes afterwards. Every other view of it
//! (normalized digits, octets, bit strings, classification) is derived.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::notation::{HEX_DIGITS, Notation};
use crate::octet::Octet;
use crate::vendors;

/// Total width of an identifier in bits.
pub const BITS: u32 = 48;

/// Default fragment width: a 24-bit OUI or CID.
pub const DEFAULT_FRAGMENT_BITS: u32 = 24;

/// Classification of an identifier by the low bits of its first octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierType {
    /// Low two bits `00`: an EUI carrying an OUI.
    Unique,
    /// Low four bits `1010`: an ELI carrying a CID.
    Local,
    Unknown,
}

impl IdentifierType {
    /// Classifies by the first octet alone. The unique check runs first.
    pub fn classify(first: &Octet) -> Self {
        let value = first.value();
        if value & 0b0011 == 0b0000 {
            IdentifierType::Unique
        } else if value & 0b1111 == 0b1010 {
            IdentifierType::Local
        } else {
            IdentifierType::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierType::Unique => "unique",
            IdentifierType::Local => "local",
            IdentifierType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated EUI-48 / ELI-48.
///
/// Equality and hashing compare the 48-bit value, so the same identifier
/// written in two notations compares equal.
#[derive(Debug, Clone)]
pub struct ExtendedIdentifier {
    original: String,
    notation: Notation,
    bytes: [u8; 6],
}

impl ExtendedIdentifier {
    /// Parses an identifier written in one of the four accepted notations.
    pub fn new(identifier: &str) -> Result<Self> {
        let Some(notation) = Notation::detect(identifier) else {
            debug!(input = identifier, "rejected identifier: no accepted notation");
            return Err(Error::invalid_identifier(identifier));
        };

        let normalized = normalize(identifier);
        if normalized.len() != HEX_DIGITS {
            return Err(Error::invalid_identifier(identifier));
        }

        let mut bytes = [0u8; 6];
        for (byte, i) in bytes.iter_mut().zip((0..HEX_DIGITS).step_by(2)) {
            *byte = u8::from_str_radix(&normalized[i..i + 2], 16)
                .map_err(|_| Error::invalid_identifier(identifier))?;
        }

        Ok(Self {
            original: identifier.to_string(),
            notation,
            bytes,
        })
    }

    /// Builds an identifier from raw bytes. Its original text is the plain notation.
    pub fn from_bytes(bytes: [u8; 6]) -> Self {
        let original = bytes.iter().map(|b| format!("{b:02x}")).collect();
        Self {
            original,
            notation: Notation::Plain,
            bytes,
        }
    }

    /// Whether `identifier` would be accepted by [`ExtendedIdentifier::new`].
    pub fn is_valid(identifier: &str) -> bool {
        Notation::detect(identifier).is_some()
    }

    /// The text as passed in by the caller.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The notation the original text was written in.
    pub fn notation(&self) -> Notation {
        self.notation
    }

    pub fn to_bytes(&self) -> [u8; 6] {
        self.bytes
    }

    /// Twelve lowercase hex digits without separators.
    pub fn normalized(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    pub fn octets(&self) -> [Octet; 6] {
        self.bytes.map(Octet::from)
    }

    pub fn first_octet(&self) -> Octet {
        Octet::from(self.bytes[0])
    }

    /// The identifier as an unsigned integer, `0..=0xffff_ffff_ffff`.
    pub fn decimal(&self) -> u64 {
        self.bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
    }

    /// 48 bit characters, octet 0 first, each octet MSB first.
    pub fn binary(&self) -> String {
        self.octets().iter().map(Octet::binary).collect()
    }

    /// 48 bit characters, octet 0 first, each octet LSB first.
    pub fn reverse_binary(&self) -> String {
        self.octets().iter().map(Octet::reverse_binary).collect()
    }

    pub fn kind(&self) -> IdentifierType {
        IdentifierType::classify(&self.first_octet())
    }

    pub fn has_oui(&self) -> bool {
        self.kind() == IdentifierType::Unique
    }

    pub fn has_cid(&self) -> bool {
        self.kind() == IdentifierType::Local
    }

    /// Splits the normalized digits after `bits / 4` characters.
    ///
    /// `bits` must be a positive multiple of 4 no larger than 48. At 48 the
    /// second fragment is empty.
    pub fn to_fragments(&self, bits: u32) -> Result<[String; 2]> {
        if bits == 0 || bits % 4 != 0 || bits > BITS {
            return Err(Error::FragmentBits(bits));
        }
        Ok(self.split_at_digit((bits / 4) as usize))
    }

    /// The 24-bit prefix and the remaining 24 bits.
    pub fn fragments(&self) -> [String; 2] {
        self.split_at_digit((DEFAULT_FRAGMENT_BITS / 4) as usize)
    }

    fn split_at_digit(&self, digits: usize) -> [String; 2] {
        let normalized = self.normalized();
        let (first, second) = normalized.split_at(digits);
        [first.to_string(), second.to_string()]
    }

    pub fn to_notation(&self, notation: Notation) -> String {
        notation.render(&self.normalized())
    }

    pub fn to_plain_notation(&self) -> String {
        self.to_notation(Notation::Plain)
    }

    pub fn to_hyphen_notation(&self) -> String {
        self.to_notation(Notation::Hyphen)
    }

    pub fn to_colon_notation(&self) -> String {
        self.to_notation(Notation::Colon)
    }

    pub fn to_dot_notation(&self) -> String {
        self.to_notation(Notation::Dot)
    }

    /// Looks up the vendor owning this identifier's OUI.
    ///
    /// Only unique identifiers carry an OUI; everything else yields `None`.
    pub fn vendor(&self) -> Option<String> {
        vendors::get_vendor(self)
    }
}

/// Lowercases and drops every character that is not a hex digit.
fn normalize(identifier: &str) -> String {
    identifier
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(char::is_ascii_hexdigit)
        .collect()
}

impl PartialEq for ExtendedIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for ExtendedIdentifier {}

impl Hash for ExtendedIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl From<[u8; 6]> for ExtendedIdentifier {
    fn from(bytes: [u8; 6]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl FromStr for ExtendedIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ExtendedIdentifier {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for ExtendedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_colon_notation())
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

//! # Octet
//!
//! A single byte written as two hexadecimal digits, with its bit-string
//! renderings in both transmission orders.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};

/// Equality and hashing look at the byte value only, so `"A0"` and `"a0"`
/// are the same octet.
#[derive(Debug, Clone)]
pub struct Octet {
    original: String,
    value: u8,
}

impl PartialEq for Octet {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Octet {}

impl Hash for Octet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl Octet {
    /// Parses exactly two hexadecimal digits, in either case.
    pub fn new(digits: &str) -> Result<Self> {
        let bytes = digits.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_hexdigit) {
            debug!(input = digits, "rejected octet");
            return Err(Error::invalid_octet(digits));
        }

        let value = u8::from_str_radix(digits, 16).map_err(|_| Error::invalid_octet(digits))?;

        Ok(Self {
            original: digits.to_string(),
            value,
        })
    }

    /// The digits as passed in.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// The digits in lowercase.
    pub fn normalized(&self) -> String {
        self.original.to_ascii_lowercase()
    }

    /// Eight `0`/`1` characters, most significant bit first.
    pub fn binary(&self) -> String {
        format!("{:08b}", self.value)
    }

    /// The bits of [`Octet::binary`] in reverse order, least significant
    /// first. This is the order 802 links put the bits on the wire.
    pub fn reverse_binary(&self) -> String {
        format!("{:08b}", self.value.reverse_bits())
    }
}

impl From<u8> for Octet {
    fn from(value: u8) -> Self {
        Self {
            original: format!("{value:02x}"),
            value,
        }
    }
}

impl FromStr for Octet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Octet {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Octet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.value)
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

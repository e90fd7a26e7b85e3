//! # MAC Addresses
//!
//! A [`MacAddress`] is an [`ExtendedIdentifier`] with the 802 address bits of
//! its first octet interpreted:
//! * bit 0 (I/G): set for multicast, clear for unicast.
//! * bit 1 (U/L): for unicast addresses, set when locally administered.
//!
//! The U/L reading only applies to unicast addresses. A multicast address is
//! neither universally nor locally administered here.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use pnet::util::MacAddr;

use crate::error::{Error, Result};
use crate::identifier::ExtendedIdentifier;

const GROUP_BIT: u8 = 0b01;
const LOCAL_BIT: u8 = 0b10;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacAddress {
    identifier: ExtendedIdentifier,
}

impl MacAddress {
    /// Parses a MAC address. Accepts exactly what [`ExtendedIdentifier::new`] accepts.
    pub fn new(address: &str) -> Result<Self> {
        ExtendedIdentifier::new(address).map(Self::from)
    }

    /// `ff:ff:ff:ff:ff:ff`
    pub fn broadcast() -> Self {
        Self::from(ExtendedIdentifier::from_bytes([0xff; 6]))
    }

    pub fn identifier(&self) -> &ExtendedIdentifier {
        &self.identifier
    }

    pub fn into_identifier(self) -> ExtendedIdentifier {
        self.identifier
    }

    fn first_byte(&self) -> u8 {
        self.identifier.first_octet().value()
    }

    pub fn is_broadcast(&self) -> bool {
        self.identifier.normalized() == "ffffffffffff"
    }

    pub fn is_multicast(&self) -> bool {
        self.first_byte() & GROUP_BIT != 0
    }

    pub fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }

    /// Universally administered: a unicast address with the U/L bit clear.
    pub fn is_uaa(&self) -> bool {
        self.is_unicast() && self.first_byte() & LOCAL_BIT == 0
    }

    /// Locally administered: a unicast address with the U/L bit set.
    pub fn is_laa(&self) -> bool {
        self.is_unicast() && self.first_byte() & LOCAL_BIT != 0
    }
}

impl Deref for MacAddress {
    type Target = ExtendedIdentifier;

    fn deref(&self) -> &Self::Target {
        &self.identifier
    }
}

impl AsRef<ExtendedIdentifier> for MacAddress {
    fn as_ref(&self) -> &ExtendedIdentifier {
        &self.identifier
    }
}

impl From<ExtendedIdentifier> for MacAddress {
    fn from(identifier: ExtendedIdentifier) -> Self {
        Self { identifier }
    }
}

impl From<MacAddress> for ExtendedIdentifier {
    fn from(mac: MacAddress) -> Self {
        mac.identifier
    }
}

impl From<MacAddr> for MacAddress {
    fn from(mac: MacAddr) -> Self {
        let MacAddr(a, b, c, d, e, f) = mac;
        Self::from(ExtendedIdentifier::from_bytes([a, b, c, d, e, f]))
    }
}

impl From<&MacAddress> for MacAddr {
    fn from(mac: &MacAddress) -> Self {
        let [a, b, c, d, e, f] = mac.to_bytes();
        MacAddr(a, b, c, d, e, f)
    }
}

impl From<MacAddress> for MacAddr {
    fn from(mac: MacAddress) -> Self {
        MacAddr::from(&mac)
    }
}

impl FromStr for MacAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for MacAddress {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.identifier, f)
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

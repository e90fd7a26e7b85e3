//! # EUI-48 / ELI-48 identifiers
//!
//! Parsing, validation, classification and reformatting of IEEE 48-bit
//! extended identifiers, the family MAC addresses belong to.
//!
//! * **[`octet`]**: one byte as two hex digits, with its bit strings.
//! * **[`identifier`]**: the 48-bit identifier itself and its unique/local classification.
//! * **[`mac`]**: MAC specific reading of the same bits (broadcast, multicast, UAA/LAA).
//! * **[`notation`]**: the accepted textual shapes.
//!
//! ```
//! use eui48_common::MacAddress;
//!
//! let mac: MacAddress = "AA-B1-C2-D3-E4-F5".parse().unwrap();
//! assert!(mac.is_laa());
//! assert_eq!(mac.to_dot_notation(), "aab1.c2d3.e4f5");
//! ```

pub mod config;
pub mod error;
pub mod identifier;
pub mod mac;
pub mod notation;
pub mod octet;
pub mod vendors;

pub use error::{Error, Result};
pub use identifier::{ExtendedIdentifier, IdentifierType};
pub use mac::MacAddress;
pub use notation::Notation;
pub use octet::Octet;

#![cfg(test)]
use eui48_common::{IdentifierType, MacAddress};

use crate::util::spellings;

#[test]
fn broadcast_address() -> anyhow::Result<()> {
    for text in spellings("ffffffffffff") {
        let mac = MacAddress::new(&text)?;
        assert!(mac.is_broadcast());
        assert!(mac.is_multicast());
        assert!(!mac.is_unicast());
        assert!(!mac.is_uaa());
        assert!(!mac.is_laa());
        assert_eq!(mac.kind(), IdentifierType::Unknown);
    }
    Ok(())
}

#[test]
fn bridge_group_address() -> anyhow::Result<()> {
    let mac = MacAddress::new("0180c2000000")?;

    assert!(mac.is_multicast());
    assert!(!mac.is_unicast());
    assert!(!mac.is_uaa());
    assert!(!mac.is_laa());
    Ok(())
}

#[test]
fn locally_administered_unicast() -> anyhow::Result<()> {
    let mac = MacAddress::new("aab1c2d3e4f5")?;

    assert!(mac.is_unicast());
    assert!(mac.is_laa());
    assert!(!mac.is_uaa());
    assert_eq!(mac.kind(), IdentifierType::Local);
    Ok(())
}

/// UAA and LAA partition the unicast addresses and exclude multicast ones.
#[test]
fn administration_follows_first_octet() {
    for first in 0..=u8::MAX {
        let mac = MacAddress::from(eui48_common::ExtendedIdentifier::from_bytes([
            first, 0, 0, 0, 0, 1,
        ]));

        assert_eq!(mac.is_multicast(), first & 1 == 1);
        assert_eq!(mac.is_unicast(), !mac.is_multicast());
        if mac.is_unicast() {
            assert!(mac.is_uaa() ^ mac.is_laa());
            assert_eq!(mac.is_laa(), first & 2 == 2);
        } else {
            assert!(!mac.is_uaa() && !mac.is_laa());
        }
        assert!(!mac.is_broadcast());
    }
}

#[test]
fn leading_separator_is_rejected() {
    let err = MacAddress::new("-0a-1b-2c-3d-4e-5f").unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(err.to_string(), "Pass in 12 hexadecimal digits.");
}

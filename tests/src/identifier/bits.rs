#![cfg(test)]
use eui48_common::{ExtendedIdentifier, IdentifierType, Octet};

use crate::util::SAMPLES;

#[test]
fn bit_strings_are_48_binary_digits() -> anyhow::Result<()> {
    for digits in SAMPLES {
        let id = ExtendedIdentifier::new(digits)?;
        let binary = id.binary();
        let reverse = id.reverse_binary();

        assert_eq!(binary.len(), 48);
        assert_eq!(reverse.len(), 48);
        assert!(binary.chars().chain(reverse.chars()).all(|c| c == '0' || c == '1'));

        for i in 0..6 {
            let slice = &binary[i * 8..(i + 1) * 8];
            let reversed: String = slice.chars().rev().collect();
            assert_eq!(reversed, &reverse[i * 8..(i + 1) * 8], "{digits} octet {i}");
        }
    }
    Ok(())
}

/// Unique and local can never both hold, for any first octet.
#[test]
fn oui_and_cid_are_exclusive_for_every_first_octet() -> anyhow::Result<()> {
    for first in 0..=u8::MAX {
        let id = ExtendedIdentifier::from_bytes([first, 0x1b, 0x2c, 0x3d, 0x4e, 0x5f]);
        assert!(!(id.has_oui() && id.has_cid()), "first octet {first:#04x}");

        let octet = Octet::from(first);
        let binary = octet.binary();
        let unique = &binary[6..8] == "00";
        let local = &binary[4..8] == "1010";
        assert!(!(unique && local));

        let expected = match (unique, local) {
            (true, _) => IdentifierType::Unique,
            (false, true) => IdentifierType::Local,
            _ => IdentifierType::Unknown,
        };
        assert_eq!(id.kind(), expected);

        let text = id.to_hyphen_notation();
        assert_eq!(ExtendedIdentifier::new(&text)?.kind(), expected);
    }
    Ok(())
}

#[test]
fn fragments_split_normalized_digits() -> anyhow::Result<()> {
    let id = ExtendedIdentifier::new("A0:B1:C2:D3:E4:F5")?;

    assert_eq!(id.fragments(), ["a0b1c2", "d3e4f5"]);
    assert_eq!(id.to_fragments(24)?, ["a0b1c2", "d3e4f5"]);
    assert_eq!(id.to_fragments(36)?, ["a0b1c2d3e", "4f5"]);

    for bits in (4..=48).step_by(4) {
        let [first, second] = id.to_fragments(bits)?;
        assert_eq!(first.len(), (bits / 4) as usize);
        assert_eq!(format!("{first}{second}"), id.normalized());
    }
    Ok(())
}

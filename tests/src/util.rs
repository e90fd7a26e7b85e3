#![cfg(test)]
use eui48_common::Notation;

/// Lays out twelve lowercase hex digits in `notation`.
pub fn write_as(digits: &str, notation: Notation) -> String {
    let pairs: Vec<&str> = (0..12).step_by(2).map(|i| &digits[i..i + 2]).collect();
    match notation {
        Notation::Plain => digits.to_string(),
        Notation::Hyphen => pairs.join("-"),
        Notation::Colon => pairs.join(":"),
        Notation::Dot => pairs.chunks(2).map(|c| c.concat()).collect::<Vec<_>>().join("."),
    }
}

/// Every accepted spelling of `digits`: four notations, lower and upper case.
pub fn spellings(digits: &str) -> Vec<String> {
    Notation::ALL
        .into_iter()
        .flat_map(|notation| {
            let text = write_as(digits, notation);
            [text.clone(), text.to_ascii_uppercase()]
        })
        .collect()
}

/// A spread of identifiers covering every first-octet class.
pub const SAMPLES: [&str; 6] = [
    "a0b1c2d3e4f5",
    "0a1b2c3d4e5f",
    "ffffffffffff",
    "0180c2000000",
    "aab1c2d3e4f5",
    "000000000000",
];

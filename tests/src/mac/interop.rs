#![cfg(test)]
use std::collections::HashSet;

use eui48_common::config::Config;
use eui48_common::{ExtendedIdentifier, MacAddress, Notation};
use pnet::util::MacAddr;

use crate::util::{SAMPLES, spellings};

#[test]
fn pnet_round_trip() -> anyhow::Result<()> {
    for digits in SAMPLES {
        let mac = MacAddress::new(digits)?;
        let pnet_mac: MacAddr = mac.clone().into();

        assert_eq!(pnet_mac.to_string(), mac.to_colon_notation());
        assert_eq!(MacAddress::from(pnet_mac), mac);
    }
    Ok(())
}

#[test]
fn spellings_hash_to_one_value() -> anyhow::Result<()> {
    let set = spellings("0a1b2c3d4e5f")
        .iter()
        .map(|text| text.parse::<ExtendedIdentifier>())
        .collect::<Result<HashSet<_>, _>>()?;

    assert_eq!(set.len(), 1);
    Ok(())
}

#[test]
fn config_renders_macs() -> anyhow::Result<()> {
    let mac: MacAddress = "a0b1c2d3e4f5".parse()?;
    let cfg = Config {
        notation: "hyphen".parse::<Notation>()?,
        ..Config::default()
    };

    assert_eq!(cfg.render(&mac), "a0-b1-c2-d3-e4-f5");
    assert_eq!(cfg.split(&mac)?, ["a0b1c2", "d3e4f5"]);
    assert_eq!(mac.to_string(), "a0:b1:c2:d3:e4:f5");
    Ok(())
}

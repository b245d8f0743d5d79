// Copyright (c) Raffle Developers
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use alloy::primitives::Address;

use crate::config::{AppConfig, ChainId, ChainRegistry};

#[test]
fn chain_id_parses_hex_forms() {
    assert_eq!(ChainId::from_hex("0x7a69").unwrap(), ChainId(31337));
    assert_eq!(ChainId::from_hex("7a69").unwrap(), ChainId(31337));
    assert!(ChainId::from_hex("0xnope").is_err());
}

#[test]
fn bundled_registry_resolves_local_chain() {
    let registry = ChainRegistry::bundled();
    assert_eq!(
        registry.address_for(ChainId(31337)),
        Some("0x5fbdb2315678afecb367f032d93f642f64180aa3")
    );
    assert!(registry.contract_for(ChainId(31337)).is_some());
}

#[test]
fn unknown_chain_resolves_to_nothing() {
    let registry = ChainRegistry::bundled();
    assert_eq!(registry.address_for(ChainId(1)), None);
    assert_eq!(registry.contract_for(ChainId(1)), None);
}

/// Only the first address per chain is consulted.
#[test]
fn first_listed_address_wins() {
    let registry: ChainRegistry = serde_json::from_str(
        r#"{"5": [
            "0x00000000000000000000000000000000000000aa",
            "0x00000000000000000000000000000000000000bb"
        ]}"#,
    )
    .unwrap();
    assert_eq!(
        registry.contract_for(ChainId(5)),
        Some(Address::from_str("0x00000000000000000000000000000000000000aa").unwrap())
    );
}

/// A malformed configured address is treated like an absent one.
#[test]
fn malformed_address_resolves_to_nothing() {
    let registry: ChainRegistry = serde_json::from_str(r#"{"5": ["not-an-address"]}"#).unwrap();
    assert_eq!(registry.address_for(ChainId(5)), Some("not-an-address"));
    assert_eq!(registry.contract_for(ChainId(5)), None);
}

#[test]
fn app_config_defaults_to_bundled_addresses() {
    let config: AppConfig = serde_json::from_str(
        r#"{
            "rpc_url": "http://localhost:8545",
            "signer_key": "0x01"
        }"#,
    )
    .unwrap();
    assert_eq!(
        config.addresses.address_for(ChainId(31337)),
        ChainRegistry::bundled().address_for(ChainId(31337))
    );
}

// Copyright (c) Raffle Developers
// SPDX-License-Identifier: Apache-2.0

use std::{collections::BTreeMap, fmt, path::Path, str::FromStr};

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::Error;

/// A numeric chain identifier, as reported by wallets and RPC nodes.
///
/// Wallet contexts report the hex form (`0x7a69`); registry keys and RPC
/// nodes use the decimal form (`31337`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    /// Parses a chain identifier from its hex form, with or without the
    /// `0x` prefix.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let digits = hex.strip_prefix("0x").unwrap_or(hex);
        Ok(ChainId(u64::from_str_radix(digits, 16)?))
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The deployed raffle contracts, keyed by chain identifier.
///
/// This is the build-time constants mapping of the dapp: keys are decimal
/// chain identifiers, values are ordered lists of deployment addresses. Only
/// the first address per chain is ever consulted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainRegistry(BTreeMap<String, Vec<String>>);

impl ChainRegistry {
    /// The registry compiled into the binary.
    pub fn bundled() -> Self {
        serde_json::from_str(include_str!("../constants/contract_addresses.json"))
            .expect("bundled contract addresses are valid JSON")
    }

    /// Returns the first deployed address for the given chain, if any.
    ///
    /// Absence is a legitimate steady state: it means the user is connected
    /// to a network the raffle is not deployed on.
    pub fn address_for(&self, chain_id: ChainId) -> Option<&str> {
        self.0
            .get(&chain_id.to_string())?
            .first()
            .map(String::as_str)
    }

    /// Like [`Self::address_for`], but parsed into an [`Address`].
    ///
    /// A malformed configured address is reported once and then treated the
    /// same as an absent one.
    pub fn contract_for(&self, chain_id: ChainId) -> Option<Address> {
        let raw = self.address_for(chain_id)?;
        match Address::from_str(raw) {
            Ok(address) => Some(address),
            Err(error) => {
                warn!(%chain_id, %raw, %error, "malformed contract address in registry");
                None
            }
        }
    }
}

/// The application configuration assembled by the shell.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// The HTTP endpoint of the JSON-RPC node.
    pub rpc_url: String,
    /// The hex-encoded private key used to sign entry transactions.
    pub signer_key: String,
    /// The deployed contract addresses per chain.
    #[serde(default = "ChainRegistry::bundled")]
    pub addresses: ChainRegistry,
}

impl AppConfig {
    /// Reads the configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

// Copyright (c) Raffle Developers
// SPDX-License-Identifier: Apache-2.0

use std::num::ParseIntError;

use thiserror::Error;

/// Errors surfaced by the raffle client.
///
/// Remote-call failures during a refresh or a submission are logged and
/// swallowed at the call site; the variants below are what the constructors
/// and the on-chain bindings can return.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Chain identifier parsing error.
    #[error(transparent)]
    ParseIntError(#[from] ParseIntError),

    /// URL parsing error.
    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),

    /// Signer key parsing error.
    #[error(transparent)]
    SignerError(#[from] alloy::signers::local::LocalSignerError),

    /// Hex parsing error (addresses).
    #[error(transparent)]
    FromHexError(#[from] alloy::primitives::hex::FromHexError),

    /// Amount parsing error (entrance fee).
    #[error(transparent)]
    ParseAmountError(#[from] alloy::primitives::ruint::ParseError),

    /// Contract call error (read or write).
    #[error(transparent)]
    ContractError(#[from] alloy::contract::Error),

    /// RPC transport error.
    #[error(transparent)]
    RpcError(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    /// The transaction was dropped or replaced before reaching a confirmation.
    #[error(transparent)]
    ConfirmationError(#[from] alloy::providers::PendingTransactionError),

    /// Rejection reported by the wallet or the test harness.
    #[error("submission rejected: {0}")]
    Rejected(String),
}

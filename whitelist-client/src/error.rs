// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy::primitives::B256;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ethereum node error: {0}")]
    Ethereum(#[from] whitelist_ethereum::common::EthereumError),
    #[error("contract error: {0}")]
    Contract(#[from] alloy::contract::Error),
    #[error("transaction confirmation error: {0}")]
    PendingTransaction(#[from] alloy::transports::TransportError),
    #[error("transaction {hash} reverted")]
    TransactionReverted { hash: B256 },
    #[error("invalid signing key: {0}")]
    InvalidKey(#[from] alloy_signer_local::LocalSignerError),
    #[error("config error: {0}")]
    Config(#[from] crate::config::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("a contract address must be provided via `--contract` or the configuration file")]
    NoContractAddress,
    #[error("either `--wallet` or the WHITELIST_WALLET environment variable must be set")]
    NoWallet,
    #[error("no wallet is connected")]
    NotConnected,
    #[error("the wallet is already connected")]
    AlreadyConnected,
    #[error("a join transaction is already pending")]
    JoinPending,
    #[error("the active address has already joined the whitelist")]
    AlreadyJoined,
}

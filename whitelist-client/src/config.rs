// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use url::Url;

/// The chain id of the Goerli testnet, where the registry is deployed.
pub const GOERLI_CHAIN_ID: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// The constants a page build carries: which node to talk to, which chain
/// it must serve, and where the registry lives.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DappConfig {
    /// The HTTP endpoint of the Ethereum node.
    pub rpc_url: Url,
    /// The chain id the node is required to serve.
    pub chain_id: u64,
    /// The deployed address of the whitelist registry.
    pub contract_address: Address,
}

impl DappConfig {
    /// Reads a configuration from a JSON file.
    pub fn read(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

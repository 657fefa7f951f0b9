// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use alloy::primitives::Address;
use alloy_signer_local::PrivateKeySigner;
use url::Url;

use crate::{
    config::{DappConfig, GOERLI_CHAIN_ID},
    error::Error,
};

/// Command-line options for the whitelist dapp.
///
/// Individual flags take precedence over the values of `--config`.
#[derive(Clone, Debug, clap::Args)]
pub struct ClientOptions {
    /// The HTTP endpoint of the Ethereum node.
    #[arg(long, env = "WHITELIST_RPC_URL")]
    pub rpc_url: Option<Url>,

    /// The chain id the node is required to serve.
    #[arg(long, env = "WHITELIST_CHAIN_ID")]
    pub chain_id: Option<u64>,

    /// The deployed address of the whitelist registry.
    #[arg(long = "contract", env = "WHITELIST_CONTRACT")]
    pub contract_address: Option<Address>,

    /// Sets the file holding the hex-encoded signing key for the wallet.
    #[arg(long = "wallet")]
    pub wallet_path: Option<PathBuf>,

    /// Reads the node URL, chain id and contract address from a JSON
    /// configuration file.
    #[arg(long = "config")]
    pub config_path: Option<PathBuf>,
}

impl ClientOptions {
    /// Resolves the effective configuration from the flags and the optional
    /// configuration file.
    pub fn config(&self) -> Result<DappConfig, Error> {
        let file = match &self.config_path {
            Some(path) => Some(DappConfig::read(path)?),
            None => None,
        };
        let rpc_url = self
            .rpc_url
            .clone()
            .or_else(|| file.as_ref().map(|config| config.rpc_url.clone()))
            .unwrap_or_else(|| {
                "http://localhost:8545"
                    .parse()
                    .expect("parsing a literal URL should not fail")
            });
        let chain_id = self
            .chain_id
            .or_else(|| file.as_ref().map(|config| config.chain_id))
            .unwrap_or(GOERLI_CHAIN_ID);
        let contract_address = self
            .contract_address
            .or_else(|| file.as_ref().map(|config| config.contract_address))
            .ok_or(Error::NoContractAddress)?;
        Ok(DappConfig {
            rpc_url,
            chain_id,
            contract_address,
        })
    }

    /// Reads the wallet's signing key from `--wallet` or the path in the
    /// `WHITELIST_WALLET` environment variable.
    pub fn signer(&self) -> Result<PrivateKeySigner, Error> {
        let path = match &self.wallet_path {
            Some(path) => path.clone(),
            None => std::env::var("WHITELIST_WALLET")
                .map(PathBuf::from)
                .map_err(|_| Error::NoWallet)?,
        };
        let key = std::fs::read_to_string(&path)?;
        Ok(key.trim().parse()?)
    }
}

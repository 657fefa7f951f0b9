// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy::{
    primitives::{Address, U256},
    providers::{Provider, ProviderBuilder, RootProvider},
    transports::http::{reqwest::Client, Http},
};
use async_trait::async_trait;
use url::Url;

use crate::{
    client::{get_block_id, EthereumQueries},
    common::EthereumError,
};

pub type HttpProvider = RootProvider<Http<Client>>;

/// The Ethereum endpoint and its provider used for accessing the Ethereum node.
pub struct EthereumClient<M> {
    pub provider: M,
}

impl EthereumClient<HttpProvider> {
    /// Connects to an existing Ethereum node and creates an `EthereumClient`.
    pub fn new(url: Url) -> Self {
        let provider = ProviderBuilder::new().on_http(url);
        Self { provider }
    }
}

#[async_trait]
impl<M> EthereumQueries for EthereumClient<M>
where
    M: Provider<Http<Client>> + Send + Sync,
{
    type Error = EthereumError;

    async fn get_accounts(&self) -> Result<Vec<Address>, EthereumError> {
        Ok(self.provider.get_accounts().await?)
    }

    async fn get_block_number(&self) -> Result<u64, EthereumError> {
        Ok(self.provider.get_block_number().await?)
    }

    async fn get_chain_id(&self) -> Result<u64, EthereumError> {
        Ok(self.provider.get_chain_id().await?)
    }

    async fn get_balance(
        &self,
        address: Address,
        block_number: Option<u64>,
    ) -> Result<U256, EthereumError> {
        let block_id = get_block_id(block_number);
        Ok(self.provider.get_balance(address).block_id(block_id).await?)
    }
}

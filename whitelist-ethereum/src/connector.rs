// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{Provider, ProviderBuilder},
    transports::http::{reqwest::Client, Http},
};
use alloy_signer_local::PrivateKeySigner;
use url::Url;

use crate::{
    common::EthereumError,
    provider::{EthereumClient, HttpProvider},
};

/// Produces node handles for a locally held signing key.
///
/// Every handle acquisition verifies that the node serves the required
/// chain before the handle is given out, so a session on the wrong network
/// never reaches the contract.
pub struct WalletConnector {
    rpc_url: Url,
    required_chain_id: u64,
    wallet: PrivateKeySigner,
}

impl WalletConnector {
    pub fn new(rpc_url: Url, required_chain_id: u64, wallet: PrivateKeySigner) -> Self {
        Self {
            rpc_url,
            required_chain_id,
            wallet,
        }
    }

    /// The address of the signing key behind this connector.
    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    pub fn required_chain_id(&self) -> u64 {
        self.required_chain_id
    }

    /// A read-only provider handle.
    pub async fn provider(&self) -> Result<EthereumClient<HttpProvider>, EthereumError> {
        let client = EthereumClient::new(self.rpc_url.clone());
        self.verify_chain_id(&client.provider).await?;
        Ok(client)
    }

    /// A signer handle, able to submit state-changing transactions on
    /// behalf of the wallet.
    pub async fn signer(
        &self,
    ) -> Result<EthereumClient<impl Provider<Http<Client>>>, EthereumError> {
        let wallet = EthereumWallet::from(self.wallet.clone());
        let provider = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(wallet)
            .on_http(self.rpc_url.clone());
        self.verify_chain_id(&provider).await?;
        Ok(EthereumClient { provider })
    }

    async fn verify_chain_id<P>(&self, provider: &P) -> Result<(), EthereumError>
    where
        P: Provider<Http<Client>>,
    {
        let found = provider.get_chain_id().await?;
        if found != self.required_chain_id {
            return Err(EthereumError::ChainIdMismatch {
                expected: self.required_chain_id,
                found,
            });
        }
        Ok(())
    }
}

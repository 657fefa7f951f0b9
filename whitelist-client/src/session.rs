// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy::primitives::{Address, B256};
use async_trait::async_trait;
use tracing::info;
use whitelist_ethereum::{client::EthereumQueries as _, connector::WalletConnector};

use crate::{controller::DappContext, error::Error, registry::Whitelist};

/// A wallet session bound to one deployed whitelist registry.
///
/// Constructed once per page lifecycle. Every operation asks the connector
/// for a fresh handle, so the network check runs before each remote call.
pub struct DappSession {
    connector: WalletConnector,
    contract_address: Address,
}

impl DappSession {
    pub fn new(connector: WalletConnector, contract_address: Address) -> Self {
        Self {
            connector,
            contract_address,
        }
    }

    /// The address of the wallet behind this session.
    pub fn wallet_address(&self) -> Address {
        self.connector.address()
    }
}

#[async_trait]
impl DappContext for DappSession {
    async fn connect(&self) -> Result<Address, Error> {
        let provider = self.connector.provider().await?;
        let address = self.connector.address();
        let balance = provider.get_balance(address, None).await?;
        info!(%address, %balance, "wallet session established");
        Ok(address)
    }

    async fn is_whitelisted(&self, address: Address) -> Result<bool, Error> {
        let provider = self.connector.provider().await?;
        let registry = Whitelist::new(self.contract_address, provider.provider);
        Ok(registry.whitelistedAddresses(address).call().await?._0)
    }

    async fn whitelisted_count(&self) -> Result<u64, Error> {
        let provider = self.connector.provider().await?;
        let registry = Whitelist::new(self.contract_address, provider.provider);
        let count = registry.numAddressedWhitelisted().call().await?._0;
        // The registry caps membership far below `u64::MAX`.
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }

    async fn join_whitelist(&self) -> Result<B256, Error> {
        let signer = self.connector.signer().await?;
        let registry = Whitelist::new(self.contract_address, signer.provider);
        let call = registry.addAddressToWhitelist();
        let pending = call.send().await?;
        let receipt = pending.get_receipt().await?;
        if !receipt.status() {
            return Err(Error::TransactionReverted {
                hash: receipt.transaction_hash,
            });
        }
        info!(transaction = %receipt.transaction_hash, "join transaction confirmed");
        Ok(receipt.transaction_hash)
    }
}

// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy::{
    eips::BlockId,
    primitives::{Address, U256},
};
use async_trait::async_trait;

/// The read-only queries the dapp issues against an Ethereum node.
#[async_trait]
pub trait EthereumQueries {
    type Error;

    /// Lists the accounts managed by the node.
    async fn get_accounts(&self) -> Result<Vec<Address>, Self::Error>;

    async fn get_block_number(&self) -> Result<u64, Self::Error>;

    /// The chain id served by the node.
    async fn get_chain_id(&self) -> Result<u64, Self::Error>;

    /// The balance of `address` at `block_number`, or at the latest block.
    async fn get_balance(
        &self,
        address: Address,
        block_number: Option<u64>,
    ) -> Result<U256, Self::Error>;
}

pub fn get_block_id(block_number: Option<u64>) -> BlockId {
    match block_number {
        None => BlockId::latest(),
        Some(number) => BlockId::number(number),
    }
}
